//! Remote API seam for authentication.

use crate::error::Result;
use crate::user::User;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Successful login answer: the account plus its bearer token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub user: User,
    pub token: String,
}

/// An abstract client for the server's auth endpoints.
#[async_trait]
pub trait AuthApi: Send + Sync {
    /// Exchanges credentials for a user and a bearer token.
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse>;

    /// Creates an account. The caller logs in afterwards; registration
    /// itself returns no token.
    async fn register(&self, name: &str, email: &str, password: &str) -> Result<()>;
}

/// Receiver for the bearer token attached to subsequent requests.
///
/// The auth use case pushes the token here on hydrate/login and withdraws it
/// on logout, so the transport never reaches into ambient state.
pub trait TokenSink: Send + Sync {
    /// Sets or clears the token used for the `Authorization` header.
    fn set_token(&self, token: Option<String>);
}
