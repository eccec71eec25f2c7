//! Auth endpoints: login and register.

use crate::client::ApiClient;
use async_trait::async_trait;
use helpdesk_core::auth::{AuthApi, LoginResponse};
use helpdesk_core::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct RegisterRequest<'a> {
    name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        self.post_json("/auth/login", &LoginRequest { email, password })
            .await
    }

    async fn register(&self, name: &str, email: &str, password: &str) -> Result<()> {
        self.post_unit(
            "/auth/register",
            &RegisterRequest {
                name,
                email,
                password,
            },
        )
        .await
    }
}
