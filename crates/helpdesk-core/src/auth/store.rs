//! Session persistence seam.

use crate::error::Result;
use crate::user::User;
use serde::{Deserialize, Serialize};

/// Credentials persisted across application restarts.
///
/// Nothing is encrypted and no expiry is tracked; whether the token is still
/// valid is solely the server's verdict.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSession {
    pub token: String,
    pub user: User,
}

/// An abstract store for the current session's credentials.
///
/// Backed by a simple durable key-value area (a file on disk in the shipped
/// implementation). Operations are synchronous and cheap; they run at app
/// boot, after login and at logout.
pub trait SessionStore: Send + Sync {
    /// Persists the session, replacing any previous one.
    fn save(&self, session: &StoredSession) -> Result<()>;

    /// Loads the stored session, or `None` when nothing (usable) is stored.
    fn load(&self) -> Result<Option<StoredSession>>;

    /// Removes any stored session. Clearing an empty store is not an error.
    fn clear(&self) -> Result<()>;
}
