//! Remote API seam for user management.

use super::model::{NewUser, Role, User};
use crate::error::Result;
use async_trait::async_trait;

/// An abstract client for the server's user endpoints.
///
/// Decouples the user-management views from the HTTP transport so the use
/// cases can be exercised against in-memory fakes.
#[async_trait]
pub trait UserApi: Send + Sync {
    /// Fetches every user account. Admin-only on the server side.
    async fn list_users(&self) -> Result<Vec<User>>;

    /// Creates a user account. Admin-only on the server side.
    async fn create_user(&self, user: &NewUser) -> Result<User>;

    /// Fetches the users holding the agent role.
    ///
    /// The server has no dedicated endpoint; the full list is filtered
    /// client-side.
    async fn list_agents(&self) -> Result<Vec<User>> {
        let users = self.list_users().await?;
        Ok(users
            .into_iter()
            .filter(|user| user.role == Role::Agent)
            .collect())
    }
}
