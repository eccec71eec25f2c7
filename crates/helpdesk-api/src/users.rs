//! User management endpoints.

use crate::client::ApiClient;
use async_trait::async_trait;
use helpdesk_core::error::Result;
use helpdesk_core::user::{NewUser, User, UserApi};

#[async_trait]
impl UserApi for ApiClient {
    async fn list_users(&self) -> Result<Vec<User>> {
        self.get_json("/users").await
    }

    async fn create_user(&self, user: &NewUser) -> Result<User> {
        self.post_json("/users", user).await
    }
}
