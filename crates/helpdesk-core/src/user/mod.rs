//! User domain module.
//!
//! - `model`: `User`, `NewUser` and the closed `Role` set
//! - `api`: the remote seam for user management endpoints

mod api;
mod model;

pub use api::UserApi;
pub use model::{NewUser, Role, User};
