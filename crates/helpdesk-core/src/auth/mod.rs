//! Authentication domain module.
//!
//! - `session`: the client-side auth state machine (`AuthSession`)
//! - `guard`: role-gated route guarding (`RouteDecision`)
//! - `store`: credential persistence seam (`SessionStore`)
//! - `api`: remote seam for login/register plus the `TokenSink` hook

mod api;
mod guard;
mod session;
mod store;

pub use api::{AuthApi, LoginResponse, TokenSink};
pub use guard::{RouteDecision, evaluate};
pub use session::{AuthEvent, AuthSession, AuthState};
pub use store::{SessionStore, StoredSession};
