//! Route table and the role gate in front of it.
//!
//! This is the single authorization checkpoint: every screen declares the
//! roles it requires and [`Navigator::check`] answers from the current auth
//! state. Nothing else in the app re-checks roles on its own.

use crate::auth_usecase::AuthUseCase;
use helpdesk_core::auth::{RouteDecision, evaluate};
use helpdesk_core::user::Role;
use std::sync::Arc;

/// The screens the client can navigate to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppRoute {
    Dashboard,
    Tickets,
    NewTicket,
    Users,
    NewUser,
}

impl AppRoute {
    /// Roles allowed on this route; empty means any signed-in user.
    pub fn required_roles(self) -> &'static [Role] {
        match self {
            AppRoute::Dashboard | AppRoute::Tickets => &[],
            AppRoute::NewTicket => &[Role::Customer],
            AppRoute::Users | AppRoute::NewUser => &[Role::Admin],
        }
    }
}

/// Answers "may the current user open this route?".
pub struct Navigator {
    auth: Arc<AuthUseCase>,
}

impl Navigator {
    pub fn new(auth: Arc<AuthUseCase>) -> Self {
        Self { auth }
    }

    /// Gate decision for a route in the table.
    pub async fn check(&self, route: AppRoute) -> RouteDecision {
        self.check_roles(route.required_roles()).await
    }

    /// Gate decision for an ad-hoc role requirement, for actions that are
    /// gated inside a screen rather than at its entrance.
    pub async fn check_roles(&self, required_roles: &[Role]) -> RouteDecision {
        evaluate(&self.auth.state().await, required_roles)
    }
}
