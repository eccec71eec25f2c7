//! Role-gated route guarding.
//!
//! Given an auth state snapshot and the roles a destination requires, the
//! guard decides whether the destination may render. This is the single
//! authorization checkpoint on the client; the server still enforces
//! authorization on every request.

use super::session::AuthState;
use crate::user::Role;

/// Outcome of evaluating one navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Hydration has not completed: show a wait indicator, do not redirect.
    /// Redirecting here would flash the login page at users who are in fact
    /// logged in.
    Pending,
    /// No session: send the user to the login entry point. The attempted
    /// destination is discarded; there is no post-login return URL.
    RedirectToLogin,
    /// Logged in, but the user's role is not among the required ones.
    RedirectToDenied,
    /// Render the destination.
    Grant,
}

/// Evaluates a navigation against the current auth state.
///
/// An empty `required_roles` slice means "any authenticated user".
pub fn evaluate(state: &AuthState, required_roles: &[Role]) -> RouteDecision {
    let user = match state {
        AuthState::Loading => return RouteDecision::Pending,
        AuthState::Anonymous => return RouteDecision::RedirectToLogin,
        AuthState::Authenticated { user, .. } => user,
    };

    if !required_roles.is_empty() && !required_roles.contains(&user.role) {
        return RouteDecision::RedirectToDenied;
    }

    RouteDecision::Grant
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user::User;

    fn authenticated(role: Role) -> AuthState {
        AuthState::Authenticated {
            user: User {
                id: 7,
                name: "Noa".to_string(),
                email: "noa@example.com".to_string(),
                role,
            },
            token: "tok".to_string(),
        }
    }

    #[test]
    fn loading_is_pending_regardless_of_roles() {
        assert_eq!(evaluate(&AuthState::Loading, &[]), RouteDecision::Pending);
        assert_eq!(
            evaluate(&AuthState::Loading, &[Role::Admin]),
            RouteDecision::Pending
        );
    }

    #[test]
    fn anonymous_redirects_to_login() {
        assert_eq!(
            evaluate(&AuthState::Anonymous, &[]),
            RouteDecision::RedirectToLogin
        );
        assert_eq!(
            evaluate(&AuthState::Anonymous, &[Role::Customer]),
            RouteDecision::RedirectToLogin
        );
    }

    #[test]
    fn wrong_role_is_denied() {
        assert_eq!(
            evaluate(&authenticated(Role::Customer), &[Role::Admin]),
            RouteDecision::RedirectToDenied
        );
    }

    #[test]
    fn matching_role_is_granted() {
        assert_eq!(
            evaluate(&authenticated(Role::Customer), &[Role::Customer]),
            RouteDecision::Grant
        );
        assert_eq!(
            evaluate(&authenticated(Role::Agent), &[Role::Agent, Role::Admin]),
            RouteDecision::Grant
        );
    }

    #[test]
    fn empty_roles_admit_any_authenticated_user() {
        assert_eq!(
            evaluate(&authenticated(Role::Customer), &[]),
            RouteDecision::Grant
        );
    }
}
