//! Client-side authentication state machine.
//!
//! The state machine is a pure reducer: it owns no I/O. Persisting
//! credentials on login and clearing them on logout are side effects of the
//! auth use case, not of the transitions themselves.

use crate::user::User;

/// Authentication state as a tagged union.
///
/// `Loading` means the hydrate-from-storage attempt has not completed yet.
/// Once it has, the state is either `Anonymous` or `Authenticated`; a user
/// and a token always travel together, so "one without the other" is
/// unrepresentable.
#[derive(Debug, Clone, PartialEq)]
pub enum AuthState {
    /// Initial state until hydration completes.
    Loading,
    /// No credentials held.
    Anonymous,
    /// Logged in with a bearer token for the remote API.
    Authenticated { user: User, token: String },
}

impl AuthState {
    /// True while the hydrate attempt is still outstanding.
    pub fn is_loading(&self) -> bool {
        matches!(self, AuthState::Loading)
    }

    /// The logged-in user, if any.
    pub fn user(&self) -> Option<&User> {
        match self {
            AuthState::Authenticated { user, .. } => Some(user),
            _ => None,
        }
    }

    /// The bearer token, if any.
    pub fn token(&self) -> Option<&str> {
        match self {
            AuthState::Authenticated { token, .. } => Some(token),
            _ => None,
        }
    }
}

/// Events driving the authentication state machine.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    /// Stored credentials were found at startup.
    HydrateFound { token: String, user: User },
    /// Nothing was stored; hydration is over.
    HydrateNotFound,
    /// A login round-trip succeeded.
    Login { user: User, token: String },
    /// The user signed out.
    Logout,
}

/// Reducer over [`AuthState`].
///
/// Transitions are applied sequentially by the single owner of the session;
/// there is no interior locking here.
#[derive(Debug, Clone)]
pub struct AuthSession {
    state: AuthState,
}

impl AuthSession {
    /// Starts in `Loading`, before the store has been consulted.
    pub fn new() -> Self {
        Self {
            state: AuthState::Loading,
        }
    }

    /// Applies one event.
    ///
    /// Hydrate events only resolve the initial `Loading` state; applied later
    /// they are ignored, which keeps a stale hydration from clobbering a
    /// login or logout that already happened.
    pub fn apply(&mut self, event: AuthEvent) {
        match event {
            AuthEvent::HydrateFound { token, user } => {
                if self.state.is_loading() {
                    self.state = AuthState::Authenticated { user, token };
                }
            }
            AuthEvent::HydrateNotFound => {
                if self.state.is_loading() {
                    self.state = AuthState::Anonymous;
                }
            }
            AuthEvent::Login { user, token } => {
                self.state = AuthState::Authenticated { user, token };
            }
            AuthEvent::Logout => {
                self.state = AuthState::Anonymous;
            }
        }
    }

    /// Current state snapshot.
    pub fn state(&self) -> &AuthState {
        &self.state
    }
}

impl Default for AuthSession {
    fn default() -> Self {
        Self::new()
    }
}
