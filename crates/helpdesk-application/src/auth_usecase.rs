//! Auth use case: hydrate, login, register, logout.
//!
//! Owns the auth state machine and performs its side effects: persisting
//! credentials on login, clearing them on logout, and pushing the bearer
//! token into the transport via [`TokenSink`].

use helpdesk_core::auth::{
    AuthApi, AuthEvent, AuthSession, AuthState, SessionStore, StoredSession, TokenSink,
};
use helpdesk_core::error::Result;
use helpdesk_core::user::User;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Coordinates the auth state machine with storage and the remote API.
///
/// Constructed once at app boot with its collaborators injected; there is no
/// ambient auth singleton.
pub struct AuthUseCase {
    session: RwLock<AuthSession>,
    store: Arc<dyn SessionStore>,
    api: Arc<dyn AuthApi>,
    token_sink: Arc<dyn TokenSink>,
}

impl AuthUseCase {
    /// Creates the use case in the `Loading` state.
    pub fn new(
        store: Arc<dyn SessionStore>,
        api: Arc<dyn AuthApi>,
        token_sink: Arc<dyn TokenSink>,
    ) -> Self {
        Self {
            session: RwLock::new(AuthSession::new()),
            store,
            api,
            token_sink,
        }
    }

    /// Resolves the initial `Loading` state from the session store.
    ///
    /// A store that cannot be read counts as "nothing stored": the user ends
    /// up anonymous rather than stuck on the wait indicator.
    pub async fn hydrate(&self) {
        let stored = match self.store.load() {
            Ok(stored) => stored,
            Err(err) => {
                tracing::warn!(%err, "session hydrate failed, continuing anonymous");
                None
            }
        };

        let mut session = self.session.write().await;
        match stored {
            Some(StoredSession { token, user }) => {
                self.token_sink.set_token(Some(token.clone()));
                session.apply(AuthEvent::HydrateFound { token, user });
            }
            None => session.apply(AuthEvent::HydrateNotFound),
        }
    }

    /// Logs in, persists the session and arms the bearer token.
    pub async fn login(&self, email: &str, password: &str) -> Result<User> {
        let response = self.api.login(email, password).await?;

        self.store.save(&StoredSession {
            token: response.token.clone(),
            user: response.user.clone(),
        })?;
        self.token_sink.set_token(Some(response.token.clone()));

        let mut session = self.session.write().await;
        session.apply(AuthEvent::Login {
            user: response.user.clone(),
            token: response.token,
        });
        Ok(response.user)
    }

    /// Registers an account, then logs in with the same credentials.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        self.api.register(name, email, password).await?;
        self.login(email, password).await
    }

    /// Signs out: state to anonymous, token withdrawn, store cleared.
    pub async fn logout(&self) -> Result<()> {
        {
            let mut session = self.session.write().await;
            session.apply(AuthEvent::Logout);
        }
        self.token_sink.set_token(None);
        self.store.clear()
    }

    /// Snapshot of the current auth state.
    pub async fn state(&self) -> AuthState {
        self.session.read().await.state().clone()
    }

    /// The logged-in user, if any.
    pub async fn current_user(&self) -> Option<User> {
        self.state().await.user().cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_core::auth::LoginResponse;
    use helpdesk_core::error::HelpdeskError;
    use helpdesk_core::user::Role;
    use std::sync::Mutex;

    struct MemorySessionStore {
        session: Mutex<Option<StoredSession>>,
    }

    impl MemorySessionStore {
        fn new(initial: Option<StoredSession>) -> Self {
            Self {
                session: Mutex::new(initial),
            }
        }

        fn stored(&self) -> Option<StoredSession> {
            self.session.lock().unwrap().clone()
        }
    }

    impl SessionStore for MemorySessionStore {
        fn save(&self, session: &StoredSession) -> Result<()> {
            *self.session.lock().unwrap() = Some(session.clone());
            Ok(())
        }

        fn load(&self) -> Result<Option<StoredSession>> {
            Ok(self.stored())
        }

        fn clear(&self) -> Result<()> {
            *self.session.lock().unwrap() = None;
            Ok(())
        }
    }

    struct StubAuthApi {
        response: LoginResponse,
        fail_login: bool,
    }

    #[async_trait::async_trait]
    impl AuthApi for StubAuthApi {
        async fn login(&self, _email: &str, _password: &str) -> Result<LoginResponse> {
            if self.fail_login {
                return Err(HelpdeskError::api(
                    401,
                    Some("invalid credentials".to_string()),
                ));
            }
            Ok(self.response.clone())
        }

        async fn register(&self, _name: &str, _email: &str, _password: &str) -> Result<()> {
            Ok(())
        }
    }

    struct RecordingSink {
        token: Mutex<Option<String>>,
    }

    impl RecordingSink {
        fn new() -> Self {
            Self {
                token: Mutex::new(None),
            }
        }
    }

    impl TokenSink for RecordingSink {
        fn set_token(&self, token: Option<String>) {
            *self.token.lock().unwrap() = token;
        }
    }

    fn agent() -> User {
        User {
            id: 2,
            name: "Dana".to_string(),
            email: "a@b.com".to_string(),
            role: Role::Agent,
        }
    }

    fn usecase(
        initial: Option<StoredSession>,
        fail_login: bool,
    ) -> (AuthUseCase, Arc<MemorySessionStore>, Arc<RecordingSink>) {
        let store = Arc::new(MemorySessionStore::new(initial));
        let sink = Arc::new(RecordingSink::new());
        let api = Arc::new(StubAuthApi {
            response: LoginResponse {
                user: agent(),
                token: "t1".to_string(),
            },
            fail_login,
        });
        let usecase = AuthUseCase::new(store.clone(), api, sink.clone());
        (usecase, store, sink)
    }

    #[tokio::test]
    async fn starts_loading_until_hydrated() {
        let (auth, _, _) = usecase(None, false);
        assert!(auth.state().await.is_loading());

        auth.hydrate().await;
        assert_eq!(auth.state().await, AuthState::Anonymous);
    }

    #[tokio::test]
    async fn hydrate_restores_stored_session() {
        let stored = StoredSession {
            token: "old".to_string(),
            user: agent(),
        };
        let (auth, _, sink) = usecase(Some(stored), false);

        auth.hydrate().await;

        assert_eq!(auth.state().await.token(), Some("old"));
        assert_eq!(*sink.token.lock().unwrap(), Some("old".to_string()));
    }

    #[tokio::test]
    async fn login_updates_state_store_and_token() {
        let (auth, store, sink) = usecase(None, false);
        auth.hydrate().await;

        let user = auth.login("a@b.com", "x").await.unwrap();

        assert_eq!(user.role, Role::Agent);
        assert_eq!(auth.state().await.token(), Some("t1"));
        let stored = store.stored().unwrap();
        assert_eq!(stored.token, "t1");
        assert_eq!(stored.user.role, Role::Agent);
        assert_eq!(*sink.token.lock().unwrap(), Some("t1".to_string()));
    }

    #[tokio::test]
    async fn failed_login_leaves_everything_untouched() {
        let (auth, store, sink) = usecase(None, true);
        auth.hydrate().await;

        let err = auth.login("a@b.com", "wrong").await.unwrap_err();

        assert_eq!(err.status(), Some(401));
        assert_eq!(auth.state().await, AuthState::Anonymous);
        assert_eq!(store.stored(), None);
        assert_eq!(*sink.token.lock().unwrap(), None);
    }

    #[tokio::test]
    async fn register_logs_in_afterwards() {
        let (auth, store, _) = usecase(None, false);
        auth.hydrate().await;

        auth.register("Dana", "a@b.com", "x").await.unwrap();

        assert_eq!(auth.state().await.token(), Some("t1"));
        assert!(store.stored().is_some());
    }

    #[tokio::test]
    async fn logout_clears_state_store_and_token() {
        let (auth, store, sink) = usecase(None, false);
        auth.hydrate().await;
        auth.login("a@b.com", "x").await.unwrap();

        auth.logout().await.unwrap();

        assert_eq!(auth.state().await, AuthState::Anonymous);
        assert_eq!(store.stored(), None);
        assert_eq!(*sink.token.lock().unwrap(), None);
    }
}
