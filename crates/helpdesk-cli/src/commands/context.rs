//! Shared wiring for all commands.

use anyhow::{Result, bail};
use helpdesk_api::ApiClient;
use helpdesk_application::{
    AppRoute, AuthUseCase, CommentThreads, MetaCatalog, Navigator, TicketBoard,
};
use helpdesk_core::auth::RouteDecision;
use helpdesk_core::user::{Role, UserApi};
use helpdesk_infrastructure::{FileSessionStore, load_config};
use std::sync::Arc;

/// One fully wired client: API transport, use cases and the route gate.
pub struct App {
    pub auth: Arc<AuthUseCase>,
    pub board: TicketBoard,
    pub threads: CommentThreads,
    pub catalog: MetaCatalog,
    pub users: Arc<dyn UserApi>,
    pub navigator: Navigator,
}

impl App {
    /// Builds the app from config and the stored session, hydrating auth
    /// before any command runs.
    pub async fn init(base_url_override: Option<String>) -> Result<Self> {
        let mut config = load_config()?;
        if let Some(base_url) = base_url_override {
            config.base_url = base_url;
        }

        let client = Arc::new(ApiClient::new(&config.base_url));
        let store = Arc::new(FileSessionStore::default_location()?);

        let auth = Arc::new(AuthUseCase::new(store, client.clone(), client.clone()));
        auth.hydrate().await;

        Ok(Self {
            board: TicketBoard::new(client.clone()),
            threads: CommentThreads::new(client.clone()),
            catalog: MetaCatalog::new(client.clone()),
            users: client,
            navigator: Navigator::new(auth.clone()),
            auth,
        })
    }

    /// Fails the command unless the current user may open the route.
    pub async fn require(&self, route: AppRoute) -> Result<()> {
        self.explain(self.navigator.check(route).await)
    }

    /// Same gate for actions checked inside a screen instead of at its door.
    pub async fn require_roles(&self, required_roles: &[Role]) -> Result<()> {
        self.explain(self.navigator.check_roles(required_roles).await)
    }

    fn explain(&self, decision: RouteDecision) -> Result<()> {
        match decision {
            RouteDecision::Grant => Ok(()),
            RouteDecision::RedirectToLogin => {
                bail!("not signed in; run `helpdesk auth login` first")
            }
            RouteDecision::RedirectToDenied => {
                bail!("your role does not allow this")
            }
            RouteDecision::Pending => bail!("session state is still resolving; try again"),
        }
    }

    /// The signed-in user's role, for commands that shape output by role.
    pub async fn viewer_role(&self) -> Result<Role> {
        match self.auth.current_user().await {
            Some(user) => Ok(user.role),
            None => bail!("not signed in; run `helpdesk auth login` first"),
        }
    }
}
