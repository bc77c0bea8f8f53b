//! Session-aware navigation.

use anyhow::Context;
use serde::Serialize;
use thiserror::Error;
use tracing::Instrument;

use countyrisk_api::endpoints::user;
use countyrisk_api::{ApiClient, ApiConfig, ApiError};
use countyrisk_auth::{AuthorizationExplanation, Capability, Role, Session, SessionStore, explain_authorization};

use crate::guard::{GuardDecision, guard};
use crate::router::{Router, RouterError, normalize_path, split_location};
use crate::routes::DEFAULT_PATH;

/// Guard and router redirects followed before a navigation is abandoned.
pub const MAX_REDIRECTS: usize = 8;

#[derive(Debug, Error)]
pub enum NavigationError {
    #[error(transparent)]
    Route(#[from] RouterError),

    #[error("navigation to '{path}' still redirecting after {hops} hops")]
    RedirectLoop { path: String, hops: usize },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Session(#[from] anyhow::Error),
}

/// Outcome of a completed navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Navigation {
    /// Location as asked for by the caller.
    pub requested: String,
    /// Path of the page route that ended up rendered.
    pub route: String,
    pub title: Option<String>,
    /// Final location, query included.
    pub location: String,
    /// Locations passed through before `location`, in order.
    pub redirects: Vec<String>,
}

/// Owns the session for the lifetime of the client and runs every
/// navigation through the guard.
pub struct Navigator {
    router: Router,
    store: Box<dyn SessionStore>,
    session: Session,
    current: Option<Navigation>,
}

impl Navigator {
    /// Loads the persisted session from `store`.
    pub fn new(router: Router, store: Box<dyn SessionStore>) -> Result<Self, NavigationError> {
        let session = Session::load(store.as_ref()).context("failed to load session")?;
        Ok(Self {
            router,
            store,
            session,
            current: None,
        })
    }

    pub fn session(&self) -> Session {
        self.session
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    /// Last successful navigation, if any since start or logout.
    pub fn current(&self) -> Option<&Navigation> {
        self.current.as_ref()
    }

    pub fn can(&self, capability: Capability) -> bool {
        capability.permits(self.session.role)
    }

    pub fn explain(&self, capability: Capability) -> AuthorizationExplanation {
        explain_authorization(self.session.role, capability)
    }

    /// API client carrying the session's role header.
    pub fn api_client(&self, config: &ApiConfig) -> Result<ApiClient, ApiError> {
        Ok(ApiClient::new(config)?.with_role(self.session.role))
    }

    pub fn navigate(&mut self, location: &str) -> Result<Navigation, NavigationError> {
        let span = tracing::debug_span!("navigate", requested = location);
        let _entered = span.enter();

        let mut target = location.to_string();
        let mut redirects = Vec::new();

        for _ in 0..=MAX_REDIRECTS {
            let route = self.router.resolve(&target)?;
            let (path, suffix) = split_location(&target);
            if normalize_path(path) != route.path {
                redirects.push(target.clone());
            }
            let full_path = format!("{}{}", route.path, suffix);

            let decision = guard(route, &full_path, &self.session);
            let Some(next) = decision.location() else {
                let navigation = Navigation {
                    requested: location.to_string(),
                    route: route.path.clone(),
                    title: route.title.clone(),
                    location: full_path,
                    redirects,
                };
                tracing::info!(route = %navigation.route, hops = navigation.redirects.len(), "navigated");
                self.current = Some(navigation.clone());
                return Ok(navigation);
            };

            if let GuardDecision::RedirectToLogin { .. } = decision {
                tracing::info!(target_path = %route.path, "login required");
            }
            redirects.push(full_path);
            target = next.to_url();
        }

        tracing::warn!(hops = MAX_REDIRECTS, "redirect loop");
        Err(NavigationError::RedirectLoop {
            path: location.to_string(),
            hops: MAX_REDIRECTS,
        })
    }

    /// Persists an authenticated session and resumes the interrupted
    /// navigation (or opens the default page).
    ///
    /// Only in-app paths are honoured as `redirect`; anything else falls back
    /// to the default page.
    pub fn complete_login(
        &mut self,
        role: Option<Role>,
        redirect: Option<&str>,
    ) -> Result<Navigation, NavigationError> {
        let session = Session::authenticated(role);
        session
            .save(self.store.as_ref())
            .context("failed to save session")?;
        self.session = session;

        tracing::info!(role = role.map(|r| r.as_str()).unwrap_or(""), "logged in");

        let target = redirect
            .filter(|r| r.starts_with('/') && !r.starts_with("//"))
            .unwrap_or(DEFAULT_PATH);
        self.navigate(target)
    }

    /// Authenticates against the backend, then behaves as
    /// [`complete_login`](Self::complete_login).
    pub async fn login(
        &mut self,
        client: &ApiClient,
        username: &str,
        password: &str,
        redirect: Option<&str>,
    ) -> Result<Navigation, NavigationError> {
        let outcome = user::login(client, username, password)
            .instrument(tracing::info_span!("login", username))
            .await?;
        let role = outcome.role.as_deref().and_then(Role::parse_optional);
        self.complete_login(role, redirect)
    }

    pub fn logout(&mut self) -> Result<(), NavigationError> {
        Session::clear(self.store.as_ref()).context("failed to clear session")?;
        self.session = Session::anonymous();
        self.current = None;
        tracing::info!("logged out");
        Ok(())
    }
}
