//! Navigation guard.
//!
//! Runs before every navigation, including the first one after start-up.
//! Pure: the outcome depends only on the target route and the session.

use serde::Serialize;
use url::form_urlencoded;

use countyrisk_auth::Session;

use crate::routes::{DEFAULT_PATH, LOGIN_PATH, REDIRECT_QUERY_KEY, RouteDescriptor};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "snake_case")]
pub enum GuardDecision {
    Proceed,
    /// `redirect` is the full path originally requested, query included.
    RedirectToLogin { redirect: String },
    RedirectToDefault,
}

impl GuardDecision {
    /// Where a redirecting decision sends the user; `None` for `Proceed`.
    pub fn location(&self) -> Option<Location> {
        match self {
            GuardDecision::Proceed => None,
            GuardDecision::RedirectToLogin { redirect } => Some(Location {
                path: LOGIN_PATH.to_string(),
                query: vec![(REDIRECT_QUERY_KEY.to_string(), redirect.clone())],
            }),
            GuardDecision::RedirectToDefault => Some(Location::path(DEFAULT_PATH)),
        }
    }

    pub fn is_proceed(&self) -> bool {
        matches!(self, GuardDecision::Proceed)
    }

    fn label(&self) -> &'static str {
        match self {
            GuardDecision::Proceed => "proceed",
            GuardDecision::RedirectToLogin { .. } => "redirect_to_login",
            GuardDecision::RedirectToDefault => "redirect_to_default",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Location {
    pub path: String,
    pub query: Vec<(String, String)>,
}

impl Location {
    pub fn path(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            query: Vec::new(),
        }
    }

    /// Path plus form-encoded query, e.g. `/login?redirect=%2Fdashboard`.
    pub fn to_url(&self) -> String {
        if self.query.is_empty() {
            return self.path.clone();
        }
        let query = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.query.iter())
            .finish();
        format!("{}?{}", self.path, query)
    }

    /// Value of the first `key` in the query.
    pub fn query_value(&self, key: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Decides a navigation to `target`; first matching rule wins.
///
/// Role gating does not depend on `requires_auth`: a public route that names
/// a restricted capability still sends anonymous users to the default page.
pub fn guard(target: &RouteDescriptor, full_path: &str, session: &Session) -> GuardDecision {
    let decision = if target.path == LOGIN_PATH && session.logged_in {
        GuardDecision::RedirectToDefault
    } else if target.requires_auth && !session.logged_in {
        GuardDecision::RedirectToLogin {
            redirect: full_path.to_string(),
        }
    } else if !target.roles().is_empty()
        && !session.role.is_some_and(|role| target.roles().contains(&role))
    {
        GuardDecision::RedirectToDefault
    } else {
        GuardDecision::Proceed
    };

    tracing::debug!(
        target_path = %target.path,
        full_path,
        logged_in = session.logged_in,
        role = session.role.map(|r| r.as_str()).unwrap_or(""),
        outcome = decision.label(),
        "navigation guard"
    );

    decision
}
