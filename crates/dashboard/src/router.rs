//! Route registration and path resolution.

use std::collections::HashMap;

use thiserror::Error;

use crate::routes::{DEFAULT_PATH, LOGIN_PATH, RouteDescriptor, default_routes};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouterError {
    #[error("route '{0}' is registered more than once")]
    DuplicatePath(String),

    #[error("route '{path}' redirects to unregistered path '{target}'")]
    UnknownRedirect { path: String, target: String },

    #[error("route '{path}' redirects to '{target}', which is itself a redirect")]
    RedirectChain { path: String, target: String },

    #[error("no page route registered for the login path '{}'", LOGIN_PATH)]
    MissingLoginRoute,

    #[error("no page route registered for the default path '{}'", DEFAULT_PATH)]
    MissingDefaultRoute,

    #[error("no route matches '{0}'")]
    NotFound(String),
}

/// A validated route table.
///
/// Redirect targets always point at page routes, so resolution never needs
/// more than one hop.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<RouteDescriptor>,
    index: HashMap<String, usize>,
}

impl Router {
    pub fn new(routes: Vec<RouteDescriptor>) -> Result<Self, RouterError> {
        let mut index = HashMap::with_capacity(routes.len());
        for (i, route) in routes.iter().enumerate() {
            let path = normalize_path(&route.path);
            if index.insert(path, i).is_some() {
                return Err(RouterError::DuplicatePath(route.path.clone()));
            }
        }

        for route in &routes {
            let Some(target) = &route.redirect else { continue };
            let target_route = index
                .get(&normalize_path(target))
                .map(|&i| &routes[i])
                .ok_or_else(|| RouterError::UnknownRedirect {
                    path: route.path.clone(),
                    target: target.clone(),
                })?;
            if target_route.is_redirect() {
                return Err(RouterError::RedirectChain {
                    path: route.path.clone(),
                    target: target.clone(),
                });
            }
        }

        let is_page = |path: &str| {
            index
                .get(path)
                .is_some_and(|&i| !routes[i].is_redirect())
        };
        if !is_page(LOGIN_PATH) {
            return Err(RouterError::MissingLoginRoute);
        }
        if !is_page(DEFAULT_PATH) {
            return Err(RouterError::MissingDefaultRoute);
        }

        Ok(Self { routes, index })
    }

    pub fn with_default_routes() -> Result<Self, RouterError> {
        Self::new(default_routes())
    }

    pub fn routes(&self) -> &[RouteDescriptor] {
        &self.routes
    }

    /// Exact lookup, without following redirects.
    pub fn get(&self, path: &str) -> Option<&RouteDescriptor> {
        self.index
            .get(&normalize_path(split_location(path).0))
            .map(|&i| &self.routes[i])
    }

    /// Resolves a location (path plus optional query or fragment) to the
    /// page route that renders it.
    pub fn resolve(&self, location: &str) -> Result<&RouteDescriptor, RouterError> {
        let route = self
            .get(location)
            .ok_or_else(|| RouterError::NotFound(normalize_path(split_location(location).0)))?;

        match &route.redirect {
            Some(target) => self
                .get(target)
                .ok_or_else(|| RouterError::NotFound(target.clone())),
            None => Ok(route),
        }
    }
}

/// Splits a location into its path and the `?query#fragment` suffix.
pub(crate) fn split_location(location: &str) -> (&str, &str) {
    let at = location.find(['?', '#']).unwrap_or(location.len());
    location.split_at(at)
}

/// Leading slash added, trailing slash removed (except for the root).
pub(crate) fn normalize_path(path: &str) -> String {
    let trimmed = path.trim().trim_end_matches('/');
    if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{trimmed}")
    }
}
