//! `countyrisk-dashboard`
//!
//! **Responsibility:** client-side navigation for the risk dashboard.
//!
//! This crate provides:
//! - The static route table and its registration-time checks
//! - The navigation guard (login redirects and role gating)
//! - A navigator that owns the session lifecycle (load, login, logout)
//!
//! Views are out of scope; they call `countyrisk-api` with the client the
//! navigator hands out.

pub mod guard;
pub mod navigator;
pub mod router;
pub mod routes;

pub use guard::{GuardDecision, Location, guard};
pub use navigator::{Navigation, NavigationError, Navigator, MAX_REDIRECTS};
pub use router::{Router, RouterError};
pub use routes::{DEFAULT_PATH, LOGIN_PATH, REDIRECT_QUERY_KEY, RouteDescriptor, default_routes};
