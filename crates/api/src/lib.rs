//! `countyrisk-api` — typed bindings for the county risk REST backend.
//!
//! One async function per backend endpoint, grouped by resource under
//! [`endpoints`]. Functions only marshal arguments: no validation, retry or
//! caching happens here, and authorization is left to the backend and to the
//! dashboard's navigation guard.

pub mod client;
pub mod config;
pub mod dto;
pub mod endpoints;
pub mod envelope;
pub mod errors;

pub use client::{ApiClient, ROLE_HEADER};
pub use config::ApiConfig;
pub use envelope::{Envelope, SUCCESS_CODE};
pub use errors::ApiError;
