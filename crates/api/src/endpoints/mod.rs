//! One module per backend resource, one async function per endpoint.
//!
//! Every function takes the shared [`ApiClient`](crate::ApiClient), issues
//! exactly one request and hands back the decoded `data` or the error.

pub mod alert;
pub mod county;
pub mod data_quality;
pub mod deepseek;
pub mod poverty;
pub mod risk;
pub mod sql;
pub mod system;
pub mod user;
