//! `countyrisk-core` — shared building blocks for the county risk client.
//!
//! This crate contains **pure** value types (no HTTP, no storage).

pub mod error;
pub mod id;
pub mod level;
pub mod page;

pub use error::{DomainError, DomainResult};
pub use id::{CountyCode, RecordId};
pub use level::RiskLevel;
pub use page::Page;
