//! Domain error model.

use thiserror::Error;

/// Result type used across the value layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Value-level error.
///
/// Keep this focused on deterministic parse/validation failures. Transport
/// concerns belong to the API crate.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// An identifier was invalid (e.g. empty county code).
    #[error("invalid identifier: {0}")]
    InvalidId(String),

    /// An enumerated value was not recognised.
    #[error("invalid value: {0}")]
    InvalidValue(String),
}

impl DomainError {
    pub fn invalid_id(msg: impl Into<String>) -> Self {
        Self::InvalidId(msg.into())
    }

    pub fn invalid_value(msg: impl Into<String>) -> Self {
        Self::InvalidValue(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CountyCode, RiskLevel};

    #[test]
    fn parse_failures_carry_their_kind_and_message() {
        let err: DomainResult<CountyCode> = CountyCode::parse("  ");
        assert_eq!(
            err.unwrap_err().to_string(),
            "invalid identifier: CountyCode: must not be empty"
        );

        let err: DomainResult<RiskLevel> = "PURPLE".parse();
        assert!(matches!(err, Err(DomainError::InvalidValue(msg)) if msg.contains("PURPLE")));
    }
}
