use core::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Role identifier used for page and capability gating.
///
/// The wire form is the backend's upper-snake name (`"RISK_ANALYST"`).
/// At most one role is active per session.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    /// Full access.
    Admin,
    /// Dashboard only.
    User,
    /// Dashboard plus the AI assistant.
    Vip,
    /// Every page, data edits and risk parameter tuning.
    RiskAnalyst,
    /// Every page and data edits, but no risk parameter tuning.
    DataMaintainer,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown role '{0}'")]
pub struct UnknownRole(pub String);

impl Role {
    pub const ALL: [Role; 5] = [
        Role::Admin,
        Role::User,
        Role::Vip,
        Role::RiskAnalyst,
        Role::DataMaintainer,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Vip => "VIP",
            Role::RiskAnalyst => "RISK_ANALYST",
            Role::DataMaintainer => "DATA_MAINTAINER",
        }
    }

    /// Parse a stored or transmitted role string.
    ///
    /// Empty means anonymous. Unrecognised names are treated the same way:
    /// they would fail every membership check anyway.
    pub fn parse_optional(raw: &str) -> Option<Role> {
        if raw.is_empty() {
            return None;
        }
        match raw.parse() {
            Ok(role) => Some(role),
            Err(UnknownRole(name)) => {
                tracing::warn!(role = %name, "ignoring unrecognised role");
                None
            }
        }
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = UnknownRole;

    // Exact, case-sensitive match.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_round_trip() {
        for role in Role::ALL {
            assert_eq!(role.as_str().parse::<Role>().unwrap(), role);
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role.as_str()));
        }
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert_eq!("admin".parse::<Role>(), Err(UnknownRole("admin".to_string())));
    }

    #[test]
    fn parse_optional_treats_empty_and_unknown_as_anonymous() {
        assert_eq!(Role::parse_optional(""), None);
        assert_eq!(Role::parse_optional("SUPERUSER"), None);
        assert_eq!(Role::parse_optional("VIP"), Some(Role::Vip));
    }
}
