//! Risk level classification used by assessments and alerts.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Four-colour risk level, ordered from least to most severe.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Green,
    Yellow,
    Orange,
    Red,
}

impl RiskLevel {
    pub const ALL: [RiskLevel; 4] = [
        RiskLevel::Green,
        RiskLevel::Yellow,
        RiskLevel::Orange,
        RiskLevel::Red,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Green => "GREEN",
            RiskLevel::Yellow => "YELLOW",
            RiskLevel::Orange => "ORANGE",
            RiskLevel::Red => "RED",
        }
    }

    /// Map an assessment's textual label (`"高风险"`, `"中风险"`, ...) to a colour.
    ///
    /// Unknown or missing labels fall back to [`RiskLevel::Yellow`].
    pub fn from_assessment_label(label: Option<&str>) -> RiskLevel {
        match label.map(str::trim) {
            Some("高风险") => RiskLevel::Red,
            Some("中高风险") => RiskLevel::Orange,
            Some("中风险") | Some("中低风险") => RiskLevel::Yellow,
            Some("低风险") => RiskLevel::Green,
            _ => RiskLevel::Yellow,
        }
    }
}

impl core::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RiskLevel {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s.trim().to_ascii_uppercase().as_str() {
            "GREEN" => Ok(RiskLevel::Green),
            "YELLOW" => Ok(RiskLevel::Yellow),
            "ORANGE" => Ok(RiskLevel::Orange),
            "RED" => Ok(RiskLevel::Red),
            _ => Err(DomainError::invalid_value(format!(
                "risk level must be one of GREEN, YELLOW, ORANGE, RED (got '{s}')"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("red".parse::<RiskLevel>().unwrap(), RiskLevel::Red);
        assert_eq!(" Orange ".parse::<RiskLevel>().unwrap(), RiskLevel::Orange);
    }

    #[test]
    fn unknown_level_is_rejected() {
        assert!(matches!(
            "PURPLE".parse::<RiskLevel>(),
            Err(DomainError::InvalidValue(_))
        ));
    }

    #[test]
    fn wire_form_is_uppercase() {
        assert_eq!(serde_json::to_string(&RiskLevel::Yellow).unwrap(), "\"YELLOW\"");
        assert!(RiskLevel::Green < RiskLevel::Red);
    }

    #[test]
    fn assessment_labels_map_to_colours() {
        assert_eq!(RiskLevel::from_assessment_label(Some("高风险")), RiskLevel::Red);
        assert_eq!(RiskLevel::from_assessment_label(Some("中高风险")), RiskLevel::Orange);
        assert_eq!(RiskLevel::from_assessment_label(Some("中低风险")), RiskLevel::Yellow);
        assert_eq!(RiskLevel::from_assessment_label(Some("低风险")), RiskLevel::Green);
        assert_eq!(RiskLevel::from_assessment_label(Some("unknown")), RiskLevel::Yellow);
        assert_eq!(RiskLevel::from_assessment_label(None), RiskLevel::Yellow);
    }

    proptest! {
        #[test]
        fn display_parses_back(idx in 0usize..4) {
            let level = RiskLevel::ALL[idx];
            prop_assert_eq!(level.to_string().parse::<RiskLevel>().unwrap(), level);
        }
    }
}
