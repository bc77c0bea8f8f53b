use serde::Serialize;
use thiserror::Error;

use crate::{Capability, Role};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthzError {
    #[error("forbidden: role '{}' may not use '{capability}'", role_label(.role))]
    Forbidden {
        capability: Capability,
        role: Option<Role>,
    },
}

fn role_label(role: &Option<Role>) -> &'static str {
    role.map(|r| r.as_str()).unwrap_or("<anonymous>")
}

/// Authorize a session role for a capability.
///
/// - No IO
/// - No panics
/// - Total: every input maps to allow or [`AuthzError::Forbidden`]
pub fn authorize(role: Option<Role>, capability: Capability) -> Result<(), AuthzError> {
    if capability.permits(role) {
        Ok(())
    } else {
        Err(AuthzError::Forbidden { capability, role })
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Authorization Explanation (Audit Trail)
// ─────────────────────────────────────────────────────────────────────────────

/// Detailed explanation of an authorization decision.
///
/// Answers "why can't I open this page?" without the caller having to
/// re-derive the allow-list.
#[derive(Debug, Clone, Serialize)]
pub struct AuthorizationExplanation {
    /// The capability that was being checked.
    pub capability: Capability,

    /// The session role, if any.
    pub role: Option<Role>,

    /// Whether the authorization was granted.
    pub granted: bool,

    /// Human-readable reason for the decision.
    pub reason: String,

    /// Roles that would be granted; empty for open capabilities.
    pub allowed_roles: Vec<Role>,

    /// If denied, this explains what was missing.
    pub denial_reason: Option<DenialReason>,
}

/// Detailed reason why authorization was denied.
#[derive(Debug, Clone, Serialize)]
pub struct DenialReason {
    pub kind: DenialKind,
    pub message: String,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DenialKind {
    AnonymousSession,
    RoleNotAllowed,
}

/// Explain why an authorization decision was made (or would be made).
pub fn explain_authorization(role: Option<Role>, capability: Capability) -> AuthorizationExplanation {
    let allowed_roles = capability.allowed_roles().map(<[Role]>::to_vec).unwrap_or_default();
    let allowed_names: Vec<&str> = allowed_roles.iter().map(Role::as_str).collect();

    if capability.is_open() {
        return AuthorizationExplanation {
            capability,
            role,
            granted: true,
            reason: format!("'{capability}' is open to every session"),
            allowed_roles,
            denial_reason: None,
        };
    }

    match role {
        Some(role) if capability.permits(Some(role)) => AuthorizationExplanation {
            capability,
            role: Some(role),
            granted: true,
            reason: format!("Role '{role}' is in the allow-list for '{capability}'"),
            allowed_roles,
            denial_reason: None,
        },
        Some(role) => AuthorizationExplanation {
            capability,
            role: Some(role),
            granted: false,
            reason: format!(
                "Role '{role}' is not allowed to use '{capability}'. Allowed roles: {allowed_names:?}"
            ),
            allowed_roles,
            denial_reason: Some(DenialReason {
                kind: DenialKind::RoleNotAllowed,
                message: format!("Role '{role}' lacks '{capability}'"),
                suggestions: vec![format!(
                    "Sign in with one of the following roles: {allowed_names:?}"
                )],
            }),
        },
        None => AuthorizationExplanation {
            capability,
            role: None,
            granted: false,
            reason: format!("'{capability}' requires a role but the session has none"),
            allowed_roles,
            denial_reason: Some(DenialReason {
                kind: DenialKind::AnonymousSession,
                message: "Session carries no role".to_string(),
                suggestions: vec![
                    "Sign in to obtain a role".to_string(),
                    format!("Roles that grant '{capability}': {allowed_names:?}"),
                ],
            }),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn authorize_matches_the_table() {
        assert!(authorize(Some(Role::Admin), Capability::ExecuteSql).is_ok());
        assert_eq!(
            authorize(Some(Role::Vip), Capability::ExecuteSql),
            Err(AuthzError::Forbidden {
                capability: Capability::ExecuteSql,
                role: Some(Role::Vip),
            })
        );
    }

    #[test]
    fn forbidden_message_names_anonymous_sessions() {
        let err = authorize(None, Capability::UseAi).unwrap_err();
        assert_eq!(err.to_string(), "forbidden: role '<anonymous>' may not use 'ai.use'");
    }

    #[test]
    fn explanation_for_open_capability_has_no_allow_list() {
        let explanation = explain_authorization(None, Capability::AccessDashboard);
        assert!(explanation.granted);
        assert!(explanation.allowed_roles.is_empty());
        assert!(explanation.denial_reason.is_none());
    }

    #[test]
    fn explanation_distinguishes_anonymous_from_wrong_role() {
        let anonymous = explain_authorization(None, Capability::AdjustRiskParams);
        assert!(!anonymous.granted);
        assert_eq!(anonymous.denial_reason.unwrap().kind, DenialKind::AnonymousSession);

        let wrong = explain_authorization(Some(Role::DataMaintainer), Capability::AdjustRiskParams);
        assert!(!wrong.granted);
        assert_eq!(wrong.allowed_roles, vec![Role::RiskAnalyst, Role::Admin]);
        assert_eq!(wrong.denial_reason.unwrap().kind, DenialKind::RoleNotAllowed);
    }

    #[test]
    fn explanation_serializes_with_wire_names() {
        let explanation = explain_authorization(Some(Role::Vip), Capability::UseAi);
        let json = serde_json::to_value(&explanation).unwrap();
        assert_eq!(json["capability"], "use_ai");
        assert_eq!(json["role"], "VIP");
        assert_eq!(json["granted"], true);
    }
}
