use serde::{Deserialize, Serialize};

use crate::Role;

/// A named permission checked against the session role.
///
/// Every capability's allow-list lives in [`Capability::allowed_roles`];
/// the `can_*` helpers below are thin views over that one table.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    AccessDashboard,
    UseAi,
    AccessRiskAnalysis,
    AccessAlertManage,
    AccessDataManage,
    AccessPovertyAchievement,
    ModifyData,
    ExecuteSql,
    AdjustRiskParams,
}

const STAFF: &[Role] = &[Role::RiskAnalyst, Role::DataMaintainer, Role::Admin];
const AI_USERS: &[Role] = &[Role::Vip, Role::RiskAnalyst, Role::DataMaintainer, Role::Admin];
const RISK_TUNERS: &[Role] = &[Role::RiskAnalyst, Role::Admin];

impl Capability {
    pub const ALL: [Capability; 9] = [
        Capability::AccessDashboard,
        Capability::UseAi,
        Capability::AccessRiskAnalysis,
        Capability::AccessAlertManage,
        Capability::AccessDataManage,
        Capability::AccessPovertyAchievement,
        Capability::ModifyData,
        Capability::ExecuteSql,
        Capability::AdjustRiskParams,
    ];

    /// Roles allowed to use this capability; `None` means open to everyone,
    /// including an anonymous session.
    pub fn allowed_roles(&self) -> Option<&'static [Role]> {
        match self {
            Capability::AccessDashboard => None,
            Capability::UseAi => Some(AI_USERS),
            Capability::AccessRiskAnalysis
            | Capability::AccessAlertManage
            | Capability::AccessDataManage
            | Capability::AccessPovertyAchievement
            | Capability::ModifyData
            | Capability::ExecuteSql => Some(STAFF),
            Capability::AdjustRiskParams => Some(RISK_TUNERS),
        }
    }

    pub fn is_open(&self) -> bool {
        self.allowed_roles().is_none()
    }

    pub fn permits(&self, role: Option<Role>) -> bool {
        match (self.allowed_roles(), role) {
            (None, _) => true,
            (Some(_), None) => false,
            (Some(allowed), Some(role)) => allowed.contains(&role),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Capability::AccessDashboard => "dashboard.access",
            Capability::UseAi => "ai.use",
            Capability::AccessRiskAnalysis => "risk.analysis",
            Capability::AccessAlertManage => "alert.manage",
            Capability::AccessDataManage => "data.manage",
            Capability::AccessPovertyAchievement => "poverty.achievement",
            Capability::ModifyData => "data.modify",
            Capability::ExecuteSql => "sql.execute",
            Capability::AdjustRiskParams => "risk.params.adjust",
        }
    }
}

impl core::fmt::Display for Capability {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Role {
    /// Every capability this role is granted, in table order.
    pub fn capabilities(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|cap| cap.permits(Some(*self)))
            .collect()
    }
}

/// Always true: the dashboard is open to every session.
pub fn can_access_dashboard(role: Option<Role>) -> bool {
    Capability::AccessDashboard.permits(role)
}

pub fn can_use_ai(role: Option<Role>) -> bool {
    Capability::UseAi.permits(role)
}

pub fn can_access_risk_analysis(role: Option<Role>) -> bool {
    Capability::AccessRiskAnalysis.permits(role)
}

pub fn can_access_alert_manage(role: Option<Role>) -> bool {
    Capability::AccessAlertManage.permits(role)
}

pub fn can_access_data_manage(role: Option<Role>) -> bool {
    Capability::AccessDataManage.permits(role)
}

pub fn can_access_poverty_achievement(role: Option<Role>) -> bool {
    Capability::AccessPovertyAchievement.permits(role)
}

pub fn can_modify_data(role: Option<Role>) -> bool {
    Capability::ModifyData.permits(role)
}

pub fn can_execute_sql(role: Option<Role>) -> bool {
    Capability::ExecuteSql.permits(role)
}

/// Narrower than the other staff capabilities: data maintainers are excluded.
pub fn can_adjust_risk_params(role: Option<Role>) -> bool {
    Capability::AdjustRiskParams.permits(role)
}

pub fn is_admin(role: Option<Role>) -> bool {
    role == Some(Role::Admin)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    type Predicate = fn(Option<Role>) -> bool;

    const STAFF_PREDICATES: [Predicate; 6] = [
        can_access_alert_manage,
        can_access_data_manage,
        can_access_risk_analysis,
        can_access_poverty_achievement,
        can_execute_sql,
        can_modify_data,
    ];

    fn any_role() -> impl Strategy<Value = Option<Role>> {
        prop_oneof![
            Just(None),
            (0usize..Role::ALL.len()).prop_map(|i| Some(Role::ALL[i])),
        ]
    }

    #[test]
    fn anonymous_session_only_reaches_the_dashboard() {
        for cap in Capability::ALL {
            assert_eq!(cap.permits(None), cap == Capability::AccessDashboard, "{cap}");
        }
    }

    #[test]
    fn adjust_risk_params_excludes_vip_and_data_maintainer() {
        assert!(can_adjust_risk_params(Some(Role::RiskAnalyst)));
        assert!(can_adjust_risk_params(Some(Role::Admin)));
        assert!(!can_adjust_risk_params(Some(Role::Vip)));
        assert!(!can_adjust_risk_params(Some(Role::DataMaintainer)));
        assert!(!can_adjust_risk_params(Some(Role::User)));
    }

    #[test]
    fn user_role_behaves_like_anonymous_for_gated_capabilities() {
        assert_eq!(Role::User.capabilities(), vec![Capability::AccessDashboard]);
    }

    #[test]
    fn admin_holds_every_capability() {
        assert_eq!(Role::Admin.capabilities(), Capability::ALL.to_vec());
        assert!(is_admin(Some(Role::Admin)));
        assert!(!is_admin(Some(Role::RiskAnalyst)));
        assert!(!is_admin(None));
    }

    proptest! {
        #[test]
        fn dashboard_is_always_open(role in any_role()) {
            prop_assert!(can_access_dashboard(role));
        }

        #[test]
        fn staff_predicates_require_a_staff_role(role in any_role()) {
            let staff = matches!(
                role,
                Some(Role::Admin | Role::RiskAnalyst | Role::DataMaintainer)
            );
            for predicate in STAFF_PREDICATES {
                prop_assert_eq!(predicate(role), staff);
            }
        }

        #[test]
        fn ai_is_for_vip_and_staff(role in any_role()) {
            let expected = matches!(
                role,
                Some(Role::Vip | Role::RiskAnalyst | Role::DataMaintainer | Role::Admin)
            );
            prop_assert_eq!(can_use_ai(role), expected);
        }

        #[test]
        fn adjust_risk_params_is_analyst_or_admin(role in any_role()) {
            let expected = matches!(role, Some(Role::RiskAnalyst | Role::Admin));
            prop_assert_eq!(can_adjust_risk_params(role), expected);
        }
    }
}
