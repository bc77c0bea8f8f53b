//! Route declarations.

use serde::Serialize;

use countyrisk_auth::{Capability, Role};

pub const LOGIN_PATH: &str = "/login";
pub const DEFAULT_PATH: &str = "/dashboard";

/// Query key carrying the originally requested path to the login page.
pub const REDIRECT_QUERY_KEY: &str = "redirect";

/// One entry of the route table.
///
/// A route either renders a page or redirects to another path. Page access is
/// described by `requires_auth` and an optional capability; the allowed roles
/// come from the capability table, never from the route itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteDescriptor {
    pub path: String,
    pub name: Option<String>,
    pub title: Option<String>,
    pub requires_auth: bool,
    pub capability: Option<Capability>,
    pub redirect: Option<String>,
}

impl RouteDescriptor {
    /// A public page; chain [`requires_auth`](Self::requires_auth) and
    /// [`gated_by`](Self::gated_by) to restrict it.
    pub fn page(path: impl Into<String>, name: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: Some(name.into()),
            title: Some(title.into()),
            requires_auth: false,
            capability: None,
            redirect: None,
        }
    }

    pub fn redirect(path: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: None,
            title: None,
            requires_auth: false,
            capability: None,
            redirect: Some(target.into()),
        }
    }

    pub fn requires_auth(mut self) -> Self {
        self.requires_auth = true;
        self
    }

    pub fn gated_by(mut self, capability: Capability) -> Self {
        self.capability = Some(capability);
        self
    }

    /// Roles allowed on this route; empty means no role restriction.
    pub fn roles(&self) -> &'static [Role] {
        self.capability
            .and_then(|cap| cap.allowed_roles())
            .unwrap_or(&[])
    }

    pub fn is_redirect(&self) -> bool {
        self.redirect.is_some()
    }
}

/// The dashboard's route table.
pub fn default_routes() -> Vec<RouteDescriptor> {
    vec![
        RouteDescriptor::redirect("/", DEFAULT_PATH),
        RouteDescriptor::page(LOGIN_PATH, "Login", "登录"),
        RouteDescriptor::page(DEFAULT_PATH, "Dashboard", "风险监控大屏")
            .requires_auth()
            .gated_by(Capability::AccessDashboard),
        RouteDescriptor::page("/risk-analysis", "RiskAnalysis", "风险分析")
            .requires_auth()
            .gated_by(Capability::AccessRiskAnalysis),
        RouteDescriptor::page("/alert-manage", "AlertManage", "预警管理")
            .requires_auth()
            .gated_by(Capability::AccessAlertManage),
        RouteDescriptor::page("/data-manage", "DataManage", "数据管理")
            .requires_auth()
            .gated_by(Capability::AccessDataManage),
        RouteDescriptor::page("/poverty-achievement", "PovertyAchievement", "脱贫攻坚成果")
            .requires_auth()
            .gated_by(Capability::AccessPovertyAchievement),
        RouteDescriptor::page("/sql-console", "SqlConsole", "SQL控制台")
            .requires_auth()
            .gated_by(Capability::ExecuteSql),
        RouteDescriptor::page("/ai-assistant", "AiAssistant", "AI助手")
            .requires_auth()
            .gated_by(Capability::UseAi),
        RouteDescriptor::page("/risk-params", "RiskParams", "风险参数")
            .requires_auth()
            .gated_by(Capability::AdjustRiskParams),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find(path: &str) -> RouteDescriptor {
        default_routes()
            .into_iter()
            .find(|r| r.path == path)
            .unwrap()
    }

    #[test]
    fn dashboard_has_no_role_restriction() {
        let dashboard = find(DEFAULT_PATH);
        assert!(dashboard.requires_auth);
        assert!(dashboard.roles().is_empty());
    }

    #[test]
    fn risk_analysis_roles_come_from_the_capability_table() {
        let route = find("/risk-analysis");
        assert_eq!(
            route.roles(),
            &[Role::RiskAnalyst, Role::DataMaintainer, Role::Admin]
        );
    }

    #[test]
    fn login_is_public_and_root_redirects() {
        let login = find(LOGIN_PATH);
        assert!(!login.requires_auth);
        assert!(login.roles().is_empty());

        let root = find("/");
        assert_eq!(root.redirect.as_deref(), Some(DEFAULT_PATH));
    }

    #[test]
    fn every_page_except_login_requires_auth() {
        for route in default_routes().into_iter().filter(|r| !r.is_redirect()) {
            assert_eq!(route.requires_auth, route.path != LOGIN_PATH, "{}", route.path);
        }
    }
}
