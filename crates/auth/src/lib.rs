//! `countyrisk-auth` — pure role/capability policy plus the client session.
//!
//! The policy half is decoupled from HTTP and storage. The session half only
//! knows about a key/value [`SessionStore`]; where the bytes live is the
//! store's business.

pub mod authorize;
pub mod permissions;
pub mod roles;
pub mod session;

pub use authorize::{AuthorizationExplanation, AuthzError, DenialKind, DenialReason, authorize, explain_authorization};
pub use permissions::{
    Capability, can_access_alert_manage, can_access_dashboard, can_access_data_manage,
    can_access_poverty_achievement, can_access_risk_analysis, can_adjust_risk_params,
    can_execute_sql, can_modify_data, can_use_ai, is_admin,
};
pub use roles::{Role, UnknownRole};
pub use session::{
    FileSessionStore, IS_LOGGED_IN_KEY, MemorySessionStore, Session, SessionStore, USER_ROLE_KEY,
};
