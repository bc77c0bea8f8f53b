//! Request/response DTOs (backend wire shapes).
//!
//! Field names follow the backend's camelCase JSON. Timestamps arrive as
//! zone-less local date-times.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use countyrisk_core::{CountyCode, RecordId, RiskLevel};

// ─────────────────────────────────────────────────────────────────────────────
// Paging
// ─────────────────────────────────────────────────────────────────────────────

/// `page`/`size` parameters of list endpoints. Both are 1-based server side
/// and default to page 1 of 10 when omitted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PageQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

impl PageQuery {
    pub fn new(page: u32, size: u32) -> Self {
        Self {
            page: Some(page),
            size: Some(size),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Alerts
// ─────────────────────────────────────────────────────────────────────────────

/// Alert rule. A rule without `ruleId` is created on save, otherwise updated.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertRule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule_id: Option<RecordId>,
    pub rule_name: String,
    pub rule_category: Option<String>,
    pub rule_expression: Option<String>,
    pub conditions_json: Option<String>,
    pub threshold_high: Option<f64>,
    pub threshold_medium: Option<f64>,
    pub threshold_low: Option<f64>,
    pub weight: Option<f64>,
    pub priority: Option<i32>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Counties
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct County {
    pub county_code: CountyCode,
    pub county_name: String,
    pub city_name: Option<String>,
    pub province_name: Option<String>,
    pub region_code: Option<String>,
    pub development_level: Option<String>,
    pub land_area_km2: Option<f64>,
    pub administrative_level: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Data quality
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataQualityIssue {
    pub id: RecordId,
    pub table_name: Option<String>,
    pub county_code: Option<String>,
    pub year: Option<i32>,
    pub county_name: Option<String>,
    pub province_name: Option<String>,
    pub check_type: Option<String>,
    pub field_name: Option<String>,
    pub issue_description: Option<String>,
    pub expected_value: Option<String>,
    pub actual_value: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub detected_at: Option<NaiveDateTime>,
    pub resolved_at: Option<NaiveDateTime>,
    pub resolution_comment: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// LLM chat proxy
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Sampling options shared by both chat endpoints; unset fields are omitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChatOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub messages: Vec<ChatMessage>,
    #[serde(flatten)]
    pub options: ChatOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimpleChatRequest {
    pub message: String,
    #[serde(rename = "systemPrompt", skip_serializing_if = "Option::is_none")]
    pub system_prompt: Option<String>,
    #[serde(flatten)]
    pub options: ChatOptions,
}

impl SimpleChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            system_prompt: None,
            options: ChatOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepSeekStatus {
    pub configured: bool,
    #[serde(default)]
    pub message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Poverty achievement
// ─────────────────────────────────────────────────────────────────────────────

/// Series requested from the economic trend endpoint.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorType {
    #[default]
    Gdp,
    Income,
    Fiscal,
}

impl IndicatorType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorType::Gdp => "gdp",
            IndicatorType::Income => "income",
            IndicatorType::Fiscal => "fiscal",
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Risk
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskAssessment {
    pub id: Option<i64>,
    pub county_code: CountyCode,
    pub year: Option<i32>,
    pub economic_risk_score: Option<f64>,
    pub social_risk_score: Option<f64>,
    pub environment_risk_score: Option<f64>,
    pub governance_risk_score: Option<f64>,
    pub development_risk_score: Option<f64>,
    pub comprehensive_risk_score: Option<f64>,
    /// Textual label such as `"高风险"`; see [`RiskAssessment::level`].
    pub risk_level: Option<String>,
    pub risk_trend: Option<String>,
    pub major_risk_factors: Option<String>,
    pub assessment_date: Option<NaiveDateTime>,
}

impl RiskAssessment {
    pub fn level(&self) -> RiskLevel {
        RiskLevel::from_assessment_label(self.risk_level.as_deref())
    }
}

/// Filters for the risk list; unset filters are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskListQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub province_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RiskIndicator {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub indicator_id: Option<RecordId>,
    pub indicator_code: Option<String>,
    pub indicator_name: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub calculation_method: Option<String>,
    pub data_source: Option<String>,
    pub weight: Option<f64>,
    pub threshold_high: Option<f64>,
    pub threshold_medium: Option<f64>,
    pub threshold_low: Option<f64>,
    pub unit: Option<String>,
    /// `GT`: values above the threshold are risky; `LT`: values below are.
    pub comparison_operator: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

// ─────────────────────────────────────────────────────────────────────────────
// SQL console
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlQueryResult {
    pub data: Vec<Value>,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SqlUpdateResult {
    pub affected_rows: i64,
    #[serde(default)]
    pub message: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// System
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemConfig {
    pub config_id: RecordId,
    pub config_key: String,
    pub config_value: Option<String>,
    pub config_type: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub is_editable: Option<bool>,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
    pub updated_by: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigUpdate {
    pub config_value: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemOverview {
    pub service_info: Option<ServiceInfo>,
    pub metrics: Option<OverviewMetrics>,
    #[serde(default)]
    pub recent_alerts: Vec<AlertSummary>,
    #[serde(default)]
    pub pending_issues: Vec<DataIssueSummary>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceInfo {
    pub name: Option<String>,
    pub version: Option<String>,
    pub start_time: Option<NaiveDateTime>,
    pub uptime_seconds: Option<i64>,
    pub java_version: Option<String>,
    pub environment: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OverviewMetrics {
    pub total_counties: i64,
    pub risk_records: i64,
    pub alert_count: i64,
    pub pending_alerts: i64,
    pub resolved_alerts: i64,
    pub data_issues: i64,
    pub unresolved_issues: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AlertSummary {
    pub alert_id: RecordId,
    pub county_name: Option<String>,
    pub province_name: Option<String>,
    pub risk_level: Option<String>,
    pub alert_type: Option<String>,
    pub status: Option<String>,
    pub created_at: Option<NaiveDateTime>,
    pub title: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DataIssueSummary {
    pub id: RecordId,
    pub table_name: Option<String>,
    pub county_name: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub detected_at: Option<NaiveDateTime>,
    pub issue_description: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Login
// ─────────────────────────────────────────────────────────────────────────────

/// Bare (un-enveloped) login response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
}

/// Successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LoginOutcome {
    pub username: String,
    /// Raw role string as returned by the backend.
    pub role: Option<String>,
}
