//! `/alert`: alert rules and alert records.

use serde_json::Value;

use countyrisk_core::{Page, RecordId};

use crate::dto::{AlertRule, PageQuery};
use crate::{ApiClient, ApiError};

/// GET /alert/rule/list
pub async fn get_alert_rules(client: &ApiClient, query: PageQuery) -> Result<Page<AlertRule>, ApiError> {
    let url = client.endpoint(&["alert", "rule", "list"])?;
    client.send(client.get(url).query(&query)).await
}

/// POST /alert/rule - create or update, depending on `rule_id`.
pub async fn save_alert_rule(client: &ApiClient, rule: &AlertRule) -> Result<bool, ApiError> {
    let url = client.endpoint(&["alert", "rule"])?;
    client.send(client.post(url).json(rule)).await
}

/// DELETE /alert/rule/{id}
pub async fn delete_alert_rule(client: &ApiClient, id: RecordId) -> Result<bool, ApiError> {
    let url = client.endpoint(&["alert", "rule", id.to_string().as_str()])?;
    client.send(client.delete(url)).await
}

/// GET /alert/list
///
/// Records are joined with county data server side, so they stay untyped.
pub async fn get_alerts(client: &ApiClient, query: PageQuery) -> Result<Page<Value>, ApiError> {
    let url = client.endpoint(&["alert", "list"])?;
    client.send(client.get(url).query(&query)).await
}

/// POST /alert/confirm/{id}
pub async fn confirm_alert(client: &ApiClient, id: RecordId) -> Result<bool, ApiError> {
    let url = client.endpoint(&["alert", "confirm", id.to_string().as_str()])?;
    client.send(client.post(url)).await
}

/// POST /alert/check - evaluate rules now; yields the number of alerts raised.
pub async fn check_alerts(client: &ApiClient) -> Result<i64, ApiError> {
    let url = client.endpoint(&["alert", "check"])?;
    client.send(client.post(url)).await
}
