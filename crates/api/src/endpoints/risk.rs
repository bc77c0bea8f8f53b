//! `/risk`: assessments, trends and indicator configuration.

use std::collections::BTreeMap;

use serde_json::Value;

use countyrisk_core::{CountyCode, RecordId};

use crate::dto::{RiskAssessment, RiskIndicator, RiskListQuery};
use crate::{ApiClient, ApiError};

/// Page size the dashboard uses for the "top risk counties" board.
pub const DEFAULT_TOP_LIMIT: u32 = 10;

/// GET /risk/level/{level}, where `level` is an assessment label such as `"高风险"`.
pub async fn get_risk_by_level(client: &ApiClient, level: &str) -> Result<Vec<RiskAssessment>, ApiError> {
    let url = client.endpoint(&["risk", "level", level])?;
    client.send(client.get(url)).await
}

/// Latest assessment for a county, or the one for `year` when given.
pub async fn get_county_risk(
    client: &ApiClient,
    code: &CountyCode,
    year: Option<i32>,
) -> Result<Option<RiskAssessment>, ApiError> {
    let url = client.endpoint(&["risk", "county", code.as_str()])?;
    let params: Vec<(&str, i32)> = year.map(|y| ("year", y)).into_iter().collect();
    client.send(client.get(url).query(&params)).await
}

pub async fn get_risk_statistics(client: &ApiClient) -> Result<Value, ApiError> {
    let url = client.endpoint(&["risk", "statistics"])?;
    client.send(client.get(url)).await
}

pub async fn get_risk_trend(client: &ApiClient, code: &CountyCode) -> Result<Vec<Value>, ApiError> {
    let url = client.endpoint(&["risk", "trend", code.as_str()])?;
    client.send(client.get(url)).await
}

pub async fn get_average_risk_trend(client: &ApiClient) -> Result<Vec<Value>, ApiError> {
    let url = client.endpoint(&["risk", "trend", "average"])?;
    client.send(client.get(url)).await
}

pub async fn get_top_risk_counties(client: &ApiClient, limit: u32) -> Result<Vec<Value>, ApiError> {
    let url = client.endpoint(&["risk", "top"])?;
    client.send(client.get(url).query(&[("limit", limit)])).await
}

pub async fn get_risk_list(client: &ApiClient, query: &RiskListQuery) -> Result<Vec<Value>, ApiError> {
    let url = client.endpoint(&["risk", "list"])?;
    client.send(client.get(url).query(query)).await
}

/// Indicators keyed by category.
pub async fn get_grouped_indicators(
    client: &ApiClient,
) -> Result<BTreeMap<String, Vec<RiskIndicator>>, ApiError> {
    let url = client.endpoint(&["risk", "indicators", "grouped"])?;
    client.send(client.get(url)).await
}

/// PUT /risk/indicators/{id}
pub async fn update_indicator(
    client: &ApiClient,
    id: RecordId,
    indicator: &RiskIndicator,
) -> Result<bool, ApiError> {
    let url = client.endpoint(&["risk", "indicators", id.to_string().as_str()])?;
    client.send(client.put(url).json(indicator)).await
}

/// Kick off a recalculation; the backend runs it in the background.
///
/// Without a year every year is recalculated.
pub async fn calculate_risk(client: &ApiClient, year: Option<i32>) -> Result<(), ApiError> {
    let url = client.endpoint(&["risk", "indicators", "calculate"])?;
    let params: Vec<(&str, i32)> = year.map(|y| ("year", y)).into_iter().collect();
    client.send(client.post(url).query(&params)).await
}

/// Reset every indicator's weight and thresholds to the shipped defaults.
pub async fn restore_defaults(client: &ApiClient) -> Result<(), ApiError> {
    let url = client.endpoint(&["risk", "indicators", "restore-defaults"])?;
    client.send(client.post(url)).await
}
