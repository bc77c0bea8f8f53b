//! `/data/quality`: data-quality issue triage.

use countyrisk_core::{Page, RecordId};

use crate::dto::{DataQualityIssue, PageQuery};
use crate::{ApiClient, ApiError};

pub async fn get_quality_checks(
    client: &ApiClient,
    query: PageQuery,
) -> Result<Page<DataQualityIssue>, ApiError> {
    let url = client.endpoint(&["data", "quality", "list"])?;
    client.send(client.get(url).query(&query)).await
}

/// POST /data/quality/resolve/{id}?comment=...
///
/// The comment travels in the query string; the body is empty.
pub async fn resolve_issue(client: &ApiClient, id: RecordId, comment: &str) -> Result<bool, ApiError> {
    let url = client.endpoint(&["data", "quality", "resolve", id.to_string().as_str()])?;
    client
        .send(client.post(url).query(&[("comment", comment)]))
        .await
}

pub async fn ignore_issue(client: &ApiClient, id: RecordId) -> Result<bool, ApiError> {
    let url = client.endpoint(&["data", "quality", "ignore", id.to_string().as_str()])?;
    client.send(client.post(url)).await
}
