//! `/county`: county lookups.

use countyrisk_core::CountyCode;

use crate::dto::County;
use crate::{ApiClient, ApiError};

pub async fn get_county_list(client: &ApiClient) -> Result<Vec<County>, ApiError> {
    let url = client.endpoint(&["county", "list"])?;
    client.send(client.get(url)).await
}

/// `None` when the backend knows no such county.
pub async fn get_county_by_code(client: &ApiClient, code: &CountyCode) -> Result<Option<County>, ApiError> {
    let url = client.endpoint(&["county", code.as_str()])?;
    client.send(client.get(url)).await
}

pub async fn get_county_by_province(client: &ApiClient, province_name: &str) -> Result<Vec<County>, ApiError> {
    let url = client.endpoint(&["county", "province", province_name])?;
    client.send(client.get(url)).await
}
