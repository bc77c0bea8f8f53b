//! `/system`: overview and runtime configuration.

use countyrisk_core::RecordId;

use crate::dto::{ConfigUpdate, SystemConfig, SystemOverview};
use crate::{ApiClient, ApiError};

pub async fn get_overview(client: &ApiClient) -> Result<SystemOverview, ApiError> {
    let url = client.endpoint(&["system", "overview"])?;
    client.send(client.get(url)).await
}

/// All configs, or only those in `category`.
pub async fn get_configs(client: &ApiClient, category: Option<&str>) -> Result<Vec<SystemConfig>, ApiError> {
    let url = client.endpoint(&["system", "configs"])?;
    let params: Vec<(&str, &str)> = category.map(|c| ("category", c)).into_iter().collect();
    client.send(client.get(url).query(&params)).await
}

/// PUT /system/configs/{id}. Non-editable configs are refused by the backend
/// with an envelope error.
pub async fn update_config(client: &ApiClient, id: RecordId, update: &ConfigUpdate) -> Result<bool, ApiError> {
    let url = client.endpoint(&["system", "configs", id.to_string().as_str()])?;
    client.send(client.put(url).json(update)).await
}
