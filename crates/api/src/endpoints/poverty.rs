//! `/poverty-achievement`: statistics on counties lifted out of poverty.

use serde_json::Value;

use countyrisk_core::CountyCode;

use crate::dto::IndicatorType;
use crate::{ApiClient, ApiError};

const BASE: &str = "poverty-achievement";

pub async fn get_poverty_overview(client: &ApiClient) -> Result<Value, ApiError> {
    let url = client.endpoint(&[BASE, "overview"])?;
    client.send(client.get(url)).await
}

pub async fn get_statistics_by_province(client: &ApiClient) -> Result<Vec<Value>, ApiError> {
    let url = client.endpoint(&[BASE, "statistics", "by-province"])?;
    client.send(client.get(url)).await
}

pub async fn get_statistics_by_delisting_year(client: &ApiClient) -> Result<Vec<Value>, ApiError> {
    let url = client.endpoint(&[BASE, "statistics", "by-delisting-year"])?;
    client.send(client.get(url)).await
}

/// Before/after comparison, optionally narrowed to one delisting year.
pub async fn get_delisting_comparison(
    client: &ApiClient,
    delisting_year: Option<i32>,
) -> Result<Value, ApiError> {
    let url = client.endpoint(&[BASE, "comparison"])?;
    let params: Vec<(&str, String)> = delisting_year
        .map(|year| ("delistingYear", year.to_string()))
        .into_iter()
        .collect();
    client.send(client.get(url).query(&params)).await
}

pub async fn get_poverty_county_list(
    client: &ApiClient,
    province: Option<&str>,
    delisting_year: Option<i32>,
) -> Result<Vec<Value>, ApiError> {
    let url = client.endpoint(&[BASE, "list"])?;
    let mut params: Vec<(&str, String)> = Vec::new();
    if let Some(province) = province {
        params.push(("province", province.to_string()));
    }
    if let Some(year) = delisting_year {
        params.push(("delistingYear", year.to_string()));
    }
    client.send(client.get(url).query(&params)).await
}

pub async fn get_county_detail(client: &ApiClient, code: &CountyCode) -> Result<Value, ApiError> {
    let url = client.endpoint(&[BASE, "county", code.as_str()])?;
    client.send(client.get(url)).await
}

pub async fn get_economic_trend(client: &ApiClient, indicator: IndicatorType) -> Result<Value, ApiError> {
    let url = client.endpoint(&[BASE, "trend"])?;
    client
        .send(client.get(url).query(&[("indicatorType", indicator.as_str())]))
        .await
}
