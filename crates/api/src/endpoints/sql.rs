//! `/sql`: raw SQL console and schema introspection.
//!
//! The SQL text is placed in the query string, encoded once with the
//! `encodeURIComponent` character set.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use serde_json::Value;
use url::Url;

use crate::dto::{SqlQueryResult, SqlUpdateResult};
use crate::{ApiClient, ApiError};

/// Everything except `A-Z a-z 0-9 - _ . ! ~ * ' ( )` is escaped.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_uri_component(raw: &str) -> String {
    utf8_percent_encode(raw, URI_COMPONENT).to_string()
}

/// Relative path+query for a SELECT, e.g. `/sql/query?sql=SELECT%201`.
pub fn sql_query_path(sql: &str) -> String {
    format!("/sql/query?sql={}", encode_uri_component(sql))
}

/// Relative path+query for a data-modifying statement.
pub fn sql_update_path(sql: &str) -> String {
    format!("/sql/update?sql={}", encode_uri_component(sql))
}

fn statement_url(client: &ApiClient, action: &str, sql: &str) -> Result<Url, ApiError> {
    let mut url = client.endpoint(&["sql", action])?;
    // Already encoded: `set_query` leaves existing escapes alone.
    url.set_query(Some(&format!("sql={}", encode_uri_component(sql))));
    Ok(url)
}

pub async fn execute_query(client: &ApiClient, sql: &str) -> Result<SqlQueryResult, ApiError> {
    let url = statement_url(client, "query", sql)?;
    client.send(client.post(url)).await
}

/// Runs the statement as given; there is no client-side safety check.
pub async fn execute_update(client: &ApiClient, sql: &str) -> Result<SqlUpdateResult, ApiError> {
    let url = statement_url(client, "update", sql)?;
    client.send(client.post(url)).await
}

pub async fn get_table_list(client: &ApiClient) -> Result<Vec<String>, ApiError> {
    let url = client.endpoint(&["sql", "tables"])?;
    client.send(client.get(url)).await
}

pub async fn get_table_structure(client: &ApiClient, table_name: &str) -> Result<Vec<Value>, ApiError> {
    let url = client.endpoint(&["sql", "table-structure"])?;
    client
        .send(client.get(url).query(&[("tableName", table_name)]))
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ApiConfig;

    #[test]
    fn select_one_is_encoded_exactly_once() {
        assert_eq!(sql_query_path("SELECT 1"), "/sql/query?sql=SELECT%201");
    }

    #[test]
    fn reserved_characters_are_escaped() {
        assert_eq!(
            encode_uri_component("a=1&b=2;#%"),
            "a%3D1%26b%3D2%3B%23%25"
        );
        assert_eq!(encode_uri_component("count(*)!~'x'"), "count(*)!~'x'");
        assert_eq!(sql_update_path("DELETE FROM t"), "/sql/update?sql=DELETE%20FROM%20t");
    }

    #[test]
    fn non_ascii_is_utf8_encoded() {
        assert_eq!(encode_uri_component("县"), "%E5%8E%BF");
    }

    #[test]
    fn statement_url_is_not_double_encoded() {
        let client = ApiClient::new(&ApiConfig::parse("http://localhost:8080").unwrap()).unwrap();
        let url = statement_url(&client, "query", "SELECT 1").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/sql/query?sql=SELECT%201");

        let url = statement_url(&client, "query", "SELECT '50%'").unwrap();
        assert_eq!(url.query(), Some("sql=SELECT%20%2750%25%27"));
    }
}
