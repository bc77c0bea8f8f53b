//! HTTP adapter shared by every endpoint module.

use reqwest::{Method, RequestBuilder};
use serde::de::DeserializeOwned;
use tracing::Instrument;
use url::Url;

use countyrisk_auth::Role;

use crate::{ApiConfig, ApiError, envelope};

/// Header the backend reads to apply its own role checks.
pub const ROLE_HEADER: &str = "role";

/// Thin client around `reqwest`.
///
/// Cloning is cheap: the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    role: Option<Role>,
}

impl ApiClient {
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.clone(),
            role: None,
        })
    }

    /// Attach (or drop) the session role sent with every request.
    pub fn with_role(mut self, role: Option<Role>) -> Self {
        self.role = role;
        self
    }

    pub fn role(&self) -> Option<Role> {
        self.role
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Absolute URL for an endpoint given as path segments.
    ///
    /// Each segment is percent-encoded on its own, so a `/` inside a value
    /// never splits the path. Any path already on the base URL is kept.
    pub fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ApiError::Config(format!("base URL '{}' cannot carry a path", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    pub(crate) fn request(&self, method: Method, url: Url) -> RequestBuilder {
        let req = self.http.request(method, url);
        match self.role {
            Some(role) => req.header(ROLE_HEADER, role.as_str()),
            None => req,
        }
    }

    pub(crate) fn get(&self, url: Url) -> RequestBuilder {
        self.request(Method::GET, url)
    }

    pub(crate) fn post(&self, url: Url) -> RequestBuilder {
        self.request(Method::POST, url)
    }

    pub(crate) fn put(&self, url: Url) -> RequestBuilder {
        self.request(Method::PUT, url)
    }

    pub(crate) fn delete(&self, url: Url) -> RequestBuilder {
        self.request(Method::DELETE, url)
    }

    /// Send a request to an enveloped endpoint and unwrap `data`.
    pub(crate) async fn send<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let body = self.execute(req).await?;
        envelope::decode(&body).inspect_err(|e| tracing::warn!(error = %e, "backend call failed"))
    }

    /// Send a request to an endpoint that answers with a bare JSON body.
    pub(crate) async fn send_bare<T: DeserializeOwned>(&self, req: RequestBuilder) -> Result<T, ApiError> {
        let body = self.execute(req).await?;
        serde_json::from_str(&body).map_err(|e| {
            let err = ApiError::Decode(e.to_string());
            tracing::warn!(error = %err, "backend call failed");
            err
        })
    }

    async fn execute(&self, req: RequestBuilder) -> Result<String, ApiError> {
        let request = req
            .build()
            .map_err(|e| ApiError::InvalidRequest(e.to_string()))?;

        let span = tracing::debug_span!(
            "api_request",
            method = %request.method(),
            path = %request.url().path(),
        );

        async move {
            tracing::debug!(query = request.url().query().unwrap_or(""), "sending");

            let resp = self.http.execute(request).await.map_err(|e| {
                tracing::warn!(error = %e, "request failed");
                ApiError::Network(e.to_string())
            })?;

            let status = resp.status();
            if !status.is_success() {
                let body = resp.text().await.unwrap_or_default();
                tracing::warn!(status = status.as_u16(), "backend returned error status");
                return Err(ApiError::Http {
                    status: status.as_u16(),
                    body,
                });
            }

            let body = resp
                .text()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            tracing::debug!(status = status.as_u16(), bytes = body.len(), "received");
            Ok(body)
        }
        .instrument(span)
        .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> ApiClient {
        ApiClient::new(&ApiConfig::parse(base).unwrap()).unwrap()
    }

    #[test]
    fn endpoint_appends_to_bare_host() {
        let url = client("http://localhost:8080").endpoint(&["alert", "rule", "list"]).unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/alert/rule/list");
    }

    #[test]
    fn endpoint_keeps_base_path() {
        let url = client("http://localhost:8080/api/").endpoint(&["county", "list"]).unwrap();
        assert_eq!(url.path(), "/api/county/list");
    }

    #[test]
    fn endpoint_segments_are_encoded() {
        let url = client("http://localhost:8080").endpoint(&["county", "province", "河北/省"]).unwrap();
        assert_eq!(
            url.path(),
            "/county/province/%E6%B2%B3%E5%8C%97%2F%E7%9C%81"
        );
    }

    #[test]
    fn role_header_is_only_sent_with_a_role() {
        let anonymous = client("http://localhost:8080");
        let url = anonymous.endpoint(&["risk", "statistics"]).unwrap();
        let req = anonymous.get(url.clone()).build().unwrap();
        assert!(req.headers().get(ROLE_HEADER).is_none());

        let analyst = anonymous.with_role(Some(Role::RiskAnalyst));
        let req = analyst.get(url).build().unwrap();
        assert_eq!(req.headers().get(ROLE_HEADER).unwrap(), "RISK_ANALYST");
    }
}
