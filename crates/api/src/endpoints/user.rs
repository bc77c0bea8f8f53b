//! `/user`: sign-in.

use crate::dto::{LoginOutcome, LoginResponse};
use crate::{ApiClient, ApiError};

/// POST /user/login?username=..&password=..
///
/// This endpoint answers with a bare `{ success, ... }` object rather than
/// the usual envelope.
pub async fn login(client: &ApiClient, username: &str, password: &str) -> Result<LoginOutcome, ApiError> {
    let url = client.endpoint(&["user", "login"])?;
    let req = client
        .post(url)
        .query(&[("username", username), ("password", password)]);

    let resp: LoginResponse = client.send_bare(req).await?;
    if !resp.success {
        let message = resp.message.unwrap_or_else(|| "login failed".to_string());
        tracing::info!(username, %message, "login rejected");
        return Err(ApiError::LoginRejected(message));
    }

    Ok(LoginOutcome {
        username: resp.username.unwrap_or_else(|| username.to_string()),
        role: resp.role,
    })
}
