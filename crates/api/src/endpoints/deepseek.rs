//! `/deepseek`: LLM chat proxy.
//!
//! Replies are passed through as-is; their shape belongs to the upstream
//! model provider.

use serde_json::Value;

use crate::dto::{ChatRequest, DeepSeekStatus, SimpleChatRequest};
use crate::{ApiClient, ApiError};

pub async fn chat(client: &ApiClient, request: &ChatRequest) -> Result<Value, ApiError> {
    let url = client.endpoint(&["deepseek", "chat"])?;
    client.send(client.post(url).json(request)).await
}

/// Single-message chat; the backend builds the conversation around it.
pub async fn simple_chat(client: &ApiClient, request: &SimpleChatRequest) -> Result<Value, ApiError> {
    let url = client.endpoint(&["deepseek", "chat", "simple"])?;
    client.send(client.post(url).json(request)).await
}

pub async fn deepseek_status(client: &ApiClient) -> Result<DeepSeekStatus, ApiError> {
    let url = client.endpoint(&["deepseek", "status"])?;
    client.send(client.get(url)).await
}
