use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::error::EnhanceError;
use super::prompt::SYSTEM_PROMPT;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

/// Chat-completions request for one enhancement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnhancementRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub temperature: f64,
    pub max_tokens: u32,
}

impl EnhancementRequest {
    /// Builds the two-message request: fixed system instructions, then the
    /// structured text as the user turn.
    pub fn new(model: &str, content: &str, temperature: f64, max_tokens: u32) -> Self {
        Self {
            model: model.to_string(),
            messages: vec![
                ChatMessage {
                    role: Role::System,
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: Role::User,
                    content: content.to_string(),
                },
            ],
            temperature,
            max_tokens,
        }
    }

    pub fn to_json(&self) -> Value {
        json!({
            "model": self.model,
            "messages": self.messages,
            "temperature": self.temperature,
            "max_tokens": self.max_tokens,
        })
    }
}

/// A model entry from the models listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    #[serde(default)]
    pub owned_by: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ModelList {
    #[serde(default)]
    data: Vec<ModelInfo>,
}

/// Reads `choices[0].message.content` from a successful response body.
///
/// The returned text is trimmed and never empty.
pub fn parse_completion(body: &str) -> Result<String, EnhanceError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| EnhanceError::MalformedResponse(format!("body is not valid JSON: {e}")))?;

    let choice = value
        .get("choices")
        .and_then(Value::as_array)
        .and_then(|choices| choices.first())
        .ok_or(EnhanceError::NoChoices)?;

    let content = choice
        .get("message")
        .and_then(|message| message.get("content"))
        .and_then(Value::as_str)
        .ok_or(EnhanceError::MissingContent)?;

    let enhanced = content.trim();
    if enhanced.is_empty() {
        return Err(EnhanceError::EmptyResult);
    }
    Ok(enhanced.to_string())
}

/// Message for a non-2xx reply: the service's `error.message` when the body
/// carries one, otherwise `HTTP <status>`.
pub fn error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .pointer("/error/message")
                .and_then(Value::as_str)
                .map(str::to_string)
        })
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("HTTP {status}"))
}

/// Reads the `data` array of a models listing; absent means no models.
pub fn parse_models(body: &str) -> Result<Vec<ModelInfo>, EnhanceError> {
    serde_json::from_str::<ModelList>(body)
        .map(|list| list.data)
        .map_err(|e| EnhanceError::MalformedResponse(format!("invalid models listing: {e}")))
}
