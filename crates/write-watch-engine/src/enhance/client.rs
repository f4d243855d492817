use super::error::EnhanceError;
use super::prompt::{CONNECTION_TEST_MESSAGE, DEFAULT_MAX_TOKENS, DEFAULT_TEMPERATURE};
use super::transport::Transport;
use super::wire::{EnhancementRequest, ModelInfo, error_message, parse_completion, parse_models};
use crate::structure::DEFAULT_MIN_CONTENT_LENGTH;

/// Where and how to call the enhancement service.
#[derive(Debug, Clone, PartialEq)]
pub struct EnhancementSettings {
    pub api_url: String,
    pub models_url: String,
    pub model: String,
    pub temperature: f64,
    pub max_tokens: u32,
    pub min_content_length: usize,
}

impl EnhancementSettings {
    /// Settings for the given endpoints and model with default sampling.
    pub fn new(api_url: &str, models_url: &str, model: &str) -> Self {
        Self {
            api_url: api_url.to_string(),
            models_url: models_url.to_string(),
            model: model.to_string(),
            temperature: DEFAULT_TEMPERATURE,
            max_tokens: DEFAULT_MAX_TOKENS,
            min_content_length: DEFAULT_MIN_CONTENT_LENGTH,
        }
    }
}

/// Client for the text-enhancement service.
///
/// One call per [`enhance`](Self::enhance); no retries. Timeouts belong to
/// the transport.
pub struct EnhancementClient<T: Transport> {
    transport: T,
    settings: EnhancementSettings,
    api_key: String,
}

impl<T: Transport> EnhancementClient<T> {
    pub fn new(transport: T, settings: EnhancementSettings, api_key: impl Into<String>) -> Self {
        Self {
            transport,
            settings,
            api_key: api_key.into(),
        }
    }

    pub fn settings(&self) -> &EnhancementSettings {
        &self.settings
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Sends structured text for enhancement and returns the rewritten text.
    ///
    /// Input is validated before anything is sent: empty content, a missing
    /// key and content shorter than the configured minimum are rejected.
    pub fn enhance(&self, content: &str) -> Result<String, EnhanceError> {
        let trimmed = content.trim();
        if trimmed.is_empty() {
            return Err(EnhanceError::EmptyContent);
        }
        self.require_api_key()?;

        let actual = trimmed.chars().count();
        let min = self.settings.min_content_length;
        if actual < min {
            return Err(EnhanceError::ContentTooShort { min, actual });
        }

        let request = EnhancementRequest::new(
            &self.settings.model,
            content,
            self.settings.temperature,
            self.settings.max_tokens,
        );
        log::info!(
            "Requesting enhancement of {actual} chars with model {}",
            self.settings.model
        );

        let reply = self
            .transport
            .post_json(&self.settings.api_url, &self.api_key, &request.to_json())
            .map_err(|e| EnhanceError::Network(e.to_string()))?;

        if !reply.is_success() {
            let message = error_message(reply.status, &reply.body);
            log::warn!("Enhancement service returned {}: {message}", reply.status);
            return Err(EnhanceError::Status {
                status: reply.status,
                message,
            });
        }

        let enhanced = parse_completion(&reply.body)?;
        log::info!("Received {} chars of enhanced text", enhanced.chars().count());
        Ok(enhanced)
    }

    /// Sends a short test sentence; true when the service answered with text.
    pub fn test_connection(&self) -> bool {
        match self.enhance(CONNECTION_TEST_MESSAGE) {
            Ok(_) => true,
            Err(e) => {
                log::warn!("Enhancement connection test failed: {e}");
                false
            }
        }
    }

    /// Lists the models available to this key.
    pub fn list_models(&self) -> Result<Vec<ModelInfo>, EnhanceError> {
        self.require_api_key()?;

        let reply = self
            .transport
            .get(&self.settings.models_url, &self.api_key)
            .map_err(|e| EnhanceError::Network(e.to_string()))?;

        if !reply.is_success() {
            return Err(EnhanceError::Status {
                status: reply.status,
                message: format!("Failed to fetch models: {}", reply.status),
            });
        }

        parse_models(&reply.body)
    }

    fn require_api_key(&self) -> Result<(), EnhanceError> {
        if self.api_key.trim().is_empty() {
            return Err(EnhanceError::MissingApiKey);
        }
        Ok(())
    }
}
