use thiserror::Error;

/// Failure of an enhancement request or of the workflow around it.
///
/// Every variant renders a message suitable for showing to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnhanceError {
    #[error("Content is required and must be a non-empty string")]
    EmptyContent,

    #[error("API key is required")]
    MissingApiKey,

    #[error("Content is too short to enhance (minimum {min} characters, found {actual})")]
    ContentTooShort { min: usize, actual: usize },

    #[error("Network error: unable to reach the enhancement service. {0}")]
    Network(String),

    #[error("Enhancement service error: {message}")]
    Status { status: u16, message: String },

    #[error("Invalid response format: {0}")]
    MalformedResponse(String),

    #[error("Invalid response format: no choices returned")]
    NoChoices,

    #[error("Invalid response format: no message content")]
    MissingContent,

    #[error("Enhanced text is empty")]
    EmptyResult,

    #[error("An enhancement is already in progress")]
    AlreadyInFlight,

    #[error("No matching enhancement is in progress")]
    NotInFlight,
}

impl EnhanceError {
    /// Whether the failure came from the service boundary (transport, status
    /// or response shape) rather than from local validation.
    pub fn is_service_error(&self) -> bool {
        matches!(
            self,
            Self::Network(_)
                | Self::Status { .. }
                | Self::MalformedResponse(_)
                | Self::NoChoices
                | Self::MissingContent
        )
    }
}
