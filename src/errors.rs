use thiserror::Error;

/// Result type alias for FCM operations
pub type Result<T> = std::result::Result<T, FcmError>;

/// FCM Client Error Types
#[derive(Error, Debug)]
pub enum FcmError {
    /// Caller misuse while building a message
    #[error("Invalid message: {0}")]
    Validation(String),

    #[error("Message must have at least one recipient")]
    EmptyRecipients,

    /// Any failure surfaced by the HTTP transport, passed through untranslated
    #[error("FCM send request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Failed to encode FCM message: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("FCM configuration error: {0}")]
    Config(String),
}

impl FcmError {
    /// True for errors caused by how the message was assembled
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::EmptyRecipients)
    }
}
