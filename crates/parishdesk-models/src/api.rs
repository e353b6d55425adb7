//! The response envelope used by every parish backend endpoint.

use serde::{Deserialize, Serialize};

fn default_success() -> bool {
    true
}

/// `{ "success": bool, "data": T?, "message": string? }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum EnvelopeError {
    #[error("Backend rejected the request: {0}")]
    Rejected(String),

    #[error("Backend response carried no data")]
    MissingData,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }

    /// Unwraps the payload, treating `success: false` or a missing `data`
    /// as a failed call.
    pub fn into_data(self) -> Result<T, EnvelopeError> {
        if !self.success {
            return Err(EnvelopeError::Rejected(
                self.message.unwrap_or_else(|| "no message".to_string()),
            ));
        }
        self.data.ok_or(EnvelopeError::MissingData)
    }
}
