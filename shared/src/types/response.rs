//! Standard API response envelopes.

use serde::{Deserialize, Serialize};

/// Error response returned by every rejected request.
///
/// The message is a short human-readable sentence; internal error detail
/// (query text, stack traces) never crosses the API boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Stable error code for programmatic handling
    pub error: String,
    /// Human-readable error message
    pub message: String,
}

impl ErrorResponse {
    /// Create a new error response
    pub fn new(error: impl ToString, message: impl ToString) -> Self {
        Self {
            error: error.to_string(),
            message: message.to_string(),
        }
    }
}

/// Simple message-only success response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Create a new message response
    pub fn new(message: impl ToString) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_response_serialization() {
        let response = ErrorResponse::new("not_found", "Employee not found.");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["error"], "not_found");
        assert_eq!(json["message"], "Employee not found.");
    }

    #[test]
    fn test_message_response_serialization() {
        let response = MessageResponse::new("Employee deleted successfully.");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Employee deleted successfully.");
    }
}
