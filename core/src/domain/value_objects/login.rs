//! Result of a successful login.

use serde::{Deserialize, Serialize};

/// The credential handed back to a caller after a successful login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginOutcome {
    /// Signed bearer token
    pub token: String,

    /// Token lifetime in seconds from issuance
    pub expires_in: i64,
}

impl LoginOutcome {
    pub fn new(token: String, expires_in: i64) -> Self {
        Self { token, expires_in }
    }
}
