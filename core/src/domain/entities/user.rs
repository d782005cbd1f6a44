//! User entity representing a registered account.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A registered user able to authenticate against the API.
///
/// Users are created once via registration and read during login; this core
/// never updates or deletes them. The identifier is assigned by the store on
/// creation and is immutable afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned unique identifier
    pub id: i64,

    /// Unique username, case-sensitive
    pub username: String,

    /// bcrypt hash of the password; the plaintext is never stored
    #[serde(skip_serializing)]
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

/// A user pending insertion; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    /// Creates a new user candidate from a username and an already-hashed
    /// password.
    pub fn new(username: impl Into<String>, password_hash: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password_hash: password_hash.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_holds_hash_not_password() {
        let candidate = NewUser::new("alice", "$2b$12$abcdefghijklmnopqrstuv");
        assert_eq!(candidate.username, "alice");
        assert!(candidate.password_hash.starts_with("$2b$"));
    }

    #[test]
    fn test_password_hash_not_serialized() {
        let user = User {
            id: 1,
            username: "alice".to_string(),
            password_hash: "$2b$12$abcdefghijklmnopqrstuv".to_string(),
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert!(json.get("password_hash").is_none());
        assert_eq!(json["username"], "alice");
    }
}
