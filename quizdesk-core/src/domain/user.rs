use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// The acting user of a quiz-taking session.
///
/// Passed in explicitly when a session starts; the core keeps no
/// process-wide notion of "the current user".
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", try_from = "RawIdentity")]
pub struct UserIdentity {
    user_id: Uuid,
    username: String,
}

/// Unchecked wire form; deserialized identities go through `UserIdentity::new`
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawIdentity {
    user_id: Uuid,
    username: String,
}

impl TryFrom<RawIdentity> for UserIdentity {
    type Error = UserError;

    fn try_from(raw: RawIdentity) -> Result<Self, Self::Error> {
        Self::new(raw.user_id, raw.username)
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UserError {
    #[error("Username cannot be empty")]
    EmptyUsername,

    #[error("Username must be between 1 and 50 characters")]
    InvalidUsernameLength,
}

impl UserIdentity {
    pub fn new(user_id: Uuid, username: String) -> Result<Self, UserError> {
        Self::validate_username(&username)?;
        Ok(Self { user_id, username })
    }

    /// Identity with a freshly generated user ID
    pub fn generate(username: String) -> Result<Self, UserError> {
        Self::new(Uuid::new_v4(), username)
    }

    fn validate_username(username: &str) -> Result<(), UserError> {
        if username.trim().is_empty() {
            return Err(UserError::EmptyUsername);
        }

        if username.chars().count() > 50 {
            return Err(UserError::InvalidUsernameLength);
        }

        Ok(())
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }
}

impl fmt::Display for UserIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.username, self.user_id)
    }
}
