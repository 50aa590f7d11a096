//! Author Identity
//!
//! The stable per-browser identifier used for like de-duplication and for
//! owning visited-region records. Never generated; the user enters it.

use serde::{Deserialize, Serialize};

use super::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthorId(String);

impl AuthorId {
    /// Accepts `[A-Za-z0-9_-]+` after trimming
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let id = raw.trim();
        let valid = !id.is_empty()
            && id
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(Self(id.to_string()))
        } else {
            Err(ValidationError::MalformedIdentifier)
        }
    }

    /// Read a stored value; anything that does not validate counts as unset
    pub fn from_stored(raw: Option<String>) -> Option<Self> {
        raw.and_then(|s| Self::parse(&s).ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for AuthorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
