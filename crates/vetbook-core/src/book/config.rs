//! Address book configuration.

use serde::{Deserialize, Serialize};

use super::{BookError, BookResult};

/// What `reset_data` does when the incoming person list repeats a person.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Treat the repeat as a caller bug and panic.
    #[default]
    Panic,
    /// Return [`BookError::DuplicatePerson`] and keep the current data.
    Reject,
}

/// Address book settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BookConfig {
    pub duplicate_policy: DuplicatePolicy,
}

impl BookConfig {
    /// Configuration that reports duplicates as errors instead of panicking.
    pub fn rejecting_duplicates() -> Self {
        Self {
            duplicate_policy: DuplicatePolicy::Reject,
        }
    }

    /// Parse configuration from JSON; absent keys take their defaults.
    pub fn from_json(json: &str) -> BookResult<Self> {
        let config: Option<Self> = serde_json::from_str(json)?;
        config.ok_or(BookError::NullArgument("config"))
    }
}
