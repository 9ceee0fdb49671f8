use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors raised when parsing a region identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum RegionIdError {
    #[error("region id cannot be empty")]
    Empty,

    #[error("region id contains invalid character {found:?}: {id}")]
    InvalidChar { id: String, found: char },
}

/// Stable key of a region in the question catalog (e.g. `velikoTarnovo`).
///
/// Ids are ASCII alphanumerics plus `-` and `_`, so they can be used verbatim
/// as map keys in catalog files and UI element ids.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RegionId(String);

impl RegionId {
    /// Validates and wraps a region id.
    ///
    /// # Errors
    ///
    /// Returns `RegionIdError::Empty` for blank input and
    /// `RegionIdError::InvalidChar` for anything outside `[A-Za-z0-9_-]`.
    pub fn new(id: impl Into<String>) -> Result<Self, RegionIdError> {
        let id: String = id.into();
        let trimmed = id.trim();
        if trimmed.is_empty() {
            return Err(RegionIdError::Empty);
        }
        if let Some(found) = trimmed
            .chars()
            .find(|c| !(c.is_ascii_alphanumeric() || *c == '-' || *c == '_'))
        {
            return Err(RegionIdError::InvalidChar {
                id: trimmed.to_owned(),
                found,
            });
        }
        Ok(Self(trimmed.to_owned()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegionId({})", self.0)
    }
}

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for RegionId {
    type Err = RegionIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for RegionId {
    type Error = RegionIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<RegionId> for String {
    fn from(id: RegionId) -> Self {
        id.0
    }
}

impl AsRef<str> for RegionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
