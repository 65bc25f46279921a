use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::errors::DomainError;

const MAX_ID_LEN: usize = 128;

/// Opaque record identifier, unique within one catalog domain.
///
/// Remote services may send ids as strings or integers; both are kept in
/// their textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct RecordId(Arc<str>);

impl RecordId {
    /// Validates an untrusted id before it is used in a lookup or a URL path.
    pub fn parse(raw: &str) -> Result<Self, DomainError> {
        if Self::is_valid(raw) {
            Ok(Self(Arc::from(raw)))
        } else {
            Err(DomainError::InvalidRecordId(raw.chars().take(MAX_ID_LEN).collect()))
        }
    }

    pub fn is_valid(raw: &str) -> bool {
        !raw.is_empty()
            && raw.len() <= MAX_ID_LEN
            && raw
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self(Arc::from(""))
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        Self(Arc::from(value.to_string()))
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for RecordId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(i64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => Self(Arc::from(s)),
            RawId::Number(n) => Self::from(n),
        })
    }
}
