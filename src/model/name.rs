use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{BookError, BookResult};
use crate::validation;

/// A contact name, trimmed and with its first letter upper-cased.
/// Doubles as the key of the owning [`AddressBook`](super::AddressBook).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Name(String);

impl Name {
    pub fn new(raw: &str) -> BookResult<Self> {
        let normalized = validation::normalize_name(raw);
        if normalized.is_empty() {
            return Err(BookError::InvalidNameFormat(raw.to_string()));
        }
        Ok(Self(normalized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Name {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Name {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Name::new(&s).map_err(serde::de::Error::custom)
    }
}
