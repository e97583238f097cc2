use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

use crate::error::{BookError, BookResult};
use crate::validation;

/// A phone number of exactly ten ASCII digits, stored as given.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phone(String);

impl Phone {
    pub fn new(raw: &str) -> BookResult<Self> {
        if !validation::is_valid_phone(raw) {
            return Err(BookError::InvalidPhoneFormat(raw.to_string()));
        }
        Ok(Self(raw.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for Phone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Phone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Phone::new(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_keeps_digits_unchanged() {
        assert_eq!(Phone::new("0501234567").unwrap().as_str(), "0501234567");
    }

    #[test]
    fn phone_rejects_bad_input() {
        for raw in ["", "12345", "050 123 4567", "050123456a", "+380501234567"] {
            assert!(
                matches!(Phone::new(raw), Err(BookError::InvalidPhoneFormat(_))),
                "accepted {raw:?}"
            );
        }
    }

    #[test]
    fn phone_serializes_as_string() {
        let phone = Phone::new("0501234567").unwrap();
        assert_eq!(serde_json::to_string(&phone).unwrap(), "\"0501234567\"");
    }

    #[test]
    fn phone_deserialization_invalid_fails() {
        let result: Result<Phone, _> = serde_json::from_str("\"invalid\"");
        assert!(result.is_err());
    }
}
