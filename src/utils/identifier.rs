//! Player identifier handling
//!
//! Accounts are keyed by a UUID which the upstream API always writes in its
//! dash-free form. `Identifier` accepts either form and stores the dash-free,
//! lowercase representation so every downstream consumer can index into it.

use crate::error::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// A validated 32-character hexadecimal account identifier
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Identifier(String);

impl Identifier {
    /// Parse a dash-free or hyphenated UUID string
    pub fn parse(input: &str) -> AppResult<Self> {
        let uuid = Uuid::try_parse(input.trim())
            .map_err(|e| AppError::InvalidIdentifier(format!("{:?}: {}", input, e)))?;
        Ok(Self::from_uuid(uuid))
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid.simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hyphenated form (8-4-4-4-12)
    pub fn hyphenated(&self) -> String {
        // The inner string was produced by Uuid::simple so it always re-parses
        Uuid::try_parse(&self.0)
            .map(|u| u.hyphenated().to_string())
            .unwrap_or_else(|_| self.0.clone())
    }

    /// 4-bit value of the hex digit at `pos`
    pub(crate) fn nibble(&self, pos: usize) -> u8 {
        self.0
            .as_bytes()
            .get(pos)
            .and_then(|b| (*b as char).to_digit(16))
            .unwrap_or(0) as u8
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Identifier {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Identifier {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Identifier> for String {
    fn from(id: Identifier) -> Self {
        id.0
    }
}

impl AsRef<str> for Identifier {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple() {
        let id = Identifier::parse("dad8b95ccf6a44df982e8c8dd70201e0").unwrap();
        assert_eq!(id.as_str(), "dad8b95ccf6a44df982e8c8dd70201e0");
    }

    #[test]
    fn test_parse_hyphenated_normalizes() {
        let id = Identifier::parse("DAD8B95C-CF6A-44DF-982E-8C8DD70201E0").unwrap();
        assert_eq!(id.as_str(), "dad8b95ccf6a44df982e8c8dd70201e0");
        assert_eq!(id.hyphenated(), "dad8b95c-cf6a-44df-982e-8c8dd70201e0");
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(matches!(
            Identifier::parse("not-a-uuid"),
            Err(AppError::InvalidIdentifier(_))
        ));
        assert!(Identifier::parse("dad8b95ccf6a44df982e8c8dd70201e").is_err());
        assert!(Identifier::parse("zad8b95ccf6a44df982e8c8dd70201e0").is_err());
    }

    #[test]
    fn test_nibble() {
        let id = Identifier::parse("dad8b95ccf6a44df982e8c8dd70201e0").unwrap();
        assert_eq!(id.nibble(7), 0xc);
        assert_eq!(id.nibble(15), 0xf);
        assert_eq!(id.nibble(23), 0xd);
        assert_eq!(id.nibble(31), 0x0);
    }

    #[test]
    fn test_serde_roundtrip() {
        let id: Identifier = serde_json::from_str("\"dad8b95c-cf6a-44df-982e-8c8dd70201e0\"").unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"dad8b95ccf6a44df982e8c8dd70201e0\"");
    }
}
