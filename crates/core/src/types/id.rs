//! Newtype product identifier.
//!
//! Product ids are opaque strings assigned by the catalog server. Wrapping
//! them in a newtype prevents accidentally mixing them with other string
//! data (titles, categories, image paths) flowing through the same events.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`ProductId`].
#[derive(thiserror::Error, Debug, Clone)]
pub enum ProductIdError {
    /// The input string is empty.
    #[error("product id cannot be empty")]
    Empty,
}

/// An opaque product identifier assigned by the catalog server.
///
/// Ids are never constructed locally; they arrive in catalog responses and
/// flow back out in order submissions and basket events.
///
/// ## Examples
///
/// ```
/// use web_larek_core::ProductId;
///
/// let id = ProductId::parse("854cef69-976d-4c2a-a18c-2aa45046c390").unwrap();
/// assert_eq!(id.as_str(), "854cef69-976d-4c2a-a18c-2aa45046c390");
///
/// assert!(ProductId::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Parse a `ProductId` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is empty.
    pub fn parse(s: &str) -> Result<Self, ProductIdError> {
        if s.is_empty() {
            return Err(ProductIdError::Empty);
        }
        Ok(Self(s.to_owned()))
    }

    /// Returns the id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the `ProductId` and returns its inner string.
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let id = ProductId::parse("abc-123").unwrap();
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn test_parse_empty() {
        assert!(matches!(ProductId::parse(""), Err(ProductIdError::Empty)));
    }

    #[test]
    fn test_display() {
        let id = ProductId::parse("abc-123").unwrap();
        assert_eq!(format!("{id}"), "abc-123");
    }

    #[test]
    fn test_from_str() {
        let id: ProductId = "abc-123".parse().unwrap();
        assert_eq!(id.as_str(), "abc-123");
    }

    #[test]
    fn test_serde_transparent() {
        let id = ProductId::parse("abc-123").unwrap();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"abc-123\"");

        let parsed: ProductId = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, id);
    }
}
