//! Payment method enum.

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown payment method.
#[derive(thiserror::Error, Debug, Clone)]
#[error("invalid payment method: {0}")]
pub struct PaymentError(pub String);

/// How the order will be paid.
///
/// An in-progress order holds `Option<Payment>` - the method stays unset
/// until the user picks one, and validation fails while it is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Payment {
    /// Pay online by card.
    Card,
    /// Pay in cash on delivery.
    Cash,
}

impl std::fmt::Display for Payment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Card => write!(f, "card"),
            Self::Cash => write!(f, "cash"),
        }
    }
}

impl std::str::FromStr for Payment {
    type Err = PaymentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "card" => Ok(Self::Card),
            "cash" => Ok(Self::Cash),
            _ => Err(PaymentError(s.to_owned())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("card".parse::<Payment>().unwrap(), Payment::Card);
        assert_eq!("cash".parse::<Payment>().unwrap(), Payment::Cash);
        assert!("crypto".parse::<Payment>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&Payment::Card).unwrap();
        assert_eq!(json, "\"card\"");

        let parsed: Payment = serde_json::from_str("\"cash\"").unwrap();
        assert_eq!(parsed, Payment::Cash);
    }

    #[test]
    fn test_display() {
        assert_eq!(Payment::Card.to_string(), "card");
        assert_eq!(Payment::Cash.to_string(), "cash");
    }
}
