//! Product wire/domain type.

use serde::{Deserialize, Serialize};

use crate::{Price, ProductId};

/// A catalog product.
///
/// Immutable once loaded; the catalog owns the authoritative copy and is
/// replaced wholesale on reload. Identity is [`ProductId`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Server-assigned identifier.
    pub id: ProductId,
    /// Display title.
    pub title: String,
    /// Long description shown in the preview modal.
    pub description: String,
    /// Category label (drives card styling).
    pub category: String,
    /// Image path; relative as served by the API, absolute once the
    /// CDN base has been applied by the API client.
    pub image: String,
    /// Price in synapses; `None` means the product cannot be purchased.
    pub price: Option<Price>,
}

impl Product {
    /// Whether the product can be added to a basket.
    #[must_use]
    pub const fn is_purchasable(&self) -> bool {
        self.price.is_some()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_with_null_price() {
        let json = r#"{
            "id": "b06cde61-912f-4663-9751-09956c0eed67",
            "title": "Do-nothing badge",
            "description": "Wear it and do nothing",
            "category": "extra",
            "image": "/5_Dots.svg",
            "price": null
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert!(product.price.is_none());
        assert!(!product.is_purchasable());
    }

    #[test]
    fn test_deserialize_with_price() {
        let json = r#"{
            "id": "854cef69-976d-4c2a-a18c-2aa45046c390",
            "title": "+1 hour a day",
            "description": "If you answer honestly, time will slow down",
            "category": "soft-skill",
            "image": "/5_Dots.svg",
            "price": 750
        }"#;
        let product: Product = serde_json::from_str(json).unwrap();
        assert_eq!(product.price, Some(Price::from_synapses(750)));
        assert!(product.is_purchasable());
    }
}
