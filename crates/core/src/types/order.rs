//! Order submission wire types.

use serde::{Deserialize, Serialize};

use crate::{Payment, Price, ProductId};

/// Body of `POST /order`.
///
/// Assembled by the application state from the order draft and the basket;
/// by the time one of these exists, validation has already passed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRequest {
    /// Chosen payment method.
    pub payment: Payment,
    /// Delivery address.
    pub address: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Basket total at submission time.
    pub total: Price,
    /// Ids of the basket items, in basket order.
    pub items: Vec<ProductId>,
}

/// Successful response of `POST /order`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    /// Server-assigned order id.
    pub id: String,
    /// Total the server charged.
    pub total: Price,
}
