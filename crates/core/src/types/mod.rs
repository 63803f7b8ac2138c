//! Core types for Web Larek.

mod id;
mod order;
mod payment;
mod price;
mod product;

pub use id::{ProductId, ProductIdError};
pub use order::{OrderConfirmation, OrderRequest};
pub use payment::{Payment, PaymentError};
pub use price::Price;
pub use product::Product;
