//! Web Larek Core - Shared types library.
//!
//! This crate provides common types used across the Web Larek components:
//! - `storefront` - The client-side storefront core (state, events, views)
//! - `integration-tests` - End-to-end scenario tests
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients, no event
//! handling. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and prices, the payment
//!   method enum, and the product/order wire types

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
