//! Web Larek Storefront library.
//!
//! The event-driven core of a client-side storefront: a typed event bus, a
//! single mutable application state (catalog, basket, order draft,
//! validation), headless view components, and the wiring that connects
//! them. The crate also ships the API client the wiring layer talks to.
//!
//! # Architecture
//!
//! No component calls another directly. Views emit intent events on the
//! [`events::EventBus`]; [`state::AppState`] interprets them, mutates its
//! data, and emits derived "changed" events; views re-render from fresh
//! state readouts. The [`app::Storefront`] wiring layer owns the
//! subscriptions and the two async network edges (catalog load, order
//! submission).

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod events;
pub mod state;
pub mod views;
