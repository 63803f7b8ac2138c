//! Web Larek Storefront - headless storefront driver.
//!
//! Boots the event-driven core against the live catalog API: loads the
//! catalog, logs what arrived, and exits. The full interaction surface
//! (preview, basket, two-step checkout) lives in the library and is driven
//! programmatically; see [`web_larek_storefront::app::Storefront`].

#![cfg_attr(not(test), forbid(unsafe_code))]

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use web_larek_storefront::api::ApiService;
use web_larek_storefront::app::Storefront;
use web_larek_storefront::config::StorefrontConfig;

// The core is single-threaded by design (Rc/RefCell throughout), so the
// runtime is too.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "web_larek_storefront=info,web_larek_core=info".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = StorefrontConfig::from_env().expect("Failed to load configuration");
    tracing::info!(api = %config.api_url, cdn = %config.cdn_url, "starting storefront");

    let app = Storefront::new(ApiService::new(&config));
    app.load_catalog().await;

    for product in app.state().catalog() {
        match product.price {
            Some(price) => tracing::info!(id = %product.id, title = %product.title, %price, "product"),
            None => tracing::info!(id = %product.id, title = %product.title, "product (priceless)"),
        }
    }
}
