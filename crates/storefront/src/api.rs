//! Catalog/order API client.
//!
//! The network is an external collaborator: three single-shot operations,
//! no retry, no caching. A failed call is logged by the caller and leaves
//! in-memory state untouched.
//!
//! Product images are served from a CDN separate from the API: list
//! responses carry relative `.svg` paths that are rewritten to `.png` and
//! prefixed with the CDN base, single-product responses are prefixed
//! without the extension rewrite.

use serde::Deserialize;
use url::Url;

use web_larek_core::{OrderConfirmation, OrderRequest, Product, ProductId};

use crate::config::StorefrontConfig;

/// Errors that can occur when talking to the catalog/order API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP transport failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status.
    #[error("Unexpected status: {code}")]
    Status {
        /// The HTTP status code.
        code: reqwest::StatusCode,
    },
}

/// Paged list envelope used by `GET /product`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiListResponse<T> {
    /// Total item count reported by the server.
    pub total: u64,
    /// The items on this page (the catalog API returns everything at once).
    pub items: Vec<T>,
}

/// Abstract capability the wiring layer consumes; the production
/// implementation is [`ApiService`], tests substitute their own.
pub trait ShopApi {
    /// Fetch the full catalog.
    fn product_list(&self) -> impl Future<Output = Result<Vec<Product>, ApiError>>;

    /// Fetch a single product by id.
    fn product(&self, id: &ProductId) -> impl Future<Output = Result<Product, ApiError>>;

    /// Submit a completed order.
    fn submit_order(
        &self,
        order: &OrderRequest,
    ) -> impl Future<Output = Result<OrderConfirmation, ApiError>>;
}

/// Production API client over `reqwest`.
pub struct ApiService {
    http: reqwest::Client,
    api_url: Url,
    cdn_url: Url,
}

impl ApiService {
    /// Create a client for the configured endpoints.
    #[must_use]
    pub fn new(config: &StorefrontConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_url: config.api_url.clone(),
            cdn_url: config.cdn_url.clone(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        join_url(&self.api_url, path)
    }

    /// Prefix a relative image path with the CDN base.
    fn cdn_image(&self, path: &str) -> String {
        join_url(&self.cdn_url, path)
    }
}

/// Join a path onto a base URL without clobbering the base's own path.
fn join_url(base: &Url, path: &str) -> String {
    format!(
        "{}/{}",
        base.as_str().trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// List images arrive as `.svg` paths but the CDN serves rasters.
fn rewrite_list_image(path: &str) -> String {
    path.replace(".svg", ".png")
}

impl ShopApi for ApiService {
    async fn product_list(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.http.get(self.endpoint("product")).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { code: status });
        }

        let list: ApiListResponse<Product> = response.json().await?;
        tracing::debug!(total = list.total, "catalog fetched");

        Ok(list
            .items
            .into_iter()
            .map(|mut product| {
                product.image = self.cdn_image(&rewrite_list_image(&product.image));
                product
            })
            .collect())
    }

    async fn product(&self, id: &ProductId) -> Result<Product, ApiError> {
        let response = self
            .http
            .get(self.endpoint(&format!("product/{id}")))
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { code: status });
        }

        let mut product: Product = response.json().await?;
        product.image = self.cdn_image(&product.image);
        Ok(product)
    }

    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ApiError> {
        let response = self
            .http
            .post(self.endpoint("order"))
            .json(order)
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status { code: status });
        }

        Ok(response.json().await?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn service() -> ApiService {
        ApiService::new(&StorefrontConfig {
            api_url: Url::parse("https://example.com/api/weblarek").unwrap(),
            cdn_url: Url::parse("https://example.com/content/weblarek").unwrap(),
        })
    }

    #[test]
    fn test_endpoint_preserves_base_path() {
        let api = service();
        assert_eq!(
            api.endpoint("product"),
            "https://example.com/api/weblarek/product"
        );
        assert_eq!(
            api.endpoint("product/p-1"),
            "https://example.com/api/weblarek/product/p-1"
        );
    }

    #[test]
    fn test_join_url_handles_slashes() {
        let base = Url::parse("https://example.com/api/").unwrap();
        assert_eq!(join_url(&base, "/product"), "https://example.com/api/product");
        assert_eq!(join_url(&base, "product"), "https://example.com/api/product");
    }

    #[test]
    fn test_rewrite_list_image() {
        assert_eq!(rewrite_list_image("/5_Dots.svg"), "/5_Dots.png");
        assert_eq!(rewrite_list_image("/photo.png"), "/photo.png");
    }

    #[test]
    fn test_cdn_image_prefix() {
        let api = service();
        assert_eq!(
            api.cdn_image("/5_Dots.svg"),
            "https://example.com/content/weblarek/5_Dots.svg"
        );
    }

    #[test]
    fn test_list_response_envelope() {
        let json = r#"{"total": 1, "items": [{
            "id": "a-1",
            "title": "Item",
            "description": "",
            "category": "other",
            "image": "/a.svg",
            "price": 100
        }]}"#;
        let list: ApiListResponse<Product> = serde_json::from_str(json).unwrap();
        assert_eq!(list.total, 1);
        assert_eq!(list.items.len(), 1);
    }
}
