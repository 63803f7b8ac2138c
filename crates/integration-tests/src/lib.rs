//! Integration test harness for Web Larek.
//!
//! Scenario tests drive the fully wired [`Storefront`] through the same
//! gesture surface a UI driver would use, against an in-memory API double.
//! No network, no browser: the tests exercise the bus, the state, the view
//! re-renders, and the async edges end to end.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p web-larek-integration-tests
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_larek_core::{OrderConfirmation, OrderRequest, Product, ProductId};
use web_larek_storefront::api::{ApiError, ApiListResponse, ShopApi};
use web_larek_storefront::app::Storefront;

struct MockApiInner {
    products: Vec<Product>,
    fail_list: Cell<bool>,
    fail_submit: Cell<bool>,
    submissions: RefCell<Vec<OrderRequest>>,
}

/// In-memory stand-in for the catalog/order API.
///
/// A cloneable handle: the storefront owns one clone, the test keeps
/// another to flip failure toggles and inspect accepted orders mid-run.
#[derive(Clone)]
pub struct MockApi {
    inner: Rc<MockApiInner>,
}

impl MockApi {
    /// A mock serving `products`.
    #[must_use]
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            inner: Rc::new(MockApiInner {
                products,
                fail_list: Cell::new(false),
                fail_submit: Cell::new(false),
                submissions: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Make `product_list` answer 500 until switched back.
    pub fn set_fail_list(&self, fail: bool) {
        self.inner.fail_list.set(fail);
    }

    /// Make `submit_order` answer 500 until switched back.
    pub fn set_fail_submit(&self, fail: bool) {
        self.inner.fail_submit.set(fail);
    }

    /// Snapshot of everything this mock has accepted.
    #[must_use]
    pub fn submissions(&self) -> Vec<OrderRequest> {
        self.inner.submissions.borrow().clone()
    }
}

impl ShopApi for MockApi {
    async fn product_list(&self) -> Result<Vec<Product>, ApiError> {
        if self.inner.fail_list.get() {
            return Err(ApiError::Status {
                code: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(self.inner.products.clone())
    }

    async fn product(&self, id: &ProductId) -> Result<Product, ApiError> {
        self.inner
            .products
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or(ApiError::Status {
                code: reqwest::StatusCode::NOT_FOUND,
            })
    }

    async fn submit_order(&self, order: &OrderRequest) -> Result<OrderConfirmation, ApiError> {
        if self.inner.fail_submit.get() {
            return Err(ApiError::Status {
                code: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        self.inner.submissions.borrow_mut().push(order.clone());
        Ok(OrderConfirmation {
            id: format!("order-{}", self.inner.submissions.borrow().len()),
            total: order.total,
        })
    }
}

/// Catalog fixture in the exact wire shape the live API serves (paged
/// envelope, relative image paths, one `null` price).
const CATALOG_JSON: &str = r#"{
  "total": 4,
  "items": [
    {
      "id": "854cef69-976d-4c2a-a18c-2aa45046c390",
      "title": "+1 hour a day",
      "description": "Spend it on sleep",
      "category": "soft-skill",
      "image": "/5_Dots.svg",
      "price": 750
    },
    {
      "id": "c101ab44-ed99-4a54-990d-47aa2bb4e7d9",
      "title": "HEX lever",
      "description": "Pull to reboot",
      "category": "other",
      "image": "/Shell.svg",
      "price": null
    },
    {
      "id": "b06cde61-912f-4663-9751-09956c0eed67",
      "title": "Backend anti-stress",
      "description": "Squeeze when deploying",
      "category": "other",
      "image": "/Soft_Flower.svg",
      "price": 1000
    },
    {
      "id": "412bcf81-7e75-4e70-bdb9-d3c73c9803b7",
      "title": "Combinator framework",
      "description": "Compose everything",
      "category": "additional",
      "image": "/Pill.svg",
      "price": 450
    }
  ]
}"#;

/// A small catalog parsed from [`CATALOG_JSON`]: mixed categories, one
/// priceless item.
#[must_use]
pub fn sample_catalog() -> Vec<Product> {
    let list: ApiListResponse<Product> =
        serde_json::from_str(CATALOG_JSON).expect("fixture JSON matches the wire shape");
    list.items
}

/// Boot a wired storefront over the sample catalog and load it. Returns
/// the app plus the test's handle to the API double.
pub async fn loaded_storefront() -> (Storefront<MockApi>, MockApi) {
    let api = MockApi::new(sample_catalog());
    let app = Storefront::new(api.clone());
    app.load_catalog().await;
    (app, api)
}
