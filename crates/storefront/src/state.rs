//! Application state: single source of truth for catalog, basket, order
//! draft, and validation errors.
//!
//! Every mutating operation applies its change fully, releases the borrow on
//! the shared data, and only then emits the derived "changed" event - so no
//! handler can ever observe a half-applied mutation. State never pushes data
//! into views; views re-render from pull-based reads after a "changed" event.

use std::cell::RefCell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};
use web_larek_core::{OrderRequest, Payment, Price, Product, ProductId};

use crate::error::AppError;
use crate::events::{AppEvent, EventBus};

/// Text-input fields of the order draft (payment is set by button, not
/// typed, so it is not a field here).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderField {
    /// Delivery address (order form, step 1).
    Address,
    /// Contact email (contacts form, step 2).
    Email,
    /// Contact phone (contacts form, step 2).
    Phone,
}

/// Field-keyed validation error map.
///
/// Recomputed wholesale from the current draft on every relevant mutation;
/// never stored stale. `None` means the field is fine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    /// No payment method chosen.
    pub payment: Option<String>,
    /// Address empty.
    pub address: Option<String>,
    /// Email empty.
    pub email: Option<String>,
    /// Phone empty.
    pub phone: Option<String>,
}

impl FormErrors {
    /// All four fields pass.
    #[must_use]
    pub const fn is_clear(&self) -> bool {
        self.payment.is_none()
            && self.address.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }

    /// Step-1 gate: the order form submits only when both payment and
    /// address are error-free.
    #[must_use]
    pub const fn order_step_ok(&self) -> bool {
        self.payment.is_none() && self.address.is_none()
    }

    /// Step-2 gate: the contacts form submits only when both email and
    /// phone are error-free.
    #[must_use]
    pub const fn contacts_step_ok(&self) -> bool {
        self.email.is_none() && self.phone.is_none()
    }

    /// Error line for the order form (step 1).
    #[must_use]
    pub fn order_step_message(&self) -> String {
        join_messages(&[&self.payment, &self.address])
    }

    /// Error line for the contacts form (step 2).
    #[must_use]
    pub fn contacts_step_message(&self) -> String {
        join_messages(&[&self.email, &self.phone])
    }
}

fn join_messages(slots: &[&Option<String>]) -> String {
    slots
        .iter()
        .filter_map(|slot| slot.as_deref())
        .collect::<Vec<_>>()
        .join(" and ")
}

/// In-progress checkout form data, mutated field-by-field as the user
/// types or clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderDraft {
    /// Chosen payment method; unset until the user picks one.
    pub payment: Option<Payment>,
    /// Delivery address.
    pub address: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
}

impl OrderDraft {
    /// Recompute the error map. Presence-only checks: payment must be
    /// chosen, the three text fields must be non-empty after trimming.
    #[must_use]
    pub fn validate(&self) -> FormErrors {
        FormErrors {
            payment: self
                .payment
                .is_none()
                .then(|| "Select a payment method".to_owned()),
            address: self
                .address
                .trim()
                .is_empty()
                .then(|| "Enter the delivery address".to_owned()),
            email: self
                .email
                .trim()
                .is_empty()
                .then(|| "Enter your email".to_owned()),
            phone: self
                .phone
                .trim()
                .is_empty()
                .then(|| "Enter your phone number".to_owned()),
        }
    }
}

#[derive(Default)]
struct AppStateInner {
    catalog: Vec<Product>,
    /// Basket membership by id, insertion order preserved, no duplicates.
    basket: Vec<ProductId>,
    order: OrderDraft,
    errors: FormErrors,
    preview: Option<ProductId>,
}

/// Single source of truth for the storefront.
///
/// Cheaply cloneable handle over shared data; all clones observe the same
/// catalog, basket, and order draft. Single-threaded by design - the whole
/// core runs in a UI-thread model.
#[derive(Clone)]
pub struct AppState {
    inner: Rc<RefCell<AppStateInner>>,
    events: EventBus,
}

impl AppState {
    /// Create empty state bound to `events`.
    #[must_use]
    pub fn new(events: EventBus) -> Self {
        Self {
            inner: Rc::new(RefCell::new(AppStateInner::default())),
            events,
        }
    }

    // -------------------------------------------------------------------
    // Catalog
    // -------------------------------------------------------------------

    /// Replace the catalog wholesale. Emits `ProductsChanged`.
    pub fn set_catalog(&self, items: Vec<Product>) {
        self.inner.borrow_mut().catalog = items;
        self.events.emit(AppEvent::ProductsChanged);
    }

    /// Snapshot of the catalog, in server order.
    #[must_use]
    pub fn catalog(&self) -> Vec<Product> {
        self.inner.borrow().catalog.clone()
    }

    /// Look up a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is not in the catalog.
    /// Ids flow from user-selected UI elements, so callers treat this as a
    /// logged no-op rather than a crash.
    pub fn get_product(&self, id: &ProductId) -> Result<Product, AppError> {
        self.inner
            .borrow()
            .catalog
            .iter()
            .find(|product| &product.id == id)
            .cloned()
            .ok_or_else(|| AppError::NotFound(id.clone()))
    }

    // -------------------------------------------------------------------
    // Preview
    // -------------------------------------------------------------------

    /// Mark `product` as the current preview selection. Emits
    /// `PreviewChanged` with the full product so consumers can render
    /// without reading state mid-dispatch.
    pub fn set_preview(&self, product: &Product) {
        self.inner.borrow_mut().preview = Some(product.id.clone());
        self.events.emit(AppEvent::PreviewChanged(product.clone()));
    }

    /// Currently previewed product id, if any.
    #[must_use]
    pub fn preview(&self) -> Option<ProductId> {
        self.inner.borrow().preview.clone()
    }

    /// Drop the transient preview selection (modal closed). No event.
    pub fn clear_preview(&self) {
        self.inner.borrow_mut().preview = None;
    }

    /// Label for the preview's action button: a pure function of basket
    /// membership and purchasability.
    #[must_use]
    pub fn button_text(&self, product: &Product) -> &'static str {
        if self.in_basket(&product.id) {
            "Remove from basket"
        } else if product.is_purchasable() {
            "Add to basket"
        } else {
            "Unavailable"
        }
    }

    // -------------------------------------------------------------------
    // Basket
    // -------------------------------------------------------------------

    /// Toggle basket membership: remove the product if present, add it
    /// otherwise. Emits `BasketChanged`.
    ///
    /// Unpriced products cannot be purchased; toggling one in is a logged
    /// no-op so a null price can never reach the basket.
    pub fn toggle_basket(&self, product: &Product) {
        {
            let mut inner = self.inner.borrow_mut();
            if let Some(pos) = inner.basket.iter().position(|id| id == &product.id) {
                inner.basket.remove(pos);
            } else if product.is_purchasable() {
                inner.basket.push(product.id.clone());
            } else {
                tracing::warn!(id = %product.id, "refusing to add unpriced product to basket");
                return;
            }
        }
        self.events.emit(AppEvent::BasketChanged);
    }

    /// Remove a product from the basket by id; no-op if absent.
    /// Emits `BasketChanged` either way.
    pub fn remove_from_basket(&self, id: &ProductId) {
        self.inner.borrow_mut().basket.retain(|member| member != id);
        self.events.emit(AppEvent::BasketChanged);
    }

    /// Whether the basket contains `id`.
    #[must_use]
    pub fn in_basket(&self, id: &ProductId) -> bool {
        self.inner.borrow().basket.iter().any(|member| member == id)
    }

    /// Number of items in the basket.
    #[must_use]
    pub fn basket_count(&self) -> usize {
        self.inner.borrow().basket.len()
    }

    /// Sum of prices over the basket. Unpriced products never enter the
    /// basket, so every member contributes.
    #[must_use]
    pub fn basket_total(&self) -> Price {
        let inner = self.inner.borrow();
        inner
            .basket
            .iter()
            .filter_map(|id| inner.catalog.iter().find(|product| &product.id == id))
            .filter_map(|product| product.price)
            .sum()
    }

    /// 1-based position of `id` in the basket's insertion order, for the
    /// numbering shown in the basket list. `None` if not a member.
    #[must_use]
    pub fn product_index(&self, id: &ProductId) -> Option<usize> {
        self.inner
            .borrow()
            .basket
            .iter()
            .position(|member| member == id)
            .map(|pos| pos + 1)
    }

    /// Basket members as full products, in insertion order.
    #[must_use]
    pub fn basket_products(&self) -> Vec<Product> {
        let inner = self.inner.borrow();
        inner
            .basket
            .iter()
            .filter_map(|id| {
                inner
                    .catalog
                    .iter()
                    .find(|product| &product.id == id)
                    .cloned()
            })
            .collect()
    }

    /// Empty the basket. Emits `BasketChanged` so dependent views reset.
    pub fn clear_basket(&self) {
        self.inner.borrow_mut().basket.clear();
        self.events.emit(AppEvent::BasketChanged);
    }

    // -------------------------------------------------------------------
    // Order draft & validation
    // -------------------------------------------------------------------

    /// Set one text field of the draft, then re-validate (which emits
    /// `FormErrorsChanged`).
    pub fn set_order_field(&self, field: OrderField, value: &str) {
        {
            let mut inner = self.inner.borrow_mut();
            match field {
                OrderField::Address => inner.order.address = value.to_owned(),
                OrderField::Email => inner.order.email = value.to_owned(),
                OrderField::Phone => inner.order.phone = value.to_owned(),
            }
        }
        self.validate_order();
    }

    /// Set the payment method, then re-validate.
    pub fn set_order_payment(&self, payment: Payment) {
        self.inner.borrow_mut().order.payment = Some(payment);
        self.validate_order();
    }

    /// Recompute the error map from the current draft, store it, and emit
    /// `FormErrorsChanged` with the full map. Returns the all-clear flag.
    ///
    /// Pure with respect to the draft: two calls without an intervening
    /// mutation produce identical maps.
    pub fn validate_order(&self) -> bool {
        let errors = {
            let mut inner = self.inner.borrow_mut();
            let errors = inner.order.validate();
            inner.errors = errors.clone();
            errors
        };
        let clear = errors.is_clear();
        self.events.emit(AppEvent::FormErrorsChanged(errors));
        clear
    }

    /// Snapshot of the current draft.
    #[must_use]
    pub fn order(&self) -> OrderDraft {
        self.inner.borrow().order.clone()
    }

    /// Snapshot of the current error map.
    #[must_use]
    pub fn form_errors(&self) -> FormErrors {
        self.inner.borrow().errors.clone()
    }

    /// Assemble the submission body from the draft and basket.
    ///
    /// Returns `None` while the draft is incomplete (validation failure is
    /// data, not a fault); the wiring layer only submits after the gates
    /// pass.
    #[must_use]
    pub fn order_data(&self) -> Option<OrderRequest> {
        let inner = self.inner.borrow();
        if !inner.order.validate().is_clear() {
            return None;
        }
        let payment = inner.order.payment?;
        let total = inner
            .basket
            .iter()
            .filter_map(|id| inner.catalog.iter().find(|product| &product.id == id))
            .filter_map(|product| product.price)
            .sum();
        Some(OrderRequest {
            payment,
            address: inner.order.address.clone(),
            email: inner.order.email.clone(),
            phone: inner.order.phone.clone(),
            total,
            items: inner.basket.clone(),
        })
    }

    /// Reset the draft to its initial empty state, then re-validate so the
    /// forms' gating resets too.
    pub fn clear_order(&self) {
        self.inner.borrow_mut().order = OrderDraft::default();
        self.validate_order();
    }
}
