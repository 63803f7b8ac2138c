//! Basket view: item list, total line, checkout button.

use web_larek_core::Price;

use crate::events::{AppEvent, EventBus};

use super::BasketCard;

/// The basket contents shown inside the modal.
pub struct Basket {
    checkout_button: Box<dyn Fn()>,
    items: Vec<BasketCard>,
    total_text: String,
    checkout_enabled: bool,
}

impl Basket {
    /// Placeholder shown when the basket is empty.
    pub const EMPTY_TEXT: &'static str = "The basket is empty";

    /// Create an empty basket view bound to `events`.
    #[must_use]
    pub fn new(events: &EventBus) -> Self {
        Self {
            checkout_button: Box::new(events.trigger(AppEvent::OrderOpen)),
            items: Vec::new(),
            total_text: Price::ZERO.to_string(),
            // Checkout starts disabled until something is in the basket.
            checkout_enabled: false,
        }
    }

    /// Replace the item list; the checkout button follows emptiness.
    pub fn set_items(&mut self, items: Vec<BasketCard>) {
        self.checkout_enabled = !items.is_empty();
        self.items = items;
    }

    /// Rendered rows, or the empty placeholder when there are none.
    #[must_use]
    pub fn items(&self) -> &[BasketCard] {
        &self.items
    }

    /// Text shown in the list area.
    #[must_use]
    pub fn list_text(&self) -> Option<&'static str> {
        self.items.is_empty().then_some(Self::EMPTY_TEXT)
    }

    /// Update the total line.
    pub fn set_total(&mut self, total: Price) {
        self.total_text = total.to_string();
    }

    /// Displayed total line.
    #[must_use]
    pub fn total_text(&self) -> &str {
        &self.total_text
    }

    /// Whether the checkout button accepts clicks.
    #[must_use]
    pub const fn checkout_enabled(&self) -> bool {
        self.checkout_enabled
    }

    /// The user clicked the checkout button.
    pub fn checkout_click(&self) {
        if self.checkout_enabled {
            (self.checkout_button)();
        }
    }
}
