//! Main page: catalog gallery, basket counter, scroll lock.

use crate::events::{AppEvent, EventBus};

use super::CatalogCard;

/// The page chrome around everything else.
pub struct Page {
    basket_button: Box<dyn Fn()>,
    catalog: Vec<CatalogCard>,
    counter: usize,
    locked: bool,
}

impl Page {
    /// Create an empty page bound to `events`.
    #[must_use]
    pub fn new(events: &EventBus) -> Self {
        Self {
            basket_button: Box::new(events.trigger(AppEvent::BasketOpen)),
            catalog: Vec::new(),
            counter: 0,
            locked: false,
        }
    }

    /// Replace the gallery contents.
    pub fn set_catalog(&mut self, cards: Vec<CatalogCard>) {
        self.catalog = cards;
    }

    /// Rendered gallery.
    #[must_use]
    pub fn catalog(&self) -> &[CatalogCard] {
        &self.catalog
    }

    /// Update the header basket counter.
    pub const fn set_counter(&mut self, value: usize) {
        self.counter = value;
    }

    /// Current counter value.
    #[must_use]
    pub const fn counter(&self) -> usize {
        self.counter
    }

    /// Lock or unlock page scrolling (modal open/close side effect).
    pub const fn set_locked(&mut self, value: bool) {
        self.locked = value;
    }

    /// Whether scrolling is locked.
    #[must_use]
    pub const fn locked(&self) -> bool {
        self.locked
    }

    /// The user clicked the header basket button.
    pub fn basket_button_click(&self) {
        (self.basket_button)();
    }
}
