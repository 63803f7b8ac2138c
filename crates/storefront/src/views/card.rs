//! Product card variants: catalog tile, preview detail, basket row.

use web_larek_core::{Price, Product, ProductId};

use crate::events::{AppEvent, EventBus};

fn price_text(price: Option<Price>) -> String {
    price.map_or_else(|| "Priceless".to_owned(), |p| p.to_string())
}

/// Catalog tile: title, category, image, price. Clicking it selects the
/// product for preview.
pub struct CatalogCard {
    events: EventBus,
    id: Option<ProductId>,
    title: String,
    category: String,
    image: String,
    price_text: String,
}

impl CatalogCard {
    /// Create an unbound card.
    #[must_use]
    pub fn new(events: EventBus) -> Self {
        Self {
            events,
            id: None,
            title: String::new(),
            category: String::new(),
            image: String::new(),
            price_text: String::new(),
        }
    }

    /// Apply a product to the card.
    pub fn render(&mut self, product: &Product) -> &Self {
        self.id = Some(product.id.clone());
        self.title = product.title.clone();
        self.category = product.category.clone();
        self.image = product.image.clone();
        self.price_text = price_text(product.price);
        self
    }

    /// The user clicked the tile.
    pub fn click(&self) {
        if let Some(id) = &self.id {
            self.events.emit(AppEvent::CatalogSelect { id: id.clone() });
        }
    }

    /// Displayed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Displayed price line.
    #[must_use]
    pub fn price_text(&self) -> &str {
        &self.price_text
    }

    /// Id of the rendered product, if bound.
    #[must_use]
    pub const fn product_id(&self) -> Option<&ProductId> {
        self.id.as_ref()
    }
}

/// Preview detail card shown inside the modal, with the basket-toggle
/// button. The button label is supplied by the wiring layer (it depends on
/// basket membership, which the card must not read itself).
pub struct PreviewCard {
    events: EventBus,
    id: Option<ProductId>,
    title: String,
    description: String,
    image: String,
    price_text: String,
    button_label: String,
    button_enabled: bool,
}

impl PreviewCard {
    /// Create an unbound card.
    #[must_use]
    pub fn new(events: EventBus) -> Self {
        Self {
            events,
            id: None,
            title: String::new(),
            description: String::new(),
            image: String::new(),
            price_text: String::new(),
            button_label: String::new(),
            button_enabled: false,
        }
    }

    /// Apply a product plus the computed button label.
    pub fn render(&mut self, product: &Product, button_label: &str) -> &Self {
        self.id = Some(product.id.clone());
        self.title = product.title.clone();
        self.description = product.description.clone();
        self.image = product.image.clone();
        self.price_text = price_text(product.price);
        self.button_label = button_label.to_owned();
        // Unpriced products cannot be toggled in.
        self.button_enabled = product.is_purchasable();
        self
    }

    /// The user clicked the basket-toggle button.
    pub fn button_click(&self) {
        if !self.button_enabled {
            return;
        }
        if let Some(id) = &self.id {
            self.events.emit(AppEvent::ButtonStatus { id: id.clone() });
        }
    }

    /// Displayed button label.
    #[must_use]
    pub fn button_label(&self) -> &str {
        &self.button_label
    }

    /// Whether the toggle button accepts clicks.
    #[must_use]
    pub const fn button_enabled(&self) -> bool {
        self.button_enabled
    }

    /// Id of the rendered product, if bound.
    #[must_use]
    pub const fn product_id(&self) -> Option<&ProductId> {
        self.id.as_ref()
    }
}

/// Basket row: 1-based index, title, price, delete control.
pub struct BasketCard {
    events: EventBus,
    id: Option<ProductId>,
    index: usize,
    title: String,
    price_text: String,
}

impl BasketCard {
    /// Create an unbound row.
    #[must_use]
    pub fn new(events: EventBus) -> Self {
        Self {
            events,
            id: None,
            index: 0,
            title: String::new(),
            price_text: String::new(),
        }
    }

    /// Apply a product and its basket position.
    pub fn render(&mut self, product: &Product, index: usize) -> &Self {
        self.id = Some(product.id.clone());
        self.index = index;
        self.title = product.title.clone();
        self.price_text = price_text(product.price);
        self
    }

    /// The user clicked the delete control.
    pub fn delete_click(&self) {
        if let Some(id) = &self.id {
            self.events.emit(AppEvent::BasketDelete { id: id.clone() });
        }
    }

    /// 1-based display position.
    #[must_use]
    pub const fn index(&self) -> usize {
        self.index
    }

    /// Id of the rendered product, if bound.
    #[must_use]
    pub const fn product_id(&self) -> Option<&ProductId> {
        self.id.as_ref()
    }

    /// Displayed title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }
}
