//! Headless view components.
//!
//! Each component is a thin renderer: it owns the view-state the DOM layer
//! would paint (texts, enabled flags, class toggles), exposes one setter per
//! concern plus a `render` batch, and emits intent events on the bus when
//! the user acts on it. Components never read [`crate::state::AppState`]
//! directly - they receive fully-formed data from the wiring layer and only
//! ever *emit*.

mod basket;
mod card;
mod form;
mod modal;
mod page;
mod success;

pub use basket::Basket;
pub use card::{BasketCard, CatalogCard, PreviewCard};
pub use form::{ContactsForm, OrderForm};
pub use modal::{ClickTarget, Modal, ModalScreen};
pub use page::Page;
pub use success::Success;
