//! Wiring layer: connects views, state, and the API client over the bus.
//!
//! This is the only place that knows about everything at once. Handlers
//! follow one discipline: read state, mutate state, then touch views, and
//! never hold a view borrow across an emit, because nested dispatch may
//! need that same view.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use web_larek_core::{OrderConfirmation, Payment, Product, ProductId};

use crate::api::ShopApi;
use crate::events::{AppEvent, EventBus, EventKind};
use crate::state::{AppState, OrderField};
use crate::views::{
    Basket, BasketCard, CatalogCard, ClickTarget, ContactsForm, Modal, ModalScreen, OrderForm,
    Page, PreviewCard, Success,
};

/// The assembled storefront: bus, state, views, API client.
///
/// Synchronous user interactions flow entirely through the bus; the two
/// network edges ([`Self::load_catalog`] and [`Self::submit_order`]) are
/// async and live outside bus dispatch.
pub struct Storefront<A> {
    api: A,
    events: EventBus,
    state: AppState,
    page: Rc<RefCell<Page>>,
    modal: Rc<RefCell<Modal>>,
    basket: Rc<RefCell<Basket>>,
    preview: Rc<RefCell<PreviewCard>>,
    order_form: Rc<RefCell<OrderForm>>,
    contacts_form: Rc<RefCell<ContactsForm>>,
    success: Rc<RefCell<Success>>,
    submit_requested: Rc<Cell<bool>>,
}

impl<A: ShopApi> Storefront<A> {
    /// Build and wire the whole application around `api`.
    #[must_use]
    pub fn new(api: A) -> Self {
        let events = EventBus::new();
        let state = AppState::new(events.clone());
        let storefront = Self {
            api,
            state,
            page: Rc::new(RefCell::new(Page::new(&events))),
            modal: Rc::new(RefCell::new(Modal::new(events.clone()))),
            basket: Rc::new(RefCell::new(Basket::new(&events))),
            preview: Rc::new(RefCell::new(PreviewCard::new(events.clone()))),
            order_form: Rc::new(RefCell::new(OrderForm::new(events.clone()))),
            contacts_form: Rc::new(RefCell::new(ContactsForm::new(events.clone()))),
            success: Rc::new(RefCell::new(Success::new(&events))),
            submit_requested: Rc::new(Cell::new(false)),
            events,
        };
        storefront.wire();
        storefront
    }

    /// Register the handler set. Mirrors the app's control flow end to end:
    /// intents in, state mutation, derived events out, views re-rendered.
    fn wire(&self) {
        let events = &self.events;

        // Catalog replaced: rebuild the gallery from a fresh readout.
        {
            let state = self.state.clone();
            let page = Rc::clone(&self.page);
            let bus = events.clone();
            events.on(EventKind::ProductsChanged, move |_| {
                let cards = state
                    .catalog()
                    .iter()
                    .map(|product| {
                        let mut card = CatalogCard::new(bus.clone());
                        card.render(product);
                        card
                    })
                    .collect();
                page.borrow_mut().set_catalog(cards);
            });
        }

        // Product picked in the catalog: stage the preview.
        {
            let state = self.state.clone();
            events.on(EventKind::CatalogSelect, move |event| {
                let AppEvent::CatalogSelect { id } = event else {
                    return;
                };
                match state.get_product(id) {
                    Ok(product) => state.set_preview(&product),
                    Err(e) => tracing::warn!(error = %e, "ignoring selection of unknown product"),
                }
            });
        }

        // Preview staged: render the card and open the modal.
        {
            let state = self.state.clone();
            let preview = Rc::clone(&self.preview);
            let modal = Rc::clone(&self.modal);
            events.on(EventKind::PreviewChanged, move |event| {
                let AppEvent::PreviewChanged(product) = event else {
                    return;
                };
                preview
                    .borrow_mut()
                    .render(product, state.button_text(product));
                modal.borrow_mut().render(ModalScreen::Preview);
            });
        }

        // Basket toggle requested from the preview button.
        {
            let state = self.state.clone();
            let modal = Rc::clone(&self.modal);
            events.on(EventKind::ButtonStatus, move |event| {
                let AppEvent::ButtonStatus { id } = event else {
                    return;
                };
                match state.get_product(id) {
                    Ok(product) => state.toggle_basket(&product),
                    Err(e) => tracing::warn!(error = %e, "ignoring toggle of unknown product"),
                }
                modal.borrow_mut().close();
            });
        }

        // Basket opened from the page header.
        {
            let modal = Rc::clone(&self.modal);
            events.on(EventKind::BasketOpen, move |_| {
                modal.borrow_mut().render(ModalScreen::Basket);
            });
        }

        // Basket changed: counter, rows, total.
        {
            let state = self.state.clone();
            let page = Rc::clone(&self.page);
            let basket = Rc::clone(&self.basket);
            let bus = events.clone();
            events.on(EventKind::BasketChanged, move |_| {
                page.borrow_mut().set_counter(state.basket_count());
                let items: Vec<BasketCard> = state
                    .basket_products()
                    .iter()
                    .map(|product| {
                        let mut card = BasketCard::new(bus.clone());
                        let index = state.product_index(&product.id).unwrap_or(0);
                        card.render(product, index);
                        card
                    })
                    .collect();
                let mut basket = basket.borrow_mut();
                basket.set_total(state.basket_total());
                basket.set_items(items);
            });
        }

        // Row deleted from the basket list.
        {
            let state = self.state.clone();
            events.on(EventKind::BasketDelete, move |event| {
                let AppEvent::BasketDelete { id } = event else {
                    return;
                };
                state.remove_from_basket(id);
            });
        }

        // Checkout step 1 opened.
        {
            let state = self.state.clone();
            let order_form = Rc::clone(&self.order_form);
            let modal = Rc::clone(&self.modal);
            events.on(EventKind::OrderOpen, move |_| {
                let draft = state.order();
                // Re-validate first; the nested FormErrorsChanged dispatch
                // needs the form borrow free.
                let _ = state.validate_order();
                let valid = state.form_errors().order_step_ok();
                order_form
                    .borrow_mut()
                    .render(draft.payment, &draft.address, valid, "");
                modal.borrow_mut().render(ModalScreen::Order);
            });
        }

        // A form field changed.
        {
            let state = self.state.clone();
            events.on(EventKind::InputChange, move |event| {
                let AppEvent::InputChange { field, value } = event else {
                    return;
                };
                state.set_order_field(*field, value);
            });
        }

        // Payment method picked.
        {
            let state = self.state.clone();
            let order_form = Rc::clone(&self.order_form);
            events.on(EventKind::PaymentChange, move |event| {
                let AppEvent::PaymentChange { payment } = event else {
                    return;
                };
                order_form.borrow_mut().toggle_payment(*payment);
                state.set_order_payment(*payment);
            });
        }

        // Validation ran: update both forms' gating and error lines.
        {
            let order_form = Rc::clone(&self.order_form);
            let contacts_form = Rc::clone(&self.contacts_form);
            events.on(EventKind::FormErrorsChanged, move |event| {
                let AppEvent::FormErrorsChanged(errors) = event else {
                    return;
                };
                {
                    let mut form = order_form.borrow_mut();
                    form.set_valid(errors.order_step_ok());
                    form.set_errors(&errors.order_step_message());
                }
                let mut form = contacts_form.borrow_mut();
                form.set_valid(errors.contacts_step_ok());
                form.set_errors(&errors.contacts_step_message());
            });
        }

        // Step 1 submitted: move on to contacts.
        {
            let state = self.state.clone();
            let contacts_form = Rc::clone(&self.contacts_form);
            let modal = Rc::clone(&self.modal);
            events.on(EventKind::OrderSubmit, move |_| {
                let draft = state.order();
                let _ = state.validate_order();
                let valid = state.form_errors().contacts_step_ok();
                contacts_form
                    .borrow_mut()
                    .render(&draft.email, &draft.phone, valid, "");
                modal.borrow_mut().render(ModalScreen::Contacts);
            });
        }

        // Step 2 submitted: hand off to the async edge.
        {
            let submit_requested = Rc::clone(&self.submit_requested);
            events.on(EventKind::ContactsSubmit, move |_| {
                submit_requested.set(true);
            });
        }

        // Success screen dismissed.
        {
            let modal = Rc::clone(&self.modal);
            events.on(EventKind::OrderFinished, move |_| {
                modal.borrow_mut().close();
            });
        }

        // Modal side effects: page scroll lock and preview lifetime.
        {
            let page = Rc::clone(&self.page);
            events.on(EventKind::ModalOpen, move |_| {
                page.borrow_mut().set_locked(true);
            });
        }
        {
            let page = Rc::clone(&self.page);
            let state = self.state.clone();
            events.on(EventKind::ModalClose, move |_| {
                page.borrow_mut().set_locked(false);
                state.clear_preview();
            });
        }
    }

    // -------------------------------------------------------------------
    // User gestures
    //
    // The driver-facing edge standing in for DOM listeners. Each gesture
    // reads what it needs from a view in a short scope and emits with
    // every borrow released, because handlers may write back into the
    // very view the gesture came from.
    // -------------------------------------------------------------------

    /// Click a gallery tile by position.
    pub fn click_catalog_card(&self, index: usize) {
        let id = self
            .page
            .borrow()
            .catalog()
            .get(index)
            .and_then(|card| card.product_id().cloned());
        if let Some(id) = id {
            self.events.emit(AppEvent::CatalogSelect { id });
        }
    }

    /// Click the header basket button.
    pub fn click_basket_button(&self) {
        self.events.emit(AppEvent::BasketOpen);
    }

    /// Click the preview's basket-toggle button. Disabled buttons swallow
    /// the click.
    pub fn click_preview_button(&self) {
        let id = {
            let preview = self.preview.borrow();
            if !preview.button_enabled() {
                return;
            }
            preview.product_id().cloned()
        };
        if let Some(id) = id {
            self.events.emit(AppEvent::ButtonStatus { id });
        }
    }

    /// Click the delete control on a basket row by position.
    pub fn click_basket_delete(&self, index: usize) {
        let id = self
            .basket
            .borrow()
            .items()
            .get(index)
            .and_then(|card| card.product_id().cloned());
        if let Some(id) = id {
            self.events.emit(AppEvent::BasketDelete { id });
        }
    }

    /// Click the basket's checkout button. Disabled while empty.
    pub fn click_checkout(&self) {
        let enabled = self.basket.borrow().checkout_enabled();
        if enabled {
            self.events.emit(AppEvent::OrderOpen);
        }
    }

    /// Click one of the payment buttons on the order form.
    pub fn click_payment(&self, payment: Payment) {
        self.events.emit(AppEvent::PaymentChange { payment });
    }

    /// Type into one of the checkout text fields. The field itself already
    /// holds the text; the event carries it into state.
    pub fn input_field(&self, field: OrderField, value: &str) {
        self.events.emit(AppEvent::InputChange {
            field,
            value: value.to_owned(),
        });
    }

    /// Click submit on the order form. Gated on step-1 validity.
    pub fn submit_order_form(&self) {
        let valid = self.order_form.borrow().valid();
        if valid {
            self.events.emit(AppEvent::OrderSubmit);
        }
    }

    /// Click submit on the contacts form. Gated on step-2 validity.
    pub fn submit_contacts_form(&self) {
        let valid = self.contacts_form.borrow().valid();
        if valid {
            self.events.emit(AppEvent::ContactsSubmit);
        }
    }

    /// Click the close button on the success screen.
    pub fn click_success_close(&self) {
        self.events.emit(AppEvent::OrderFinished);
    }

    /// Click somewhere on the open modal.
    pub fn click_modal(&self, target: ClickTarget) {
        self.modal.borrow_mut().handle_click(target);
    }

    // -------------------------------------------------------------------
    // Async edges
    // -------------------------------------------------------------------

    /// Fetch the catalog and install it. A failed fetch is logged and
    /// leaves the catalog empty; the user retries by reloading.
    pub async fn load_catalog(&self) {
        match self.api.product_list().await {
            Ok(items) => {
                tracing::info!(count = items.len(), "catalog loaded");
                self.state.set_catalog(items);
            }
            Err(e) => tracing::error!(error = %e, "failed to load catalog"),
        }
    }

    /// Whether a contacts-form submit arrived since the last call; clears
    /// the flag. The driver polls this after dispatching user input.
    pub fn take_submit_request(&self) -> bool {
        self.submit_requested.replace(false)
    }

    /// Submit the order. On success: show the confirmation with the
    /// pre-clear total, then clear basket and draft. On failure: log and
    /// leave both intact so the user can resubmit.
    pub async fn submit_order(&self) -> Option<OrderConfirmation> {
        let Some(request) = self.state.order_data() else {
            tracing::warn!("order submission requested with an incomplete draft");
            return None;
        };

        match self.api.submit_order(&request).await {
            Ok(confirmation) => {
                tracing::info!(id = %confirmation.id, total = %confirmation.total, "order accepted");
                self.success
                    .borrow_mut()
                    .set_total(self.state.basket_total());
                self.modal.borrow_mut().render(ModalScreen::Success);
                self.state.clear_basket();
                self.state.clear_order();
                Some(confirmation)
            }
            Err(e) => {
                tracing::error!(error = %e, "order submission failed");
                None
            }
        }
    }

    /// Fetch one product by id, bypassing the in-memory catalog.
    ///
    /// # Errors
    ///
    /// Propagates transport and status failures from the API client.
    pub async fn fetch_product(&self, id: &ProductId) -> crate::error::Result<Product> {
        Ok(self.api.product(id).await?)
    }

    // -------------------------------------------------------------------
    // Accessors
    // -------------------------------------------------------------------

    /// The shared bus.
    #[must_use]
    pub const fn events(&self) -> &EventBus {
        &self.events
    }

    /// The application state handle.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// Page view.
    #[must_use]
    pub const fn page(&self) -> &Rc<RefCell<Page>> {
        &self.page
    }

    /// Modal view.
    #[must_use]
    pub const fn modal(&self) -> &Rc<RefCell<Modal>> {
        &self.modal
    }

    /// Basket view.
    #[must_use]
    pub const fn basket(&self) -> &Rc<RefCell<Basket>> {
        &self.basket
    }

    /// Preview card view.
    #[must_use]
    pub const fn preview(&self) -> &Rc<RefCell<PreviewCard>> {
        &self.preview
    }

    /// Order form view (checkout step 1).
    #[must_use]
    pub const fn order_form(&self) -> &Rc<RefCell<OrderForm>> {
        &self.order_form
    }

    /// Contacts form view (checkout step 2).
    #[must_use]
    pub const fn contacts_form(&self) -> &Rc<RefCell<ContactsForm>> {
        &self.contacts_form
    }

    /// Success view.
    #[must_use]
    pub const fn success(&self) -> &Rc<RefCell<Success>> {
        &self.success
    }
}
