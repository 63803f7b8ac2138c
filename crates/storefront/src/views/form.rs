//! Checkout forms.
//!
//! The two steps share the same chrome (submit gating plus an inline error
//! line); the step-specific fields sit alongside it. Input edits and
//! submits travel over the bus - the forms never validate anything
//! themselves.

use web_larek_core::Payment;

use crate::events::{AppEvent, EventBus};
use crate::state::OrderField;

/// Shared form chrome: submit button state and the error line.
struct FormChrome {
    submit: Box<dyn Fn()>,
    valid: bool,
    errors: String,
}

impl FormChrome {
    fn new(events: &EventBus, submit_event: AppEvent) -> Self {
        Self {
            submit: Box::new(events.trigger(submit_event)),
            valid: false,
            errors: String::new(),
        }
    }

    fn submit_click(&self) {
        if self.valid {
            (self.submit)();
        }
    }
}

/// Checkout step 1: payment method and delivery address.
pub struct OrderForm {
    events: EventBus,
    chrome: FormChrome,
    /// Which payment button carries the active styling.
    active_payment: Option<Payment>,
    address: String,
}

impl OrderForm {
    /// Create the form bound to `events`.
    #[must_use]
    pub fn new(events: EventBus) -> Self {
        let chrome = FormChrome::new(&events, AppEvent::OrderSubmit);
        Self {
            events,
            chrome,
            active_payment: None,
            address: String::new(),
        }
    }

    /// Batch render: field values plus chrome.
    pub fn render(&mut self, payment: Option<Payment>, address: &str, valid: bool, errors: &str) {
        self.active_payment = payment;
        self.address = address.to_owned();
        self.set_valid(valid);
        self.set_errors(errors);
    }

    /// The user clicked one of the payment buttons.
    pub fn payment_click(&self, payment: Payment) {
        self.events.emit(AppEvent::PaymentChange { payment });
    }

    /// Move the active styling to `payment`.
    pub const fn toggle_payment(&mut self, payment: Payment) {
        self.active_payment = Some(payment);
    }

    /// Remove the active styling from both payment buttons.
    pub const fn clear_payment(&mut self) {
        self.active_payment = None;
    }

    /// Which button is styled active.
    #[must_use]
    pub const fn active_payment(&self) -> Option<Payment> {
        self.active_payment
    }

    /// The user typed into the address field.
    pub fn input_address(&mut self, value: &str) {
        self.address = value.to_owned();
        self.events.emit(AppEvent::InputChange {
            field: OrderField::Address,
            value: value.to_owned(),
        });
    }

    /// Current address field value.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Gate the submit button.
    pub const fn set_valid(&mut self, valid: bool) {
        self.chrome.valid = valid;
    }

    /// Whether the submit button accepts clicks.
    #[must_use]
    pub const fn valid(&self) -> bool {
        self.chrome.valid
    }

    /// Replace the inline error line.
    pub fn set_errors(&mut self, errors: &str) {
        self.chrome.errors = errors.to_owned();
    }

    /// Displayed error line.
    #[must_use]
    pub fn errors(&self) -> &str {
        &self.chrome.errors
    }

    /// The user clicked submit; emits `OrderSubmit` only when valid.
    pub fn submit_click(&self) {
        self.chrome.submit_click();
    }
}

/// Checkout step 2: email and phone.
pub struct ContactsForm {
    events: EventBus,
    chrome: FormChrome,
    email: String,
    phone: String,
}

impl ContactsForm {
    /// Create the form bound to `events`.
    #[must_use]
    pub fn new(events: EventBus) -> Self {
        let chrome = FormChrome::new(&events, AppEvent::ContactsSubmit);
        Self {
            events,
            chrome,
            email: String::new(),
            phone: String::new(),
        }
    }

    /// Batch render: field values plus chrome.
    pub fn render(&mut self, email: &str, phone: &str, valid: bool, errors: &str) {
        self.email = email.to_owned();
        self.phone = phone.to_owned();
        self.set_valid(valid);
        self.set_errors(errors);
    }

    /// The user typed into the email field.
    pub fn input_email(&mut self, value: &str) {
        self.email = value.to_owned();
        self.events.emit(AppEvent::InputChange {
            field: OrderField::Email,
            value: value.to_owned(),
        });
    }

    /// The user typed into the phone field.
    pub fn input_phone(&mut self, value: &str) {
        self.phone = value.to_owned();
        self.events.emit(AppEvent::InputChange {
            field: OrderField::Phone,
            value: value.to_owned(),
        });
    }

    /// Current email field value.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current phone field value.
    #[must_use]
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Gate the submit button.
    pub const fn set_valid(&mut self, valid: bool) {
        self.chrome.valid = valid;
    }

    /// Whether the submit button accepts clicks.
    #[must_use]
    pub const fn valid(&self) -> bool {
        self.chrome.valid
    }

    /// Replace the inline error line.
    pub fn set_errors(&mut self, errors: &str) {
        self.chrome.errors = errors.to_owned();
    }

    /// Displayed error line.
    #[must_use]
    pub fn errors(&self) -> &str {
        &self.chrome.errors
    }

    /// The user clicked submit; emits `ContactsSubmit` only when valid.
    pub fn submit_click(&self) {
        self.chrome.submit_click();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::events::EventKind;

    fn count(bus: &EventBus, kind: EventKind) -> Rc<RefCell<usize>> {
        let counter = Rc::new(RefCell::new(0));
        let counter2 = Rc::clone(&counter);
        bus.on(kind, move |_| *counter2.borrow_mut() += 1);
        counter
    }

    #[test]
    fn test_submit_gated_on_valid() {
        let bus = EventBus::new();
        let submits = count(&bus, EventKind::OrderSubmit);
        let mut form = OrderForm::new(bus);

        form.submit_click();
        assert_eq!(*submits.borrow(), 0);

        form.set_valid(true);
        form.submit_click();
        assert_eq!(*submits.borrow(), 1);
    }

    #[test]
    fn test_payment_click_emits_change() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(None));
        let seen2 = Rc::clone(&seen);
        bus.on(EventKind::PaymentChange, move |event| {
            if let AppEvent::PaymentChange { payment } = event {
                *seen2.borrow_mut() = Some(*payment);
            }
        });

        let form = OrderForm::new(bus);
        form.payment_click(Payment::Cash);

        assert_eq!(*seen.borrow(), Some(Payment::Cash));
        // Styling only moves when the wiring layer calls toggle_payment.
        assert_eq!(form.active_payment(), None);
    }

    #[test]
    fn test_toggle_and_clear_payment_styling() {
        let bus = EventBus::new();
        let mut form = OrderForm::new(bus);

        form.toggle_payment(Payment::Card);
        assert_eq!(form.active_payment(), Some(Payment::Card));

        form.toggle_payment(Payment::Cash);
        assert_eq!(form.active_payment(), Some(Payment::Cash));

        form.clear_payment();
        assert_eq!(form.active_payment(), None);
    }

    #[test]
    fn test_address_input_emits_field_change() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(None));
        let seen2 = Rc::clone(&seen);
        bus.on(EventKind::InputChange, move |event| {
            if let AppEvent::InputChange { field, value } = event {
                *seen2.borrow_mut() = Some((*field, value.clone()));
            }
        });

        let mut form = OrderForm::new(bus);
        form.input_address("Main St 1");

        assert_eq!(
            *seen.borrow(),
            Some((OrderField::Address, "Main St 1".to_owned()))
        );
        assert_eq!(form.address(), "Main St 1");
    }

    #[test]
    fn test_contacts_inputs_emit_field_changes() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen2 = Rc::clone(&seen);
        bus.on(EventKind::InputChange, move |event| {
            if let AppEvent::InputChange { field, .. } = event {
                seen2.borrow_mut().push(*field);
            }
        });

        let mut form = ContactsForm::new(bus);
        form.input_email("user@example.com");
        form.input_phone("+1 555 0100");

        assert_eq!(*seen.borrow(), vec![OrderField::Email, OrderField::Phone]);
    }

    #[test]
    fn test_contacts_submit_gated() {
        let bus = EventBus::new();
        let submits = count(&bus, EventKind::ContactsSubmit);
        let mut form = ContactsForm::new(bus);

        form.submit_click();
        form.set_valid(true);
        form.submit_click();

        assert_eq!(*submits.borrow(), 1);
    }

    #[test]
    fn test_render_batch() {
        let bus = EventBus::new();
        let mut form = OrderForm::new(bus);

        form.render(Some(Payment::Card), "Main St 1", true, "");

        assert_eq!(form.active_payment(), Some(Payment::Card));
        assert_eq!(form.address(), "Main St 1");
        assert!(form.valid());
        assert_eq!(form.errors(), "");
    }
}
