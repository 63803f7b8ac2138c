//! Typed publish/subscribe event bus.
//!
//! All inter-component communication flows through the [`EventBus`]. Views
//! emit intent events (a user clicked something), the application state
//! emits derived "changed" events (data moved), and neither side ever calls
//! the other directly.
//!
//! The bus is deliberately single-threaded and synchronous: [`EventBus::emit`]
//! runs every matching handler to completion before returning. A handler may
//! itself emit (nested dispatch is strictly sequential), but a handler that
//! transitively re-emits an event it is currently handling will panic on the
//! re-entrant self-invocation rather than recurse without bound.

use std::cell::RefCell;
use std::rc::Rc;

use web_larek_core::{Payment, Product, ProductId};

use crate::state::{FormErrors, OrderField};

/// Every event that can travel over the bus.
///
/// Intent events carry the minimum a subscriber needs (usually an id);
/// derived events carry a full snapshot so views can render without
/// reaching back into state mid-dispatch.
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Catalog was replaced wholesale.
    ProductsChanged,
    /// User picked a product card in the catalog.
    CatalogSelect {
        /// Id of the selected product.
        id: ProductId,
    },
    /// Preview selection is set and ready to render.
    PreviewChanged(Product),
    /// Basket-toggle requested from the preview button.
    ButtonStatus {
        /// Id of the previewed product.
        id: ProductId,
    },
    /// User opened the basket.
    BasketOpen,
    /// Basket membership changed.
    BasketChanged,
    /// User removed an item from the basket list.
    BasketDelete {
        /// Id of the removed product.
        id: ProductId,
    },
    /// User moved from the basket to the order form.
    OrderOpen,
    /// Order form (payment/address) submitted.
    OrderSubmit,
    /// Contacts form (email/phone) submitted.
    ContactsSubmit,
    /// User dismissed the success screen.
    OrderFinished,
    /// User picked a payment method.
    PaymentChange {
        /// The chosen method.
        payment: Payment,
    },
    /// User typed into an order form field.
    InputChange {
        /// Which field changed.
        field: OrderField,
        /// The new raw value.
        value: String,
    },
    /// Validation ran; full error map attached.
    FormErrorsChanged(FormErrors),
    /// Modal opened.
    ModalOpen,
    /// Modal closed.
    ModalClose,
}

/// Discriminant of [`AppEvent`], used as the subscription key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    ProductsChanged,
    CatalogSelect,
    PreviewChanged,
    ButtonStatus,
    BasketOpen,
    BasketChanged,
    BasketDelete,
    OrderOpen,
    OrderSubmit,
    ContactsSubmit,
    OrderFinished,
    PaymentChange,
    InputChange,
    FormErrorsChanged,
    ModalOpen,
    ModalClose,
}

impl AppEvent {
    /// The subscription key for this event.
    #[must_use]
    pub const fn kind(&self) -> EventKind {
        match self {
            Self::ProductsChanged => EventKind::ProductsChanged,
            Self::CatalogSelect { .. } => EventKind::CatalogSelect,
            Self::PreviewChanged(_) => EventKind::PreviewChanged,
            Self::ButtonStatus { .. } => EventKind::ButtonStatus,
            Self::BasketOpen => EventKind::BasketOpen,
            Self::BasketChanged => EventKind::BasketChanged,
            Self::BasketDelete { .. } => EventKind::BasketDelete,
            Self::OrderOpen => EventKind::OrderOpen,
            Self::OrderSubmit => EventKind::OrderSubmit,
            Self::ContactsSubmit => EventKind::ContactsSubmit,
            Self::OrderFinished => EventKind::OrderFinished,
            Self::PaymentChange { .. } => EventKind::PaymentChange,
            Self::InputChange { .. } => EventKind::InputChange,
            Self::FormErrorsChanged(_) => EventKind::FormErrorsChanged,
            Self::ModalOpen => EventKind::ModalOpen,
            Self::ModalClose => EventKind::ModalClose,
        }
    }
}

/// Handle returned by [`EventBus::on`] / [`EventBus::on_any`], used to
/// unsubscribe via [`EventBus::off`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandlerId(u64);

type Handler = Rc<RefCell<dyn FnMut(&AppEvent)>>;

struct Subscription {
    id: HandlerId,
    /// `None` subscribes to every event (wildcard).
    filter: Option<EventKind>,
    handler: Handler,
}

#[derive(Default)]
struct Registry {
    next_id: u64,
    subscriptions: Vec<Subscription>,
}

/// Single-threaded synchronous event bus.
///
/// Cheaply cloneable; clones share the same handler registry.
#[derive(Clone, Default)]
pub struct EventBus {
    registry: Rc<RefCell<Registry>>,
}

impl EventBus {
    /// Create an empty bus.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for one event kind.
    pub fn on(&self, kind: EventKind, handler: impl FnMut(&AppEvent) + 'static) -> HandlerId {
        self.subscribe(Some(kind), handler)
    }

    /// Register a wildcard handler invoked for every event.
    pub fn on_any(&self, handler: impl FnMut(&AppEvent) + 'static) -> HandlerId {
        self.subscribe(None, handler)
    }

    fn subscribe(
        &self,
        filter: Option<EventKind>,
        handler: impl FnMut(&AppEvent) + 'static,
    ) -> HandlerId {
        let mut registry = self.registry.borrow_mut();
        let id = HandlerId(registry.next_id);
        registry.next_id += 1;
        registry.subscriptions.push(Subscription {
            id,
            filter,
            handler: Rc::new(RefCell::new(handler)),
        });
        id
    }

    /// Remove one handler. Returns `false` if the id is unknown (already
    /// removed, or never registered on this bus).
    pub fn off(&self, id: HandlerId) -> bool {
        let mut registry = self.registry.borrow_mut();
        let before = registry.subscriptions.len();
        registry.subscriptions.retain(|sub| sub.id != id);
        registry.subscriptions.len() != before
    }

    /// Synchronously dispatch `event` to every matching handler, in
    /// registration order. Exact-kind and wildcard subscribers share one
    /// ordering. Emitting with no subscribers is a no-op.
    ///
    /// The registry borrow is released before any handler runs, so handlers
    /// may emit further events or (un)subscribe; handlers registered during
    /// a dispatch do not run for that dispatch.
    pub fn emit(&self, event: AppEvent) {
        let kind = event.kind();
        let matching: Vec<Handler> = self
            .registry
            .borrow()
            .subscriptions
            .iter()
            .filter(|sub| sub.filter.is_none() || sub.filter == Some(kind))
            .map(|sub| Rc::clone(&sub.handler))
            .collect();

        for handler in matching {
            (handler.borrow_mut())(&event);
        }
    }

    /// Adapt a UI callback into a bus emission: returns a zero-argument
    /// closure that emits `event` each time it is called.
    #[must_use]
    pub fn trigger(&self, event: AppEvent) -> impl Fn() + 'static {
        let bus = self.clone();
        move || bus.emit(event.clone())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn counter() -> (Rc<RefCell<Vec<&'static str>>>, EventBus) {
        (Rc::new(RefCell::new(Vec::new())), EventBus::new())
    }

    #[test]
    fn test_emit_reaches_exact_subscriber() {
        let (log, bus) = counter();
        let log2 = Rc::clone(&log);
        bus.on(EventKind::BasketOpen, move |_| log2.borrow_mut().push("basket"));

        bus.emit(AppEvent::BasketOpen);
        bus.emit(AppEvent::ModalClose);

        assert_eq!(*log.borrow(), vec!["basket"]);
    }

    #[test]
    fn test_emit_with_no_subscribers_is_noop() {
        let bus = EventBus::new();
        bus.emit(AppEvent::ProductsChanged);
    }

    #[test]
    fn test_wildcard_sees_every_event() {
        let (log, bus) = counter();
        let log2 = Rc::clone(&log);
        bus.on_any(move |event| match event {
            AppEvent::BasketOpen => log2.borrow_mut().push("basket"),
            _ => log2.borrow_mut().push("other"),
        });

        bus.emit(AppEvent::BasketOpen);
        bus.emit(AppEvent::ModalOpen);

        assert_eq!(*log.borrow(), vec!["basket", "other"]);
    }

    #[test]
    fn test_registration_order_preserved() {
        let (log, bus) = counter();
        for name in ["first", "second", "third"] {
            let log2 = Rc::clone(&log);
            bus.on(EventKind::ModalOpen, move |_| log2.borrow_mut().push(name));
        }

        bus.emit(AppEvent::ModalOpen);

        assert_eq!(*log.borrow(), vec!["first", "second", "third"]);
    }

    #[test]
    fn test_off_removes_one_handler() {
        let (log, bus) = counter();
        let log2 = Rc::clone(&log);
        let log3 = Rc::clone(&log);
        let id = bus.on(EventKind::ModalOpen, move |_| log2.borrow_mut().push("removed"));
        bus.on(EventKind::ModalOpen, move |_| log3.borrow_mut().push("kept"));

        assert!(bus.off(id));
        assert!(!bus.off(id));

        bus.emit(AppEvent::ModalOpen);
        assert_eq!(*log.borrow(), vec!["kept"]);
    }

    #[test]
    fn test_trigger_emits_on_call() {
        let (log, bus) = counter();
        let log2 = Rc::clone(&log);
        bus.on(EventKind::OrderOpen, move |_| log2.borrow_mut().push("open"));

        let open = bus.trigger(AppEvent::OrderOpen);
        assert!(log.borrow().is_empty());

        open();
        open();
        assert_eq!(*log.borrow(), vec!["open", "open"]);
    }

    #[test]
    fn test_nested_emit_is_sequential() {
        let (log, bus) = counter();
        let log2 = Rc::clone(&log);
        let log3 = Rc::clone(&log);
        let nested_bus = bus.clone();
        bus.on(EventKind::ModalOpen, move |_| {
            log2.borrow_mut().push("outer-before");
            nested_bus.emit(AppEvent::ModalClose);
            log2.borrow_mut().push("outer-after");
        });
        bus.on(EventKind::ModalClose, move |_| log3.borrow_mut().push("inner"));

        bus.emit(AppEvent::ModalOpen);

        assert_eq!(
            *log.borrow(),
            vec!["outer-before", "inner", "outer-after"]
        );
    }

    #[test]
    fn test_handler_registered_during_dispatch_skips_current_event() {
        let (log, bus) = counter();
        let log2 = Rc::clone(&log);
        let inner_bus = bus.clone();
        bus.on(EventKind::ModalOpen, move |_| {
            let log3 = Rc::clone(&log2);
            inner_bus.on(EventKind::ModalOpen, move |_| log3.borrow_mut().push("late"));
        });

        bus.emit(AppEvent::ModalOpen);
        assert!(log.borrow().is_empty());

        bus.emit(AppEvent::ModalOpen);
        assert_eq!(*log.borrow(), vec!["late"]);
    }

    #[test]
    fn test_payload_arrives_intact() {
        let bus = EventBus::new();
        let seen = Rc::new(RefCell::new(None));
        let seen2 = Rc::clone(&seen);
        bus.on(EventKind::CatalogSelect, move |event| {
            if let AppEvent::CatalogSelect { id } = event {
                *seen2.borrow_mut() = Some(id.clone());
            }
        });

        let id = ProductId::parse("p-1").unwrap();
        bus.emit(AppEvent::CatalogSelect { id: id.clone() });

        assert_eq!(seen.borrow().as_ref(), Some(&id));
    }
}
