//! Modal window: screen slot, open/close, click-outside semantics.

use crate::events::{AppEvent, EventBus};

/// Which screen the modal is currently showing. The screens themselves are
/// owned by the wiring layer; the modal only tracks what is on display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalScreen {
    /// Product preview card.
    Preview,
    /// Basket contents.
    Basket,
    /// Payment/address form (checkout step 1).
    Order,
    /// Email/phone form (checkout step 2).
    Contacts,
    /// Order confirmation.
    Success,
}

/// Where inside the modal a click landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    /// The darkened backdrop around the content.
    Overlay,
    /// The content area itself.
    Content,
    /// The dedicated close button.
    CloseButton,
}

/// The single modal container.
///
/// Opening emits `ModalOpen`, closing emits `ModalClose`; the page reacts
/// to those by locking/unlocking scroll - the modal never touches the page
/// directly.
pub struct Modal {
    events: EventBus,
    active: bool,
    screen: Option<ModalScreen>,
}

impl Modal {
    /// Create a closed modal bound to `events`.
    #[must_use]
    pub fn new(events: EventBus) -> Self {
        Self {
            events,
            active: false,
            screen: None,
        }
    }

    /// Show `screen` and open the modal.
    pub fn render(&mut self, screen: ModalScreen) {
        self.screen = Some(screen);
        self.open();
    }

    /// Open the modal. Emits `ModalOpen`.
    pub fn open(&mut self) {
        self.active = true;
        self.events.emit(AppEvent::ModalOpen);
    }

    /// Close the modal and clear its content. Emits `ModalClose`.
    pub fn close(&mut self) {
        self.active = false;
        self.screen = None;
        self.events.emit(AppEvent::ModalClose);
    }

    /// Route a click: backdrop and close button dismiss, clicks inside the
    /// content do not.
    pub fn handle_click(&mut self, target: ClickTarget) {
        match target {
            ClickTarget::Overlay | ClickTarget::CloseButton => self.close(),
            ClickTarget::Content => {}
        }
    }

    /// Whether the modal is open.
    #[must_use]
    pub const fn active(&self) -> bool {
        self.active
    }

    /// The screen on display, if open.
    #[must_use]
    pub const fn screen(&self) -> Option<ModalScreen> {
        self.screen
    }
}
