//! Order confirmation screen.

use web_larek_core::Price;

use crate::events::{AppEvent, EventBus};

/// Shown inside the modal after a successful submission.
pub struct Success {
    close_button: Box<dyn Fn()>,
    description: String,
}

impl Success {
    /// Create the screen bound to `events`.
    #[must_use]
    pub fn new(events: &EventBus) -> Self {
        Self {
            close_button: Box::new(events.trigger(AppEvent::OrderFinished)),
            description: String::new(),
        }
    }

    /// Show the debited total.
    pub fn set_total(&mut self, total: Price) {
        self.description = format!("{total} charged");
    }

    /// Displayed description line.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// The user clicked the close button.
    pub fn close_click(&self) {
        (self.close_button)();
    }
}
