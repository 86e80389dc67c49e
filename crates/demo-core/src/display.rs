//! Message display over a `DisplaySurface`.
//!
//! Non-error messages are cleared after a fixed delay. The clear only
//! happens if the slot still shows the message that scheduled it, as
//! read back from the surface right after writing it.

use std::rc::Rc;

use demo_types::{
    message::DisplayMessage,
    page::{Indicator, Slot},
};
use crate::ports::{DisplaySurface, Scheduler};

/// Base class of every output slot.
pub const OUTPUT_CLASS: &str = "output";

/// Shared message display: clone-cheap via Rc.
#[derive(Clone)]
pub struct MessageDisplay {
    surface: Rc<dyn DisplaySurface>,
    scheduler: Rc<dyn Scheduler>,
    clear_delay_ms: u32,
}

impl MessageDisplay {
    pub fn new(
        surface: Rc<dyn DisplaySurface>,
        scheduler: Rc<dyn Scheduler>,
        clear_delay_ms: u32,
    ) -> Self {
        Self {
            surface,
            scheduler,
            clear_delay_ms,
        }
    }

    /// Replace the slot's content and tag it with the message severity.
    pub fn show(&self, message: &DisplayMessage) {
        let slot = message.slot;
        self.surface.set_content(slot, &message.text);
        self.surface
            .set_class(slot, &format!("{} {}", OUTPUT_CLASS, message.kind.as_str()));

        if !message.kind.auto_clears() {
            return;
        }

        // Surfaces may normalise markup (`&` reads back as `&amp;`)
        let surface = self.surface.clone();
        let original = self.surface.content(slot);
        self.scheduler.schedule(
            self.clear_delay_ms,
            Box::new(move || {
                if surface.content(slot) == original {
                    surface.set_content(slot, "");
                    surface.set_class(slot, OUTPUT_CLASS);
                }
            }),
        );
    }

    /// Write raw markup into a slot, without severity or auto-clear.
    pub fn set_content(&self, slot: Slot, html: &str) {
        self.surface.set_content(slot, html);
    }

    pub fn content(&self, slot: Slot) -> String {
        self.surface.content(slot)
    }

    pub fn set_visible(&self, indicator: Indicator, visible: bool) {
        self.surface.set_visible(indicator, visible);
    }
}
