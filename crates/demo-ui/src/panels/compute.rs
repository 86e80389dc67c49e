//! Operations backed by the compute module.
//!
//! Each call is wrapped so success and failure come back as a
//! `DisplayMessage` for the operation's own slot.

use demo_core::backend::BackendHandle;
use demo_core::display::MessageDisplay;
use demo_core::ports::ComputeBackend;
use demo_types::{
    DemoError, Result,
    message::DisplayMessage,
    page::Slot,
};

use crate::render::render_timestamp;

pub fn hello(backend: Option<BackendHandle>, display: &MessageDisplay) -> DisplayMessage {
    run(backend, display, Slot::Hello, |b| b.hello_world(), |text| text)
}

pub fn greet(backend: Option<BackendHandle>, display: &MessageDisplay, name: &str) -> DisplayMessage {
    run(backend, display, Slot::Greet, |b| b.greet(name), |text| text)
}

pub fn add(backend: Option<BackendHandle>, display: &MessageDisplay, a: i32, b: i32) -> DisplayMessage {
    run(
        backend,
        display,
        Slot::Calc,
        |backend| backend.add(a, b),
        |sum| format!("{} + {} = {}", a, b, sum),
    )
}

pub fn timestamp(backend: Option<BackendHandle>, display: &MessageDisplay) -> DisplayMessage {
    run(
        backend,
        display,
        Slot::Timestamp,
        |b| b.get_timestamp(),
        render_timestamp,
    )
}

fn run<T>(
    backend: Option<BackendHandle>,
    display: &MessageDisplay,
    slot: Slot,
    call: impl FnOnce(&BackendHandle) -> Result<T>,
    render: impl FnOnce(T) -> String,
) -> DisplayMessage {
    let result = backend
        .ok_or_else(|| DemoError::Backend("compute backend not initialized".to_string()))
        .and_then(|b| call(&b));

    let message = match result {
        Ok(value) => DisplayMessage::success(slot, render(value)),
        Err(e) => {
            log::warn!("{} failed: {}", slot.id(), e);
            DisplayMessage::error(slot, format!("Error: {}", e))
        }
    };
    display.show(&message);
    message
}
