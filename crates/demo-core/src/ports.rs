//! Port traits: the hexagonal architecture boundary.
//!
//! These traits are defined here in `demo-core` (pure Rust).
//! Browser implementations live in `demo-platform`, the compute module
//! implements `ComputeBackend` in `demo-compute`.

use std::rc::Rc;
use async_trait::async_trait;
use demo_types::{
    Result,
    page::{Indicator, InputField, Slot},
    proxy::{NewsFeed, ProxyPage},
};

// ─── Compute Port ────────────────────────────────────────────

/// The capability set exposed by the compute module.
///
/// Every call returns a `Result` so a backend that throws becomes an
/// explicit error value at the call site.
pub trait ComputeBackend {
    fn hello_world(&self) -> Result<String>;

    fn greet(&self, name: &str) -> Result<String>;

    fn add(&self, a: i32, b: i32) -> Result<i32>;

    /// Milliseconds since the Unix epoch
    fn get_timestamp(&self) -> Result<f64>;
}

/// Asynchronously produces a ready-to-call compute backend.
#[async_trait(?Send)]
pub trait BackendLoader {
    async fn load(&self) -> Result<Rc<dyn ComputeBackend>>;

    /// Where the backend comes from (for logging)
    fn source(&self) -> &str;
}

// ─── Page Ports ──────────────────────────────────────────────

/// Mutable view of the page's output slots.
pub trait DisplaySurface {
    /// Current markup of a slot (empty if missing)
    fn content(&self, slot: Slot) -> String;

    fn set_content(&self, slot: Slot, html: &str);

    fn set_class(&self, slot: Slot, class: &str);

    fn set_visible(&self, indicator: Indicator, visible: bool);
}

/// Runs a task once after a delay.
pub trait Scheduler {
    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Read access to the page's text inputs.
pub trait FormInputs {
    fn value(&self, field: InputField) -> String;
}

/// Opens external pages in a new browser tab.
pub trait WindowPort {
    /// `Ok(false)` means the popup was blocked.
    fn open_tab(&self, url: &str) -> Result<bool>;
}

// ─── Proxy Port ──────────────────────────────────────────────

#[async_trait(?Send)]
pub trait ProxyPort {
    /// `GET /api/proxy/yahoo`
    async fn fetch_homepage(&self) -> Result<ProxyPage>;

    /// `GET /api/proxy/yahoo/news`
    async fn fetch_news(&self) -> Result<NewsFeed>;
}
