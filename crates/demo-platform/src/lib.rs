//! Browser adapters for the demo-core ports.

pub mod dom;
pub mod module;
pub mod proxy;
pub mod timer;
pub mod window;

pub use dom::DomSurface;
pub use module::{JsModuleBackend, JsModuleLoader};
pub use proxy::HttpProxyClient;
pub use timer::TimeoutScheduler;
pub use window::BrowserWindow;

use wasm_bindgen::{JsCast, JsValue};

/// Best-effort human readable text for a thrown JS value.
pub fn describe_js_error(value: &JsValue) -> String {
    if let Some(err) = value.dyn_ref::<js_sys::Error>() {
        return String::from(err.message());
    }
    value.as_string().unwrap_or_else(|| format!("{:?}", value))
}
