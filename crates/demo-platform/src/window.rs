//! `WindowPort` over `window.open`.

use wasm_bindgen::JsValue;

use demo_core::ports::WindowPort;
use demo_types::{DemoError, Result};

use crate::describe_js_error;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserWindow;

impl WindowPort for BrowserWindow {
    fn open_tab(&self, url: &str) -> Result<bool> {
        let window = web_sys::window()
            .ok_or_else(|| DemoError::Dom("No window object".to_string()))?;

        // `noopener` in the features string makes open() return null even on
        // success, so the opener link is cut by hand instead.
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(tab)) => {
                tab.set_opener(&JsValue::NULL)
                    .map_err(|e| DemoError::JsInterop(describe_js_error(&e)))?;
                Ok(true)
            }
            Ok(None) => Ok(false),
            Err(e) => Err(DemoError::JsInterop(describe_js_error(&e))),
        }
    }
}
