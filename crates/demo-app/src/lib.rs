//! Demo App: WASM entry point.
//!
//! This crate is the composition root (DI wiring layer).
//! It assembles the browser adapters, hands them to the host controller,
//! and binds the page's buttons once the compute backend is selected.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use demo_core::backend::BackendCell;
use demo_core::display::MessageDisplay;
use demo_platform::{BrowserWindow, DomSurface, HttpProxyClient, JsModuleLoader, TimeoutScheduler};
use demo_types::{config::DemoConfig, page::Trigger};
use demo_ui::controller::HostController;

/// Id of the optional `<script type="application/json">` config override
const CONFIG_ELEMENT_ID: &str = "demo-config";

/// WASM entry point: called when the module is instantiated
#[wasm_bindgen(start)]
pub fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    log::info!("WASM demo starting...");
    install_global_error_logging();

    let surface = Rc::new(DomSurface::new());
    let config = load_config(&surface);

    let display = MessageDisplay::new(
        surface.clone(),
        Rc::new(TimeoutScheduler),
        config.clear_delay_ms,
    );
    let controller = Rc::new(HostController::new(
        config.clone(),
        Rc::new(BackendCell::new()),
        display,
        Rc::new(HttpProxyClient::new(&config)),
        Rc::new(BrowserWindow),
    ));

    wasm_bindgen_futures::spawn_local(async move {
        let loader = JsModuleLoader::new(config.module_path.as_str());
        match controller.start(&loader).await {
            // Buttons are enabled in both modes; fallback never blocks the page
            Ok(_) => bind_triggers(&surface, &controller),
            Err(e) => log::error!("Host page failed to start: {}", e),
        }
    });
}

fn load_config(surface: &DomSurface) -> DemoConfig {
    match surface.text_of(CONFIG_ELEMENT_ID) {
        Some(json) => DemoConfig::from_json(&json).unwrap_or_else(|e| {
            log::warn!("Ignoring #{}: {}", CONFIG_ELEMENT_ID, e);
            DemoConfig::default()
        }),
        None => DemoConfig::default(),
    }
}

fn bind_triggers(surface: &Rc<DomSurface>, controller: &Rc<HostController>) {
    for &trigger in Trigger::all() {
        let controller = controller.clone();
        let inputs = surface.clone();
        let bound = surface.bind_trigger(trigger, move || {
            let controller = controller.clone();
            let inputs = inputs.clone();
            wasm_bindgen_futures::spawn_local(async move {
                controller.dispatch(trigger, &*inputs).await;
            });
        });
        if let Err(e) = bound {
            log::warn!("{:?} not bound: {}", trigger, e);
        }
    }
}

/// Route uncaught errors and unhandled promise rejections to the log.
fn install_global_error_logging() {
    let Some(window) = web_sys::window() else {
        return;
    };

    let on_error = Closure::<dyn FnMut(web_sys::ErrorEvent)>::new(|event: web_sys::ErrorEvent| {
        log::error!("Global error: {}", event.message());
    });
    let on_rejection =
        Closure::<dyn FnMut(web_sys::PromiseRejectionEvent)>::new(|event: web_sys::PromiseRejectionEvent| {
            log::error!("Unhandled promise rejection: {:?}", event.reason());
        });

    let installed = window
        .add_event_listener_with_callback("error", on_error.as_ref().unchecked_ref())
        .and_then(|_| {
            window.add_event_listener_with_callback(
                "unhandledrejection",
                on_rejection.as_ref().unchecked_ref(),
            )
        });
    if let Err(e) = installed {
        log::warn!("Global error logging unavailable: {:?}", e);
    }
    on_error.forget();
    on_rejection.forget();
}
