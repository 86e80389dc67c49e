//! Compute module: the functions the host page and the edge worker call.
//!
//! Built with
//! `wasm-pack build crates/demo-compute --target web --out-dir pkg -- --features standalone`
//! the free functions below become the module's JS exports and `start`
//! runs on instantiation. Linked as a Rust dependency, `ComputeModule`
//! serves the same functions through the `ComputeBackend` port.

use std::rc::Rc;

use async_trait::async_trait;
use wasm_bindgen::prelude::*;

use demo_core::ports::{BackendLoader, ComputeBackend};
use demo_types::Result;

#[cfg(test)]
mod tests;

/// Installs the console logger for this wasm instance.
#[cfg_attr(feature = "standalone", wasm_bindgen(start))]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    log::info!("Hello from Rust and WebAssembly!");
}

#[wasm_bindgen]
pub fn greet(name: &str) -> String {
    let greeting = format!("Hello, {}! This message is from Rust and WebAssembly.", name);
    log::debug!("Greeting generated: {}", greeting);
    greeting
}

#[wasm_bindgen]
pub fn hello_world() -> String {
    log::debug!("Hello world function called");
    "Hello, World from Rust and WebAssembly!".to_string()
}

/// Wraps on overflow, matching JS `ToInt32` on the way back out.
#[wasm_bindgen]
pub fn add(a: i32, b: i32) -> i32 {
    let result = a.wrapping_add(b);
    log::debug!("Adding {} + {} = {}", a, b, result);
    result
}

/// Milliseconds since the Unix epoch.
#[wasm_bindgen]
pub fn get_timestamp() -> f64 {
    chrono::Utc::now().timestamp_millis() as f64
}

/// The compute module linked in-process.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComputeModule;

impl ComputeBackend for ComputeModule {
    fn hello_world(&self) -> Result<String> {
        Ok(hello_world())
    }

    fn greet(&self, name: &str) -> Result<String> {
        Ok(greet(name))
    }

    fn add(&self, a: i32, b: i32) -> Result<i32> {
        Ok(add(a, b))
    }

    fn get_timestamp(&self) -> Result<f64> {
        Ok(get_timestamp())
    }
}

/// Loader for a statically linked `ComputeModule`. Loading cannot fail.
pub struct LinkedModuleLoader;

#[async_trait(?Send)]
impl BackendLoader for LinkedModuleLoader {
    async fn load(&self) -> Result<Rc<dyn ComputeBackend>> {
        Ok(Rc::new(ComputeModule))
    }

    fn source(&self) -> &str {
        "linked compute module"
    }
}
