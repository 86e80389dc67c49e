//! WASM-target tests for demo-platform (Node.js runtime).
//!
//! Covers the adapters that do not need a DOM under wasm32-unknown-unknown
//! via `wasm-pack test --node`. The DOM surface needs a browser.

use wasm_bindgen_test::*;

use demo_core::ports::{BackendLoader, ComputeBackend, Scheduler};
use demo_platform::module::{JsModuleBackend, JsModuleLoader};
use demo_platform::timer::TimeoutScheduler;
use demo_platform::describe_js_error;
use demo_types::DemoError;

use js_sys::{Function, Object, Reflect};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsValue;

fn fake_module() -> JsValue {
    let module = Object::new();
    let exports = [
        ("hello_world", Function::new_no_args("return 'Hello, World from Rust and WebAssembly!';")),
        ("greet", Function::new_with_args("name", "return 'Hello, ' + name + '!';")),
        ("add", Function::new_with_args("a, b", "return a + b;")),
        ("get_timestamp", Function::new_no_args("return 1000;")),
    ];
    for (name, func) in exports {
        Reflect::set(&module, &JsValue::from_str(name), &func).unwrap();
    }
    module.into()
}

// ─── JsModuleBackend Tests ───────────────────────────────

#[wasm_bindgen_test]
fn module_backend_calls_exports() {
    let backend = JsModuleBackend::new(fake_module()).unwrap();
    assert_eq!(backend.hello_world().unwrap(), "Hello, World from Rust and WebAssembly!");
    assert_eq!(backend.greet("Ada").unwrap(), "Hello, Ada!");
    assert_eq!(backend.add(2, 40).unwrap(), 42);
    assert_eq!(backend.get_timestamp().unwrap(), 1000.0);
}

#[wasm_bindgen_test]
fn module_backend_rejects_missing_exports() {
    let module = Object::new();
    let result = JsModuleBackend::new(module.into());
    assert!(matches!(result, Err(DemoError::ModuleLoad(_))));
}

#[wasm_bindgen_test]
fn module_backend_surfaces_throw_as_error() {
    let module = fake_module();
    let thrower = Function::new_with_args("name", "throw new Error('boom ' + name);");
    Reflect::set(&module, &JsValue::from_str("greet"), &thrower).unwrap();

    let backend = JsModuleBackend::new(module).unwrap();
    assert_eq!(
        backend.greet("X").unwrap_err(),
        DemoError::Backend("boom X".to_string())
    );
    // Other exports keep working
    assert_eq!(backend.add(1, 1).unwrap(), 2);
}

#[wasm_bindgen_test]
fn module_backend_wraps_out_of_range_sums() {
    let module = fake_module();
    let wide = Function::new_with_args("a, b", "return 3e9;");
    Reflect::set(&module, &JsValue::from_str("add"), &wide).unwrap();

    let backend = JsModuleBackend::new(module).unwrap();
    assert_eq!(backend.add(1, 2).unwrap(), -1_294_967_296);
}

#[wasm_bindgen_test]
fn module_backend_checks_return_types() {
    let module = fake_module();
    let wrong = Function::new_no_args("return 42;");
    Reflect::set(&module, &JsValue::from_str("hello_world"), &wrong).unwrap();

    let backend = JsModuleBackend::new(module).unwrap();
    assert!(matches!(backend.hello_world(), Err(DemoError::Backend(_))));
}

// ─── JsModuleLoader Tests ────────────────────────────────

#[wasm_bindgen_test]
async fn module_loader_missing_module() {
    let loader = JsModuleLoader::new("./definitely-not-here.js");
    assert_eq!(loader.source(), "./definitely-not-here.js");
    match loader.load().await {
        Err(DemoError::ModuleLoad(msg)) => assert!(msg.contains("definitely-not-here")),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("missing module should not load"),
    }
}

// ─── TimeoutScheduler Tests ──────────────────────────────

#[wasm_bindgen_test]
async fn timeout_scheduler_runs_task() {
    let fired = Rc::new(Cell::new(false));
    let flag = fired.clone();
    TimeoutScheduler.schedule(5, Box::new(move || flag.set(true)));
    assert!(!fired.get());

    gloo_timers::future::TimeoutFuture::new(50).await;
    assert!(fired.get());
}

// ─── Error Conversion Tests ──────────────────────────────

#[wasm_bindgen_test]
fn describe_js_errors() {
    let err: JsValue = js_sys::Error::new("bad thing").into();
    assert_eq!(describe_js_error(&err), "bad thing");
    assert_eq!(describe_js_error(&JsValue::from_str("plain")), "plain");
}
