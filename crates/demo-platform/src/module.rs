//! Compute backend loaded from a JS module at runtime.
//!
//! The module is pulled in with a dynamic `import()`. A wasm-pack
//! `--target web` package exports its async instantiation function as
//! `default`; it is awaited before any export is called.

use std::rc::Rc;

use async_trait::async_trait;
use js_sys::{Function, Promise, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use demo_core::number::to_int32;
use demo_core::ports::{BackendLoader, ComputeBackend};
use demo_types::{DemoError, Result};

use crate::describe_js_error;

/// Exports every compute module must provide.
pub const REQUIRED_EXPORTS: [&str; 4] = ["hello_world", "greet", "add", "get_timestamp"];

#[wasm_bindgen(inline_js = "export function import_module(url) { return import(url); }")]
extern "C" {
    #[wasm_bindgen(catch)]
    fn import_module(url: &str) -> std::result::Result<Promise, JsValue>;
}

pub struct JsModuleLoader {
    path: String,
}

impl JsModuleLoader {
    pub fn new(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    /// Resolve the path against the page, not against the JS glue that
    /// performs the import.
    fn resolved_url(&self) -> String {
        web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.base_uri().ok().flatten())
            .and_then(|base| web_sys::Url::new_with_base(&self.path, &base).ok())
            .map(|url| url.href())
            .unwrap_or_else(|| self.path.clone())
    }
}

#[async_trait(?Send)]
impl BackendLoader for JsModuleLoader {
    async fn load(&self) -> Result<Rc<dyn ComputeBackend>> {
        let url = self.resolved_url();
        let load_err = |e: JsValue| DemoError::ModuleLoad(format!("{}: {}", url, describe_js_error(&e)));

        let module = JsFuture::from(import_module(&url).map_err(load_err)?)
            .await
            .map_err(load_err)?;

        let init = Reflect::get(&module, &JsValue::from_str("default"))
            .ok()
            .and_then(|v| v.dyn_into::<Function>().ok());
        if let Some(init) = init {
            let pending = init.call0(&JsValue::UNDEFINED).map_err(load_err)?;
            JsFuture::from(Promise::resolve(&pending))
                .await
                .map_err(load_err)?;
        }

        let backend = JsModuleBackend::new(module)?;
        log::info!("Compute module {} instantiated", url);
        Ok(Rc::new(backend))
    }

    fn source(&self) -> &str {
        &self.path
    }
}

/// Calls into the exports of an imported module object.
pub struct JsModuleBackend {
    module: JsValue,
}

impl JsModuleBackend {
    /// Wrap a module namespace; fails if any required export is missing.
    pub fn new(module: JsValue) -> Result<Self> {
        let backend = Self { module };
        for name in REQUIRED_EXPORTS {
            backend.export(name).map_err(|e| DemoError::ModuleLoad(e.to_string()))?;
        }
        Ok(backend)
    }

    fn export(&self, name: &str) -> Result<Function> {
        Reflect::get(&self.module, &JsValue::from_str(name))
            .map_err(|e| DemoError::JsInterop(describe_js_error(&e)))?
            .dyn_into::<Function>()
            .map_err(|_| DemoError::Backend(format!("module has no function `{}`", name)))
    }

    fn call(&self, name: &str, args: &[JsValue]) -> Result<JsValue> {
        let func = self.export(name)?;
        let args: js_sys::Array = args.iter().collect();
        func.apply(&JsValue::UNDEFINED, &args)
            .map_err(|e| DemoError::Backend(describe_js_error(&e)))
    }
}

fn expect_string(name: &str, value: JsValue) -> Result<String> {
    value
        .as_string()
        .ok_or_else(|| DemoError::Backend(format!("`{}` did not return a string", name)))
}

fn expect_number(name: &str, value: JsValue) -> Result<f64> {
    value
        .as_f64()
        .ok_or_else(|| DemoError::Backend(format!("`{}` did not return a number", name)))
}

impl ComputeBackend for JsModuleBackend {
    fn hello_world(&self) -> Result<String> {
        expect_string("hello_world", self.call("hello_world", &[])?)
    }

    fn greet(&self, name: &str) -> Result<String> {
        expect_string("greet", self.call("greet", &[JsValue::from_str(name)])?)
    }

    fn add(&self, a: i32, b: i32) -> Result<i32> {
        let sum = expect_number("add", self.call("add", &[JsValue::from(a), JsValue::from(b)])?)?;
        Ok(to_int32(sum))
    }

    fn get_timestamp(&self) -> Result<f64> {
        expect_number("get_timestamp", self.call("get_timestamp", &[])?)
    }
}
