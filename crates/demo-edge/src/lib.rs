//! Edge worker entry point.
//!
//! The worker runtime calls `fetch` for every request. One `EdgeHandler`
//! lives per isolate and initializes the compute module on first use.

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use web_sys::{Headers, Request, Response, ResponseInit};

use demo_compute::LinkedModuleLoader;
use demo_core::edge::EdgeHandler;
use demo_types::{
    config::DemoConfig,
    event::{EdgeRequest, EdgeResponse},
};

thread_local! {
    static HANDLER: Rc<EdgeHandler> = Rc::new(EdgeHandler::new(
        Rc::new(LinkedModuleLoader),
        DemoConfig::default().edge_greet_name,
    ));
}

#[wasm_bindgen(start)]
pub fn start() {
    wasm_logger::init(wasm_logger::Config::default());
}

/// Handle one request from the worker runtime.
#[wasm_bindgen]
pub async fn fetch(request: Request) -> Result<Response, JsValue> {
    let req = EdgeRequest::new(request.method(), request_path(&request.url()));
    let handler = HANDLER.with(Rc::clone);
    let response = handler.handle(&req).await;
    to_web_response(&response)
}

/// Path component of an absolute request URL.
fn request_path(url: &str) -> String {
    web_sys::Url::new(url)
        .map(|u| u.pathname())
        .unwrap_or_else(|_| url.to_string())
}

fn to_web_response(response: &EdgeResponse) -> Result<Response, JsValue> {
    let headers = Headers::new()?;
    headers.set("content-type", &response.content_type)?;

    let init = ResponseInit::new();
    init.set_status(response.status);
    init.set_headers(&headers);

    Response::new_with_opt_str_and_init(Some(&response.body), &init)
}
