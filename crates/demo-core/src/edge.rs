//! Edge request handler.
//!
//! Stateless router over one lazily initialized compute backend.
//! Initialization is single-flight: concurrent requests await the same
//! in-flight load. A successful load is kept for the lifetime of the
//! handler; a failed load fails only the requests that awaited it and the
//! next request tries again.

use std::cell::RefCell;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture, Shared};
use demo_types::{
    Result,
    event::{EdgeRequest, EdgeResponse},
};
use crate::ports::{BackendLoader, ComputeBackend};

/// The one route served by the handler.
pub const HELLO_ROUTE: &str = "/hello";

type InitFuture = Shared<LocalBoxFuture<'static, Result<Rc<dyn ComputeBackend>>>>;

pub struct EdgeHandler {
    loader: Rc<dyn BackendLoader>,
    greet_name: String,
    backend: RefCell<Option<Rc<dyn ComputeBackend>>>,
    in_flight: RefCell<Option<InitFuture>>,
}

impl EdgeHandler {
    pub fn new(loader: Rc<dyn BackendLoader>, greet_name: impl Into<String>) -> Self {
        Self {
            loader,
            greet_name: greet_name.into(),
            backend: RefCell::new(None),
            in_flight: RefCell::new(None),
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.backend.borrow().is_some()
    }

    /// Handle one request. Never fails: every error becomes a response.
    pub async fn handle(&self, req: &EdgeRequest) -> EdgeResponse {
        let response = match self.backend().await {
            Ok(backend) => self.route(req, backend.as_ref()),
            Err(e) => {
                log::error!("[{}] backend initialization failed: {}", req.request_id, e);
                EdgeResponse::server_error(format!("Backend initialization failed: {}", e))
            }
        };
        log::info!(
            "[{}] {} {} -> {}",
            req.request_id,
            req.method,
            req.path,
            response.status
        );
        response
    }

    fn route(&self, req: &EdgeRequest, backend: &dyn ComputeBackend) -> EdgeResponse {
        match route_path(&req.path) {
            HELLO_ROUTE => match backend.greet(&self.greet_name) {
                Ok(message) => EdgeResponse::ok(message),
                Err(e) => {
                    log::error!("[{}] greet failed: {}", req.request_id, e);
                    EdgeResponse::server_error(e.to_string())
                }
            },
            _ => EdgeResponse::not_found(),
        }
    }

    /// The cached backend, or the result of the (possibly shared) load.
    async fn backend(&self) -> Result<Rc<dyn ComputeBackend>> {
        if let Some(backend) = self.backend.borrow().as_ref() {
            return Ok(backend.clone());
        }

        let init = {
            let mut slot = self.in_flight.borrow_mut();
            match slot.as_ref() {
                Some(init) => init.clone(),
                None => {
                    let loader = self.loader.clone();
                    log::info!("Initializing compute backend from {}", loader.source());
                    let init = async move { loader.load().await }.boxed_local().shared();
                    *slot = Some(init.clone());
                    init
                }
            }
        };

        let result = init.clone().await;

        {
            let mut slot = self.in_flight.borrow_mut();
            if slot.as_ref().is_some_and(|current| current.ptr_eq(&init)) {
                *slot = None;
            }
        }

        let backend = result?;
        *self.backend.borrow_mut() = Some(backend.clone());
        Ok(backend)
    }
}

/// Path without query string or fragment.
fn route_path(path: &str) -> &str {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    &path[..end]
}
