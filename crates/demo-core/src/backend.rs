//! Backend selection for the host page.
//!
//! `BackendCell` is a single-assignment cell: it moves
//! `Uninitialized -> Loading -> Ready(Real | Fallback)` exactly once and
//! never goes back to `Loading`. A load failure is not an error for the
//! page; it selects `FallbackBackend` instead.

use std::cell::{Cell, OnceCell};
use std::rc::Rc;

use demo_types::{
    DemoError, Result,
    event::{BackendKind, InitState},
};
use crate::ports::{BackendLoader, ComputeBackend};

/// Appended to every fallback greeting so the degraded mode is visible.
pub const FALLBACK_MARKER: &str = "(fallback mode)";

/// Local stand-ins for the compute module's functions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackBackend;

impl ComputeBackend for FallbackBackend {
    fn hello_world(&self) -> Result<String> {
        Ok(format!("Hello, World from the fallback backend! {}", FALLBACK_MARKER))
    }

    fn greet(&self, name: &str) -> Result<String> {
        Ok(format!("Hello, {}! This is a fallback message {}.", name, FALLBACK_MARKER))
    }

    fn add(&self, a: i32, b: i32) -> Result<i32> {
        Ok(a.wrapping_add(b))
    }

    fn get_timestamp(&self) -> Result<f64> {
        Ok(chrono::Utc::now().timestamp_millis() as f64)
    }
}

/// The backend that ended up active.
#[derive(Clone)]
pub enum BackendHandle {
    Real(Rc<dyn ComputeBackend>),
    Fallback(FallbackBackend),
}

impl BackendHandle {
    pub fn kind(&self) -> BackendKind {
        match self {
            BackendHandle::Real(_) => BackendKind::Real,
            BackendHandle::Fallback(_) => BackendKind::Fallback,
        }
    }

    fn inner(&self) -> &dyn ComputeBackend {
        match self {
            BackendHandle::Real(backend) => backend.as_ref(),
            BackendHandle::Fallback(fallback) => fallback,
        }
    }
}

impl std::fmt::Debug for BackendHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BackendHandle").field(&self.kind()).finish()
    }
}

impl ComputeBackend for BackendHandle {
    fn hello_world(&self) -> Result<String> {
        self.inner().hello_world()
    }

    fn greet(&self, name: &str) -> Result<String> {
        self.inner().greet(name)
    }

    fn add(&self, a: i32, b: i32) -> Result<i32> {
        self.inner().add(a, b)
    }

    fn get_timestamp(&self) -> Result<f64> {
        self.inner().get_timestamp()
    }
}

/// Holds the page's backend once it has been selected.
pub struct BackendCell {
    state: Cell<InitState>,
    handle: OnceCell<BackendHandle>,
}

impl BackendCell {
    pub fn new() -> Self {
        Self {
            state: Cell::new(InitState::Uninitialized),
            handle: OnceCell::new(),
        }
    }

    pub fn state(&self) -> InitState {
        self.state.get()
    }

    /// The selected backend, once initialization has finished.
    pub fn get(&self) -> Option<BackendHandle> {
        self.handle.get().cloned()
    }

    /// Load the backend through `loader`, falling back on failure.
    ///
    /// Calling this again after it finished returns the existing handle
    /// without touching the loader. Calling it while a load is still in
    /// flight is an error.
    pub async fn initialize(&self, loader: &dyn BackendLoader) -> Result<BackendHandle> {
        match self.state.get() {
            InitState::Ready(_) => {
                return self
                    .get()
                    .ok_or_else(|| DemoError::Other("backend cell is ready but empty".to_string()));
            }
            InitState::Loading => {
                return Err(DemoError::Other(
                    "backend initialization already in progress".to_string(),
                ));
            }
            InitState::Uninitialized => {}
        }

        self.state.set(InitState::Loading);
        log::info!("Loading compute backend from {}", loader.source());

        let handle = match loader.load().await {
            Ok(backend) => {
                log::info!("Compute backend loaded");
                BackendHandle::Real(backend)
            }
            Err(e) => {
                log::error!("Failed to load compute backend: {}", e);
                log::warn!("Switching to fallback backend");
                BackendHandle::Fallback(FallbackBackend)
            }
        };

        let kind = handle.kind();
        let handle = self.handle.get_or_init(|| handle).clone();
        self.state.set(InitState::Ready(kind));
        Ok(handle)
    }
}

impl Default for BackendCell {
    fn default() -> Self {
        Self::new()
    }
}
