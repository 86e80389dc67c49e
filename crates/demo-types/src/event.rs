use serde::{Deserialize, Serialize};

/// Which backend ended up serving calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendKind {
    /// The compiled compute module
    Real,
    /// Local stand-ins used when the module failed to load
    Fallback,
}

impl BackendKind {
    pub fn label(&self) -> &str {
        match self {
            BackendKind::Real => "real",
            BackendKind::Fallback => "fallback",
        }
    }
}

/// Host page initialization state. There is no way back to `Loading`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InitState {
    Uninitialized,
    Loading,
    Ready(BackendKind),
}

impl InitState {
    pub fn is_ready(&self) -> bool {
        matches!(self, InitState::Ready(_))
    }
}

/// A request as seen by the edge handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRequest {
    pub method: String,
    pub path: String,
    pub request_id: String,
}

impl EdgeRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            request_id: uuid::Uuid::new_v4().to_string(),
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new("GET", path)
    }
}

/// Plain-text response produced by the edge handler.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeResponse {
    pub status: u16,
    pub body: String,
    pub content_type: String,
}

impl EdgeResponse {
    pub fn text(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
            content_type: "text/plain;charset=UTF-8".to_string(),
        }
    }

    pub fn ok(body: impl Into<String>) -> Self {
        Self::text(200, body)
    }

    pub fn not_found() -> Self {
        Self::text(404, "Not found")
    }

    pub fn server_error(body: impl Into<String>) -> Self {
        Self::text(500, body)
    }
}
