use thiserror::Error;

/// Cloneable so a failed initialization can be handed to every waiter
/// of a shared future.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DemoError {
    #[error("Module load error: {0}")]
    ModuleLoad(String),

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("JS interop error: {0}")]
    JsInterop(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("{0}")]
    Other(String),
}

impl From<serde_json::Error> for DemoError {
    fn from(e: serde_json::Error) -> Self {
        DemoError::Serialization(e.to_string())
    }
}
