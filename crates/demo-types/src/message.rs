use serde::{Deserialize, Serialize};

use crate::page::Slot;

/// Severity of a displayed message. Drives the CSS class and auto-clear.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
}

impl MessageKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageKind::Info => "info",
            MessageKind::Success => "success",
            MessageKind::Warning => "warning",
            MessageKind::Error => "error",
        }
    }

    /// Errors stay on screen until something else overwrites them.
    pub fn auto_clears(&self) -> bool {
        !matches!(self, MessageKind::Error)
    }
}

/// A message bound for a slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayMessage {
    pub text: String,
    pub kind: MessageKind,
    pub slot: Slot,
}

impl DisplayMessage {
    pub fn new(slot: Slot, kind: MessageKind, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind,
            slot,
        }
    }

    pub fn info(slot: Slot, text: impl Into<String>) -> Self {
        Self::new(slot, MessageKind::Info, text)
    }

    pub fn success(slot: Slot, text: impl Into<String>) -> Self {
        Self::new(slot, MessageKind::Success, text)
    }

    pub fn warning(slot: Slot, text: impl Into<String>) -> Self {
        Self::new(slot, MessageKind::Warning, text)
    }

    pub fn error(slot: Slot, text: impl Into<String>) -> Self {
        Self::new(slot, MessageKind::Error, text)
    }
}
