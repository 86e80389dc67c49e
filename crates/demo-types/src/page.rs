//! Vocabulary of the host page: the elements the controller reads from
//! and writes to, named by their DOM ids.

use serde::{Deserialize, Serialize};

/// Named areas of the page that receive content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Slot {
    Hello,
    Greet,
    Calc,
    Timestamp,
    /// Status line shared by the proxy operations
    Proxy,
    /// Content area below the proxy status line
    ProxyContent,
}

impl Slot {
    pub fn id(&self) -> &'static str {
        match self {
            Slot::Hello => "hello-output",
            Slot::Greet => "greet-output",
            Slot::Calc => "calc-output",
            Slot::Timestamp => "timestamp-output",
            Slot::Proxy => "yahoo-output",
            Slot::ProxyContent => "yahoo-content",
        }
    }

    pub fn all() -> &'static [Slot] {
        &[
            Slot::Hello,
            Slot::Greet,
            Slot::Calc,
            Slot::Timestamp,
            Slot::Proxy,
            Slot::ProxyContent,
        ]
    }
}

/// Page elements that are only ever shown or hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Indicator {
    Loading,
    ErrorBanner,
}

impl Indicator {
    pub fn id(&self) -> &'static str {
        match self {
            Indicator::Loading => "loading",
            Indicator::ErrorBanner => "error",
        }
    }
}

/// Buttons wired to controller operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Trigger {
    Hello,
    Greet,
    Add,
    Timestamp,
    LoadHomepage,
    LoadNews,
    OpenHomepageTab,
    OpenNewsTab,
}

impl Trigger {
    pub fn id(&self) -> &'static str {
        match self {
            Trigger::Hello => "hello-btn",
            Trigger::Greet => "greet-btn",
            Trigger::Add => "add-btn",
            Trigger::Timestamp => "timestamp-btn",
            Trigger::LoadHomepage => "load-yahoo-btn",
            Trigger::LoadNews => "load-news-btn",
            Trigger::OpenHomepageTab => "open-yahoo-tab-btn",
            Trigger::OpenNewsTab => "open-yahoo-news-tab-btn",
        }
    }

    pub fn all() -> &'static [Trigger] {
        &[
            Trigger::Hello,
            Trigger::Greet,
            Trigger::Add,
            Trigger::Timestamp,
            Trigger::LoadHomepage,
            Trigger::LoadNews,
            Trigger::OpenHomepageTab,
            Trigger::OpenNewsTab,
        ]
    }
}

/// Text inputs read when a trigger fires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InputField {
    Name,
    FirstOperand,
    SecondOperand,
}

impl InputField {
    pub fn id(&self) -> &'static str {
        match self {
            InputField::Name => "name-input",
            InputField::FirstOperand => "num1",
            InputField::SecondOperand => "num2",
        }
    }
}
