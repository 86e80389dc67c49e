use serde::{Deserialize, Serialize};

use crate::Result;

/// Top-level demo configuration. Every field has a default so a partial
/// JSON override only needs the keys it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Path of the compute module, relative to the host page
    pub module_path: String,
    /// Prefix prepended to the proxy endpoints ("" means same origin)
    pub proxy_base: String,
    /// Delay before a non-error message is cleared
    pub clear_delay_ms: u32,
    /// Name used when the greet input is left empty
    pub default_name: String,
    /// Name greeted by the edge `/hello` route
    pub edge_greet_name: String,
    pub homepage_tab_url: String,
    pub news_tab_url: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            module_path: DEFAULT_MODULE_PATH.to_string(),
            proxy_base: String::new(),
            clear_delay_ms: DEFAULT_CLEAR_DELAY_MS,
            default_name: "World".to_string(),
            edge_greet_name: "Cloudflare".to_string(),
            homepage_tab_url: "https://www.yahoo.co.jp/".to_string(),
            news_tab_url: "https://news.yahoo.com".to_string(),
        }
    }
}

impl DemoConfig {
    /// Parse a JSON override on top of the defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn homepage_endpoint(&self) -> String {
        format!("{}/api/proxy/yahoo", self.proxy_base.trim_end_matches('/'))
    }

    pub fn news_endpoint(&self) -> String {
        format!("{}/api/proxy/yahoo/news", self.proxy_base.trim_end_matches('/'))
    }
}

pub const DEFAULT_MODULE_PATH: &str = "./pkg/demo_compute.js";
pub const DEFAULT_CLEAR_DELAY_MS: u32 = 10_000;
