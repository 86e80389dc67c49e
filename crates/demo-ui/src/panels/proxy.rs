//! Operations against the external proxy service and the browser window.
//!
//! All of them report through the shared proxy status slot and, where
//! there is something to show, the content area below it.

use demo_core::display::MessageDisplay;
use demo_core::ports::{ProxyPort, WindowPort};
use demo_types::{message::DisplayMessage, page::Slot};

use crate::render::render_news;

pub const POPUP_BLOCKED: &str = "Popup blocked - please allow popups for this site";

pub async fn load_homepage(proxy: &dyn ProxyPort, display: &MessageDisplay) -> DisplayMessage {
    display.show(&DisplayMessage::info(Slot::Proxy, "Loading Yahoo homepage..."));

    let message = match proxy.fetch_homepage().await {
        Ok(page) if page.success => {
            display.set_content(Slot::ProxyContent, page.content.as_deref().unwrap_or(""));
            DisplayMessage::success(Slot::Proxy, "Yahoo homepage loaded successfully")
        }
        Ok(page) => {
            // The proxy may still send a placeholder body alongside the error
            display.set_content(Slot::ProxyContent, page.content.as_deref().unwrap_or(""));
            let reason = page.error.as_deref().unwrap_or("unknown error");
            log::warn!("Proxy refused homepage: {}", reason);
            DisplayMessage::error(Slot::Proxy, format!("Error: {}", reason))
        }
        Err(e) => {
            log::error!("Homepage fetch failed: {}", e);
            display.set_content(Slot::ProxyContent, "");
            DisplayMessage::error(Slot::Proxy, format!("Failed to load Yahoo homepage: {}", e))
        }
    };

    display.show(&message);
    message
}

pub async fn load_news(proxy: &dyn ProxyPort, display: &MessageDisplay) -> DisplayMessage {
    display.show(&DisplayMessage::info(Slot::Proxy, "Loading Yahoo news..."));

    let message = match proxy.fetch_news().await {
        Ok(feed) if feed.success && !feed.articles.is_empty() => {
            display.set_content(Slot::ProxyContent, &render_news(&feed.articles));
            DisplayMessage::success(
                Slot::Proxy,
                format!("Loaded {} news articles", feed.articles.len()),
            )
        }
        Ok(feed) => {
            if let Some(reason) = feed.error.as_deref() {
                log::warn!("Proxy refused news: {}", reason);
            }
            display.set_content(Slot::ProxyContent, "");
            DisplayMessage::warning(Slot::Proxy, "No news articles found")
        }
        Err(e) => {
            log::error!("News fetch failed: {}", e);
            display.set_content(Slot::ProxyContent, "");
            DisplayMessage::error(Slot::Proxy, format!("Failed to load Yahoo news: {}", e))
        }
    };

    display.show(&message);
    message
}

/// Open `url` in a new tab. A blocked popup is a warning, not an error.
pub fn open_tab(
    window: &dyn WindowPort,
    display: &MessageDisplay,
    url: &str,
    label: &str,
) -> DisplayMessage {
    let message = match window.open_tab(url) {
        Ok(true) => DisplayMessage::success(Slot::Proxy, format!("{} opened in new tab", label)),
        Ok(false) => DisplayMessage::warning(Slot::Proxy, POPUP_BLOCKED),
        Err(e) => {
            log::error!("window.open({}) failed: {}", url, e);
            DisplayMessage::error(Slot::Proxy, format!("Failed to open {}: {}", label, e))
        }
    };
    display.show(&message);
    message
}
