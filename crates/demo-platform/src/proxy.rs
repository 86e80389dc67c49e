//! Proxy service client.
//! Uses browser `fetch()` via gloo-net for WASM compatibility.

use async_trait::async_trait;
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use demo_core::ports::ProxyPort;
use demo_types::{
    DemoError, Result,
    config::DemoConfig,
    proxy::{NewsFeed, ProxyPage},
};

pub struct HttpProxyClient {
    homepage_url: String,
    news_url: String,
}

impl HttpProxyClient {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            homepage_url: config.homepage_endpoint(),
            news_url: config.news_endpoint(),
        }
    }

    /// GET `url` and decode its JSON body.
    ///
    /// The proxy reports its own failures as JSON with a 5xx status, so the
    /// body is decoded whatever the status is.
    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| DemoError::Network(e.to_string()))?;

        if !response.ok() {
            log::warn!("{} answered HTTP {}", url, response.status());
        }

        response
            .json::<T>()
            .await
            .map_err(|e| DemoError::Serialization(e.to_string()))
    }
}

#[async_trait(?Send)]
impl ProxyPort for HttpProxyClient {
    async fn fetch_homepage(&self) -> Result<ProxyPage> {
        self.get_json(&self.homepage_url).await
    }

    async fn fetch_news(&self) -> Result<NewsFeed> {
        self.get_json(&self.news_url).await
    }
}
