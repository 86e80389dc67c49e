//! Host page controller.
//!
//! Owns the startup handshake (load the compute backend once, fall back
//! on failure) and maps every trigger to one operation. Dependencies are
//! injected so the whole page can be driven from tests.

use std::rc::Rc;

use demo_core::backend::BackendCell;
use demo_core::display::MessageDisplay;
use demo_core::ports::{BackendLoader, FormInputs, ProxyPort, WindowPort};
use demo_types::{
    Result,
    config::DemoConfig,
    event::{BackendKind, InitState},
    message::DisplayMessage,
    page::{Indicator, InputField, Slot, Trigger},
};

use crate::input::{name_or_default, parse_int_lenient};
use crate::panels::{compute, proxy};

pub const READY_MESSAGE: &str = "Ready! WebAssembly module loaded successfully.";
pub const FALLBACK_MESSAGE: &str = "Running in fallback mode - WASM module not available";

pub struct HostController {
    config: DemoConfig,
    backend: Rc<BackendCell>,
    display: MessageDisplay,
    proxy: Rc<dyn ProxyPort>,
    window: Rc<dyn WindowPort>,
}

impl HostController {
    pub fn new(
        config: DemoConfig,
        backend: Rc<BackendCell>,
        display: MessageDisplay,
        proxy: Rc<dyn ProxyPort>,
        window: Rc<dyn WindowPort>,
    ) -> Self {
        Self {
            config,
            backend,
            display,
            proxy,
            window,
        }
    }

    pub fn state(&self) -> InitState {
        self.backend.state()
    }

    pub fn config(&self) -> &DemoConfig {
        &self.config
    }

    /// Select the backend and announce the outcome.
    ///
    /// A load failure is reported as a warning; the page stays fully usable
    /// on the fallback backend either way.
    pub async fn start(&self, loader: &dyn BackendLoader) -> Result<BackendKind> {
        self.display.set_visible(Indicator::Loading, true);
        let result = self.backend.initialize(loader).await;
        self.display.set_visible(Indicator::Loading, false);

        let kind = result?.kind();
        match kind {
            BackendKind::Real => {
                self.display.show(&DisplayMessage::success(Slot::Hello, READY_MESSAGE));
            }
            BackendKind::Fallback => {
                self.display.set_visible(Indicator::ErrorBanner, true);
                self.display.show(&DisplayMessage::warning(Slot::Hello, FALLBACK_MESSAGE));
            }
        }
        log::info!("Host page ready ({} backend)", kind.label());
        Ok(kind)
    }

    /// Run the operation behind `trigger`, reading whatever inputs it needs.
    pub async fn dispatch(&self, trigger: Trigger, inputs: &dyn FormInputs) -> DisplayMessage {
        match trigger {
            Trigger::Hello => self.hello(),
            Trigger::Greet => self.greet(&inputs.value(InputField::Name)),
            Trigger::Add => self.add(
                &inputs.value(InputField::FirstOperand),
                &inputs.value(InputField::SecondOperand),
            ),
            Trigger::Timestamp => self.timestamp(),
            Trigger::LoadHomepage => self.load_homepage().await,
            Trigger::LoadNews => self.load_news().await,
            Trigger::OpenHomepageTab => self.open_homepage_tab(),
            Trigger::OpenNewsTab => self.open_news_tab(),
        }
    }

    pub fn hello(&self) -> DisplayMessage {
        compute::hello(self.backend.get(), &self.display)
    }

    pub fn greet(&self, raw_name: &str) -> DisplayMessage {
        let name = name_or_default(raw_name, &self.config.default_name);
        compute::greet(self.backend.get(), &self.display, name)
    }

    pub fn add(&self, raw_a: &str, raw_b: &str) -> DisplayMessage {
        let a = parse_int_lenient(raw_a);
        let b = parse_int_lenient(raw_b);
        compute::add(self.backend.get(), &self.display, a, b)
    }

    pub fn timestamp(&self) -> DisplayMessage {
        compute::timestamp(self.backend.get(), &self.display)
    }

    pub async fn load_homepage(&self) -> DisplayMessage {
        proxy::load_homepage(self.proxy.as_ref(), &self.display).await
    }

    pub async fn load_news(&self) -> DisplayMessage {
        proxy::load_news(self.proxy.as_ref(), &self.display).await
    }

    pub fn open_homepage_tab(&self) -> DisplayMessage {
        proxy::open_tab(
            self.window.as_ref(),
            &self.display,
            &self.config.homepage_tab_url,
            "Yahoo homepage",
        )
    }

    pub fn open_news_tab(&self) -> DisplayMessage {
        proxy::open_tab(
            self.window.as_ref(),
            &self.display,
            &self.config.news_tab_url,
            "Yahoo News",
        )
    }
}
