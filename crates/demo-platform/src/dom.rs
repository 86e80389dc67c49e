//! DOM adapter: output slots, indicators, form inputs and trigger buttons,
//! all looked up by element id.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlInputElement};

use demo_core::ports::{DisplaySurface, FormInputs};
use demo_types::{
    DemoError, Result,
    page::{Indicator, InputField, Slot, Trigger},
};

use crate::describe_js_error;

const HIDDEN_CLASS: &str = "hidden";

pub struct DomSurface {
    document: Document,
}

impl DomSurface {
    pub fn new() -> Self {
        Self {
            document: gloo_utils::document(),
        }
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            log::warn!("Element #{} not found", id);
        }
        element
    }

    /// Text content of an element, if present (used for inline config).
    pub fn text_of(&self, id: &str) -> Option<String> {
        self.document
            .get_element_by_id(id)
            .and_then(|el| el.text_content())
    }

    /// Attach `handler` to the trigger's click event and enable the button.
    pub fn bind_trigger(&self, trigger: Trigger, handler: impl FnMut() + 'static) -> Result<()> {
        let element = self
            .element(trigger.id())
            .ok_or_else(|| DemoError::Dom(format!("No trigger element #{}", trigger.id())))?;

        let closure = Closure::<dyn FnMut()>::new(handler);
        element
            .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
            .map_err(|e| DemoError::Dom(describe_js_error(&e)))?;
        // The listener lives as long as the page
        closure.forget();

        element
            .remove_attribute("disabled")
            .map_err(|e| DemoError::Dom(describe_js_error(&e)))?;
        Ok(())
    }
}

impl Default for DomSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for DomSurface {
    fn content(&self, slot: Slot) -> String {
        self.element(slot.id())
            .map(|el| el.inner_html())
            .unwrap_or_default()
    }

    fn set_content(&self, slot: Slot, html: &str) {
        if let Some(el) = self.element(slot.id()) {
            el.set_inner_html(html);
        }
    }

    fn set_class(&self, slot: Slot, class: &str) {
        if let Some(el) = self.element(slot.id()) {
            el.set_class_name(class);
        }
    }

    fn set_visible(&self, indicator: Indicator, visible: bool) {
        if let Some(el) = self.element(indicator.id()) {
            if let Err(e) = el.class_list().toggle_with_force(HIDDEN_CLASS, !visible) {
                log::warn!("Could not toggle #{}: {}", indicator.id(), describe_js_error(&e));
            }
        }
    }
}

impl FormInputs for DomSurface {
    fn value(&self, field: InputField) -> String {
        self.element(field.id())
            .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
            .map(|input| input.value())
            .unwrap_or_default()
    }
}
