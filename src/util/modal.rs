//! Bridge to the page's modal widget (`window.bootstrap.Modal`).
//!
//! The widget library is optional. When it is missing, `attach` returns
//! `None` and callers fall back to submitting or alerting without a modal.

use js_sys::{Array, Function, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::Element;

use crate::util::dom::cast;

#[derive(Clone, Debug)]
pub struct BootstrapModal {
    instance: JsValue,
}

impl BootstrapModal {
    /// Construct `new bootstrap.Modal(element)`.
    pub fn attach(element: &Element) -> Option<Self> {
        match construct(element) {
            Ok(instance) => instance.map(|instance| Self { instance }),
            Err(err) => {
                log::warn!("modal construction failed: {err:?}");
                None
            }
        }
    }

    pub fn show(&self) {
        let shown = Reflect::get(&self.instance, &JsValue::from_str("show"))
            .and_then(|show| show.dyn_into::<Function>())
            .and_then(|show| show.call0(&self.instance));
        if let Err(err) = shown {
            log::warn!("modal show failed: {err:?}");
        }
    }
}

/// `Ok(None)` when the page has no modal library.
fn construct(element: &Element) -> Result<Option<JsValue>, JsValue> {
    let Some(window) = web_sys::window() else {
        return Ok(None);
    };
    let bootstrap = Reflect::get(&window, &JsValue::from_str("bootstrap"))?;
    if bootstrap.is_undefined() || bootstrap.is_null() {
        return Ok(None);
    }
    let Some(ctor) = cast::<Function>(Reflect::get(&bootstrap, &JsValue::from_str("Modal"))?) else {
        return Ok(None);
    };
    Reflect::construct(&ctor, &Array::of1(element)).map(Some)
}
