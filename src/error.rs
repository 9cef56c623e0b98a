//! Internal error type.
//!
//! ERROR HANDLING
//! ==============
//! Nothing here reaches the user. A missing element is "feature not present"
//! and is skipped without an error; `UiError` only covers browser calls that
//! should have worked (listener registration, config parsing). Callers log it
//! and carry on with the rest of the boot sequence.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UiError {
    #[error("invalid ui config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("browser call failed: {0}")]
    Js(String),
    #[error("no browser document")]
    NoDocument,
}

#[cfg(feature = "hydrate")]
impl From<wasm_bindgen::JsValue> for UiError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
