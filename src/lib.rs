//! # admin-ui
//!
//! WASM behavior layer for the administrative console. Attaches to
//! server-rendered pages and handles preference persistence (theme, mode,
//! font size, sidebar), table row selection, and the loading/success modal
//! sequence that precedes native form submission.
//!
//! Pure models live in `state`, browser glue in `util`, and the markup the
//! glue binds to is rendered by `components`. `app` wires everything together
//! once per page load.

pub mod app;
pub mod components;
pub mod config;
pub mod error;
pub mod state;
pub mod util;

/// WASM entry point: boots once the document has been parsed.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    // Fails only when a logger is already installed.
    let _ = console_log::init_with_level(log::Level::Info);
    if let Err(err) = app::boot_when_ready() {
        log::warn!("admin-ui boot failed: {err}");
    }
}
