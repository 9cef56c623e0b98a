//! Browser adapters and small helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Everything that touches `window`, `document` or `localStorage` lives here,
//! behind traits the pure `state` models are written against. Modules that
//! only make sense with a DOM are compiled for the `hydrate` feature alone.

pub mod date;
#[cfg(feature = "hydrate")]
pub mod dom;
#[cfg(feature = "hydrate")]
pub mod modal;
pub mod preference_store;
#[cfg(feature = "hydrate")]
pub mod preview;
pub mod storage;
#[cfg(feature = "hydrate")]
pub mod timer;
