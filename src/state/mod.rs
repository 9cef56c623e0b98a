//! Pure client-side models.
//!
//! DESIGN
//! ======
//! Nothing in here touches the browser. Each model turns DOM-shaped input
//! (class strings, checkbox states, attribute values) into decisions or
//! patches, and the `util` adapters carry those to and from the document.

pub mod choreography;
pub mod password;
pub mod prefs;
pub mod screen;
pub mod selection;
