//! Inline script that collapses the sidebar before first paint.
//!
//! The wasm module loads after the document is parsed, which is too late to
//! avoid a visible expand-then-collapse. This script is placed as the first
//! child of the layout root and runs while the rest of the page is parsed.

#[cfg(test)]
#[path = "boot_script_test.rs"]
mod boot_script_test;

use leptos::prelude::*;

use crate::config::ids;
use crate::state::prefs::{SIDEBAR_KEY, SidebarState};

/// Source of the anti-flicker script.
///
/// Storage access is wrapped in `try` because `localStorage` throws in some
/// privacy modes.
pub fn sidebar_boot_script() -> String {
    format!(
        "(function(){{try{{if(localStorage.getItem('{key}')==='{collapsed}'){{\
var l=document.getElementById('{layout}');if(l){{l.classList.add('{class}');}}}}}}catch(e){{}}}})();",
        key = SIDEBAR_KEY,
        collapsed = SidebarState::Collapsed.as_str(),
        layout = ids::ADMIN_LAYOUT,
        class = ids::SIDEBAR_COLLAPSED_CLASS,
    )
}

#[component]
pub fn SidebarBootScript() -> impl IntoView {
    view! { <script inner_html=sidebar_boot_script()></script> }
}
