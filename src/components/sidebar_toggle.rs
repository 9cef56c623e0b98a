//! Button that collapses and expands the sidebar.

use leptos::prelude::*;

use crate::config::ids;
use crate::state::prefs::SidebarState;

/// Rendered in the expanded state. Boot rewrites the glyph when the restored
/// state is collapsed.
#[component]
pub fn SidebarToggle() -> impl IntoView {
    view! {
        <button type="button" class="btn btn-sm sidebar-toggle" data-toggle-sidebar="" title="Toggle sidebar">
            <span id=ids::TOGGLE_ICON class="material-icons">
                {SidebarState::Expanded.glyph()}
            </span>
        </button>
    }
}
