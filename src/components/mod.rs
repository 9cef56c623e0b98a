//! Chrome fragments the behavior layer binds to.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages are rendered by the backend. These components produce the shared
//! pieces of markup (boot script, modals, customize menu, sidebar toggle) with
//! the same id and class constants the browser bindings look up, so the two
//! sides cannot drift apart.

pub mod alert_modal;
pub mod boot_script;
pub mod customize_menu;
pub mod sidebar_toggle;
pub mod status_modal;

#[cfg(feature = "ssr")]
pub use render::{ChromeHtml, render_chrome};

#[cfg(feature = "ssr")]
mod render {
    use leptos::prelude::*;
    use leptos::tachys::view::RenderHtml;

    use super::alert_modal::AlertModal;
    use super::boot_script::SidebarBootScript;
    use super::customize_menu::CustomizeMenu;
    use super::sidebar_toggle::SidebarToggle;
    use super::status_modal::StatusModal;
    use crate::config::UiConfig;

    /// Rendered chrome, one string per fragment, ready for template slots.
    #[derive(Clone, Debug, Default, PartialEq, Eq)]
    pub struct ChromeHtml {
        pub boot_script: String,
        pub status_modal: String,
        pub alert_modal: String,
        pub customize_menu: String,
        pub sidebar_toggle: String,
        pub config_block: String,
    }

    /// Render every chrome fragment for `config`.
    pub fn render_chrome(config: &UiConfig, config_json: Option<&str>) -> ChromeHtml {
        let owner = Owner::new();
        owner.with(|| {
            let themes = config.themes.clone();
            ChromeHtml {
                boot_script: view! { <SidebarBootScript/> }.to_html(),
                status_modal: view! { <StatusModal/> }.to_html(),
                alert_modal: view! { <AlertModal/> }.to_html(),
                customize_menu: view! { <CustomizeMenu themes=themes/> }.to_html(),
                sidebar_toggle: view! { <SidebarToggle/> }.to_html(),
                config_block: config_json.map(super::config_block).unwrap_or_default(),
            }
        })
    }
}

/// Wrap raw config JSON in the `<script>` element boot reads it from.
///
/// `</` is escaped so the payload cannot close the element early.
pub fn config_block(json: &str) -> String {
    format!(
        r#"<script type="application/json" id="{}">{}</script>"#,
        crate::config::ids::CONFIG_BLOCK,
        json.replace("</", "<\\/")
    )
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod mod_test;
