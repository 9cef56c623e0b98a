//! Display customization menu: theme swatches, light/dark mode and font size.

#[cfg(test)]
#[path = "customize_menu_test.rs"]
mod customize_menu_test;

use leptos::prelude::*;

use crate::config::ids;
use crate::state::prefs::{FontSize, ModeToken, THEME_PREFIX, ThemeToken};

/// Modes offered by the menu, as `(token, label)`.
pub const MODES: [(&str, &str); 2] = [("mode-light", "Light"), ("mode-dark", "Dark")];

pub const FONT_MIN: u16 = 80;
pub const FONT_MAX: u16 = 130;
pub const FONT_STEP: u16 = 10;

/// One theme swatch: the normalized token it applies and the class that
/// paints it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Swatch {
    pub token: String,
    pub class: String,
    pub label: String,
}

/// Swatches for the configured theme names. Duplicates after normalization
/// are dropped.
pub fn swatches(themes: &[String]) -> Vec<Swatch> {
    let mut out: Vec<Swatch> = Vec::with_capacity(themes.len());
    for raw in themes {
        let token = ThemeToken::parse(raw).as_str().to_owned();
        if out.iter().any(|s| s.token == token) {
            continue;
        }
        let label = token.strip_prefix(THEME_PREFIX).unwrap_or(&token).to_owned();
        out.push(Swatch { class: format!("theme-swatch swatch-{label}"), label, token });
    }
    out
}

#[component]
pub fn CustomizeMenu(#[prop(into)] themes: Vec<String>) -> impl IntoView {
    let default_font = FontSize::default();

    view! {
        <div class="customize-menu dropdown-menu dropdown-menu-end p-3">
            <h6 class="dropdown-header px-0">"Theme"</h6>
            <div class="d-flex gap-2 mb-3">
                {swatches(&themes)
                    .into_iter()
                    .map(|swatch| {
                        view! {
                            <button
                                type="button"
                                class=swatch.class
                                title=swatch.label
                                data-set-theme=swatch.token
                            ></button>
                        }
                    })
                    .collect_view()}
            </div>
            <h6 class="dropdown-header px-0">"Mode"</h6>
            <div class="btn-group w-100 mb-3" role="group">
                {MODES
                    .iter()
                    .map(|(token, label)| {
                        let mode = ModeToken::parse(token);
                        let class = if mode == ModeToken::default() {
                            format!("btn btn-outline-secondary {} {}", ids::MODE_BUTTON_CLASS, ids::ACTIVE_CLASS)
                        } else {
                            format!("btn btn-outline-secondary {}", ids::MODE_BUTTON_CLASS)
                        };
                        view! {
                            <button type="button" id=mode.button_id() class=class data-set-mode=*token>
                                {*label}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <h6 class="dropdown-header px-0">
                "Font size " <span id=ids::FONT_SIZE_VALUE>{default_font.css()}</span>
            </h6>
            <input
                type="range"
                class="form-range"
                id=ids::FONT_SIZE_RANGE
                min=FONT_MIN.to_string()
                max=FONT_MAX.to_string()
                step=FONT_STEP.to_string()
                value=default_font.to_string()
            />
        </div>
    }
}
