//! Runtime configuration and the DOM contract.
//!
//! DESIGN
//! ======
//! Element ids and class names are compile-time constants shared by the
//! markup components and the browser bindings, so both sides always agree.
//! Tunables (choreography delays, user-facing messages, offered themes) are
//! read once at boot from an optional inline JSON block and fall back to
//! defaults field by field.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::error::UiError;

/// Element ids and class names the behavior layer depends on.
pub mod ids {
    pub const ADMIN_LAYOUT: &str = "adminLayout";
    pub const TOGGLE_ICON: &str = "toggleIcon";
    pub const FONT_SIZE_RANGE: &str = "fontSizeRange";
    pub const FONT_SIZE_VALUE: &str = "font-size-val";
    pub const CURRENT_DATE: &str = "current-date";
    pub const CONFIG_BLOCK: &str = "admin-ui-config";

    pub const STATUS_MODAL: &str = "statusModal";
    pub const MODAL_LOADING: &str = "modal-loading";
    pub const MODAL_SUCCESS: &str = "modal-success";
    pub const LOADING_TEXT: &str = "loading-text";
    pub const ALERT_MODAL: &str = "alertModal";
    pub const ALERT_MODAL_MSG: &str = "alert-modal-msg";

    pub const BULK_ACTION_INPUT: &str = "bulk-action-input";
    pub const SELECTED_COUNT: &str = "selected-count-display";

    pub const TOGGLE_PASSWORD: &str = "togglePassword";
    pub const IMG_PREVIEW: &str = "img-preview";

    pub const SIDEBAR_COLLAPSED_CLASS: &str = "sidebar-collapsed";
    pub const USER_ROW_CLASS: &str = "user-row";
    pub const ROW_CHECKBOX_CLASS: &str = "row-checkbox";
    pub const IS_SELF_CLASS: &str = "is-self";
    pub const TABLE_SELECTED_CLASS: &str = "table-selected";
    pub const ACTION_TRIGGER_CLASS: &str = "action-trigger";
    pub const MODE_BUTTON_CLASS: &str = "mode-btn";
    pub const ACTIVE_CLASS: &str = "active";

    pub const SET_THEME_ATTR: &str = "data-set-theme";
    pub const SET_MODE_ATTR: &str = "data-set-mode";
    pub const TOGGLE_SIDEBAR_ATTR: &str = "data-toggle-sidebar";
    pub const ACTION_ATTR: &str = "data-action";
    pub const MESSAGE_ATTR: &str = "data-msg";
}

/// Top-level configuration read from `#admin-ui-config`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub timing: Timing,
    pub messages: Messages,
    pub themes: Vec<String>,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            timing: Timing::default(),
            messages: Messages::default(),
            themes: ["theme-green", "theme-blue", "theme-orange", "theme-purple"]
                .into_iter()
                .map(str::to_owned)
                .collect(),
        }
    }
}

impl UiConfig {
    /// Parse a config block. Missing fields keep their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Config`] when `raw` is not valid JSON for this shape.
    pub fn from_json(raw: &str) -> Result<Self, UiError> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(raw)?)
    }
}

/// Delays of the loading/success choreography, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Timing {
    /// Time the loading panel stays up before the success panel replaces it.
    pub loading_ms: u32,
    /// Time the success panel stays up before the form is submitted.
    pub success_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self { loading_ms: 1200, success_ms: 800 }
    }
}

/// User-facing validation messages.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown in the alert modal when a bulk action has no selected users.
    pub select_users: String,
    /// Native alert fallback for the same case when no alert modal exists.
    pub select_target: String,
    /// Shown when a rank update lacks a selected user or a selected rank.
    pub select_rank: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            select_users: "Select the users to operate on.".to_owned(),
            select_target: "Select at least one target.".to_owned(),
            select_rank: "Select the target users and the new rank.".to_owned(),
        }
    }
}
