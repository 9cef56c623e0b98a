//! Preference store: restores persisted preferences on load and keeps the
//! document and storage in step on every change.
//!
//! DESIGN
//! ======
//! Each mutator reads the class currently applied to the document before it
//! writes, so a theme change keeps whatever mode is showing (and vice versa)
//! even if something else touched `<body>` since boot. The in-memory value is
//! only the fallback when the document carries no token for that axis.

#[cfg(test)]
#[path = "preference_store_test.rs"]
mod preference_store_test;

use crate::state::prefs::{
    FONT_SIZE_KEY, FontSize, MODE_KEY, ModeToken, Patch, SIDEBAR_KEY, SidebarState, THEME_KEY, ThemeToken,
    UiPreferences,
};
use crate::util::storage::KeyValueStore;

/// The document side of preference handling.
pub trait PreferenceSurface {
    /// Class string of the element carrying the theme and mode tokens.
    fn body_classes(&self) -> String;
    /// Whether the layout root is collapsed; `None` when the page has no layout root.
    fn sidebar_collapsed(&self) -> Option<bool>;
    fn apply(&self, patch: &Patch);
}

pub struct PreferenceStore<S, V> {
    storage: S,
    surface: V,
    prefs: UiPreferences,
}

impl<S: KeyValueStore, V: PreferenceSurface> PreferenceStore<S, V> {
    /// Read every axis (defaults for anything missing) and render it in one pass.
    /// Restoring never writes to storage.
    pub fn restore(storage: S, surface: V) -> Self {
        let prefs = UiPreferences::from_stored(|key| storage.get(key));
        for patch in prefs.apply() {
            surface.apply(&patch);
        }
        Self { storage, surface, prefs }
    }

    pub fn preferences(&self) -> &UiPreferences {
        &self.prefs
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn surface(&self) -> &V {
        &self.surface
    }

    pub fn set_theme(&mut self, name: &str) {
        self.sync_from_document();
        self.prefs.theme = ThemeToken::parse(name);
        self.surface.apply(&self.prefs.theme_patch());
        self.storage.set(THEME_KEY, self.prefs.theme.as_str());
    }

    pub fn set_mode(&mut self, name: &str) {
        self.sync_from_document();
        self.prefs.mode = ModeToken::parse(name);
        for patch in self.prefs.mode_patches() {
            self.surface.apply(&patch);
        }
        self.storage.set(MODE_KEY, self.prefs.mode.as_str());
    }

    /// Apply a percentage such as `"110"`. Returns `false` and changes nothing
    /// for values that are not a positive whole number.
    pub fn set_font_size(&mut self, pct: &str) -> bool {
        let Some(size) = FontSize::parse(pct) else {
            return false;
        };
        self.prefs.font_size = size;
        for patch in self.prefs.font_patches() {
            self.surface.apply(&patch);
        }
        self.storage.set(FONT_SIZE_KEY, &size.to_string());
        true
    }

    /// Flip the sidebar. Without a layout root nothing changes or persists.
    pub fn toggle_sidebar(&mut self) -> Option<SidebarState> {
        let collapsed = self.surface.sidebar_collapsed()?;
        self.prefs.sidebar = SidebarState::from_collapsed(collapsed).toggled();
        self.surface.apply(&self.prefs.sidebar_patch());
        self.storage.set(SIDEBAR_KEY, self.prefs.sidebar.as_str());
        Some(self.prefs.sidebar)
    }

    fn sync_from_document(&mut self) {
        let classes = self.surface.body_classes();
        if let Some(theme) = ThemeToken::from_classes(&classes) {
            self.prefs.theme = theme;
        }
        if let Some(mode) = ModeToken::from_classes(&classes) {
            self.prefs.mode = mode;
        }
    }
}
