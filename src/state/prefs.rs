//! Persisted visual preferences: color theme, light/dark mode, font scale,
//! and sidebar state.
//!
//! DESIGN
//! ======
//! Theme and mode are independent axes that the page collapses into a single
//! class string on `<body>` (`"theme-green mode-dark"`). `UiPreferences` keeps
//! both axes as separate fields so changing one can never clobber the other;
//! `apply()` renders the full value into document patches and `serialize()`
//! into flat storage entries.

#[cfg(test)]
#[path = "prefs_test.rs"]
mod prefs_test;

use std::fmt;

pub const SIDEBAR_KEY: &str = "sidebarStatus";
pub const THEME_KEY: &str = "selectedTheme";
pub const MODE_KEY: &str = "selectedMode";
pub const FONT_SIZE_KEY: &str = "selectedFontSize";

pub const THEME_PREFIX: &str = "theme-";
pub const MODE_PREFIX: &str = "mode-";

const DEFAULT_THEME: &str = "theme-green";
const DEFAULT_MODE: &str = "mode-light";
const DEFAULT_FONT_PERCENT: u16 = 100;

/// Normalize a raw class token: trimmed, inner whitespace folded to `-`, and
/// carrying `prefix`. Returns `None` for blank input.
fn normalize_token(raw: &str, prefix: &str) -> Option<String> {
    let folded = raw.split_whitespace().collect::<Vec<_>>().join("-");
    if folded.is_empty() || folded == prefix {
        return None;
    }
    if folded.starts_with(prefix) {
        Some(folded)
    } else {
        Some(format!("{prefix}{folded}"))
    }
}

fn find_token<'a>(classes: &'a str, prefix: &str) -> Option<&'a str> {
    classes
        .split_whitespace()
        .find(|class| class.starts_with(prefix) && class.len() > prefix.len())
}

/// Color theme class, always prefixed with `theme-`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ThemeToken(String);

impl ThemeToken {
    /// Build a token from user or storage input. Blank input yields the default.
    pub fn parse(raw: &str) -> Self {
        normalize_token(raw, THEME_PREFIX).map_or_else(Self::default, Self)
    }

    /// Find the active theme class in a class string.
    pub fn from_classes(classes: &str) -> Option<Self> {
        find_token(classes, THEME_PREFIX).map(|t| Self(t.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ThemeToken {
    fn default() -> Self {
        Self(DEFAULT_THEME.to_owned())
    }
}

impl fmt::Display for ThemeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Light/dark mode class, always prefixed with `mode-`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ModeToken(String);

impl ModeToken {
    /// Build a token from user or storage input. Blank input yields the default.
    pub fn parse(raw: &str) -> Self {
        normalize_token(raw, MODE_PREFIX).map_or_else(Self::default, Self)
    }

    /// Find the active mode class in a class string.
    pub fn from_classes(classes: &str) -> Option<Self> {
        find_token(classes, MODE_PREFIX).map(|t| Self(t.to_owned()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Id of the customize-menu button for this mode (`mode-dark` → `btn-dark`).
    pub fn button_id(&self) -> String {
        format!("btn-{}", &self.0[MODE_PREFIX.len()..])
    }
}

impl Default for ModeToken {
    fn default() -> Self {
        Self(DEFAULT_MODE.to_owned())
    }
}

impl fmt::Display for ModeToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Root font scale as a whole percentage.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(u16);

impl FontSize {
    /// Parse a stored or slider value such as `"110"`. Zero and non-numeric
    /// input are rejected.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().parse::<u16>() {
            Ok(pct) if pct > 0 => Some(Self(pct)),
            _ => None,
        }
    }

    pub fn percent(self) -> u16 {
        self.0
    }

    /// CSS/label form, e.g. `"110%"`.
    pub fn css(self) -> String {
        format!("{}%", self.0)
    }
}

impl Default for FontSize {
    fn default() -> Self {
        Self(DEFAULT_FONT_PERCENT)
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sidebar collapse state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarState {
    /// Only the exact stored value `collapsed` collapses the sidebar.
    pub fn from_stored(raw: Option<&str>) -> Self {
        if raw == Some("collapsed") { Self::Collapsed } else { Self::Expanded }
    }

    pub fn from_collapsed(collapsed: bool) -> Self {
        if collapsed { Self::Collapsed } else { Self::Expanded }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }

    pub fn is_collapsed(self) -> bool {
        self == Self::Collapsed
    }

    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    /// Material icon name shown on the sidebar toggle.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Expanded => "chevron_left",
            Self::Collapsed => "chevron_right",
        }
    }
}

/// One document mutation produced by rendering preferences.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Patch {
    /// Replace the `<body>` class string with the combined theme/mode classes.
    BodyClass(String),
    /// Mark the mode button with this id active and clear the others.
    ActiveModeButton(String),
    /// Set the root element's `font-size` style.
    RootFontSize(String),
    /// Set the font-size value label text.
    FontLabel(String),
    /// Move the font-size slider.
    FontSlider(String),
    /// Set or clear the collapsed class on the layout root and its icon glyph.
    Sidebar { collapsed: bool, glyph: &'static str },
}

/// The full set of persisted visual preferences.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiPreferences {
    pub theme: ThemeToken,
    pub mode: ModeToken,
    pub font_size: FontSize,
    pub sidebar: SidebarState,
}

impl UiPreferences {
    /// Read every axis through `get`, falling back to defaults for missing or
    /// malformed values.
    pub fn from_stored(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            theme: get(THEME_KEY).map_or_else(ThemeToken::default, |raw| ThemeToken::parse(&raw)),
            mode: get(MODE_KEY).map_or_else(ModeToken::default, |raw| ModeToken::parse(&raw)),
            font_size: get(FONT_SIZE_KEY)
                .and_then(|raw| FontSize::parse(&raw))
                .unwrap_or_default(),
            sidebar: SidebarState::from_stored(get(SIDEBAR_KEY).as_deref()),
        }
    }

    /// Flat storage entries, one per axis.
    pub fn serialize(&self) -> [(&'static str, String); 4] {
        [
            (THEME_KEY, self.theme.to_string()),
            (MODE_KEY, self.mode.to_string()),
            (FONT_SIZE_KEY, self.font_size.to_string()),
            (SIDEBAR_KEY, self.sidebar.as_str().to_owned()),
        ]
    }

    /// Combined `<body>` class string.
    pub fn body_class(&self) -> String {
        format!("{} {}", self.theme, self.mode)
    }

    /// Render every axis in one pass.
    pub fn apply(&self) -> Vec<Patch> {
        let mut patches = self.mode_patches();
        patches.extend(self.font_patches());
        patches.push(Patch::FontSlider(self.font_size.to_string()));
        patches.push(self.sidebar_patch());
        patches
    }

    pub fn theme_patch(&self) -> Patch {
        Patch::BodyClass(self.body_class())
    }

    pub fn mode_patches(&self) -> Vec<Patch> {
        vec![self.theme_patch(), Patch::ActiveModeButton(self.mode.button_id())]
    }

    pub fn font_patches(&self) -> Vec<Patch> {
        let css = self.font_size.css();
        vec![Patch::RootFontSize(css.clone()), Patch::FontLabel(css)]
    }

    pub fn sidebar_patch(&self) -> Patch {
        Patch::Sidebar {
            collapsed: self.sidebar.is_collapsed(),
            glyph: self.sidebar.glyph(),
        }
    }
}
