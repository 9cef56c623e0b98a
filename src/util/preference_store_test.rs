use super::*;

use std::cell::RefCell;

use crate::util::storage::MemoryStore;

/// Document stand-in that keeps just the state preference patches touch.
#[derive(Default)]
struct FakeDocument {
    has_layout: bool,
    body_class: RefCell<String>,
    active_mode_button: RefCell<Option<String>>,
    root_font_size: RefCell<Option<String>>,
    font_label: RefCell<Option<String>>,
    font_slider: RefCell<Option<String>>,
    collapsed: RefCell<bool>,
    glyph: RefCell<Option<&'static str>>,
}

impl FakeDocument {
    fn with_layout() -> Self {
        Self { has_layout: true, ..Self::default() }
    }

    fn body(&self) -> String {
        self.body_class.borrow().clone()
    }
}

impl PreferenceSurface for FakeDocument {
    fn body_classes(&self) -> String {
        self.body()
    }

    fn sidebar_collapsed(&self) -> Option<bool> {
        self.has_layout.then(|| *self.collapsed.borrow())
    }

    fn apply(&self, patch: &Patch) {
        match patch {
            Patch::BodyClass(class) => *self.body_class.borrow_mut() = class.clone(),
            Patch::ActiveModeButton(id) => *self.active_mode_button.borrow_mut() = Some(id.clone()),
            Patch::RootFontSize(size) => *self.root_font_size.borrow_mut() = Some(size.clone()),
            Patch::FontLabel(text) => *self.font_label.borrow_mut() = Some(text.clone()),
            Patch::FontSlider(value) => *self.font_slider.borrow_mut() = Some(value.clone()),
            Patch::Sidebar { collapsed, glyph } => {
                if self.has_layout {
                    *self.collapsed.borrow_mut() = *collapsed;
                    *self.glyph.borrow_mut() = Some(*glyph);
                }
            }
        }
    }
}

fn restore(entries: &[(&str, &str)], doc: FakeDocument) -> PreferenceStore<MemoryStore, FakeDocument> {
    PreferenceStore::restore(MemoryStore::with_entries(entries.iter().copied()), doc)
}

// =============================================================
// restore
// =============================================================

#[test]
fn restore_with_empty_storage_applies_defaults_without_writing() {
    let store = restore(&[], FakeDocument::with_layout());
    let doc = store.surface();
    assert_eq!(doc.body(), "theme-green mode-light");
    assert_eq!(doc.active_mode_button.borrow().as_deref(), Some("btn-light"));
    assert_eq!(doc.root_font_size.borrow().as_deref(), Some("100%"));
    assert_eq!(doc.font_label.borrow().as_deref(), Some("100%"));
    assert_eq!(doc.font_slider.borrow().as_deref(), Some("100"));
    assert!(!*doc.collapsed.borrow());
    assert_eq!(*doc.glyph.borrow(), Some("chevron_left"));
    assert!(store.storage().is_empty());
}

#[test]
fn restore_collapsed_sidebar_sets_class_and_glyph() {
    let store = restore(&[(SIDEBAR_KEY, "collapsed")], FakeDocument::with_layout());
    assert!(*store.surface().collapsed.borrow());
    assert_eq!(*store.surface().glyph.borrow(), Some("chevron_right"));
    assert_eq!(store.preferences().sidebar, SidebarState::Collapsed);
}

#[test]
fn restore_applies_stored_theme_mode_and_font() {
    let store = restore(
        &[(THEME_KEY, "theme-blue"), (MODE_KEY, "mode-dark"), (FONT_SIZE_KEY, "120")],
        FakeDocument::with_layout(),
    );
    assert_eq!(store.surface().body(), "theme-blue mode-dark");
    assert_eq!(store.surface().active_mode_button.borrow().as_deref(), Some("btn-dark"));
    assert_eq!(store.surface().font_slider.borrow().as_deref(), Some("120"));
}

// =============================================================
// Orthogonal axes
// =============================================================

#[test]
fn set_theme_preserves_mode() {
    let mut store = restore(&[(MODE_KEY, "mode-dark")], FakeDocument::with_layout());
    store.set_theme("theme-orange");
    assert_eq!(store.surface().body(), "theme-orange mode-dark");
    assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("theme-orange"));
    assert_eq!(store.storage().get(MODE_KEY).as_deref(), Some("mode-dark"));
}

#[test]
fn set_mode_preserves_theme_and_marks_button() {
    let mut store = restore(&[(THEME_KEY, "theme-purple")], FakeDocument::with_layout());
    store.set_mode("mode-dark");
    assert_eq!(store.surface().body(), "theme-purple mode-dark");
    assert_eq!(store.surface().active_mode_button.borrow().as_deref(), Some("btn-dark"));
    assert_eq!(store.storage().get(MODE_KEY).as_deref(), Some("mode-dark"));
    // The seeded theme entry is left as it was.
    assert_eq!(store.storage().get(THEME_KEY).as_deref(), Some("theme-purple"));
}

#[test]
fn mutators_read_the_document_before_writing() {
    let mut store = restore(&[], FakeDocument::with_layout());
    // Another script switched the mode behind the store's back.
    *store.surface().body_class.borrow_mut() = "theme-green mode-dark".to_owned();
    store.set_theme("theme-blue");
    assert_eq!(store.surface().body(), "theme-blue mode-dark");
}

#[test]
fn any_sequence_of_theme_and_mode_changes_keeps_the_other_axis() {
    let themes = ["theme-blue", "theme-green", "theme-orange"];
    let modes = ["mode-dark", "mode-light", "mode-contrast"];
    let mut store = restore(&[], FakeDocument::with_layout());
    let mut last_theme = "theme-green";
    let mut last_mode = "mode-light";

    for step in 0..24_usize {
        if step % 3 == 1 {
            last_mode = modes[(step / 3) % modes.len()];
            store.set_mode(last_mode);
        } else {
            last_theme = themes[(step * 7) % themes.len()];
            store.set_theme(last_theme);
        }
        let body = store.surface().body();
        let tokens = body.split_whitespace().collect::<Vec<_>>();
        assert_eq!(tokens, [last_theme, last_mode], "after step {step}");
    }
}

// =============================================================
// Font size and sidebar
// =============================================================

#[test]
fn set_font_size_updates_root_label_and_storage() {
    let mut store = restore(&[], FakeDocument::with_layout());
    assert!(store.set_font_size("115"));
    assert_eq!(store.surface().root_font_size.borrow().as_deref(), Some("115%"));
    assert_eq!(store.surface().font_label.borrow().as_deref(), Some("115%"));
    assert_eq!(store.storage().get(FONT_SIZE_KEY).as_deref(), Some("115"));
}

#[test]
fn set_font_size_ignores_garbage() {
    let mut store = restore(&[], FakeDocument::with_layout());
    assert!(!store.set_font_size("abc"));
    assert_eq!(store.storage().get(FONT_SIZE_KEY), None);
    assert_eq!(store.preferences().font_size.percent(), 100);
}

#[test]
fn toggle_sidebar_flips_and_persists() {
    let mut store = restore(&[], FakeDocument::with_layout());
    assert_eq!(store.toggle_sidebar(), Some(SidebarState::Collapsed));
    assert!(*store.surface().collapsed.borrow());
    assert_eq!(*store.surface().glyph.borrow(), Some("chevron_right"));
    assert_eq!(store.storage().get(SIDEBAR_KEY).as_deref(), Some("collapsed"));

    assert_eq!(store.toggle_sidebar(), Some(SidebarState::Expanded));
    assert_eq!(store.storage().get(SIDEBAR_KEY).as_deref(), Some("expanded"));
}

#[test]
fn toggle_sidebar_without_layout_is_a_no_op() {
    let mut store = restore(&[], FakeDocument::default());
    assert_eq!(store.toggle_sidebar(), None);
    assert_eq!(store.storage().get(SIDEBAR_KEY), None);
}
