//! Page boot: probe the page once, restore preferences, and wire every
//! behavior the page has room for.
//!
//! DESIGN
//! ======
//! `plan` turns the resolved `Capabilities` into an ordered list of boot
//! steps; `boot` (browser only) executes it. A failing step is logged and the
//! remaining steps still run. Boot needs the whole document, so while it is
//! still being parsed it waits for `DOMContentLoaded`.

#[cfg(test)]
#[path = "app_test.rs"]
mod app_test;

use crate::state::screen::{Capabilities, Capability, Screen};

/// One unit of page wiring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BootStep {
    RestorePreferences,
    ShowDate,
    BindPreferenceControls,
    BindRows,
    BindScreen(Screen),
    BindPasswordToggle,
    BindImagePreview,
}

/// Whether a document in `ready_state` is still being parsed, so elements
/// after the loading script may not exist yet.
pub fn waits_for_dom(ready_state: &str) -> bool {
    ready_state == "loading"
}

/// The steps a page with `caps` needs, in execution order.
pub fn plan(caps: &Capabilities) -> Vec<BootStep> {
    let mut steps = vec![BootStep::RestorePreferences];
    if caps.has(Capability::DateDisplay) {
        steps.push(BootStep::ShowDate);
    }
    steps.push(BootStep::BindPreferenceControls);
    if caps.has(Capability::RowTable) {
        steps.push(BootStep::BindRows);
    }
    steps.extend(caps.screens().into_iter().map(BootStep::BindScreen));
    if caps.has(Capability::PasswordToggle) {
        steps.push(BootStep::BindPasswordToggle);
    }
    if caps.has(Capability::ImageUpload) {
        steps.push(BootStep::BindImagePreview);
    }
    steps
}

#[cfg(feature = "hydrate")]
pub use browser::*;

#[cfg(feature = "hydrate")]
mod browser {
    use std::cell::RefCell;
    use std::rc::Rc;

    use wasm_bindgen::prelude::wasm_bindgen;
    use web_sys::{Document, Element, HtmlInputElement};

    use super::{BootStep, plan, waits_for_dom};
    use crate::config::{Messages, UiConfig, ids};
    use crate::error::UiError;
    use crate::state::choreography::{Choreographer, Trigger, Validator};
    use crate::state::password::PasswordVisibility;
    use crate::state::prefs::{SIDEBAR_KEY, SidebarState};
    use crate::state::screen::{
        Capabilities, PASSWORD_INPUT_SELECTOR, ROW_CHECKBOX_SELECTOR, Screen, TriggerSelector, USER_ROW_SELECTOR,
    };
    use crate::state::selection::{ClickTarget, RowEvent, RowState, apply_row_event};
    use crate::util::date;
    use crate::util::dom::{self, DocumentSurface, cast, elements, listen, set_class};
    use crate::util::preference_store::PreferenceStore;
    use crate::util::preview;
    use crate::util::storage::{BrowserStorage, KeyValueStore};
    use crate::util::timer::TimeoutScheduler;

    type Preferences = PreferenceStore<BrowserStorage, DocumentSurface>;

    thread_local! {
        static PREFERENCES: RefCell<Option<Preferences>> = const { RefCell::new(None) };
    }

    fn with_preferences(f: impl FnOnce(&mut Preferences)) {
        PREFERENCES.with_borrow_mut(|slot| {
            if let Some(store) = slot.as_mut() {
                f(store);
            }
        });
    }

    #[wasm_bindgen(js_name = setTheme)]
    pub fn set_theme(name: &str) {
        with_preferences(|store| store.set_theme(name));
    }

    #[wasm_bindgen(js_name = setMode)]
    pub fn set_mode(name: &str) {
        with_preferences(|store| store.set_mode(name));
    }

    #[wasm_bindgen(js_name = setFontSize)]
    pub fn set_font_size(pct: &str) {
        with_preferences(|store| {
            if !store.set_font_size(pct) {
                log::debug!("ignoring font size {pct:?}");
            }
        });
    }

    #[wasm_bindgen(js_name = toggleSidebar)]
    pub fn toggle_sidebar() {
        with_preferences(|store| {
            store.toggle_sidebar();
        });
    }

    fn current_document() -> Result<Document, UiError> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or(UiError::NoDocument)
    }

    /// Boot now, or on `DOMContentLoaded` if the document is still parsing.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NoDocument`] outside a window context, or
    /// [`UiError::Js`] when the deferred listener cannot be registered.
    pub fn boot_when_ready() -> Result<(), UiError> {
        let document = current_document()?;
        if !waits_for_dom(&document.ready_state()) {
            return boot();
        }
        log::debug!("document still loading; deferring boot");
        listen(&document, "DOMContentLoaded", |_| {
            if let Err(err) = boot() {
                log::warn!("admin-ui boot failed: {err}");
            }
        })
    }

    /// Run the full boot sequence against the current document.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NoDocument`] outside a window context. Individual
    /// binding failures are logged, not returned.
    pub fn boot() -> Result<(), UiError> {
        let document = current_document()?;

        let storage = BrowserStorage::local();
        if !storage.is_available() {
            log::debug!("localStorage unavailable; preferences will not persist");
        }
        apply_sidebar_early(&document, &storage);

        let config = load_config(&document);
        let caps = Capabilities::resolve(|probe| dom::probe(&document, probe));
        let surface = DocumentSurface::new(document.clone(), &caps);
        let choreographer = Choreographer::new(Rc::new(surface.clone()), Rc::new(TimeoutScheduler), config.timing);

        let mut storage = Some(storage);
        for step in plan(&caps) {
            let result = match step {
                BootStep::RestorePreferences => {
                    if let Some(storage) = storage.take() {
                        let store = PreferenceStore::restore(storage, surface.clone());
                        PREFERENCES.with_borrow_mut(|slot| *slot = Some(store));
                    }
                    Ok(())
                }
                BootStep::ShowDate => {
                    if let Some(today) = date::today() {
                        dom::set_text(&document, ids::CURRENT_DATE, &today);
                    }
                    Ok(())
                }
                BootStep::BindPreferenceControls => bind_preference_controls(&document),
                BootStep::BindRows => bind_rows(&surface),
                BootStep::BindScreen(screen) => bind_screen(&surface, &choreographer, screen, &config.messages),
                BootStep::BindPasswordToggle => bind_password_toggle(&document),
                BootStep::BindImagePreview => preview::bind(&document),
            };
            if let Err(err) = result {
                log::warn!("{step:?} failed: {err}");
            }
        }
        log::debug!("admin-ui ready");
        Ok(())
    }

    /// Collapse the layout root as soon as possible. The inline boot script
    /// normally got there first; this covers pages rendered without it.
    fn apply_sidebar_early(document: &Document, storage: &BrowserStorage) {
        if SidebarState::from_stored(storage.get(SIDEBAR_KEY).as_deref()).is_collapsed()
            && let Some(layout) = document.get_element_by_id(ids::ADMIN_LAYOUT)
        {
            set_class(&layout, ids::SIDEBAR_COLLAPSED_CLASS, true);
        }
    }

    fn load_config(document: &Document) -> UiConfig {
        let raw = document
            .get_element_by_id(ids::CONFIG_BLOCK)
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        UiConfig::from_json(&raw).unwrap_or_else(|err| {
            log::warn!("{err}; using default config");
            UiConfig::default()
        })
    }

    fn bind_preference_controls(document: &Document) -> Result<(), UiError> {
        for el in elements(document, &format!("[{}]", ids::SET_THEME_ATTR)) {
            let source = el.clone();
            listen(&el, "click", move |_| {
                if let Some(theme) = source.get_attribute(ids::SET_THEME_ATTR) {
                    set_theme(&theme);
                }
            })?;
        }
        for el in elements(document, &format!("[{}]", ids::SET_MODE_ATTR)) {
            let source = el.clone();
            listen(&el, "click", move |_| {
                if let Some(mode) = source.get_attribute(ids::SET_MODE_ATTR) {
                    set_mode(&mode);
                }
            })?;
        }
        for el in elements(document, &format!("[{}]", ids::TOGGLE_SIDEBAR_ATTR)) {
            listen(&el, "click", move |_| toggle_sidebar())?;
        }
        if let Some(slider) = dom::input_by_id(document, ids::FONT_SIZE_RANGE) {
            let source = slider.clone();
            listen(&slider, "input", move |_| set_font_size(&source.value()))?;
        }
        Ok(())
    }

    fn row_checkbox(row: &Element) -> Option<HtmlInputElement> {
        match row.query_selector(ROW_CHECKBOX_SELECTOR) {
            Ok(found) => cast(found?),
            Err(err) => {
                log::warn!("row checkbox lookup failed: {err:?}");
                None
            }
        }
    }

    fn sync_row(surface: &DocumentSurface, row: &Element, state: RowState) {
        set_class(row, ids::TABLE_SELECTED_CLASS, state.highlighted());
        surface.refresh_selected_count();
    }

    fn bind_rows(surface: &DocumentSurface) -> Result<(), UiError> {
        for row in elements(surface.document(), USER_ROW_SELECTOR) {
            let Some(checkbox) = row_checkbox(&row) else {
                continue;
            };

            let (doc, target_row, cb) = (surface.clone(), row.clone(), checkbox.clone());
            listen(&row, "click", move |ev| {
                let Some(target) = ev.target().and_then(cast::<Element>) else {
                    return;
                };
                let click = ClickTarget::classify(
                    &target.tag_name(),
                    target.get_attribute("type").as_deref(),
                    matches!(target.closest("a"), Ok(Some(_))),
                );
                let state = RowState {
                    checked: cb.checked(),
                    is_self: target_row.class_list().contains(ids::IS_SELF_CLASS),
                };
                if let Some(next) = apply_row_event(state, RowEvent::Click(click)) {
                    cb.set_checked(next.checked);
                    sync_row(&doc, &target_row, next);
                }
            })?;

            let (doc, target_row, cb) = (surface.clone(), row.clone(), checkbox.clone());
            listen(&checkbox, "change", move |_| {
                let state = RowState {
                    checked: cb.checked(),
                    is_self: target_row.class_list().contains(ids::IS_SELF_CLASS),
                };
                if let Some(next) = apply_row_event(state, RowEvent::CheckboxChanged(cb.checked())) {
                    sync_row(&doc, &target_row, next);
                }
            })?;
        }
        Ok(())
    }

    fn bind_screen(
        surface: &DocumentSurface,
        choreographer: &Choreographer,
        screen: Screen,
        messages: &Messages,
    ) -> Result<(), UiError> {
        let document = surface.document();
        let triggers = match screen.trigger() {
            TriggerSelector::Id(id) => document.get_element_by_id(id).into_iter().collect(),
            TriggerSelector::Class(class) => elements(document, &format!(".{class}")),
        };
        if triggers.is_empty() {
            log::debug!("{screen:?}: form present but no trigger");
            return Ok(());
        }

        let validator: Option<Validator> = screen.is_validated().then(|| {
            let surface = surface.clone();
            let messages = messages.clone();
            Rc::new(move || screen.validate(surface.snapshot(), &messages)) as Validator
        });

        for el in triggers {
            let source = el.clone();
            let choreographer = choreographer.clone();
            let validator = validator.clone();
            listen(&el, "click", move |_| {
                // Data attributes are read per click, not at bind time.
                let mut trigger = Trigger::new(screen.form_id())
                    .with_message(source.get_attribute(ids::MESSAGE_ATTR))
                    .with_action(source.get_attribute(ids::ACTION_ATTR));
                if let Some(validate) = &validator {
                    trigger = trigger.with_validator(Rc::clone(validate));
                }
                let activation = choreographer.activate(&trigger);
                log::debug!("{screen:?} trigger: {activation:?}");
            })?;
        }
        Ok(())
    }

    fn bind_password_toggle(document: &Document) -> Result<(), UiError> {
        let Some(toggle) = document.get_element_by_id(ids::TOGGLE_PASSWORD) else {
            return Ok(());
        };
        let Some(input) = document.query_selector(PASSWORD_INPUT_SELECTOR)?.and_then(cast::<HtmlInputElement>) else {
            return Ok(());
        };

        let glyph = toggle.clone();
        listen(&toggle, "click", move |_| {
            let next = PasswordVisibility::from_input_type(input.get_attribute("type").as_deref()).toggled();
            if let Err(err) = input.set_attribute("type", next.input_type()) {
                log::warn!("password toggle failed: {err:?}");
                return;
            }
            glyph.set_text_content(Some(next.glyph()));
            if input.focus().is_err() {
                log::debug!("password input refused focus");
            }
        })
    }
}
