//! Document adapter: the browser implementation of the preference and
//! choreography surfaces, plus the element lookup and listener helpers the
//! bindings share.
//!
//! Every lookup is optional. A missing element means the feature is not on
//! this page, so the write is skipped without logging.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Element, Event, EventTarget, HtmlElement, HtmlFormElement, HtmlInputElement};

use crate::config::ids;
use crate::error::UiError;
use crate::state::choreography::ActionSurface;
use crate::state::prefs::Patch;
use crate::state::screen::{
    CHECKED_RANK_SELECTOR, Capabilities, Capability, Probe, ROW_CHECKBOX_SELECTOR, Rejection, RejectionDisplay,
    SelectionSnapshot,
};
use crate::state::selection::checked_count;
use crate::util::modal::BootstrapModal;
use crate::util::preference_store::PreferenceSurface;

/// Whether `probe` finds anything in `document`.
pub fn probe(document: &Document, probe: Probe) -> bool {
    match probe {
        Probe::Id(id) => document.get_element_by_id(id).is_some(),
        Probe::Query(selector) => matches!(document.query_selector(selector), Ok(Some(_))),
    }
}

/// Checked downcast; `None` when `value` is not a `T`.
pub fn cast<T: JsCast>(value: impl JsCast) -> Option<T> {
    value.has_type::<T>().then(|| value.unchecked_into::<T>())
}

/// Add or remove `class` on `el`.
pub fn set_class(el: &Element, class: &str, on: bool) {
    if el.class_list().toggle_with_force(class, on).is_err() {
        log::warn!("could not toggle .{class}");
    }
}

/// All elements matching `selector`, in document order.
pub fn elements(root: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(cast::<Element>)
        .collect()
}

pub fn input_by_id(document: &Document, id: &str) -> Option<HtmlInputElement> {
    cast(document.get_element_by_id(id)?)
}

pub fn set_text(document: &Document, id: &str, text: &str) {
    if let Some(el) = document.get_element_by_id(id) {
        el.set_text_content(Some(text));
    }
}

fn set_display(document: &Document, id: &str, display: &str) {
    let Some(el) = document.get_element_by_id(id).and_then(cast::<HtmlElement>) else {
        return;
    };
    if el.style().set_property("display", display).is_err() {
        log::warn!("could not set display on #{id}");
    }
}

/// Register `handler` for `event` on `target` for the lifetime of the page.
///
/// # Errors
///
/// Returns [`UiError::Js`] when the browser refuses the listener.
pub fn listen(target: &EventTarget, event: &str, handler: impl FnMut(Event) + 'static) -> Result<(), UiError> {
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Number of checked row checkboxes.
pub fn checked_rows(document: &Document) -> usize {
    checked_count(
        elements(document, ROW_CHECKBOX_SELECTOR)
            .into_iter()
            .filter_map(cast::<HtmlInputElement>)
            .map(|cb| cb.checked()),
    )
}

/// The live document, seen through both surfaces.
#[derive(Clone, Debug)]
pub struct DocumentSurface {
    document: Document,
    caps: Capabilities,
    status_modal: Option<BootstrapModal>,
    alert_modal: Option<BootstrapModal>,
}

impl DocumentSurface {
    pub fn new(document: Document, caps: &Capabilities) -> Self {
        let modal = |capability, id| {
            if !caps.has(capability) {
                return None;
            }
            let modal = document.get_element_by_id(id).and_then(|el| BootstrapModal::attach(&el));
            if modal.is_none() {
                log::debug!("#{id} present but no modal widget; degrading");
            }
            modal
        };
        let status_modal = modal(Capability::StatusModal, ids::STATUS_MODAL);
        let alert_modal = modal(Capability::AlertModal, ids::ALERT_MODAL);
        Self { document, caps: caps.clone(), status_modal, alert_modal }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Keep `#selected-count-display` equal to the number of checked rows.
    pub fn refresh_selected_count(&self) {
        if self.caps.has(Capability::SelectedCount) {
            set_text(&self.document, ids::SELECTED_COUNT, &checked_rows(&self.document).to_string());
        }
    }

    /// Selection counts at this instant.
    pub fn snapshot(&self) -> SelectionSnapshot {
        SelectionSnapshot {
            checked_rows: checked_rows(&self.document),
            checked_ranks: elements(&self.document, CHECKED_RANK_SELECTOR).len(),
        }
    }

    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if window.alert_with_message(message).is_err() {
            log::warn!("alert failed: {message}");
        }
    }
}

impl PreferenceSurface for DocumentSurface {
    fn body_classes(&self) -> String {
        self.document.body().map(|b| b.class_name()).unwrap_or_default()
    }

    fn sidebar_collapsed(&self) -> Option<bool> {
        if !self.caps.has(Capability::Layout) {
            return None;
        }
        let layout = self.document.get_element_by_id(ids::ADMIN_LAYOUT)?;
        Some(layout.class_list().contains(ids::SIDEBAR_COLLAPSED_CLASS))
    }

    fn apply(&self, patch: &Patch) {
        if !self.caps.admits(patch) {
            return;
        }
        let doc = &self.document;
        match patch {
            Patch::BodyClass(class) => {
                if let Some(body) = doc.body() {
                    body.set_class_name(class);
                }
            }
            Patch::ActiveModeButton(id) => {
                for button in elements(doc, &format!(".{}", ids::MODE_BUTTON_CLASS)) {
                    set_class(&button, ids::ACTIVE_CLASS, false);
                }
                if let Some(button) = doc.get_element_by_id(id) {
                    set_class(&button, ids::ACTIVE_CLASS, true);
                }
            }
            Patch::RootFontSize(size) => {
                if let Some(root) = doc.document_element().and_then(cast::<HtmlElement>)
                    && root.style().set_property("font-size", size).is_err()
                {
                    log::warn!("could not set root font size {size}");
                }
            }
            Patch::FontLabel(text) => set_text(doc, ids::FONT_SIZE_VALUE, text),
            Patch::FontSlider(value) => {
                if let Some(slider) = input_by_id(doc, ids::FONT_SIZE_RANGE) {
                    slider.set_value(value);
                }
            }
            Patch::Sidebar { collapsed, glyph } => {
                let Some(layout) = doc.get_element_by_id(ids::ADMIN_LAYOUT) else {
                    return;
                };
                set_class(&layout, ids::SIDEBAR_COLLAPSED_CLASS, *collapsed);
                if self.caps.has(Capability::ToggleIcon) {
                    set_text(doc, ids::TOGGLE_ICON, glyph);
                }
            }
        }
    }
}

impl ActionSurface for DocumentSurface {
    fn has_status_modal(&self) -> bool {
        self.status_modal.is_some()
    }

    fn set_loading_text(&self, message: &str) {
        set_text(&self.document, ids::LOADING_TEXT, message);
    }

    fn set_pending_action(&self, action: &str) {
        if let Some(input) = input_by_id(&self.document, ids::BULK_ACTION_INPUT) {
            input.set_value(action);
        }
    }

    fn show_status_modal(&self) {
        if let Some(modal) = &self.status_modal {
            modal.show();
        }
    }

    fn show_success_panel(&self) {
        set_display(&self.document, ids::MODAL_LOADING, "none");
        set_display(&self.document, ids::MODAL_SUCCESS, "block");
    }

    fn submit_form(&self, form_id: &str) {
        let Some(form) = self.document.get_element_by_id(form_id).and_then(cast::<HtmlFormElement>) else {
            log::debug!("form #{form_id} missing; nothing to submit");
            return;
        };
        if let Err(err) = form.submit() {
            log::warn!("submit of #{form_id} failed: {err:?}");
        }
    }

    fn reject(&self, rejection: &Rejection) {
        match (rejection.display(self.alert_modal.is_some()), &self.alert_modal) {
            (RejectionDisplay::Modal(message), Some(modal)) => {
                set_text(&self.document, ids::ALERT_MODAL_MSG, message);
                modal.show();
            }
            (RejectionDisplay::Modal(message) | RejectionDisplay::Alert(message), _) => self.alert(message),
        }
    }
}
