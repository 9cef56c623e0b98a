//! Avatar image preview: shows a picked file in `#img-preview` before upload.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Document, Event, File, FileReader, HtmlImageElement, HtmlInputElement};

use crate::config::ids;
use crate::error::UiError;
use crate::state::screen::FILE_INPUT_SELECTOR;
use crate::util::dom::{cast, listen};

/// Watch the page's first file input and preview the selected image.
///
/// # Errors
///
/// Returns [`UiError::Js`] when the change listener cannot be registered.
pub fn bind(document: &Document) -> Result<(), UiError> {
    let Some(input) = document.query_selector(FILE_INPUT_SELECTOR)?.and_then(cast::<HtmlInputElement>) else {
        return Ok(());
    };

    let doc = document.clone();
    let source = input.clone();
    listen(&input, "change", move |_| {
        let Some(file) = source.files().and_then(|files| files.get(0)) else {
            return;
        };
        let Some(preview) = doc.get_element_by_id(ids::IMG_PREVIEW).and_then(cast::<HtmlImageElement>) else {
            return;
        };
        if let Err(err) = read_into(&file, preview) {
            log::warn!("image preview failed: {err}");
        }
    })
}

fn read_into(file: &File, preview: HtmlImageElement) -> Result<(), UiError> {
    let reader = FileReader::new()?;
    let loaded = reader.clone();
    let onload = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
        match loaded.result() {
            Ok(result) => {
                if let Some(url) = result.as_string() {
                    preview.set_src(&url);
                }
            }
            Err(err) => log::warn!("image read failed: {err:?}"),
        }
    });
    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.read_as_data_url(file)?;
    onload.forget();
    Ok(())
}
