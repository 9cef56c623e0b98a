//! Loading/success modal shown while a form submission is choreographed.

use leptos::prelude::*;

use crate::config::ids;

/// Two panels in one modal: a spinner with `#loading-text`, and a success
/// panel that starts hidden. The choreography swaps them before submitting.
#[component]
pub fn StatusModal() -> impl IntoView {
    view! {
        <div
            class="modal fade"
            id=ids::STATUS_MODAL
            tabindex="-1"
            data-bs-backdrop="static"
            data-bs-keyboard="false"
            aria-hidden="true"
        >
            <div class="modal-dialog modal-dialog-centered modal-sm">
                <div class="modal-content text-center p-4">
                    <div id=ids::MODAL_LOADING>
                        <div class="spinner-border text-primary mb-3" role="status"></div>
                        <p id=ids::LOADING_TEXT class="mb-0">"Processing..."</p>
                    </div>
                    <div id=ids::MODAL_SUCCESS style="display: none;">
                        <span class="material-icons text-success fs-1">"check_circle"</span>
                        <p class="mb-0">"Done"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}
