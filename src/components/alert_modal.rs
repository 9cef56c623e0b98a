//! Validation message modal.

use leptos::prelude::*;

use crate::config::ids;

#[component]
pub fn AlertModal() -> impl IntoView {
    view! {
        <div class="modal fade" id=ids::ALERT_MODAL tabindex="-1" aria-hidden="true">
            <div class="modal-dialog modal-dialog-centered modal-sm">
                <div class="modal-content">
                    <div class="modal-body text-center">
                        <span class="material-icons text-warning fs-1">"error_outline"</span>
                        <p id=ids::ALERT_MODAL_MSG class="mb-0"></p>
                    </div>
                    <div class="modal-footer justify-content-center">
                        <button type="button" class="btn btn-primary" data-bs-dismiss="modal">
                            "OK"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}
