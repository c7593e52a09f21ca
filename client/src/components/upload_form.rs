//! Image picker, submit button, and loading indicator.
//!
//! SYSTEM CONTEXT
//! ==============
//! Submission is intercepted here and handed to `state::upload::handle_submit`
//! with the page's `RwSignal<UploadState>` as the view. The button stays
//! disabled while a request is in flight.

use leptos::prelude::*;

use crate::state::upload::UploadState;

#[component]
pub fn UploadForm() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();
    let file_input = NodeRef::<leptos::html::Input>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        #[cfg(feature = "hydrate")]
        {
            use crate::net::api::{BrowserFile, GlooDetectApi};

            let files = file_input
                .get_untracked()
                .map(|input| BrowserFile::from_input(&input))
                .unwrap_or_default();
            leptos::task::spawn_local(async move {
                let api = GlooDetectApi::default();
                let outcome = crate::state::upload::handle_submit(&upload, &api, files).await;
                leptos::logging::log!("upload finished: {outcome:?}");
            });
        }
    };

    let loader_display = move || if upload.with(|u| u.loading) { "block" } else { "none" };

    view! {
        <form id="upload-form" class="upload-form" on:submit=on_submit>
            <input
                type="file"
                id="image-input"
                class="upload-form__input"
                name="file"
                accept="image/*"
                node_ref=file_input
            />
            <button
                type="submit"
                class="btn upload-form__submit"
                disabled=move || upload.with(|u| u.submitting)
            >
                "Restore Image"
            </button>
        </form>
        <div id="loader" class="loader" style:display=loader_display aria-live="polite">
            "Processing..."
        </div>
    }
}
