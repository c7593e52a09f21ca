//! Results area: either the input/restored image pair or a failure message.

use leptos::prelude::*;

use crate::state::upload::UploadState;

#[component]
pub fn ResultsPanel() -> impl IntoView {
    let upload = expect_context::<RwSignal<UploadState>>();

    let display = move || if upload.with(|u| u.results_visible) { "block" } else { "none" };
    let input_src = move || upload.with(|u| u.input_image_url().map(str::to_owned));
    let output_src = move || upload.with(|u| u.output_image.clone());

    view! {
        <section id="results" class="results" style:display=display>
            <Show
                when=move || upload.with(|u| u.message.is_none())
                fallback=move || {
                    view! {
                        <p class="results__message">
                            {move || upload.with(|u| u.message.clone().unwrap_or_default())}
                        </p>
                    }
                }
            >
                <div class="results__pair">
                    <figure class="results__figure">
                        <figcaption>"Input"</figcaption>
                        <img id="uploaded-image" alt="Uploaded image" src=input_src/>
                    </figure>
                    <figure class="results__figure">
                        <figcaption>"Restored"</figcaption>
                        <img id="restored-image" alt="Restored image" src=output_src/>
                    </figure>
                </div>
                <a id="download-link" class="btn results__download" href=output_src download="">
                    "Download restored image"
                </a>
            </Show>
        </section>
    }
}
