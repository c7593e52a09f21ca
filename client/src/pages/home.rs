//! The single upload page.

use leptos::prelude::*;

use crate::components::results_panel::ResultsPanel;
use crate::components::theme_switch::ThemeSwitch;
use crate::components::upload_form::UploadForm;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <main class="home-page">
            <header class="home-page__header">
                <h1>"Image Restoration"</h1>
                <ThemeSwitch/>
            </header>
            <p class="home-page__subtitle">"Upload a rainy photo to get a restored copy."</p>
            <UploadForm/>
            <ResultsPanel/>
        </main>
    }
}
