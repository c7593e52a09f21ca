//! Light/dark switch with its label.
//!
//! The stored preference is applied in a client-only effect, so the SSR markup
//! always starts dark and unchecked and hydration flips it if needed.

use leptos::prelude::*;

use crate::state::theme::ThemeState;
use crate::util::dom::set_body_light;
use crate::util::storage::BrowserStorage;

#[component]
pub fn ThemeSwitch() -> impl IntoView {
    let theme = expect_context::<RwSignal<ThemeState>>();

    Effect::new(move || {
        let loaded = ThemeState::load(&BrowserStorage::open());
        set_body_light(loaded.body_is_light());
        theme.set(loaded);
    });

    let on_change = move |ev: leptos::ev::Event| {
        let checked = event_target_checked(&ev);
        let store = BrowserStorage::open();
        theme.update(|t| t.toggle(checked, &store));
        set_body_light(checked);
    };

    view! {
        <label class="theme-toggle">
            <input
                type="checkbox"
                id="theme-switch"
                class="theme-toggle__switch"
                prop:checked=move || theme.get().switch_checked
                on:change=on_change
            />
            <span id="theme-label" class="theme-toggle__label">{move || theme.get().label()}</span>
        </label>
    }
}
