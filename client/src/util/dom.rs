//! Direct DOM side effects that live outside the reactive view tree.
//!
//! `<body>` is rendered by the SSR shell, not by a component, so its theme
//! class is toggled imperatively. Everything here no-ops outside the browser.

/// Class marking the document body as light-themed.
pub const LIGHT_THEME_CLASS: &str = "light-theme";

/// Add or remove the light theme class on `<body>`.
#[cfg_attr(not(feature = "hydrate"), allow(unused_variables))]
pub fn set_body_light(light: bool) {
    #[cfg(feature = "hydrate")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let classes = body.class_list();
        let result = if light { classes.add_1(LIGHT_THEME_CLASS) } else { classes.remove_1(LIGHT_THEME_CLASS) };
        if let Err(e) = result {
            leptos::logging::warn!("failed to update body theme class: {}", js_error_text(&e));
        }
    }
}

/// Show a blocking alert dialog.
pub fn alert(message: &str) {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            leptos::logging::warn!("alert failed: {}", js_error_text(&e));
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        leptos::logging::log!("alert: {message}");
    }
}

/// Best-effort readable text for a thrown JavaScript value.
#[cfg(feature = "hydrate")]
pub fn js_error_text(value: &wasm_bindgen::JsValue) -> String {
    use wasm_bindgen::JsCast;

    if let Some(text) = value.as_string() {
        return text;
    }
    if let Some(error) = value.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    match js_sys::JSON::stringify(value) {
        Ok(json) => String::from(json),
        Err(_) => format!("{value:?}"),
    }
}
