//! # client
//!
//! Leptos + WASM frontend for the image restoration page.
//!
//! This crate contains the page, its components, the theme and upload state
//! machines, the detect API client, and browser glue. Logic that touches the
//! browser sits behind small traits (`KvStore`, `UploadView`, `DetectApi`) so
//! it runs natively under `cargo test`.

pub mod app;
pub mod components;
pub mod net;
pub mod pages;
pub mod state;
pub mod util;

/// WASM entry point: hydrate the server-rendered page.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        leptos::logging::warn!("console logger already installed");
    }
    leptos::mount::hydrate_body(app::App);
}
