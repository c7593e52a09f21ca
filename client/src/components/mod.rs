//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page's controls and results while reading/writing
//! shared state from Leptos context providers.

pub mod results_panel;
pub mod theme_switch;
pub mod upload_form;
