//! Page state modules.
//!
//! DESIGN
//! ======
//! The two page behaviors never share state: `theme` owns the light/dark
//! preference and `upload` owns the submission lifecycle. Each is a plain
//! struct the app wraps in an `RwSignal` context.

pub mod theme;
pub mod upload;
