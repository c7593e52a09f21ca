//! Networking modules for the detect upload.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the upload and `types` defines the wire schema and the
//! failure taxonomy the upload flow renders.

pub mod api;
pub mod types;
