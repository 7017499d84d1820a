//! ui
//!
//! User-facing output.
//!
//! # Modules
//!
//! - [`output`] - Verbosity and message helpers
//! - [`render`] - Text rendering of hexagram views
//!
//! # Design
//!
//! All output goes through this module to ensure consistent formatting
//! and proper handling of quiet mode.

pub mod output;
pub mod render;
