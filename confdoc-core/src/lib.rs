//! Core utilities and types for the confdoc generator.
//!
//! This crate provides the output-format abstraction and the small helpers
//! shared by every renderer.

mod builder;
mod file;
mod format;
mod utils;

// Text building
pub use builder::TextBuilder;
// File operations
pub use file::File;
// Output formats
pub use format::{DocFormat, GenerateResult, PreviewFile};
// String utilities
pub use utils::{trimmed, value_to_string};
