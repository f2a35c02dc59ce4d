//! Core operations.
//!
//! The business logic for confdoc commands, separated from CLI argument
//! parsing and output rendering.

pub mod check;
pub mod generate;

pub use check::check;
pub use generate::{GenerateOptions, generate};
