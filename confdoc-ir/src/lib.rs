//! Resolved documentation tree for the confdoc generator.
//!
//! This crate holds the fully expanded, acyclic property tree produced by
//! type resolution. Renderers only ever read these types.
//!
//! # Architecture
//!
//! ```text
//! types/*.yaml + config.yaml → confdoc-manifest (raw) → confdoc-codegen (resolve) → confdoc-ir → renderers
//! ```
//!
//! Every value here is owned: two properties referencing the same named type
//! hold independent copies of the resolved options and sections.

mod tree;
mod types;

pub use tree::{Config, Example, Property, Section, TypeOption};
pub use types::{Primitive, Shape, Wrapper};
