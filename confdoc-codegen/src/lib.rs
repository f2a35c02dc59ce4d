//! Type resolution and page layout for the confdoc generator.
//!
//! This crate turns raw schema declarations into the resolved tree of
//! [`confdoc_ir`] and provides the pieces every renderer shares.
//!
//! # Module Organization
//!
//! - [`resolve`] - Type resolution and section building ([`Resolver`])
//! - [`load`] - Entry points from files or strings to a [`confdoc_ir::Config`]
//! - [`pages`] - Page tree walking, output paths, and links
//! - [`display`] - Plain-text tree display
//! - [`json`] - JSON output format
//! - [`testing`] - Shared fixtures (feature-gated)

pub mod display;
pub mod json;
pub mod load;
pub mod pages;
pub mod resolve;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use load::{build_config, load, load_str};
pub use display::{DisplayStyle, TreeDisplay};
pub use json::JsonFormat;
pub use pages::{Crumb, DEFAULT_INDEX_NAME, LinkOptions, Page, PageTree};
pub use resolve::{Resolved, Resolver, TypeRef};
