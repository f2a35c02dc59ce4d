//! Markdown reference pages for the confdoc generator.
//!
//! One page is written per property, nested one directory per level, with
//! the root config as the top page. See [`confdoc_codegen::pages`] for the
//! layout and link rules.

mod escape;
mod generator;
mod page;

pub use confdoc_core::{DocFormat, GenerateResult, PreviewFile};
pub use generator::{Generator, MarkdownOptions};
pub use page::PageRenderer;
