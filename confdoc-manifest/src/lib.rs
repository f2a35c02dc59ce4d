// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! YAML schema loading for the confdoc generator.
//!
//! Two kinds of sources are read here:
//!
//! - type files (`types: { <name>: <declaration> }`), merged into one
//!   [`TypeRegistry`]
//! - the root config schema (`name`, `description`, `sections`), read into a
//!   [`RawConfig`]
//!
//! Nothing is resolved at this stage; declarations keep their raw type names
//! and lazily-decoded property blocks.

mod config;
mod error;
mod raw;
mod registry;
mod settings;

pub use error::{Error, Result, SourceContext};
pub use raw::{RawConfig, RawExample, RawProperties, RawSection, RawTypeDecl};
pub use registry::{TypeRegistry, type_files};
pub use settings::{PathSettings, RenderSettings, SETTINGS_FILE, Settings};
