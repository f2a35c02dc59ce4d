//! Sample configuration file output for the confdoc generator.
//!
//! Produces a single `<name>.conf` in which every property appears with its
//! documentation as `#` comments. Properties with a default are set to it;
//! the rest are left as commented placeholders.

mod generator;
mod value;

pub use generator::Generator;
pub use value::format_value;
