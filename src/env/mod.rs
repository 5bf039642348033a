//! Env-file store
//!
//! Reads an on-disk `KEY=VALUE` file into an ordered mapping and writes a
//! mapping back out, replacing the file:
//! - `loader`: verbatim `KEY=VALUE` parsing, quoted values through `dotenvy`
//! - `writer`: writability checks, then an atomic replace of the file

pub mod loader;
pub mod writer;

use indexmap::IndexMap;

pub use loader::{load, parse};
pub use writer::{render, save};

/// Variable name to value, in insertion order.
pub type EnvMap = IndexMap<String, String>;
