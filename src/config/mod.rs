//! Configuration handling for envbuilder
//!
//! This module contains the configuration system components:
//! - `question`: Question definitions and the ordered registry
//! - `options`: Builder toggles with eager validation
//! - `loader`: Project manifest discovery and parsing

pub mod loader;
pub mod options;
pub mod question;

// Re-export commonly used types for convenience
pub use loader::Manifest;
pub use options::BuilderConfig;
pub use question::{Question, QuestionRegistry};
