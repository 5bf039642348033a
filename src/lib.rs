/// Question/answer orchestration.
pub mod builder;

/// Handles argument parsing and the CLI workflow.
pub mod cli;

/// Questions, builder options and manifest loading.
pub mod config;

/// Constants shared across the crate.
pub mod constants;

/// Reading and writing env files.
pub mod env;

/// Defines custom error types.
pub mod error;

/// Operator interaction.
pub mod prompt;
