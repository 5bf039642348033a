use crate::constants::verbosity;
use clap::{Parser, ValueEnum};
use log::LevelFilter;
use std::fmt::Display;
use std::path::PathBuf;

/// Where prompts are shown and answers are read.
#[derive(Debug, Clone, ValueEnum, Copy, PartialEq)]
#[value(rename_all = "lowercase")]
pub enum IoBackend {
    /// Interactive terminal prompts.
    Terminal,
    /// Plain lines over stdin/stdout, for piped input.
    Stdio,
}

impl Display for IoBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            IoBackend::Terminal => "terminal",
            IoBackend::Stdio => "stdio",
        };
        write!(f, "{s}")
    }
}

/// CLI arguments for envbuilder.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Project directory holding the manifest.
    #[arg(value_name = "PROJECT_DIR", default_value = ".")]
    pub project_dir: PathBuf,

    /// Manifest file to use instead of searching the project directory.
    #[arg(short, long, value_name = "PATH")]
    pub manifest: Option<PathBuf>,

    /// Env file to build, overriding the manifest's `envFile`.
    #[arg(short, long = "env-file", value_name = "PATH")]
    pub env_file: Option<PathBuf>,

    /// Overwrite an existing env file.
    #[arg(short, long)]
    pub force: bool,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Prompt backend.
    #[arg(long, value_enum, default_value_t = IoBackend::Terminal)]
    pub io: IoBackend,
}

/// Parse command line arguments, exiting with usage on error.
pub fn get_args() -> Args {
    Args::parse()
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}
