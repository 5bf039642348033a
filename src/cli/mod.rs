pub mod args;
pub mod runner;

pub use args::{get_args, get_log_level_from_verbose, Args, IoBackend};
pub use runner::{run, RunOutcome, Runner};
