//! Constants used throughout envbuilder

/// Manifest file names in order of preference
pub const MANIFEST_FILENAMES: &[&str] =
    &["envbuilder.json", "envbuilder.yaml", "envbuilder.yml"];

/// Env file used when the manifest does not name one
pub const DEFAULT_ENV_FILE: &str = ".env";

/// Total attempts a required question gets before the run is aborted
pub const MAX_ASKS: usize = 3;

/// Operator-facing messages
pub mod messages {
    pub const RESPONSE_REQUIRED: &str = "A response is required...";
}

/// Builder option names as they appear in a manifest
pub mod options {
    pub const VERBOSE: &str = "verbose";
    pub const LOAD_ENV: &str = "loadEnv";
    pub const UPPERCASE_KEYS: &str = "uppercaseKeys";
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
