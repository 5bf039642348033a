use std::fmt::Display;
use std::path::PathBuf;
use thiserror::Error;

/// The part of the filesystem that refused a write.
#[derive(Debug, Clone, PartialEq)]
pub enum WriteTarget {
    /// The env file is missing and its directory cannot receive a new file.
    Directory(PathBuf),
    /// The env file exists but cannot be opened for writing.
    File(PathBuf),
}

impl Display for WriteTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteTarget::Directory(dir) => write!(
                f,
                "The env file is not present and the directory `{}` is not writeable!",
                dir.display()
            ),
            WriteTarget::File(file) => {
                write!(f, "The env file `{}` is not writeable!", file.display())
            }
        }
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}.")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse JSON manifest. Original error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Failed to parse YAML manifest. Original error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Prompt failed. Original error: {0}")]
    DialoguerError(#[from] dialoguer::Error),

    /// Unknown builder option, or a non-boolean value for a boolean option.
    #[error("Config option `{key}` is invalid. {reason}")]
    ConfigurationError { key: String, reason: String },

    /// A question record without a `name` or `prompt`.
    #[error("Question at index {index} is missing the required `{field}` property.")]
    MissingQuestionField { index: usize, field: String },

    /// A required question went unanswered for every allowed attempt.
    #[error("Failed after asking for `{name}` {attempts} time{}", plural_suffix(.attempts))]
    AskFailed { name: String, attempts: usize },

    #[error("{0}")]
    NotWritable(WriteTarget),

    #[error("No manifest found in '{project_dir}'. Tried: {manifest_files}.")]
    ManifestNotFound { project_dir: String, manifest_files: String },

    #[error("Invalid manifest: {0}.")]
    ManifestInvalid(String),
}

fn plural_suffix(count: &usize) -> &'static str {
    if *count == 1 {
        ""
    } else {
        "s"
    }
}

impl Error {
    pub(crate) fn configuration(key: &str, reason: &str) -> Self {
        Error::ConfigurationError { key: key.to_string(), reason: reason.to_string() }
    }
}

/// Convenience type alias for Results with the crate error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(crate::constants::exit_codes::FAILURE);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ask_failed_pluralizes_attempts() {
        let err = Error::AskFailed { name: "name".into(), attempts: 3 };
        assert_eq!(err.to_string(), "Failed after asking for `name` 3 times");

        let err = Error::AskFailed { name: "name".into(), attempts: 1 };
        assert_eq!(err.to_string(), "Failed after asking for `name` 1 time");
    }

    #[test]
    fn not_writable_names_the_target() {
        let err = Error::NotWritable(WriteTarget::Directory(PathBuf::from("/nope")));
        assert_eq!(
            err.to_string(),
            "The env file is not present and the directory `/nope` is not writeable!"
        );

        let err = Error::NotWritable(WriteTarget::File(PathBuf::from("/nope/.env")));
        assert_eq!(err.to_string(), "The env file `/nope/.env` is not writeable!");
    }

    #[test]
    fn configuration_error_mentions_key() {
        let err = Error::configuration("loadEnv", "This should be a boolean value.");
        assert_eq!(
            err.to_string(),
            "Config option `loadEnv` is invalid. This should be a boolean value."
        );
    }
}
