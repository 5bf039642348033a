//! Manifest loading and management
//!
//! A project manifest lists the questions to ask and the options for the
//! run, for example:
//!
//! ```json
//! {
//!   "envFile": ".env",
//!   "clobber": false,
//!   "loadEnv": true,
//!   "questions": [
//!     { "name": "name", "prompt": "Name?", "required": true },
//!     { "name": "age", "prompt": "Age?", "default": "18" }
//!   ]
//! }
//! ```

use crate::config::options::BuilderConfig;
use crate::config::question::{bool_like, scalar_text, Question};
use crate::constants::{DEFAULT_ENV_FILE, MANIFEST_FILENAMES};
use crate::error::{Error, Result};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

const ENV_FILE_KEY: &str = "envFile";
const CLOBBER_KEY: &str = "clobber";
const QUESTIONS_KEY: &str = "questions";
const NAME_KEY: &str = "name";
const PROMPT_KEY: &str = "prompt";
const DEFAULT_KEY: &str = "default";
const REQUIRED_KEY: &str = "required";

/// Questions and options discovered from a project manifest
#[derive(Debug, Clone)]
pub struct Manifest {
    /// Env file to build, already resolved against the manifest's directory
    pub env_file: PathBuf,
    /// Whether an existing env file may be overwritten
    pub clobber: bool,
    pub config: BuilderConfig,
    pub questions: Vec<Question>,
}

impl Manifest {
    /// Finds the first known manifest file in `project_root` and loads it.
    pub fn discover<P: AsRef<Path>>(project_root: P) -> Result<Self> {
        let project_root = project_root.as_ref();

        for manifest_file_name in MANIFEST_FILENAMES.iter() {
            let manifest_path = project_root.join(manifest_file_name);

            if manifest_path.is_file() {
                log::debug!("Using manifest {}", manifest_path.display());
                return Self::from_path(manifest_path);
            }
        }

        Err(Error::ManifestNotFound {
            project_dir: project_root.display().to_string(),
            manifest_files: MANIFEST_FILENAMES.join(", "),
        })
    }

    /// Loads the manifest at `path`, choosing the format by extension.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        let value: Value = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => serde_json::from_str(&content)?,
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content)?,
            _ => {
                return Err(Error::ManifestInvalid(format!(
                    "unsupported manifest format '{}', expected .json, .yaml or .yml",
                    path.display()
                )))
            }
        };

        let base_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Self::from_value(value, base_dir)
    }

    /// Builds a manifest from an already parsed document.
    ///
    /// Every option and question record is validated before anything is
    /// asked: unknown options fail as configuration errors and records
    /// without `name` or `prompt` fail as missing fields.
    pub fn from_value(value: Value, base_dir: &Path) -> Result<Self> {
        let Value::Object(document) = value else {
            return Err(Error::ManifestInvalid("the manifest must be an object".into()));
        };

        let mut env_file = DEFAULT_ENV_FILE.to_string();
        let mut clobber = false;
        let mut config = BuilderConfig::default();

        for (key, value) in &document {
            match key.as_str() {
                ENV_FILE_KEY => {
                    let path = value.as_str().ok_or_else(|| {
                        Error::configuration(key, "This should be a string value.")
                    })?;
                    env_file = path.to_string();
                }
                CLOBBER_KEY => {
                    clobber = value.as_bool().ok_or_else(|| {
                        Error::configuration(key, "This should be a boolean value.")
                    })?;
                }
                QUESTIONS_KEY => {}
                _ => config.set(key, value)?,
            }
        }

        let questions = parse_questions(&document)?;

        Ok(Self { env_file: resolve_env_file(base_dir, &env_file), clobber, config, questions })
    }

    /// True when the env file already exists and may not be overwritten.
    pub fn should_skip(&self) -> bool {
        !self.clobber && self.env_file.exists()
    }
}

fn parse_questions(document: &Map<String, Value>) -> Result<Vec<Question>> {
    let records = document.get(QUESTIONS_KEY).and_then(Value::as_array).ok_or_else(|| {
        Error::ManifestInvalid("`questions` must be an array of questions".into())
    })?;

    records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let fields = record.as_object().ok_or_else(|| {
                Error::ManifestInvalid(format!("question at index {index} must be an object"))
            })?;
            parse_question(index, fields)
        })
        .collect()
}

/// Reads one question record. Scalar `default` values are stringified and
/// `required` accepts bool-like values such as `1` or `"yes"`.
fn parse_question(index: usize, fields: &Map<String, Value>) -> Result<Question> {
    let text = |field: &str| -> Result<String> {
        fields.get(field).map_or(Ok(String::new()), |value| {
            scalar_text(value).ok_or_else(|| {
                Error::configuration(&field_key(index, field), "This should be a string value.")
            })
        })
    };

    let present = |field: &str| -> Result<String> {
        let value = text(field)?;
        if value.is_empty() {
            return Err(Error::MissingQuestionField { index, field: field.to_string() });
        }
        Ok(value)
    };
    let name = present(NAME_KEY)?;
    let prompt = present(PROMPT_KEY)?;

    let required = match fields.get(REQUIRED_KEY) {
        Some(value) => bool_like(value).ok_or_else(|| {
            Error::configuration(&field_key(index, REQUIRED_KEY), "This should be a boolean value.")
        })?,
        None => false,
    };

    Ok(Question::new(name, prompt).with_default(text(DEFAULT_KEY)?).required(required))
}

fn field_key(index: usize, field: &str) -> String {
    format!("{QUESTIONS_KEY}[{index}].{field}")
}

/// Resolves the configured env file against the manifest's directory.
///
/// Absolute paths are kept, `~` expands to the home directory.
pub fn resolve_env_file(base_dir: &Path, env_file: &str) -> PathBuf {
    if let Some(rest) = env_file.strip_prefix('~') {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home).join(rest.trim_start_matches(['/', '\\']));
        }
    }

    let path = Path::new(env_file);
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base_dir.join(path)
    }
}
