//! Builder options and their eager validation

use crate::constants::options;
use crate::error::{Error, Result};
use serde_json::Value;

/// Typed toggles controlling a builder run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuilderConfig {
    /// Emit informational messages through the prompt channel
    pub verbose: bool,
    /// Load the existing env file to seed defaults
    pub load_env: bool,
    /// Uppercase question names and loaded keys
    pub uppercase_keys: bool,
}

impl Default for BuilderConfig {
    fn default() -> Self {
        Self { verbose: false, load_env: true, uppercase_keys: false }
    }
}

impl BuilderConfig {
    /// Builds a config from `(name, value)` pairs on top of the defaults.
    pub fn from_options<'a, I>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (&'a str, &'a Value)>,
    {
        let mut config = Self::default();
        for (key, value) in pairs {
            config.set(key, value)?;
        }
        Ok(config)
    }

    /// Sets the option `key`.
    ///
    /// Unknown names and non-boolean values are rejected here rather than
    /// when the option is used.
    pub fn set(&mut self, key: &str, value: &Value) -> Result<()> {
        let field = match key {
            options::VERBOSE => &mut self.verbose,
            options::LOAD_ENV | "load_env" => &mut self.load_env,
            options::UPPERCASE_KEYS | "uppercase_keys" => &mut self.uppercase_keys,
            _ => {
                return Err(Error::configuration(key, "This is an unknown configuration option."))
            }
        };

        *field = value
            .as_bool()
            .ok_or_else(|| Error::configuration(key, "This should be a boolean value."))?;
        Ok(())
    }

    /// Applies the configured key casing to a variable name.
    pub fn normalize_key(&self, key: &str) -> String {
        if self.uppercase_keys {
            key.to_uppercase()
        } else {
            key.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults() {
        let config = BuilderConfig::default();
        assert!(!config.verbose);
        assert!(config.load_env);
        assert!(!config.uppercase_keys);
    }

    #[test]
    fn sets_known_options() {
        let (yes, no) = (json!(true), json!(false));
        let config = BuilderConfig::from_options([
            ("verbose", &yes),
            ("loadEnv", &no),
            ("uppercaseKeys", &yes),
        ])
        .unwrap();
        assert_eq!(config, BuilderConfig { verbose: true, load_env: false, uppercase_keys: true });
    }

    #[test]
    fn accepts_snake_case_aliases() {
        let mut config = BuilderConfig::default();
        config.set("load_env", &json!(false)).unwrap();
        config.set("uppercase_keys", &json!(true)).unwrap();
        assert!(!config.load_env);
        assert!(config.uppercase_keys);
    }

    #[test]
    fn rejects_non_boolean_values() {
        let mut config = BuilderConfig::default();
        for value in [json!("true"), json!(1), json!(null)] {
            let err = config.set("verbose", &value).unwrap_err();
            assert!(matches!(err, Error::ConfigurationError { ref key, .. } if key == "verbose"));
        }
        assert!(!config.verbose);
    }

    #[test]
    fn rejects_unknown_options() {
        let err = BuilderConfig::default().set("unknown", &json!("string")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Config option `unknown` is invalid. This is an unknown configuration option."
        );
    }

    #[test]
    fn normalizes_keys_when_uppercasing() {
        let config = BuilderConfig { uppercase_keys: true, ..Default::default() };
        assert_eq!(config.normalize_key("db_host"), "DB_HOST");
        assert_eq!(BuilderConfig::default().normalize_key("db_host"), "db_host");
    }
}
