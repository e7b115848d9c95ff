//! Configuration management

use crate::domain::MarkupDialect;
use crate::error::{LsqError, Result};
use crate::infrastructure::edn;
use edn_format::Value;
use std::fs;
use std::path::Path;

/// The vault settings lsq cares about, read from Logseq's `config.edn`.
///
/// Keys missing from the file keep their defaults; every other key in the
/// file is ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `:meta/version`
    pub version: i64,

    /// `:preferred-format`
    pub preferred_format: MarkupDialect,

    /// `:journal/file-name-format`
    pub file_name_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            version: 1,
            preferred_format: MarkupDialect::Markdown,
            file_name_format: "yyyy_MM_dd".to_string(),
        }
    }
}

impl Config {
    /// Parse config.edn contents, merging the keys it sets over the defaults
    pub fn from_edn_str(contents: &str) -> Result<Self> {
        let value = edn::parse(contents)?;
        Self::from_edn(&value)
    }

    fn from_edn(value: &Value) -> Result<Self> {
        let Value::Map(entries) = value else {
            return Err(LsqError::Config(
                "config.edn must contain a map".to_string(),
            ));
        };

        let mut config = Config::default();
        for (key, value) in entries {
            let Value::Keyword(key) = key else {
                continue;
            };
            match (key.namespace(), key.name()) {
                (Some("meta"), "version") => {
                    config.version = integer_value(":meta/version", value)?;
                }
                (None, "preferred-format") => {
                    let format = text_value(":preferred-format", value)?;
                    config.preferred_format = MarkupDialect::from_config_value(format);
                }
                (Some("journal"), "file-name-format") => {
                    config.file_name_format =
                        text_value(":journal/file-name-format", value)?.to_string();
                }
                _ => {}
            }
        }

        Ok(config)
    }

    /// Load config from a file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            LsqError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        Self::from_edn_str(&contents)
    }

    /// Load config, falling back to the defaults when the file is missing or
    /// malformed. The error is returned alongside so the caller can report it.
    pub fn load_or_default(path: &Path) -> (Self, Option<LsqError>) {
        match Self::load(path) {
            Ok(config) => (config, None),
            Err(e) => (Config::default(), Some(e)),
        }
    }
}

fn integer_value(key: &str, value: &Value) -> Result<i64> {
    match value {
        Value::Integer(n) => Ok(*n),
        _ => Err(LsqError::Config(format!("{} must be an integer", key))),
    }
}

/// Strings and keywords are both accepted (`"Org"` or `:org`)
fn text_value<'a>(key: &str, value: &'a Value) -> Result<&'a str> {
    match value {
        Value::String(s) => Ok(s.as_str()),
        Value::Keyword(k) => Ok(k.name()),
        _ => Err(LsqError::Config(format!("{} must be a string", key))),
    }
}
