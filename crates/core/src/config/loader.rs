//! Configuration file loading

use super::schema::ConfigSchema;
use crate::error::{Error, ErrorCode, Result};
use std::path::Path;

/// Configuration wrapper
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Parsed configuration values
    pub schema: ConfigSchema,
    /// File the values were read from, if any
    pub path: Option<String>,
}

impl Config {
    /// Load configuration from a file path or use defaults
    ///
    /// An explicit path must exist; without one the standard locations are
    /// searched and defaults are used when none is present.
    pub fn load(path: Option<&str>) -> Result<Self> {
        if let Some(explicit) = path {
            if !Path::new(explicit).exists() {
                return Err(Error::config_not_found(explicit));
            }
        }

        let config_path = path.map(String::from).or_else(find_config_file);

        let schema = if let Some(ref p) = config_path {
            load_config_file(p)?
        } else {
            ConfigSchema::default()
        };

        Ok(Self {
            schema,
            path: config_path,
        })
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let schema = toml::from_str(content)?;
        Ok(Self { schema, path: None })
    }
}

/// Find configuration file in standard locations
fn find_config_file() -> Option<String> {
    let candidates = [".ferias.toml", "ferias.toml", ".config/ferias.toml"];

    candidates
        .into_iter()
        .find(|candidate| Path::new(candidate).exists())
        .map(String::from)
}

/// Load and parse a TOML configuration file
fn load_config_file(path: &str) -> Result<ConfigSchema> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        Error::new(ErrorCode::ConfigError, format!("Failed to read config file {path}"))
            .with_source(e)
    })?;

    toml::from_str(&content).map_err(|e| {
        Error::new(
            ErrorCode::ConfigParseError,
            format!("Failed to parse config file {path}: {e}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.path.is_none());
        assert_eq!(config.schema.geocoding.timeout_secs, 10);
    }

    #[test]
    fn test_config_missing_explicit_file() {
        let err = Config::load(Some("/definitely/not/here/ferias.toml")).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigNotFound);
    }

    #[test]
    fn test_config_load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[geocoding]\ntimeout_secs = 4\n\n[site]\nbase_url = \"http://localhost:3000\"").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let config = Config::load(Some(&path)).unwrap();

        assert_eq!(config.schema.geocoding.timeout_secs, 4);
        assert_eq!(config.schema.site.base_url, "http://localhost:3000");
        assert_eq!(config.path.as_deref(), Some(path.as_str()));
    }

    #[test]
    fn test_config_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[geocoding\ntimeout_secs = ").unwrap();

        let path = file.path().to_string_lossy().to_string();
        let err = Config::load(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigParseError);
    }
}
