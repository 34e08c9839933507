//! Configuration file support for supply-trace.
//!
//! Provides YAML-based configuration through `supply-trace.config.yml` files,
//! including data structures, file loading, validation, and merging with
//! command-line flags.

use anyhow::{bail, Context};
use reqwest::Url;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use std::str::FromStr;

use crate::application::dto::RenderFormat;
use crate::shared::error::TraceConsoleError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "supply-trace.config.yml";

/// Backend used when neither the CLI nor a config file names one.
pub const DEFAULT_API_BASE: &str = "https://neo4j-poc-backend-69d2dh8rr0ee.uaimmiau.deno.net";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_base: Option<String>,
    pub admin_controls: Option<bool>,
    pub format: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Values supplied on the command line; `None` means "not given".
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub api_base: Option<String>,
    pub admin_controls: bool,
    pub format: Option<RenderFormat>,
}

/// Effective settings after merging CLI > config file > defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsoleSettings {
    pub api_base: String,
    pub admin_controls: bool,
    pub format: RenderFormat,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content =
        std::fs::read_to_string(path).map_err(|e| TraceConsoleError::ConfigReadError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref api_base) = config.api_base {
        normalize_api_base(api_base)?;
    }
    if let Some(ref format) = config.format {
        if RenderFormat::from_str(format).is_err() {
            bail!(TraceConsoleError::UnknownFormat {
                value: format.clone()
            });
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        tracing::warn!("Unknown config field '{}' will be ignored.", key);
    }
}

/// Checks that `raw` is an absolute http(s) URL and strips trailing slashes.
pub fn normalize_api_base(raw: &str) -> std::result::Result<String, TraceConsoleError> {
    let trimmed = raw.trim();
    let invalid = |reason: &str| TraceConsoleError::InvalidApiBase {
        url: trimmed.to_string(),
        reason: reason.to_string(),
    };

    let url = Url::parse(trimmed).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("Only http and https are supported"));
    }
    if url.host_str().is_none() {
        return Err(invalid("Missing host"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("Query strings and fragments are not allowed"));
    }

    Ok(trimmed.trim_end_matches('/').to_string())
}

/// Merges CLI flags over an optional config file over the defaults.
pub fn resolve_settings(
    overrides: &CliOverrides,
    config: Option<&ConfigFile>,
) -> Result<ConsoleSettings> {
    let raw_base = overrides
        .api_base
        .as_deref()
        .or_else(|| config.and_then(|c| c.api_base.as_deref()))
        .unwrap_or(DEFAULT_API_BASE);
    let api_base = normalize_api_base(raw_base)?;

    let admin_controls =
        overrides.admin_controls || config.and_then(|c| c.admin_controls).unwrap_or(false);

    let format = match overrides.format {
        Some(format) => format,
        None => match config.and_then(|c| c.format.as_deref()) {
            Some(raw) => RenderFormat::from_str(raw).map_err(|_| {
                TraceConsoleError::UnknownFormat {
                    value: raw.to_string(),
                }
            })?,
            None => RenderFormat::default(),
        },
    };

    Ok(ConsoleSettings {
        api_base,
        admin_controls,
        format,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_valid_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(
            &config_path,
            r#"
api_base: http://localhost:8000/
admin_controls: true
format: json
"#,
        )
        .unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.api_base.as_deref(), Some("http://localhost:8000/"));
        assert_eq!(config.admin_controls, Some(true));
        assert_eq!(config.format.as_deref(), Some("json"));
    }

    #[test]
    fn test_discover_config_found() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "admin_controls: false\n").unwrap();

        let config = discover_config(dir.path()).unwrap();
        assert_eq!(config.unwrap().admin_controls, Some(false));
    }

    #[test]
    fn test_discover_config_not_found() {
        let dir = TempDir::new().unwrap();
        let config = discover_config(dir.path()).unwrap();
        assert!(config.is_none());
    }

    #[test]
    fn test_load_config_missing_file() {
        let result = load_config_from_path(Path::new("/nonexistent/config.yml"));
        assert!(result.is_err());
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to read config file"));
    }

    #[test]
    fn test_load_config_parse_error() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("bad.yml");
        fs::write(&config_path, "invalid: yaml: [[[broken").unwrap();

        let result = load_config_from_path(&config_path);
        let err = format!("{}", result.unwrap_err());
        assert!(err.contains("Failed to parse config file"));
    }

    #[test]
    fn test_invalid_api_base_in_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "api_base: ftp://example.com\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Invalid API base URL"));
    }

    #[test]
    fn test_invalid_format_in_config() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: xml\n").unwrap();

        let err = format!("{}", load_config_from_path(&config_path).unwrap_err());
        assert!(err.contains("Unknown output format"));
    }

    #[test]
    fn test_unknown_fields_captured() {
        let dir = TempDir::new().unwrap();
        let config_path = dir.path().join("config.yml");
        fs::write(&config_path, "format: text\npoll_interval: 5\n").unwrap();

        let config = load_config_from_path(&config_path).unwrap();
        assert_eq!(config.unknown_fields.len(), 1);
        assert!(config.unknown_fields.contains_key("poll_interval"));
    }

    #[test]
    fn test_normalize_api_base() {
        assert_eq!(
            normalize_api_base(" https://backend.example.com/ ").unwrap(),
            "https://backend.example.com"
        );
        assert_eq!(
            normalize_api_base("http://127.0.0.1:8000").unwrap(),
            "http://127.0.0.1:8000"
        );
        assert!(normalize_api_base("backend.example.com").is_err());
        assert!(normalize_api_base("file:///tmp/api").is_err());
        assert!(normalize_api_base("http://host/?x=1").is_err());
    }

    #[test]
    fn test_resolve_settings_defaults() {
        let settings = resolve_settings(&CliOverrides::default(), None).unwrap();
        assert_eq!(settings.api_base, DEFAULT_API_BASE);
        assert!(!settings.admin_controls);
        assert_eq!(settings.format, RenderFormat::Text);
    }

    #[test]
    fn test_resolve_settings_cli_wins_over_config() {
        let config = ConfigFile {
            api_base: Some("http://config-host:1".to_string()),
            admin_controls: Some(true),
            format: Some("json".to_string()),
            unknown_fields: HashMap::new(),
        };
        let overrides = CliOverrides {
            api_base: Some("http://cli-host:2/".to_string()),
            admin_controls: false,
            format: Some(RenderFormat::Text),
        };

        let settings = resolve_settings(&overrides, Some(&config)).unwrap();
        assert_eq!(settings.api_base, "http://cli-host:2");
        // the flag can only switch admin controls on
        assert!(settings.admin_controls);
        assert_eq!(settings.format, RenderFormat::Text);
    }

    #[test]
    fn test_resolve_settings_from_config() {
        let config = ConfigFile {
            api_base: Some("http://config-host:1/".to_string()),
            admin_controls: None,
            format: Some("json".to_string()),
            unknown_fields: HashMap::new(),
        };
        let settings = resolve_settings(&CliOverrides::default(), Some(&config)).unwrap();
        assert_eq!(settings.api_base, "http://config-host:1");
        assert!(!settings.admin_controls);
        assert_eq!(settings.format, RenderFormat::Json);
    }

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();
        assert!(config.api_base.is_none());
        assert!(config.admin_controls.is_none());
        assert!(config.format.is_none());
        assert!(config.unknown_fields.is_empty());
    }
}
