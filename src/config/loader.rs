//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::SubdomainConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<SubdomainConfig, ConfigError> {
    let config: SubdomainConfig = toml::from_str(content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<SubdomainConfig, ConfigError> {
    parse_config(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_config() {
        let config = parse_config(
            r#"
            [site]
            domain = "example.com"

            [routing]
            remove_www = false

            [routing.urlconfs]
            "@" = "urls.marketing"
            www = "urls.marketing"
            api = "urls.api"

            [urls]
            default_scheme = "https"
            "#,
        )
        .unwrap();

        assert_eq!(config.site_domain(), Some("example.com"));
        assert!(!config.routing.remove_www);
        assert_eq!(config.urls.default_scheme, "https");

        let urlconfs = config.routing.urlconfs.unwrap();
        assert_eq!(urlconfs.get(None), Some("urls.marketing"));
        assert_eq!(urlconfs.get(Some("api")), Some("urls.api"));
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            parse_config("site = 3"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_validation_error() {
        let result = parse_config(
            r#"
            [site]
            domain = "http://example.com"
            "#,
        );
        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_missing_file() {
        let result = load_config(Path::new("/nonexistent/subdomains.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
