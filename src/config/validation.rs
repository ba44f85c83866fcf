//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check the site domain is a plain host name, not a URL
//! - Check URLconf mapping entries are well formed
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: SubdomainConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use thiserror::Error;

use crate::config::schema::SubdomainConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("site.domain must not be empty")]
    EmptySiteDomain,

    #[error("site.domain `{0}` must not include a scheme")]
    SchemeInSiteDomain(String),

    #[error("site.domain `{0}` is not a valid host name")]
    MalformedSiteDomain(String),

    #[error("urls.default_scheme must not be empty")]
    EmptyDefaultScheme,

    #[error("urls.default_scheme `{0}` must not contain `/`")]
    MalformedDefaultScheme(String),

    #[error("URLconf identifier for subdomain `{0}` is empty")]
    EmptyUrlconf(String),

    #[error("subdomain key `{0}` is not a valid label sequence")]
    MalformedSubdomainKey(String),
}

/// Check a parsed configuration for semantic problems.
pub fn validate_config(config: &SubdomainConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Some(domain) = &config.site.domain {
        if domain.is_empty() {
            errors.push(ValidationError::EmptySiteDomain);
        } else if domain.contains("://") {
            errors.push(ValidationError::SchemeInSiteDomain(domain.clone()));
        } else if domain.starts_with('.')
            || domain.ends_with('.')
            || domain.chars().any(char::is_whitespace)
        {
            errors.push(ValidationError::MalformedSiteDomain(domain.clone()));
        }
    }

    let scheme = &config.urls.default_scheme;
    if scheme.is_empty() {
        errors.push(ValidationError::EmptyDefaultScheme);
    } else if scheme.contains('/') {
        errors.push(ValidationError::MalformedDefaultScheme(scheme.clone()));
    }

    if let Some(urlconfs) = &config.routing.urlconfs {
        for (subdomain, urlconf) in urlconfs.entries() {
            let key = subdomain.as_deref().unwrap_or("@");
            if urlconf.is_empty() {
                errors.push(ValidationError::EmptyUrlconf(key.to_string()));
            }
            if let Some(sub) = subdomain {
                if sub.is_empty()
                    || sub.starts_with('.')
                    || sub.ends_with('.')
                    || sub.chars().any(char::is_whitespace)
                {
                    errors.push(ValidationError::MalformedSubdomainKey(sub.clone()));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::urlconf::UrlconfMap;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&SubdomainConfig::default()).is_ok());
    }

    #[test]
    fn test_rejects_domain_with_scheme() {
        let mut config = SubdomainConfig::default();
        config.site.domain = Some("http://example.com".to_string());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::SchemeInSiteDomain(
                "http://example.com".to_string()
            )]
        );
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = SubdomainConfig::default();
        config.site.domain = Some(String::new());
        config.urls.default_scheme = String::new();

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptySiteDomain));
        assert!(errors.contains(&ValidationError::EmptyDefaultScheme));
    }

    #[test]
    fn test_rejects_bad_mapping_entries() {
        let mut config = SubdomainConfig::default();
        let mut map = UrlconfMap::new();
        map.insert(Some("api.".to_string()), "urls.api".to_string());
        map.insert(None, String::new());
        config.routing.urlconfs = Some(map);

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::MalformedSubdomainKey("api.".to_string())));
        assert!(errors.contains(&ValidationError::EmptyUrlconf("@".to_string())));
    }
}
