//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for
//! subdomain routing. All types derive Serde traits for
//! deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::urlconf::UrlconfMap;

/// Root configuration for subdomain routing and URL reversing.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SubdomainConfig {
    /// Current site identity.
    pub site: SiteConfig,

    /// Subdomain extraction and URLconf selection settings.
    pub routing: RoutingConfig,

    /// URL construction settings.
    pub urls: UrlsConfig,
}

impl SubdomainConfig {
    /// The configured site domain, or `None` when the site section has
    /// not been filled in (the degraded, annotation-skipping mode).
    pub fn site_domain(&self) -> Option<&str> {
        self.site.domain.as_deref()
    }
}

/// Site identity configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct SiteConfig {
    /// Canonical domain for this deployment (e.g. "example.com").
    /// Unset means the site identity is not configured; subdomain
    /// annotation is skipped entirely in that case.
    pub domain: Option<String>,
}

/// Subdomain extraction and URLconf selection settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct RoutingConfig {
    /// Strip a leading `www.` label from the site domain before
    /// comparing it against request hosts.
    pub remove_www: bool,

    /// Subdomain → URLconf identifier mapping. The apex entry is keyed
    /// `"@"` in config files. Unset means subdomain routing is not
    /// configured at all; requests then always use the default table.
    pub urlconfs: Option<UrlconfMap>,
}

impl Default for RoutingConfig {
    fn default() -> Self {
        Self {
            remove_www: true,
            urlconfs: None,
        }
    }
}

/// URL construction settings.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default)]
pub struct UrlsConfig {
    /// Scheme used when a caller does not supply one (e.g. "http").
    pub default_scheme: String,
}

impl Default for UrlsConfig {
    fn default() -> Self {
        Self {
            default_scheme: "http".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SubdomainConfig::default();
        assert_eq!(config.site_domain(), None);
        assert!(config.routing.remove_www);
        assert!(config.routing.urlconfs.is_none());
        assert_eq!(config.urls.default_scheme, "http");
    }

    #[test]
    fn test_minimal_toml() {
        let config: SubdomainConfig = toml::from_str(
            r#"
            [site]
            domain = "example.com"
            "#,
        )
        .unwrap();
        assert_eq!(config.site_domain(), Some("example.com"));
        assert!(config.routing.remove_www);
        assert!(config.routing.urlconfs.is_none());
    }
}
