//! Shared fixtures for integration tests.

use axum_subdomains::{PathResolver, SubdomainConfig, UrlconfMap};

/// Config with the example.com site and the usual URLconf mapping:
/// apex and `www` go to marketing, `api` to the api table.
#[allow(dead_code)]
pub fn example_config() -> SubdomainConfig {
    let mut config = site_config("example.com");
    config.routing.urlconfs = Some(
        [
            (None, "urls.marketing".to_string()),
            (Some("www".to_string()), "urls.marketing".to_string()),
            (Some("api".to_string()), "urls.api".to_string()),
        ]
        .into_iter()
        .collect::<UrlconfMap>(),
    );
    config
}

/// Config with a site domain and no URLconf mapping.
#[allow(dead_code)]
pub fn site_config(domain: &str) -> SubdomainConfig {
    let mut config = SubdomainConfig::default();
    config.site.domain = Some(domain.to_string());
    config
}

/// Dispatcher stand-in over three routing tables: marketing knows
/// `home`, the api table knows `home` and `view`, and the default
/// table knows both.
#[allow(dead_code)]
pub struct TestResolver;

impl PathResolver for TestResolver {
    fn resolve_path(
        &self,
        view_name: &str,
        urlconf: Option<&str>,
        _args: &[&str],
    ) -> Option<String> {
        match (urlconf, view_name) {
            (Some("urls.marketing"), "home") => Some("/".to_string()),
            (Some("urls.api"), "home") => Some("/".to_string()),
            (Some("urls.api"), "view") => Some("/view/".to_string()),
            (None, "home") => Some("/".to_string()),
            (None, "view") => Some("/view/".to_string()),
            _ => None,
        }
    }
}
