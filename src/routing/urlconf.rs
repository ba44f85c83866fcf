//! Subdomain → URLconf resolution.
//!
//! # Responsibilities
//! - Store the configured subdomain → URLconf identifier mapping
//! - Look up the URLconf override for a derived subdomain
//! - Distinguish "no mapping configured" from "subdomain not mapped"
//!
//! # Design Decisions
//! - The apex (no subdomain) is a first-class key, spelled `"@"` in
//!   config files
//! - Keys are lower-cased on construction to line up with the
//!   lower-cased extractor output
//! - A missing mapping is a configuration smell and yields a
//!   diagnostic; a missing key is the normal wildcard fall-through

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use crate::routing::Diagnostic;

/// TOML spelling of the apex key.
const APEX_KEY: &str = "@";

/// Mapping from subdomain (or apex, keyed `None`) to a URLconf
/// identifier. Identifiers are opaque to this crate; the surrounding
/// dispatcher interprets them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "BTreeMap<String, String>", into = "BTreeMap<String, String>")]
pub struct UrlconfMap {
    entries: HashMap<Option<String>, String>,
}

impl UrlconfMap {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert an entry. `None` is the apex key. Subdomain keys are
    /// lower-cased.
    pub fn insert(&mut self, subdomain: Option<String>, urlconf: String) {
        self.entries
            .insert(subdomain.map(|s| s.to_lowercase()), urlconf);
    }

    /// Look up the URLconf for a subdomain (`None` = apex).
    pub fn get(&self, subdomain: Option<&str>) -> Option<&str> {
        self.entries
            .get(&subdomain.map(str::to_owned))
            .map(String::as_str)
    }

    /// Iterate over all entries.
    pub fn entries(&self) -> impl Iterator<Item = (&Option<String>, &String)> {
        self.entries.iter()
    }
}

impl From<BTreeMap<String, String>> for UrlconfMap {
    fn from(raw: BTreeMap<String, String>) -> Self {
        let mut map = Self::new();
        for (key, urlconf) in raw {
            let subdomain = if key == APEX_KEY { None } else { Some(key) };
            map.insert(subdomain, urlconf);
        }
        map
    }
}

impl From<UrlconfMap> for BTreeMap<String, String> {
    fn from(map: UrlconfMap) -> Self {
        map.entries
            .into_iter()
            .map(|(subdomain, urlconf)| {
                (subdomain.unwrap_or_else(|| APEX_KEY.to_string()), urlconf)
            })
            .collect()
    }
}

impl FromIterator<(Option<String>, String)> for UrlconfMap {
    fn from_iter<I: IntoIterator<Item = (Option<String>, String)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (subdomain, urlconf) in iter {
            map.insert(subdomain, urlconf);
        }
        map
    }
}

/// Result of URLconf resolution: the selected identifier (or `None`
/// to fall through to the default routing table) plus an optional
/// diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution<'a> {
    /// URLconf override, `None` when dispatch should keep its default.
    pub urlconf: Option<&'a str>,

    /// Set when no mapping is configured at all.
    pub diagnostic: Option<Diagnostic>,
}

/// Select the URLconf override for `subdomain`.
///
/// With no mapping configured this falls through to the default table
/// and reports [`Diagnostic::UrlconfMapMissing`]. A mapping that lacks
/// the key falls through silently; that is the expected wildcard path.
pub fn resolve_urlconf<'a>(
    subdomain: Option<&str>,
    mapping: Option<&'a UrlconfMap>,
) -> Resolution<'a> {
    match mapping {
        None => Resolution {
            urlconf: None,
            diagnostic: Some(Diagnostic::UrlconfMapMissing),
        },
        Some(map) => Resolution {
            urlconf: map.get(subdomain),
            diagnostic: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn example_map() -> UrlconfMap {
        [
            (None, "urls.marketing".to_string()),
            (Some("www".to_string()), "urls.marketing".to_string()),
            (Some("api".to_string()), "urls.api".to_string()),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_lookup_hits() {
        let map = example_map();
        let apex = resolve_urlconf(None, Some(&map));
        assert_eq!(apex.urlconf, Some("urls.marketing"));
        assert_eq!(apex.diagnostic, None);

        assert_eq!(
            resolve_urlconf(Some("www"), Some(&map)).urlconf,
            Some("urls.marketing")
        );
        assert_eq!(
            resolve_urlconf(Some("api"), Some(&map)).urlconf,
            Some("urls.api")
        );
    }

    #[test]
    fn test_unmapped_subdomain_falls_through_silently() {
        let map = example_map();
        let resolution = resolve_urlconf(Some("subdomain"), Some(&map));
        assert_eq!(resolution.urlconf, None);
        assert_eq!(resolution.diagnostic, None);
    }

    #[test]
    fn test_missing_mapping_warns() {
        let resolution = resolve_urlconf(Some("api"), None);
        assert_eq!(resolution.urlconf, None);
        assert_eq!(resolution.diagnostic, Some(Diagnostic::UrlconfMapMissing));
    }

    #[test]
    fn test_keys_are_lowercased() {
        let mut map = UrlconfMap::new();
        map.insert(Some("API".to_string()), "urls.api".to_string());
        assert_eq!(map.get(Some("api")), Some("urls.api"));
    }

    #[test]
    fn test_apex_key_in_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            urlconfs: UrlconfMap,
        }

        let wrapper: Wrapper = toml::from_str(
            r#"
            [urlconfs]
            "@" = "urls.marketing"
            api = "urls.api"
            "#,
        )
        .unwrap();

        assert_eq!(wrapper.urlconfs.get(None), Some("urls.marketing"));
        assert_eq!(wrapper.urlconfs.get(Some("api")), Some("urls.api"));
        assert_eq!(wrapper.urlconfs.get(Some("wildcard")), None);
    }
}
