//! Subdomain extraction.
//!
//! # Responsibilities
//! - Derive the subdomain from a request host and the site domain
//! - Match case-insensitively (per HTTP spec)
//! - Keep multi-label subdomains as a single dotted string
//!
//! # Design Decisions
//! - Pure function: no config reads, no logging, no request types
//! - `remove_www` strips the `www.` label from the *site domain* side
//!   before comparison, so with domain `www.example.com` and stripping
//!   enabled, host `subdomain.www.example.com` yields `subdomain.www`
//! - A host outside the site domain is not an error: it yields no
//!   subdomain plus a `HostMismatch` diagnostic for the caller to log

use crate::routing::Diagnostic;

/// Result of subdomain extraction: the derived subdomain (or `None`
/// for the apex/bare domain) plus an optional diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Lower-cased subdomain, `None` when the host is the bare domain
    /// or does not match it at all.
    pub subdomain: Option<String>,

    /// Set when the host does not match the configured domain.
    pub diagnostic: Option<Diagnostic>,
}

impl Extraction {
    fn apex() -> Self {
        Self {
            subdomain: None,
            diagnostic: None,
        }
    }

    fn subdomain(subdomain: String) -> Self {
        Self {
            subdomain: Some(subdomain),
            diagnostic: None,
        }
    }

    fn mismatch(host: String, domain: String) -> Self {
        Self {
            subdomain: None,
            diagnostic: Some(Diagnostic::HostMismatch { host, domain }),
        }
    }
}

/// Derive the subdomain of `host` relative to `site_domain`.
///
/// Both inputs are compared lower-cased. With `remove_www` set, a
/// leading `www.` label is dropped from `site_domain` before the
/// comparison. An empty or non-matching host yields no subdomain and
/// a [`Diagnostic::HostMismatch`].
pub fn extract_subdomain(host: &str, site_domain: &str, remove_www: bool) -> Extraction {
    let host = host.to_lowercase();
    let mut domain = site_domain.to_lowercase();

    if remove_www {
        if let Some(rest) = domain.strip_prefix("www.") {
            domain = rest.to_string();
        }
    }

    if host == domain {
        return Extraction::apex();
    }

    match host.strip_suffix(&format!(".{domain}")) {
        Some(prefix) if !prefix.is_empty() => Extraction::subdomain(prefix.to_string()),
        _ => Extraction::mismatch(host, domain),
    }
}
