//! Subdomain routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request Host header
//!     → extract.rs (derive subdomain from host vs. site domain)
//!     → urlconf.rs (subdomain → URLconf identifier lookup)
//!     → Return: subdomain annotation + optional URLconf override
//! ```
//!
//! # Design Decisions
//! - Extraction and resolution are pure functions over per-call inputs
//! - Host comparison is case-insensitive; subdomains come out lowercase
//! - Misconfiguration surfaces as a `Diagnostic` value beside the
//!   result, never as an error; callers decide where to log it
//! - A missing mapping key is the expected fall-through path and
//!   produces no diagnostic at all

pub mod extract;
pub mod urlconf;

pub use extract::{extract_subdomain, Extraction};
pub use urlconf::{resolve_urlconf, Resolution, UrlconfMap};

/// A non-fatal, operator-facing warning produced during extraction or
/// URLconf resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The request host is not the site domain and not under it.
    /// Usually means the configured site domain does not match the
    /// deployment host.
    HostMismatch { host: String, domain: String },

    /// URLconf selection ran but no subdomain → URLconf mapping is
    /// configured at all.
    UrlconfMapMissing,
}

impl Diagnostic {
    /// Log this diagnostic at warn level with structured fields.
    pub fn emit(&self) {
        match self {
            Diagnostic::HostMismatch { host, domain } => {
                tracing::warn!(
                    host = %host,
                    site_domain = %domain,
                    "request host does not match the configured site domain; \
                     check the site configuration"
                );
            }
            Diagnostic::UrlconfMapMissing => {
                tracing::warn!(
                    "subdomain URL routing is active but no URLconf mapping \
                     is configured; all requests fall through to the default \
                     routing table"
                );
            }
        }
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Diagnostic::HostMismatch { host, domain } => {
                write!(f, "host `{host}` does not match site domain `{domain}`")
            }
            Diagnostic::UrlconfMapMissing => {
                write!(f, "no subdomain URLconf mapping configured")
            }
        }
    }
}
