//! Request annotations and host handling.
//!
//! # Responsibilities
//! - Define the extension types the middleware attaches to requests
//! - Give handler code ergonomic access to those annotations
//! - Normalize the Host header (drop the port) before extraction

use axum::body::Body;
use axum::http::Request;

/// Subdomain annotation attached to a request by the middleware.
///
/// `Subdomain(None)` means the request targets the apex/bare domain
/// (or an unmatched host). The extension is absent entirely when the
/// site domain is unconfigured and annotation was skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subdomain(pub Option<String>);

impl Subdomain {
    /// The subdomain as a borrowed string, `None` for the apex.
    pub fn as_deref(&self) -> Option<&str> {
        self.0.as_deref()
    }
}

/// URLconf override attached by the routing middleware when the
/// subdomain maps to a non-default routing table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlconfOverride(pub String);

/// Accessors for the subdomain annotations on a request.
pub trait SubdomainRequestExt {
    /// The annotated subdomain, `None` for the apex or when the
    /// request was never annotated.
    fn subdomain(&self) -> Option<&str>;

    /// The URLconf override selected for this request, if any.
    fn urlconf_override(&self) -> Option<&str>;
}

impl SubdomainRequestExt for Request<Body> {
    fn subdomain(&self) -> Option<&str> {
        self.extensions()
            .get::<Subdomain>()
            .and_then(Subdomain::as_deref)
    }

    fn urlconf_override(&self) -> Option<&str> {
        self.extensions()
            .get::<UrlconfOverride>()
            .map(|o| o.0.as_str())
    }
}

/// Strip the port from a Host header value. Handles both `host:port`
/// and bracketed IPv6 (`[::1]:8080`) authorities.
pub fn host_without_port(host: &str) -> &str {
    if let Some(rest) = host.strip_prefix('[') {
        return rest.split(']').next().unwrap_or(rest);
    }
    host.split(':').next().unwrap_or(host)
}
