//! Subdomain routing and URL reversing for axum.
//!
//! Serves multiple logical sections of a site (`www`, `api`,
//! arbitrary tenant subdomains) from one application: each request's
//! Host header is reduced to a subdomain, the subdomain selects a
//! URLconf (an identifier for a routing table owned by the
//! surrounding dispatcher), and view code can build fully qualified
//! URLs that target a specific subdomain.
//!
//! # Architecture Overview
//!
//! ```text
//!   Request (Host: api.example.com)
//!        │
//!        ▼
//!   ┌──────────────────────────────┐     ┌───────────────────┐
//!   │ http::middleware             │────▶│ config::Handle    │
//!   │  subdomain_middleware        │     │ (ArcSwap snapshot)│
//!   │  subdomain_routing_middleware│     └───────────────────┘
//!   └──────────────┬───────────────┘
//!                  │ extensions: Subdomain("api"),
//!                  │             UrlconfOverride("urls.api")
//!                  ▼
//!   ┌──────────────────────────────┐
//!   │ dispatch (external)          │   view code:
//!   │ honors the URLconf override  │   urls::reverse("view",
//!   └──────────────────────────────┘     subdomain = "api")
//!                                        → "http://api.example.com/view/"
//! ```
//!
//! The crate never dispatches requests itself. It only derives the
//! subdomain, selects a URLconf identifier and builds URLs; the
//! name → path lookup stays behind the [`urls::PathResolver`] seam.

pub mod config;
pub mod http;
pub mod routing;
pub mod urls;

pub use config::{ConfigHandle, SubdomainConfig};
pub use http::{
    subdomain_middleware, subdomain_routing_middleware, Subdomain, SubdomainRequestExt,
    UrlconfOverride,
};
pub use routing::{extract_subdomain, resolve_urlconf, Diagnostic, UrlconfMap};
pub use urls::{reverse, urljoin, PathResolver, ReverseError, ReverseOpts};
