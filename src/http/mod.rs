//! HTTP-facing surface of the crate.
//!
//! # Data Flow
//! ```text
//! Incoming request
//!     → middleware.rs (extract subdomain, resolve URLconf)
//!     → request.rs extensions (Subdomain, UrlconfOverride)
//!     → handler code reads annotations via SubdomainRequestExt
//! ```

pub mod middleware;
pub mod request;

pub use middleware::{subdomain_middleware, subdomain_routing_middleware};
pub use request::{host_without_port, Subdomain, SubdomainRequestExt, UrlconfOverride};
