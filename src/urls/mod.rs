//! Absolute URL construction.
//!
//! # Data Flow
//! ```text
//! reverse(view_name, subdomain)
//!     → routing::urlconf (subdomain → URLconf)
//!     → PathResolver (name → path, external dispatcher)
//!     → join.rs (scheme + host + path)
//!     → "https://api.example.com/view/"
//! ```

pub mod join;
pub mod reverse;

pub use join::urljoin;
pub use reverse::{reverse, PathResolver, ReverseError, ReverseOpts};
