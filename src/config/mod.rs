//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → SubdomainConfig (validated, immutable)
//!     → shared via ConfigHandle (atomic Arc swap) to middleware
//!
//! On reload:
//!     loader.rs loads new config
//!     → validation.rs validates
//!     → ConfigHandle::replace swaps the snapshot
//!     → new requests observe the new config
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require full replace
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod handle;
pub mod loader;
pub mod schema;
pub mod validation;

pub use handle::ConfigHandle;
pub use loader::{load_config, parse_config, ConfigError};
pub use schema::{RoutingConfig, SiteConfig, SubdomainConfig, UrlsConfig};
pub use validation::{validate_config, ValidationError};
