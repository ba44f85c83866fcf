//! Shared configuration snapshots.
//!
//! # Responsibilities
//! - Hand out immutable config snapshots to request handling code
//! - Swap in a replacement config atomically (reload, test overrides)
//!
//! # Design Decisions
//! - Config is immutable once loaded; changes require a full replace
//! - Readers never block: each request loads one `Arc` snapshot and
//!   observes a single consistent config for its whole lifetime

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::config::schema::SubdomainConfig;

/// Cloneable handle to the process-wide subdomain configuration.
#[derive(Clone, Debug)]
pub struct ConfigHandle {
    inner: Arc<ArcSwap<SubdomainConfig>>,
}

impl ConfigHandle {
    /// Create a handle around an initial configuration.
    pub fn new(config: SubdomainConfig) -> Self {
        Self {
            inner: Arc::new(ArcSwap::from_pointee(config)),
        }
    }

    /// Load the current snapshot.
    pub fn snapshot(&self) -> Arc<SubdomainConfig> {
        self.inner.load_full()
    }

    /// Atomically replace the configuration. In-flight requests keep
    /// the snapshot they already loaded.
    pub fn replace(&self, config: SubdomainConfig) {
        self.inner.store(Arc::new(config));
    }
}

impl Default for ConfigHandle {
    fn default() -> Self {
        Self::new(SubdomainConfig::default())
    }
}
