//! Subdomain-aware reverse URL construction.
//!
//! # Responsibilities
//! - Derive the URLconf for a target subdomain
//! - Resolve the named route through the external dispatcher seam
//! - Compose the fully qualified URL for the target subdomain
//!
//! # Design Decisions
//! - The name → path lookup belongs to the surrounding framework; it
//!   enters through the `PathResolver` trait
//! - The URLconf is always derived from the subdomain; an explicitly
//!   supplied one is rejected, whatever its value
//! - Configuration is passed in per call, never read from globals

use thiserror::Error;

use crate::config::SubdomainConfig;
use crate::routing::urlconf::resolve_urlconf;
use crate::urls::join::urljoin;

/// Name → path lookup against a routing table, owned by the
/// surrounding dispatcher.
pub trait PathResolver: Send + Sync {
    /// Resolve a route name to a path within `urlconf` (`None` means
    /// the default routing table), substituting positional `args`.
    /// Returns `None` when the name does not resolve there.
    fn resolve_path(&self, view_name: &str, urlconf: Option<&str>, args: &[&str])
        -> Option<String>;
}

/// Optional arguments to [`reverse`].
#[derive(Debug, Clone, Copy, Default)]
pub struct ReverseOpts<'a> {
    /// Target subdomain; `None` targets the apex/bare domain. Handler
    /// code typically forwards the request's [`Subdomain`] annotation
    /// here.
    ///
    /// [`Subdomain`]: crate::http::Subdomain
    pub subdomain: Option<&'a str>,

    /// Explicit URLconf. Rejected when set; the URLconf is derived
    /// from the subdomain.
    pub urlconf: Option<&'a str>,

    /// Scheme override for this one URL.
    pub scheme: Option<&'a str>,

    /// Positional arguments for the route pattern, forwarded to the
    /// resolver untouched.
    pub args: &'a [&'a str],
}

/// Errors surfaced to callers of [`reverse`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReverseError {
    /// An explicit URLconf was supplied alongside subdomain
    /// derivation.
    #[error("URLconf `{given}` cannot be supplied explicitly; it is derived from the subdomain")]
    UrlconfConflict { given: String },

    /// The named route does not exist in the selected URLconf.
    #[error("no route named `{view_name}` in URLconf `{}`", .urlconf.as_deref().unwrap_or("<default>"))]
    NoMatch {
        view_name: String,
        urlconf: Option<String>,
    },

    /// The site domain is not configured, so no host can be built.
    #[error("site domain is not configured")]
    SiteUnconfigured,
}

/// Build a fully qualified URL for `view_name` on a subdomain.
///
/// The URLconf is selected through the configured subdomain mapping
/// (an unmapped subdomain falls through to the default table), the
/// path comes from `resolver`, and the host is the subdomain joined
/// onto the configured site domain.
pub fn reverse<R>(
    resolver: &R,
    config: &SubdomainConfig,
    view_name: &str,
    opts: ReverseOpts<'_>,
) -> Result<String, ReverseError>
where
    R: PathResolver + ?Sized,
{
    if let Some(given) = opts.urlconf {
        return Err(ReverseError::UrlconfConflict {
            given: given.to_string(),
        });
    }

    let resolution = resolve_urlconf(opts.subdomain, config.routing.urlconfs.as_ref());
    if let Some(diagnostic) = &resolution.diagnostic {
        diagnostic.emit();
    }
    let urlconf = resolution.urlconf;

    let path = resolver
        .resolve_path(view_name, urlconf, opts.args)
        .ok_or_else(|| ReverseError::NoMatch {
            view_name: view_name.to_string(),
            urlconf: urlconf.map(str::to_owned),
        })?;

    let domain = config
        .site_domain()
        .ok_or(ReverseError::SiteUnconfigured)?;
    let host = match opts.subdomain {
        Some(subdomain) => format!("{subdomain}.{domain}"),
        None => domain.to_string(),
    };

    Ok(urljoin(
        &host,
        Some(&path),
        opts.scheme,
        &config.urls.default_scheme,
    ))
}
