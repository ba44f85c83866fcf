//! Subdomain annotation middleware.
//!
//! Both middlewares run before dispatch, read the Host header against
//! the current config snapshot and attach annotations as request
//! extensions. Apply them with `axum::middleware::from_fn_with_state`
//! and a [`ConfigHandle`] as state:
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/", get(handler))
//!     .layer(middleware::from_fn_with_state(
//!         config.clone(),
//!         subdomain_routing_middleware,
//!     ));
//! ```

use axum::{
    body::Body,
    extract::State,
    http::{header, Request},
    middleware::Next,
    response::Response,
};

use crate::config::{ConfigHandle, SubdomainConfig};
use crate::http::request::{host_without_port, Subdomain, UrlconfOverride};
use crate::routing::extract::extract_subdomain;
use crate::routing::urlconf::resolve_urlconf;

/// Annotate the request with its derived subdomain.
///
/// With no site domain configured the request passes through without
/// annotation; the feature degrades instead of failing.
pub async fn subdomain_middleware(
    State(config): State<ConfigHandle>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let snapshot = config.snapshot();
    annotate(&snapshot, &mut req);
    next.run(req).await
}

/// Annotate the request with its derived subdomain and, when the
/// subdomain maps to a URLconf, with a [`UrlconfOverride`] for the
/// dispatch stage.
pub async fn subdomain_routing_middleware(
    State(config): State<ConfigHandle>,
    mut req: Request<Body>,
    next: Next,
) -> Response {
    let snapshot = config.snapshot();
    if let Some(subdomain) = annotate(&snapshot, &mut req) {
        let resolution =
            resolve_urlconf(subdomain.as_deref(), snapshot.routing.urlconfs.as_ref());
        if let Some(diagnostic) = &resolution.diagnostic {
            diagnostic.emit();
        }
        if let Some(urlconf) = resolution.urlconf {
            tracing::debug!(
                subdomain = subdomain.as_deref().unwrap_or("<apex>"),
                urlconf = %urlconf,
                "selected URLconf override"
            );
            req.extensions_mut()
                .insert(UrlconfOverride(urlconf.to_string()));
        }
    }
    next.run(req).await
}

/// Derive the subdomain for `req` and attach it as an extension.
///
/// Returns the derived subdomain, or `None` when the site domain is
/// unconfigured and annotation was skipped.
fn annotate(config: &SubdomainConfig, req: &mut Request<Body>) -> Option<Option<String>> {
    let Some(domain) = config.site_domain() else {
        tracing::debug!("site domain not configured; skipping subdomain annotation");
        return None;
    };

    let host = req
        .headers()
        .get(header::HOST)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("");
    let host = host_without_port(host);

    let extraction = extract_subdomain(host, domain, config.routing.remove_www);
    if let Some(diagnostic) = &extraction.diagnostic {
        diagnostic.emit();
    }

    req.extensions_mut()
        .insert(Subdomain(extraction.subdomain.clone()));
    Some(extraction.subdomain)
}
