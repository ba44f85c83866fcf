//! Absolute URL assembly.

/// Join a scheme, host and path into an absolute URL.
///
/// No normalization happens beyond guaranteeing exactly one `://`
/// separator: a caller passing `"https://"` or `"https:"` as the
/// scheme gets the same result as `"https"`. The path is appended
/// verbatim; an absent path means the bare origin.
pub fn urljoin(
    domain: &str,
    path: Option<&str>,
    scheme: Option<&str>,
    default_scheme: &str,
) -> String {
    let scheme = scheme
        .unwrap_or(default_scheme)
        .trim_end_matches("://")
        .trim_end_matches(':');
    let path = path.unwrap_or("");
    format!("{scheme}://{domain}{path}")
}
