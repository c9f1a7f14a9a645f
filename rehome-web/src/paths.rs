//! Deployment-aware URLs.
///
/// `PUBLIC_URL` set at compile time (e.g. `/rehome` on a project page) prefixes
/// every generated path; without it paths are root-anchored.
#[must_use]
pub fn asset_path(relative: &str) -> String {
    join_base(option_env!("PUBLIC_URL").unwrap_or(""), relative)
}

/// Image shown on placeholder cards, which carry no picture of their own.
#[must_use]
pub fn placeholder_image() -> String {
    asset_path("static/img/placeholder.svg")
}

/// Router basename, `None` when the app is served from the root.
#[must_use]
pub fn router_base() -> Option<String> {
    normalized_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn join_base(base: &str, relative: &str) -> String {
    let rel = relative.trim_start_matches('/');
    normalized_base(base).map_or_else(|| format!("/{rel}"), |base| format!("{base}/{rel}"))
}

fn normalized_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}
