//! Deployment base path handling.
//!
//! `PUBLIC_URL` is read at compile time (for example `/flexicars` when served from a
//! subdirectory). Without it, assets and routes are anchored at the site root.

fn public_url() -> &'static str {
    option_env!("PUBLIC_URL").unwrap_or("")
}

/// URL of a bundled asset such as `assets/images/placeholder.svg`.
#[must_use]
pub fn asset_url(relative: &str) -> String {
    join_base(public_url(), relative)
}

/// Router basename, or `None` when the site is served from the root.
#[must_use]
pub fn router_basename() -> Option<String> {
    basename_from(public_url())
}

fn join_base(base: &str, relative: &str) -> String {
    let base = base.trim().trim_end_matches('/');
    let relative = relative.trim_start_matches("./").trim_start_matches('/');
    format!("{base}/{relative}")
}

fn basename_from(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    (!base.is_empty()).then(|| base.to_string())
}
