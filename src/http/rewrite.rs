//! URL reconstruction for locale redirects.
//!
//! # Design Decisions
//! - The current URL is rebuilt from the Host header; the scheme comes
//!   from x-forwarded-proto, defaulting to https at the edge
//! - Prefixing preserves scheme, host, port, and query string
//! - Prefixing the root path drops the trailing slash ("/" → "/fr",
//!   not "/fr/")

use axum::body::Body;
use axum::http::Request;
use url::Url;

use crate::http::request;

/// The full URL the client requested, reconstructed from request parts.
/// None when the Host header is missing or unparseable.
pub fn request_url(req: &Request<Body>) -> Option<Url> {
    let host = request::header_str(req, "host")?;
    let scheme = request::header_str(req, "x-forwarded-proto").unwrap_or("https");
    let path_and_query = req
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str())
        .unwrap_or("/");

    Url::parse(&format!("{scheme}://{host}{path_and_query}")).ok()
}

/// The URL rewritten with a path prefix, everything else preserved.
pub fn apply_path_prefix(url: &Url, prefix: &str) -> String {
    let mut rewritten = url.clone();
    let path = url.path();
    if path == "/" {
        rewritten.set_path(prefix);
    } else {
        rewritten.set_path(&format!("{prefix}{path}"));
    }
    rewritten.to_string()
}
