//! Locale-prefixed path checks and rewriting.
//!
//! # Responsibilities
//! - Recognize paths that already carry an explicit locale segment
//! - Produce the locale-prefixed path for internal rewrite use
//!
//! # Design Decisions
//! - An explicit prefix short-circuits all detection logic
//! - Localizing is idempotent: the output is already locale-qualified

use axum::body::Body;
use axum::http::Request;

use crate::config::I18nConfig;
use crate::i18n::detect::detect_locale;

/// True iff the first `/`-delimited segment of `path`, lowercased,
/// equals one of the configured locales.
pub fn is_localized_path(path: &str, i18n: &I18nConfig) -> bool {
    let first = path
        .trim_start_matches('/')
        .split('/')
        .next()
        .unwrap_or("");
    if first.is_empty() {
        return false;
    }

    let first = first.to_lowercase();
    i18n.locales.iter().any(|l| l.to_lowercase() == first)
}

/// Locale-prefixed path for the request.
///
/// Without i18n configuration, or when the path already carries a locale
/// segment, the raw path is returned unchanged.
pub fn localize_path(req: &Request<Body>, i18n: Option<&I18nConfig>) -> String {
    let raw_path = req.uri().path();

    let Some(i18n) = i18n else {
        return raw_path.to_string();
    };
    if is_localized_path(raw_path, i18n) {
        return raw_path.to_string();
    }

    format!("/{}{}", detect_locale(req, i18n), raw_path)
}
