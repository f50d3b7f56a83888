//! Locale extraction from the locale cookie.
//!
//! # Design Decisions
//! - Absence of the cookie and an unrecognized value both yield None,
//!   never an error; the caller falls through to the next signal
//! - Matching is case-insensitive but the configured casing is returned

use axum::body::Body;
use axum::http::{header, Request};

use crate::config::I18nConfig;

/// Name of the cookie carrying the client's locale override.
pub const LOCALE_COOKIE: &str = "NEXT_LOCALE";

/// Locale from the locale cookie, validated against the configured set.
pub fn locale_from_cookie(req: &Request<Body>, i18n: &I18nConfig) -> Option<String> {
    let value = cookie_value(req, LOCALE_COOKIE)?.to_lowercase();
    i18n.locales
        .iter()
        .find(|l| l.to_lowercase() == value)
        .cloned()
}

/// Value of the named cookie, scanning every `Cookie` header.
fn cookie_value<'a>(req: &'a Request<Body>, name: &str) -> Option<&'a str> {
    for header in req.headers().get_all(header::COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            if let Some((key, value)) = pair.split_once('=') {
                if key.trim() == name {
                    return Some(value.trim());
                }
            }
        }
    }
    None
}
