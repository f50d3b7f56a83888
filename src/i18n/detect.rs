//! Locale detection.
//!
//! Composes the independent locale signals into one resolved locale.
//!
//! # Design Decisions
//! - Never fails: the configured default locale is the terminal fallback
//! - With detection disabled, cookie and header are not consulted at
//!   all; only the per-domain default (or global default) applies
//! - Precedence, first defined wins:
//!   domain default > cookie > Accept-Language > configured default

use axum::body::Body;
use axum::http::Request;

use crate::config::I18nConfig;
use crate::http::request;
use crate::i18n::cookie::locale_from_cookie;
use crate::i18n::domain::detect_domain_locale;
use crate::i18n::language::match_language;

/// Resolve the locale to serve for a request.
///
/// Always returns a configured locale (a member of `locales`, or the
/// default itself).
pub fn detect_locale(req: &Request<Body>, i18n: &I18nConfig) -> String {
    let hostname = request::host(req);
    let domain_locale = detect_domain_locale(&i18n.domains, hostname.as_deref(), None);

    // Fixed-locale fast path: detection disabled, only defaults apply.
    if !i18n.locale_detection {
        return domain_locale
            .map(|d| d.default_locale.clone())
            .unwrap_or_else(|| i18n.default_locale.clone());
    }

    if let Some(domain) = domain_locale {
        return domain.default_locale.clone();
    }
    if let Some(cookie) = locale_from_cookie(req, i18n) {
        return cookie;
    }
    if let Some(header) = match_language(
        request::header_str(req, "accept-language"),
        &i18n.locales,
    ) {
        return header;
    }

    i18n.default_locale.clone()
}
