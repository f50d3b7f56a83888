//! Locale redirect decisions.
//!
//! # Responsibilities
//! - Decide, for root-path requests, whether the client belongs on a
//!   different delivery domain or a locale-qualified path
//! - Emit the structured 307 result, or nothing for passthrough
//!
//! # Design Decisions
//! - Only the bare root path is ever redirected; deep paths are left to
//!   the path localizer
//! - Domain canonicalization strictly precedes locale canonicalization
//!   and can suppress it entirely
//! - The domain branch is keyed on the header-derived preference alone,
//!   while the locale branch uses the full-precedence detected locale;
//!   the two values are deliberately not unified
//! - The redirect target omits the locale segment when it is the target
//!   domain's own default

use axum::body::Body;
use axum::http::Request;

use crate::config::I18nConfig;
use crate::http::request;
use crate::http::response::RedirectResult;
use crate::http::rewrite;
use crate::i18n::detect::detect_locale;
use crate::i18n::domain::detect_domain_locale;
use crate::i18n::language::match_language;

/// Decide whether a request must be redirected to its canonical
/// domain or locale path. None means passthrough.
pub fn handle_locale_redirect(
    req: &Request<Body>,
    i18n: Option<&I18nConfig>,
) -> Option<RedirectResult> {
    let i18n = i18n?;
    if !i18n.locale_detection || req.uri().path() != "/" {
        return None;
    }

    // Header-only preference; cookie and domain signals are ignored here.
    let preferred = match_language(request::header_str(req, "accept-language"), &i18n.locales);
    let detected = detect_locale(req, i18n);

    let hostname = request::host(req);
    let domain_locale = detect_domain_locale(&i18n.domains, hostname.as_deref(), None);
    let preferred_domain = detect_domain_locale(&i18n.domains, None, preferred.as_deref());

    // 1. Domain canonicalization: send the client to the domain that
    //    owns their preferred locale.
    if let (Some(current), Some(target), Some(preferred)) =
        (domain_locale, preferred_domain, preferred.as_deref())
    {
        let same_domain = target.domain == current.domain;
        let preferred_is_default = target.default_locale == preferred;

        if !same_domain || !preferred_is_default {
            let scheme = if target.http { "http" } else { "https" };
            let segment = if preferred_is_default { "" } else { preferred };
            return Some(RedirectResult::temporary(format!(
                "{scheme}://{}/{segment}",
                target.domain
            )));
        }
    }

    // 2. Locale canonicalization: qualify the path when the detected
    //    locale is not this domain's default.
    let default_locale = domain_locale
        .map(|d| d.default_locale.as_str())
        .unwrap_or(&i18n.default_locale);

    if !detected.eq_ignore_ascii_case(default_locale) {
        let prefix = format!("/{detected}");
        let location = match rewrite::request_url(req) {
            Some(url) => rewrite::apply_path_prefix(&url, &prefix),
            None => match req.uri().query() {
                Some(query) => format!("{prefix}?{query}"),
                None => prefix,
            },
        };
        return Some(RedirectResult::temporary(location));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DomainLocale;

    fn i18n(domains: Vec<DomainLocale>) -> I18nConfig {
        I18nConfig {
            locales: vec!["en".into(), "fr".into()],
            default_locale: "en".into(),
            locale_detection: true,
            domains,
        }
    }

    fn domain(host: &str, default: &str, locales: Option<Vec<&str>>, http: bool) -> DomainLocale {
        DomainLocale {
            domain: host.into(),
            default_locale: default.into(),
            locales: locales.map(|l| l.into_iter().map(String::from).collect()),
            http,
        }
    }

    fn request(path: &str, host: Option<&str>, accept_language: Option<&str>) -> Request<Body> {
        let mut builder = Request::builder().uri(path);
        if let Some(host) = host {
            builder = builder.header("host", host);
        }
        if let Some(al) = accept_language {
            builder = builder.header("accept-language", al);
        }
        builder.body(Body::empty()).unwrap()
    }

    #[test]
    fn unconfigured_i18n_never_redirects() {
        let req = request("/", Some("example.com"), Some("fr"));
        assert_eq!(handle_locale_redirect(&req, None), None);
    }

    #[test]
    fn detection_disabled_never_redirects() {
        let mut config = i18n(Vec::new());
        config.locale_detection = false;
        let req = request("/", Some("example.com"), Some("fr"));
        assert_eq!(handle_locale_redirect(&req, Some(&config)), None);
    }

    #[test]
    fn deep_paths_never_redirect() {
        let config = i18n(Vec::new());
        let req = request("/about", Some("example.com"), Some("fr"));
        assert_eq!(handle_locale_redirect(&req, Some(&config)), None);
    }

    #[test]
    fn domain_default_matches_detected_locale() {
        // Scenario A: the domain already serves its visitor's locale.
        let config = i18n(vec![domain("fr.example.com", "fr", None, false)]);
        let req = request("/", Some("fr.example.com"), None);
        assert_eq!(handle_locale_redirect(&req, Some(&config)), None);
    }

    #[test]
    fn header_locale_redirects_to_locale_path() {
        // Scenario B: unmatched host, French preference.
        let config = i18n(vec![domain("fr.example.com", "fr", None, false)]);
        let req = request("/", Some("en.example.com"), Some("fr"));

        let redirect = handle_locale_redirect(&req, Some(&config)).unwrap();
        assert_eq!(redirect.status_code, 307);
        assert_eq!(redirect.location(), "https://en.example.com/fr");
    }

    #[test]
    fn preferred_locale_owned_by_other_domain() {
        // Scenario C: the preferred locale belongs to b.com, whose
        // default it is, so the locale segment is omitted.
        let config = i18n(vec![
            domain("a.com", "en", None, false),
            domain("b.com", "fr", Some(vec!["fr"]), false),
        ]);
        let req = request("/", Some("a.com"), Some("fr"));

        let redirect = handle_locale_redirect(&req, Some(&config)).unwrap();
        assert_eq!(redirect.location(), "https://b.com/");
    }

    #[test]
    fn non_default_preference_keeps_locale_segment() {
        // b.com claims fr but defaults to en: segment stays.
        let config = i18n(vec![
            domain("a.com", "en", None, false),
            domain("b.com", "en", Some(vec!["en", "fr"]), false),
        ]);
        // "fr" matches b.com via its locales set, not its default.
        // a.com is the current domain, so the domains differ.
        let req = request("/", Some("a.com"), Some("fr"));

        let redirect = handle_locale_redirect(&req, Some(&config)).unwrap();
        assert_eq!(redirect.location(), "https://b.com/fr");
    }

    #[test]
    fn http_flag_selects_plain_scheme() {
        let config = i18n(vec![
            domain("a.com", "en", None, false),
            domain("b.com", "fr", None, true),
        ]);
        let req = request("/", Some("a.com"), Some("fr"));

        let redirect = handle_locale_redirect(&req, Some(&config)).unwrap();
        assert_eq!(redirect.location(), "http://b.com/");
    }

    #[test]
    fn same_domain_default_preference_passes_through() {
        let config = i18n(vec![domain("b.com", "fr", None, false)]);
        let req = request("/", Some("b.com"), Some("fr"));
        assert_eq!(handle_locale_redirect(&req, Some(&config)), None);
    }

    #[test]
    fn no_accept_language_skips_domain_branch() {
        // Without a header preference the domain branch cannot resolve
        // a target; detection falls back to the domain default.
        let config = i18n(vec![domain("fr.example.com", "fr", None, false)]);
        let req = request("/", Some("fr.example.com"), None);
        assert_eq!(handle_locale_redirect(&req, Some(&config)), None);
    }

    #[test]
    fn locale_redirect_preserves_query() {
        let config = i18n(Vec::new());
        let req = request("/?utm=1", Some("example.com"), Some("fr"));

        let redirect = handle_locale_redirect(&req, Some(&config)).unwrap();
        assert_eq!(redirect.location(), "https://example.com/fr?utm=1");
    }

    #[test]
    fn default_comparison_is_case_insensitive() {
        let mut config = i18n(Vec::new());
        config.locales = vec!["EN".into(), "fr".into()];
        config.default_locale = "EN".into();

        // Detected "EN" equals default "EN"; no redirect.
        let req = request("/", Some("example.com"), Some("en"));
        assert_eq!(handle_locale_redirect(&req, Some(&config)), None);
    }

    #[test]
    fn missing_host_falls_back_to_relative_location() {
        let config = i18n(Vec::new());
        let req = request("/", None, Some("fr"));

        let redirect = handle_locale_redirect(&req, Some(&config)).unwrap();
        assert_eq!(redirect.location(), "/fr");
    }
}
