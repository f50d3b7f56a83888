//! Domain locale resolution.
//!
//! # Responsibilities
//! - Map a request hostname to its configured domain entry
//! - Map a candidate locale to the domain that claims it
//!
//! # Design Decisions
//! - Entries are checked in configuration order; first match wins,
//!   even when a later entry would also match
//! - A configured port on the domain never participates in matching
//! - Both lookup keys are optional and independent, so the same
//!   function serves hostname-keyed and locale-keyed queries

use crate::config::DomainLocale;

/// First configured domain entry matching the given hostname and/or
/// candidate locale. None when no domains are configured or none match.
pub fn detect_domain_locale<'a>(
    domains: &'a [DomainLocale],
    hostname: Option<&str>,
    detected_locale: Option<&str>,
) -> Option<&'a DomainLocale> {
    let hostname = hostname.map(str::to_lowercase);
    let detected = detected_locale.map(str::to_lowercase);

    domains.iter().find(|entry| {
        let host = entry
            .domain
            .split(':')
            .next()
            .unwrap_or(&entry.domain)
            .to_lowercase();

        if hostname.as_deref() == Some(host.as_str()) {
            return true;
        }

        let Some(detected) = detected.as_deref() else {
            return false;
        };
        if detected == entry.default_locale.to_lowercase() {
            return true;
        }
        entry
            .locales
            .as_ref()
            .is_some_and(|locales| locales.iter().any(|l| l.to_lowercase() == detected))
    })
}
