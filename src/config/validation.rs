//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check referential integrity (default locale is a configured locale)
//! - Validate addresses parse
//! - Detect duplicate domain entries
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: RouterConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;
use std::net::SocketAddr;

use crate::config::schema::{I18nConfig, RouterConfig};

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("listener.bind_address '{0}' is not a valid socket address")]
    InvalidBindAddress(String),

    #[error("upstream.address '{0}' is not a valid socket address")]
    InvalidUpstreamAddress(String),

    #[error("i18n.locales must not be empty")]
    EmptyLocales,

    #[error("i18n.default_locale '{0}' is not a member of i18n.locales")]
    UnknownDefaultLocale(String),

    #[error("i18n.domains[{index}].domain must not be empty")]
    EmptyDomain { index: usize },

    #[error("i18n.domains[{index}].default_locale '{locale}' is not a member of i18n.locales")]
    UnknownDomainDefault { index: usize, locale: String },

    #[error("i18n.domains contains duplicate host '{0}'")]
    DuplicateDomain(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &RouterConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidBindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    if config.upstream.address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidUpstreamAddress(
            config.upstream.address.clone(),
        ));
    }

    if let Some(i18n) = &config.i18n {
        validate_i18n(i18n, &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_i18n(i18n: &I18nConfig, errors: &mut Vec<ValidationError>) {
    if i18n.locales.is_empty() {
        errors.push(ValidationError::EmptyLocales);
    }

    let known: HashSet<String> = i18n.locales.iter().map(|l| l.to_lowercase()).collect();

    if !known.contains(&i18n.default_locale.to_lowercase()) {
        errors.push(ValidationError::UnknownDefaultLocale(
            i18n.default_locale.clone(),
        ));
    }

    let mut seen_hosts = HashSet::new();
    for (index, entry) in i18n.domains.iter().enumerate() {
        if entry.domain.is_empty() {
            errors.push(ValidationError::EmptyDomain { index });
            continue;
        }

        if !known.contains(&entry.default_locale.to_lowercase()) {
            errors.push(ValidationError::UnknownDomainDefault {
                index,
                locale: entry.default_locale.clone(),
            });
        }

        // Hosts compare with the port stripped, same as request matching.
        let host = entry
            .domain
            .split(':')
            .next()
            .unwrap_or(&entry.domain)
            .to_lowercase();
        if !seen_hosts.insert(host.clone()) {
            errors.push(ValidationError::DuplicateDomain(host));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::DomainLocale;

    fn base_config() -> RouterConfig {
        RouterConfig {
            i18n: Some(I18nConfig {
                locales: vec!["en".into(), "fr".into()],
                default_locale: "en".into(),
                locale_detection: true,
                domains: Vec::new(),
            }),
            ..RouterConfig::default()
        }
    }

    #[test]
    fn default_config_is_valid() {
        assert!(validate_config(&RouterConfig::default()).is_ok());
        assert!(validate_config(&base_config()).is_ok());
    }

    #[test]
    fn default_locale_must_be_configured() {
        let mut config = base_config();
        config.i18n.as_mut().unwrap().default_locale = "de".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnknownDefaultLocale("de".into())]
        );
    }

    #[test]
    fn collects_every_error() {
        let mut config = base_config();
        config.listener.bind_address = "not-an-address".into();
        let i18n = config.i18n.as_mut().unwrap();
        i18n.locales.clear();
        i18n.domains.push(DomainLocale {
            domain: String::new(),
            default_locale: "en".into(),
            locales: None,
            http: false,
        });

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidBindAddress("not-an-address".into())));
        assert!(errors.contains(&ValidationError::EmptyLocales));
        assert!(errors.contains(&ValidationError::EmptyDomain { index: 0 }));
    }

    #[test]
    fn duplicate_hosts_detected_ignoring_port_and_case() {
        let mut config = base_config();
        let i18n = config.i18n.as_mut().unwrap();
        i18n.domains.push(DomainLocale {
            domain: "FR.example.com:8080".into(),
            default_locale: "fr".into(),
            locales: None,
            http: false,
        });
        i18n.domains.push(DomainLocale {
            domain: "fr.example.com".into(),
            default_locale: "en".into(),
            locales: None,
            http: false,
        });

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateDomain("fr.example.com".into())]
        );
    }
}
