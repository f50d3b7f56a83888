//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the router.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the locale router.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RouterConfig {
    /// Listener configuration (bind address, connection caps).
    pub listener: ListenerConfig,

    /// Upstream application the router sits in front of.
    pub upstream: UpstreamConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    /// i18n locale routing configuration. Absent means the router
    /// passes every request through untouched.
    pub i18n: Option<I18nConfig>,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,

    /// Maximum concurrent connections (backpressure).
    pub max_connections: usize,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
            max_connections: 10_000,
        }
    }
}

/// Upstream application configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Upstream address (e.g., "127.0.0.1:3000").
    pub address: String,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            address: "127.0.0.1:3000".to_string(),
        }
    }
}

/// Timeout configuration for various operations.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: true,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// i18n locale routing configuration.
///
/// Immutable after load; shared read-only across all in-flight requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct I18nConfig {
    /// Every locale the application can serve (e.g., ["en", "fr"]).
    pub locales: Vec<String>,

    /// Locale served when no other signal resolves. Always a member
    /// of `locales` (enforced by validation).
    pub default_locale: String,

    /// When false, cookie and Accept-Language signals are ignored and
    /// no locale redirects are issued; only the per-domain default
    /// (or the global default) applies.
    #[serde(default = "default_locale_detection")]
    pub locale_detection: bool,

    /// Per-domain locale defaults. Order is significant: the first
    /// configured entry that matches a query wins.
    #[serde(default)]
    pub domains: Vec<DomainLocale>,
}

fn default_locale_detection() -> bool {
    true
}

/// A configured association between a delivery hostname and its locales.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DomainLocale {
    /// Delivery host, optionally with a port ("fr.example.com:8080").
    /// The port is ignored when matching request hostnames.
    pub domain: String,

    /// Locale this domain serves at its root, with no path prefix.
    pub default_locale: String,

    /// Additional locales this domain serves. Absent means the domain
    /// only claims its default locale.
    pub locales: Option<Vec<String>>,

    /// Serve this domain over plain http instead of https when
    /// redirecting clients to it.
    #[serde(default)]
    pub http: bool,
}
