//! Locale-Routing Reverse Proxy Library

pub mod config;
pub mod http;
pub mod i18n;
pub mod lifecycle;
pub mod observability;

pub use config::schema::{DomainLocale, I18nConfig, RouterConfig};
pub use http::response::RedirectResult;
pub use http::HttpServer;
pub use i18n::{detect_domain_locale, detect_locale, handle_locale_redirect, localize_path};
pub use lifecycle::Shutdown;
