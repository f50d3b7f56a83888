//! Locale routing decision engine.
//!
//! # Data Flow
//! ```text
//! incoming request
//!     → redirect.rs (handle_locale_redirect) or path.rs (localize_path)
//!         → detect.rs (detect_locale)
//!             → domain.rs (per-domain defaults, hostname/locale keyed)
//!             → cookie.rs (NEXT_LOCALE cookie)
//!             → language.rs (Accept-Language negotiation)
//!     → RedirectResult (307) or rewritten path
//! ```
//!
//! # Design Decisions
//! - Every operation is a pure, total function of request + immutable config
//! - Precedence: explicit path prefix > domain default > cookie > header > default
//! - Domain list order is significant; first configured match wins
//! - Locale and hostname comparisons are case-insensitive throughout

pub mod cookie;
pub mod detect;
pub mod domain;
pub mod language;
pub mod path;
pub mod redirect;

pub use cookie::{locale_from_cookie, LOCALE_COOKIE};
pub use detect::detect_locale;
pub use domain::detect_domain_locale;
pub use language::match_language;
pub use path::{is_localized_path, localize_path};
pub use redirect::handle_locale_redirect;
