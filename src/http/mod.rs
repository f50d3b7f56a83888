//! HTTP serving subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, dispatch)
//!     → request.rs (request IDs, header extraction)
//!     → i18n decision engine (redirect or path rewrite)
//!     → rewrite.rs (URL reconstruction for redirect targets)
//!     → response.rs (redirect wire shape) or upstream forward
//! ```

pub mod request;
pub mod response;
pub mod rewrite;
pub mod server;

pub use request::{RequestId, RequestIdLayer, X_REQUEST_ID};
pub use response::{EmptyBody, RedirectResult};
pub use server::HttpServer;
