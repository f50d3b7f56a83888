//! Redirect response wire shape.
//!
//! # Responsibilities
//! - Define the structured redirect result downstream adapters consume
//! - Serialize to the exact wire shape they depend on byte-for-byte
//! - Convert into a transport-level 307 response
//!
//! # Design Decisions
//! - The JSON key names (`type`, `statusCode`, `isBase64Encoded`) are a
//!   frozen contract; Serde renames pin them independent of Rust naming
//! - The body is a zero-length sentinel, not an optional payload

use axum::body::Body;
use axum::http::{header, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::{Serialize, Serializer};

/// Zero-length response-body marker for the hosting transport layer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyBody;

impl EmptyBody {
    /// The transport's empty body.
    pub fn into_body(self) -> Body {
        Body::empty()
    }
}

impl Serialize for EmptyBody {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str("")
    }
}

/// Discriminator for results handed to downstream adapters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Core,
}

/// Headers carried by a redirect result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectHeaders {
    #[serde(rename = "Location")]
    pub location: String,
}

/// A structured redirect decision.
///
/// Wire shape (exact):
/// ```json
/// {
///   "type": "core",
///   "statusCode": 307,
///   "headers": { "Location": "<url>" },
///   "body": "",
///   "isBase64Encoded": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RedirectResult {
    #[serde(rename = "type")]
    pub kind: ResultKind,
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    pub headers: RedirectHeaders,
    pub body: EmptyBody,
    #[serde(rename = "isBase64Encoded")]
    pub is_base64_encoded: bool,
}

impl RedirectResult {
    /// A 307 redirect to the given location.
    pub fn temporary(location: impl Into<String>) -> Self {
        Self {
            kind: ResultKind::Core,
            status_code: StatusCode::TEMPORARY_REDIRECT.as_u16(),
            headers: RedirectHeaders {
                location: location.into(),
            },
            body: EmptyBody,
            is_base64_encoded: false,
        }
    }

    /// The redirect target.
    pub fn location(&self) -> &str {
        &self.headers.location
    }
}

impl IntoResponse for RedirectResult {
    fn into_response(self) -> Response {
        let mut builder = Response::builder().status(StatusCode::TEMPORARY_REDIRECT);
        if let Ok(value) = HeaderValue::from_str(&self.headers.location) {
            builder = builder.header(header::LOCATION, value);
        }
        builder
            .body(self.body.into_body())
            .unwrap_or_else(|_| StatusCode::TEMPORARY_REDIRECT.into_response())
    }
}
