//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the catch-all handler
//! - Wire up middleware (tracing, timeout, request ID, concurrency cap)
//! - Dispatch requests to the locale decision engine
//! - Forward passthrough requests to the upstream application
//! - Observability (metrics, correlation IDs)

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Response},
    routing::any,
    Router,
};
use hyper_util::{
    client::legacy::{connect::HttpConnector, Client},
    rt::TokioExecutor,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::limit::GlobalConcurrencyLimitLayer;
use tower_http::{timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::RouterConfig;
use crate::http::request::{RequestIdLayer, X_REQUEST_ID};
use crate::i18n::{handle_locale_redirect, localize_path};
use crate::observability::metrics;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<RouterConfig>,
    pub client: Client<HttpConnector, Body>,
}

/// HTTP server for the locale router.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RouterConfig) -> Self {
        let client = Client::builder(TokioExecutor::new()).build(HttpConnector::new());

        let state = AppState {
            config: Arc::new(config.clone()),
            client,
        };

        let router = Self::build_router(&config, state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &RouterConfig, state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(route_handler))
            .route("/", any(route_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
            // One semaphore shared across connections caps in-flight requests
            .layer(GlobalConcurrencyLimitLayer::new(
                config.listener.max_connections,
            ))
    }

    /// Run the server, accepting connections on the given listener
    /// until the shutdown signal fires.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        let app = self.router.into_make_service();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Main routing handler.
/// Checks for a locale redirect, then rewrites and forwards.
async fn route_handler(
    State(state): State<AppState>,
    request: Request<Body>,
) -> impl IntoResponse {
    let start_time = Instant::now();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    let method_str = request.method().to_string();
    let i18n = state.config.i18n.as_ref();

    // 1. Canonical redirect check
    if let Some(redirect) = handle_locale_redirect(&request, i18n) {
        tracing::debug!(
            request_id = %request_id,
            location = %redirect.location(),
            "Locale redirect"
        );
        metrics::record_locale_redirect();
        metrics::record_request(&method_str, 307, "redirect", start_time);
        return redirect.into_response();
    }

    // 2. Locale path rewrite
    let localized = localize_path(&request, i18n);
    let query = request
        .uri()
        .query()
        .map(|q| format!("?{q}"))
        .unwrap_or_default();

    tracing::debug!(
        request_id = %request_id,
        method = %method_str,
        path = %request.uri().path(),
        localized = %localized,
        "Forwarding request"
    );

    // 3. Forward upstream
    let (parts, body) = request.into_parts();
    let uri = format!(
        "http://{}{}{}",
        state.config.upstream.address, localized, query
    );

    let mut upstream = Request::builder().method(parts.method.clone()).uri(uri);
    if let Some(headers) = upstream.headers_mut() {
        for (key, value) in parts.headers.iter() {
            headers.insert(key.clone(), value.clone());
        }
        if let Ok(value) = header::HeaderValue::from_str(&request_id) {
            headers.insert(X_REQUEST_ID, value);
        }
    }
    let upstream = match upstream.body(body) {
        Ok(req) => req,
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Failed to build upstream request");
            metrics::record_request(&method_str, 500, "internal_error", start_time);
            return (StatusCode::INTERNAL_SERVER_ERROR, "Invalid upstream request")
                .into_response();
        }
    };

    match state.client.request(upstream).await {
        Ok(response) => {
            metrics::record_request(
                &method_str,
                response.status().as_u16(),
                "proxied",
                start_time,
            );
            let (parts, body) = response.into_parts();
            Response::from_parts(parts, Body::new(body)).into_response()
        }
        Err(e) => {
            tracing::error!(request_id = %request_id, error = %e, "Upstream error");
            metrics::record_request(&method_str, 502, "upstream_error", start_time);
            (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
        }
    }
}
