//! HTTP server setup and request dispatch.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all page handler
//! - Wire up middleware (tracing, timeout, body limit, request ID)
//! - Resolve each request path against the route table
//! - Render and serve the matched page, or the not-found fallback
//! - Serve with graceful shutdown

use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::State,
    http::{header, HeaderValue, Method, Request},
    response::Response,
    routing::any,
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{
    limit::RequestBodyLimitLayer, set_header::SetResponseHeaderLayer, timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::SiteConfig;
use crate::http::request::{RequestIdExt, RequestIdLayer};
use crate::http::response;
use crate::observability::metrics;
use crate::render;
use crate::routing::RouteTable;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub routes: Arc<RouteTable>,
}

/// HTTP server for the site.
pub struct HttpServer {
    router: Router,
    config: SiteConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: SiteConfig) -> Self {
        let state = AppState {
            routes: Arc::new(RouteTable::new()),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &SiteConfig, state: AppState) -> Router {
        let mut router = Router::new()
            .route("/{*path}", any(page_handler))
            .route("/", any(page_handler))
            .with_state(state)
            .layer(TimeoutLayer::new(Duration::from_secs(
                config.timeouts.request_secs,
            )))
            .layer(RequestBodyLimitLayer::new(config.security.max_body_size))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http());

        if config.security.enable_headers {
            router = router
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_CONTENT_TYPE_OPTIONS,
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::X_FRAME_OPTIONS,
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::if_not_present(
                    header::CONTENT_SECURITY_POLICY,
                    HeaderValue::from_static(
                        "default-src 'none'; style-src 'unsafe-inline'",
                    ),
                ));
        }

        router
    }

    /// Run the server, accepting connections on the given listener until
    /// the shutdown channel fires.
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

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

/// Main page handler.
/// Resolves the path against the route table and renders the result.
async fn page_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let start = Instant::now();
    let request_id = request.request_id().to_string();
    let path = request.uri().path().to_string();
    let method = request.method().clone();

    if method != Method::GET && method != Method::HEAD {
        tracing::debug!(
            request_id = %request_id,
            method = %method,
            path = %path,
            "Method not allowed"
        );
        metrics::record_request(method.as_str(), 405, "none", start);
        return response::method_not_allowed();
    }

    match state.routes.resolve(&path) {
        Some(page) => {
            tracing::debug!(
                request_id = %request_id,
                path = %path,
                page = %page,
                "Rendering page"
            );
            let html = render::page(&state.routes, page);
            metrics::record_request(method.as_str(), 200, page.slug(), start);
            response::page(html)
        }
        None => {
            tracing::debug!(
                request_id = %request_id,
                path = %path,
                "No route matched"
            );
            metrics::record_request(method.as_str(), 404, "none", start);
            response::not_found(render::not_found(&state.routes))
        }
    }
}
