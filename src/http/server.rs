//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with all handlers
//! - Wire up middleware (tracing, body limits, request ID, rate limiting)
//! - Bind server to listener
//! - Construct the shared application state

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::config::{ChatConfig, GatewayConfig, RateLimitConfig};
use crate::http::handlers;
use crate::http::request::RequestIdLayer;
use crate::responder::{HostedResponder, Responder};
use crate::security::rate_limit::{rate_limit_middleware, RateLimiterState};

/// Application state injected into handlers.
///
/// Built once at server construction; holds the limiter, the responder
/// handle, and the per-request settings so handlers stay free of globals.
#[derive(Clone)]
pub struct AppState {
    pub limiter: Arc<RateLimiterState>,
    pub responder: Arc<dyn Responder>,
    pub rate_limit: RateLimitConfig,
    pub chat: ChatConfig,
}

/// HTTP server for the chat gateway.
pub struct HttpServer {
    router: Router,
    config: GatewayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: GatewayConfig) -> Self {
        let responder = Arc::new(HostedResponder::new(&config.responder));
        Self::with_responder(config, responder)
    }

    /// Create a server with an explicit responder implementation.
    ///
    /// This is the seam tests use to substitute a scripted responder.
    pub fn with_responder(config: GatewayConfig, responder: Arc<dyn Responder>) -> Self {
        let limiter = Arc::new(RateLimiterState::new(
            config.rate_limit.max_requests,
            Duration::from_secs(config.rate_limit.window_secs),
        ));

        let state = AppState {
            limiter,
            responder,
            rate_limit: config.rate_limit.clone(),
            chat: config.chat.clone(),
        };

        let router = Self::build_router(&config, state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(config: &GatewayConfig, state: AppState) -> Router {
        // The budget applies to the chat route only; the landing page and
        // the reset acknowledgement stay unmetered.
        let chat_route = Router::new()
            .route("/chat", post(handlers::chat))
            .route_layer(middleware::from_fn_with_state(
                state.clone(),
                rate_limit_middleware,
            ));

        Router::new()
            .route("/", get(handlers::index))
            .route("/reset", post(handlers::reset))
            .merge(chat_route)
            .with_state(state)
            .layer(RequestBodyLimitLayer::new(config.listener.max_body_size))
            .layer(RequestIdLayer)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    ///
    /// Returns after the shutdown signal fires and in-flight requests drain.
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

        let app = self.router.into_make_service_with_connect_info::<SocketAddr>();

        axum::serve(listener, app)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &GatewayConfig {
        &self.config
    }
}
