//! Per-client rate limiting middleware.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use axum::{
    body::Body,
    extract::{ConnectInfo, State},
    http::Request,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::http::response::Envelope;
use crate::http::server::AppState;
use crate::observability::metrics;

/// A single client's budget within the current window.
struct Window {
    count: u32,
    started: Instant,
}

/// Fixed-window request counters keyed by client identity.
///
/// The window resets lazily on the first request after it elapses. All
/// mutation happens under one lock so increment-and-compare is atomic even
/// when requests sharing an identity arrive concurrently.
pub struct RateLimiterState {
    windows: Mutex<HashMap<String, Window>>,
    max_requests: u32,
    window: Duration,
}

impl RateLimiterState {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            windows: Mutex::new(HashMap::new()),
            max_requests,
            window,
        }
    }

    /// Record one usage if the client is under budget for the current window.
    ///
    /// Returns false without recording anything once the budget is spent.
    pub fn allow(&self, client_id: &str) -> bool {
        let now = Instant::now();
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");
        let window = windows.entry(client_id.to_string()).or_insert(Window {
            count: 0,
            started: now,
        });

        if now.duration_since(window.started) >= self.window {
            window.count = 0;
            window.started = now;
        }

        if window.count < self.max_requests {
            window.count += 1;
            true
        } else {
            false
        }
    }

    /// Clear one client's counter.
    ///
    /// Not reachable over HTTP: the public `/reset` route acknowledges
    /// without touching limiter state.
    pub fn reset(&self, client_id: &str) {
        let mut windows = self.windows.lock().expect("rate limiter mutex poisoned");
        windows.remove(client_id);
    }

    /// Configured per-window budget.
    pub fn max_requests(&self) -> u32 {
        self.max_requests
    }
}

/// Middleware enforcing the chat budget before any handler logic runs.
///
/// Client identity is the source address, so users behind a shared address
/// share a budget.
pub async fn rate_limit_middleware(
    ConnectInfo(addr): ConnectInfo<SocketAddr>,
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    if !state.rate_limit.enabled {
        return next.run(request).await;
    }

    let client = addr.ip().to_string();
    if state.limiter.allow(&client) {
        next.run(request).await
    } else {
        tracing::warn!(client = %client, "Rate limit exceeded");
        metrics::record_rate_limited();
        Envelope::RateLimited {
            limit: state.limiter.max_requests(),
        }
        .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn test_budget_enforced_per_window() {
        let limiter = RateLimiterState::new(5, Duration::from_secs(60));
        for _ in 0..5 {
            assert!(limiter.allow("10.0.0.1"));
        }
        assert!(!limiter.allow("10.0.0.1"));
        assert!(!limiter.allow("10.0.0.1"));
    }

    #[test]
    fn test_clients_have_independent_budgets() {
        let limiter = RateLimiterState::new(1, Duration::from_secs(60));
        assert!(limiter.allow("10.0.0.1"));
        assert!(!limiter.allow("10.0.0.1"));
        assert!(limiter.allow("10.0.0.2"));
    }

    #[test]
    fn test_window_elapse_restores_budget() {
        let limiter = RateLimiterState::new(1, Duration::from_millis(20));
        assert!(limiter.allow("10.0.0.1"));
        assert!(!limiter.allow("10.0.0.1"));
        std::thread::sleep(Duration::from_millis(30));
        assert!(limiter.allow("10.0.0.1"));
    }

    #[test]
    fn test_reset_clears_single_client() {
        let limiter = RateLimiterState::new(1, Duration::from_secs(60));
        assert!(limiter.allow("10.0.0.1"));
        assert!(limiter.allow("10.0.0.2"));
        limiter.reset("10.0.0.1");
        assert!(limiter.allow("10.0.0.1"));
        assert!(!limiter.allow("10.0.0.2"));
    }

    #[test]
    fn test_concurrent_increments_admit_exactly_budget() {
        let limiter = Arc::new(RateLimiterState::new(5, Duration::from_secs(60)));
        let mut handles = Vec::new();
        for _ in 0..20 {
            let limiter = limiter.clone();
            handles.push(std::thread::spawn(move || limiter.allow("10.0.0.1")));
        }
        let admitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|allowed| *allowed)
            .count();
        assert_eq!(admitted, 5);
    }
}
