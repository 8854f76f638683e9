//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (structured fields, request ID correlation)
//!     → metrics.rs (counters, histograms)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape, separate listener)
//! ```
//!
//! # Design Decisions
//! - Structured logging via tracing; the subscriber is installed in main
//! - Metrics are cheap (atomic increments)
//! - Responder failure details appear here and nowhere client-visible

pub mod metrics;
