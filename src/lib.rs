//! Rate-Limited Chat Gateway
//!
//! A small HTTP service that fronts a hosted conversation model.
//!
//! # Architecture Overview
//!
//! ```text
//!                       ┌───────────────────────────────────────────────┐
//!                       │                 CHAT GATEWAY                   │
//!                       │                                                │
//!   POST /chat          │  ┌──────────┐   ┌───────────┐   ┌──────────┐  │
//!   ────────────────────┼─▶│ security │──▶│   chat    │──▶│responder │──┼──▶ Hosted
//!                       │  │rate limit│   │ validate+ │   │  client  │  │    completion
//!                       │  └──────────┘   │  prompt   │   └──────────┘  │    API
//!                       │                 └───────────┘                  │
//!   JSON envelope       │  ┌──────────────────────────────────────────┐ │
//!   ◀───────────────────┼──│        http::response (Envelope)         │ │
//!                       │  └──────────────────────────────────────────┘ │
//!                       │                                                │
//!                       │  ┌──────────────────────────────────────────┐ │
//!                       │  │          Cross-Cutting Concerns           │ │
//!                       │  │  ┌────────┐ ┌─────────────┐ ┌──────────┐ │ │
//!                       │  │  │ config │ │observability│ │lifecycle │ │ │
//!                       │  │  └────────┘ └─────────────┘ └──────────┘ │ │
//!                       │  └──────────────────────────────────────────┘ │
//!                       └───────────────────────────────────────────────┘
//! ```
//!
//! Per request: rate check → validation → responder call, short-circuiting
//! at the first rejection. The only cross-request state is the rate
//! limiter's per-client counters.

// Core subsystems
pub mod chat;
pub mod config;
pub mod http;
pub mod responder;

// Cross-cutting concerns
pub mod lifecycle;
pub mod observability;
pub mod security;

pub use config::GatewayConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
