//! Security subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming chat request:
//!     → rate_limit.rs (check per-address budget)
//!     → Pass to validation and the handler
//! ```
//!
//! # Design Decisions
//! - Rate limiting runs before all other request handling
//! - Fail closed: an exhausted budget short-circuits the request
//! - No trust in client input

pub mod rate_limit;

pub use rate_limit::RateLimiterState;
