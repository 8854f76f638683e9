//! Chat request processing.
//!
//! # Data Flow
//! ```text
//! POST /chat form fields
//!     → validator.rs (trim, presence and length checks)
//!     → prompt.rs (instruction + history + message)
//!     → responder (upstream call)
//! ```
//!
//! Both functions here are pure; all cross-request state lives in the
//! rate limiter.

pub mod prompt;
pub mod validator;

pub use prompt::build_prompt;
pub use validator::{validate, ValidationError};
