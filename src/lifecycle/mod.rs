//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (main):
//!     Load config → Validate → Init metrics → Bind listener → Serve
//!
//! Shutdown (shutdown.rs):
//!     ctrl-c or programmatic trigger → Stop accepting → Drain → Exit
//! ```

pub mod shutdown;

pub use shutdown::Shutdown;
