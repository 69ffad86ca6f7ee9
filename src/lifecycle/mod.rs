//! Lifecycle subsystem.
//!
//! # Data Flow
//! ```text
//! OS signal (Ctrl+C / SIGTERM)
//!     → signals.rs (await first signal)
//!     → shutdown.rs (broadcast to subscribers)
//!     → server drains in-flight requests and stops
//! ```

pub mod shutdown;
pub mod signals;

pub use shutdown::Shutdown;
