//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming request path
//!     → table.rs (exact-match lookup)
//!     → Return: matched PageId or None
//!
//! Table construction (at startup):
//!     ROUTES (fixed declaration)
//!     → build hash map, assert uniqueness
//!     → Freeze as immutable RouteTable
//! ```
//!
//! # Design Decisions
//! - The route set is fixed at build time; no dynamic registration
//! - Deterministic: same path always resolves to the same page
//! - No-match is an expected condition, surfaced as `None`

pub mod table;

pub use table::{Route, RouteTable, ROUTES};
