//! tp-core: stable foundation for thermoproc.
//!
//! Contains:
//! - units (uom SI types + constructors for the engine's fixed units)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{TpError, TpResult};
pub use numeric::*;
pub use units::*;
