//! tp-process: closed-system thermodynamic process solving.
//!
//! Given an initial state, a process constraint, a substance model, and a
//! system mass, this crate resolves the final state, computes the work,
//! heat, internal-energy change, and entropy change for the process, and
//! samples the theoretical path for P-V and T-S plotting.
//!
//! The entire crate is pure computation: every solve is an independent
//! function of its inputs with no shared state, so any number of requests
//! may run in parallel without coordination.
//!
//! # Example
//!
//! ```
//! use tp_process::{ProcessKind, ProcessRequest, StateInputs, solve_process};
//!
//! let request = ProcessRequest {
//!     kind: ProcessKind::Isothermal,
//!     substance: "idealGas".to_string(),
//!     mass_kg: 1.0,
//!     inputs: StateInputs {
//!         p1: Some(100.0),
//!         v1: Some(0.01),
//!         t1: Some(300.0),
//!         v2: Some(0.02),
//!         ..Default::default()
//!     },
//! };
//!
//! let outcome = solve_process(&request).unwrap();
//! assert!((outcome.state2.p_kpa() - 50.0).abs() < 1e-9);
//! ```

pub mod constraint;
pub mod error;
pub mod kind;
pub mod path;
pub mod request;
pub mod solve;

// Re-exports for ergonomics
pub use constraint::ResolvedConstraint;
pub use error::{ProcessError, ProcessResult};
pub use kind::{FinalField, FinalFieldSpec, ProcessKind};
pub use path::{PATH_POINTS, PvPoint, TsPoint, sample_path};
pub use request::{ProcessRequest, StateInputs};
pub use solve::{ProcessOutcome, solve_process};
