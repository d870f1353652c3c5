//! tp-api: the external interface of the thermoproc engine.
//!
//! Exposes the two call shapes consumed by request-handling layers:
//! `list_substances()` and `solve(ProcessRequest)`, with serde wire types
//! whose JSON field names match the published contract exactly
//! (`process_type`, `input_data`, `deltaU`, `pvData`, …).

pub mod error;
pub mod service;
pub mod wire;

pub use error::{ApiError, ApiResult};
pub use service::{list_substances, solve};
pub use wire::{ProcessRequest, ProcessResponse, PvSample, SubstanceInfo, TsSample};
