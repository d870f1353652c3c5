//! Service facade: the two engine entry points.

use crate::error::ApiResult;
use crate::wire::{ProcessRequest, ProcessResponse, SubstanceInfo};
use tp_process::solve_process;
use tp_substances::substance_catalog;

/// Enumerate the available substances, in stable catalog order.
pub fn list_substances() -> Vec<SubstanceInfo> {
    substance_catalog()
        .iter()
        .map(|entry| SubstanceInfo {
            key: entry.key.to_string(),
            name: entry.display_name.to_string(),
        })
        .collect()
}

/// Solve one process request.
pub fn solve(request: &ProcessRequest) -> ApiResult<ProcessResponse> {
    let engine_request = request.to_engine()?;
    let outcome = solve_process(&engine_request)?;
    Ok(outcome.into())
}
