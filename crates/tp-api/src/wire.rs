//! Wire-level request and response types.
//!
//! Units are fixed at this boundary: kPa, m³, K, kg, kJ, kJ/K. The
//! engine performs no unit conversion.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tp_core::numeric::ensure_finite;
use tp_process::{ProcessError, ProcessKind, ProcessOutcome, StateInputs};

fn default_mass() -> f64 {
    1.0
}

/// A process-solving request as received from a JSON caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessRequest {
    pub process_type: ProcessKind,
    pub substance: String,
    /// Numeric state fields, keyed by `P1,V1,T1,P2,V2,T2,n`.
    pub input_data: BTreeMap<String, f64>,
    /// System mass [kg].
    #[serde(default = "default_mass")]
    pub mass: f64,
}

impl ProcessRequest {
    /// Convert to the engine's typed request, rejecting unknown keys and
    /// non-finite values.
    pub fn to_engine(&self) -> Result<tp_process::ProcessRequest, ProcessError> {
        let mut inputs = StateInputs::default();
        for (key, value) in &self.input_data {
            ensure_finite(*value, "input_data").map_err(|_| ProcessError::Validation {
                what: format!("field {key} must be a finite number"),
            })?;
            let slot = match key.as_str() {
                "P1" => &mut inputs.p1,
                "V1" => &mut inputs.v1,
                "T1" => &mut inputs.t1,
                "P2" => &mut inputs.p2,
                "V2" => &mut inputs.v2,
                "T2" => &mut inputs.t2,
                "n" => &mut inputs.n,
                other => {
                    return Err(ProcessError::Validation {
                        what: format!("unknown input field: {other}"),
                    });
                }
            };
            *slot = Some(*value);
        }

        Ok(tp_process::ProcessRequest {
            kind: self.process_type,
            substance: self.substance.clone(),
            mass_kg: self.mass,
            inputs,
        })
    }
}

/// One point of the P-V trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PvSample {
    #[serde(rename = "V")]
    pub v: f64,
    #[serde(rename = "P")]
    pub p: f64,
}

/// One point of the T-S trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TsSample {
    #[serde(rename = "S")]
    pub s: f64,
    #[serde(rename = "T")]
    pub t: f64,
}

/// The resolved process, as returned to a JSON caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProcessResponse {
    #[serde(rename = "P1")]
    pub p1: f64,
    #[serde(rename = "V1")]
    pub v1: f64,
    #[serde(rename = "T1")]
    pub t1: f64,
    #[serde(rename = "P2")]
    pub p2: f64,
    #[serde(rename = "V2")]
    pub v2: f64,
    #[serde(rename = "T2")]
    pub t2: f64,
    #[serde(rename = "W")]
    pub w: f64,
    #[serde(rename = "Q")]
    pub q: f64,
    #[serde(rename = "deltaU")]
    pub delta_u: f64,
    #[serde(rename = "deltaS")]
    pub delta_s: f64,
    #[serde(rename = "pvData")]
    pub pv_data: Vec<PvSample>,
    #[serde(rename = "tsData")]
    pub ts_data: Vec<TsSample>,
}

impl From<ProcessOutcome> for ProcessResponse {
    fn from(outcome: ProcessOutcome) -> Self {
        ProcessResponse {
            p1: outcome.state1.p_kpa(),
            v1: outcome.state1.v_m3(),
            t1: outcome.state1.t_k(),
            p2: outcome.state2.p_kpa(),
            v2: outcome.state2.v_m3(),
            t2: outcome.state2.t_k(),
            w: outcome.work_kj,
            q: outcome.heat_kj,
            delta_u: outcome.delta_u_kj,
            delta_s: outcome.delta_s_kj_per_k,
            pv_data: outcome
                .pv_path
                .iter()
                .map(|point| PvSample {
                    v: point.v_m3,
                    p: point.p_kpa,
                })
                .collect(),
            ts_data: outcome
                .ts_path
                .iter()
                .map(|point| TsSample {
                    s: point.s_kj_per_k,
                    t: point.t_k,
                })
                .collect(),
        }
    }
}

/// One catalog entry for substance selection UIs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubstanceInfo {
    pub key: String,
    pub name: String,
}
