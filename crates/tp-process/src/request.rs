//! Engine-level request types.

use crate::kind::{FinalField, ProcessKind};

/// Caller-supplied state coordinates, in the engine's fixed units.
///
/// `p1`, `v1`, `t1` are mandatory for every process; the final-state
/// fields a variant accepts are declared by
/// [`ProcessKind::final_field_spec`].
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StateInputs {
    /// Initial pressure [kPa].
    pub p1: Option<f64>,
    /// Initial volume [m³].
    pub v1: Option<f64>,
    /// Initial temperature [K].
    pub t1: Option<f64>,
    /// Final pressure [kPa].
    pub p2: Option<f64>,
    /// Final volume [m³].
    pub v2: Option<f64>,
    /// Final temperature [K].
    pub t2: Option<f64>,
    /// Polytropic exponent.
    pub n: Option<f64>,
}

impl StateInputs {
    /// Value of a final-state field, if provided.
    pub fn final_field(&self, field: FinalField) -> Option<f64> {
        match field {
            FinalField::P2 => self.p2,
            FinalField::V2 => self.v2,
            FinalField::T2 => self.t2,
            FinalField::N => self.n,
        }
    }

    /// All provided final-state fields, in declaration order.
    pub fn provided_final_fields(&self) -> Vec<FinalField> {
        FinalField::ALL
            .iter()
            .copied()
            .filter(|field| self.final_field(*field).is_some())
            .collect()
    }
}

/// One process-solving invocation.
///
/// Constructed per call and never mutated; the solver holds no state
/// between requests.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessRequest {
    pub kind: ProcessKind,
    /// Catalog key of the working substance.
    pub substance: String,
    /// System mass [kg].
    pub mass_kg: f64,
    pub inputs: StateInputs,
}
