//! Process variants and their required-field contracts.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of supported process types.
///
/// Serde names match the wire enum (`constantVolume`, `isothermal`, …).
/// Adding a variant forces every `match` in the solver and sampler to
/// handle it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProcessKind {
    ConstantVolume,
    ConstantPressure,
    Isothermal,
    Adiabatic,
    Polytropic,
}

/// A final-state field the caller may supply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalField {
    P2,
    V2,
    T2,
    N,
}

impl FinalField {
    pub const ALL: [FinalField; 4] = [
        FinalField::P2,
        FinalField::V2,
        FinalField::T2,
        FinalField::N,
    ];

    /// Wire name of the field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FinalField::P2 => "P2",
            FinalField::V2 => "V2",
            FinalField::T2 => "T2",
            FinalField::N => "n",
        }
    }
}

/// Which final-state fields a process variant requires.
///
/// The provided set must match exactly; extraneous fields are a
/// validation error, never silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FinalFieldSpec {
    /// Every listed field must be present.
    All(&'static [FinalField]),
    /// Exactly one of the listed fields must be present.
    OneOf(&'static [FinalField]),
}

impl ProcessKind {
    pub const ALL: [ProcessKind; 5] = [
        ProcessKind::ConstantVolume,
        ProcessKind::ConstantPressure,
        ProcessKind::Isothermal,
        ProcessKind::Adiabatic,
        ProcessKind::Polytropic,
    ];

    /// Human-readable process name.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProcessKind::ConstantVolume => "Constant Volume (Isochoric)",
            ProcessKind::ConstantPressure => "Constant Pressure (Isobaric)",
            ProcessKind::Isothermal => "Isothermal",
            ProcessKind::Adiabatic => "Adiabatic (Isentropic)",
            ProcessKind::Polytropic => "Polytropic",
        }
    }

    /// Governing equation in display form.
    pub fn equation(&self) -> &'static str {
        match self {
            ProcessKind::ConstantVolume => "V = const, P1/T1 = P2/T2",
            ProcessKind::ConstantPressure => "P = const, V1/T1 = V2/T2",
            ProcessKind::Isothermal => "T = const, P1 V1 = P2 V2",
            ProcessKind::Adiabatic => "Q = 0, P V^γ = const",
            ProcessKind::Polytropic => "P V^n = const",
        }
    }

    /// The final-state fields this variant requires from the caller.
    pub fn final_field_spec(&self) -> FinalFieldSpec {
        match self {
            // T2 solved from P2 if given, else the caller supplies T2.
            ProcessKind::ConstantVolume => {
                FinalFieldSpec::OneOf(&[FinalField::T2, FinalField::P2])
            }
            ProcessKind::ConstantPressure => FinalFieldSpec::All(&[FinalField::T2]),
            ProcessKind::Isothermal => FinalFieldSpec::All(&[FinalField::V2]),
            ProcessKind::Adiabatic => FinalFieldSpec::All(&[FinalField::V2]),
            ProcessKind::Polytropic => FinalFieldSpec::All(&[FinalField::V2, FinalField::N]),
        }
    }
}

impl fmt::Display for ProcessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}
