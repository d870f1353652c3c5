//! Process constraints: required-field validation and endpoint resolution.
//!
//! Each process variant fixes one relation between the initial and final
//! states; given the caller's final-state fields, the remaining
//! coordinates follow in closed form. The supplied State1 is trusted as
//! ground truth, so the resolutions use ratio forms of the governing
//! relations, which reduce to the substance's equation of state whenever
//! State1 satisfies it.

use crate::error::{ProcessError, ProcessResult};
use crate::kind::{FinalField, FinalFieldSpec, ProcessKind};
use crate::request::StateInputs;
use tp_core::units::{Mass, in_k, k, kpa, m3};
use tp_substances::{State, SubstanceModel};

/// Below this distance from n = 1 the polytropic work denominator is
/// treated as singular and the isothermal (log) closed form is used.
pub const POLYTROPIC_UNITY_EPS: f64 = 1e-9;

/// A process constraint with its numeric parameters fixed.
///
/// This is what the path sampler re-evaluates between the endpoints, so
/// sampled intermediate points obey the same relation that resolved
/// State2. A polytropic request with n within [`POLYTROPIC_UNITY_EPS`]
/// of 1 resolves to `Isothermal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ResolvedConstraint {
    ConstantVolume,
    ConstantPressure,
    Isothermal,
    Adiabatic { gamma: f64 },
    Polytropic { n: f64 },
}

/// Check that the provided final-state fields exactly match what the
/// variant requires.
pub fn check_final_fields(kind: ProcessKind, inputs: &StateInputs) -> ProcessResult<()> {
    let provided = inputs.provided_final_fields();

    match kind.final_field_spec() {
        FinalFieldSpec::All(required) => {
            for field in required {
                if inputs.final_field(*field).is_none() {
                    return Err(ProcessError::Validation {
                        what: format!(
                            "missing required field for {}: {}",
                            kind.display_name(),
                            field.as_str()
                        ),
                    });
                }
            }
            for field in &provided {
                if !required.contains(field) {
                    return Err(ProcessError::Validation {
                        what: format!(
                            "field {} is not used by {}",
                            field.as_str(),
                            kind.display_name()
                        ),
                    });
                }
            }
        }
        FinalFieldSpec::OneOf(alternatives) => {
            for field in &provided {
                if !alternatives.contains(field) {
                    return Err(ProcessError::Validation {
                        what: format!(
                            "field {} is not used by {}",
                            field.as_str(),
                            kind.display_name()
                        ),
                    });
                }
            }
            let names = || {
                alternatives
                    .iter()
                    .map(|f| f.as_str())
                    .collect::<Vec<_>>()
                    .join(", ")
            };
            if provided.is_empty() {
                return Err(ProcessError::Validation {
                    what: format!(
                        "{} requires exactly one of: {}",
                        kind.display_name(),
                        names()
                    ),
                });
            }
            if provided.len() > 1 {
                return Err(ProcessError::Validation {
                    what: format!(
                        "{} accepts only one of: {}",
                        kind.display_name(),
                        names()
                    ),
                });
            }
        }
    }

    Ok(())
}

/// Resolve the final state for `kind`, given a validated State1.
///
/// Assumes [`check_final_fields`] has passed, so required fields are
/// present; their values are still checked here.
pub fn resolve_endpoint(
    kind: ProcessKind,
    model: &dyn SubstanceModel,
    mass: Mass,
    state1: &State,
    inputs: &StateInputs,
) -> ProcessResult<(State, ResolvedConstraint)> {
    let p1 = state1.p_kpa();
    let v1 = state1.v_m3();
    let t1 = state1.t_k();

    let (p2, v2, t2, constraint) = match kind {
        ProcessKind::ConstantVolume => {
            // P1/T1 = P2/T2 at fixed volume.
            if let Some(t2) = inputs.t2 {
                let t2 = positive_value(t2, FinalField::T2)?;
                (p1 * t2 / t1, v1, t2, ResolvedConstraint::ConstantVolume)
            } else {
                let p2 = positive_value(required(inputs, FinalField::P2)?, FinalField::P2)?;
                (p2, v1, t1 * p2 / p1, ResolvedConstraint::ConstantVolume)
            }
        }
        ProcessKind::ConstantPressure => {
            // V1/T1 = V2/T2 at fixed pressure.
            let t2 = positive_value(required(inputs, FinalField::T2)?, FinalField::T2)?;
            (p1, v1 * t2 / t1, t2, ResolvedConstraint::ConstantPressure)
        }
        ProcessKind::Isothermal => {
            // P1·V1 = P2·V2 at fixed temperature.
            let v2 = positive_value(required(inputs, FinalField::V2)?, FinalField::V2)?;
            (p1 * v1 / v2, v2, t1, ResolvedConstraint::Isothermal)
        }
        ProcessKind::Adiabatic => {
            // P·V^γ = const, no heat transfer.
            let v2 = positive_value(required(inputs, FinalField::V2)?, FinalField::V2)?;
            let gamma = model.specific_heats().gamma;
            let ratio = v1 / v2;
            (
                p1 * ratio.powf(gamma),
                v2,
                t1 * ratio.powf(gamma - 1.0),
                ResolvedConstraint::Adiabatic { gamma },
            )
        }
        ProcessKind::Polytropic => {
            let v2 = positive_value(required(inputs, FinalField::V2)?, FinalField::V2)?;
            let n = required(inputs, FinalField::N)?;
            if !n.is_finite() {
                return Err(ProcessError::InvalidInput {
                    what: "polytropic exponent n must be a finite number".to_string(),
                });
            }
            if (n - 1.0).abs() < POLYTROPIC_UNITY_EPS {
                // n → 1 is the isothermal limit; the general work formula
                // divides by n − 1, so switch to the log closed form.
                (p1 * v1 / v2, v2, t1, ResolvedConstraint::Isothermal)
            } else {
                let p2 = p1 * (v1 / v2).powf(n);
                let t2 = model.temperature_from_pv(kpa(p2), m3(v2), mass)?;
                (p2, v2, in_k(t2), ResolvedConstraint::Polytropic { n })
            }
        }
    };

    let state2 = State::new(kpa(p2), m3(v2), k(t2))?;
    Ok((state2, constraint))
}

fn required(inputs: &StateInputs, field: FinalField) -> ProcessResult<f64> {
    inputs
        .final_field(field)
        .ok_or_else(|| ProcessError::Validation {
            what: format!("missing required field: {}", field.as_str()),
        })
}

fn positive_value(value: f64, field: FinalField) -> ProcessResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ProcessError::InvalidInput {
            what: format!("{} must be a positive number", field.as_str()),
        });
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::units::kg;
    use tp_substances::lookup_substance;

    fn air_state1() -> State {
        // EOS-consistent for 1 kg of air: P = 0.287 · 300 / 0.861
        State::new(kpa(100.0), m3(0.861), k(300.0)).unwrap()
    }

    fn only(field: FinalField, value: f64) -> StateInputs {
        let mut inputs = StateInputs::default();
        match field {
            FinalField::P2 => inputs.p2 = Some(value),
            FinalField::V2 => inputs.v2 = Some(value),
            FinalField::T2 => inputs.t2 = Some(value),
            FinalField::N => inputs.n = Some(value),
        }
        inputs
    }

    #[test]
    fn constant_volume_accepts_t2_or_p2_but_not_both() {
        let kind = ProcessKind::ConstantVolume;
        assert!(check_final_fields(kind, &only(FinalField::T2, 450.0)).is_ok());
        assert!(check_final_fields(kind, &only(FinalField::P2, 150.0)).is_ok());

        let both = StateInputs {
            t2: Some(450.0),
            p2: Some(150.0),
            ..Default::default()
        };
        assert!(matches!(
            check_final_fields(kind, &both),
            Err(ProcessError::Validation { .. })
        ));

        assert!(matches!(
            check_final_fields(kind, &StateInputs::default()),
            Err(ProcessError::Validation { .. })
        ));
    }

    #[test]
    fn constant_volume_rejects_v2() {
        let err = check_final_fields(ProcessKind::ConstantVolume, &only(FinalField::V2, 0.02))
            .unwrap_err();
        assert!(matches!(err, ProcessError::Validation { .. }));
        assert!(err.to_string().contains("V2"));
    }

    #[test]
    fn extraneous_exponent_is_rejected_for_isothermal() {
        let inputs = StateInputs {
            v2: Some(0.02),
            n: Some(1.3),
            ..Default::default()
        };
        let err = check_final_fields(ProcessKind::Isothermal, &inputs).unwrap_err();
        assert!(err.to_string().contains('n'));
    }

    #[test]
    fn constant_volume_from_p2_solves_t2() {
        let model = lookup_substance("idealGas").unwrap();
        let (state2, _) = resolve_endpoint(
            ProcessKind::ConstantVolume,
            model,
            kg(1.0),
            &air_state1(),
            &only(FinalField::P2, 150.0),
        )
        .unwrap();
        assert!((state2.t_k() - 450.0).abs() < 1e-9);
        assert_eq!(state2.v_m3(), 0.861);
    }

    #[test]
    fn polytropic_near_unity_resolves_isothermal() {
        let model = lookup_substance("idealGas").unwrap();
        let inputs = StateInputs {
            v2: Some(1.722),
            n: Some(1.0 + 1e-12),
            ..Default::default()
        };
        let (state2, constraint) =
            resolve_endpoint(ProcessKind::Polytropic, model, kg(1.0), &air_state1(), &inputs)
                .unwrap();
        assert_eq!(constraint, ResolvedConstraint::Isothermal);
        assert_eq!(state2.t_k(), 300.0);
        assert!((state2.p_kpa() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn adiabatic_uses_substance_gamma() {
        let model = lookup_substance("steam").unwrap();
        let (state2, constraint) = resolve_endpoint(
            ProcessKind::Adiabatic,
            model,
            kg(1.0),
            &air_state1(),
            &only(FinalField::V2, 1.722),
        )
        .unwrap();
        match constraint {
            ResolvedConstraint::Adiabatic { gamma } => assert_eq!(gamma, 1.33),
            other => panic!("unexpected constraint: {other:?}"),
        }
        let expected_p2 = 100.0 * 0.5f64.powf(1.33);
        assert!((state2.p_kpa() - expected_p2).abs() < 1e-9);
    }

    #[test]
    fn non_positive_v2_is_invalid_input() {
        let model = lookup_substance("idealGas").unwrap();
        let err = resolve_endpoint(
            ProcessKind::Isothermal,
            model,
            kg(1.0),
            &air_state1(),
            &only(FinalField::V2, -0.02),
        )
        .unwrap_err();
        assert!(matches!(err, ProcessError::InvalidInput { .. }));
    }
}
