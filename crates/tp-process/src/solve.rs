//! Process solving: validation, endpoint resolution, and energetics.

use crate::constraint::{ResolvedConstraint, check_final_fields, resolve_endpoint};
use crate::error::{ProcessError, ProcessResult};
use crate::path::{PvPoint, TsPoint, sample_path};
use crate::request::{ProcessRequest, StateInputs};
use tp_core::numeric::{Tolerances, nearly_equal};
use tp_core::units::{Mass, in_kj, in_kpa, k, kg, kpa, m3};
use tp_substances::{State, SubstanceModel, lookup_substance};

/// Everything a solve produces. Owned exclusively by the caller;
/// assembling it is the solver's last act.
///
/// Sign conventions: W is positive when the system does work on the
/// surroundings, Q is positive when heat enters the system.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessOutcome {
    pub state1: State,
    pub state2: State,
    /// Total work [kJ].
    pub work_kj: f64,
    /// Total heat transfer [kJ].
    pub heat_kj: f64,
    /// Internal energy change [kJ].
    pub delta_u_kj: f64,
    /// Entropy change [kJ/K].
    pub delta_s_kj_per_k: f64,
    pub pv_path: Vec<PvPoint>,
    pub ts_path: Vec<TsPoint>,
}

/// Solve one closed-system process request.
///
/// Pure and stateless: identical requests produce identical outcomes,
/// and concurrent calls share nothing mutable.
pub fn solve_process(request: &ProcessRequest) -> ProcessResult<ProcessOutcome> {
    let state1 = initial_state(&request.inputs)?;

    if !request.mass_kg.is_finite() || request.mass_kg <= 0.0 {
        return Err(ProcessError::Validation {
            what: "mass must be a positive number of kg".to_string(),
        });
    }
    let mass = kg(request.mass_kg);

    let model =
        lookup_substance(&request.substance).ok_or_else(|| ProcessError::UnsupportedSubstance {
            key: request.substance.clone(),
        })?;

    check_eos_consistency(model, &state1, mass, &request.substance);

    check_final_fields(request.kind, &request.inputs)?;
    let (state2, constraint) = resolve_endpoint(request.kind, model, mass, &state1, &request.inputs)?;

    let (work_kj, heat_kj, delta_u_kj, delta_s_kj_per_k) =
        energetics(constraint, model, mass, &state1, &state2)?;

    let (pv_path, ts_path) = sample_path(constraint, model, mass, &state1, &state2)?;

    tracing::debug!(
        process = %request.kind,
        substance = %request.substance,
        work_kj,
        heat_kj,
        "process solved"
    );

    Ok(ProcessOutcome {
        state1,
        state2,
        work_kj,
        heat_kj,
        delta_u_kj,
        delta_s_kj_per_k,
        pv_path,
        ts_path,
    })
}

/// Build and validate State1 from the mandatory base fields.
fn initial_state(inputs: &StateInputs) -> ProcessResult<State> {
    let mut missing = Vec::new();
    for (name, value) in [("P1", inputs.p1), ("V1", inputs.v1), ("T1", inputs.t1)] {
        if value.is_none() {
            missing.push(name);
        }
    }
    if !missing.is_empty() {
        return Err(ProcessError::Validation {
            what: format!("missing required input: {}", missing.join(", ")),
        });
    }

    // Positivity and finiteness checks live in State::new; failures
    // surface as domain errors.
    let state = State::new(
        kpa(inputs.p1.unwrap_or_default()),
        m3(inputs.v1.unwrap_or_default()),
        k(inputs.t1.unwrap_or_default()),
    )?;
    Ok(state)
}

/// Warn when the supplied P1 disagrees with the substance's equation of
/// state. The supplied value stays ground truth for work integration.
fn check_eos_consistency(model: &dyn SubstanceModel, state1: &State, mass: Mass, substance: &str) {
    if let Ok(p_eos) = model.pressure_from_vt(state1.volume(), state1.temperature(), mass) {
        let supplied = state1.p_kpa();
        let expected = in_kpa(p_eos);
        if !nearly_equal(supplied, expected, Tolerances::state_consistency()) {
            tracing::warn!(
                substance,
                supplied_p1_kpa = supplied,
                eos_p1_kpa = expected,
                "P1 is inconsistent with the equation of state; trusting the supplied value"
            );
        }
    }
}

/// Work, heat, ΔU, and ΔS for the resolved process, in kJ and kJ/K.
fn energetics(
    constraint: ResolvedConstraint,
    model: &dyn SubstanceModel,
    mass: Mass,
    state1: &State,
    state2: &State,
) -> ProcessResult<(f64, f64, f64, f64)> {
    let p1 = state1.p_kpa();
    let v1 = state1.v_m3();
    let p2 = state2.p_kpa();
    let v2 = state2.v_m3();

    // kPa·m³ = kJ throughout.
    let work = match constraint {
        ResolvedConstraint::ConstantVolume => 0.0,
        ResolvedConstraint::ConstantPressure => p1 * (v2 - v1),
        ResolvedConstraint::Isothermal => p1 * v1 * (v2 / v1).ln(),
        ResolvedConstraint::Adiabatic { gamma } => (p1 * v1 - p2 * v2) / (gamma - 1.0),
        ResolvedConstraint::Polytropic { n } => (p1 * v1 - p2 * v2) / (n - 1.0),
    };

    let delta_u = in_kj(model.internal_energy_change(
        state1.temperature(),
        state2.temperature(),
        mass,
    )?);

    let (heat, delta_s) = match constraint {
        // Adiabatic: heat transfer and entropy change are fixed by the
        // process definition.
        ResolvedConstraint::Adiabatic { .. } => (0.0, 0.0),
        _ => {
            let heat = delta_u + work;
            let delta_s = model.entropy_change(state1, state2, mass)?;
            (heat, delta_s)
        }
    };

    Ok((work, heat, delta_u, delta_s))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ProcessKind;

    fn request(kind: ProcessKind, inputs: StateInputs) -> ProcessRequest {
        ProcessRequest {
            kind,
            substance: "idealGas".to_string(),
            mass_kg: 1.0,
            inputs,
        }
    }

    #[test]
    fn missing_base_field_is_a_validation_error() {
        let req = request(
            ProcessKind::Isothermal,
            StateInputs {
                p1: Some(100.0),
                t1: Some(300.0),
                v2: Some(0.02),
                ..Default::default()
            },
        );
        let err = solve_process(&req).unwrap_err();
        assert!(matches!(err, ProcessError::Validation { .. }));
        assert!(err.to_string().contains("V1"));
    }

    #[test]
    fn non_positive_v1_is_a_domain_error() {
        for kind in ProcessKind::ALL {
            let req = request(
                kind,
                StateInputs {
                    p1: Some(100.0),
                    v1: Some(-0.01),
                    t1: Some(300.0),
                    p2: Some(150.0),
                    v2: Some(0.02),
                    t2: Some(450.0),
                    n: Some(1.3),
                },
            );
            let err = solve_process(&req).unwrap_err();
            assert!(
                matches!(err, ProcessError::Domain { .. }),
                "{kind:?}: {err}"
            );
        }
    }

    #[test]
    fn non_positive_mass_is_a_validation_error() {
        let mut req = request(
            ProcessKind::Isothermal,
            StateInputs {
                p1: Some(100.0),
                v1: Some(0.01),
                t1: Some(300.0),
                v2: Some(0.02),
                ..Default::default()
            },
        );
        req.mass_kg = 0.0;
        assert!(matches!(
            solve_process(&req).unwrap_err(),
            ProcessError::Validation { .. }
        ));
    }

    #[test]
    fn unknown_substance_is_reported_with_its_key() {
        let mut req = request(
            ProcessKind::Isothermal,
            StateInputs {
                p1: Some(100.0),
                v1: Some(0.01),
                t1: Some(300.0),
                v2: Some(0.02),
                ..Default::default()
            },
        );
        req.substance = "phlogiston".to_string();
        match solve_process(&req).unwrap_err() {
            ProcessError::UnsupportedSubstance { key } => assert_eq!(key, "phlogiston"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn constant_volume_does_no_work() {
        let req = request(
            ProcessKind::ConstantVolume,
            StateInputs {
                p1: Some(100.0),
                v1: Some(0.861),
                t1: Some(300.0),
                t2: Some(450.0),
                ..Default::default()
            },
        );
        let outcome = solve_process(&req).unwrap();
        assert_eq!(outcome.work_kj, 0.0);
        // Q = ΔU = m·cv·(T2 − T1) = 0.718 · 150
        assert!((outcome.delta_u_kj - 107.7).abs() < 1e-9);
        assert_eq!(outcome.heat_kj, outcome.delta_u_kj);
        assert!((outcome.state2.p_kpa() - 150.0).abs() < 1e-9);
    }

    #[test]
    fn constant_pressure_work_is_p_dv() {
        let req = request(
            ProcessKind::ConstantPressure,
            StateInputs {
                p1: Some(100.0),
                v1: Some(0.861),
                t1: Some(300.0),
                t2: Some(600.0),
                ..Default::default()
            },
        );
        let outcome = solve_process(&req).unwrap();
        assert!((outcome.state2.v_m3() - 1.722).abs() < 1e-12);
        assert!((outcome.work_kj - 100.0 * 0.861).abs() < 1e-9);
        assert!((outcome.heat_kj - (outcome.delta_u_kj + outcome.work_kj)).abs() < 1e-12);
        // ΔS = m·cp·ln(2) for an EOS-consistent perfect gas at constant P
        assert!((outcome.delta_s_kj_per_k - 1.005 * f64::ln(2.0)).abs() < 1e-9);
    }

    #[test]
    fn adiabatic_has_no_heat_and_no_entropy_change() {
        let req = request(
            ProcessKind::Adiabatic,
            StateInputs {
                p1: Some(100.0),
                v1: Some(0.861),
                t1: Some(300.0),
                v2: Some(1.722),
                ..Default::default()
            },
        );
        let outcome = solve_process(&req).unwrap();
        assert_eq!(outcome.heat_kj, 0.0);
        assert_eq!(outcome.delta_s_kj_per_k, 0.0);
        // Expansion cools the gas and does positive work
        assert!(outcome.state2.t_k() < 300.0);
        assert!(outcome.work_kj > 0.0);
        // For consistent properties, W ≈ −ΔU
        assert!((outcome.work_kj + outcome.delta_u_kj).abs() < 1e-9);
    }
}
