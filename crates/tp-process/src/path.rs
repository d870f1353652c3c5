//! Path sampling for P-V and T-S plotting.
//!
//! Produces a fixed-size, ordered sequence of intermediate states between
//! the resolved endpoints. Each intermediate point is re-derived from the
//! process's governing relation — never a naive independent interpolation
//! of P and V — and entropy is evaluated through the substance model from
//! State1 to each intermediate state. The first and last samples are
//! pinned to the exact endpoint states so sampling cannot drift.

use crate::constraint::ResolvedConstraint;
use crate::error::ProcessResult;
use tp_core::units::{Mass, in_k, k, kpa, m3};
use tp_substances::{State, SubstanceModel};

/// Samples per path (50 intervals).
pub const PATH_POINTS: usize = 51;

/// One sampled point on the P-V path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PvPoint {
    /// Volume [m³].
    pub v_m3: f64,
    /// Pressure [kPa].
    pub p_kpa: f64,
}

/// One sampled point on the T-S path. Entropy is reported relative to
/// State1 (S1 = 0).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TsPoint {
    /// Entropy change from State1 [kJ/K].
    pub s_kj_per_k: f64,
    /// Temperature [K].
    pub t_k: f64,
}

/// Sample the process path between two resolved states.
///
/// Constant-volume processes sweep temperature; every other variant
/// sweeps volume, linearly from V1 to V2 so the sequence follows the
/// path direction for compression as well as expansion. Pure function of
/// its arguments; restartable, no shared state.
pub fn sample_path(
    constraint: ResolvedConstraint,
    model: &dyn SubstanceModel,
    mass: Mass,
    state1: &State,
    state2: &State,
) -> ProcessResult<(Vec<PvPoint>, Vec<TsPoint>)> {
    let p1 = state1.p_kpa();
    let v1 = state1.v_m3();
    let t1 = state1.t_k();
    let t2 = state2.t_k();
    let v2 = state2.v_m3();

    let mut pv = Vec::with_capacity(PATH_POINTS);
    let mut ts = Vec::with_capacity(PATH_POINTS);
    let intervals = (PATH_POINTS - 1) as f64;

    for i in 0..PATH_POINTS {
        let frac = i as f64 / intervals;

        let (p, v, t) = match constraint {
            ResolvedConstraint::ConstantVolume => {
                let t = t1 + frac * (t2 - t1);
                (p1 * t / t1, v1, t)
            }
            ResolvedConstraint::ConstantPressure => {
                let v = v1 + frac * (v2 - v1);
                (p1, v, t1 * v / v1)
            }
            ResolvedConstraint::Isothermal => {
                let v = v1 + frac * (v2 - v1);
                (p1 * v1 / v, v, t1)
            }
            ResolvedConstraint::Adiabatic { gamma } => {
                let v = v1 + frac * (v2 - v1);
                let ratio = v1 / v;
                (p1 * ratio.powf(gamma), v, t1 * ratio.powf(gamma - 1.0))
            }
            ResolvedConstraint::Polytropic { n } => {
                let v = v1 + frac * (v2 - v1);
                let p = p1 * (v1 / v).powf(n);
                let t = model.temperature_from_pv(kpa(p), m3(v), mass)?;
                (p, v, in_k(t))
            }
        };

        let s = match constraint {
            // Isentropic by definition.
            ResolvedConstraint::Adiabatic { .. } => 0.0,
            _ => {
                let intermediate = State::new(kpa(p), m3(v), k(t))?;
                model.entropy_change(state1, &intermediate, mass)?
            }
        };

        pv.push(PvPoint { v_m3: v, p_kpa: p });
        ts.push(TsPoint { s_kj_per_k: s, t_k: t });
    }

    // Pin endpoints to the resolved states.
    let ds_total = match constraint {
        ResolvedConstraint::Adiabatic { .. } => 0.0,
        _ => model.entropy_change(state1, state2, mass)?,
    };
    pv[0] = PvPoint { v_m3: v1, p_kpa: p1 };
    pv[PATH_POINTS - 1] = PvPoint {
        v_m3: v2,
        p_kpa: state2.p_kpa(),
    };
    ts[0] = TsPoint {
        s_kj_per_k: 0.0,
        t_k: t1,
    };
    ts[PATH_POINTS - 1] = TsPoint {
        s_kj_per_k: ds_total,
        t_k: t2,
    };

    Ok((pv, ts))
}
