//! Perfect-gas substance models with frozen specific heats.
//!
//! Every built-in substance is a perfect gas: `P·V = m·R·T` with constant
//! cv and cp. The property sets are specific (per kg) so formulas using
//! a system mass in kg work consistently.

use crate::error::{SubstanceError, SubstanceResult};
use crate::model::{EntropyChange, SpecificHeats, SubstanceModel};
use crate::state::{SpecHeatCapacity, State};
use tp_core::units::{
    Energy, Mass, Pressure, Temperature, Volume, in_k, in_kg, in_kpa, in_m3, k, kj, kpa,
};

/// Frozen property constants for a perfect gas, all in kJ/(kg·K).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GasProperties {
    /// Specific gas constant R.
    pub r: SpecHeatCapacity,
    /// Specific heat at constant volume.
    pub cv: SpecHeatCapacity,
    /// Specific heat at constant pressure.
    pub cp: SpecHeatCapacity,
    /// Ratio of specific heats.
    pub gamma: f64,
}

impl GasProperties {
    /// Air-like ideal gas (M ≈ 28.97 kg/kmol).
    ///
    /// cv and cp come from molar values of 20.8 and 29.1 J/(mol·K); R is
    /// the conventional 0.287 kJ/(kg·K). γ is derived from cp/cv so the
    /// set is internally consistent (cp − cv = R).
    pub const AIR: GasProperties = GasProperties {
        r: 0.287,
        cv: 0.718,
        cp: 1.005,
        gamma: 1.005 / 0.718,
    };

    /// Steam (H₂O, M ≈ 18.015 kg/kmol), treated as a perfect gas.
    pub const STEAM: GasProperties = GasProperties {
        r: 0.4615,
        cv: 1.410,
        cp: 1.996,
        gamma: 1.33,
    };

    /// Methane (CH₄, M ≈ 16.04 kg/kmol), treated as a perfect gas.
    pub const METHANE: GasProperties = GasProperties {
        r: 0.5183,
        cv: 1.700,
        cp: 2.220,
        gamma: 1.31,
    };
}

/// A perfect-gas substance model parameterized by a frozen property set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerfectGas {
    props: GasProperties,
}

impl PerfectGas {
    pub const fn new(props: GasProperties) -> Self {
        Self { props }
    }

    pub fn properties(&self) -> &GasProperties {
        &self.props
    }

    fn require_positive(value: f64, what: &'static str) -> SubstanceResult<f64> {
        if !value.is_finite() || value <= 0.0 {
            return Err(SubstanceError::NonPhysical { what });
        }
        Ok(value)
    }
}

impl SubstanceModel for PerfectGas {
    fn pressure_from_vt(&self, v: Volume, t: Temperature, mass: Mass) -> SubstanceResult<Pressure> {
        let v = Self::require_positive(in_m3(v), "volume")?;
        let t = Self::require_positive(in_k(t), "temperature")?;
        let m = Self::require_positive(in_kg(mass), "mass")?;

        // P [kPa] = m [kg] · R [kJ/(kg·K)] · T [K] / V [m³]
        Ok(kpa(m * self.props.r * t / v))
    }

    fn temperature_from_pv(
        &self,
        p: Pressure,
        v: Volume,
        mass: Mass,
    ) -> SubstanceResult<Temperature> {
        let p = Self::require_positive(in_kpa(p), "pressure")?;
        let v = Self::require_positive(in_m3(v), "volume")?;
        let m = Self::require_positive(in_kg(mass), "mass")?;

        Ok(k(p * v / (m * self.props.r)))
    }

    fn internal_energy_change(
        &self,
        t1: Temperature,
        t2: Temperature,
        mass: Mass,
    ) -> SubstanceResult<Energy> {
        let t1 = Self::require_positive(in_k(t1), "temperature")?;
        let t2 = Self::require_positive(in_k(t2), "temperature")?;
        let m = Self::require_positive(in_kg(mass), "mass")?;

        Ok(kj(m * self.props.cv * (t2 - t1)))
    }

    fn entropy_change(
        &self,
        state1: &State,
        state2: &State,
        mass: Mass,
    ) -> SubstanceResult<EntropyChange> {
        let m = Self::require_positive(in_kg(mass), "mass")?;

        // ΔS = m·cv·ln(T2/T1) + m·R·ln(V2/V1), in kJ/K.
        // States are validated positive on construction, so the ratios
        // are safe log arguments.
        let t_term = self.props.cv * (state2.t_k() / state1.t_k()).ln();
        let v_term = self.props.r * (state2.v_m3() / state1.v_m3()).ln();
        Ok(m * (t_term + v_term))
    }

    fn gas_constant(&self) -> SpecHeatCapacity {
        self.props.r
    }

    fn specific_heats(&self) -> SpecificHeats {
        SpecificHeats {
            cv: self.props.cv,
            cp: self.props.cp,
            gamma: self.props.gamma,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tp_core::units::{k, kg, kpa, m3};

    const AIR: PerfectGas = PerfectGas::new(GasProperties::AIR);

    #[test]
    fn ideal_gas_law_round_trip() {
        // P = 1 · 0.287 · 300 / 0.861 = 100 kPa
        let p = AIR.pressure_from_vt(m3(0.861), k(300.0), kg(1.0)).unwrap();
        assert!((in_kpa(p) - 100.0).abs() < 1e-9);

        let t = AIR.temperature_from_pv(p, m3(0.861), kg(1.0)).unwrap();
        assert!((in_k(t) - 300.0).abs() < 1e-9);
    }

    #[test]
    fn internal_energy_scales_with_mass_and_dt() {
        let du = AIR
            .internal_energy_change(k(300.0), k(400.0), kg(2.0))
            .unwrap();
        // 2 kg · 0.718 kJ/(kg·K) · 100 K = 143.6 kJ
        assert!((tp_core::units::in_kj(du) - 143.6).abs() < 1e-9);
    }

    #[test]
    fn entropy_change_zero_for_identical_states() {
        let s = State::new(kpa(100.0), m3(0.01), k(300.0)).unwrap();
        let ds = AIR.entropy_change(&s, &s, kg(1.0)).unwrap();
        assert_eq!(ds, 0.0);
    }

    #[test]
    fn isothermal_entropy_is_r_log_volume_ratio() {
        let s1 = State::new(kpa(100.0), m3(0.01), k(300.0)).unwrap();
        let s2 = State::new(kpa(50.0), m3(0.02), k(300.0)).unwrap();
        let ds = AIR.entropy_change(&s1, &s2, kg(1.0)).unwrap();
        let expected = 0.287 * f64::ln(2.0);
        assert!((ds - expected).abs() < 1e-12);
    }

    #[test]
    fn air_constants_are_consistent() {
        let heats = AIR.specific_heats();
        assert!((heats.cp - heats.cv - AIR.gas_constant()).abs() < 1e-12);
        assert!((heats.gamma - heats.cp / heats.cv).abs() < 1e-15);
    }

    #[test]
    fn reject_non_physical_inputs() {
        assert!(AIR.pressure_from_vt(m3(-1.0), k(300.0), kg(1.0)).is_err());
        assert!(AIR.pressure_from_vt(m3(1.0), k(0.0), kg(1.0)).is_err());
        assert!(
            AIR.temperature_from_pv(kpa(100.0), m3(1.0), kg(0.0))
                .is_err()
        );
        assert!(
            AIR.internal_energy_change(k(f64::NAN), k(300.0), kg(1.0))
                .is_err()
        );
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn pressure_temperature_inversion(
                v in 1e-4f64..10.0,
                t in 150.0f64..2000.0,
                m in 0.01f64..100.0,
            ) {
                let p = AIR.pressure_from_vt(m3(v), k(t), kg(m)).unwrap();
                let t_back = AIR.temperature_from_pv(p, m3(v), kg(m)).unwrap();
                prop_assert!((in_k(t_back) - t).abs() / t < 1e-9);
            }

            #[test]
            fn entropy_change_is_antisymmetric(
                (v1, v2) in (1e-3f64..1.0, 1e-3f64..1.0),
                (t1, t2) in (150.0f64..2000.0, 150.0f64..2000.0),
            ) {
                let s1 = State::new(kpa(100.0), m3(v1), k(t1)).unwrap();
                let s2 = State::new(kpa(100.0), m3(v2), k(t2)).unwrap();
                let forward = AIR.entropy_change(&s1, &s2, kg(1.0)).unwrap();
                let back = AIR.entropy_change(&s2, &s1, kg(1.0)).unwrap();
                prop_assert!((forward + back).abs() < 1e-12);
            }
        }
    }
}
