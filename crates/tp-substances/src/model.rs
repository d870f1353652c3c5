//! Substance property model trait.

use crate::error::SubstanceResult;
use crate::state::{SpecHeatCapacity, State};
use std::fmt;
use tp_core::units::{Energy, Mass, Pressure, Temperature, Volume};

/// Total entropy change [kJ/K].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type EntropyChange = f64;

/// Specific heat data for a substance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpecificHeats {
    /// Specific heat at constant volume [kJ/(kg·K)].
    pub cv: SpecHeatCapacity,
    /// Specific heat at constant pressure [kJ/(kg·K)].
    pub cp: SpecHeatCapacity,
    /// Ratio of specific heats γ = cp/cv (dimensionless).
    pub gamma: f64,
}

/// State-property relations for a working substance.
///
/// This trait is the stable seam between the process solver and any
/// particular equation of state. Every method is a pure function of its
/// inputs; implementations hold only immutable property constants, so a
/// model can be shared freely between concurrent solves.
///
/// All inputs and outputs use the engine's fixed units: kPa, m³, K, kg, kJ.
pub trait SubstanceModel: Send + Sync + fmt::Debug {
    /// Pressure consistent with volume and temperature for this substance.
    ///
    /// Fails with a non-physical-state error if `v` or `t` is non-positive
    /// or outside the substance's valid range.
    fn pressure_from_vt(&self, v: Volume, t: Temperature, mass: Mass) -> SubstanceResult<Pressure>;

    /// Inverse relation: temperature from pressure and volume.
    fn temperature_from_pv(&self, p: Pressure, v: Volume, mass: Mass)
    -> SubstanceResult<Temperature>;

    /// Internal energy change between two temperatures [kJ].
    ///
    /// For a perfect gas this is `mass · cv · (t2 − t1)`.
    fn internal_energy_change(
        &self,
        t1: Temperature,
        t2: Temperature,
        mass: Mass,
    ) -> SubstanceResult<Energy>;

    /// Total entropy change between two full states [kJ/K].
    ///
    /// For a perfect gas this combines a temperature-ratio log term scaled
    /// by cv and a volume-ratio log term scaled by R.
    fn entropy_change(
        &self,
        state1: &State,
        state2: &State,
        mass: Mass,
    ) -> SubstanceResult<EntropyChange>;

    /// Specific gas constant R [kJ/(kg·K)].
    fn gas_constant(&self) -> SpecHeatCapacity;

    /// Specific heat data (cv, cp, γ).
    fn specific_heats(&self) -> SpecificHeats;
}
