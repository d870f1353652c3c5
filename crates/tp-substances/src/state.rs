//! Thermodynamic state definitions.

use crate::error::{SubstanceError, SubstanceResult};
use tp_core::units::{Pressure, Temperature, Volume, in_k, in_kpa, in_m3};

/// Specific heat capacity [kJ/(kg·K)].
///
/// Not part of uom's standard set, so we use f64 with clear documentation.
pub type SpecHeatCapacity = f64;

/// A point in a substance's phase space.
///
/// Pressure, volume, and temperature are the stored coordinates; derived
/// quantities (internal energy, entropy) are computed on demand through the
/// `SubstanceModel` trait. A `State` is immutable once constructed — each
/// stage of a solve produces a new value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct State {
    p: Pressure,
    v: Volume,
    t: Temperature,
}

impl State {
    /// Create a state from pressure, volume, and temperature.
    ///
    /// Validates that all three coordinates are positive and finite.
    pub fn new(p: Pressure, v: Volume, t: Temperature) -> SubstanceResult<Self> {
        let p_val = in_kpa(p);
        if !p_val.is_finite() || p_val <= 0.0 {
            return Err(SubstanceError::NonPhysical {
                what: "pressure must be positive and finite",
            });
        }

        let v_val = in_m3(v);
        if !v_val.is_finite() || v_val <= 0.0 {
            return Err(SubstanceError::NonPhysical {
                what: "volume must be positive and finite",
            });
        }

        let t_val = in_k(t);
        if !t_val.is_finite() || t_val <= 0.0 {
            return Err(SubstanceError::NonPhysical {
                what: "temperature must be positive and finite",
            });
        }

        Ok(Self { p, v, t })
    }

    /// Get pressure.
    pub fn pressure(&self) -> Pressure {
        self.p
    }

    /// Get volume.
    pub fn volume(&self) -> Volume {
        self.v
    }

    /// Get temperature.
    pub fn temperature(&self) -> Temperature {
        self.t
    }

    /// Pressure in the engine's fixed unit [kPa].
    pub fn p_kpa(&self) -> f64 {
        in_kpa(self.p)
    }

    /// Volume in the engine's fixed unit [m³].
    pub fn v_m3(&self) -> f64 {
        in_m3(self.v)
    }

    /// Temperature in the engine's fixed unit [K].
    pub fn t_k(&self) -> f64 {
        in_k(self.t)
    }
}
