// tp-core/src/units.rs
//
// The engine works in fixed units: pressure in kPa, volume in m³,
// temperature in K, mass in kg, energy in kJ. The constructors and
// getters below pin those units at the API seams; formula code
// extracts raw f64 values and stays in the fixed units throughout
// (1 kPa·m³ = 1 kJ).

use uom::si::f64::{
    Energy as UomEnergy, Mass as UomMass, Pressure as UomPressure,
    ThermodynamicTemperature as UomThermodynamicTemperature, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Energy = UomEnergy;
pub type Mass = UomMass;
pub type Pressure = UomPressure;
pub type Temperature = UomThermodynamicTemperature;
pub type Volume = UomVolume;

#[inline]
pub fn kpa(v: f64) -> Pressure {
    use uom::si::pressure::kilopascal;
    Pressure::new::<kilopascal>(v)
}

#[inline]
pub fn in_kpa(p: Pressure) -> f64 {
    use uom::si::pressure::kilopascal;
    p.get::<kilopascal>()
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

#[inline]
pub fn in_m3(v: Volume) -> f64 {
    use uom::si::volume::cubic_meter;
    v.get::<cubic_meter>()
}

#[inline]
pub fn k(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::kelvin;
    Temperature::new::<kelvin>(v)
}

#[inline]
pub fn in_k(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::kelvin;
    t.get::<kelvin>()
}

#[inline]
pub fn kg(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v)
}

#[inline]
pub fn in_kg(m: Mass) -> f64 {
    use uom::si::mass::kilogram;
    m.get::<kilogram>()
}

#[inline]
pub fn kj(v: f64) -> Energy {
    use uom::si::energy::kilojoule;
    Energy::new::<kilojoule>(v)
}

#[inline]
pub fn in_kj(e: Energy) -> f64 {
    use uom::si::energy::kilojoule;
    e.get::<kilojoule>()
}

pub mod constants {
    /// Universal gas constant [kJ/(kmol·K)].
    pub const R_UNIVERSAL_KJ_KMOL_K: f64 = 8.314_462_618;
}
