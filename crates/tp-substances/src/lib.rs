//! tp-substances: working-substance property models for thermoproc.
//!
//! Provides:
//! - Thermodynamic state representation (pressure, volume, temperature)
//! - `SubstanceModel` trait for state-property relations
//! - Perfect-gas implementations (air-like ideal gas, steam, methane)
//! - An immutable catalog mapping substance keys to models
//!
//! # Architecture
//!
//! The `SubstanceModel` trait is the stable seam that isolates the process
//! solver from any particular equation of state. The built-in substances are
//! all perfect gases with frozen specific heats; a tabulated or empirical
//! real-fluid model would slot in behind the same trait.
//!
//! # Example
//!
//! ```
//! use tp_core::units::{k, kg, m3};
//! use tp_substances::{SubstanceModel, lookup_substance};
//!
//! let air = lookup_substance("idealGas").unwrap();
//! let p = air.pressure_from_vt(m3(0.861), k(300.0), kg(1.0)).unwrap();
//! // P = m·R·T/V = 1 · 0.287 · 300 / 0.861 = 100 kPa
//! ```

pub mod catalog;
pub mod error;
pub mod model;
pub mod perfect_gas;
pub mod state;

// Re-exports for ergonomics
pub use catalog::{SubstanceCatalogEntry, lookup_substance, substance_catalog};
pub use error::{SubstanceError, SubstanceResult};
pub use model::{EntropyChange, SpecificHeats, SubstanceModel};
pub use perfect_gas::{GasProperties, PerfectGas};
pub use state::{SpecHeatCapacity, State};
