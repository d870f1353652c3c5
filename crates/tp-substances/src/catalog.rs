//! Built-in substance catalog.
//!
//! A closed, immutable set of substance keys resolved at compile time.
//! Adding a substance means adding one static model and one entry here;
//! nothing is looked up reflectively at runtime.

use crate::model::SubstanceModel;
use crate::perfect_gas::{GasProperties, PerfectGas};

static IDEAL_GAS: PerfectGas = PerfectGas::new(GasProperties::AIR);
static STEAM: PerfectGas = PerfectGas::new(GasProperties::STEAM);
static METHANE: PerfectGas = PerfectGas::new(GasProperties::METHANE);

/// One catalog entry: wire key, display name, and the model behind them.
#[derive(Debug, Clone, Copy)]
pub struct SubstanceCatalogEntry {
    pub key: &'static str,
    pub display_name: &'static str,
    pub model: &'static dyn SubstanceModel,
}

static CATALOG: [SubstanceCatalogEntry; 3] = [
    SubstanceCatalogEntry {
        key: "idealGas",
        display_name: "Ideal Gas (air-like)",
        model: &IDEAL_GAS,
    },
    SubstanceCatalogEntry {
        key: "steam",
        display_name: "Steam (H2O)",
        model: &STEAM,
    },
    SubstanceCatalogEntry {
        key: "methane",
        display_name: "Methane (CH4)",
        model: &METHANE,
    },
];

/// All compiled-in substances, in stable order.
pub fn substance_catalog() -> &'static [SubstanceCatalogEntry] {
    &CATALOG
}

/// Resolve a substance key to its model, or `None` if unregistered.
pub fn lookup_substance(key: &str) -> Option<&'static dyn SubstanceModel> {
    CATALOG
        .iter()
        .find(|entry| entry.key == key)
        .map(|entry| entry.model)
}
