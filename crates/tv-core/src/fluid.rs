//! Working-fluid catalog.
//!
//! The property service identifies fluids by their CoolProp canonical name;
//! the catalog pairs those names with display names and search aliases for
//! the picker UI.

use serde::{Deserialize, Serialize};

/// Working fluids the diagram service can be queried for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fluid {
    /// Xenon
    Xenon,
    /// Nitrous oxide (N₂O)
    NitrousOxide,
    /// Water (H₂O)
    Water,
    /// Refrigerant R134a
    R134a,
    /// Carbon dioxide (CO₂)
    CO2,
    /// Helium (He)
    Helium,
    /// Nitrogen (N₂)
    Nitrogen,
    /// Oxygen (O₂)
    Oxygen,
    /// Methane (CH₄)
    Methane,
    /// Ammonia (NH₃)
    Ammonia,
    /// Propane
    Propane,
    /// Argon (Ar)
    Argon,
}

impl Fluid {
    pub const ALL: [Fluid; 12] = [
        Fluid::Xenon,
        Fluid::NitrousOxide,
        Fluid::Water,
        Fluid::R134a,
        Fluid::CO2,
        Fluid::Helium,
        Fluid::Nitrogen,
        Fluid::Oxygen,
        Fluid::Methane,
        Fluid::Ammonia,
        Fluid::Propane,
        Fluid::Argon,
    ];

    /// Canonical identifier understood by the property service.
    pub fn canonical_id(self) -> &'static str {
        self.catalog_entry().canonical_id
    }

    /// Human-readable name for UI labels.
    pub fn display_name(self) -> &'static str {
        self.catalog_entry().display_name
    }

    fn catalog_entry(self) -> &'static FluidCatalogEntry {
        fluid_catalog()
            .iter()
            .find(|entry| entry.fluid == self)
            .expect("every fluid has a catalog entry")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FluidCatalogEntry {
    pub fluid: Fluid,
    pub canonical_id: &'static str,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl FluidCatalogEntry {
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id.to_ascii_lowercase().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }
}

const FLUID_CATALOG: [FluidCatalogEntry; 12] = [
    FluidCatalogEntry {
        fluid: Fluid::Xenon,
        canonical_id: "Xenon",
        display_name: "Xenon",
        aliases: &["xe"],
    },
    FluidCatalogEntry {
        fluid: Fluid::NitrousOxide,
        canonical_id: "NitrousOxide",
        display_name: "Nitrous Oxide",
        aliases: &["n2o", "nitrous"],
    },
    FluidCatalogEntry {
        fluid: Fluid::Water,
        canonical_id: "Water",
        display_name: "Water",
        aliases: &["h2o", "steam"],
    },
    FluidCatalogEntry {
        fluid: Fluid::R134a,
        canonical_id: "R134a",
        display_name: "R134a",
        aliases: &["tetrafluoroethane"],
    },
    FluidCatalogEntry {
        fluid: Fluid::CO2,
        canonical_id: "CO2",
        display_name: "Carbon Dioxide",
        aliases: &["carbon dioxide"],
    },
    FluidCatalogEntry {
        fluid: Fluid::Helium,
        canonical_id: "Helium",
        display_name: "Helium",
        aliases: &["he"],
    },
    FluidCatalogEntry {
        fluid: Fluid::Nitrogen,
        canonical_id: "Nitrogen",
        display_name: "Nitrogen",
        aliases: &["n2"],
    },
    FluidCatalogEntry {
        fluid: Fluid::Oxygen,
        canonical_id: "Oxygen",
        display_name: "Oxygen",
        aliases: &["o2", "lox"],
    },
    FluidCatalogEntry {
        fluid: Fluid::Methane,
        canonical_id: "Methane",
        display_name: "Methane",
        aliases: &["ch4"],
    },
    FluidCatalogEntry {
        fluid: Fluid::Ammonia,
        canonical_id: "Ammonia",
        display_name: "Ammonia",
        aliases: &["nh3"],
    },
    FluidCatalogEntry {
        fluid: Fluid::Propane,
        canonical_id: "Propane",
        display_name: "Propane",
        aliases: &["c3h8"],
    },
    FluidCatalogEntry {
        fluid: Fluid::Argon,
        canonical_id: "Argon",
        display_name: "Argon",
        aliases: &["ar"],
    },
];

pub fn fluid_catalog() -> &'static [FluidCatalogEntry] {
    &FLUID_CATALOG
}

pub fn filter_fluid_catalog(query: &str) -> Vec<FluidCatalogEntry> {
    fluid_catalog()
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn canonical_ids_are_unique() {
        let mut seen = HashSet::new();
        for entry in fluid_catalog() {
            assert!(
                seen.insert(entry.canonical_id),
                "duplicate canonical id: {}",
                entry.canonical_id
            );
        }
    }

    #[test]
    fn every_fluid_has_an_entry() {
        for fluid in Fluid::ALL {
            assert!(fluid_catalog().iter().any(|entry| entry.fluid == fluid));
        }
    }

    #[test]
    fn search_finds_nitrous_oxide() {
        let results = filter_fluid_catalog("nitrous");
        assert!(results.iter().any(|entry| entry.fluid == Fluid::NitrousOxide));
    }

    #[test]
    fn empty_query_returns_full_catalog() {
        assert_eq!(filter_fluid_catalog("  ").len(), fluid_catalog().len());
    }
}
