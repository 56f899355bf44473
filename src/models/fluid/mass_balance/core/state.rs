//! Aggregate mass held by a network at one instant.

use uom::{ConstZero, si::f64::Mass};

use crate::support::network::Species;

/// Water masses tracked by species.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeciesMasses {
    /// Water vapor mass, summed over nodes only.
    pub h2o: Mass,

    /// Liquid water mass, summed over nodes and accumulators.
    pub water: Mass,
}

impl SpeciesMasses {
    /// Species masses with every tracked species at zero.
    pub const ZERO: Self = Self {
        h2o: Mass::ZERO,
        water: Mass::ZERO,
    };
}

/// Aggregate fluid mass sampled from a network at one instant.
///
/// A `MassState` is read-only once built. Sampling produces a fresh value
/// each time; nothing is carried over between samples.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassState {
    total_mass: Mass,
    species: SpeciesMasses,
    ice_mass: Mass,
}

impl MassState {
    /// Creates a mass state from already-aggregated quantities.
    #[must_use]
    pub fn new(total_mass: Mass, species: SpeciesMasses, ice_mass: Mass) -> Self {
        Self {
            total_mass,
            species,
            ice_mass,
        }
    }

    /// Total fluid mass across all non-ground nodes and all accumulators.
    #[must_use]
    pub fn total_mass(&self) -> Mass {
        self.total_mass
    }

    /// Tracked water masses.
    #[must_use]
    pub fn species(&self) -> SpeciesMasses {
        self.species
    }

    /// Returns the aggregate mass of `species`, or `None` if it is not tracked.
    #[must_use]
    pub fn species_mass(&self, species: Species) -> Option<Mass> {
        match species {
            Species::H2O => Some(self.species.h2o),
            Species::Water => Some(self.species.water),
            _ => None,
        }
    }

    /// Solid-phase mass held by the phase-change device.
    #[must_use]
    pub fn ice_mass(&self) -> Mass {
        self.ice_mass
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use uom::si::mass::kilogram;

    #[test]
    fn only_water_species_are_tracked() {
        let state = MassState::new(
            Mass::new::<kilogram>(10.0),
            SpeciesMasses {
                h2o: Mass::new::<kilogram>(1.0),
                water: Mass::new::<kilogram>(2.0),
            },
            Mass::ZERO,
        );

        assert_eq!(state.species_mass(Species::H2O), Some(Mass::new::<kilogram>(1.0)));
        assert_eq!(state.species_mass(Species::Water), Some(Mass::new::<kilogram>(2.0)));
        assert_eq!(state.species_mass(Species::N2), None);
        assert_eq!(state.species_mass(Species::O2), None);
    }
}
