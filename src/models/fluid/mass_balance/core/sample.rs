//! Sampling of aggregate mass from a network snapshot.

use uom::{
    ConstZero,
    si::{f64::Mass, mass::kilogram},
};

use crate::support::network::{AccumulatorFluid, NetworkSnapshot, SnapshotReadError, Species};

use super::{MassState, SpeciesMasses};

/// Computes a [`MassState`] from a network snapshot.
///
/// The sampler holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct StateSampler;

impl StateSampler {
    /// Samples the aggregate mass held by `snapshot`.
    ///
    /// Every non-ground node contributes its mass to the total, and its
    /// vapor and liquid water content to the species totals. Every accumulator
    /// contributes its mass to the total and its liquid water content to the
    /// liquid water total. Accumulators never contribute to the vapor total.
    /// Ice mass is read from the phase-change device.
    ///
    /// # Errors
    ///
    /// Returns the first [`SnapshotReadError`] encountered.
    /// No partial state is returned.
    pub fn sample<S>(&self, snapshot: &S) -> Result<MassState, SnapshotReadError>
    where
        S: NetworkSnapshot + ?Sized,
    {
        let mut total_mass = Mass::ZERO;
        let mut species = SpeciesMasses::ZERO;

        let node_count = snapshot.node_count();
        for index in 0..node_count {
            if snapshot.is_ground(index) {
                tracing::trace!(index, "skipping ground node");
                continue;
            }

            let mass = snapshot.node_mass(index)?;
            species.h2o += mass * snapshot.node_mass_fraction(index, Species::H2O)?;
            species.water += mass * snapshot.node_mass_fraction(index, Species::Water)?;
            total_mass += mass;
        }

        let accumulators = snapshot.accumulator_fluids();
        for fluid in accumulators {
            let mass = fluid.mass()?;
            species.water += mass * fluid.mass_fraction(Species::Water)?;
            total_mass += mass;
        }

        let ice_mass = snapshot.ice_mass()?;

        tracing::debug!(
            nodes = node_count,
            accumulators = accumulators.len(),
            total_mass_kg = total_mass.get::<kilogram>(),
            h2o_kg = species.h2o.get::<kilogram>(),
            water_kg = species.water.get::<kilogram>(),
            ice_kg = ice_mass.get::<kilogram>(),
            "sampled network mass"
        );

        Ok(MassState::new(total_mass, species, ice_mass))
    }
}
