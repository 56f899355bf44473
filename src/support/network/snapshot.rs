use uom::si::f64::Mass;

use super::{SnapshotReadError, Species};

/// Read-only access to the fluid held by a network at one instant.
///
/// Implementations must not advance the simulation while they are being read.
/// Nodes are addressed by index in `0..node_count()`.
///
/// # Ground node
///
/// A network's ground node is a reference potential, not a mass reservoir.
/// Implementations that already leave it out of `node_count()` can rely on
/// the default [`is_ground`](NetworkSnapshot::is_ground). Implementations
/// that list it must report it through `is_ground` so it is never summed.
pub trait NetworkSnapshot {
    /// The accumulator fluid type exposed by this snapshot.
    type Accumulator: AccumulatorFluid;

    /// Returns the number of addressable nodes.
    fn node_count(&self) -> usize;

    /// Returns `true` if the node at `index` is the ground reference node.
    fn is_ground(&self, _index: usize) -> bool {
        false
    }

    /// Returns the fluid mass held by a node.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotReadError`] if the node cannot be read.
    fn node_mass(&self, index: usize) -> Result<Mass, SnapshotReadError>;

    /// Returns the mass fraction of `species` in a node's fluid.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotReadError`] if the node cannot be read.
    fn node_mass_fraction(
        &self,
        index: usize,
        species: Species,
    ) -> Result<f64, SnapshotReadError>;

    /// Returns the fluids held by the network's accumulators.
    fn accumulator_fluids(&self) -> &[Self::Accumulator];

    /// Returns the ice mass held by the network's phase-change device.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotReadError`] if the device cannot be read.
    fn ice_mass(&self) -> Result<Mass, SnapshotReadError>;
}

/// Read-only access to the fluid held inside an accumulator.
pub trait AccumulatorFluid {
    /// Returns the fluid mass held by the accumulator.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotReadError`] if the mass cannot be read.
    fn mass(&self) -> Result<Mass, SnapshotReadError>;

    /// Returns the mass fraction of `species` in the accumulator's fluid.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotReadError`] if the fraction cannot be read.
    fn mass_fraction(&self, species: Species) -> Result<f64, SnapshotReadError>;
}
