use uom::si::f64::Mass;

use crate::support::constraint::{Constrained, ConstraintError, NonNegative};

use super::{FluidContent, NetworkSnapshot, SnapshotReadError, Species};

/// An in-memory fluid network.
///
/// Nodes keep the order in which they were added. The ground node, if any, is
/// listed like any other node and flagged through [`NetworkSnapshot::is_ground`],
/// so it never depends on its position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Network {
    nodes: Vec<Node>,
    accumulators: Vec<FluidContent>,
    ice_mass: Option<Constrained<Mass, NonNegative>>,
}

#[derive(Debug, Clone, PartialEq)]
struct Node {
    content: FluidContent,
    ground: bool,
}

impl Network {
    /// Creates an empty network with no phase-change device.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a node holding `content`.
    #[must_use]
    pub fn with_node(mut self, content: FluidContent) -> Self {
        self.nodes.push(Node {
            content,
            ground: false,
        });
        self
    }

    /// Appends an empty ground node.
    #[must_use]
    pub fn with_ground_node(self) -> Self {
        self.with_ground(FluidContent::empty())
    }

    /// Appends a ground node holding `content`.
    ///
    /// The content is never counted toward any mass total.
    #[must_use]
    pub fn with_ground(mut self, content: FluidContent) -> Self {
        self.nodes.push(Node {
            content,
            ground: true,
        });
        self
    }

    /// Appends an accumulator holding `content`.
    #[must_use]
    pub fn with_accumulator(mut self, content: FluidContent) -> Self {
        self.accumulators.push(content);
        self
    }

    /// Installs a phase-change device holding `ice_mass`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `ice_mass` is negative or not a number.
    pub fn with_ice_mass(mut self, ice_mass: Mass) -> Result<Self, ConstraintError> {
        self.ice_mass = Some(NonNegative::new(ice_mass)?);
        Ok(self)
    }

    fn node(&self, index: usize) -> Result<&Node, SnapshotReadError> {
        self.nodes
            .get(index)
            .ok_or(SnapshotReadError::NodeOutOfRange {
                index,
                count: self.nodes.len(),
            })
    }
}

impl NetworkSnapshot for Network {
    type Accumulator = FluidContent;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn is_ground(&self, index: usize) -> bool {
        self.nodes.get(index).is_some_and(|node| node.ground)
    }

    fn node_mass(&self, index: usize) -> Result<Mass, SnapshotReadError> {
        Ok(self.node(index)?.content.mass())
    }

    fn node_mass_fraction(
        &self,
        index: usize,
        species: Species,
    ) -> Result<f64, SnapshotReadError> {
        Ok(self.node(index)?.content.fraction(species))
    }

    fn accumulator_fluids(&self) -> &[FluidContent] {
        &self.accumulators
    }

    fn ice_mass(&self) -> Result<Mass, SnapshotReadError> {
        self.ice_mass
            .map(Constrained::into_inner)
            .ok_or(SnapshotReadError::PhaseChangeDeviceMissing)
    }
}
