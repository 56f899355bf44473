use uom::si::{f64::Mass, mass::kilogram};

use crate::support::network::{
    AccumulatorFluid, FluidContent, Network, NetworkSnapshot, SnapshotReadError, Species,
};

use super::{MassState, SpeciesMasses};

pub(super) fn kg(value: f64) -> Mass {
    Mass::new::<kilogram>(value)
}

/// Fluid content with the given mass and vapor/liquid water fractions.
pub(super) fn content(mass: f64, h2o: f64, water: f64) -> FluidContent {
    FluidContent::new(kg(mass))
        .and_then(|c| c.with_fraction(Species::H2O, h2o))
        .and_then(|c| c.with_fraction(Species::Water, water))
        .expect("valid test content")
}

/// Two nodes, a ground node, two accumulators and 0.3 kg of ice.
pub(super) fn mixed_network() -> Network {
    Network::new()
        .with_node(content(10.0, 0.1, 0.2))
        .with_node(content(20.0, 0.05, 0.5))
        .with_ground(content(1000.0, 0.5, 0.5))
        .with_accumulator(content(5.0, 0.0, 0.8))
        .with_accumulator(content(2.0, 0.3, 0.0))
        .with_ice_mass(kg(0.3))
        .expect("valid ice mass")
}

pub(super) fn state(total: f64, h2o: f64, water: f64, ice: f64) -> MassState {
    MassState::new(
        kg(total),
        SpeciesMasses {
            h2o: kg(h2o),
            water: kg(water),
        },
        kg(ice),
    )
}

/// A snapshot that hides a trailing ground node from its node count.
pub(super) struct GroundLast {
    nodes: Vec<FluidContent>,
    ground: FluidContent,
}

impl GroundLast {
    pub(super) fn new(nodes: Vec<FluidContent>, ground: FluidContent) -> Self {
        Self { nodes, ground }
    }
}

impl NetworkSnapshot for GroundLast {
    type Accumulator = FluidContent;

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_mass(&self, index: usize) -> Result<Mass, SnapshotReadError> {
        self.node(index).map(FluidContent::mass)
    }

    fn node_mass_fraction(
        &self,
        index: usize,
        species: Species,
    ) -> Result<f64, SnapshotReadError> {
        self.node(index).map(|c| c.fraction(species))
    }

    fn accumulator_fluids(&self) -> &[FluidContent] {
        &[]
    }

    fn ice_mass(&self) -> Result<Mass, SnapshotReadError> {
        Ok(kg(0.0))
    }
}

impl GroundLast {
    fn node(&self, index: usize) -> Result<&FluidContent, SnapshotReadError> {
        match index {
            i if i < self.nodes.len() => Ok(&self.nodes[i]),
            i if i == self.nodes.len() => Ok(&self.ground),
            _ => Err(SnapshotReadError::NodeOutOfRange {
                index,
                count: self.nodes.len() + 1,
            }),
        }
    }
}

/// A snapshot whose only accumulator cannot be read.
pub(super) struct FailingAccumulator;

pub(super) struct BrokenFluid;

impl AccumulatorFluid for BrokenFluid {
    fn mass(&self) -> Result<Mass, SnapshotReadError> {
        Err(SnapshotReadError::unavailable("accumulator bellows offline"))
    }

    fn mass_fraction(&self, _species: Species) -> Result<f64, SnapshotReadError> {
        Err(SnapshotReadError::unavailable("accumulator bellows offline"))
    }
}

impl NetworkSnapshot for FailingAccumulator {
    type Accumulator = BrokenFluid;

    fn node_count(&self) -> usize {
        0
    }

    fn node_mass(&self, index: usize) -> Result<Mass, SnapshotReadError> {
        Err(SnapshotReadError::NodeOutOfRange { index, count: 0 })
    }

    fn node_mass_fraction(
        &self,
        index: usize,
        _species: Species,
    ) -> Result<f64, SnapshotReadError> {
        Err(SnapshotReadError::NodeOutOfRange { index, count: 0 })
    }

    fn accumulator_fluids(&self) -> &[BrokenFluid] {
        &[BrokenFluid]
    }

    fn ice_mass(&self) -> Result<Mass, SnapshotReadError> {
        Ok(kg(0.0))
    }
}
