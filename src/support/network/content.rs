use uom::si::f64::Mass;

use crate::support::constraint::{Constrained, ConstraintError, NonNegative, UnitInterval};

use super::{AccumulatorFluid, SnapshotReadError, Species};

/// A mass of fluid mixture with its species mass fractions.
///
/// Species without an explicit fraction have a fraction of zero.
#[derive(Debug, Clone, PartialEq)]
pub struct FluidContent {
    mass: Constrained<Mass, NonNegative>,
    fractions: Vec<(Species, Constrained<f64, UnitInterval>)>,
}

impl FluidContent {
    /// Creates content holding `mass` with no species fractions set.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `mass` is negative or not a number.
    pub fn new(mass: Mass) -> Result<Self, ConstraintError> {
        Ok(Self {
            mass: NonNegative::new(mass)?,
            fractions: Vec::new(),
        })
    }

    /// Creates content holding no mass.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            mass: NonNegative::zero(),
            fractions: Vec::new(),
        }
    }

    /// Returns this content with the mass fraction of `species` set.
    ///
    /// Setting a species twice keeps the latest fraction.
    ///
    /// # Errors
    ///
    /// Returns a [`ConstraintError`] if `fraction` is outside `[0, 1]`.
    pub fn with_fraction(
        mut self,
        species: Species,
        fraction: f64,
    ) -> Result<Self, ConstraintError> {
        let fraction = UnitInterval::new(fraction)?;
        match self.fractions.iter_mut().find(|(s, _)| *s == species) {
            Some((_, existing)) => *existing = fraction,
            None => self.fractions.push((species, fraction)),
        }
        Ok(self)
    }

    /// Returns the fluid mass.
    #[must_use]
    pub fn mass(&self) -> Mass {
        self.mass.into_inner()
    }

    /// Returns the mass fraction of `species`, or zero if it was never set.
    #[must_use]
    pub fn fraction(&self, species: Species) -> f64 {
        self.fractions
            .iter()
            .find(|(s, _)| *s == species)
            .map_or(0.0, |(_, fraction)| fraction.into_inner())
    }

    /// Returns the mass of `species` held in this content.
    #[must_use]
    pub fn species_mass(&self, species: Species) -> Mass {
        self.mass() * self.fraction(species)
    }
}

impl AccumulatorFluid for FluidContent {
    fn mass(&self) -> Result<Mass, SnapshotReadError> {
        Ok(FluidContent::mass(self))
    }

    fn mass_fraction(&self, species: Species) -> Result<f64, SnapshotReadError> {
        Ok(self.fraction(species))
    }
}
