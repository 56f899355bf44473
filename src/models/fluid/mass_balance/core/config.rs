use uom::si::{f64::Mass, mass::kilogram};

use crate::support::constraint::{Constrained, NonNegative};

/// Acceptance settings for mass conservation checks.
///
/// A balance passes when `|delta| <= floor + tolerance * reference`, where the
/// reference is the initial total mass or the initial liquid water mass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckConfig {
    /// Relative error tolerance, as a fraction of the reference mass.
    pub tolerance: Constrained<f64, NonNegative>,

    /// Absolute floor added to every bound.
    ///
    /// Keeps the bound from collapsing to zero when the reference mass is zero.
    pub floor: Mass,
}

impl CheckConfig {
    /// Relative tolerance used by [`CheckConfig::default`].
    pub const DEFAULT_TOLERANCE: f64 = 1.0e-6;

    /// Bound floor used by [`CheckConfig::default`], in kilograms.
    pub const DEFAULT_FLOOR_KG: f64 = 1.0e-16;

    /// Creates a configuration with the given tolerance and the default floor.
    #[must_use]
    pub fn with_tolerance(tolerance: Constrained<f64, NonNegative>) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            tolerance: Constrained::from_trusted(Self::DEFAULT_TOLERANCE),
            floor: Mass::new::<kilogram>(Self::DEFAULT_FLOOR_KG),
        }
    }
}
