use std::{cmp::Ordering, marker::PhantomData, ops::Add};

use num_traits::Zero;

use super::{Constrained, Constraint, ConstraintError};

/// Marker type enforcing that a value is non-negative (zero or greater).
///
/// Tolerances and stored masses use this constraint.
///
/// # Examples
///
/// ```
/// use twine_mass_balance::support::constraint::NonNegative;
/// use uom::si::{f64::Mass, mass::kilogram};
///
/// let mass = NonNegative::new(Mass::new::<kilogram>(2.5)).unwrap();
/// assert_eq!(mass.into_inner().get::<kilogram>(), 2.5);
///
/// assert!(NonNegative::new(-1e-9).is_err());
/// assert!(NonNegative::new(f64::NAN).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct NonNegative;

impl NonNegative {
    /// Constructs a [`Constrained<T, NonNegative>`] if the value is non-negative.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is negative or not a number (`NaN`).
    pub fn new<T: PartialOrd + Zero>(
        value: T,
    ) -> Result<Constrained<T, NonNegative>, ConstraintError> {
        Constrained::<T, NonNegative>::new(value)
    }

    /// Returns zero as a non-negative constrained value.
    #[must_use]
    pub fn zero<T: PartialOrd + Zero>() -> Constrained<T, NonNegative> {
        Constrained::<T, NonNegative>::zero()
    }
}

impl<T: PartialOrd + Zero> Constraint<T> for NonNegative {
    fn check(value: &T) -> Result<(), ConstraintError> {
        match value.partial_cmp(&T::zero()) {
            Some(Ordering::Greater | Ordering::Equal) => Ok(()),
            Some(Ordering::Less) => Err(ConstraintError::Negative),
            None => Err(ConstraintError::NotANumber),
        }
    }
}

/// Adds two non-negative values.
///
/// # Panics
///
/// Panics in debug builds if the sum is unexpectedly negative.
impl<T> Add for Constrained<T, NonNegative>
where
    T: Add<Output = T> + PartialOrd + Zero,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let value = self.value + rhs.value;
        debug_assert!(
            value >= T::zero(),
            "Addition produced a negative value, violating NonNegative bound invariant"
        );
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> Zero for Constrained<T, NonNegative>
where
    T: PartialOrd + Zero,
{
    fn zero() -> Self {
        Self {
            value: T::zero(),
            _marker: PhantomData,
        }
    }

    fn is_zero(&self) -> bool {
        self.value == T::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{f64::Mass, mass::kilogram};

    #[test]
    fn tolerances() {
        assert!(NonNegative::new(0.0).is_ok());
        assert!(NonNegative::new(1e-10).is_ok());
        assert!(matches!(
            NonNegative::new(-1e-10),
            Err(ConstraintError::Negative)
        ));
        assert!(matches!(
            NonNegative::new(f64::NAN),
            Err(ConstraintError::NotANumber)
        ));
    }

    #[test]
    fn masses_sum() {
        let masses = [1.5, 2.0, 0.0]
            .map(|kg| NonNegative::new(Mass::new::<kilogram>(kg)).unwrap());

        let total: Constrained<Mass, NonNegative> = masses.into_iter().sum();
        assert_relative_eq!(total.into_inner().get::<kilogram>(), 3.5);

        assert!(NonNegative::new(Mass::new::<kilogram>(-0.1)).is_err());
    }

    #[test]
    fn zero_is_zero() {
        let zero = NonNegative::zero::<Mass>();
        assert!(zero.is_zero());
    }
}
