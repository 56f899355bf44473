//! Results of mass conservation checks.

use std::fmt;

use thiserror::Error;
use uom::si::{f64::Mass, mass::kilogram};

/// The conservation balance a result refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Balance {
    /// Total fluid mass plus ice mass.
    TotalMass,

    /// Water mass across liquid, vapor and ice phases.
    PhaseChange,
}

impl fmt::Display for Balance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TotalMass => f.write_str("total mass"),
            Self::PhaseChange => f.write_str("phase change"),
        }
    }
}

/// The outcome of one conservation balance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservationResult {
    /// Which balance was evaluated.
    pub balance: Balance,

    /// Net mass change the balance should have kept at zero.
    pub delta: Mass,

    /// Initial mass the tolerance was scaled by.
    pub reference: Mass,

    /// Largest acceptable magnitude of `delta`.
    pub bound: Mass,
}

impl ConservationResult {
    /// Returns `true` if `|delta| <= bound`.
    ///
    /// A `NaN` delta or bound never passes.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.delta.abs() <= self.bound
    }

    /// Returns `|delta| / reference`, or `None` if the reference mass is zero.
    #[must_use]
    pub fn relative_error(&self) -> Option<f64> {
        let reference = self.reference.get::<kilogram>();
        if reference == 0.0 {
            return None;
        }
        Some(self.delta.abs().get::<kilogram>() / reference)
    }

    /// Converts this result into a `Result`, failing on a tolerance breach.
    ///
    /// # Errors
    ///
    /// Returns a [`ToleranceBreach`] if the balance did not pass.
    pub fn into_result(self) -> Result<Self, ToleranceBreach> {
        if self.passed() {
            Ok(self)
        } else {
            Err(ToleranceBreach {
                balance: self.balance,
                delta: self.delta,
                bound: self.bound,
            })
        }
    }
}

impl fmt::Display for ConservationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: delta={:e} kg, bound={:e} kg ({})",
            self.balance,
            self.delta.get::<kilogram>(),
            self.bound.get::<kilogram>(),
            if self.passed() { "PASS" } else { "FAIL" },
        )
    }
}

/// A conservation balance whose delta exceeded its bound.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("{balance} not conserved: delta={delta:?} exceeds bound={bound:?}")]
pub struct ToleranceBreach {
    /// Which balance was breached.
    pub balance: Balance,

    /// Net mass change.
    pub delta: Mass,

    /// Bound the delta exceeded.
    pub bound: Mass,
}

/// Both conservation balances for one test run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConservationReport {
    /// Total mass balance, with ice counted separately from fluid.
    pub total_mass: ConservationResult,

    /// Water balance across liquid, vapor and ice.
    pub phase_change: ConservationResult,
}

impl ConservationReport {
    /// Returns both results, total mass first.
    #[must_use]
    pub fn results(&self) -> [ConservationResult; 2] {
        [self.total_mass, self.phase_change]
    }

    /// Returns `true` if both balances passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.total_mass.passed() && self.phase_change.passed()
    }

    /// Returns the breaches, if any, total mass first.
    pub fn breaches(&self) -> impl Iterator<Item = ToleranceBreach> {
        self.results()
            .into_iter()
            .filter_map(|result| result.into_result().err())
    }
}

impl fmt::Display for ConservationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.total_mass)?;
        write!(f, "{}", self.phase_change)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn result(delta: f64, reference: f64, bound: f64) -> ConservationResult {
        ConservationResult {
            balance: Balance::TotalMass,
            delta: Mass::new::<kilogram>(delta),
            reference: Mass::new::<kilogram>(reference),
            bound: Mass::new::<kilogram>(bound),
        }
    }

    #[test]
    fn pass_is_inclusive_and_sign_independent() {
        assert!(result(1e-4, 100.0, 1e-4).passed());
        assert!(result(-1e-4, 100.0, 1e-4).passed());
        assert!(!result(-2e-4, 100.0, 1e-4).passed());
        assert!(!result(f64::NAN, 100.0, 1e-4).passed());
    }

    #[test]
    fn relative_error_needs_a_reference() {
        assert_relative_eq!(result(-2.0, 100.0, 1e-4).relative_error().unwrap(), 0.02);
        assert_eq!(result(0.0, 0.0, 1e-16).relative_error(), None);
    }

    #[test]
    fn breach_carries_diagnostics() {
        let breach = result(2.0, 100.0, 1e-4).into_result().unwrap_err();
        assert_eq!(breach.balance, Balance::TotalMass);
        assert_relative_eq!(breach.delta.get::<kilogram>(), 2.0);
        assert_relative_eq!(breach.bound.get::<kilogram>(), 1e-4);
        assert!(breach.to_string().starts_with("total mass not conserved"));
    }

    #[test]
    fn display_reports_verdict() {
        assert_eq!(
            result(2.0, 100.0, 1e-4).to_string(),
            "total mass: delta=2e0 kg, bound=1e-4 kg (FAIL)"
        );
        assert!(result(0.0, 100.0, 1e-4).to_string().ends_with("(PASS)"));
    }

    #[test]
    fn report_lists_breaches_in_order() {
        let report = ConservationReport {
            total_mass: result(2.0, 100.0, 1e-4),
            phase_change: ConservationResult {
                balance: Balance::PhaseChange,
                ..result(3.0, 10.0, 1e-5)
            },
        };

        assert!(!report.passed());
        let balances: Vec<_> = report.breaches().map(|b| b.balance).collect();
        assert_eq!(balances, [Balance::TotalMass, Balance::PhaseChange]);
    }
}
