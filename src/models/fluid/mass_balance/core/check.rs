//! Mass conservation balances between two sampled states.

use uom::si::{f64::Mass, mass::kilogram};

use super::{Balance, CheckConfig, ConservationReport, ConservationResult, MassState};

/// Evaluates mass conservation between an initial and a final [`MassState`].
///
/// Two balances are checked:
///
/// - **Total mass**: the change in fluid mass plus the change in ice mass.
///   Bound scaled by the initial total mass.
/// - **Phase change**: the change in liquid water plus the change in water
///   vapor plus the change in ice mass. Liquid water that evaporates moves from
///   one water species to the other; water that freezes leaves both and shows
///   up as ice. Bound scaled by the initial liquid water mass.
///
/// Bounds always scale with the initial state, never the final one.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ConservationChecker {
    config: CheckConfig,
}

impl ConservationChecker {
    /// Creates a checker with the given acceptance settings.
    #[must_use]
    pub fn new(config: CheckConfig) -> Self {
        Self { config }
    }

    /// Returns the acceptance settings.
    #[must_use]
    pub fn config(&self) -> &CheckConfig {
        &self.config
    }

    /// Checks both balances between `initial` and `final_state`.
    ///
    /// Tolerance breaches are reported in the returned results, never as errors.
    #[must_use]
    pub fn check(&self, initial: &MassState, final_state: &MassState) -> ConservationReport {
        let ice_delta = final_state.ice_mass() - initial.ice_mass();

        let mass_delta = (final_state.total_mass() - initial.total_mass()) + ice_delta;
        let total_mass = self.judge(Balance::TotalMass, mass_delta, initial.total_mass());

        let (start, end) = (initial.species(), final_state.species());
        let vaporization_delta = (end.water - start.water) + (end.h2o - start.h2o);
        let phase_change = self.judge(
            Balance::PhaseChange,
            vaporization_delta + ice_delta,
            start.water,
        );

        let report = ConservationReport {
            total_mass,
            phase_change,
        };

        for result in report.results() {
            if !result.passed() {
                tracing::warn!(
                    balance = %result.balance,
                    delta_kg = result.delta.get::<kilogram>(),
                    bound_kg = result.bound.get::<kilogram>(),
                    "mass conservation tolerance breached"
                );
            }
        }
        if report.passed() {
            tracing::info!(
                total_delta_kg = report.total_mass.delta.get::<kilogram>(),
                phase_delta_kg = report.phase_change.delta.get::<kilogram>(),
                "mass conserved"
            );
        }

        report
    }

    fn judge(&self, balance: Balance, delta: Mass, reference: Mass) -> ConservationResult {
        let bound = self.config.floor + reference * self.config.tolerance.into_inner();
        ConservationResult {
            balance,
            delta,
            reference,
            bound,
        }
    }
}
