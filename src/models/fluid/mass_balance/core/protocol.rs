//! Two-phase capture protocol for a single conservation test run.

use crate::support::network::{NetworkSnapshot, SnapshotReadError};

use super::{CheckConfig, ConservationChecker, ConservationReport, MassState, StateSampler};

/// A conservation test run that has not yet captured its initial state.
///
/// The caller owns simulated time: it pauses the simulation, captures the
/// initial state, lets the simulation run, pauses it again and captures the
/// final state. The final capture is only reachable through
/// [`InitialCaptured`], so the two captures cannot be taken out of order.
///
/// # Example
///
/// ```
/// use twine_mass_balance::models::fluid::mass_balance::{CheckConfig, MassBalanceTest};
/// use twine_mass_balance::support::network::{FluidContent, Network, Species};
/// use uom::si::{f64::Mass, mass::kilogram};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let kg = Mass::new::<kilogram>;
/// let at_start = Network::new()
///     .with_node(FluidContent::new(kg(10.0))?.with_fraction(Species::Water, 0.5)?)
///     .with_ground_node()
///     .with_ice_mass(kg(0.0))?;
///
/// // One kilogram of liquid water freezes during the run.
/// let at_end = Network::new()
///     .with_node(FluidContent::new(kg(9.0))?.with_fraction(Species::Water, 4.0 / 9.0)?)
///     .with_ground_node()
///     .with_ice_mass(kg(1.0))?;
///
/// let running = MassBalanceTest::new(CheckConfig::default()).capture_initial(&at_start)?;
/// let report = running.capture_final(&at_end)?;
///
/// assert!(report.passed());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MassBalanceTest {
    checker: ConservationChecker,
}

impl MassBalanceTest {
    /// Creates a test run with the given acceptance settings.
    #[must_use]
    pub fn new(config: CheckConfig) -> Self {
        Self {
            checker: ConservationChecker::new(config),
        }
    }

    /// Samples the initial state of the network.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotReadError`] if the snapshot cannot be read.
    pub fn capture_initial<S>(self, snapshot: &S) -> Result<InitialCaptured, SnapshotReadError>
    where
        S: NetworkSnapshot + ?Sized,
    {
        let initial = StateSampler.sample(snapshot)?;
        tracing::debug!("captured initial mass state");
        Ok(InitialCaptured {
            checker: self.checker,
            initial,
        })
    }
}

/// A conservation test run holding its initial state.
#[derive(Debug, Clone, Copy)]
pub struct InitialCaptured {
    checker: ConservationChecker,
    initial: MassState,
}

impl InitialCaptured {
    /// Returns the captured initial state.
    #[must_use]
    pub fn initial(&self) -> &MassState {
        &self.initial
    }

    /// Samples the final state of the network and checks both balances.
    ///
    /// Both states are dropped once the report is produced.
    ///
    /// # Errors
    ///
    /// Returns a [`SnapshotReadError`] if the snapshot cannot be read.
    /// No balance is checked in that case.
    pub fn capture_final<S>(self, snapshot: &S) -> Result<ConservationReport, SnapshotReadError>
    where
        S: NetworkSnapshot + ?Sized,
    {
        let final_state = StateSampler.sample(snapshot)?;
        tracing::debug!("captured final mass state");
        Ok(self.checker.check(&self.initial, &final_state))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::mass::kilogram;

    use crate::models::fluid::mass_balance::core::test_support::{
        FailingAccumulator, content, kg, mixed_network,
    };
    use crate::support::network::Network;

    #[test]
    fn unchanged_network_passes() {
        let network = mixed_network();
        let running = MassBalanceTest::default().capture_initial(&network).unwrap();
        assert_relative_eq!(running.initial().total_mass().get::<kilogram>(), 37.0);

        let report = running.capture_final(&network).unwrap();
        assert!(report.passed());
    }

    #[test]
    fn sublimation_balances_phase_but_not_unremoved_ice() {
        // Vapor and liquid both drop by 1 kg while the device gains 2 kg of ice,
        // but the fluid total never loses the mass that froze.
        let at_start = Network::new()
            .with_node(content(100.0, 0.05, 0.1))
            .with_ice_mass(kg(0.0))
            .unwrap();
        let at_end = Network::new()
            .with_node(content(100.0, 0.04, 0.09))
            .with_ice_mass(kg(2.0))
            .unwrap();

        let report = MassBalanceTest::default()
            .capture_initial(&at_start)
            .and_then(|running| running.capture_final(&at_end))
            .unwrap();

        assert!(!report.total_mass.passed());
        assert!(report.phase_change.passed());
    }

    #[test]
    fn read_error_at_final_capture_aborts_the_run() {
        let running = MassBalanceTest::default()
            .capture_initial(&mixed_network())
            .unwrap();

        assert!(matches!(
            running.capture_final(&FailingAccumulator),
            Err(SnapshotReadError::Unavailable { .. })
        ));
    }

    #[test]
    fn read_error_at_initial_capture_aborts_the_run() {
        let no_device = Network::new().with_node(content(1.0, 0.0, 0.0));
        assert_eq!(
            MassBalanceTest::default().capture_initial(&no_device).err(),
            Some(SnapshotReadError::PhaseChangeDeviceMissing)
        );
    }
}
