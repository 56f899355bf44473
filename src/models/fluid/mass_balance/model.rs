use std::convert::Infallible;

use twine_core::Model;

use super::core::{CheckConfig, ConservationChecker, ConservationReport, MassState};

/// Initial and final mass states of one test run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MassStates {
    pub initial: MassState,
    pub final_state: MassState,
}

/// [`Model`] adapter for mass conservation checks.
///
/// Delegates to [`ConservationChecker::check`]. Tolerance breaches are part of
/// the output, so the model itself never fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct MassBalanceModel {
    checker: ConservationChecker,
}

impl MassBalanceModel {
    /// Creates a model with the given acceptance settings.
    #[must_use]
    pub fn new(config: CheckConfig) -> Self {
        Self {
            checker: ConservationChecker::new(config),
        }
    }
}

impl Model for MassBalanceModel {
    type Input = MassStates;
    type Output = ConservationReport;
    type Error = Infallible;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(self.checker.check(&input.initial, &input.final_state))
    }
}
