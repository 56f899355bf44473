//! Sampling and conservation checks for fluid network mass.
//!
//! A run samples a [`MassState`] from the network before and after the period
//! under test, then checks two balances between them with a
//! [`ConservationChecker`].

mod check;
mod config;
mod protocol;
mod results;
mod sample;
mod state;

#[cfg(test)]
mod test_support;

pub use check::ConservationChecker;
pub use config::CheckConfig;
pub use protocol::{InitialCaptured, MassBalanceTest};
pub use results::{Balance, ConservationReport, ConservationResult, ToleranceBreach};
pub use sample::StateSampler;
pub use state::{MassState, SpeciesMasses};
