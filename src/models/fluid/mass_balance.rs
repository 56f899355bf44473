//! Mass conservation checks for fluid networks.
//!
//! A fluid network moves mass between nodes, accumulators and, through a
//! phase-change device, into and out of ice. Over any period of simulated time
//! the network should neither create nor destroy mass. This module samples
//! the network at two instants and checks:
//!
//! - **Total mass**: fluid mass plus ice mass is unchanged.
//! - **Phase change**: liquid water plus water vapor plus ice is unchanged.
//!
//! A failure in the first points to gross mass bookkeeping; a failure in the
//! second points to phase-transition bookkeeping.
//!
//! Use [`MassBalanceTest`] to drive a run from a harness that owns simulated
//! time, or [`MassBalanceModel`] to check two already-sampled states as a
//! [`twine_core::Model`].

mod core;
mod model;

pub use self::core::{
    Balance, CheckConfig, ConservationChecker, ConservationReport, ConservationResult,
    InitialCaptured, MassBalanceTest, MassState, SpeciesMasses, StateSampler, ToleranceBreach,
};
pub use model::{MassBalanceModel, MassStates};
