//! Read-only views of a fluid network at one instant in simulated time.
//!
//! A fluid network is a set of nodes (discrete control volumes, each holding
//! a mass of fluid mixture) plus auxiliary accumulators that hold fluid
//! outside the main node set. A phase-change device may also hold mass in
//! solid form (ice).
//!
//! This module provides:
//!
//! - **Capabilities**: [`NetworkSnapshot`] and [`AccumulatorFluid`], the traits
//!   a simulation implements to expose its state for sampling.
//! - **Identifiers**: [`Species`] for the constituents tracked by mass fraction.
//! - **Storage**: [`FluidContent`] and [`Network`], a plain in-memory network
//!   that implements the capabilities directly.
//!
//! # Example
//!
//! ```
//! use twine_mass_balance::support::constraint::ConstraintResult;
//! use twine_mass_balance::support::network::{FluidContent, Network, NetworkSnapshot, Species};
//! use uom::si::{f64::Mass, mass::kilogram};
//!
//! fn main() -> ConstraintResult<()> {
//!     let network = Network::new()
//!         .with_ground_node()
//!         .with_node(FluidContent::new(Mass::new::<kilogram>(2.0))?.with_fraction(Species::Water, 0.5)?)
//!         .with_ice_mass(Mass::new::<kilogram>(0.0))?;
//!
//!     // The ground node is listed but flagged.
//!     assert_eq!(network.node_count(), 2);
//!     assert!(network.is_ground(0));
//!     Ok(())
//! }
//! ```

mod content;
mod error;
mod memory;
mod snapshot;
mod species;

pub use content::FluidContent;
pub use error::SnapshotReadError;
pub use memory::Network;
pub use snapshot::{AccumulatorFluid, NetworkSnapshot};
pub use species::Species;
