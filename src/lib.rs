//! # Twine Mass Balance
//!
//! Mass conservation checks for fluid-network simulations built on
//! [Twine](https://github.com/isentropic-dev/twine).
//!
//! A check samples the mass held by a network at two instants, then verifies
//! that total mass and water mass across its phases (liquid, vapor, ice) both
//! balance within a relative tolerance.
//!
//! ## Crate layout
//!
//! - [`models`]: Mass balance checks and their [`twine_core::Model`] adapters.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Utility code lifecycle
//!
//! Modules in [`support`] are part of the public API because they're useful,
//! but their APIs are not stable. Breaking changes may occur as needed.

pub mod models;
pub mod support;
