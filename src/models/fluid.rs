//! Fluid network models.
//!
//! This module contains checks that verify the bookkeeping of fluid-network
//! simulations, such as conservation of mass across phase changes.

pub mod mass_balance;
