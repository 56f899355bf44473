//! Supporting utilities used by models.
//!
//! - [`constraint`]: Numeric invariants checked at construction time.
//! - [`network`]: Read-only access to fluid-network state at one instant.

pub mod constraint;
pub mod network;
