//! Guidance laws for the pursuer.
//!
//! Pure functions that compute a lateral acceleration command from the
//! relative kinematics of pursuer and target, plus the exponential filter
//! that smooths the target acceleration fed to the augmented laws.
//! No ECS dependency; operates on plain data.

pub mod filter;
pub mod laws;

pub use filter::AccelerationFilter;
pub use laws::{evaluate, GuidanceParams};
