//! Error type shared by the engine and its callers.

use thiserror::Error;

/// Errors surfaced to the caller of the simulation.
///
/// Degenerate geometry and pursuer energy exhaustion are not errors; they
/// resolve to defined zero-command or frozen states inside the simulation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimError {
    /// `update` was called with a non-positive or non-finite timestep.
    #[error("invalid timestep {0}: dt must be finite and > 0")]
    InvalidTimestep(f64),

    /// `select_law` was called with a key that maps to no guidance law.
    #[error("unknown guidance law key {0}")]
    UnknownLaw(u8),

    /// A configuration value is outside its legal range.
    #[error("invalid configuration: {field} {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    /// An engagement body was missing from the world.
    #[error("engagement body missing: {0}")]
    MissingBody(&'static str),
}
