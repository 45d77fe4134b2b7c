//! Pursuer component: the homing body's guidance state.

use pursuit_core::enums::GuidanceLaw;
use pursuit_guidance::AccelerationFilter;

/// Marks an entity as a pursuer and holds what its guidance needs.
///
/// Rebuilt wholesale on every engagement reset, filter included.
#[derive(Debug, Clone)]
pub struct Pursuer {
    /// The body being chased.
    pub target: hecs::Entity,
    /// Active guidance law.
    pub law: GuidanceLaw,
    /// Navigation gain N.
    pub nav_gain: f64,
    /// Smoothed estimate of the target's acceleration.
    pub target_accel_filter: AccelerationFilter,
}
