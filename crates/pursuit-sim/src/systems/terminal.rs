//! Terminal checks: interception first, then safe-zone arrival.

use glam::DVec2;

use pursuit_core::config::SimConfig;
use pursuit_core::enums::Outcome;
use pursuit_core::geometry::closest_approach;

/// Separation measurements for one tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Separation {
    /// Distance at the end of the tick.
    pub end: f64,
    /// Closest approach during the tick.
    pub closest: f64,
}

/// Measure pursuer-evader separation across a tick from the relative
/// offsets (evader minus pursuer) at its start and end.
pub fn measure(offset_before: DVec2, offset_after: DVec2) -> Separation {
    Separation {
        end: offset_after.length(),
        closest: closest_approach(offset_before, offset_after),
    }
}

/// Decide whether the engagement ends this tick.
///
/// Interception is tested before the safe zone, so a tick satisfying both
/// is a loss for the evader.
pub fn evaluate(separation: &Separation, evader_position: DVec2, config: &SimConfig) -> Option<Outcome> {
    if separation.closest < config.interception_radius {
        return Some(Outcome::Intercepted);
    }
    if evader_position.length() < config.safe_zone_radius {
        return Some(Outcome::Escaped);
    }
    None
}
