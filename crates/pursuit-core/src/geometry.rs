//! 2D vector helpers shared by the integrator and every guidance law.

use std::f64::consts::{PI, TAU};

use glam::DVec2;

/// Angle of a vector in radians, counter-clockwise from +x, in (-π, π].
pub fn angle_of(v: DVec2) -> f64 {
    v.y.atan2(v.x)
}

/// Wrap an angle into [-π, π).
pub fn wrap_angle(angle: f64) -> f64 {
    (angle + PI).rem_euclid(TAU) - PI
}

/// Unit normal to `velocity`, rotated 90° to the left. `None` below `eps`.
pub fn left_normal(velocity: DVec2, eps: f64) -> Option<DVec2> {
    let speed = velocity.length();
    if speed < eps {
        return None;
    }
    Some(velocity.perp() / speed)
}

/// Unit vector along `velocity`. `None` below `eps`.
pub fn tangent(velocity: DVec2, eps: f64) -> Option<DVec2> {
    let speed = velocity.length();
    if speed < eps {
        return None;
    }
    Some(velocity / speed)
}

/// Decompose a scalar lateral command (positive = left) into world axes.
///
/// An immobile body cannot turn: below `eps` the result is zero.
pub fn lateral_to_world(velocity: DVec2, lateral: f64, eps: f64) -> DVec2 {
    left_normal(velocity, eps).map_or(DVec2::ZERO, |n| n * lateral)
}

/// Signed magnitude of the component of `accel` normal to `velocity`
/// (positive = left). Inverse of [`lateral_to_world`].
pub fn world_to_lateral(velocity: DVec2, accel: DVec2, eps: f64) -> f64 {
    left_normal(velocity, eps).map_or(0.0, |n| accel.dot(n))
}

/// Minimum distance from the origin along the segment `r0 → r1`.
///
/// Used to test a relative offset for closest approach within one step.
pub fn closest_approach(r0: DVec2, r1: DVec2) -> f64 {
    let d = r1 - r0;
    let len_sq = d.length_squared();
    if len_sq <= f64::EPSILON * f64::EPSILON {
        return r1.length();
    }
    let u = (-r0.dot(d) / len_sq).clamp(0.0, 1.0);
    (r0 + d * u).length()
}

/// Scale `v` down to `cap` if it is longer. Never lengthens.
pub fn clamp_length(v: DVec2, cap: f64) -> DVec2 {
    let len = v.length();
    if len > cap {
        if cap <= 0.0 {
            DVec2::ZERO
        } else {
            v * (cap / len)
        }
    } else {
        v
    }
}
