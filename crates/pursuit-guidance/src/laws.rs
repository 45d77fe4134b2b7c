//! Guidance law library.
//!
//! Every law shares one signature: `(pursuer, target, params) -> a_n`, a
//! signed lateral acceleration command (positive = left turn) that the
//! integrator decomposes onto the pursuer's velocity normal.
//!
//! Laws read `target.acceleration` as the target's acceleration estimate;
//! callers that filter it substitute the filtered value before calling.
//! All laws return zero when the bodies coincide or the pursuer is
//! (nearly) stationary.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use pursuit_core::config::SimConfig;
use pursuit_core::constants::TGO_CLAMP_MAX;
use pursuit_core::enums::GuidanceLaw;
use pursuit_core::geometry::{angle_of, left_normal, wrap_angle};
use pursuit_core::types::KinematicState;

/// Tuning shared by all laws for one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuidanceParams {
    /// Navigation gain N.
    pub nav_gain: f64,
    /// Step length the command will be applied over.
    pub dt: f64,
    /// Zero threshold and additive denominator guard.
    pub eps: f64,
    /// Pursuer speed at which APN's acceleration term reaches full weight.
    pub apn_speed_threshold: f64,
}

impl GuidanceParams {
    pub fn from_config(config: &SimConfig, dt: f64) -> Self {
        Self {
            nav_gain: config.nav_gain,
            dt,
            eps: config.eps,
            apn_speed_threshold: config.apn_speed_threshold,
        }
    }
}

/// Relative geometry of target with respect to pursuer.
struct Relative {
    /// Target position minus pursuer position.
    r: DVec2,
    /// Target velocity minus pursuer velocity.
    v: DVec2,
    /// Pursuer speed.
    vp: f64,
    /// Pursuer velocity normal, rotated left.
    normal: DVec2,
}

impl Relative {
    /// `None` when geometry is degenerate.
    fn resolve(pursuer: &KinematicState, target: &KinematicState, eps: f64) -> Option<Self> {
        let r = target.position - pursuer.position;
        if r.length() < eps {
            return None;
        }
        let normal = left_normal(pursuer.velocity, eps)?;
        Some(Self {
            r,
            v: target.velocity - pursuer.velocity,
            vp: pursuer.velocity.length(),
            normal,
        })
    }

    /// LOS angular rate, counter-clockwise positive.
    fn los_rate(&self, eps: f64) -> f64 {
        self.r.perp_dot(self.v) / (self.r.length_squared() + eps)
    }

    /// Time to closest approach assuming no further maneuvering.
    fn time_to_go(&self, eps: f64) -> f64 {
        -self.r.dot(self.v) / (self.v.length_squared() + eps)
    }
}

/// Evaluate `law` for the given pursuer and target.
pub fn evaluate(
    law: GuidanceLaw,
    pursuer: &KinematicState,
    target: &KinematicState,
    params: &GuidanceParams,
) -> f64 {
    match law {
        GuidanceLaw::PurePursuit => pure_pursuit(pursuer, target, params),
        GuidanceLaw::TrueProportional => true_proportional(pursuer, target, params),
        GuidanceLaw::AugmentedProportional => augmented_proportional(pursuer, target, params),
        GuidanceLaw::ZeroEffortMiss => zero_effort_miss(pursuer, target, params),
        GuidanceLaw::ZeroEffortMissAugmented => {
            zero_effort_miss_augmented(pursuer, target, params)
        }
        GuidanceLaw::RotatedFrameZem => rotated_frame_zem(pursuer, target, params),
    }
}

/// Pure Pursuit: turn toward the current bearing, `N · Δangle · |v_p|`.
pub fn pure_pursuit(pursuer: &KinematicState, target: &KinematicState, p: &GuidanceParams) -> f64 {
    let Some(rel) = Relative::resolve(pursuer, target, p.eps) else {
        return 0.0;
    };
    let angle_diff = wrap_angle(angle_of(rel.r) - angle_of(pursuer.velocity));
    p.nav_gain * angle_diff * rel.vp
}

/// True Proportional Navigation: `N · |v_p| · λ̇`.
pub fn true_proportional(
    pursuer: &KinematicState,
    target: &KinematicState,
    p: &GuidanceParams,
) -> f64 {
    let Some(rel) = Relative::resolve(pursuer, target, p.eps) else {
        return 0.0;
    };
    p.nav_gain * rel.vp * rel.los_rate(p.eps)
}

/// Augmented PN: TPN plus half the target's normal acceleration times N,
/// tapered by `min(1, |v_p| / threshold)` as the pursuer loses speed.
pub fn augmented_proportional(
    pursuer: &KinematicState,
    target: &KinematicState,
    p: &GuidanceParams,
) -> f64 {
    let Some(rel) = Relative::resolve(pursuer, target, p.eps) else {
        return 0.0;
    };
    let gain = (rel.vp / p.apn_speed_threshold).min(1.0);
    let target_normal_accel = target.acceleration.dot(rel.normal);
    p.nav_gain * rel.vp * rel.los_rate(p.eps) + 0.5 * p.nav_gain * target_normal_accel * gain
}

/// ZEM PN: `N · ZEM⊥ / t_go²` with `ZEM = r + v·t_go`.
pub fn zero_effort_miss(
    pursuer: &KinematicState,
    target: &KinematicState,
    p: &GuidanceParams,
) -> f64 {
    let Some(rel) = Relative::resolve(pursuer, target, p.eps) else {
        return 0.0;
    };
    let t_go = rel.time_to_go(p.eps);
    let zem = rel.r + rel.v * t_go;
    p.nav_gain * zem.dot(rel.normal) / (t_go * t_go + p.eps)
}

/// ZEM APN: as [`zero_effort_miss`] with `ZEM += ½·a_t·t_go²`.
pub fn zero_effort_miss_augmented(
    pursuer: &KinematicState,
    target: &KinematicState,
    p: &GuidanceParams,
) -> f64 {
    let Some(rel) = Relative::resolve(pursuer, target, p.eps) else {
        return 0.0;
    };
    let t_go = rel.time_to_go(p.eps);
    let zem = rel.r + rel.v * t_go + target.acceleration * (0.5 * t_go * t_go);
    p.nav_gain * zem.dot(rel.normal) / (t_go * t_go + p.eps)
}

/// Rotated-frame ZEM.
///
/// Works in the pursuer's body frame (velocity along +y) and takes `t_go`
/// as the time at which the target crosses the pursuer's flight line.
/// This derivation does not hold up for many geometries; it is kept as a
/// separate selectable law for comparison, not as a corrected variant.
/// Falls back to TPN when the target has no cross-track velocity.
pub fn rotated_frame_zem(
    pursuer: &KinematicState,
    target: &KinematicState,
    p: &GuidanceParams,
) -> f64 {
    let Some(rel) = Relative::resolve(pursuer, target, p.eps) else {
        return 0.0;
    };
    let cos = pursuer.velocity.y / rel.vp;
    let sin = -pursuer.velocity.x / rel.vp;
    let rotate = |v: DVec2| DVec2::new(v.x * cos + v.y * sin, -v.x * sin + v.y * cos);

    let r = rotate(rel.r);
    let vt = rotate(target.velocity);
    if vt.x.abs() < p.eps {
        return true_proportional(pursuer, target, p);
    }

    let crossing = -r.x / vt.x;
    let t_go = crossing.clamp(p.eps, TGO_CLAMP_MAX);
    let zem = (r.y + vt.y * t_go) - rel.vp * t_go;
    p.nav_gain * zem * sign(r.x) * sign(crossing) / (t_go * t_go + p.eps)
}

/// Sign with `sign(0) = 0`.
fn sign(x: f64) -> f64 {
    if x > 0.0 {
        1.0
    } else if x < 0.0 {
        -1.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> GuidanceParams {
        GuidanceParams {
            nav_gain: 3.0,
            dt: 1.0 / 120.0,
            eps: 1e-6,
            apn_speed_threshold: 50.0,
        }
    }

    #[test]
    fn test_all_laws_zero_when_coincident() {
        let pursuer = KinematicState::new(5.0, 5.0, 100.0, 0.0);
        let target = KinematicState::new(5.0, 5.0, -50.0, 20.0);
        for law in GuidanceLaw::ALL {
            assert_eq!(evaluate(law, &pursuer, &target, &params()), 0.0, "{law:?}");
        }
    }

    #[test]
    fn test_all_laws_zero_when_pursuer_stationary() {
        let pursuer = KinematicState::new(0.0, 0.0, 0.0, 0.0);
        let mut target = KinematicState::new(300.0, -200.0, -50.0, 20.0);
        target.acceleration = DVec2::new(3.0, 4.0);
        for law in GuidanceLaw::ALL {
            assert_eq!(evaluate(law, &pursuer, &target, &params()), 0.0, "{law:?}");
        }
    }

    #[test]
    fn test_pure_pursuit_target_dead_ahead() {
        let pursuer = KinematicState::new(0.0, 0.0, 70.0, 70.0);
        let target = KinematicState::new(100.0, 100.0, 0.0, -30.0);
        assert!(pure_pursuit(&pursuer, &target, &params()).abs() < 1e-9);
    }

    #[test]
    fn test_pure_pursuit_turns_toward_bearing() {
        // Target 90° to the left: full N · π/2 · |v|.
        let pursuer = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let target = KinematicState::new(0.0, 50.0, 0.0, 0.0);
        let a = pure_pursuit(&pursuer, &target, &params());
        assert!((a - 3.0 * std::f64::consts::FRAC_PI_2 * 100.0).abs() < 1e-9);

        // Target directly behind wraps to -π, a hard right turn.
        let behind = KinematicState::new(-50.0, 0.0, 0.0, 0.0);
        assert!(pure_pursuit(&pursuer, &behind, &params()) < 0.0);
    }

    #[test]
    fn test_tpn_head_on_collision_course_is_zero() {
        let pursuer = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let target = KinematicState::new(1000.0, 0.0, -50.0, 0.0);
        assert!(true_proportional(&pursuer, &target, &params()).abs() < 1e-12);
    }

    #[test]
    fn test_tpn_constant_bearing_crossing_is_zero() {
        // Both reach (500, 0) at t = 5: constant bearing, zero LOS rate.
        let pursuer = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let target = KinematicState::new(500.0, 250.0, 0.0, -50.0);
        assert!(true_proportional(&pursuer, &target, &params()).abs() < 1e-9);
        assert!(zero_effort_miss(&pursuer, &target, &params()).abs() < 1e-6);
    }

    #[test]
    fn test_tpn_sign_follows_los_rotation() {
        // Target ahead, drifting left: LOS rotates counter-clockwise.
        let pursuer = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let target = KinematicState::new(500.0, 0.0, 0.0, 30.0);
        assert!(true_proportional(&pursuer, &target, &params()) > 0.0);

        let target = KinematicState::new(500.0, 0.0, 0.0, -30.0);
        assert!(true_proportional(&pursuer, &target, &params()) < 0.0);
    }

    #[test]
    fn test_apn_reduces_to_tpn_without_target_acceleration() {
        let pursuer = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let target = KinematicState::new(400.0, 400.0, -50.0, 0.0);
        let tpn = true_proportional(&pursuer, &target, &params());
        let apn = augmented_proportional(&pursuer, &target, &params());
        assert!((tpn - apn).abs() < 1e-12);
    }

    #[test]
    fn test_apn_adds_half_n_target_normal_acceleration() {
        let pursuer = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let mut target = KinematicState::new(1000.0, 0.0, -50.0, 0.0);
        target.acceleration = DVec2::new(0.0, 10.0);
        // LOS rate is zero, so only the augmentation term remains: 0.5 · 3 · 10.
        let apn = augmented_proportional(&pursuer, &target, &params());
        assert!((apn - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_apn_gain_tapers_at_low_speed() {
        let pursuer = KinematicState::new(0.0, 0.0, 25.0, 0.0);
        let mut target = KinematicState::new(1000.0, 0.0, -50.0, 0.0);
        target.acceleration = DVec2::new(0.0, 10.0);
        // Half the threshold speed: half the augmentation.
        let apn = augmented_proportional(&pursuer, &target, &params());
        assert!((apn - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_zem_steers_toward_predicted_miss() {
        // Target will pass above the pursuer's line: steer left.
        let pursuer = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let target = KinematicState::new(1000.0, 100.0, -50.0, 0.0);
        assert!(zero_effort_miss(&pursuer, &target, &params()) > 0.0);
    }

    #[test]
    fn test_zemapn_matches_zempn_without_acceleration() {
        let pursuer = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let target = KinematicState::new(400.0, 400.0, -50.0, 0.0);
        let plain = zero_effort_miss(&pursuer, &target, &params());
        let augmented = zero_effort_miss_augmented(&pursuer, &target, &params());
        assert!((plain - augmented).abs() < 1e-12);
    }

    #[test]
    fn test_zemapn_leads_accelerating_target() {
        // On a collision course, but the target is pulling left.
        let pursuer = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let mut target = KinematicState::new(1000.0, 0.0, -50.0, 0.0);
        target.acceleration = DVec2::new(0.0, 20.0);
        assert!(zero_effort_miss(&pursuer, &target, &params()).abs() < 1e-9);
        assert!(zero_effort_miss_augmented(&pursuer, &target, &params()) > 0.0);
    }

    #[test]
    fn test_rotated_frame_zem_falls_back_to_tpn() {
        // Target moves parallel to the pursuer: no cross-track velocity.
        let pursuer = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let target = KinematicState::new(400.0, 300.0, 40.0, 0.0);
        let expected = true_proportional(&pursuer, &target, &params());
        assert_eq!(rotated_frame_zem(&pursuer, &target, &params()), expected);
    }

    #[test]
    fn test_rotated_frame_zem_formula() {
        // Pursuer heading +y already, so the body frame is the world frame.
        let pursuer = KinematicState::new(0.0, 0.0, 0.0, 10.0);
        let target = KinematicState::new(-20.0, 100.0, 10.0, 0.0);
        // x' = -20, vx' = 10 ⇒ t_go = 2; ZEM = 100 − 10·2 = 80.
        // sign(x') = −1, sign(t_go) = +1 ⇒ a = 3 · 80 · (−1) / 4.
        let a = rotated_frame_zem(&pursuer, &target, &params());
        assert!((a + 60.0).abs() < 1e-4, "got {a}");
    }
}
