//! Point-mass integrator with a per-body speed envelope.
//!
//! One step: resolve the requested acceleration into world axes, form the
//! candidate velocity, cap its length, recompute the realized acceleration
//! from the capped velocity, and move by the trapezoidal average velocity.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use pursuit_core::components::Steering;
use pursuit_core::geometry::{clamp_length, lateral_to_world, tangent};
use pursuit_core::types::KinematicState;

/// Speed-cap policy of a body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SpeedEnvelope {
    /// Capped at a constant speed, normally the initial one.
    Fixed { cap: f64 },
    /// Cap moved by the longitudinal command within `[min, max]`.
    /// Without a longitudinal command the cap stays where it is.
    Throttled { current: f64, min: f64, max: f64 },
    /// Cap bleeds by `drag_coeff · |a_n| · dt` every step; frozen at zero.
    Decaying {
        current: f64,
        max: f64,
        drag_coeff: f64,
    },
}

/// What a call to [`integrate`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepResult {
    Moved,
    /// The speed cap reached zero during this step.
    Exhausted,
    /// Already exhausted; nothing moved.
    Frozen,
    /// `dt` was not positive and finite; nothing changed.
    Rejected,
}

impl SpeedEnvelope {
    /// A decaying envelope starting at full speed.
    pub fn decaying(speed: f64, drag_coeff: f64) -> Self {
        SpeedEnvelope::Decaying {
            current: speed,
            max: speed,
            drag_coeff,
        }
    }

    /// Current speed cap.
    pub fn cap(&self) -> f64 {
        match *self {
            SpeedEnvelope::Fixed { cap } => cap,
            SpeedEnvelope::Throttled { current, .. } => current,
            SpeedEnvelope::Decaying { current, .. } => current,
        }
    }

    /// Upper bound the cap can ever reach.
    pub fn max(&self) -> f64 {
        match *self {
            SpeedEnvelope::Fixed { cap } => cap,
            SpeedEnvelope::Throttled { max, .. } => max,
            SpeedEnvelope::Decaying { max, .. } => max,
        }
    }

    /// A decaying envelope that has bled to zero.
    pub fn is_exhausted(&self) -> bool {
        matches!(*self, SpeedEnvelope::Decaying { current, .. } if current <= 0.0)
    }

    /// Tangential acceleration to apply once the cap has moved. A throttled
    /// body accelerates exactly onto its new cap so it never leaves `[min, max]`.
    fn tangential(&self, steering: &Steering, speed: f64, dt: f64) -> f64 {
        match *self {
            SpeedEnvelope::Throttled { current, .. } if steering.longitudinal != 0.0 => {
                (current - speed) / dt
            }
            _ => steering.longitudinal,
        }
    }

    /// Move the cap for a step about to apply `steering`.
    fn advance(&mut self, steering: &Steering, dt: f64, eps: f64) {
        match self {
            SpeedEnvelope::Fixed { .. } => {}
            SpeedEnvelope::Throttled { current, min, max } => {
                if steering.longitudinal != 0.0 {
                    *current = (*current + steering.longitudinal * dt).clamp(*min, *max);
                }
            }
            SpeedEnvelope::Decaying {
                current,
                drag_coeff,
                ..
            } => {
                *current -= *drag_coeff * steering.lateral.abs() * dt;
                if *current <= eps {
                    *current = 0.0;
                }
            }
        }
    }
}

/// Advance one body by `dt`.
pub fn integrate(
    state: &mut KinematicState,
    steering: &Steering,
    envelope: &mut SpeedEnvelope,
    dt: f64,
    eps: f64,
) -> StepResult {
    if !(dt.is_finite() && dt > 0.0) {
        return StepResult::Rejected;
    }
    if envelope.is_exhausted() {
        state.velocity = DVec2::ZERO;
        state.acceleration = DVec2::ZERO;
        return StepResult::Frozen;
    }

    envelope.advance(steering, dt, eps);

    let v = state.velocity;
    let longitudinal = envelope.tangential(steering, v.length(), dt);
    let requested = lateral_to_world(v, steering.lateral, eps)
        + tangent(v, eps).map_or(DVec2::ZERO, |t| t * longitudinal);
    let new_v = clamp_length(v + requested * dt, envelope.cap());

    state.acceleration = (new_v - v) / dt;
    state.position += (v + new_v) * 0.5 * dt;
    state.velocity = new_v;

    if envelope.is_exhausted() {
        StepResult::Exhausted
    } else {
        StepResult::Moved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    const EPS: f64 = 1e-6;

    fn steer(lateral: f64, longitudinal: f64) -> Steering {
        Steering {
            lateral,
            longitudinal,
        }
    }

    #[test]
    fn test_speed_cap_holds_for_random_inputs() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..2000 {
            let speed = rng.gen_range(0.0..200.0);
            let heading: f64 = rng.gen_range(0.0..std::f64::consts::TAU);
            let mut state = KinematicState::new(
                rng.gen_range(-500.0..500.0),
                rng.gen_range(-500.0..500.0),
                speed * heading.cos(),
                speed * heading.sin(),
            );
            let mut envelope = match rng.gen_range(0..3) {
                0 => SpeedEnvelope::Fixed { cap: speed },
                1 => SpeedEnvelope::Throttled {
                    current: speed,
                    min: 1.0,
                    max: 250.0,
                },
                _ => SpeedEnvelope::decaying(speed, rng.gen_range(0.0..1.0)),
            };
            let dt = rng.gen_range(1e-4..0.5);
            let steering = steer(rng.gen_range(-5000.0..5000.0), rng.gen_range(-50.0..50.0));

            integrate(&mut state, &steering, &mut envelope, dt, EPS);

            assert!(
                state.speed() <= envelope.cap() * (1.0 + 1e-12) + 1e-12,
                "speed {} above cap {}",
                state.speed(),
                envelope.cap()
            );
        }
    }

    #[test]
    fn test_trapezoidal_displacement_constant_acceleration() {
        // Pure longitudinal thrust well under the cap: v' = v + a·dt exactly.
        let mut state = KinematicState::new(1.0, 2.0, 10.0, 0.0);
        let mut envelope = SpeedEnvelope::Fixed { cap: 1000.0 };
        let dt = 0.25;
        integrate(&mut state, &steer(0.0, 4.0), &mut envelope, dt, EPS);

        // x = x0 + v0·dt + ½·a·dt² = 1 + 2.5 + 0.125
        assert!((state.position.x - 3.625).abs() < 1e-12);
        assert!((state.position.y - 2.0).abs() < 1e-12);
        assert!((state.velocity.x - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_trapezoidal_displacement_under_cap() {
        let mut state = KinematicState::new(0.0, 0.0, 3.0, 4.0);
        let v0 = state.velocity;
        let mut envelope = SpeedEnvelope::Fixed { cap: 5.0 };
        let dt = 0.1;
        integrate(&mut state, &steer(20.0, 0.0), &mut envelope, dt, EPS);

        let expected = (v0 + state.velocity) * 0.5 * dt;
        assert!((state.position - expected).length() < 1e-12);
        assert!((state.speed() - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_realized_acceleration_reflects_cap() {
        let mut state = KinematicState::new(0.0, 0.0, 10.0, 0.0);
        let mut envelope = SpeedEnvelope::Fixed { cap: 10.0 };
        let dt = 0.1;
        integrate(&mut state, &steer(100.0, 0.0), &mut envelope, dt, EPS);

        // Requested 100 straight left; the capped velocity turned less than that.
        let realized = state.acceleration;
        assert!(realized.length() < 100.0);
        assert!(realized.x < 0.0, "capping pulls the x component back");
        assert!(((state.velocity - DVec2::new(10.0, 0.0)) / dt - realized).length() < 1e-9);
    }

    #[test]
    fn test_rejects_non_positive_dt() {
        let mut state = KinematicState::new(1.0, 1.0, 5.0, 0.0);
        let before = state;
        let mut envelope = SpeedEnvelope::Fixed { cap: 5.0 };
        for dt in [0.0, -0.1, f64::NAN, f64::INFINITY] {
            let result = integrate(&mut state, &steer(10.0, 1.0), &mut envelope, dt, EPS);
            assert_eq!(result, StepResult::Rejected);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_stationary_body_stays_put() {
        let mut state = KinematicState::new(7.0, -3.0, 0.0, 0.0);
        let mut envelope = SpeedEnvelope::Fixed { cap: 0.0 };
        for _ in 0..10 {
            integrate(&mut state, &steer(500.0, 0.0), &mut envelope, 0.1, EPS);
        }
        assert_eq!(state.position, DVec2::new(7.0, -3.0));
        assert_eq!(state.velocity, DVec2::ZERO);
    }

    #[test]
    fn test_throttle_clips_to_envelope() {
        let mut state = KinematicState::new(0.0, 0.0, 45.0, 0.0);
        let mut envelope = SpeedEnvelope::Throttled {
            current: 45.0,
            min: 1.0,
            max: 50.0,
        };
        for _ in 0..200 {
            integrate(&mut state, &steer(0.0, 5.0), &mut envelope, 0.1, EPS);
        }
        assert_eq!(envelope.cap(), 50.0);
        assert!((state.speed() - 50.0).abs() < 1e-9);

        for _ in 0..2000 {
            integrate(&mut state, &steer(0.0, -10.0), &mut envelope, 0.1, EPS);
        }
        assert_eq!(envelope.cap(), 1.0);
        assert!((state.speed() - 1.0).abs() < 1e-9, "never slows below the floor");
    }

    #[test]
    fn test_throttle_holds_cap_without_longitudinal_command() {
        let mut state = KinematicState::new(0.0, 0.0, 30.0, 0.0);
        let mut envelope = SpeedEnvelope::Throttled {
            current: 30.0,
            min: 1.0,
            max: 50.0,
        };
        for _ in 0..100 {
            integrate(&mut state, &steer(80.0, 0.0), &mut envelope, 0.01, EPS);
        }
        assert_eq!(envelope.cap(), 30.0);
        assert!((state.speed() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn test_decaying_envelope_bleeds_and_freezes() {
        let mut state = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let mut envelope = SpeedEnvelope::decaying(100.0, 1.0);
        let dt = 0.1;

        // 1.0 · 300 · 0.1 = 30 lost per step.
        assert_eq!(
            integrate(&mut state, &steer(300.0, 0.0), &mut envelope, dt, EPS),
            StepResult::Moved
        );
        assert!((envelope.cap() - 70.0).abs() < 1e-9);

        let mut result = StepResult::Moved;
        for _ in 0..5 {
            result = integrate(&mut state, &steer(300.0, 0.0), &mut envelope, dt, EPS);
            if result == StepResult::Exhausted {
                break;
            }
        }
        assert_eq!(result, StepResult::Exhausted);
        assert!(envelope.is_exhausted());
        assert_eq!(state.velocity, DVec2::ZERO);

        let frozen_at = state.position;
        assert_eq!(
            integrate(&mut state, &steer(300.0, 0.0), &mut envelope, dt, EPS),
            StepResult::Frozen
        );
        assert_eq!(state.position, frozen_at);
        assert_eq!(state.acceleration, DVec2::ZERO);
    }

    #[test]
    fn test_decaying_envelope_untouched_when_flying_straight() {
        let mut state = KinematicState::new(0.0, 0.0, 100.0, 0.0);
        let mut envelope = SpeedEnvelope::decaying(100.0, 0.07);
        integrate(&mut state, &steer(0.0, 0.0), &mut envelope, 0.1, EPS);
        assert_eq!(envelope.cap(), 100.0);
        assert!((state.position - DVec2::new(10.0, 0.0)).length() < 1e-12);
    }
}
