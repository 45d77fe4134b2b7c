//! Kinematic integration system.
//!
//! Advances every body through the integrator with its own speed envelope.
//! Evaders and pursuers run as separate passes so guidance can sit between them.

use hecs::{Entity, World};

use pursuit_core::components::{Evader, Steering};
use pursuit_core::types::KinematicState;

use crate::integrator::{integrate, SpeedEnvelope, StepResult};
use crate::pursuer::Pursuer;

/// Move every evader by `dt`.
pub fn run_evaders(world: &mut World, dt: f64, eps: f64) {
    for (_entity, (_evader, state, steering, envelope)) in world.query_mut::<(
        &Evader,
        &mut KinematicState,
        &Steering,
        &mut SpeedEnvelope,
    )>() {
        integrate(state, steering, envelope, dt, eps);
    }
}

/// Move every pursuer by `dt`. Returns pursuers that ran out of speed this step.
pub fn run_pursuers(world: &mut World, dt: f64, eps: f64) -> Vec<Entity> {
    let mut exhausted = Vec::new();
    for (entity, (_pursuer, state, steering, envelope)) in world.query_mut::<(
        &Pursuer,
        &mut KinematicState,
        &Steering,
        &mut SpeedEnvelope,
    )>() {
        if integrate(state, steering, envelope, dt, eps) == StepResult::Exhausted {
            exhausted.push(entity);
        }
    }
    exhausted
}
