//! Guidance system: evaluates each pursuer's law against its target.
//!
//! Runs after the evader has moved, so the law sees this tick's target state.

use hecs::{Entity, World};

use pursuit_core::components::Steering;
use pursuit_core::types::KinematicState;
use pursuit_guidance::{evaluate, AccelerationFilter, GuidanceParams};

use crate::pursuer::Pursuer;

/// Compute the lateral command of every pursuer for the coming step.
///
/// Pursuers whose target entity no longer exists fly straight.
pub fn run(world: &mut World, params: &GuidanceParams) {
    // Collect first: the target state lives on another entity.
    let mut commands: Vec<(Entity, f64, AccelerationFilter)> = Vec::new();

    for (entity, (pursuer, state)) in world.query::<(&Pursuer, &KinematicState)>().iter() {
        let Ok(target) = world.get::<&KinematicState>(pursuer.target) else {
            commands.push((entity, 0.0, pursuer.target_accel_filter));
            continue;
        };

        let mut filter = pursuer.target_accel_filter;
        let mut seen = *target;
        if pursuer.law.uses_target_acceleration() {
            seen.acceleration = filter.update(target.acceleration);
        }

        let law_params = GuidanceParams {
            nav_gain: pursuer.nav_gain,
            ..*params
        };
        let lateral = evaluate(pursuer.law, state, &seen, &law_params);
        commands.push((entity, lateral, filter));
    }

    for (entity, lateral, filter) in commands {
        if let Ok(mut steering) = world.get::<&mut Steering>(entity) {
            steering.lateral = lateral;
            steering.longitudinal = 0.0;
        }
        if let Ok(mut pursuer) = world.get::<&mut Pursuer>(entity) {
            pursuer.target_accel_filter = filter;
        }
    }
}
