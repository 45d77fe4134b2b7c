//! Entity spawn factories for setting up an engagement.
//!
//! Creates the evader and the pursuer with their component bundles.

use std::collections::VecDeque;

use hecs::World;

use pursuit_core::components::*;
use pursuit_core::config::SimConfig;
use pursuit_core::enums::GuidanceLaw;
use pursuit_core::types::{BodyStart, KinematicState};
use pursuit_guidance::AccelerationFilter;

use crate::integrator::SpeedEnvelope;
use crate::pursuer::Pursuer;

/// Entity handles of the two engagement bodies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bodies {
    pub evader: hecs::Entity,
    pub pursuer: hecs::Entity,
}

/// Clear the world and spawn a fresh evader and pursuer.
pub fn setup_engagement(world: &mut World, config: &SimConfig, law: GuidanceLaw) -> Bodies {
    world.clear();
    let evader = spawn_evader(world, config.evader_start, config);
    let pursuer = spawn_pursuer(world, config.pursuer_start, evader, law, config);
    Bodies { evader, pursuer }
}

/// Spawn the player-steered evader. Its cap is its initial speed until
/// throttle input moves it within `[evader_min_speed, evader_max_speed]`.
pub fn spawn_evader(world: &mut World, start: BodyStart, config: &SimConfig) -> hecs::Entity {
    let envelope = SpeedEnvelope::Throttled {
        current: start.speed(),
        min: config.evader_min_speed,
        max: config.evader_max_speed,
    };

    world.spawn((
        Evader,
        KinematicState::from(start),
        Steering::default(),
        ControlInput::default(),
        envelope,
        new_trail(config),
    ))
}

/// Spawn a pursuer homing on `target` with a drag-decaying speed cap.
pub fn spawn_pursuer(
    world: &mut World,
    start: BodyStart,
    target: hecs::Entity,
    law: GuidanceLaw,
    config: &SimConfig,
) -> hecs::Entity {
    let pursuer = Pursuer {
        target,
        law,
        nav_gain: config.nav_gain,
        target_accel_filter: AccelerationFilter::new(config.filter_alpha),
    };

    world.spawn((
        pursuer,
        KinematicState::from(start),
        Steering::default(),
        SpeedEnvelope::decaying(start.speed(), config.drag_coeff),
        new_trail(config),
    ))
}

fn new_trail(config: &SimConfig) -> Trail {
    Trail {
        positions: VecDeque::with_capacity(config.trajectory_capacity),
        capacity: config.trajectory_capacity,
    }
}
