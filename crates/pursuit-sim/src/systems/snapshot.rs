//! Snapshot system: queries the ECS world and builds an EngagementSnapshot.
//!
//! This system is read-only; it never modifies the world.

use glam::DVec2;
use hecs::{Entity, World};

use pursuit_core::components::{Steering, Trail};
use pursuit_core::config::SimConfig;
use pursuit_core::enums::*;
use pursuit_core::state::*;
use pursuit_core::types::{KinematicState, SimTime};

use crate::integrator::SpeedEnvelope;
use crate::world_setup::Bodies;

/// Engine-level state that does not live in the world.
pub struct EngineView<'a> {
    pub config: &'a SimConfig,
    pub time: SimTime,
    pub phase: EngagementPhase,
    pub outcome: Option<Outcome>,
    pub law: GuidanceLaw,
    pub miss_distance: f64,
}

/// Build a complete EngagementSnapshot from the current world state.
pub fn build_snapshot(world: &World, bodies: &Bodies, view: &EngineView<'_>) -> EngagementSnapshot {
    let evader = build_body(world, bodies.evader);
    let pursuer = build_body(world, bodies.pursuer);
    let pursuer_exhausted = world
        .get::<&SpeedEnvelope>(bodies.pursuer)
        .map(|envelope| envelope.is_exhausted())
        .unwrap_or(false);

    EngagementSnapshot {
        time: view.time,
        phase: view.phase,
        outcome: view.outcome,
        game_over: view.phase == EngagementPhase::GameOver,
        win: view.outcome == Some(Outcome::Escaped),
        law: view.law,
        law_name: view.law.name().to_string(),
        nav_gain: view.config.nav_gain,
        separation: evader.position.distance(pursuer.position),
        miss_distance: view.miss_distance,
        distance_to_safe_zone: evader.position.length(),
        evader_trail: build_trail(world, bodies.evader),
        pursuer_trail: build_trail(world, bodies.pursuer),
        evader,
        pursuer,
        pursuer_exhausted,
        frame_interval_secs: view.config.frame_interval_secs(),
    }
}

/// Build a BodyView for one entity; missing components read as zero.
fn build_body(world: &World, entity: Entity) -> BodyView {
    let state = world
        .get::<&KinematicState>(entity)
        .map(|s| *s)
        .unwrap_or_default();
    let speed_cap = world
        .get::<&SpeedEnvelope>(entity)
        .map(|e| e.cap())
        .unwrap_or(0.0);
    let lateral_command = world
        .get::<&Steering>(entity)
        .map(|s| s.lateral)
        .unwrap_or(0.0);

    BodyView {
        position: state.position,
        velocity: state.velocity,
        acceleration: state.acceleration,
        speed: state.speed(),
        heading: state.heading(),
        speed_cap,
        lateral_command,
    }
}

fn build_trail(world: &World, entity: Entity) -> Vec<DVec2> {
    world
        .get::<&Trail>(entity)
        .map(|trail| trail.positions.iter().copied().collect())
        .unwrap_or_default()
}
