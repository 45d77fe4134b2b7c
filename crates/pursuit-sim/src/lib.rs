//! Simulation engine for the pursuit-evasion engagement.
//!
//! Owns the hecs ECS world, integrates both bodies each tick,
//! and produces EngagementSnapshots for whatever renders them.

pub mod engine;
pub mod integrator;
pub mod pursuer;
pub mod scenario;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use pursuit_core as core;
