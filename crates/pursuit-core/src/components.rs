//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use std::collections::VecDeque;

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marks an entity as the evader (player-steered body).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Evader;

/// Latest operator input for an evader.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ControlInput {
    pub lateral: LateralInput,
    pub longitudinal: LongitudinalInput,
}

/// Requested acceleration for the next integration step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Steering {
    /// Normal acceleration, positive = left turn.
    pub lateral: f64,
    /// Tangential acceleration along the velocity.
    pub longitudinal: f64,
}

/// Bounded position history, oldest first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Trail {
    pub positions: VecDeque<DVec2>,
    /// Maximum number of positions retained.
    pub capacity: usize,
}
