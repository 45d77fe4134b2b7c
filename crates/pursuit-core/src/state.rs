//! Engagement snapshot: the complete visible state handed to a renderer.
//!
//! Built fresh on request; holding one never borrows the engine.

use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::SimTime;

/// Complete engagement state after the latest tick.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngagementSnapshot {
    pub time: SimTime,
    pub phase: EngagementPhase,
    pub outcome: Option<Outcome>,
    pub game_over: bool,
    /// Only meaningful when `game_over` is set.
    pub win: bool,
    pub law: GuidanceLaw,
    pub law_name: String,
    pub nav_gain: f64,
    pub evader: BodyView,
    pub pursuer: BodyView,
    /// Evader positions, oldest first.
    pub evader_trail: Vec<DVec2>,
    /// Pursuer positions, oldest first.
    pub pursuer_trail: Vec<DVec2>,
    /// Pursuer-evader distance at the end of the last tick.
    pub separation: f64,
    /// Smallest pursuer-evader distance seen since the last reset,
    /// including closest approach within a tick.
    pub miss_distance: f64,
    /// Evader distance to the safe-zone center (origin).
    pub distance_to_safe_zone: f64,
    /// The pursuer has bled all its speed and is frozen.
    pub pursuer_exhausted: bool,
    /// Suggested seconds until the next frame.
    pub frame_interval_secs: f64,
}

/// Kinematic view of one body.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyView {
    pub position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
    pub speed: f64,
    /// Heading in radians, counter-clockwise from +x.
    pub heading: f64,
    /// Current speed cap of the body.
    pub speed_cap: f64,
    /// Last commanded lateral acceleration (positive = left).
    pub lateral_command: f64,
}
