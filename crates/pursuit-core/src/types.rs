//! Fundamental kinematic and simulation types.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// Planar point-mass state (world units, Cartesian, x = East, y = North).
///
/// `acceleration` holds the acceleration actually realized by the last
/// integration step, not the one that was requested.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct KinematicState {
    pub position: DVec2,
    pub velocity: DVec2,
    pub acceleration: DVec2,
}

/// Initial conditions for one body.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct BodyStart {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Number of ticks advanced since the last reset.
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl KinematicState {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self {
            position: DVec2::new(x, y),
            velocity: DVec2::new(vx, vy),
            acceleration: DVec2::ZERO,
        }
    }

    /// Speed magnitude.
    pub fn speed(&self) -> f64 {
        self.velocity.length()
    }

    /// Heading in radians, counter-clockwise from +x.
    pub fn heading(&self) -> f64 {
        crate::geometry::angle_of(self.velocity)
    }

    /// Distance to another body.
    pub fn range_to(&self, other: &KinematicState) -> f64 {
        self.position.distance(other.position)
    }
}

impl BodyStart {
    pub fn new(x: f64, y: f64, vx: f64, vy: f64) -> Self {
        Self { x, y, vx, vy }
    }

    pub fn position(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }

    pub fn speed(&self) -> f64 {
        self.vx.hypot(self.vy)
    }
}

impl From<[f64; 4]> for BodyStart {
    fn from([x, y, vx, vy]: [f64; 4]) -> Self {
        Self { x, y, vx, vy }
    }
}

impl From<BodyStart> for KinematicState {
    fn from(start: BodyStart) -> Self {
        KinematicState::new(start.x, start.y, start.vx, start.vy)
    }
}

impl SimTime {
    /// Advance by one tick of length `dt`.
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
