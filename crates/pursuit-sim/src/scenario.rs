//! Scenario definitions: named starting geometries and seeded random ones.
//!
//! A scenario only rewrites the initial conditions of a config; every
//! other tunable is left as given.

use std::f64::consts::TAU;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use pursuit_core::config::SimConfig;
use pursuit_core::types::BodyStart;

/// Evader start range from the pursuer in randomized scenarios.
const RANDOM_RANGE_MIN: f64 = 300.0;
const RANDOM_RANGE_MAX: f64 = 600.0;

/// Hand-picked starting geometries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    /// Evader up and to the right flying west, pursuer at the origin flying east.
    #[default]
    Original,
    /// Evader on the +x axis flying straight at the pursuer.
    HeadOn,
    /// Evader crossing the pursuer's nose from left to right.
    Crossing,
    /// Evader ahead of the pursuer flying the same direction.
    TailChase,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::Original,
        Scenario::HeadOn,
        Scenario::Crossing,
        Scenario::TailChase,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::Original => "original",
            Scenario::HeadOn => "head-on",
            Scenario::Crossing => "crossing",
            Scenario::TailChase => "tail-chase",
        }
    }

    /// Look a scenario up by its [`name`](Self::name).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.name() == name)
    }

    /// Evader and pursuer starts.
    pub fn starts(self) -> (BodyStart, BodyStart) {
        let pursuer = BodyStart::new(0.0, 0.0, 100.0, 0.0);
        let evader = match self {
            Scenario::Original => BodyStart::new(400.0, 400.0, -50.0, 0.0),
            Scenario::HeadOn => BodyStart::new(600.0, 0.0, -50.0, 0.0),
            Scenario::Crossing => BodyStart::new(300.0, 400.0, 0.0, -50.0),
            Scenario::TailChase => BodyStart::new(200.0, 0.0, 50.0, 0.0),
        };
        (evader, pursuer)
    }

    /// `base` with this scenario's initial conditions.
    pub fn apply(self, base: &SimConfig) -> SimConfig {
        let (evader_start, pursuer_start) = self.starts();
        SimConfig {
            evader_start,
            pursuer_start,
            ..base.clone()
        }
    }
}

/// `base` with randomized initial conditions drawn from `seed`.
///
/// The evader starts 300-600 units from the pursuer at a random bearing
/// and heading, keeping the base evader speed. The pursuer keeps its base
/// position and speed but gets a random heading. Same seed, same config.
pub fn randomized(base: &SimConfig, seed: u64) -> SimConfig {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    let range = rng.gen_range(RANDOM_RANGE_MIN..RANDOM_RANGE_MAX);
    let bearing = rng.gen_range(0.0..TAU);
    let evader_heading = rng.gen_range(0.0..TAU);
    let pursuer_heading = rng.gen_range(0.0..TAU);

    let origin = base.pursuer_start;
    let evader_speed = base.evader_start.speed();
    let pursuer_speed = origin.speed();

    let evader_start = BodyStart::new(
        origin.x + range * bearing.cos(),
        origin.y + range * bearing.sin(),
        evader_speed * evader_heading.cos(),
        evader_speed * evader_heading.sin(),
    );
    let pursuer_start = BodyStart::new(
        origin.x,
        origin.y,
        pursuer_speed * pursuer_heading.cos(),
        pursuer_speed * pursuer_heading.sin(),
    );

    SimConfig {
        evader_start,
        pursuer_start,
        ..base.clone()
    }
}
