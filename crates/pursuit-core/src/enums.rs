//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::error::SimError;

/// Guidance law selectable for the pursuer.
///
/// Selection is by value; the numeric key is what an input layer binds to
/// number keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuidanceLaw {
    /// Heading chase toward the current bearing, no lead.
    #[default]
    PurePursuit,
    /// True proportional navigation on the LOS rate.
    TrueProportional,
    /// TPN plus a target-acceleration correction.
    AugmentedProportional,
    /// Steers to null the predicted zero-effort miss.
    ZeroEffortMiss,
    /// ZEM with a constant-target-acceleration prediction.
    ZeroEffortMissAugmented,
    /// Alternate ZEM derivation in the pursuer's body frame.
    /// Known to be unreliable; kept for comparison.
    RotatedFrameZem,
}

impl GuidanceLaw {
    /// All laws in key order.
    pub const ALL: [GuidanceLaw; 6] = [
        GuidanceLaw::PurePursuit,
        GuidanceLaw::TrueProportional,
        GuidanceLaw::AugmentedProportional,
        GuidanceLaw::ZeroEffortMiss,
        GuidanceLaw::ZeroEffortMissAugmented,
        GuidanceLaw::RotatedFrameZem,
    ];

    /// Selection key (1-based).
    pub fn key(self) -> u8 {
        match self {
            GuidanceLaw::PurePursuit => 1,
            GuidanceLaw::TrueProportional => 2,
            GuidanceLaw::AugmentedProportional => 3,
            GuidanceLaw::ZeroEffortMiss => 4,
            GuidanceLaw::ZeroEffortMissAugmented => 5,
            GuidanceLaw::RotatedFrameZem => 6,
        }
    }

    pub fn from_key(key: u8) -> Option<GuidanceLaw> {
        GuidanceLaw::ALL.into_iter().find(|law| law.key() == key)
    }

    /// Short display name for HUDs and reports.
    pub fn name(self) -> &'static str {
        match self {
            GuidanceLaw::PurePursuit => "PP",
            GuidanceLaw::TrueProportional => "TPN",
            GuidanceLaw::AugmentedProportional => "APN",
            GuidanceLaw::ZeroEffortMiss => "ZEMPN",
            GuidanceLaw::ZeroEffortMissAugmented => "ZEMAPN",
            GuidanceLaw::RotatedFrameZem => "myZEM",
        }
    }

    /// Whether the law reads the target's (filtered) acceleration.
    pub fn uses_target_acceleration(self) -> bool {
        matches!(
            self,
            GuidanceLaw::AugmentedProportional | GuidanceLaw::ZeroEffortMissAugmented
        )
    }
}

impl TryFrom<u8> for GuidanceLaw {
    type Error = SimError;

    fn try_from(key: u8) -> Result<Self, Self::Error> {
        GuidanceLaw::from_key(key).ok_or(SimError::UnknownLaw(key))
    }
}

/// Evader steering input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LateralInput {
    Left,
    Right,
    #[default]
    None,
}

/// Evader throttle input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LongitudinalInput {
    Accelerate,
    Decelerate,
    #[default]
    None,
}

/// Engagement controller state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EngagementPhase {
    /// Bodies placed, clock not running yet.
    #[default]
    Idle,
    Running,
    Paused,
    /// Terminal; only a reset leaves this state.
    GameOver,
}

/// How a finished engagement ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The pursuer closed within the interception radius (loss for the evader).
    Intercepted,
    /// The evader reached the safe zone (win).
    Escaped,
}
