//! Commands sent from an input layer or script to the engine.
//!
//! Each variant mirrors one of the engine's direct methods.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// All possible operator actions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineCommand {
    // --- Law selection ---
    /// Select a guidance law by key and restart the engagement.
    SelectLaw { key: u8 },
    /// Select a guidance law by value and restart the engagement.
    SetLaw { law: GuidanceLaw },

    // --- Run control ---
    /// Start when idle/paused, pause when running.
    StartPauseToggle,
    Start,
    Pause,
    /// Rebuild both bodies from initial conditions and run.
    Reset,

    // --- Evader control ---
    /// Set the evader's steering for the next ticks.
    Control {
        #[serde(default)]
        lateral: LateralInput,
        #[serde(default)]
        longitudinal: LongitudinalInput,
    },
}

/// A command scheduled at a tick, as read from a control script.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledCommand {
    pub tick: u64,
    pub command: EngineCommand,
}
