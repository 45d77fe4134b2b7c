//! Engine configuration.
//!
//! Every tunable the engine reads lives here; defaults come from
//! `constants`. Deserializes from partial JSON, missing fields take defaults.

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::GuidanceLaw;
use crate::error::SimError;
use crate::types::BodyStart;

/// Configuration for an engagement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    /// Zero threshold for lengths, speeds and denominators.
    pub eps: f64,
    /// Navigation gain N.
    pub nav_gain: f64,
    /// Pursuer speed bleed per unit lateral acceleration.
    pub drag_coeff: f64,
    /// Evader turn acceleration at full speed.
    pub accel_lateral: f64,
    /// Evader throttle acceleration.
    pub accel_longitudinal: f64,
    pub evader_max_speed: f64,
    pub evader_min_speed: f64,
    /// Frame rate the embedding loop aims for; reported back as a frame hint.
    pub frame_rate: f64,
    pub trajectory_capacity: usize,
    pub interception_radius: f64,
    pub safe_zone_radius: f64,
    /// Target-acceleration filter factor, in (0, 1].
    pub filter_alpha: f64,
    /// Pursuer speed at which APN's acceleration term reaches full weight.
    pub apn_speed_threshold: f64,
    pub evader_start: BodyStart,
    pub pursuer_start: BodyStart,
    /// Law active after construction.
    pub law: GuidanceLaw,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            eps: EPS,
            nav_gain: NAV_GAIN,
            drag_coeff: AIR_DRAG,
            accel_lateral: ACCEL_LATERAL,
            accel_longitudinal: ACCEL_LONGITUDINAL,
            evader_max_speed: EVADER_MAX_SPEED,
            evader_min_speed: EVADER_MIN_SPEED,
            frame_rate: FRAME_RATE,
            trajectory_capacity: TRAJECTORY_CAPACITY,
            interception_radius: INTERCEPTION_RADIUS,
            safe_zone_radius: SAFE_ZONE_RADIUS,
            filter_alpha: FILTER_ALPHA,
            apn_speed_threshold: APN_SPEED_THRESHOLD,
            evader_start: BodyStart::from(EVADER_START),
            pursuer_start: BodyStart::from(PURSUER_START),
            law: GuidanceLaw::default(),
        }
    }
}

impl SimConfig {
    /// Parse a config from JSON. Missing fields take defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Check every field for its legal range.
    pub fn validate(&self) -> Result<(), SimError> {
        fn positive(field: &'static str, value: f64) -> Result<(), SimError> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidConfig {
                    field,
                    reason: "must be finite and > 0",
                })
            }
        }
        fn non_negative(field: &'static str, value: f64) -> Result<(), SimError> {
            if value.is_finite() && value >= 0.0 {
                Ok(())
            } else {
                Err(SimError::InvalidConfig {
                    field,
                    reason: "must be finite and >= 0",
                })
            }
        }

        positive("eps", self.eps)?;
        non_negative("nav_gain", self.nav_gain)?;
        non_negative("drag_coeff", self.drag_coeff)?;
        non_negative("accel_lateral", self.accel_lateral)?;
        non_negative("accel_longitudinal", self.accel_longitudinal)?;
        positive("evader_max_speed", self.evader_max_speed)?;
        non_negative("evader_min_speed", self.evader_min_speed)?;
        positive("frame_rate", self.frame_rate)?;
        positive("interception_radius", self.interception_radius)?;
        positive("safe_zone_radius", self.safe_zone_radius)?;
        positive("apn_speed_threshold", self.apn_speed_threshold)?;

        if self.evader_min_speed > self.evader_max_speed {
            return Err(SimError::InvalidConfig {
                field: "evader_min_speed",
                reason: "must not exceed evader_max_speed",
            });
        }
        if self.trajectory_capacity == 0 {
            return Err(SimError::InvalidConfig {
                field: "trajectory_capacity",
                reason: "must be at least 1",
            });
        }
        if !(self.filter_alpha > 0.0 && self.filter_alpha <= 1.0) {
            return Err(SimError::InvalidConfig {
                field: "filter_alpha",
                reason: "must be in (0, 1]",
            });
        }
        for (field, start) in [
            ("evader_start", &self.evader_start),
            ("pursuer_start", &self.pursuer_start),
        ] {
            if ![start.x, start.y, start.vx, start.vy]
                .iter()
                .all(|v| v.is_finite())
            {
                return Err(SimError::InvalidConfig {
                    field,
                    reason: "must be finite",
                });
            }
        }
        Ok(())
    }

    /// Seconds between frames at the configured frame rate.
    pub fn frame_interval_secs(&self) -> f64 {
        1.0 / self.frame_rate
    }
}
