//! Exponential smoothing of the target's observed acceleration.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// First-order low-pass filter: `filtered ← alpha·raw + (1 − alpha)·filtered`.
///
/// Owned by a pursuer and rebuilt with it, so every engagement starts
/// from a zero estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccelerationFilter {
    alpha: f64,
    filtered: DVec2,
}

impl AccelerationFilter {
    /// `alpha` must lie in (0, 1]; smaller values smooth harder but lag more.
    pub fn new(alpha: f64) -> Self {
        debug_assert!(alpha > 0.0 && alpha <= 1.0, "alpha out of range: {alpha}");
        Self {
            alpha,
            filtered: DVec2::ZERO,
        }
    }

    /// Feed one raw sample and return the new estimate.
    pub fn update(&mut self, raw: DVec2) -> DVec2 {
        self.filtered = raw * self.alpha + self.filtered * (1.0 - self.alpha);
        self.filtered
    }

    /// Current estimate without feeding a sample.
    pub fn value(&self) -> DVec2 {
        self.filtered
    }

    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Drop the estimate back to zero.
    pub fn reset(&mut self) {
        self.filtered = DVec2::ZERO;
    }
}
