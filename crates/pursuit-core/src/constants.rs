//! Simulation constants and tuning defaults.
//!
//! These only seed `SimConfig::default()`; the engine never reads them directly.

/// Threshold below which lengths and speeds are treated as zero.
pub const EPS: f64 = 1e-6;

/// Navigation constant for the guidance laws (dimensionless, typically 3-5).
pub const NAV_GAIN: f64 = 3.0;

/// Speed lost per unit of commanded lateral acceleration per second.
/// Real missiles bleed roughly 1-5%.
pub const AIR_DRAG: f64 = 0.07;

// --- Evader handling ---

/// Lateral acceleration applied at full evader speed when turning.
pub const ACCEL_LATERAL: f64 = 100.0;

/// Longitudinal acceleration magnitude for throttle input.
pub const ACCEL_LONGITUDINAL: f64 = 10.0;

/// Evader top speed.
pub const EVADER_MAX_SPEED: f64 = 50.0;

/// Evader stall floor; deceleration never drops below this.
pub const EVADER_MIN_SPEED: f64 = 1.0;

// --- Loop ---

/// Nominal frame rate of the embedding loop (Hz).
pub const FRAME_RATE: f64 = 120.0;

/// Maximum number of positions kept per trail.
pub const TRAJECTORY_CAPACITY: usize = 1000;

// --- Terminal conditions ---

/// Separation at which the pursuer is considered to have hit the evader.
pub const INTERCEPTION_RADIUS: f64 = 2.0;

/// Radius of the protected zone around the origin.
pub const SAFE_ZONE_RADIUS: f64 = 5.0;

// --- Guidance tuning ---

/// Smoothing factor of the target-acceleration filter.
pub const FILTER_ALPHA: f64 = 0.3;

/// Pursuer speed at which APN's acceleration term reaches full weight.
pub const APN_SPEED_THRESHOLD: f64 = 50.0;

/// Upper clamp on time-to-go for the rotated-frame ZEM law (seconds).
pub const TGO_CLAMP_MAX: f64 = 999_999.0;

// --- Initial conditions: x, y, vx, vy ---

pub const EVADER_START: [f64; 4] = [400.0, 400.0, -50.0, 0.0];

pub const PURSUER_START: [f64; 4] = [0.0, 0.0, 100.0, 0.0];
