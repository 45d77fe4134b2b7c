//! Control system: turns evader input into a steering request.

use hecs::World;

use pursuit_core::components::{ControlInput, Evader, Steering};
use pursuit_core::config::SimConfig;
use pursuit_core::enums::{LateralInput, LongitudinalInput};

use crate::integrator::SpeedEnvelope;

/// Store `input` on every evader and derive its steering for this tick.
///
/// Turn authority scales with the fraction of top speed the evader is
/// flying at.
pub fn run(world: &mut World, input: ControlInput, config: &SimConfig) {
    for (_entity, (_evader, control, steering, envelope)) in
        world.query_mut::<(&Evader, &mut ControlInput, &mut Steering, &SpeedEnvelope)>()
    {
        *control = input;
        *steering = steering_for(input, envelope, config);
    }
}

/// Map operator input onto lateral and longitudinal acceleration.
pub fn steering_for(input: ControlInput, envelope: &SpeedEnvelope, config: &SimConfig) -> Steering {
    let max = envelope.max();
    let authority = if max > 0.0 {
        (envelope.cap() / max).abs()
    } else {
        0.0
    };

    let lateral = match input.lateral {
        LateralInput::Left => config.accel_lateral * authority,
        LateralInput::Right => -config.accel_lateral * authority,
        LateralInput::None => 0.0,
    };
    let longitudinal = match input.longitudinal {
        LongitudinalInput::Accelerate => config.accel_longitudinal / 2.0,
        LongitudinalInput::Decelerate => -config.accel_longitudinal,
        LongitudinalInput::None => 0.0,
    };

    Steering {
        lateral,
        longitudinal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn throttled(current: f64) -> SpeedEnvelope {
        SpeedEnvelope::Throttled {
            current,
            min: 1.0,
            max: 50.0,
        }
    }

    #[test]
    fn test_left_is_positive_and_scaled_by_speed() {
        let config = SimConfig::default();
        let input = ControlInput {
            lateral: LateralInput::Left,
            longitudinal: LongitudinalInput::None,
        };
        let full = steering_for(input, &throttled(50.0), &config);
        assert_eq!(full.lateral, 100.0);

        let half = steering_for(input, &throttled(25.0), &config);
        assert_eq!(half.lateral, 50.0);
    }

    #[test]
    fn test_right_and_throttle_mapping() {
        let config = SimConfig::default();
        let s = steering_for(
            ControlInput {
                lateral: LateralInput::Right,
                longitudinal: LongitudinalInput::Accelerate,
            },
            &throttled(50.0),
            &config,
        );
        assert_eq!(s.lateral, -100.0);
        assert_eq!(s.longitudinal, 5.0);

        let s = steering_for(
            ControlInput {
                lateral: LateralInput::None,
                longitudinal: LongitudinalInput::Decelerate,
            },
            &throttled(50.0),
            &config,
        );
        assert_eq!(s.lateral, 0.0);
        assert_eq!(s.longitudinal, -10.0);
    }
}
