//! Trail recording: appends each body's position to its bounded trail.

use hecs::World;

use pursuit_core::components::Trail;
use pursuit_core::types::KinematicState;

/// Record the current position of every body with a trail.
pub fn run(world: &mut World) {
    for (_entity, (state, trail)) in world.query_mut::<(&KinematicState, &mut Trail)>() {
        trail.positions.push_back(state.position);
        while trail.positions.len() > trail.capacity {
            trail.positions.pop_front();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::VecDeque;

    #[test]
    fn test_trail_drops_oldest_past_capacity() {
        let mut world = World::new();
        let body = world.spawn((
            KinematicState::new(0.0, 0.0, 0.0, 0.0),
            Trail {
                positions: VecDeque::new(),
                capacity: 3,
            },
        ));

        for i in 0..5 {
            world.get::<&mut KinematicState>(body).unwrap().position.x = i as f64;
            run(&mut world);
        }

        let trail = world.get::<&Trail>(body).unwrap();
        let xs: Vec<f64> = trail.positions.iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![2.0, 3.0, 4.0]);
    }
}
