//! Idle/demo mode player
//!
//! Aims at the closest zombie, fires whenever the cooldown allows, and backs
//! away from anything that gets too close.

use glam::Vec2;

use super::state::GameState;
use super::tick::{Action, Directions, TickInput};
use crate::tuning::Tuning;

/// Zombies nearer than this make the autopilot retreat
const DANGER_RADIUS: f32 = 220.0;
/// Dead zone so the actor does not jitter around its goal
const SETTLE_DISTANCE: f32 = 4.0;

/// Build the input the autopilot would give for this tick
pub fn drive(state: &GameState, tuning: &Tuning) -> TickInput {
    let center = state.actor.center();
    let nearest = state.enemies.iter().min_by(|a, b| {
        a.center()
            .distance_squared(center)
            .partial_cmp(&b.center().distance_squared(center))
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let arena_mid = Vec2::new(tuning.arena_width / 2.0, tuning.arena_height / 2.0);
    let goal = match nearest {
        // Step directly away from the threat
        Some(enemy) if enemy.center().distance(center) < DANGER_RADIUS => {
            center + (center - enemy.center()).normalize_or_zero() * DANGER_RADIUS
        }
        _ => arena_mid,
    };

    let mut input = TickInput {
        held: steer_toward(center, goal),
        pointer: nearest.map(|e| e.center()).unwrap_or(arena_mid),
        ..Default::default()
    };
    if nearest.is_some() && state.actor.ready_to_fire() {
        input.actions.push(Action::Fire);
    }
    input
}

fn steer_toward(from: Vec2, to: Vec2) -> Directions {
    let delta = to - from;
    Directions {
        up: delta.y < -SETTLE_DISTANCE,
        down: delta.y > SETTLE_DISTANCE,
        left: delta.x < -SETTLE_DISTANCE,
        right: delta.x > SETTLE_DISTANCE,
    }
}
