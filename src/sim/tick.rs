//! Fixed timestep simulation tick
//!
//! Advances one Playing tick: input, movement, projectiles, spawns, seeking,
//! combat, and wave progression, always in that order.

use glam::Vec2;

use super::autopilot;
use super::combat;
use super::state::{GameEvent, GameState};
use super::wave::{self, WaveProgress};
use crate::shop::Economy;
use crate::tuning::Tuning;

/// Logical movement directions currently held
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Directions {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// One-shot actions delivered with a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Shoot toward the pointer
    Fire,
    /// Start / accept
    Confirm,
    /// Back out / quit
    Cancel,
    /// Select the n-th owned character (1-9)
    QuickSelect(u8),
    OpenShop,
    /// Pointer press, hit-tested against the active screen
    Click,
}

/// Input commands for a single tick (deterministic)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub held: Directions,
    /// Pointer position in arena coordinates
    pub pointer: Vec2,
    pub actions: Vec<Action>,
    /// Idle/demo mode - autopilot plays the game
    pub idle_mode: bool,
}

impl TickInput {
    pub fn with_action(action: Action) -> Self {
        Self {
            actions: vec![action],
            ..Default::default()
        }
    }

    pub fn has(&self, action: Action) -> bool {
        self.actions.contains(&action)
    }
}

/// How a Playing tick ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    WaveCleared { next_wave: u32 },
    /// A zombie touched the actor
    Defeated,
    /// The final wave of a capped run was cleared
    Victory,
}

/// Advance the run by one fixed tick
pub fn tick(
    state: &mut GameState,
    economy: &mut Economy,
    input: &TickInput,
    tuning: &Tuning,
) -> TickOutcome {
    let input = if input.idle_mode {
        autopilot::drive(state, tuning)
    } else {
        input.clone()
    };

    state.time_ticks += 1;

    // Fire uses the actor position at the moment the action arrived
    if input.has(Action::Fire) || input.has(Action::Click) {
        let character = state.actor.character.definition();
        combat::fire(state, input.pointer, character, tuning);
    }
    state.actor.tick_cooldown();
    state.actor.apply_movement(input.held, tuning);

    for projectile in &mut state.projectiles {
        projectile.advance(tuning.arena_width, tuning.arena_height);
    }
    state.projectiles.retain(|p| p.active);

    wave::update_spawner(state, tuning);

    let target = state.actor.center();
    for enemy in &mut state.enemies {
        enemy.seek(target, tuning.zombie_speed);
    }

    let report = combat::resolve(state, tuning);
    economy.earn(report.bonds_awarded);
    if report.actor_struck {
        log::info!(
            "Struck on wave {} after {} ticks ({} bonds this run)",
            state.wave.wave,
            state.time_ticks,
            economy.match_bonds
        );
        return TickOutcome::Defeated;
    }

    match wave::check_wave_complete(state, tuning) {
        WaveProgress::InProgress => TickOutcome::Continue,
        WaveProgress::Advanced { wave } => TickOutcome::WaveCleared { next_wave: wave },
        WaveProgress::CapReached => {
            state.events.push(GameEvent::Victory);
            TickOutcome::Victory
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::CharacterId;
    use crate::sim::state::{Enemy, EnemyKind, Projectile};

    fn setup() -> (GameState, Economy, Tuning) {
        let t = Tuning::default();
        (GameState::new(12345, CharacterId::Torcher, &t), Economy::new(0), t)
    }

    #[test]
    fn test_tick_moves_actor() {
        let (mut state, mut economy, t) = setup();
        let start = state.actor.pos;
        let input = TickInput {
            held: Directions { right: true, ..Default::default() },
            ..Default::default()
        };
        assert_eq!(tick(&mut state, &mut economy, &input, &t), TickOutcome::Continue);
        assert_eq!(state.actor.pos, start + Vec2::new(1.5, 0.0));
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_fire_then_cooldown_counts_down() {
        let (mut state, mut economy, t) = setup();
        let input = TickInput {
            pointer: Vec2::new(1000.0, 544.0),
            actions: vec![Action::Fire],
            ..Default::default()
        };
        tick(&mut state, &mut economy, &input, &t);
        assert_eq!(state.projectiles.len(), 1);
        assert_eq!(state.actor.cooldown, t.attack_cooldown - 1);
        assert!(state.events.contains(&GameEvent::Fired { projectiles: 1 }));
    }

    #[test]
    fn test_first_spawn_after_delay() {
        let (mut state, mut economy, t) = setup();
        for _ in 0..t.spawn_delay - 1 {
            tick(&mut state, &mut economy, &TickInput::default(), &t);
        }
        assert!(state.enemies.is_empty());
        tick(&mut state, &mut economy, &TickInput::default(), &t);
        assert_eq!(state.enemies.len(), 1);
    }

    #[test]
    fn test_exiting_projectile_removed_without_hit() {
        let (mut state, mut economy, t) = setup();
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(id, Vec2::new(-40.0, 300.0), 35, EnemyKind::Walker, &t));
        let id = state.next_entity_id();
        state
            .projectiles
            .push(Projectile::new(id, Vec2::new(2.0, 320.0), Vec2::new(-8.0, 0.0), 10));

        assert_eq!(
            tick(&mut state, &mut economy, &TickInput::default(), &t),
            TickOutcome::Continue
        );
        assert!(state.projectiles.is_empty());
        assert_eq!(state.enemies[0].hp, 35);
        assert_eq!(economy.match_bonds, 0);
    }

    #[test]
    fn test_contact_defeats() {
        let (mut state, mut economy, t) = setup();
        let pos = state.actor.pos + Vec2::new(10.0, 10.0);
        let id = state.next_entity_id();
        state.enemies.push(Enemy::new(id, pos, 35, EnemyKind::Walker, &t));
        assert_eq!(
            tick(&mut state, &mut economy, &TickInput::default(), &t),
            TickOutcome::Defeated
        );
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let t = Tuning { spawn_delay: 10, ..Tuning::default() };
        let mut state1 = GameState::new(99999, CharacterId::Torcher, &t);
        let mut state2 = GameState::new(99999, CharacterId::Torcher, &t);
        let (mut e1, mut e2) = (Economy::new(0), Economy::new(0));

        let input = TickInput { idle_mode: true, ..Default::default() };
        for _ in 0..300 {
            tick(&mut state1, &mut e1, &input, &t);
            tick(&mut state2, &mut e2, &input, &t);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.enemies.len(), state2.enemies.len());
        assert_eq!(state1.actor.pos, state2.actor.pos);
        assert_eq!(e1.match_bonds, e2.match_bonds);
        for (a, b) in state1.enemies.iter().zip(&state2.enemies) {
            assert_eq!(a.pos, b.pos);
            assert_eq!(a.hp, b.hp);
        }
    }
}
