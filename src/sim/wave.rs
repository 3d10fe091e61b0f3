//! Wave director
//!
//! Each wave spawns a fixed number of zombies on a timer; once they are all
//! spawned and dead the next, larger wave begins.

use glam::Vec2;
use rand::Rng;

use super::state::{Enemy, EnemyKind, GameEvent, GameState};
use crate::tuning::Tuning;

/// Spawn bookkeeping for the current wave
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaveState {
    /// Current wave number (1-based)
    pub wave: u32,
    pub zombies_per_wave: u32,
    pub zombies_spawned: u32,
    /// Ticks since the last spawn
    pub spawn_timer: u32,
}

/// Result of checking wave completion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaveProgress {
    /// Zombies remain to spawn or to kill
    InProgress,
    /// Wave cleared, the next one has begun
    Advanced { wave: u32 },
    /// The configured final wave was cleared
    CapReached,
}

impl WaveState {
    pub fn new(tuning: &Tuning) -> Self {
        Self {
            wave: 1,
            zombies_per_wave: tuning.base_zombies_per_wave,
            zombies_spawned: 0,
            spawn_timer: 0,
        }
    }

    pub fn spawns_remaining(&self) -> bool {
        self.zombies_spawned < self.zombies_per_wave
    }

    /// All zombies spawned and none left alive
    pub fn is_cleared(&self, alive: usize) -> bool {
        alive == 0 && self.zombies_spawned >= self.zombies_per_wave
    }

    /// Move to the next wave and resize it
    pub fn advance(&mut self, tuning: &Tuning) {
        self.wave += 1;
        self.zombies_per_wave = wave_size(self.wave, self.zombies_per_wave, tuning);
        self.zombies_spawned = 0;
        self.spawn_timer = 0;
    }
}

/// Zombie max HP for a wave: flat base on wave 1, then compounding growth
pub fn hp_for_wave(wave: u32, tuning: &Tuning) -> i32 {
    if wave <= 1 {
        return tuning.zombie_base_hp;
    }
    let hp = tuning.zombie_base_hp as f64 * tuning.zombie_hp_growth.powi(wave as i32 - 1);
    hp.floor() as i32
}

/// Zombie count for `wave` given the previous wave's count
pub fn wave_size(wave: u32, previous: u32, tuning: &Tuning) -> u32 {
    if wave <= 2 {
        previous + tuning.wave_two_increment
    } else {
        (previous as f64 * tuning.wave_growth).floor() as u32
    }
}

/// Random point just beyond one of the four screen edges
pub fn spawn_point<R: Rng + ?Sized>(rng: &mut R, tuning: &Tuning) -> Vec2 {
    let (w, h, margin) = (tuning.arena_width, tuning.arena_height, tuning.spawn_margin);
    match rng.random_range(0..4u8) {
        0 => Vec2::new(rng.random_range(0.0..=w), -margin),
        1 => Vec2::new(w + margin, rng.random_range(0.0..=h)),
        2 => Vec2::new(rng.random_range(0.0..=w), h + margin),
        _ => Vec2::new(-margin, rng.random_range(0.0..=h)),
    }
}

/// Early waves are all walkers; later ones mix in runners and shamblers
pub fn pick_kind<R: Rng + ?Sized>(rng: &mut R, wave: u32) -> EnemyKind {
    if wave <= 2 {
        return EnemyKind::Walker;
    }
    let special_chance = (0.05 * (wave - 2) as f64).min(0.4);
    if !rng.random_bool(special_chance) {
        return EnemyKind::Walker;
    }
    if rng.random_bool(0.5) {
        EnemyKind::Runner
    } else {
        EnemyKind::Shambler
    }
}

/// Advance the spawn timer and spawn one zombie when it is due.
/// Returns the new zombie's id.
pub fn update_spawner(state: &mut GameState, tuning: &Tuning) -> Option<u32> {
    state.wave.spawn_timer += 1;
    if state.wave.spawn_timer < tuning.spawn_delay || !state.wave.spawns_remaining() {
        return None;
    }
    Some(spawn_zombie(state, tuning))
}

/// Spawn one zombie for the current wave at a random edge
pub fn spawn_zombie(state: &mut GameState, tuning: &Tuning) -> u32 {
    let wave = state.wave.wave;
    let pos = spawn_point(state.rng(), tuning);
    let kind = pick_kind(state.rng(), wave);
    let id = state.next_entity_id();

    state.enemies.push(Enemy::new(id, pos, hp_for_wave(wave, tuning), kind, tuning));
    state.wave.zombies_spawned += 1;
    state.wave.spawn_timer = 0;
    state.events.push(GameEvent::ZombieSpawned { id, kind });
    log::debug!("Wave {wave}: spawned {kind:?} #{id} at ({:.0}, {:.0})", pos.x, pos.y);
    id
}

/// Check for a cleared wave and start the next one (or finish the run)
pub fn check_wave_complete(state: &mut GameState, tuning: &Tuning) -> WaveProgress {
    if !state.wave.is_cleared(state.enemies.len()) {
        return WaveProgress::InProgress;
    }

    let cleared = state.wave.wave;
    state.events.push(GameEvent::WaveCleared { wave: cleared });

    if tuning.wave_cap.is_some_and(|cap| cleared >= cap) {
        log::info!("Final wave {cleared} cleared");
        return WaveProgress::CapReached;
    }

    state.wave.advance(tuning);
    log::info!(
        "Wave {cleared} cleared, wave {} brings {} zombies ({} hp)",
        state.wave.wave,
        state.wave.zombies_per_wave,
        hp_for_wave(state.wave.wave, tuning)
    );
    WaveProgress::Advanced { wave: state.wave.wave }
}
