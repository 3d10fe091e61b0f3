//! Game state and core simulation types
//!
//! Everything a run mutates lives in `GameState`. Entities are kept in
//! insertion order so every scan over them is deterministic.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::{Aabb, clamp_to_arena, point_in_arena};
use super::tick::Directions;
use super::wave::WaveState;
use crate::catalog::CharacterId;
use crate::tuning::Tuning;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Title screen
    Menu,
    /// Active run
    Playing,
    /// Character shop
    Shop,
    /// Actor was struck
    GameOver,
    /// Wave cap cleared (only when a cap is configured)
    Victory,
}

/// Something noteworthy that happened during a tick (drives audio/UI)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Fired { projectiles: u32 },
    ZombieSpawned { id: u32, kind: EnemyKind },
    ZombieHit { id: u32 },
    ZombieKilled { id: u32 },
    WaveCleared { wave: u32 },
    PlayerStruck,
    Victory,
}

/// The player-controlled character
#[derive(Debug, Clone)]
pub struct Actor {
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub character: CharacterId,
    /// Ticks until the next shot is allowed
    pub cooldown: u32,
}

impl Actor {
    /// Spawn at the middle of the arena
    pub fn new(character: CharacterId, tuning: &Tuning) -> Self {
        Self {
            pos: Vec2::new(tuning.arena_width / 2.0, tuning.arena_height / 2.0),
            size: tuning.player_size,
            character,
            cooldown: 0,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    pub fn ready_to_fire(&self) -> bool {
        self.cooldown == 0
    }

    pub fn tick_cooldown(&mut self) {
        self.cooldown = self.cooldown.saturating_sub(1);
    }

    /// Apply held directions at a fixed per-tick speed, then clamp to the arena
    pub fn apply_movement(&mut self, held: Directions, tuning: &Tuning) {
        let speed = tuning.player_speed;
        if held.up {
            self.pos.y -= speed;
        }
        if held.down {
            self.pos.y += speed;
        }
        if held.left {
            self.pos.x -= speed;
        }
        if held.right {
            self.pos.x += speed;
        }
        self.pos = clamp_to_arena(self.pos, self.size, tuning.arena_width, tuning.arena_height);
    }
}

/// Zombie variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnemyKind {
    Walker,
    Runner,
    Shambler,
}

impl EnemyKind {
    pub fn speed_multiplier(self) -> f32 {
        match self {
            EnemyKind::Walker => 1.0,
            EnemyKind::Runner => 1.6,
            EnemyKind::Shambler => 0.6,
        }
    }
}

/// A zombie
#[derive(Debug, Clone)]
pub struct Enemy {
    pub id: u32,
    /// Top-left corner
    pub pos: Vec2,
    pub size: f32,
    pub hp: i32,
    pub max_hp: i32,
    pub speed_multiplier: f32,
    pub kind: EnemyKind,
}

impl Enemy {
    pub fn new(id: u32, pos: Vec2, max_hp: i32, kind: EnemyKind, tuning: &Tuning) -> Self {
        Self {
            id,
            pos,
            size: tuning.zombie_size,
            hp: max_hp,
            max_hp,
            speed_multiplier: kind.speed_multiplier(),
            kind,
        }
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::square(self.pos, self.size)
    }

    pub fn center(&self) -> Vec2 {
        self.bounds().center()
    }

    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Remaining health in `[0, 1]` for health bars
    pub fn hp_fraction(&self) -> f32 {
        if self.max_hp <= 0 {
            return 0.0;
        }
        (self.hp as f32 / self.max_hp as f32).clamp(0.0, 1.0)
    }

    pub fn take_damage(&mut self, damage: i32) {
        self.hp -= damage;
    }

    /// Walk straight toward `target`; standing on it is a no-op
    pub fn seek(&mut self, target: Vec2, base_speed: f32) {
        if let Some(dir) = crate::direction_between(self.pos, target) {
            self.pos += dir * base_speed * self.speed_multiplier;
        }
    }
}

/// A shot in flight
#[derive(Debug, Clone)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub damage: i32,
    pub active: bool,
    /// Travel left before a melee swing fizzles
    pub range_left: Option<f32>,
    /// Splash radius for area-of-effect impacts
    pub splash_radius: Option<f32>,
}

impl Projectile {
    pub fn new(id: u32, pos: Vec2, vel: Vec2, damage: i32) -> Self {
        Self {
            id,
            pos,
            vel,
            damage,
            active: true,
            range_left: None,
            splash_radius: None,
        }
    }

    /// Move one tick; deactivates on leaving the arena or running out of range
    pub fn advance(&mut self, width: f32, height: f32) {
        if !self.active {
            return;
        }
        self.pos += self.vel;
        if !point_in_arena(self.pos, width, height) {
            self.active = false;
            return;
        }
        if let Some(range) = self.range_left.as_mut() {
            *range -= self.vel.length();
            if *range < 0.0 {
                self.active = false;
            }
        }
    }
}

/// Complete state of one run (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    rng: Pcg32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub actor: Actor,
    /// Alive zombies in spawn order
    pub enemies: Vec<Enemy>,
    /// Active projectiles in fire order
    pub projectiles: Vec<Projectile>,
    pub wave: WaveState,
    /// Events produced since the last drain
    pub events: Vec<GameEvent>,
    next_id: u32,
}

impl GameState {
    /// Create a fresh run with the given seed and character
    pub fn new(seed: u64, character: CharacterId, tuning: &Tuning) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            time_ticks: 0,
            actor: Actor::new(character, tuning),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            wave: WaveState::new(tuning),
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    pub fn rng(&mut self) -> &mut Pcg32 {
        &mut self.rng
    }

    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}
