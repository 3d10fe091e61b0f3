//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (speeds and timers are per tick)
//! - Seeded RNG only
//! - Stable iteration order (insertion order of every entity list)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod combat;
pub mod state;
pub mod tick;
pub mod wave;

pub use collision::{Aabb, clamp_to_arena, point_in_arena};
pub use combat::{CombatReport, fire, resolve};
pub use state::{Actor, Enemy, EnemyKind, GameEvent, GamePhase, GameState, Projectile};
pub use tick::{Action, Directions, TickInput, TickOutcome, tick};
pub use wave::{WaveProgress, WaveState, hp_for_wave, wave_size};
