//! Wild Rails - A top-down zombie survival arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (entities, combat, waves, tick)
//! - `catalog`: Playable characters and rarity tiers
//! - `shop`: Bonds economy, restocks, buy/sell
//! - `session`: Menu/playing/shop/game-over state machine
//! - `persistence`: Save record load/save with default fallback
//! - `platform`: Keyboard/pointer folding into tick input
//! - `renderer`: Read-only render snapshot and asset placeholders
//! - `ui`: Pure hit-test layouts
//! - `tuning`: Data-driven game balance

pub mod audio;
pub mod catalog;
pub mod persistence;
pub mod platform;
pub mod renderer;
pub mod session;
pub mod shop;
pub mod sim;
pub mod tuning;
pub mod ui;

pub use catalog::{CharacterDefinition, CharacterId, Rarity, SpecialMode};
pub use session::Session;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation rate (ticks per second of wall time)
    pub const TICK_RATE: u32 = 60;
    /// Duration of one tick in seconds (for display only, never for gameplay)
    pub const TICK_SECS: f32 = 1.0 / TICK_RATE as f32;
}

/// Unit vector from `from` to `to`, or `None` when the points coincide
#[inline]
pub fn direction_between(from: Vec2, to: Vec2) -> Option<Vec2> {
    let delta = to - from;
    let len = delta.length();
    if len > 0.0 { Some(delta / len) } else { None }
}

/// Left-hand perpendicular of a vector
#[inline]
pub fn perpendicular(v: Vec2) -> Vec2 {
    Vec2::new(-v.y, v.x)
}
