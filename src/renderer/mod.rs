//! Rendering contract
//!
//! The simulation exposes a read-only `RenderSnapshot` each tick; drawing it
//! is the job of a platform `Renderer`.

pub mod assets;
pub mod snapshot;

pub use assets::{Sprite, SpriteCache, SpriteData};
pub use snapshot::{ActorView, EnemyView, Hud, RenderSnapshot, ShopCard, ShopView};

use crate::sim::GamePhase;

/// A frame sink
pub trait Renderer {
    fn draw(&mut self, snapshot: &RenderSnapshot);
}

/// Renderer for headless runs: logs the HUD once per second of game time
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    frames: u64,
    last_phase: Option<GamePhase>,
}

impl HeadlessRenderer {
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for HeadlessRenderer {
    fn draw(&mut self, snapshot: &RenderSnapshot) {
        self.frames += 1;
        let phase_changed = self.last_phase != Some(snapshot.phase);
        self.last_phase = Some(snapshot.phase);

        if phase_changed || self.frames % crate::consts::TICK_RATE as u64 == 0 {
            let hud = &snapshot.hud;
            log::debug!(
                "[{:?}] wave {} | zombies {} | bonds {} (+{}) | cooldown {:.1}s",
                snapshot.phase,
                hud.wave,
                hud.zombies_alive,
                hud.permanent_bonds,
                hud.match_bonds,
                hud.cooldown_remaining as f32 * crate::consts::TICK_SECS
            );
        }
    }
}
