//! Fire-and-forget sound triggers
//!
//! The simulation never waits on audio. Sessions translate game events into
//! `SoundEffect`s and hand them to whatever `AudioSink` the platform provides.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Torch/gun fired
    Shoot,
    /// Projectile struck a zombie
    ZombieHit,
    /// Zombie destroyed
    ZombieDeath,
    /// Wave cleared
    WaveClear,
    /// Actor caught by a zombie
    GameOver,
    /// Capped run completed
    Victory,
    /// Character bought
    Purchase,
    /// Character sold
    Sale,
    /// Shop action refused
    Denied,
    /// Menu navigation / selection
    MenuSelect,
}

impl SoundEffect {
    /// Sound for a simulation event, if it has one (spawns are silent)
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Fired { .. } => Some(SoundEffect::Shoot),
            GameEvent::ZombieSpawned { .. } => None,
            GameEvent::ZombieHit { .. } => Some(SoundEffect::ZombieHit),
            GameEvent::ZombieKilled { .. } => Some(SoundEffect::ZombieDeath),
            GameEvent::WaveCleared { .. } => Some(SoundEffect::WaveClear),
            GameEvent::PlayerStruck => Some(SoundEffect::GameOver),
            GameEvent::Victory => Some(SoundEffect::Victory),
        }
    }
}

/// Platform audio backend
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
}

/// Discards every sound
#[derive(Debug, Clone, Copy, Default)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _effect: SoundEffect) {}
}

/// Logs sounds instead of playing them (headless builds)
#[derive(Debug, Clone, Default)]
pub struct LogAudio {
    muted: bool,
    played: u64,
}

impl LogAudio {
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Sounds triggered while unmuted
    pub fn played(&self) -> u64 {
        self.played
    }
}

impl AudioSink for LogAudio {
    fn play(&mut self, effect: SoundEffect) {
        if self.muted {
            return;
        }
        self.played += 1;
        log::trace!("sfx: {effect:?}");
    }
}
