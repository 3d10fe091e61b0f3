//! Data-driven game balance
//!
//! Loaded once at process start and passed by reference into the session.
//! Every value is expressed in ticks or pixels per tick.

use std::io::ErrorKind;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A loaded value that would break the simulation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TuningError {
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: f64 },
    #[error("inventory_cap must allow at least one character")]
    EmptyInventory,
}

/// Game balance values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    // === Arena ===
    pub arena_width: f32,
    pub arena_height: f32,

    // === Actor ===
    pub player_size: f32,
    /// Pixels per tick per held direction
    pub player_speed: f32,
    /// Ticks between shots
    pub attack_cooldown: u32,
    pub projectile_speed: f32,
    /// Lateral distance between the outermost projectiles of a multi-shot
    pub projectile_spread: f32,

    // === Enemies ===
    pub zombie_size: f32,
    pub zombie_speed: f32,
    pub zombie_base_hp: i32,
    pub zombie_hp_growth: f64,
    /// How far beyond the screen edge zombies appear
    pub spawn_margin: f32,

    // === Waves ===
    pub base_zombies_per_wave: u32,
    pub wave_two_increment: u32,
    pub wave_growth: f64,
    /// Ticks between spawns
    pub spawn_delay: u32,
    /// Clearing this wave wins the run; `None` plays forever
    pub wave_cap: Option<u32>,

    // === Economy ===
    pub bonds_per_kill: u64,
    pub inventory_cap: usize,
    pub offer_slots: usize,
    /// Ticks between shop restocks
    pub restock_interval: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            arena_width: 1024.0,
            arena_height: 768.0,

            player_size: 64.0,
            player_speed: 1.5,
            attack_cooldown: 60,
            projectile_speed: 8.0,
            projectile_spread: 16.0,

            zombie_size: 48.0,
            zombie_speed: 0.8,
            zombie_base_hp: 35,
            zombie_hp_growth: 1.25,
            spawn_margin: 50.0,

            base_zombies_per_wave: 5,
            wave_two_increment: 2,
            wave_growth: 1.3,
            spawn_delay: 120,
            wave_cap: None,

            bonds_per_kill: 10,
            inventory_cap: 3,
            offer_slots: 2,
            restock_interval: 60 * 60,
        }
    }
}

impl Tuning {
    /// The capped variant: clearing wave 10 ends the run in victory
    pub fn with_wave_cap(mut self, cap: u32) -> Self {
        self.wave_cap = Some(cap.max(1));
        self
    }

    /// Load tuning from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No tuning file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read tuning file {}: {e}", path.display());
                return Self::default();
            }
        };

        let tuning: Self = match serde_json::from_str(&json) {
            Ok(tuning) => tuning,
            Err(e) => {
                log::warn!("Ignoring malformed tuning file {}: {e}", path.display());
                return Self::default();
            }
        };

        match tuning.validate() {
            Ok(()) => {
                log::info!("Loaded tuning from {}", path.display());
                tuning
            }
            Err(e) => {
                log::warn!("Ignoring tuning file {}: {e}", path.display());
                Self::default()
            }
        }
    }

    /// Reject values that would panic the spawner or produce dead-on-arrival zombies
    pub fn validate(&self) -> Result<(), TuningError> {
        let positive = [
            ("arena_width", self.arena_width as f64),
            ("arena_height", self.arena_height as f64),
            ("player_size", self.player_size as f64),
            ("zombie_size", self.zombie_size as f64),
            ("zombie_base_hp", self.zombie_base_hp as f64),
            ("zombie_hp_growth", self.zombie_hp_growth),
            ("wave_growth", self.wave_growth),
        ];
        for (field, value) in positive {
            // NaN fails this too
            if !(value > 0.0) {
                return Err(TuningError::NotPositive { field, value });
            }
        }
        if self.inventory_cap == 0 {
            return Err(TuningError::EmptyInventory);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let tuning: Tuning = serde_json::from_str(r#"{ "wave_cap": 10 }"#).unwrap();
        assert_eq!(tuning.wave_cap, Some(10));
        assert_eq!(tuning.zombie_base_hp, 35);
        assert_eq!(tuning.spawn_delay, 120);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let tuning = Tuning::load("/definitely/not/here/tuning.json");
        assert_eq!(tuning, Tuning::default());
    }

    #[test]
    fn test_malformed_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert_eq!(Tuning::load(file.path()), Tuning::default());
    }

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(Tuning::default().validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_degenerate_values() {
        let t = Tuning { arena_width: -10.0, ..Tuning::default() };
        assert_eq!(
            t.validate(),
            Err(TuningError::NotPositive { field: "arena_width", value: -10.0 })
        );
        let t = Tuning { zombie_base_hp: 0, ..Tuning::default() };
        assert!(matches!(
            t.validate(),
            Err(TuningError::NotPositive { field: "zombie_base_hp", .. })
        ));
        let t = Tuning { inventory_cap: 0, ..Tuning::default() };
        assert_eq!(t.validate(), Err(TuningError::EmptyInventory));
    }

    #[test]
    fn test_invalid_file_uses_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "arena_height": -1.0, "zombie_base_hp": 0 }}"#).unwrap();
        assert_eq!(Tuning::load(file.path()), Tuning::default());
    }

    #[test]
    fn test_unreadable_path_uses_defaults() {
        // A directory exists but cannot be read as a file
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Tuning::load(dir.path()), Tuning::default());
    }

    #[test]
    fn test_wave_cap_is_at_least_one() {
        assert_eq!(Tuning::default().with_wave_cap(0).wave_cap, Some(1));
    }
}
