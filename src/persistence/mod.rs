//! Save/load persistence
//!
//! Features:
//! - Plain JSON save record (`{permanent_currency, owned_characters, selected_character}`)
//! - Atomic writes (tmp file → rename)
//! - Missing, corrupt, or inconsistent saves fall back to defaults

pub mod record;
pub mod store;

pub use record::SaveRecord;
pub use store::{JsonFileStore, MemoryStore, SaveStore};

use thiserror::Error;

/// Why a save could not be read or written
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("no save found")]
    Missing,
    #[error("save i/o failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("save is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("save is inconsistent: {0}")]
    Invalid(String),
}

/// Load and validate the save, or fall back to a fresh record.
///
/// There is no partial recovery: any problem yields the defaults.
pub fn load_or_default(store: &dyn SaveStore, inventory_cap: usize) -> SaveRecord {
    let loaded = store
        .load()
        .and_then(|record| record.validate(inventory_cap).map(|()| record));

    match loaded {
        Ok(record) => {
            log::info!(
                "Loaded save: {} bonds, {} characters",
                record.permanent_currency,
                record.owned_characters.len()
            );
            record
        }
        Err(PersistenceError::Missing) => {
            log::info!("No save found, starting fresh");
            SaveRecord::default()
        }
        Err(e) => {
            log::warn!("Discarding save ({e}), starting fresh");
            SaveRecord::default()
        }
    }
}

/// Write the save; failures are logged and the in-memory state stays authoritative
pub fn save_or_warn(store: &mut dyn SaveStore, record: &SaveRecord) -> bool {
    match store.save(record) {
        Ok(()) => {
            log::debug!("Saved ({} bonds)", record.permanent_currency);
            true
        }
        Err(e) => {
            log::warn!("Failed to save progress: {e}");
            false
        }
    }
}
