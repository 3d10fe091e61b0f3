//! The persisted player record

use serde::{Deserialize, Serialize};

use super::PersistenceError;
use crate::catalog::CharacterId;

/// Progress carried between sessions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub permanent_currency: u64,
    /// Owned characters in purchase order
    pub owned_characters: Vec<CharacterId>,
    pub selected_character: CharacterId,
}

impl Default for SaveRecord {
    fn default() -> Self {
        Self {
            permanent_currency: 0,
            owned_characters: vec![CharacterId::STARTING],
            selected_character: CharacterId::STARTING,
        }
    }
}

impl SaveRecord {
    pub fn from_json(json: &str) -> Result<Self, PersistenceError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, PersistenceError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Check the invariants the shop relies on
    pub fn validate(&self, inventory_cap: usize) -> Result<(), PersistenceError> {
        if self.owned_characters.is_empty() {
            return Err(PersistenceError::Invalid("no owned characters".into()));
        }
        if self.owned_characters.len() > inventory_cap {
            return Err(PersistenceError::Invalid(format!(
                "{} characters owned, cap is {inventory_cap}",
                self.owned_characters.len()
            )));
        }
        if !self.owned_characters.contains(&self.selected_character) {
            return Err(PersistenceError::Invalid(format!(
                "selected {:?} is not owned",
                self.selected_character
            )));
        }
        let mut seen = self.owned_characters.clone();
        seen.sort();
        seen.dedup();
        if seen.len() != self.owned_characters.len() {
            return Err(PersistenceError::Invalid("duplicate owned characters".into()));
        }
        Ok(())
    }
}
