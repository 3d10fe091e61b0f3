//! Playable character roster
//!
//! Static and immutable: definitions are looked up by `CharacterId` and never mutated.

use serde::{Deserialize, Serialize};

/// Character identifiers (persisted as snake_case strings)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CharacterId {
    Torcher,
    Gunslinger,
    Brawler,
    Dynamiter,
    Marshal,
}

impl CharacterId {
    /// Every character, in catalog order
    pub const ALL: [CharacterId; 5] = [
        CharacterId::Torcher,
        CharacterId::Gunslinger,
        CharacterId::Brawler,
        CharacterId::Dynamiter,
        CharacterId::Marshal,
    ];

    /// The character every new save owns
    pub const STARTING: CharacterId = CharacterId::Torcher;

    pub fn definition(self) -> &'static CharacterDefinition {
        // CHARACTERS is laid out in the same order as the enum
        &CHARACTERS[self as usize]
    }
}

/// Rarity tiers, ordered from most to least common
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Drop weight and display treatment for a rarity tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RarityInfo {
    pub label: &'static str,
    /// Relative shop drop chance
    pub drop_weight: f32,
    pub color: [u8; 3],
}

/// Rarity tier table, indexed by `Rarity`
pub const RARITY_TABLE: [RarityInfo; 5] = [
    RarityInfo { label: "Common", drop_weight: 50.0, color: [170, 170, 170] },
    RarityInfo { label: "Uncommon", drop_weight: 30.0, color: [30, 200, 60] },
    RarityInfo { label: "Rare", drop_weight: 15.0, color: [40, 110, 255] },
    RarityInfo { label: "Epic", drop_weight: 4.0, color: [170, 60, 230] },
    RarityInfo { label: "Legendary", drop_weight: 1.0, color: [255, 215, 0] },
];

impl Rarity {
    pub fn info(self) -> &'static RarityInfo {
        &RARITY_TABLE[self as usize]
    }

    pub fn drop_weight(self) -> f32 {
        self.info().drop_weight
    }

    pub fn color(self) -> [u8; 3] {
        self.info().color
    }
}

/// Special attack behavior honored by the combat resolver
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpecialMode {
    /// Plain ranged shot
    Standard,
    /// Short-lived shot that fizzles after `range` pixels of travel
    Melee { range: f32 },
    /// Impact also damages every other zombie within `radius` of the hit
    AreaOfEffect { radius: f32 },
}

/// Static stats for one playable character
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterDefinition {
    pub id: CharacterId,
    pub name: &'static str,
    /// Renderer asset key
    pub sprite: &'static str,
    pub damage: i32,
    pub projectile_count: u8,
    pub price: u64,
    pub rarity: Rarity,
    pub special: SpecialMode,
}

impl CharacterDefinition {
    /// Bonds returned when this character is sold
    pub fn sell_value(&self) -> u64 {
        self.price / 2
    }
}

static CHARACTERS: [CharacterDefinition; 5] = [
    CharacterDefinition {
        id: CharacterId::Torcher,
        name: "Torcher",
        sprite: "torcher.png",
        damage: 10,
        projectile_count: 1,
        price: 0,
        rarity: Rarity::Common,
        special: SpecialMode::Standard,
    },
    CharacterDefinition {
        id: CharacterId::Gunslinger,
        name: "Gunslinger",
        sprite: "gunslinger.png",
        damage: 8,
        projectile_count: 2,
        price: 150,
        rarity: Rarity::Uncommon,
        special: SpecialMode::Standard,
    },
    CharacterDefinition {
        id: CharacterId::Brawler,
        name: "Brawler",
        sprite: "brawler.png",
        damage: 25,
        projectile_count: 1,
        price: 300,
        rarity: Rarity::Rare,
        special: SpecialMode::Melee { range: 120.0 },
    },
    CharacterDefinition {
        id: CharacterId::Dynamiter,
        name: "Dynamiter",
        sprite: "dynamiter.png",
        damage: 15,
        projectile_count: 1,
        price: 500,
        rarity: Rarity::Epic,
        special: SpecialMode::AreaOfEffect { radius: 70.0 },
    },
    CharacterDefinition {
        id: CharacterId::Marshal,
        name: "Marshal",
        sprite: "marshal.png",
        damage: 20,
        projectile_count: 2,
        price: 1000,
        rarity: Rarity::Legendary,
        special: SpecialMode::Standard,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_order_matches_ids() {
        for id in CharacterId::ALL {
            assert_eq!(id.definition().id, id);
        }
    }

    #[test]
    fn test_starting_character_is_free() {
        assert_eq!(CharacterId::STARTING.definition().price, 0);
    }

    #[test]
    fn test_ids_serialize_as_snake_case() {
        let json = serde_json::to_string(&CharacterId::Gunslinger).unwrap();
        assert_eq!(json, "\"gunslinger\"");
        let id: CharacterId = serde_json::from_str("\"marshal\"").unwrap();
        assert_eq!(id, CharacterId::Marshal);
    }

    #[test]
    fn test_rarer_tiers_drop_less_often() {
        let weights: Vec<f32> = RARITY_TABLE.iter().map(|r| r.drop_weight).collect();
        assert!(weights.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn test_sell_value_is_half_price_rounded_down() {
        assert_eq!(CharacterId::Gunslinger.definition().sell_value(), 75);
        assert_eq!(CharacterId::Torcher.definition().sell_value(), 0);
    }
}
