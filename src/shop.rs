//! Bonds economy and the character shop
//!
//! Match bonds are earned per kill and folded into the permanent balance
//! exactly once per run. The permanent balance buys characters from a small,
//! periodically restocked set of offers.

use rand::Rng;
use rand::seq::IndexedRandom;
use thiserror::Error;

use crate::catalog::CharacterId;
use crate::persistence::SaveRecord;
use crate::tuning::Tuning;

/// Why a shop action was refused (shown to the player)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShopError {
    #[error("{name} costs {price} bonds, you have {balance}")]
    InsufficientFunds {
        name: &'static str,
        price: u64,
        balance: u64,
    },
    #[error("inventory full ({cap} characters), sell one first")]
    InventoryFull { cap: usize },
    #[error("{0} is not on offer")]
    NotOffered(&'static str),
    #[error("you do not own {0}")]
    NotOwned(&'static str),
    #[error("cannot sell your last character")]
    LastCharacter,
    #[error("cannot sell the selected character")]
    SellingSelected,
    #[error("no character in slot {0}")]
    EmptySlot(u8),
}

/// Match and permanent bond balances
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Economy {
    /// Earned during the current run
    pub match_bonds: u64,
    /// Persisted balance used for purchases
    pub permanent_bonds: u64,
    banked: bool,
}

impl Economy {
    pub fn new(permanent_bonds: u64) -> Self {
        Self {
            match_bonds: 0,
            permanent_bonds,
            banked: true,
        }
    }

    /// Reset the match balance for a new run
    pub fn start_match(&mut self) {
        self.match_bonds = 0;
        self.banked = false;
    }

    pub fn earn(&mut self, bonds: u64) {
        self.match_bonds += bonds;
    }

    /// Fold the match total into the permanent balance.
    /// Returns the amount added, or `None` if this run was already banked.
    pub fn bank(&mut self) -> Option<u64> {
        if self.banked {
            return None;
        }
        self.banked = true;
        self.permanent_bonds += self.match_bonds;
        Some(self.match_bonds)
    }
}

/// Owned characters, current selection, and the restocking offer list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShopState {
    owned: Vec<CharacterId>,
    selected: CharacterId,
    offers: Vec<CharacterId>,
    /// Ticks until the next restock
    restock_timer: u32,
}

impl ShopState {
    /// Build from a validated save record; offers start empty until restocked
    pub fn from_record(record: &SaveRecord, tuning: &Tuning) -> Self {
        Self {
            owned: record.owned_characters.clone(),
            selected: record.selected_character,
            offers: Vec::new(),
            restock_timer: tuning.restock_interval,
        }
    }

    /// Snapshot for persistence
    pub fn to_record(&self, economy: &Economy) -> SaveRecord {
        SaveRecord {
            permanent_currency: economy.permanent_bonds,
            owned_characters: self.owned.clone(),
            selected_character: self.selected,
        }
    }

    pub fn owned(&self) -> &[CharacterId] {
        &self.owned
    }

    pub fn selected(&self) -> CharacterId {
        self.selected
    }

    pub fn offers(&self) -> &[CharacterId] {
        &self.offers
    }

    pub fn restock_countdown(&self) -> u32 {
        self.restock_timer
    }

    pub fn owns(&self, id: CharacterId) -> bool {
        self.owned.contains(&id)
    }

    /// Count down to the next restock; returns true when one happened
    pub fn tick_restock<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) -> bool {
        self.restock_timer = self.restock_timer.saturating_sub(1);
        if self.restock_timer > 0 {
            return false;
        }
        self.restock(rng, tuning);
        true
    }

    /// Draw new offers: weighted by rarity, without replacement, never owned
    pub fn restock<R: Rng + ?Sized>(&mut self, rng: &mut R, tuning: &Tuning) {
        let mut pool: Vec<CharacterId> = CharacterId::ALL
            .into_iter()
            .filter(|id| !self.owns(*id))
            .collect();

        self.offers.clear();
        while self.offers.len() < tuning.offer_slots {
            let Ok(&pick) = pool.choose_weighted(&mut *rng, |id| id.definition().rarity.drop_weight())
            else {
                break;
            };
            pool.retain(|id| *id != pick);
            self.offers.push(pick);
        }
        self.restock_timer = tuning.restock_interval;
        log::info!("Shop restocked: {:?}", self.offers);
    }

    /// Buy an offered character with permanent bonds and select it
    pub fn buy(
        &mut self,
        id: CharacterId,
        economy: &mut Economy,
        tuning: &Tuning,
    ) -> Result<(), ShopError> {
        let def = id.definition();
        if !self.offers.contains(&id) {
            return Err(ShopError::NotOffered(def.name));
        }
        if economy.permanent_bonds < def.price {
            return Err(ShopError::InsufficientFunds {
                name: def.name,
                price: def.price,
                balance: economy.permanent_bonds,
            });
        }
        if self.owned.len() >= tuning.inventory_cap {
            return Err(ShopError::InventoryFull {
                cap: tuning.inventory_cap,
            });
        }

        economy.permanent_bonds -= def.price;
        self.offers.retain(|o| *o != id);
        self.owned.push(id);
        self.selected = id;
        log::info!("Bought {} for {} bonds", def.name, def.price);
        Ok(())
    }

    /// Sell an owned, unselected character for half its price.
    /// Returns the bonds credited.
    pub fn sell(&mut self, id: CharacterId, economy: &mut Economy) -> Result<u64, ShopError> {
        let def = id.definition();
        if !self.owns(id) {
            return Err(ShopError::NotOwned(def.name));
        }
        if self.owned.len() <= 1 {
            return Err(ShopError::LastCharacter);
        }
        if self.selected == id {
            return Err(ShopError::SellingSelected);
        }

        let refund = def.sell_value();
        economy.permanent_bonds += refund;
        self.owned.retain(|o| *o != id);
        log::info!("Sold {} for {refund} bonds", def.name);
        Ok(refund)
    }

    pub fn select(&mut self, id: CharacterId) -> Result<(), ShopError> {
        if !self.owns(id) {
            return Err(ShopError::NotOwned(id.definition().name));
        }
        self.selected = id;
        Ok(())
    }

    /// The n-th owned character (1-based, as on the number keys)
    pub fn nth_owned(&self, slot: u8) -> Result<CharacterId, ShopError> {
        (slot as usize)
            .checked_sub(1)
            .and_then(|i| self.owned.get(i))
            .copied()
            .ok_or(ShopError::EmptySlot(slot))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    fn shop_with(owned: &[CharacterId], offers: &[CharacterId]) -> ShopState {
        ShopState {
            owned: owned.to_vec(),
            selected: owned[0],
            offers: offers.to_vec(),
            restock_timer: 10,
        }
    }

    #[test]
    fn test_bank_only_once() {
        let mut economy = Economy::new(100);
        assert_eq!(economy.bank(), None);
        economy.start_match();
        economy.earn(50);
        assert_eq!(economy.bank(), Some(50));
        assert_eq!(economy.bank(), None);
        assert_eq!(economy.permanent_bonds, 150);
    }

    #[test]
    fn test_restock_never_offers_owned() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(11);
        let mut shop = shop_with(&[CharacterId::Torcher, CharacterId::Gunslinger], &[]);
        for _ in 0..200 {
            shop.restock(&mut rng, &t);
            assert_eq!(shop.offers().len(), 2);
            assert!(shop.offers().iter().all(|id| !shop.owns(*id)));
            assert_ne!(shop.offers()[0], shop.offers()[1]);
        }
    }

    #[test]
    fn test_restock_favours_common_rarities() {
        let t = Tuning::default();
        let mut rng = Pcg32::seed_from_u64(7);
        let mut shop = ShopState::from_record(&SaveRecord::default(), &t);
        let mut counts = [0u32; 5];
        for _ in 0..5_000 {
            shop.restock(&mut rng, &t);
            for id in shop.offers() {
                counts[*id as usize] += 1;
            }
        }

        let [torcher, gunslinger, brawler, dynamiter, marshal] = counts;
        assert_eq!(torcher, 0);
        assert!(gunslinger > dynamiter * 2, "{counts:?}");
        assert!(brawler > dynamiter * 2, "{counts:?}");
        assert!(dynamiter > marshal * 2, "{counts:?}");
        assert!(marshal > 0, "{counts:?}");
    }

    #[test]
    fn test_restock_with_small_pool() {
        let t = Tuning { inventory_cap: 5, ..Tuning::default() };
        let mut rng = Pcg32::seed_from_u64(1);
        let mut shop = shop_with(
            &[
                CharacterId::Torcher,
                CharacterId::Gunslinger,
                CharacterId::Brawler,
                CharacterId::Dynamiter,
            ],
            &[],
        );
        shop.restock(&mut rng, &t);
        assert_eq!(shop.offers(), &[CharacterId::Marshal]);
    }

    #[test]
    fn test_restock_timer_resets() {
        let t = Tuning { restock_interval: 3, ..Tuning::default() };
        let mut rng = Pcg32::seed_from_u64(2);
        let mut shop = shop_with(&[CharacterId::Torcher], &[]);
        shop.restock_timer = 3;
        assert!(!shop.tick_restock(&mut rng, &t));
        assert!(!shop.tick_restock(&mut rng, &t));
        assert!(shop.tick_restock(&mut rng, &t));
        assert_eq!(shop.restock_countdown(), 3);
        assert_eq!(shop.offers().len(), 2);
    }

    #[test]
    fn test_buy_success_selects() {
        let t = Tuning::default();
        let mut economy = Economy::new(200);
        let mut shop = shop_with(&[CharacterId::Torcher], &[CharacterId::Gunslinger]);
        shop.buy(CharacterId::Gunslinger, &mut economy, &t).unwrap();
        assert_eq!(economy.permanent_bonds, 50);
        assert_eq!(shop.selected(), CharacterId::Gunslinger);
        assert!(shop.owns(CharacterId::Gunslinger));
        assert!(shop.offers().is_empty());
    }

    #[test]
    fn test_buy_rejections_leave_state_unchanged() {
        let t = Tuning::default();
        let mut economy = Economy::new(100);
        let mut shop = shop_with(&[CharacterId::Torcher], &[CharacterId::Gunslinger]);
        let before = shop.clone();
        assert!(matches!(
            shop.buy(CharacterId::Gunslinger, &mut economy, &t),
            Err(ShopError::InsufficientFunds { price: 150, balance: 100, .. })
        ));
        assert_eq!(
            shop.buy(CharacterId::Marshal, &mut economy, &t),
            Err(ShopError::NotOffered("Marshal"))
        );
        assert_eq!(shop, before);
        assert_eq!(economy.permanent_bonds, 100);

        let mut economy = Economy::new(10_000);
        let mut full = shop_with(
            &[CharacterId::Torcher, CharacterId::Brawler, CharacterId::Dynamiter],
            &[CharacterId::Gunslinger],
        );
        assert_eq!(
            full.buy(CharacterId::Gunslinger, &mut economy, &t),
            Err(ShopError::InventoryFull { cap: 3 })
        );
        assert_eq!(economy.permanent_bonds, 10_000);
    }

    #[test]
    fn test_sell_rules() {
        let mut economy = Economy::new(0);
        let mut solo = shop_with(&[CharacterId::Torcher], &[]);
        assert_eq!(solo.sell(CharacterId::Torcher, &mut economy), Err(ShopError::LastCharacter));

        let mut shop = shop_with(&[CharacterId::Torcher, CharacterId::Brawler], &[]);
        assert_eq!(
            shop.sell(CharacterId::Torcher, &mut economy),
            Err(ShopError::SellingSelected)
        );
        assert_eq!(
            shop.sell(CharacterId::Marshal, &mut economy),
            Err(ShopError::NotOwned("Marshal"))
        );
        assert_eq!(shop.sell(CharacterId::Brawler, &mut economy), Ok(150));
        assert_eq!(economy.permanent_bonds, 150);
        assert_eq!(shop.owned(), &[CharacterId::Torcher]);
    }

    #[test]
    fn test_select_and_quick_slots() {
        let mut shop = shop_with(&[CharacterId::Torcher, CharacterId::Brawler], &[]);
        assert_eq!(shop.nth_owned(2), Ok(CharacterId::Brawler));
        assert_eq!(shop.nth_owned(3), Err(ShopError::EmptySlot(3)));
        assert_eq!(shop.nth_owned(0), Err(ShopError::EmptySlot(0)));
        shop.select(CharacterId::Brawler).unwrap();
        assert_eq!(shop.selected(), CharacterId::Brawler);
        assert!(shop.select(CharacterId::Marshal).is_err());
    }

    #[test]
    fn test_error_messages() {
        let err = ShopError::InsufficientFunds {
            name: "Marshal",
            price: 1000,
            balance: 40,
        };
        assert_eq!(err.to_string(), "Marshal costs 1000 bonds, you have 40");
    }
}
