//! Session state machine
//!
//! Owns every piece of mutable game state and routes each tick's input to
//! the active screen:
//!
//! ```text
//! Menu ──Confirm──▶ Playing ──struck──▶ GameOver ──Confirm──▶ Menu
//!  ▲ │                │  └──cap cleared──▶ Victory ──Confirm──▶ Menu
//!  │ └─OpenShop─▶ Shop │
//!  └────Cancel────┴────┘
//! ```
//!
//! The shop restock timer runs on every tick regardless of phase.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::audio::{AudioSink, SoundEffect};
use crate::catalog::CharacterId;
use crate::persistence::{self, SaveStore};
use crate::renderer::RenderSnapshot;
use crate::shop::{Economy, ShopError, ShopState};
use crate::sim::{self, Action, GamePhase, GameState, TickInput, TickOutcome};
use crate::tuning::Tuning;
use crate::ui::{ShopAction, ShopLayout};

/// One player's session: menus, runs, and the shop
pub struct Session {
    tuning: Tuning,
    phase: GamePhase,
    game: GameState,
    shop: ShopState,
    economy: Economy,
    /// Drives shop restocks and run seeds
    rng: Pcg32,
    store: Box<dyn SaveStore>,
    audio: Box<dyn AudioSink>,
    /// User-visible message from the last refused action
    notice: Option<String>,
    quit_requested: bool,
}

impl Session {
    /// Load the save (or defaults) and open on the menu
    pub fn new(
        tuning: Tuning,
        store: Box<dyn SaveStore>,
        audio: Box<dyn AudioSink>,
        seed: u64,
    ) -> Self {
        let record = persistence::load_or_default(&*store, tuning.inventory_cap);
        let mut rng = Pcg32::seed_from_u64(seed);
        let mut shop = ShopState::from_record(&record, &tuning);
        shop.restock(&mut rng, &tuning);
        let game = GameState::new(rng.random(), shop.selected(), &tuning);

        Self {
            economy: Economy::new(record.permanent_currency),
            tuning,
            phase: GamePhase::Menu,
            game,
            shop,
            rng,
            store,
            audio,
            notice: None,
            quit_requested: false,
        }
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn shop(&self) -> &ShopState {
        &self.shop
    }

    pub fn economy(&self) -> &Economy {
        &self.economy
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    pub fn store(&self) -> &dyn SaveStore {
        &*self.store
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Mutable run state, for harnesses that script a run directly
    pub fn game_mut(&mut self) -> &mut GameState {
        &mut self.game
    }

    /// Read-only view for the renderer
    pub fn snapshot(&self) -> RenderSnapshot {
        RenderSnapshot::capture(self)
    }

    /// Advance one fixed tick
    pub fn tick(&mut self, input: &TickInput) {
        self.shop.tick_restock(&mut self.rng, &self.tuning);

        match self.phase {
            GamePhase::Menu => self.tick_menu(input),
            GamePhase::Shop => self.tick_shop(input),
            GamePhase::Playing => self.tick_playing(input),
            GamePhase::GameOver | GamePhase::Victory => self.tick_results(input),
        }
    }

    fn tick_menu(&mut self, input: &TickInput) {
        for &action in &input.actions {
            match action {
                Action::Confirm | Action::Fire => {
                    self.start_run();
                    return;
                }
                Action::OpenShop => {
                    self.set_phase(GamePhase::Shop);
                    return;
                }
                Action::Cancel => {
                    self.quit_requested = true;
                    return;
                }
                Action::QuickSelect(slot) => self.quick_select(slot),
                Action::Click => {}
            }
        }
    }

    fn tick_shop(&mut self, input: &TickInput) {
        for &action in &input.actions {
            match action {
                Action::Cancel => {
                    self.set_phase(GamePhase::Menu);
                    return;
                }
                Action::Click => {
                    let layout = self.shop_layout();
                    if let Some(shop_action) = layout.hit_test(input.pointer) {
                        // Refusals surface through the notice
                        let _ = self.apply_shop_action(shop_action);
                        if self.phase != GamePhase::Shop {
                            return;
                        }
                    }
                }
                Action::QuickSelect(slot) => self.quick_select(slot),
                Action::Fire | Action::Confirm | Action::OpenShop => {}
            }
        }
    }

    fn tick_playing(&mut self, input: &TickInput) {
        if input.has(Action::Cancel) {
            self.end_run(GamePhase::Menu);
            return;
        }

        let outcome = sim::tick(&mut self.game, &mut self.economy, input, &self.tuning);
        for event in self.game.drain_events() {
            if let Some(effect) = SoundEffect::for_event(&event) {
                self.audio.play(effect);
            }
        }

        match outcome {
            TickOutcome::Continue | TickOutcome::WaveCleared { .. } => {}
            TickOutcome::Defeated => self.end_run(GamePhase::GameOver),
            TickOutcome::Victory => self.end_run(GamePhase::Victory),
        }
    }

    fn tick_results(&mut self, input: &TickInput) {
        for &action in &input.actions {
            match action {
                Action::Confirm | Action::Fire => {
                    self.set_phase(GamePhase::Menu);
                    return;
                }
                Action::Cancel => {
                    self.quit_requested = true;
                    return;
                }
                _ => {}
            }
        }
    }

    /// Reset the run and begin playing with the selected character
    pub fn start_run(&mut self) {
        self.game = GameState::new(self.rng.random(), self.shop.selected(), &self.tuning);
        self.economy.start_match();
        self.notice = None;
        self.set_phase(GamePhase::Playing);
        log::info!(
            "Run started as {} (seed {})",
            self.shop.selected().definition().name,
            self.game.seed
        );
    }

    /// Leave the run, banking its bonds exactly once
    fn end_run(&mut self, next: GamePhase) {
        self.bank_match();
        self.set_phase(next);
    }

    /// Fold match bonds into the permanent balance (once per run) and save
    pub fn bank_match(&mut self) {
        if let Some(earned) = self.economy.bank() {
            log::info!(
                "Banked {earned} bonds (total {})",
                self.economy.permanent_bonds
            );
            self.persist();
        }
    }

    /// Exit path: bank anything unbanked before the process ends
    pub fn shutdown(&mut self) {
        self.bank_match();
        self.quit_requested = true;
    }

    pub fn shop_layout(&self) -> ShopLayout {
        ShopLayout::compute(&self.shop, self.tuning.arena_width, self.tuning.arena_height)
    }

    pub fn apply_shop_action(&mut self, action: ShopAction) -> Result<(), ShopError> {
        match action {
            ShopAction::Buy(id) => self.buy(id),
            ShopAction::Sell(id) => self.sell(id).map(|_| ()),
            ShopAction::Select(id) => self.select(id),
            ShopAction::Back => {
                self.set_phase(GamePhase::Menu);
                Ok(())
            }
        }
    }

    pub fn buy(&mut self, id: CharacterId) -> Result<(), ShopError> {
        let result = self.shop.buy(id, &mut self.economy, &self.tuning);
        self.after_shop_action(result.clone(), SoundEffect::Purchase);
        if result.is_ok() {
            self.game.actor.character = id;
        }
        result
    }

    pub fn sell(&mut self, id: CharacterId) -> Result<u64, ShopError> {
        let result = self.shop.sell(id, &mut self.economy);
        self.after_shop_action(result.clone().map(|_| ()), SoundEffect::Sale);
        result
    }

    /// Make an owned character active; the actor adopts its attack profile
    pub fn select(&mut self, id: CharacterId) -> Result<(), ShopError> {
        let result = self.shop.select(id);
        self.after_shop_action(result.clone(), SoundEffect::MenuSelect);
        if result.is_ok() {
            self.game.actor.character = id;
        }
        result
    }

    fn quick_select(&mut self, slot: u8) {
        match self.shop.nth_owned(slot) {
            Ok(id) => {
                let _ = self.select(id);
            }
            Err(e) => self.refuse(e),
        }
    }

    fn after_shop_action(&mut self, result: Result<(), ShopError>, sound: SoundEffect) {
        match result {
            Ok(()) => {
                self.notice = None;
                self.audio.play(sound);
                self.persist();
            }
            Err(e) => self.refuse(e),
        }
    }

    fn refuse(&mut self, error: ShopError) {
        log::info!("Shop action refused: {error}");
        self.notice = Some(error.to_string());
        self.audio.play(SoundEffect::Denied);
    }

    fn persist(&mut self) {
        let record = self.shop.to_record(&self.economy);
        persistence::save_or_warn(&mut *self.store, &record);
    }

    fn set_phase(&mut self, phase: GamePhase) {
        if self.phase != phase {
            log::info!("{:?} -> {phase:?}", self.phase);
            self.phase = phase;
        }
    }
}
