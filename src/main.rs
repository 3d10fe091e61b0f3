//! Wild Rails entry point
//!
//! Runs a headless session: the autopilot plays one run at the fixed tick
//! rate, the result is banked into the save file, and a summary is logged.

use std::time::{SystemTime, UNIX_EPOCH};

use wild_rails::audio::LogAudio;
use wild_rails::consts::TICK_RATE;
use wild_rails::persistence::JsonFileStore;
use wild_rails::renderer::assets::{ACTOR_PLACEHOLDER, ZOMBIE_PLACEHOLDER};
use wild_rails::renderer::{HeadlessRenderer, Renderer, SpriteCache};
use wild_rails::sim::{Action, GamePhase, TickInput};
use wild_rails::{Session, Tuning};

const TUNING_PATH: &str = "wild_rails_tuning.json";
const SAVE_PATH: &str = "wild_rails_save.json";
const ASSET_DIR: &str = "assets";
/// Give up on a run after ten minutes of game time
const MAX_RUN_TICKS: u64 = TICK_RATE as u64 * 60 * 10;

fn main() {
    env_logger::init();
    log::info!("Wild Rails (headless) starting...");

    let tuning = Tuning::load(TUNING_PATH);
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let mut session = Session::new(
        tuning,
        Box::new(JsonFileStore::new(SAVE_PATH)),
        Box::new(LogAudio::default()),
        seed,
    );
    let mut renderer = HeadlessRenderer::default();

    let mut sprites = SpriteCache::new(ASSET_DIR);
    let tuning = session.tuning();
    let actor_sprite = session.game().actor.character.definition().sprite;
    let size = tuning.player_size;
    if sprites.get(actor_sprite, size, size, ACTOR_PLACEHOLDER).is_placeholder() {
        log::info!("Drawing {actor_sprite} as a placeholder box");
    }
    let size = tuning.zombie_size;
    sprites.get("zombie.png", size, size, ZOMBIE_PLACEHOLDER);

    session.tick(&TickInput::with_action(Action::Confirm));
    let autopilot = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let mut ticks = 0;
    while session.phase() == GamePhase::Playing && ticks < MAX_RUN_TICKS {
        session.tick(&autopilot);
        renderer.draw(&session.snapshot());
        ticks += 1;
    }

    let snapshot = session.snapshot();
    log::info!(
        "Run ended ({:?}) on wave {} after {:.1}s: {} bonds earned, {} banked",
        snapshot.phase,
        snapshot.hud.wave,
        ticks as f32 / TICK_RATE as f32,
        snapshot.hud.match_bonds,
        snapshot.hud.permanent_bonds
    );
    session.shutdown();
}
