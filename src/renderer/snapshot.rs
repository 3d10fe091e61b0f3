//! Read-only per-tick view of the session for renderers

use glam::Vec2;

use crate::catalog::CharacterId;
use crate::session::Session;
use crate::sim::{EnemyKind, GamePhase};
use crate::ui::ShopLayout;

#[derive(Debug, Clone, PartialEq)]
pub struct ActorView {
    pub pos: Vec2,
    pub size: f32,
    pub sprite: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnemyView {
    pub pos: Vec2,
    pub size: f32,
    /// Health bar fill in `[0, 1]`
    pub hp_fraction: f32,
    pub kind: EnemyKind,
}

/// Heads-up display values
#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub wave: u32,
    pub zombies_alive: usize,
    pub match_bonds: u64,
    pub permanent_bonds: u64,
    /// Ticks until the next shot (0 = ready)
    pub cooldown_remaining: u32,
}

/// One shop card
#[derive(Debug, Clone, PartialEq)]
pub struct ShopCard {
    pub id: CharacterId,
    pub name: &'static str,
    pub price: u64,
    pub color: [u8; 3],
    pub rarity_label: &'static str,
}

/// Shop screen contents
#[derive(Debug, Clone, PartialEq)]
pub struct ShopView {
    pub offers: Vec<ShopCard>,
    pub owned: Vec<ShopCard>,
    pub selected: CharacterId,
    pub restock_countdown: u32,
    pub layout: ShopLayout,
}

/// Everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSnapshot {
    pub phase: GamePhase,
    pub actor: ActorView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<Vec2>,
    pub hud: Hud,
    /// Present only on the shop screen
    pub shop: Option<ShopView>,
    pub notice: Option<String>,
}

impl RenderSnapshot {
    pub fn capture(session: &Session) -> Self {
        let game = session.game();
        let economy = session.economy();

        let shop = (session.phase() == GamePhase::Shop).then(|| {
            let shop = session.shop();
            ShopView {
                offers: shop.offers().iter().map(|&id| card(id)).collect(),
                owned: shop.owned().iter().map(|&id| card(id)).collect(),
                selected: shop.selected(),
                restock_countdown: shop.restock_countdown(),
                layout: session.shop_layout(),
            }
        });

        Self {
            phase: session.phase(),
            actor: ActorView {
                pos: game.actor.pos,
                size: game.actor.size,
                sprite: game.actor.character.definition().sprite,
            },
            enemies: game
                .enemies
                .iter()
                .map(|e| EnemyView {
                    pos: e.pos,
                    size: e.size,
                    hp_fraction: e.hp_fraction(),
                    kind: e.kind,
                })
                .collect(),
            projectiles: game.projectiles.iter().map(|p| p.pos).collect(),
            hud: Hud {
                wave: game.wave.wave,
                zombies_alive: game.enemies.len(),
                match_bonds: economy.match_bonds,
                permanent_bonds: economy.permanent_bonds,
                cooldown_remaining: game.actor.cooldown,
            },
            shop,
            notice: session.notice().map(str::to_owned),
        }
    }
}

fn card(id: CharacterId) -> ShopCard {
    let def = id.definition();
    ShopCard {
        id,
        name: def.name,
        price: def.price,
        color: def.rarity.color(),
        rarity_label: def.rarity.info().label,
    }
}
