//! Shop screen click targets

use glam::Vec2;

use crate::catalog::CharacterId;
use crate::shop::ShopState;
use crate::sim::Aabb;

pub const CARD_WIDTH: f32 = 200.0;
pub const CARD_HEIGHT: f32 = 80.0;
pub const CARD_GAP: f32 = 24.0;
pub const SELL_HEIGHT: f32 = 28.0;
pub const BACK_WIDTH: f32 = 200.0;
pub const BACK_HEIGHT: f32 = 50.0;

/// What a click on a shop element does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShopAction {
    Buy(CharacterId),
    Sell(CharacterId),
    Select(CharacterId),
    Back,
}

/// A clickable rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShopButton {
    pub rect: Aabb,
    pub action: ShopAction,
}

/// Every click target on the shop screen
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShopLayout {
    pub buttons: Vec<ShopButton>,
}

impl ShopLayout {
    /// Offers across the upper third, owned characters (with sell tabs for
    /// unselected ones) across the middle, and a back button at the bottom.
    pub fn compute(shop: &ShopState, width: f32, height: f32) -> Self {
        let mut buttons = Vec::new();

        let offer_y = height * 0.25;
        for (x, &id) in row_positions(shop.offers().len(), width).zip(shop.offers()) {
            buttons.push(ShopButton {
                rect: Aabb::new(Vec2::new(x, offer_y), Vec2::new(CARD_WIDTH, CARD_HEIGHT)),
                action: ShopAction::Buy(id),
            });
        }

        let owned_y = height * 0.55;
        for (x, &id) in row_positions(shop.owned().len(), width).zip(shop.owned()) {
            buttons.push(ShopButton {
                rect: Aabb::new(Vec2::new(x, owned_y), Vec2::new(CARD_WIDTH, CARD_HEIGHT)),
                action: ShopAction::Select(id),
            });
            if id != shop.selected() {
                buttons.push(ShopButton {
                    rect: Aabb::new(
                        Vec2::new(x, owned_y + CARD_HEIGHT + 4.0),
                        Vec2::new(CARD_WIDTH, SELL_HEIGHT),
                    ),
                    action: ShopAction::Sell(id),
                });
            }
        }

        buttons.push(ShopButton {
            rect: Aabb::new(
                Vec2::new((width - BACK_WIDTH) / 2.0, height - BACK_HEIGHT - 40.0),
                Vec2::new(BACK_WIDTH, BACK_HEIGHT),
            ),
            action: ShopAction::Back,
        });

        Self { buttons }
    }

    /// Action under `point`, if any
    pub fn hit_test(&self, point: Vec2) -> Option<ShopAction> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains_point(point))
            .map(|b| b.action)
    }

    pub fn button_for(&self, action: ShopAction) -> Option<&ShopButton> {
        self.buttons.iter().find(|b| b.action == action)
    }
}

/// Left edges of `count` cards centered horizontally
fn row_positions(count: usize, width: f32) -> impl Iterator<Item = f32> {
    let total = count as f32 * CARD_WIDTH + count.saturating_sub(1) as f32 * CARD_GAP;
    let start = (width - total) / 2.0;
    (0..count).map(move |i| start + i as f32 * (CARD_WIDTH + CARD_GAP))
}
