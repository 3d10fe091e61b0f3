//! Firing and hit resolution
//!
//! Projectiles are matched against zombies in insertion order: the first
//! zombie whose box contains a projectile takes the hit and the projectile is
//! spent. Zombies whose hp drops to zero are removed once and pay out bonds.

use glam::Vec2;

use super::state::{GameEvent, GameState, Projectile};
use crate::catalog::{CharacterDefinition, SpecialMode};
use crate::tuning::Tuning;
use crate::{direction_between, perpendicular};

/// Outcome of one resolution pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombatReport {
    pub hits: u32,
    /// Ids of zombies killed this tick, in spawn order
    pub kills: Vec<u32>,
    pub bonds_awarded: u64,
    /// A zombie is touching the actor
    pub actor_struck: bool,
}

/// Fire the selected character's attack toward `pointer`.
///
/// Returns the number of projectiles created. Nothing is fired (and the
/// cooldown is left alone) while cooling down or when the pointer sits
/// exactly on the actor's center.
pub fn fire(
    state: &mut GameState,
    pointer: Vec2,
    character: &CharacterDefinition,
    tuning: &Tuning,
) -> usize {
    if !state.actor.ready_to_fire() {
        return 0;
    }
    let origin = state.actor.center();
    let Some(aim) = direction_between(origin, pointer) else {
        return 0;
    };

    let vel = aim * tuning.projectile_speed;
    let count = character.projectile_count.max(1);
    let side = perpendicular(aim);
    for i in 0..count {
        // Symmetric lateral offsets: ±spread/2 for a pair
        let offset = tuning.projectile_spread * (i as f32 - (count - 1) as f32 / 2.0);
        let id = state.next_entity_id();
        let mut projectile = Projectile::new(id, origin + side * offset, vel, character.damage);
        match character.special {
            SpecialMode::Standard => {}
            SpecialMode::Melee { range } => projectile.range_left = Some(range),
            SpecialMode::AreaOfEffect { radius } => projectile.splash_radius = Some(radius),
        }
        state.projectiles.push(projectile);
    }

    state.actor.cooldown = tuning.attack_cooldown;
    state.events.push(GameEvent::Fired { projectiles: count as u32 });
    count as usize
}

/// Match projectiles against zombies, remove the dead and test actor contact
pub fn resolve(state: &mut GameState, tuning: &Tuning) -> CombatReport {
    let mut report = CombatReport::default();

    for projectile in state.projectiles.iter_mut().filter(|p| p.active) {
        let Some(target) = state
            .enemies
            .iter()
            .position(|e| e.is_alive() && e.bounds().contains_point(projectile.pos))
        else {
            continue;
        };

        let impact = projectile.pos;
        state.enemies[target].take_damage(projectile.damage);
        projectile.active = false;
        report.hits += 1;
        state.events.push(GameEvent::ZombieHit { id: state.enemies[target].id });

        if let Some(radius) = projectile.splash_radius {
            for (i, enemy) in state.enemies.iter_mut().enumerate() {
                if i != target && enemy.is_alive() && enemy.center().distance(impact) <= radius {
                    enemy.take_damage(projectile.damage);
                    report.hits += 1;
                    state.events.push(GameEvent::ZombieHit { id: enemy.id });
                }
            }
        }
    }
    state.projectiles.retain(|p| p.active);

    let kills = &mut report.kills;
    state.enemies.retain(|e| {
        if e.is_alive() {
            true
        } else {
            kills.push(e.id);
            false
        }
    });
    for &id in &report.kills {
        state.events.push(GameEvent::ZombieKilled { id });
    }
    report.bonds_awarded = report.kills.len() as u64 * tuning.bonds_per_kill;

    let actor_box = state.actor.bounds();
    report.actor_struck = state.enemies.iter().any(|e| e.bounds().intersects(&actor_box));
    if report.actor_struck {
        state.events.push(GameEvent::PlayerStruck);
    }

    report
}
