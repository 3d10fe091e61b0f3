//! Keyboard and pointer folding
//!
//! Redundant physical bindings (WASD and the arrow keys) collapse into one
//! logical direction each. Presses of action keys queue one-shot actions that
//! are delivered with the next tick.

use std::collections::HashSet;

use glam::Vec2;

use crate::sim::{Action, Directions, TickInput};

/// Physical keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    A,
    S,
    D,
    Up,
    Down,
    Left,
    Right,
    Space,
    Enter,
    Escape,
    B,
    Tab,
    /// Number row 0-9
    Digit(u8),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
}

/// Accumulated device state between ticks
#[derive(Debug, Clone, Default)]
pub struct InputState {
    held: HashSet<Key>,
    pointer: Vec2,
    pending: Vec<Action>,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn key_down(&mut self, key: Key) {
        // Ignore auto-repeat so one press is one action
        if !self.held.insert(key) {
            return;
        }
        if let Some(action) = action_for_key(key) {
            self.pending.push(action);
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.held.remove(&key);
    }

    pub fn pointer_moved(&mut self, x: f32, y: f32) {
        self.pointer = Vec2::new(x, y);
    }

    pub fn mouse_down(&mut self, button: MouseButton) {
        if button == MouseButton::Left {
            self.pending.push(Action::Click);
        }
    }

    /// Window lost focus: release everything so the actor stops moving
    pub fn release_all(&mut self) {
        self.held.clear();
    }

    /// Logical directions from the currently held keys
    pub fn directions(&self) -> Directions {
        let any = |keys: [Key; 2]| keys.iter().any(|k| self.held.contains(k));
        Directions {
            up: any([Key::W, Key::Up]),
            down: any([Key::S, Key::Down]),
            left: any([Key::A, Key::Left]),
            right: any([Key::D, Key::Right]),
        }
    }

    /// Snapshot for the next tick; queued actions are consumed
    pub fn take_tick_input(&mut self) -> TickInput {
        TickInput {
            held: self.directions(),
            pointer: self.pointer,
            actions: std::mem::take(&mut self.pending),
            idle_mode: false,
        }
    }
}

fn action_for_key(key: Key) -> Option<Action> {
    match key {
        Key::Space => Some(Action::Fire),
        Key::Enter => Some(Action::Confirm),
        Key::Escape => Some(Action::Cancel),
        Key::B | Key::Tab => Some(Action::OpenShop),
        Key::Digit(n @ 1..=9) => Some(Action::QuickSelect(n)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redundant_bindings_fold() {
        let mut input = InputState::new();
        input.key_down(Key::W);
        input.key_down(Key::Up);
        input.key_down(Key::Right);
        let dirs = input.directions();
        assert!(dirs.up && dirs.right && !dirs.down && !dirs.left);

        input.key_up(Key::W);
        assert!(input.directions().up);
        input.key_up(Key::Up);
        assert!(!input.directions().up);
    }

    #[test]
    fn test_actions_are_one_shot() {
        let mut input = InputState::new();
        input.key_down(Key::Space);
        input.key_down(Key::Space); // auto-repeat
        input.key_down(Key::Digit(3));
        input.key_down(Key::Digit(0));
        input.pointer_moved(10.0, 20.0);
        input.mouse_down(MouseButton::Left);

        let tick = input.take_tick_input();
        assert_eq!(
            tick.actions,
            vec![Action::Fire, Action::QuickSelect(3), Action::Click]
        );
        assert_eq!(tick.pointer, Vec2::new(10.0, 20.0));
        assert!(input.take_tick_input().actions.is_empty());
    }

    #[test]
    fn test_release_all_stops_movement() {
        let mut input = InputState::new();
        input.key_down(Key::A);
        input.release_all();
        assert_eq!(input.directions(), Directions::default());
    }
}
