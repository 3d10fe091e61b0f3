//! Screen layouts as pure data
//!
//! Click targets are computed from game state alone, so a renderer draws
//! them and the session hit-tests them without sharing any drawing code.

pub mod shop_layout;

pub use shop_layout::{ShopAction, ShopButton, ShopLayout};
