//! Platform abstraction layer
//!
//! Turns raw device events into the deterministic per-tick input the
//! simulation consumes.

pub mod input;

pub use input::{InputState, Key, MouseButton};
