//! Terminal input module (scene-facing).
//!
//! This module is intentionally independent of the scene. It maps `crossterm`
//! events into backend-neutral [`crate::types::InputEvent`]s and provides a
//! key-hold tracker that turns a terminal's key stream into clean press/release
//! pairs (including terminals without key-release events).

pub mod handler;
pub mod map;

pub use panzer_types as types;

pub use handler::KeyHoldTracker;
pub use map::{map_event, map_key, should_quit};
