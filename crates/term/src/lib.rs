//! Terminal backend for the panzer scene.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders the scene's 800×600 pixel surface into a framebuffer of
//! character cells that is flushed to the terminal with diffing.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep everything but the final flush pure, so drawing can be unit-tested
//! - Correct for the 2:1 aspect of terminal cells when rotating sprites

pub mod backend;
pub mod canvas;
pub mod fb;
pub mod renderer;
pub mod sprite;

pub use panzer_core as core;
pub use panzer_input as input;
pub use panzer_types as types;

pub use backend::TermBackend;
pub use canvas::{Canvas, SurfaceMapping};
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use sprite::Sprite;
