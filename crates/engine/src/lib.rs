//! Frame driver and runtime configuration.
//!
//! The driver is the outer loop: poll → dispatch → logic → draw → present →
//! throttle, until the scene reports it is over. It is single-threaded and
//! generic over [`panzer_core::Backend`], so tests drive it with a scripted
//! in-memory backend.

pub mod config;
pub mod driver;

pub use panzer_core as core;
pub use panzer_types as types;

pub use config::Config;
pub use driver::{FrameDriver, FrameReport};
