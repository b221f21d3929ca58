//! Scene control core - pure, deterministic, and testable
//!
//! This module contains the panzer's kinematics, the directional command set
//! and the scene that ties them together. It has **no dependency** on a
//! terminal or window system; drawing and input go through the [`Backend`]
//! capability trait, making it:
//!
//! - **Deterministic**: the same event sequence always yields the same state
//! - **Testable**: an in-memory backend is enough to exercise every path
//! - **Portable**: any surface that can draw rects, images and text works
//!
//! # Module Structure
//!
//! - [`body`]: position/heading/speed with per-frame Euler integration
//! - [`indicator`]: two-color rectangles reflecting latched commands
//! - [`motion`]: enum-indexed motion-state table with captions
//! - [`command`]: press/release execution and the key binding
//! - [`scene`]: event dispatch, logic tick and drawing
//! - [`backend`]: the rendering/input capability set and its error type
//!
//! # Example
//!
//! ```
//! use panzer_core::Scene;
//! use panzer_types::{InputEvent, Key, MotionState};
//!
//! let mut scene = Scene::new(());
//! scene.dispatch(InputEvent::KeyDown(Key::Char('w')));
//! scene.logic();
//!
//! assert!(scene.states().is_active(MotionState::MovingForward));
//! assert_eq!(scene.body().position().x, 201.0);
//!
//! scene.dispatch(InputEvent::KeyUp(Key::Char('w')));
//! assert!(scene.states().is_active(MotionState::NotMoving));
//! ```

pub mod backend;
pub mod body;
pub mod command;
pub mod indicator;
pub mod motion;
pub mod scene;

pub use panzer_types as types;

// Re-export commonly used types for convenience
pub use backend::{Backend, BackendError};
pub use body::KinematicBody;
pub use command::{CommandBinding, Execute};
pub use indicator::{Indicator, Indicators};
pub use motion::{MotionEntry, MotionStateTable};
pub use scene::{CaptionLayout, Drawable, Scene, UnknownCaptionLayout};
