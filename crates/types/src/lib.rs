//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (scene logic, terminal rendering, tests).
//!
//! # Surface
//!
//! The scene works in a logical pixel space with the origin in the top-left
//! corner and `y` growing downwards:
//!
//! - **Width**: 800 pixels
//! - **Height**: 600 pixels
//! - **Panzer start**: (200, 200), heading 0 (facing +x)
//!
//! # Motion Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `MAX_SPEED` | 1.0 | Pixels advanced per frame while driving |
//! | `ROTATION_STEP` | 0.1 | Radians applied per rotate key press |
//! | `FRAME_DELAY_MS` | 10 | Sleep after every presented frame |
//!
//! # Controls
//!
//! | Key | Command |
//! |-----|---------|
//! | W | Forward |
//! | S | Backward |
//! | A | Rotate left |
//! | D | Rotate right |
//!
//! # Examples
//!
//! ```
//! use panzer_types::{Command, MotionState};
//!
//! assert_eq!(Command::Forward.opposite(), Command::Backward);
//! assert_eq!(Command::RotateLeft.motion_state(), MotionState::TurningLeft);
//! assert_eq!(MotionState::NotMoving.as_str(), "not_moving");
//! ```

use std::ops::{Add, AddAssign, Mul};

/// Logical surface width in pixels.
pub const SURFACE_WIDTH: u32 = 800;

/// Logical surface height in pixels.
pub const SURFACE_HEIGHT: u32 = 600;

/// Speed of the panzer while a drive key is held (pixels per frame).
pub const MAX_SPEED: f64 = 1.0;

/// Heading change applied by one rotate key press (radians).
pub const ROTATION_STEP: f64 = 0.1;

/// Throttle sleep after every presented frame (milliseconds).
pub const FRAME_DELAY_MS: u64 = 10;

/// Initial panzer position.
pub const BODY_START: Vec2 = Vec2::new(200.0, 200.0);

/// Screen anchor for motion captions.
pub const CAPTION_ANCHOR: Vec2 = Vec2::new(16.0, 32.0);

/// Vertical distance between captions when they are stacked.
pub const CAPTION_LINE_HEIGHT: f64 = 40.0;

/// Side length of an indicator square.
pub const INDICATOR_SIZE: f64 = 20.0;

/// 2D vector in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Unit vector pointing along `heading` (radians, 0 = +x, positive turns towards +y).
    pub fn from_heading(heading: f64) -> Self {
        Self::new(heading.cos(), heading.sin())
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Self) -> Self::Output {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, rhs: f64) -> Self::Output {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

/// Axis-aligned rectangle in surface pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn square(x: f64, y: f64, side: f64) -> Self {
        Self::new(x, y, side, side)
    }
}

/// Surface dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::new(SURFACE_WIDTH, SURFACE_HEIGHT)
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const RED: Rgb = Rgb::new(255, 0, 0);
    pub const GREEN: Rgb = Rgb::new(0, 255, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Backend-neutral key identity.
///
/// Letters are always stored lower-case so bindings don't depend on shift or
/// caps lock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Escape,
    Other,
}

impl Key {
    /// Build a character key, folding letters to lower-case.
    ///
    /// # Examples
    ///
    /// ```
    /// use panzer_types::Key;
    ///
    /// assert_eq!(Key::char('W'), Key::Char('w'));
    /// assert_eq!(Key::char('1'), Key::Char('1'));
    /// ```
    pub fn char(ch: char) -> Self {
        Key::Char(ch.to_ascii_lowercase())
    }
}

/// Discrete input event delivered by a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to leave (window close, Esc, Ctrl+C).
    Quit,
    KeyDown(Key),
    KeyUp(Key),
    /// Anything the scene does not react to (mouse, resize, focus).
    Other,
}

/// Named motion states shown as captions.
///
/// `NotMoving` is active exactly when none of the four directional states is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionState {
    NotMoving,
    MovingForward,
    MovingBackward,
    TurningLeft,
    TurningRight,
}

impl MotionState {
    /// All states in table order.
    pub const ALL: [MotionState; 5] = [
        MotionState::NotMoving,
        MotionState::MovingForward,
        MotionState::MovingBackward,
        MotionState::TurningLeft,
        MotionState::TurningRight,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Snake-case state name.
    pub fn as_str(&self) -> &'static str {
        match self {
            MotionState::NotMoving => "not_moving",
            MotionState::MovingForward => "moving_forward",
            MotionState::MovingBackward => "moving_backward",
            MotionState::TurningLeft => "turning_left",
            MotionState::TurningRight => "turning_right",
        }
    }

    /// Human-readable caption rendered while the state is active.
    pub fn caption(&self) -> &'static str {
        match self {
            MotionState::NotMoving => "not moving",
            MotionState::MovingForward => "moving forward",
            MotionState::MovingBackward => "moving backward",
            MotionState::TurningLeft => "turning left",
            MotionState::TurningRight => "turning right",
        }
    }

    pub fn is_directional(&self) -> bool {
        !matches!(self, MotionState::NotMoving)
    }

    /// The state that can never be active together with this one.
    ///
    /// # Examples
    ///
    /// ```
    /// use panzer_types::MotionState;
    ///
    /// assert_eq!(MotionState::TurningLeft.opposing(), Some(MotionState::TurningRight));
    /// assert_eq!(MotionState::NotMoving.opposing(), None);
    /// ```
    pub fn opposing(&self) -> Option<MotionState> {
        match self {
            MotionState::NotMoving => None,
            MotionState::MovingForward => Some(MotionState::MovingBackward),
            MotionState::MovingBackward => Some(MotionState::MovingForward),
            MotionState::TurningLeft => Some(MotionState::TurningRight),
            MotionState::TurningRight => Some(MotionState::TurningLeft),
        }
    }
}

/// Directional commands, one per control key.
///
/// Each command is a press/release pair: pressing latches the command,
/// releasing unlatches it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Drive at `+max_speed`
    Forward,
    /// Drive at `-max_speed`
    Backward,
    /// Turn by `-ROTATION_STEP`
    RotateLeft,
    /// Turn by `+ROTATION_STEP`
    RotateRight,
}

impl Command {
    pub const ALL: [Command; 4] = [
        Command::Forward,
        Command::Backward,
        Command::RotateLeft,
        Command::RotateRight,
    ];

    pub const COUNT: usize = Self::ALL.len();

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Opposing command (Forward↔Backward, RotateLeft↔RotateRight).
    pub fn opposite(&self) -> Command {
        match self {
            Command::Forward => Command::Backward,
            Command::Backward => Command::Forward,
            Command::RotateLeft => Command::RotateRight,
            Command::RotateRight => Command::RotateLeft,
        }
    }

    pub fn motion_state(&self) -> MotionState {
        match self {
            Command::Forward => MotionState::MovingForward,
            Command::Backward => MotionState::MovingBackward,
            Command::RotateLeft => MotionState::TurningLeft,
            Command::RotateRight => MotionState::TurningRight,
        }
    }

    pub fn is_rotation(&self) -> bool {
        matches!(self, Command::RotateLeft | Command::RotateRight)
    }

    /// Screen bounds of the indicator bound to this command.
    ///
    /// The four squares form an arrow-key cross under the play area.
    pub fn indicator_bounds(&self) -> Rect {
        match self {
            Command::Forward => Rect::square(100.0, 500.0, INDICATOR_SIZE),
            Command::Backward => Rect::square(100.0, 530.0, INDICATOR_SIZE),
            Command::RotateLeft => Rect::square(70.0, 530.0, INDICATOR_SIZE),
            Command::RotateRight => Rect::square(130.0, 530.0, INDICATOR_SIZE),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Forward => "forward",
            Command::Backward => "backward",
            Command::RotateLeft => "rotateLeft",
            Command::RotateRight => "rotateRight",
        }
    }
}
