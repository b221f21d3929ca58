//! Two-color state rectangles, one per directional command.

use std::ops::{Index, IndexMut};

use crate::types::{Command, Rect, Rgb};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Indicator {
    bounds: Rect,
    enabled: bool,
    color_enabled: Rgb,
    color_disabled: Rgb,
}

impl Indicator {
    /// New indicators start disabled.
    pub fn new(bounds: Rect, color_enabled: Rgb, color_disabled: Rgb) -> Self {
        Self {
            bounds,
            enabled: false,
            color_enabled,
            color_disabled,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Palette entry for the current state.
    pub fn color(&self) -> Rgb {
        if self.enabled {
            self.color_enabled
        } else {
            self.color_disabled
        }
    }
}

/// The fixed indicator set, indexed by [`Command`].
#[derive(Debug, Clone, PartialEq)]
pub struct Indicators([Indicator; Command::COUNT]);

impl Indicators {
    pub fn iter(&self) -> impl Iterator<Item = (Command, &Indicator)> {
        Command::ALL.into_iter().zip(self.0.iter())
    }
}

impl Default for Indicators {
    /// Green when latched, red otherwise, laid out as an arrow-key cross.
    fn default() -> Self {
        Self(Command::ALL.map(|command| {
            Indicator::new(command.indicator_bounds(), Rgb::GREEN, Rgb::RED)
        }))
    }
}

impl Index<Command> for Indicators {
    type Output = Indicator;

    fn index(&self, command: Command) -> &Self::Output {
        &self.0[command.index()]
    }
}

impl IndexMut<Command> for Indicators {
    fn index_mut(&mut self, command: Command) -> &mut Self::Output {
        &mut self.0[command.index()]
    }
}
