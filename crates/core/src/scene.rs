//! The game scene: owns the panzer, its indicators and the motion-state table,
//! routes input to commands and draws itself through a [`Backend`].

use std::{path::Path, str::FromStr};

use thiserror::Error;
use tracing::{debug, info};

use crate::backend::{Backend, BackendError};
use crate::body::KinematicBody;
use crate::command::{CommandBinding, Execute};
use crate::indicator::{Indicator, Indicators};
use crate::motion::MotionStateTable;
use crate::types::{
    Command, InputEvent, Rgb, Vec2, BODY_START, CAPTION_ANCHOR, CAPTION_LINE_HEIGHT, MAX_SPEED,
};

/// How simultaneously active captions are placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptionLayout {
    /// Every caption at the same anchor; later ones paint over earlier ones.
    #[default]
    Overlay,
    /// One line per caption, starting at the anchor.
    Stacked,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown caption layout {0:?} (expected `overlay` or `stacked`)")]
pub struct UnknownCaptionLayout(pub String);

impl FromStr for CaptionLayout {
    type Err = UnknownCaptionLayout;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "overlay" => Ok(CaptionLayout::Overlay),
            "stacked" | "stack" => Ok(CaptionLayout::Stacked),
            _ => Err(UnknownCaptionLayout(s.to_string())),
        }
    }
}

/// Things the scene draws, in draw order.
#[derive(Debug, Clone, Copy)]
pub enum Drawable<'a> {
    Body(&'a KinematicBody),
    Indicator(&'a Indicator),
}

impl Drawable<'_> {
    pub fn draw<B: Backend>(&self, backend: &mut B, sprite: &B::Image) {
        match self {
            Drawable::Body(body) => {
                backend.draw_image(sprite, body.position(), body.sprite_rotation());
            }
            Drawable::Indicator(indicator) => {
                backend.draw_rect(indicator.color(), indicator.bounds());
            }
        }
    }
}

pub struct Scene<I> {
    pub(crate) body: KinematicBody,
    pub(crate) indicators: Indicators,
    pub(crate) states: MotionStateTable,
    binding: CommandBinding,
    sprite: I,
    captions: CaptionLayout,
    background: Rgb,
    scene_over: bool,
}

impl<I> Scene<I> {
    /// Scene with the default W/S/A/D binding.
    pub fn new(sprite: I) -> Self {
        Self::with_binding(sprite, CommandBinding::default())
    }

    pub fn with_binding(sprite: I, binding: CommandBinding) -> Self {
        Self {
            body: KinematicBody::new(BODY_START, MAX_SPEED),
            indicators: Indicators::default(),
            states: MotionStateTable::new(),
            binding,
            sprite,
            captions: CaptionLayout::default(),
            background: Rgb::BLACK,
            scene_over: false,
        }
    }

    pub fn with_captions(mut self, captions: CaptionLayout) -> Self {
        self.captions = captions;
        self
    }

    pub fn body(&self) -> &KinematicBody {
        &self.body
    }

    pub fn indicators(&self) -> &Indicators {
        &self.indicators
    }

    pub fn states(&self) -> &MotionStateTable {
        &self.states
    }

    pub fn sprite(&self) -> &I {
        &self.sprite
    }

    pub fn captions(&self) -> CaptionLayout {
        self.captions
    }

    pub fn is_over(&self) -> bool {
        self.scene_over
    }

    /// Route one input event. Nothing is processed once the scene is over.
    pub fn dispatch(&mut self, event: InputEvent) {
        if self.scene_over {
            return;
        }
        match event {
            InputEvent::Quit => {
                info!("quit requested");
                self.scene_over = true;
            }
            InputEvent::KeyDown(key) => {
                if let Some(command) = self.binding.lookup(key) {
                    command.press(self);
                }
            }
            InputEvent::KeyUp(key) => {
                if let Some(command) = self.binding.lookup(key) {
                    command.release(self);
                }
            }
            InputEvent::Other => {}
        }
    }

    /// Advance the simulation one tick.
    pub fn logic(&mut self) {
        self.body.integrate();
    }

    /// Draw order: body first, then indicators in command order.
    pub fn drawables(&self) -> impl Iterator<Item = Drawable<'_>> {
        std::iter::once(Drawable::Body(&self.body))
            .chain(self.indicators.iter().map(|(_, i)| Drawable::Indicator(i)))
    }

    pub fn draw<B>(&self, backend: &mut B)
    where
        B: Backend<Image = I>,
    {
        backend.clear(self.background);
        for drawable in self.drawables() {
            drawable.draw(backend, &self.sprite);
        }
        for (line, (_, entry)) in self.states.active().enumerate() {
            let at = match self.captions {
                CaptionLayout::Overlay => CAPTION_ANCHOR,
                CaptionLayout::Stacked => {
                    CAPTION_ANCHOR + Vec2::new(0.0, line as f64 * CAPTION_LINE_HEIGHT)
                }
            };
            backend.draw_text(entry.caption, at, Rgb::GREEN);
        }
    }

    pub fn is_latched(&self, command: Command) -> bool {
        self.states.is_active(command.motion_state())
    }

    /// Load the panzer sprite through `backend` and build the scene around it.
    pub fn load<B>(backend: &mut B, sprite_path: &Path) -> Result<Self, BackendError>
    where
        B: Backend<Image = I>,
    {
        let sprite = backend.load_image(sprite_path)?;
        debug!(path = %sprite_path.display(), "sprite loaded");
        Ok(Self::new(sprite))
    }
}
