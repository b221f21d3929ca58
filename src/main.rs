//! Panzer Drive runner (default binary).
//!
//! Opens the terminal surface, loads the panzer sprite and drives the scene
//! until the user quits (Esc, q or Ctrl+C). W/S drive, A/D rotate.

use std::{fs::File, sync::Mutex};

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use panzer_drive::core::{Backend, Scene};
use panzer_drive::engine::{Config, FrameDriver};
use panzer_drive::term::{Sprite, TermBackend};
use panzer_drive::types::Size;

/// Default art, compiled in so the binary runs from anywhere.
const BUNDLED_SPRITE: &str = include_str!("../assets/panzer.txt");

fn main() -> Result<()> {
    let config = Config::from_env();
    init_tracing(&config)?;

    let mut backend = TermBackend::new(config.key_release_timeout);
    let result = run(&config, &mut backend);

    // Always try to restore terminal state.
    let _ = backend.exit();
    result
}

/// Log to a file only: stdout is the game screen.
fn init_tracing(config: &Config) -> Result<()> {
    let Some(path) = &config.log_file else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .compact()
        .init();

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
    Ok(())
}

fn run(config: &Config, backend: &mut TermBackend) -> Result<()> {
    backend
        .create_surface(Size::default())
        .context("failed to initialise terminal surface")?;

    let scene = match &config.sprite_path {
        Some(path) => Scene::load(backend, path)
            .with_context(|| format!("failed to load panzer sprite {}", path.display()))?,
        None => Scene::new(Sprite::parse(BUNDLED_SPRITE).context("bundled sprite is empty")?),
    };
    let mut scene = scene.with_captions(config.captions);

    info!(
        sprite_cols = scene.sprite().width(),
        sprite_rows = scene.sprite().height(),
        captions = ?scene.captions(),
        "scene ready"
    );

    let report = FrameDriver::new(config.frame_delay).run(&mut scene, backend)?;
    info!(frames = report.frames, events = report.events, "scene over");
    Ok(())
}
