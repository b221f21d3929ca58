//! Closed-loop test of the terminal pipeline without a tty: crossterm events
//! go through the key mapper and hold tracker, the frame driver runs the
//! scene, and the canvas receives the drawing.

use std::{
    collections::VecDeque,
    path::{Path, PathBuf},
    time::{Duration, Instant},
};

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use panzer_drive::core::{Backend, BackendError, CaptionLayout, Scene};
use panzer_drive::engine::{FrameDriver, FrameReport};
use panzer_drive::input::{map_event, KeyHoldTracker};
use panzer_drive::term::{Canvas, CellStyle, Sprite};
use panzer_drive::types::{Command, InputEvent, Rect, Rgb, Size, Vec2};

/// One scripted frame: terminal events plus the time they arrive at.
type Batch = (Duration, Vec<Event>);

struct CanvasBackend {
    canvas: Canvas,
    tracker: KeyHoldTracker,
    script: VecDeque<Batch>,
    start: Instant,
    presented: usize,
}

impl CanvasBackend {
    fn new(script: Vec<Batch>) -> Self {
        Self {
            canvas: Canvas::new(Size::default(), 80, 24),
            tracker: KeyHoldTracker::new(Duration::from_millis(600)),
            script: script.into(),
            start: Instant::now(),
            presented: 0,
        }
    }

    fn caption_row(&self) -> String {
        self.canvas.framebuffer().row_text(1)
    }

    fn indicator(&self, command: Command) -> CellStyle {
        let (col, row, _, _) = self.canvas.mapping().cell_rect(command.indicator_bounds());
        self.canvas
            .framebuffer()
            .get(col as u16, row as u16)
            .map(|cell| cell.style)
            .unwrap_or_default()
    }
}

impl Backend for CanvasBackend {
    type Image = Sprite;

    fn create_surface(&mut self, size: Size) -> Result<(), BackendError> {
        self.canvas = Canvas::new(size, 80, 24);
        Ok(())
    }

    fn load_image(&mut self, path: &Path) -> Result<Sprite, BackendError> {
        Sprite::load(path)
    }

    fn poll_events(&mut self, out: &mut Vec<InputEvent>) -> Result<(), BackendError> {
        let Some((at, events)) = self.script.pop_front() else {
            out.push(InputEvent::Quit);
            return Ok(());
        };
        let now = self.start + at;
        for raw in &events {
            if let Some(event) = self.tracker.filter(map_event(raw), now) {
                out.push(event);
            }
        }
        out.extend(self.tracker.expire(now));
        Ok(())
    }

    fn clear(&mut self, color: Rgb) {
        self.canvas.clear(color);
    }

    fn draw_rect(&mut self, color: Rgb, bounds: Rect) {
        self.canvas.draw_rect(color, bounds);
    }

    fn draw_image(&mut self, image: &Sprite, center: Vec2, rotation: f64) {
        self.canvas.draw_sprite(image, center, rotation);
    }

    fn draw_text(&mut self, text: &str, at: Vec2, color: Rgb) {
        self.canvas.draw_text(text, at, color);
    }

    fn present(&mut self) -> Result<(), BackendError> {
        self.presented += 1;
        Ok(())
    }
}

fn sprite_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets/panzer.txt")
}

fn key(ch: char, kind: KeyEventKind) -> Event {
    Event::Key(KeyEvent::new_with_kind(
        KeyCode::Char(ch),
        KeyModifiers::NONE,
        kind,
    ))
}

fn press(ch: char) -> Event {
    key(ch, KeyEventKind::Press)
}

fn release(ch: char) -> Event {
    key(ch, KeyEventKind::Release)
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

fn run_script(script: Vec<Batch>) -> (Scene<Sprite>, CanvasBackend, FrameReport) {
    let mut backend = CanvasBackend::new(script);
    backend.create_surface(Size::default()).unwrap();
    let mut scene = Scene::load(&mut backend, &sprite_path()).unwrap();
    let report = FrameDriver::new(Duration::ZERO)
        .run(&mut scene, &mut backend)
        .unwrap();
    (scene, backend, report)
}

#[test]
fn bundled_sprite_is_embedded_and_matches_the_asset() {
    let embedded = Sprite::parse(include_str!("../assets/panzer.txt")).unwrap();
    assert!(embedded.width() > embedded.height());
    assert_eq!(embedded, Sprite::load(&sprite_path()).unwrap());
}

#[test]
fn idle_scene_shows_not_moving_and_red_cross() {
    let (scene, backend, report) = run_script(vec![(ms(0), vec![])]);

    assert_eq!(report.frames, 1);
    assert_eq!(backend.presented, 1);
    assert!(scene.is_over());
    assert!(backend.caption_row().contains("not moving"));
    for command in Command::ALL {
        assert_eq!(backend.indicator(command), CellStyle::solid(Rgb::RED));
    }
}

#[test]
fn held_key_with_release_events_drives_and_stops() {
    let script = vec![
        (ms(0), vec![press('w')]),
        (ms(10), vec![key('w', KeyEventKind::Repeat)]),
        (ms(20), vec![]),
        (ms(30), vec![release('w')]),
    ];
    let mut backend = CanvasBackend::new(script);
    let mut scene = Scene::load(&mut backend, &sprite_path()).unwrap();
    let mut driver = FrameDriver::new(Duration::ZERO);
    let mut report = FrameReport::default();

    // Frame 1: press latches forward and the tick moves one unit.
    assert!(driver.frame(&mut scene, &mut backend, &mut report).unwrap());
    assert_eq!(scene.body().position().x, 201.0);
    assert!(backend.caption_row().contains("moving forward"));
    assert_eq!(backend.indicator(Command::Forward), CellStyle::solid(Rgb::GREEN));

    // Frames 2 and 3: the repeat is swallowed, motion continues.
    assert!(driver.frame(&mut scene, &mut backend, &mut report).unwrap());
    assert!(driver.frame(&mut scene, &mut backend, &mut report).unwrap());
    assert_eq!(scene.body().position().x, 203.0);

    // Frame 4: the release stops the body before the tick.
    assert!(driver.frame(&mut scene, &mut backend, &mut report).unwrap());
    assert_eq!(scene.body().position().x, 203.0);
    assert!(backend.caption_row().contains("not moving"));
    assert_eq!(backend.indicator(Command::Forward), CellStyle::solid(Rgb::RED));

    // Script exhausted: quit ends the loop without drawing.
    assert!(!driver.frame(&mut scene, &mut backend, &mut report).unwrap());
    assert_eq!(report.frames, 4);
    assert_eq!(backend.presented, 4);
}

#[test]
fn terminal_without_releases_gets_synthesized_key_up() {
    let (scene, _, report) = run_script(vec![
        (ms(0), vec![press('w')]),
        (ms(100), vec![press('w')]),
        (ms(200), vec![]),
        // 700ms after the last repeat the tracker gives up on the key.
        (ms(800), vec![]),
        (ms(900), vec![]),
    ]);

    assert_eq!(report.frames, 5);
    assert_eq!(scene.body().speed(), 0.0);
    // Three driving ticks, then the synthesized release before the fourth.
    assert_eq!(scene.body().position().x, 203.0);
}

#[test]
fn auto_repeat_turns_only_once_per_hold() {
    let (scene, _, _) = run_script(vec![
        (ms(0), vec![press('a')]),
        (ms(30), vec![press('a'), press('a')]),
        (ms(60), vec![release('a')]),
        (ms(90), vec![press('a')]),
    ]);
    approx::assert_abs_diff_eq!(scene.body().heading(), -0.2, epsilon = 1e-12);
}

#[test]
fn quit_key_ends_the_loop_mid_batch() {
    let (scene, backend, report) = run_script(vec![
        (ms(0), vec![press('d')]),
        (ms(10), vec![press('q'), press('w')]),
        (ms(20), vec![press('s')]),
    ]);

    assert!(scene.is_over());
    assert_eq!(report.frames, 1);
    assert_eq!(report.events, 2);
    // The script's last batch was never polled.
    assert_eq!(backend.script.len(), 1);
    assert_eq!(scene.body().speed(), 0.0);
}

#[test]
fn stacked_captions_list_every_active_state() {
    let mut backend = CanvasBackend::new(vec![(ms(0), vec![press('w'), press('d')])]);
    let mut scene = Scene::load(&mut backend, &sprite_path())
        .unwrap()
        .with_captions(CaptionLayout::Stacked);
    FrameDriver::new(Duration::ZERO)
        .run(&mut scene, &mut backend)
        .unwrap();

    let fb = backend.canvas.framebuffer();
    assert!(fb.row_text(1).contains("moving forward"));
    assert!(fb.row_text(2).contains("turning right"));
}

#[test]
fn panzer_is_drawn_around_its_position() {
    let (_, backend, _) = run_script(vec![(ms(0), vec![])]);
    let (col, row) = backend.canvas.mapping().cell(Vec2::new(200.0, 200.0));
    let cell = backend
        .canvas
        .framebuffer()
        .get(col as u16, row as u16)
        .unwrap();
    assert_ne!(cell.ch, ' ');
}
