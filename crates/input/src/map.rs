//! Mapping from terminal events to scene input events.

use crate::types::{InputEvent, Key};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map a terminal key code to a backend-neutral key.
pub fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(ch) => Key::char(ch),
        KeyCode::Esc => Key::Escape,
        _ => Key::Other,
    }
}

/// Check if key should end the scene.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

/// Map one terminal event.
///
/// Auto-repeat is reported as another key-down; deduplication is the
/// [`crate::KeyHoldTracker`]'s job.
pub fn map_event(event: &Event) -> InputEvent {
    match event {
        Event::Key(key) => match key.kind {
            KeyEventKind::Press if should_quit(*key) => InputEvent::Quit,
            KeyEventKind::Press | KeyEventKind::Repeat => InputEvent::KeyDown(map_key(key.code)),
            KeyEventKind::Release => InputEvent::KeyUp(map_key(key.code)),
        },
        _ => InputEvent::Other,
    }
}
