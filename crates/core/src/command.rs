//! Directional command execution and key bindings.
//!
//! Every [`Command`] is a press/release pair acting on a scene it borrows for
//! the duration of the call. Each command is an independent Idle ⇄ Active
//! machine; the only coupling is pairwise exclusion with its opposite.

use tracing::debug;

use crate::scene::Scene;
use crate::types::{Command, Key, ROTATION_STEP};

/// Press/release execution of a command against a scene.
pub trait Execute {
    fn press<I>(self, scene: &mut Scene<I>);
    fn release<I>(self, scene: &mut Scene<I>);
}

impl Execute for Command {
    fn press<I>(self, scene: &mut Scene<I>) {
        match self {
            Command::Forward => scene.body.drive(true),
            Command::Backward => scene.body.drive(false),
            Command::RotateLeft => scene.body.rotate(-ROTATION_STEP),
            Command::RotateRight => scene.body.rotate(ROTATION_STEP),
        }
        scene.states.activate(self.motion_state());
        scene.indicators[self].set_enabled(true);
        scene.indicators[self.opposite()].set_enabled(false);

        debug!(
            command = self.as_str(),
            speed = scene.body.speed(),
            heading = scene.body.heading(),
            moving = scene.body.is_moving(),
            "press"
        );
    }

    fn release<I>(self, scene: &mut Scene<I>) {
        if !self.is_rotation() {
            scene.body.stop();
        }
        scene.states.deactivate(self.motion_state());
        scene.indicators[self].set_enabled(false);

        debug!(
            command = self.as_str(),
            speed = scene.body.speed(),
            heading = scene.body.heading(),
            moving = scene.body.is_moving(),
            "release"
        );
    }
}

/// Immutable key → command map for a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandBinding {
    keys: [(Key, Command); Command::COUNT],
}

impl CommandBinding {
    /// Bind one key per command. Keys are matched case-insensitively.
    pub fn new(forward: char, backward: char, left: char, right: char) -> Self {
        Self {
            keys: [
                (Key::char(forward), Command::Forward),
                (Key::char(backward), Command::Backward),
                (Key::char(left), Command::RotateLeft),
                (Key::char(right), Command::RotateRight),
            ],
        }
    }

    pub fn lookup(&self, key: Key) -> Option<Command> {
        let key = match key {
            Key::Char(ch) => Key::char(ch),
            other => other,
        };
        self.keys
            .iter()
            .find(|(bound, _)| *bound == key)
            .map(|(_, command)| *command)
    }
}

impl Default for CommandBinding {
    /// W/S drive, A/D rotate.
    fn default() -> Self {
        Self::new('w', 's', 'a', 'd')
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use super::*;
    use crate::types::MotionState;

    fn scene() -> Scene<()> {
        Scene::new(())
    }

    #[rstest]
    #[case('w', Some(Command::Forward))]
    #[case('S', Some(Command::Backward))]
    #[case('a', Some(Command::RotateLeft))]
    #[case('D', Some(Command::RotateRight))]
    #[case('q', None)]
    #[case(' ', None)]
    fn default_binding(#[case] ch: char, #[case] expected: Option<Command>) {
        assert_eq!(CommandBinding::default().lookup(Key::Char(ch)), expected);
    }

    #[test]
    fn non_char_keys_are_unbound() {
        let binding = CommandBinding::default();
        assert_eq!(binding.lookup(Key::Escape), None);
        assert_eq!(binding.lookup(Key::Other), None);
    }

    #[test]
    fn forward_press_latches_and_release_stops() {
        let mut scene = scene();
        Command::Forward.press(&mut scene);
        assert_eq!(scene.body().speed(), scene.body().max_speed());
        assert!(scene.states().is_active(MotionState::MovingForward));
        assert!(!scene.states().is_active(MotionState::NotMoving));
        assert!(scene.indicators()[Command::Forward].is_enabled());

        Command::Forward.release(&mut scene);
        assert_eq!(scene.body().speed(), 0.0);
        assert!(scene.states().is_active(MotionState::NotMoving));
        assert!(!scene.indicators()[Command::Forward].is_enabled());
    }

    #[test]
    fn opposing_press_takes_over() {
        let mut scene = scene();
        Command::Backward.press(&mut scene);
        Command::Forward.press(&mut scene);

        assert!(!scene.states().is_active(MotionState::MovingBackward));
        assert!(!scene.indicators()[Command::Backward].is_enabled());
        assert!(scene.indicators()[Command::Forward].is_enabled());
        assert_eq!(scene.body().speed(), 1.0);
    }

    #[test]
    fn drive_release_always_stops() {
        let mut scene = scene();
        Command::Forward.press(&mut scene);
        Command::Backward.press(&mut scene);
        Command::Forward.release(&mut scene);

        // Backward stays latched but the body is at rest.
        assert_eq!(scene.body().speed(), 0.0);
        assert!(scene.states().is_active(MotionState::MovingBackward));
        assert!(scene.indicators()[Command::Backward].is_enabled());
        assert!(!scene.states().is_active(MotionState::NotMoving));
    }

    #[test]
    fn rotation_applies_on_press_only() {
        let mut scene = scene();
        Command::RotateRight.press(&mut scene);
        Command::RotateRight.release(&mut scene);
        Command::RotateLeft.press(&mut scene);
        Command::RotateLeft.press(&mut scene);
        Command::RotateLeft.release(&mut scene);

        assert_abs_diff_eq!(scene.body().heading(), -0.1, epsilon = 1e-12);
        assert!(scene.states().is_active(MotionState::NotMoving));
    }

    #[test]
    fn rotation_release_does_not_stop_driving() {
        let mut scene = scene();
        Command::Forward.press(&mut scene);
        Command::RotateLeft.press(&mut scene);
        Command::RotateLeft.release(&mut scene);

        assert_eq!(scene.body().speed(), 1.0);
        assert!(scene.states().is_active(MotionState::MovingForward));
        assert!(!scene.states().is_active(MotionState::NotMoving));
    }
}
