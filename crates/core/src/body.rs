//! Kinematic body of the panzer.
//!
//! Motion has no acceleration ramp: speed is always `-max_speed`, `0` or
//! `+max_speed`, and the position advances by one Euler step per frame.

use crate::types::Vec2;

#[derive(Debug, Clone, PartialEq)]
pub struct KinematicBody {
    position: Vec2,
    heading: f64,
    speed: f64,
    max_speed: f64,
    // Render transform in radians, clockwise on screen. Only `rotate` refreshes it.
    sprite_rotation: f64,
}

impl KinematicBody {
    /// Create a body at rest facing +x.
    ///
    /// `max_speed` must be positive; a negative value is folded to its magnitude.
    pub fn new(position: Vec2, max_speed: f64) -> Self {
        Self {
            position,
            heading: 0.0,
            speed: 0.0,
            max_speed: max_speed.abs(),
            sprite_rotation: 0.0,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    /// Heading in radians; accumulates without wrapping.
    pub fn heading(&self) -> f64 {
        self.heading
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    /// Rotation to draw the sprite with.
    pub fn sprite_rotation(&self) -> f64 {
        self.sprite_rotation
    }

    pub fn is_moving(&self) -> bool {
        self.speed != 0.0
    }

    /// Drive at full speed forwards or backwards.
    pub fn drive(&mut self, forward: bool) {
        self.speed = if forward {
            self.max_speed
        } else {
            -self.max_speed
        };
    }

    pub fn stop(&mut self) {
        self.speed = 0.0;
    }

    pub fn rotate(&mut self, delta: f64) {
        self.heading += delta;
        self.sprite_rotation = self.heading;
    }

    /// Velocity for the current heading and speed.
    pub fn velocity(&self) -> Vec2 {
        Vec2::from_heading(self.heading) * self.speed
    }

    /// Advance one tick.
    pub fn integrate(&mut self) {
        self.position += self.velocity();
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_abs_diff_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn starts_at_rest() {
        let body = KinematicBody::new(Vec2::new(200.0, 200.0), 1.0);
        assert_eq!(body.position(), Vec2::new(200.0, 200.0));
        assert_eq!(body.heading(), 0.0);
        assert_eq!(body.speed(), 0.0);
        assert!(!body.is_moving());
    }

    #[test]
    fn drive_uses_full_speed_both_ways() {
        let mut body = KinematicBody::new(Vec2::ZERO, 2.5);
        body.drive(true);
        assert_eq!(body.speed(), 2.5);
        body.drive(false);
        assert_eq!(body.speed(), -2.5);
        body.stop();
        assert_eq!(body.speed(), 0.0);
    }

    #[test]
    fn negative_max_speed_is_folded() {
        let body = KinematicBody::new(Vec2::ZERO, -3.0);
        assert_eq!(body.max_speed(), 3.0);
    }

    #[rstest]
    #[case(0.0, 1.0, 1.0, 0.0)]
    #[case(FRAC_PI_2, 1.0, 0.0, 1.0)]
    #[case(PI, 2.0, -2.0, 0.0)]
    #[case(0.0, -1.0, -1.0, 0.0)]
    fn integrate_moves_along_heading(
        #[case] heading: f64,
        #[case] speed: f64,
        #[case] dx: f64,
        #[case] dy: f64,
    ) {
        let mut body = KinematicBody::new(Vec2::ZERO, speed.abs());
        body.rotate(heading);
        body.drive(speed > 0.0);
        body.integrate();
        assert_abs_diff_eq!(body.position().x, dx, epsilon = 1e-12);
        assert_abs_diff_eq!(body.position().y, dy, epsilon = 1e-12);
    }

    #[test]
    fn integrate_at_rest_keeps_position() {
        let mut body = KinematicBody::new(Vec2::new(5.0, 6.0), 1.0);
        body.rotate(1.3);
        body.integrate();
        assert_eq!(body.position(), Vec2::new(5.0, 6.0));
    }

    #[test]
    fn rotation_accumulates_and_refreshes_sprite() {
        let mut body = KinematicBody::new(Vec2::ZERO, 1.0);
        body.rotate(FRAC_PI_2);
        body.rotate(FRAC_PI_2);
        assert_abs_diff_eq!(body.heading(), PI);
        assert_abs_diff_eq!(body.sprite_rotation(), PI);
    }
}
