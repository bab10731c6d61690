//! Cursor-relative geometry for the decorative robot.
//!
//! All functions here are pure: same inputs, same outputs, no error cases.

use std::fmt;

use crate::config::PageConfig;

/// A point in viewport (client) coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A 2D displacement.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// An axis-aligned box, as returned by `getBoundingClientRect`.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 2.0)
    }

    /// Where the robot's eyes sit: horizontally centered, a quarter down.
    pub fn eye_anchor(&self) -> Point {
        Point::new(self.left + self.width / 2.0, self.top + self.height / 4.0)
    }

    /// Fraction of this box's height that lies inside `[0, viewport_height)`.
    ///
    /// Zero-height boxes count as fully visible when their top edge is on screen.
    pub fn visible_fraction(&self, viewport_height: f64) -> f64 {
        if self.height <= 0.0 {
            return if self.top >= 0.0 && self.top < viewport_height {
                1.0
            } else {
                0.0
            };
        }
        let visible = self.bottom().min(viewport_height) - self.top.max(0.0);
        (visible / self.height).clamp(0.0, 1.0)
    }
}

/// Damped translation towards the cursor, relative to `center`.
pub fn parallax_offset(cursor: Point, center: Point, factor: f64) -> Vec2 {
    Vec2::new((cursor.x - center.x) * factor, (cursor.y - center.y) * factor)
}

/// Tilt angles in degrees as `(rotate_x, rotate_y)`.
///
/// Vertical cursor displacement rotates around X, horizontal around Y.
pub fn tilt_angles(cursor: Point, center: Point, factor: f64) -> (f64, f64) {
    ((cursor.y - center.y) * factor, (cursor.x - center.x) * factor)
}

/// Pupil displacement pointing from `eye` towards `cursor`.
///
/// Magnitude is `min(max, distance / scale)`; the cursor sitting exactly on
/// the eye yields a zero vector.
pub fn pupil_offset(cursor: Point, eye: Point, max: f64, scale: f64) -> Vec2 {
    let dx = cursor.x - eye.x;
    let dy = cursor.y - eye.y;
    let angle = dy.atan2(dx);
    let magnitude = max.min(dx.hypot(dy) / scale);
    Vec2::new(angle.cos() * magnitude, angle.sin() * magnitude)
}

/// Full robot transform for one cursor position.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RobotPose {
    pub offset: Vec2,
    pub rotate_x: f64,
    pub rotate_y: f64,
    /// Shared by every eye on the robot
    pub pupil: Vec2,
}

impl RobotPose {
    /// Pose for `cursor` in a viewport of `viewport` size with the robot at `robot`.
    pub fn compute(cursor: Point, viewport: Vec2, robot: Rect, config: &PageConfig) -> Self {
        let center = Point::new(viewport.x / 2.0, viewport.y / 2.0);
        let (rotate_x, rotate_y) = tilt_angles(cursor, center, config.tilt_factor);
        Self {
            offset: parallax_offset(cursor, center, config.parallax_factor),
            rotate_x,
            rotate_y,
            pupil: pupil_offset(
                cursor,
                robot.eye_anchor(),
                config.pupil_max,
                config.pupil_scale,
            ),
        }
    }

    /// CSS transform for the robot container.
    pub fn container_transform(&self) -> String {
        format!(
            "translateY(-50%) translate({}px, {}px) perspective(1000px) rotateX({}deg) rotateY({}deg)",
            self.offset.x, self.offset.y, self.rotate_x, self.rotate_y
        )
    }

    /// CSS transform for each pupil.
    pub fn eye_transform(&self) -> String {
        format!("translate({}px, {}px)", self.pupil.x, self.pupil.y)
    }
}

impl fmt::Display for RobotPose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "offset=({:.2},{:.2}) tilt=({:.2},{:.2}) pupil=({:.2},{:.2})",
            self.offset.x, self.offset.y, self.rotate_x, self.rotate_y, self.pupil.x, self.pupil.y
        )
    }
}
