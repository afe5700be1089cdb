//! Per-frame input snapshot consumed by the cursor camera.
//!
//! The camera never polls the host directly. Each frame the host (or the
//! raylib polling system) fills a [`CameraInput`] and hands it to
//! [`CursorCamera2D::update`](crate::resources::cursorcamera2d::CursorCamera2D::update).
//! Tests build snapshots by hand.

use bevy_ecs::prelude::*;
use glam::Vec2;

/// One of the four panning directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Left,
    Down,
    Right,
}

impl Direction {
    /// All directions in the order the camera evaluates them.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Left,
        Direction::Down,
        Direction::Right,
    ];

    /// Unit step in screen space (`y` grows downwards).
    pub fn unit(self) -> Vec2 {
        match self {
            Direction::Up => Vec2::new(0.0, -1.0),
            Direction::Left => Vec2::new(-1.0, 0.0),
            Direction::Down => Vec2::new(0.0, 1.0),
            Direction::Right => Vec2::new(1.0, 0.0),
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Left => 1,
            Direction::Down => 2,
            Direction::Right => 3,
        }
    }
}

/// Held state of the four direction keys this frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DirectionKeys {
    pub up: bool,
    pub left: bool,
    pub down: bool,
    pub right: bool,
}

impl DirectionKeys {
    pub fn is_pressed(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.up,
            Direction::Left => self.left,
            Direction::Down => self.down,
            Direction::Right => self.right,
        }
    }

    pub fn set(&mut self, direction: Direction, pressed: bool) {
        match direction {
            Direction::Up => self.up = pressed,
            Direction::Left => self.left = pressed,
            Direction::Down => self.down = pressed,
            Direction::Right => self.right = pressed,
        }
    }
}

/// Resource capturing everything the camera reads from the host in one frame.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct CameraInput {
    /// Actual window size in pixels. Only used for edge detection.
    pub window_size: Vec2,
    /// Cursor position in screen coordinates.
    pub cursor: Vec2,
    /// Scroll delta accumulated since the last poll.
    pub wheel: f32,
    /// Direction keys held this frame.
    pub keys: DirectionKeys,
}

impl Default for CameraInput {
    fn default() -> Self {
        Self::idle(Vec2::new(1280.0, 720.0))
    }
}

impl CameraInput {
    /// Snapshot with no keys held, no scroll and the cursor in the middle of
    /// the window (so it touches no edge).
    pub fn idle(window_size: Vec2) -> Self {
        Self {
            window_size,
            cursor: window_size * 0.5,
            wheel: 0.0,
            keys: DirectionKeys::default(),
        }
    }

    pub fn with_cursor(mut self, cursor: Vec2) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn with_wheel(mut self, wheel: f32) -> Self {
        self.wheel = wheel;
        self
    }

    pub fn with_key(mut self, direction: Direction) -> Self {
        self.keys.set(direction, true);
        self
    }

    /// Whether the cursor sits on the window edge matching `direction`
    /// (pixel 0 or the last pixel row/column).
    pub fn cursor_on_edge(&self, direction: Direction) -> bool {
        match direction {
            Direction::Up => self.cursor.y <= 0.0,
            Direction::Left => self.cursor.x <= 0.0,
            Direction::Down => self.cursor.y >= self.window_size.y - 1.0,
            Direction::Right => self.cursor.x >= self.window_size.x - 1.0,
        }
    }
}
