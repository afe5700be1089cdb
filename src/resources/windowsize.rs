//! Window size resource.
//!
//! Tracks the actual window dimensions in pixels, which may differ from the
//! base resolution. Updated each frame; the camera only uses it to detect the
//! cursor touching a window edge.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.w as f32, self.h as f32)
    }
}
