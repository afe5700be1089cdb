//! Screen size resource.
//!
//! The base (render) resolution in pixels. The cursor camera uses it as its
//! fixed reference size; changing it re-bases the camera on the next update.

use bevy_ecs::prelude::Resource;
use glam::Vec2;

/// Base screen size in pixels.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl ScreenSize {
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.w as f32, self.h as f32)
    }
}
