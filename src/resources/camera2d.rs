//! Shared raylib 2D camera resource.
//!
//! Wraps raylib's [`raylib::prelude::Camera2D`] so drawing code can enter the
//! cursor camera's coordinate frame with `begin_mode2D`. Kept in sync with
//! [`CursorCamera2D`](crate::resources::cursorcamera2d::CursorCamera2D) by
//! [`sync_raylib_camera`](crate::systems::raylibcamera::sync_raylib_camera).

use bevy_ecs::prelude::Resource;
use raylib::prelude::Camera2D;

/// ECS resource that holds the raylib camera parameters of the current view.
#[derive(Resource)]
pub struct Camera2DRes(pub Camera2D);
