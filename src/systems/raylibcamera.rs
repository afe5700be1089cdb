//! Mirror the cursor camera into raylib's camera.
use bevy_ecs::prelude::*;

use crate::resources::camera2d::Camera2DRes;
use crate::resources::cursorcamera2d::CursorCamera2D;

/// Copy the current view into [`Camera2DRes`] so drawing can use `begin_mode2D`.
pub fn sync_raylib_camera(camera: Res<CursorCamera2D>, mut camera_res: ResMut<Camera2DRes>) {
    camera_res.0 = camera.to_raylib();
}
