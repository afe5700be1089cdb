//! Cursor camera update system.
//!
//! Runs the camera's per-frame sequence with the current [`CameraInput`]
//! snapshot. Schedule it once per frame, after input has been captured and
//! before anything reads the camera for drawing.

use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::camerainput::CameraInput;
use crate::resources::cursorcamera2d::CursorCamera2D;
use crate::resources::screensize::ScreenSize;

/// Advance the [`CursorCamera2D`] resource by one frame.
///
/// When a [`ScreenSize`] resource exists and has changed, the camera is
/// re-based on it first.
pub fn cursor_camera_system(
    mut camera: ResMut<CursorCamera2D>,
    input: Res<CameraInput>,
    screen: Option<Res<ScreenSize>>,
) {
    if let Some(screen) = screen
        && screen.is_changed()
    {
        let size = screen.as_vec2();
        if size != camera.base_size() {
            debug!("Camera base size {}x{}", screen.w, screen.h);
            camera.set_base_size(size);
        }
    }

    camera.update(&input);
}
