//! Camera configuration change detection system.
//!
//! Pushes [`CameraConfig`] into the [`CursorCamera2D`] resource whenever the
//! configuration is inserted or modified.

use bevy_ecs::prelude::*;
use log::debug;

use crate::resources::cameraconfig::CameraConfig;
use crate::resources::cursorcamera2d::CursorCamera2D;

/// System that applies camera configuration changes.
///
/// Does nothing when no `CameraConfig` resource exists.
pub fn apply_camera_config_changes(
    maybe_config: Option<Res<CameraConfig>>,
    mut camera: ResMut<CursorCamera2D>,
) {
    let Some(config) = maybe_config else {
        return;
    };

    if config.is_changed() {
        config.apply_to(&mut camera);
        debug!("CameraConfig changes applied.");
    }
}
