//! Event and observer to frame the cursor camera from anywhere in the world.
//!
//! Triggering a [`SetCameraRectEvent`] places the camera exactly like
//! [`CursorCamera2D::set_camera_rect`] / [`CursorCamera2D::set_camera`], so
//! scripted scenes can move the view without holding the resource.
//!
//! ```ignore
//! commands.trigger(SetCameraRectEvent {
//!     framing: CameraFraming::Rect(RectF::new(0.0, 0.0, 640.0, 360.0)),
//!     mode: CameraSettingMode::BaseAndTarget,
//! });
//! ```
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use glam::Vec2;
use log::debug;

use crate::resources::cursorcamera2d::{CameraSettingMode, CursorCamera2D};
use crate::resources::rect::RectF;

/// What the camera should frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraFraming {
    /// Fit a world rectangle.
    Rect(RectF),
    /// Explicit center and magnification.
    Point { center: Vec2, magnification: f32 },
}

/// Event requesting a new camera framing.
#[derive(Event, Debug, Clone, Copy)]
pub struct SetCameraRectEvent {
    pub framing: CameraFraming,
    pub mode: CameraSettingMode,
}

/// Observer that applies [`SetCameraRectEvent`] to the [`CursorCamera2D`] resource.
pub fn set_camera_rect_observer(
    trigger: On<SetCameraRectEvent>,
    camera: Option<ResMut<CursorCamera2D>>,
) {
    let event = trigger.event();
    let Some(mut camera) = camera else {
        debug!("SetCameraRectEvent ignored: no CursorCamera2D resource");
        return;
    };

    match event.framing {
        CameraFraming::Rect(rect) => camera.set_camera_rect(rect, event.mode),
        CameraFraming::Point {
            center,
            magnification,
        } => camera.set_camera(center, magnification, event.mode),
    }
}
