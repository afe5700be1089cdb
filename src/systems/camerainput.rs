//! Camera input polling system.
//!
//! [`update_camera_input`] reads raylib's keyboard, mouse and window state each
//! frame and writes it into the [`CameraInput`] snapshot.
use bevy_ecs::prelude::*;
use glam::Vec2;
use raylib::prelude::KeyboardKey;

use crate::resources::camerainput::{CameraInput, Direction};
use crate::resources::windowsize::WindowSize;

/// Keys bound to the four panning directions. Defaults to WASD.
#[derive(Resource, Debug, Clone, Copy)]
pub struct CameraKeyBindings {
    pub up: KeyboardKey,
    pub left: KeyboardKey,
    pub down: KeyboardKey,
    pub right: KeyboardKey,
}

impl Default for CameraKeyBindings {
    fn default() -> Self {
        Self {
            up: KeyboardKey::KEY_W,
            left: KeyboardKey::KEY_A,
            down: KeyboardKey::KEY_S,
            right: KeyboardKey::KEY_D,
        }
    }
}

impl CameraKeyBindings {
    pub fn key(&self, direction: Direction) -> KeyboardKey {
        match direction {
            Direction::Up => self.up,
            Direction::Left => self.left,
            Direction::Down => self.down,
            Direction::Right => self.right,
        }
    }
}

/// Poll raylib and refresh the `CameraInput` and `WindowSize` resources.
///
/// Raylib reports a positive wheel move when scrolling up; the camera zooms
/// out on positive wheel, so the sign is flipped to zoom in on scroll up.
pub fn update_camera_input(
    mut input: ResMut<CameraInput>,
    mut window_size: ResMut<WindowSize>,
    bindings: Res<CameraKeyBindings>,
    rl: NonSend<raylib::RaylibHandle>,
) {
    let w = rl.get_screen_width();
    let h = rl.get_screen_height();
    if window_size.w != w || window_size.h != h {
        window_size.w = w;
        window_size.h = h;
    }

    let mouse = rl.get_mouse_position();
    input.window_size = window_size.as_vec2();
    input.cursor = Vec2::new(mouse.x, mouse.y);
    input.wheel = -rl.get_mouse_wheel_move();
    for direction in Direction::ALL {
        input.keys.set(direction, rl.is_key_down(bindings.key(direction)));
    }
}
