//! Cursor camera library.
//!
//! A 2D camera controller with cursor-anchored wheel zoom, key and edge
//! panning, smooth follow and a bounded world area. The camera lives in a
//! `bevy_ecs` world as a resource and is driven once per frame by
//! [`systems::cursorcamera::cursor_camera_system`], or can be used standalone
//! through [`resources::cursorcamera2d::CursorCamera2D::update`].

pub mod events;
pub mod resources;
pub mod systems;
pub mod transformer;
