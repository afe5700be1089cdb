//! ECS systems.
//!
//! - [`cameraconfig`] – apply `CameraConfig` changes to the camera
//! - [`cursorcamera`] – run the camera update once per frame
//! - `camerainput` – poll raylib into the `CameraInput` snapshot (feature `raylib`)
//! - `raylibcamera` – mirror the camera into raylib's `Camera2D` (feature `raylib`)
//!
//! Suggested order within a frame: `update_camera_input`,
//! `apply_camera_config_changes`, `cursor_camera_system`, `sync_raylib_camera`.
pub mod cameraconfig;
#[cfg(feature = "raylib")]
pub mod camerainput;
pub mod cursorcamera;
#[cfg(feature = "raylib")]
pub mod raylibcamera;
