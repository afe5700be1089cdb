//! ECS resources made available to systems.
//!
//! Long-lived data injected into the ECS world: the camera itself, the
//! per-frame input snapshot it consumes, its configuration and the screen
//! sizes it is based on.
//!
//! Overview
//! - `cursorcamera2d` – the cursor-driven camera (zoom, pan, clamp, follow)
//! - `camerainput` – per-frame input snapshot (cursor, wheel, direction keys)
//! - `cameracontrols` – pluggable directional controls for panning
//! - `cameraconfig` – INI-backed camera settings
//! - `rect` – axis-aligned world rectangle
//! - `screensize` – base render resolution in pixels
//! - `windowsize` – actual window dimensions in pixels
//! - `camera2d` – raylib camera mirror of the current view (feature `raylib`)
#[cfg(feature = "raylib")]
pub mod camera2d;
pub mod cameraconfig;
pub mod cameracontrols;
pub mod camerainput;
pub mod cursorcamera2d;
pub mod rect;
pub mod screensize;
pub mod windowsize;
