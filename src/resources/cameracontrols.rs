//! Directional controls for camera panning.
//!
//! Each of the four directions is backed by a [`CameraControl`]: a single
//! "is this direction active?" query evaluated against the frame's
//! [`CameraInput`]. The default control is active while the direction key is
//! held or the cursor rests on the matching window edge (edge scrolling).
//!
//! Closures of the right shape are controls too, which is handy for scripted
//! input in tests:
//!
//! ```
//! use cursorcamera::resources::cameracontrols::CameraControls;
//! use cursorcamera::resources::camerainput::CameraInput;
//!
//! let controls = CameraControls::new(
//!     |_: &CameraInput| false,
//!     |_: &CameraInput| true,
//!     |_: &CameraInput| false,
//!     |_: &CameraInput| false,
//! );
//! ```

use crate::resources::camerainput::{CameraInput, Direction};

/// Strategy deciding whether a pan direction is active this frame.
pub trait CameraControl: Send + Sync {
    fn is_active(&self, input: &CameraInput) -> bool;
}

impl<F> CameraControl for F
where
    F: Fn(&CameraInput) -> bool + Send + Sync,
{
    fn is_active(&self, input: &CameraInput) -> bool {
        self(input)
    }
}

/// Active while the direction key is held or the cursor touches the edge.
#[derive(Debug, Clone, Copy)]
pub struct KeyOrEdge(pub Direction);

impl CameraControl for KeyOrEdge {
    fn is_active(&self, input: &CameraInput) -> bool {
        input.keys.is_pressed(self.0) || input.cursor_on_edge(self.0)
    }
}

/// Active only while the direction key is held.
#[derive(Debug, Clone, Copy)]
pub struct KeyOnly(pub Direction);

impl CameraControl for KeyOnly {
    fn is_active(&self, input: &CameraInput) -> bool {
        input.keys.is_pressed(self.0)
    }
}

/// Always reports the same value.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub bool);

impl CameraControl for Fixed {
    fn is_active(&self, _input: &CameraInput) -> bool {
        self.0
    }
}

/// The four controls, stored in [`Direction::ALL`] order.
pub struct CameraControls {
    controls: [Box<dyn CameraControl>; 4],
}

impl Default for CameraControls {
    fn default() -> Self {
        Self::new(
            KeyOrEdge(Direction::Up),
            KeyOrEdge(Direction::Left),
            KeyOrEdge(Direction::Down),
            KeyOrEdge(Direction::Right),
        )
    }
}

impl std::fmt::Debug for CameraControls {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CameraControls").finish_non_exhaustive()
    }
}

impl CameraControls {
    pub fn new(
        up: impl CameraControl + 'static,
        left: impl CameraControl + 'static,
        down: impl CameraControl + 'static,
        right: impl CameraControl + 'static,
    ) -> Self {
        Self {
            controls: [Box::new(up), Box::new(left), Box::new(down), Box::new(right)],
        }
    }

    /// Controls that never fire. Useful to drive the camera purely from code.
    pub fn disabled() -> Self {
        Self::new(Fixed(false), Fixed(false), Fixed(false), Fixed(false))
    }

    /// Keyboard-only controls, without edge scrolling.
    pub fn keys_only() -> Self {
        Self::new(
            KeyOnly(Direction::Up),
            KeyOnly(Direction::Left),
            KeyOnly(Direction::Down),
            KeyOnly(Direction::Right),
        )
    }

    /// Replace the control of a single direction.
    pub fn set(&mut self, direction: Direction, control: impl CameraControl + 'static) {
        self.controls[direction.index()] = Box::new(control);
    }

    pub fn is_active(&self, direction: Direction, input: &CameraInput) -> bool {
        self.controls[direction.index()].is_active(input)
    }
}
