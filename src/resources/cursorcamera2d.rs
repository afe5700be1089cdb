//! Cursor-driven 2D camera.
//!
//! [`CursorCamera2D`] keeps two views, each a center plus a magnification:
//! the *current* view that is rendered this frame and the *target* view the
//! camera is relaxing towards. Every frame [`CursorCamera2D::update`] runs a
//! fixed sequence:
//!
//! 1. [`magnify`](CursorCamera2D::magnify) – wheel zoom on the target, anchored at the cursor
//! 2. [`restrict_magnification`](CursorCamera2D::restrict_magnification) – clamp both magnifications
//! 3. [`move_target`](CursorCamera2D::move_target) – directional panning of the target
//! 4. [`restrict_rect`](CursorCamera2D::restrict_rect) – translate both views back inside the restricted rect
//! 5. [`follow`](CursorCamera2D::follow) – interpolate the current view towards the target
//!
//! The order matters: the magnification clamp runs before anything divides by
//! a magnification, which keeps every division well-defined.
//!
//! Magnification is screen pixels per world unit; larger means more zoomed in.
//! The world-to-screen transform is `translate(-center)`, `scale(magnification)`,
//! `translate(base_size / 2)`.

use bevy_ecs::prelude::*;
use glam::{Affine2, Vec2};
use log::{debug, trace, warn};

use crate::resources::cameracontrols::CameraControls;
use crate::resources::camerainput::{CameraInput, Direction};
use crate::resources::rect::RectF;
use crate::transformer::{TransformStack, Transformer};

pub const DEFAULT_MOVING_SENSITIVITY: f32 = 0.02;
pub const DEFAULT_MAGNIFYING_SENSITIVITY: f32 = 0.1;
pub const DEFAULT_FOLLOWING_SPEED: f32 = 0.25;
pub const DEFAULT_MIN_MAGNIFICATION: f32 = 1.0;
pub const DEFAULT_MAX_MAGNIFICATION: f32 = 8.0;
const DEFAULT_BASE_SIZE: Vec2 = Vec2::new(1280.0, 720.0);

/// Which of the two views a framing call overwrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CameraSettingMode {
    /// Snap the current view only. The camera drifts back towards the old target.
    BaseOnly,
    /// Retarget and let the follow step animate there.
    #[default]
    TargetOnly,
    /// Snap both views, no animation.
    BaseAndTarget,
}

/// Camera with cursor-anchored zoom, edge/key panning and a bounded world area.
#[derive(Resource, Debug)]
pub struct CursorCamera2D {
    base_size: Vec2,

    center: Vec2,
    magnification: f32,

    target_center: Vec2,
    target_magnification: f32,

    moving_sensitivity: f32,
    magnifying_sensitivity: f32,
    following_speed: f32,

    min_magnification: f32,
    max_magnification: f32,
    restricted_rect: RectF,
    /// The restricted rect is the base screen and tracks base size changes.
    restricted_to_screen: bool,

    controls: CameraControls,
}

impl Default for CursorCamera2D {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_SIZE)
    }
}

impl CursorCamera2D {
    /// Camera centered on a `base_size` screen at 1x, restricted to that screen.
    pub fn new(base_size: Vec2) -> Self {
        let screen_center = base_size * 0.5;
        Self {
            base_size,
            center: screen_center,
            magnification: 1.0,
            target_center: screen_center,
            target_magnification: 1.0,
            moving_sensitivity: DEFAULT_MOVING_SENSITIVITY,
            magnifying_sensitivity: DEFAULT_MAGNIFYING_SENSITIVITY,
            following_speed: DEFAULT_FOLLOWING_SPEED,
            min_magnification: DEFAULT_MIN_MAGNIFICATION,
            max_magnification: DEFAULT_MAX_MAGNIFICATION,
            restricted_rect: RectF {
                pos: Vec2::ZERO,
                size: base_size,
            },
            restricted_to_screen: true,
            controls: CameraControls::default(),
        }
    }

    /// Advance the camera by one frame. Call exactly once per frame.
    pub fn update(&mut self, input: &CameraInput) {
        self.magnify(input);
        self.restrict_magnification();
        self.move_target(input);
        self.restrict_rect();
        self.follow();

        trace!(
            "camera: center=({:.2}, {:.2}) mag={:.4} target=({:.2}, {:.2}) mag={:.4}",
            self.center.x,
            self.center.y,
            self.magnification,
            self.target_center.x,
            self.target_center.y,
            self.target_magnification
        );
    }

    /// Zoom the target view by the wheel delta, keeping the world point under
    /// the cursor fixed on screen.
    ///
    /// A wheel delta of `-1 / magnifying_sensitivity` or below yields a zero or
    /// negative factor. The target magnification then goes infinite or
    /// negative and the following clamp pins it to max or min respectively.
    pub fn magnify(&mut self, input: &CameraInput) {
        let delta = 1.0 + self.magnifying_sensitivity * input.wheel;
        let cursor_world = self.target_screen_to_world(input.cursor);

        self.target_magnification /= delta;
        self.target_center = (self.target_center - cursor_world) * delta + cursor_world;
    }

    /// Pan the target view for every active direction.
    ///
    /// The step is a fixed fraction of the base screen, so panning covers the
    /// same on-screen distance at every zoom level.
    pub fn move_target(&mut self, input: &CameraInput) {
        for direction in Direction::ALL {
            if self.controls.is_active(direction, input) {
                self.target_center += direction.unit() * self.moving_sensitivity * self.base_size
                    / self.target_magnification;
            }
        }
    }

    /// Relax the current view towards the target view.
    ///
    /// Centers interpolate linearly. Magnification interpolates in the
    /// reciprocal domain so zooming in and out progress at the same visual rate.
    /// The step is per call, not scaled by frame time.
    pub fn follow(&mut self) {
        let t = self.following_speed;
        self.center = self.center.lerp(self.target_center, t);
        let inverse = lerp(1.0 / self.magnification, 1.0 / self.target_magnification, t);
        self.magnification = 1.0 / inverse;
    }

    /// Clamp both magnifications to `[min, max]`, then raise them so the
    /// viewport is never larger than the restricted rect.
    ///
    /// Clamp order is min, max, rect floor. With `min > max` the max wins; a
    /// restricted rect smaller than the screen overrides the max.
    pub fn restrict_magnification(&mut self) {
        self.magnification = self.clamp_magnification(self.magnification);
        self.target_magnification = self.clamp_magnification(self.target_magnification);
    }

    fn clamp_magnification(&self, magnification: f32) -> f32 {
        let magnification = magnification.max(self.min_magnification);
        let magnification = magnification.min(self.max_magnification);
        magnification
            .max(self.base_size.y / self.restricted_rect.h())
            .max(self.base_size.x / self.restricted_rect.w())
    }

    /// Translate both viewports by the minimal amount that puts every
    /// protruding edge back on the restricted rect. Never changes magnification.
    pub fn restrict_rect(&mut self) {
        let correction = self.rect_correction(&self.camera_rect());
        self.center += correction;

        let correction = self.rect_correction(&self.target_camera_rect());
        self.target_center += correction;
    }

    fn rect_correction(&self, view: &RectF) -> Vec2 {
        let tl = self.restricted_rect.tl() - view.tl();
        let br = self.restricted_rect.br() - view.br();
        Vec2::new(
            tl.x.max(0.0) + br.x.min(0.0),
            tl.y.max(0.0) + br.y.min(0.0),
        )
    }

    /// World-to-screen transform of the current view.
    pub fn get_mat3x2(&self) -> Affine2 {
        Affine2::from_translation(self.base_size * 0.5)
            * Affine2::from_scale(Vec2::splat(self.magnification))
            * Affine2::from_translation(-self.center)
    }

    /// World-to-screen transform of the target view.
    pub fn get_target_mat3x2(&self) -> Affine2 {
        Affine2::from_translation(self.base_size * 0.5)
            * Affine2::from_scale(Vec2::splat(self.target_magnification))
            * Affine2::from_translation(-self.target_center)
    }

    /// Push the camera transform onto `stack` for the lifetime of the returned guard.
    pub fn create_transformer<'a, S: TransformStack>(&self, stack: &'a mut S) -> Transformer<'a, S> {
        Transformer::new(stack, self.get_mat3x2())
    }

    pub fn screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.base_size * 0.5) / self.magnification + self.center
    }

    pub fn world_to_screen(&self, world: Vec2) -> Vec2 {
        self.get_mat3x2().transform_point2(world)
    }

    /// Like [`screen_to_world`](Self::screen_to_world) but through the target view.
    pub fn target_screen_to_world(&self, screen: Vec2) -> Vec2 {
        (screen - self.base_size * 0.5) / self.target_magnification + self.target_center
    }

    /// World area visible through the current view.
    pub fn camera_rect(&self) -> RectF {
        RectF::from_center(self.center, self.base_size / self.magnification)
    }

    /// World area visible through the target view.
    pub fn target_camera_rect(&self) -> RectF {
        RectF::from_center(self.target_center, self.base_size / self.target_magnification)
    }

    /// Frame `rect` by its center, using the larger of the two axis-fit
    /// magnifications. The view matches `rect` exactly on one axis and crops
    /// the other when the aspect ratios differ.
    pub fn set_camera_rect(&mut self, rect: RectF, mode: CameraSettingMode) {
        let magnification = (self.base_size.x / rect.w()).max(self.base_size.y / rect.h());
        self.set_camera(rect.center(), magnification, mode);
    }

    /// Place the selected view(s) at `center` with `magnification`.
    pub fn set_camera(&mut self, center: Vec2, magnification: f32, mode: CameraSettingMode) {
        let magnification = self.sanitize_magnification(magnification);
        debug!(
            "set camera ({:?}): center=({:.2}, {:.2}) mag={:.4}",
            mode, center.x, center.y, magnification
        );
        match mode {
            CameraSettingMode::BaseOnly => {
                self.center = center;
                self.magnification = magnification;
            }
            CameraSettingMode::TargetOnly => {
                self.target_center = center;
                self.target_magnification = magnification;
            }
            CameraSettingMode::BaseAndTarget => {
                self.center = center;
                self.magnification = magnification;
                self.target_center = center;
                self.target_magnification = magnification;
            }
        }
    }

    fn sanitize_magnification(&self, magnification: f32) -> f32 {
        if magnification.is_finite() && magnification > 0.0 {
            return magnification;
        }
        let fallback = if self.min_magnification.is_finite() && self.min_magnification > 0.0 {
            self.min_magnification
        } else {
            1.0
        };
        warn!(
            "Rejected magnification {}, using {} instead",
            magnification, fallback
        );
        fallback
    }

    pub fn set_sensitivity(
        &mut self,
        magnifying_sensitivity: f32,
        moving_sensitivity: f32,
        following_speed: f32,
    ) {
        debug!(
            "camera sensitivity: magnifying={} moving={} following={}",
            magnifying_sensitivity, moving_sensitivity, following_speed
        );
        self.magnifying_sensitivity = magnifying_sensitivity;
        self.moving_sensitivity = moving_sensitivity;
        self.following_speed = following_speed;
    }

    pub fn set_controls(&mut self, controls: CameraControls) {
        self.controls = controls;
    }

    pub fn controls_mut(&mut self) -> &mut CameraControls {
        &mut self.controls
    }

    pub fn set_restricted_rect(&mut self, rect: RectF) {
        debug!(
            "camera restricted rect: ({}, {}) {}x{}",
            rect.pos.x,
            rect.pos.y,
            rect.w(),
            rect.h()
        );
        self.restricted_rect = rect;
        self.restricted_to_screen = false;
    }

    /// Restrict the camera to the base screen at 1x. The rect is resized by
    /// later [`set_base_size`](Self::set_base_size) calls until another rect is set.
    pub fn reset_restricted_rect(&mut self) {
        self.restricted_rect = RectF {
            pos: Vec2::ZERO,
            size: self.base_size,
        };
        self.restricted_to_screen = true;
    }

    /// Non-finite or `<= 0` values are rejected. `min > max` is stored as given.
    pub fn set_min_magnification(&mut self, min_magnification: f32) {
        if min_magnification.is_finite() && min_magnification > 0.0 {
            self.min_magnification = min_magnification;
        } else {
            warn!("Rejected min magnification {}", min_magnification);
        }
    }

    /// Non-finite or `<= 0` values are rejected. `min > max` is stored as given.
    pub fn set_max_magnification(&mut self, max_magnification: f32) {
        if max_magnification.is_finite() && max_magnification > 0.0 {
            self.max_magnification = max_magnification;
        } else {
            warn!("Rejected max magnification {}", max_magnification);
        }
    }

    /// Change the reference screen size, e.g. after a render resolution change.
    pub fn set_base_size(&mut self, base_size: Vec2) {
        self.base_size = base_size;
        if self.restricted_to_screen {
            self.reset_restricted_rect();
        }
    }

    pub fn base_size(&self) -> Vec2 {
        self.base_size
    }

    pub fn center(&self) -> Vec2 {
        self.center
    }

    pub fn magnification(&self) -> f32 {
        self.magnification
    }

    pub fn target_center(&self) -> Vec2 {
        self.target_center
    }

    pub fn target_magnification(&self) -> f32 {
        self.target_magnification
    }

    pub fn moving_sensitivity(&self) -> f32 {
        self.moving_sensitivity
    }

    pub fn magnifying_sensitivity(&self) -> f32 {
        self.magnifying_sensitivity
    }

    pub fn following_speed(&self) -> f32 {
        self.following_speed
    }

    pub fn min_magnification(&self) -> f32 {
        self.min_magnification
    }

    pub fn max_magnification(&self) -> f32 {
        self.max_magnification
    }

    pub fn restricted_rect(&self) -> RectF {
        self.restricted_rect
    }

    /// Raylib camera equivalent to the current view.
    #[cfg(feature = "raylib")]
    pub fn to_raylib(&self) -> raylib::prelude::Camera2D {
        use crate::resources::rect::to_vector2;
        raylib::prelude::Camera2D {
            offset: to_vector2(self.base_size * 0.5),
            target: to_vector2(self.center),
            rotation: 0.0,
            zoom: self.magnification,
        }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::cameracontrols::Fixed;
    use crate::transformer::CameraTransformStack;

    const EPSILON: f32 = 1e-3;

    fn approx_vec(a: Vec2, b: Vec2) -> bool {
        (a - b).abs().max_element() < EPSILON
    }

    fn camera_800x600() -> CursorCamera2D {
        let mut cam = CursorCamera2D::new(Vec2::new(800.0, 600.0));
        cam.set_controls(CameraControls::disabled());
        cam
    }

    fn idle() -> CameraInput {
        CameraInput::idle(Vec2::new(800.0, 600.0))
    }

    fn assert_magnification_invariants(cam: &CursorCamera2D) {
        let floor_y = cam.base_size().y / cam.restricted_rect().h();
        let floor_x = cam.base_size().x / cam.restricted_rect().w();
        for m in [cam.magnification(), cam.target_magnification()] {
            assert!(m >= cam.min_magnification() - EPSILON, "{m} below min");
            assert!(m <= cam.max_magnification() + EPSILON, "{m} above max");
            assert!(m >= floor_y - EPSILON && m >= floor_x - EPSILON);
        }
    }

    #[test]
    fn test_defaults() {
        let cam = CursorCamera2D::new(Vec2::new(800.0, 600.0));
        assert_eq!(cam.center(), Vec2::new(400.0, 300.0));
        assert_eq!(cam.target_center(), Vec2::new(400.0, 300.0));
        assert_eq!(cam.magnification(), 1.0);
        assert_eq!(cam.target_magnification(), 1.0);
        assert_eq!(cam.moving_sensitivity(), 0.02);
        assert_eq!(cam.magnifying_sensitivity(), 0.1);
        assert_eq!(cam.following_speed(), 0.25);
        assert_eq!(cam.min_magnification(), 1.0);
        assert_eq!(cam.max_magnification(), 8.0);
        assert_eq!(cam.restricted_rect(), RectF::new(0.0, 0.0, 800.0, 600.0));
        assert_eq!(cam.camera_rect(), RectF::new(0.0, 0.0, 800.0, 600.0));
    }

    #[test]
    fn test_mat3x2_maps_center_to_screen_center() {
        let mut cam = camera_800x600();
        cam.set_camera(Vec2::new(100.0, 50.0), 4.0, CameraSettingMode::BaseAndTarget);
        let m = cam.get_mat3x2();
        assert!(approx_vec(m.transform_point2(Vec2::new(100.0, 50.0)), Vec2::new(400.0, 300.0)));
        assert!(approx_vec(m.transform_point2(Vec2::new(101.0, 50.0)), Vec2::new(404.0, 300.0)));
        let back = cam.screen_to_world(cam.world_to_screen(Vec2::new(12.0, 34.0)));
        assert!(approx_vec(back, Vec2::new(12.0, 34.0)));
    }

    #[test]
    fn test_restrict_magnification_is_idempotent() {
        let mut cam = camera_800x600();
        cam.set_restricted_rect(RectF::new(0.0, 0.0, 400.0, 1200.0));
        cam.set_camera(Vec2::new(200.0, 300.0), 0.3, CameraSettingMode::BaseOnly);
        cam.set_camera(Vec2::new(200.0, 300.0), 50.0, CameraSettingMode::TargetOnly);
        cam.restrict_magnification();
        let once = (cam.magnification(), cam.target_magnification());
        cam.restrict_magnification();
        assert_eq!(once, (cam.magnification(), cam.target_magnification()));
        assert_eq!(once, (2.0, 8.0));
    }

    #[test]
    fn test_invalid_bounds_pin_to_max() {
        let mut cam = camera_800x600();
        cam.set_min_magnification(5.0);
        cam.set_max_magnification(3.0);
        cam.set_camera(Vec2::new(400.0, 300.0), 4.0, CameraSettingMode::BaseAndTarget);
        cam.restrict_magnification();
        assert_eq!(cam.magnification(), 3.0);
        assert_eq!(cam.target_magnification(), 3.0);
    }

    #[test]
    fn test_small_restricted_rect_overrides_max() {
        let mut cam = camera_800x600();
        cam.set_restricted_rect(RectF::new(0.0, 0.0, 80.0, 60.0));
        cam.set_max_magnification(4.0);
        cam.restrict_magnification();
        assert_eq!(cam.magnification(), 10.0);
        assert_eq!(cam.target_magnification(), 10.0);
    }

    #[test]
    fn test_restrict_rect_translates_back_inside() {
        let mut cam = camera_800x600();
        cam.set_camera(Vec2::new(-50.0, 700.0), 2.0, CameraSettingMode::BaseAndTarget);
        cam.restrict_rect();
        let bounds = cam.restricted_rect();
        assert!(bounds.contains_rect(&cam.camera_rect(), EPSILON));
        assert!(bounds.contains_rect(&cam.target_camera_rect(), EPSILON));
        assert!(approx_vec(cam.center(), Vec2::new(200.0, 450.0)));
        assert_eq!(cam.magnification(), 2.0);
    }

    #[test]
    fn test_restrict_rect_leaves_inside_view_alone() {
        let mut cam = camera_800x600();
        cam.set_camera(Vec2::new(300.0, 250.0), 4.0, CameraSettingMode::BaseAndTarget);
        cam.restrict_rect();
        assert_eq!(cam.center(), Vec2::new(300.0, 250.0));
    }

    #[test]
    fn test_restrict_rect_oversized_view_sums_both_corrections() {
        let mut cam = camera_800x600();
        cam.set_restricted_rect(RectF::new(100.0, 100.0, 200.0, 200.0));
        cam.set_camera(Vec2::new(0.0, 0.0), 1.0, CameraSettingMode::BaseOnly);
        cam.restrict_rect();
        // x: 500 - 100, y: 400 + 0
        assert!(approx_vec(cam.center(), Vec2::new(400.0, 400.0)));
        assert_eq!(cam.magnification(), 1.0);
    }

    #[test]
    fn test_zoom_keeps_cursor_world_point_fixed() {
        let mut cam = camera_800x600();
        cam.set_camera(Vec2::new(400.0, 300.0), 4.0, CameraSettingMode::BaseAndTarget);
        let cursor = Vec2::new(123.0, 456.0);
        let before = cam.target_screen_to_world(cursor);
        cam.magnify(&idle().with_cursor(cursor).with_wheel(-2.0));
        assert!(cam.target_magnification() > 4.0);
        let after = cam.target_screen_to_world(cursor);
        assert!(approx_vec(before, after));
    }

    #[test]
    fn test_zoom_without_wheel_is_noop() {
        let mut cam = camera_800x600();
        cam.set_camera(Vec2::new(350.0, 280.0), 3.0, CameraSettingMode::TargetOnly);
        cam.magnify(&idle().with_cursor(Vec2::new(10.0, 10.0)));
        assert!(approx_vec(cam.target_center(), Vec2::new(350.0, 280.0)));
        assert_eq!(cam.target_magnification(), 3.0);
    }

    #[test]
    fn test_move_scales_with_magnification() {
        let mut cam = camera_800x600();
        cam.controls_mut().set(Direction::Right, Fixed(true));
        cam.controls_mut().set(Direction::Up, Fixed(true));
        cam.set_camera(Vec2::new(400.0, 300.0), 2.0, CameraSettingMode::TargetOnly);
        cam.move_target(&idle());
        // 0.02 * 800 / 2 and 0.02 * 600 / 2
        assert!(approx_vec(cam.target_center(), Vec2::new(408.0, 297.0)));
        assert_eq!(cam.center(), Vec2::new(400.0, 300.0));
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut cam = camera_800x600();
        cam.set_controls(CameraControls::new(Fixed(true), Fixed(true), Fixed(true), Fixed(true)));
        cam.move_target(&idle());
        assert!(approx_vec(cam.target_center(), Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn test_follow_converges_geometrically() {
        let mut cam = camera_800x600();
        cam.set_camera(Vec2::new(200.0, 100.0), 4.0, CameraSettingMode::TargetOnly);
        let mut distance = cam.center().distance(cam.target_center());
        let mut inverse_gap = (1.0 / cam.magnification() - 1.0 / cam.target_magnification()).abs();
        for _ in 0..60 {
            cam.follow();
            let d = cam.center().distance(cam.target_center());
            let g = (1.0 / cam.magnification() - 1.0 / cam.target_magnification()).abs();
            assert!((d - distance * 0.75).abs() < EPSILON);
            assert!(g <= inverse_gap);
            distance = d;
            inverse_gap = g;
        }
        assert!(approx_vec(cam.center(), cam.target_center()));
        assert!((cam.magnification() - cam.target_magnification()).abs() < EPSILON);
    }

    #[test]
    fn test_follow_interpolates_in_reciprocal_domain() {
        let mut cam = camera_800x600();
        cam.set_sensitivity(0.1, 0.02, 0.5);
        cam.set_camera(Vec2::new(400.0, 300.0), 4.0, CameraSettingMode::TargetOnly);
        cam.follow();
        // 1 / lerp(1, 0.25, 0.5) = 1 / 0.625
        assert!((cam.magnification() - 1.6).abs() < EPSILON);
    }

    #[test]
    fn test_set_camera_rect_frames_rect() {
        let mut cam = camera_800x600();
        let framed = RectF::new(100.0, 100.0, 200.0, 100.0);
        cam.set_camera_rect(framed, CameraSettingMode::BaseAndTarget);
        // width fit 4, height fit 6
        assert_eq!(cam.magnification(), 6.0);
        assert_eq!(cam.target_magnification(), 6.0);
        assert_eq!(cam.camera_rect(), cam.target_camera_rect());
        let view = cam.camera_rect();
        assert!(approx_vec(view.center(), Vec2::new(200.0, 150.0)));
        assert!((view.h() - framed.h()).abs() < EPSILON);
        assert!(framed.contains_rect(&view, EPSILON));

        let mut cam = camera_800x600();
        cam.set_camera_rect(RectF::new(200.0, 150.0, 400.0, 300.0), CameraSettingMode::BaseAndTarget);
        assert_eq!(cam.camera_rect(), RectF::new(200.0, 150.0, 400.0, 300.0));
        assert_eq!(cam.target_camera_rect(), RectF::new(200.0, 150.0, 400.0, 300.0));
    }

    #[test]
    fn test_setting_modes() {
        let mut cam = camera_800x600();
        cam.set_camera(Vec2::new(100.0, 100.0), 2.0, CameraSettingMode::BaseOnly);
        assert_eq!(cam.center(), Vec2::new(100.0, 100.0));
        assert_eq!(cam.target_center(), Vec2::new(400.0, 300.0));

        cam.set_camera(Vec2::new(50.0, 60.0), 3.0, CameraSettingMode::TargetOnly);
        assert_eq!(cam.center(), Vec2::new(100.0, 100.0));
        assert_eq!(cam.target_center(), Vec2::new(50.0, 60.0));
        assert_eq!(cam.target_magnification(), 3.0);

        cam.set_camera(Vec2::new(10.0, 20.0), 5.0, CameraSettingMode::default());
        assert_eq!(cam.center(), Vec2::new(100.0, 100.0));
        assert_eq!(cam.target_center(), Vec2::new(10.0, 20.0));
    }

    #[test]
    fn test_rejects_non_positive_magnification() {
        let mut cam = camera_800x600();
        cam.set_min_magnification(2.0);
        cam.set_camera(Vec2::new(400.0, 300.0), 0.0, CameraSettingMode::BaseAndTarget);
        assert_eq!(cam.magnification(), 2.0);
        cam.set_camera(Vec2::new(400.0, 300.0), f32::NAN, CameraSettingMode::BaseAndTarget);
        assert_eq!(cam.target_magnification(), 2.0);
        cam.set_min_magnification(-1.0);
        assert_eq!(cam.min_magnification(), 2.0);
        cam.set_max_magnification(0.0);
        assert_eq!(cam.max_magnification(), 8.0);
        cam.set_max_magnification(f32::INFINITY);
        assert_eq!(cam.max_magnification(), 8.0);
        cam.set_min_magnification(f32::INFINITY);
        assert_eq!(cam.min_magnification(), 2.0);
    }

    #[test]
    fn test_wheel_past_sensitivity_limit_pins_magnification() {
        // delta = 1 - 0.1 * 10 = 0: magnification goes infinite, clamped to max
        let mut cam = camera_800x600();
        let input = idle().with_cursor(Vec2::new(200.0, 150.0)).with_wheel(-10.0);
        cam.magnify(&input);
        assert!(cam.target_magnification().is_infinite());
        cam.restrict_magnification();
        assert_eq!(cam.target_magnification(), 8.0);
        assert_eq!(cam.target_center(), Vec2::new(200.0, 150.0));

        // delta = -1: magnification goes negative, clamped to min
        let mut cam = camera_800x600();
        cam.update(&idle().with_wheel(-20.0));
        assert_eq!(cam.target_magnification(), 1.0);
        assert!(cam.target_center().is_finite());
        assert_magnification_invariants(&cam);
    }

    #[test]
    fn test_default_restriction_tracks_base_size() {
        let mut cam = camera_800x600();
        cam.set_base_size(Vec2::new(1600.0, 1200.0));
        assert_eq!(cam.restricted_rect(), RectF::new(0.0, 0.0, 1600.0, 1200.0));
        cam.update(&idle());
        assert_eq!(cam.target_magnification(), 1.0);

        cam.set_restricted_rect(RectF::new(0.0, 0.0, 3200.0, 2400.0));
        cam.set_base_size(Vec2::new(800.0, 600.0));
        assert_eq!(cam.restricted_rect(), RectF::new(0.0, 0.0, 3200.0, 2400.0));

        cam.reset_restricted_rect();
        assert_eq!(cam.restricted_rect(), RectF::new(0.0, 0.0, 800.0, 600.0));
        cam.set_base_size(Vec2::new(400.0, 300.0));
        assert_eq!(cam.restricted_rect(), RectF::new(0.0, 0.0, 400.0, 300.0));
    }

    #[test]
    fn test_update_scenario_zoom_out_at_corner_is_clamped() {
        let mut cam = camera_800x600();
        cam.set_camera(Vec2::new(400.0, 300.0), 2.0, CameraSettingMode::BaseAndTarget);
        assert_eq!(cam.camera_rect(), RectF::new(200.0, 150.0, 400.0, 300.0));

        let input = idle().with_cursor(Vec2::new(0.0, 0.0)).with_wheel(1.0);
        let mut probe = camera_800x600();
        probe.set_camera(Vec2::new(400.0, 300.0), 2.0, CameraSettingMode::BaseAndTarget);
        probe.magnify(&input);
        assert!(probe.target_magnification() < 2.0);
        assert!(probe.target_center().x > 400.0 && probe.target_center().y > 300.0);

        for _ in 0..200 {
            cam.update(&input);
            assert_magnification_invariants(&cam);
            assert!(cam.restricted_rect().contains_rect(&cam.target_camera_rect(), EPSILON));
        }
        assert_eq!(cam.target_magnification(), 1.0);
        assert!((cam.magnification() - 1.0).abs() < EPSILON);
        assert!(approx_vec(cam.center(), Vec2::new(400.0, 300.0)));
    }

    #[test]
    fn test_update_keeps_invariants_under_random_input() {
        let mut rng = fastrand::Rng::with_seed(7);
        let mut cam = CursorCamera2D::new(Vec2::new(800.0, 600.0));
        cam.set_restricted_rect(RectF::new(-500.0, -200.0, 2400.0, 1600.0));
        for _ in 0..500 {
            let mut input = idle()
                .with_cursor(Vec2::new(rng.f32() * 800.0, rng.f32() * 600.0))
                .with_wheel(rng.i32(-3..=3) as f32);
            for d in Direction::ALL {
                input.keys.set(d, rng.bool());
            }
            cam.update(&input);
            assert_magnification_invariants(&cam);
            assert!(cam.restricted_rect().contains_rect(&cam.target_camera_rect(), 0.01));
        }
    }

    #[test]
    fn test_transformer_pushes_camera_matrix() {
        let mut cam = camera_800x600();
        cam.set_camera(Vec2::new(100.0, 100.0), 2.0, CameraSettingMode::BaseAndTarget);
        let mut stack = CameraTransformStack::default();
        {
            let t = cam.create_transformer(&mut stack);
            assert_eq!(t.depth(), 1);
            let p = t.current().transform_point2(Vec2::new(100.0, 100.0));
            assert!(approx_vec(p, Vec2::new(400.0, 300.0)));
        }
        assert_eq!(stack.depth(), 0);
    }
}
