//! Axis-aligned world rectangle.
//!
//! Used for the camera's restricted area and for the visible world regions it
//! reports. Coordinates follow screen conventions: `y` grows downwards, so the
//! top-left corner is the minimum and the bottom-right corner the maximum.

use glam::Vec2;

/// Axis-aligned rectangle described by its top-left position and its size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RectF {
    /// Top-left corner.
    pub pos: Vec2,
    /// Width and height.
    pub size: Vec2,
}

impl RectF {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Rectangle of the given size whose center sits at `center`.
    pub fn from_center(center: Vec2, size: Vec2) -> Self {
        Self {
            pos: center - size * 0.5,
            size,
        }
    }

    #[inline]
    pub fn w(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn h(&self) -> f32 {
        self.size.y
    }

    /// Top-left corner.
    #[inline]
    pub fn tl(&self) -> Vec2 {
        self.pos
    }

    /// Bottom-right corner.
    #[inline]
    pub fn br(&self) -> Vec2 {
        self.pos + self.size
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Returns true if `other` lies completely inside `self` (edges may touch).
    ///
    /// `tolerance` widens `self` on every side to absorb floating-point noise.
    pub fn contains_rect(&self, other: &RectF, tolerance: f32) -> bool {
        let (tl, br) = (other.tl(), other.br());
        tl.x >= self.pos.x - tolerance
            && tl.y >= self.pos.y - tolerance
            && br.x <= self.br().x + tolerance
            && br.y <= self.br().y + tolerance
    }
}

#[cfg(feature = "raylib")]
impl From<RectF> for raylib::prelude::Rectangle {
    fn from(r: RectF) -> Self {
        raylib::prelude::Rectangle {
            x: r.pos.x,
            y: r.pos.y,
            width: r.size.x,
            height: r.size.y,
        }
    }
}

/// Raylib vector for a glam point. Both types are foreign, so this can't be a `From` impl.
#[cfg(feature = "raylib")]
pub fn to_vector2(v: Vec2) -> raylib::prelude::Vector2 {
    raylib::prelude::Vector2 { x: v.x, y: v.y }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corners_and_center() {
        let r = RectF::new(10.0, 20.0, 100.0, 50.0);
        assert_eq!(r.tl(), Vec2::new(10.0, 20.0));
        assert_eq!(r.br(), Vec2::new(110.0, 70.0));
        assert_eq!(r.center(), Vec2::new(60.0, 45.0));
        assert_eq!(r.w(), 100.0);
        assert_eq!(r.h(), 50.0);
    }

    #[test]
    fn test_from_center() {
        let r = RectF::from_center(Vec2::new(400.0, 300.0), Vec2::new(400.0, 300.0));
        assert_eq!(r, RectF::new(200.0, 150.0, 400.0, 300.0));
    }

    #[test]
    fn test_contains_rect() {
        let outer = RectF::new(0.0, 0.0, 800.0, 600.0);
        assert!(outer.contains_rect(&RectF::new(0.0, 0.0, 800.0, 600.0), 0.0));
        assert!(outer.contains_rect(&RectF::new(100.0, 100.0, 10.0, 10.0), 0.0));
        assert!(!outer.contains_rect(&RectF::new(-1.0, 0.0, 10.0, 10.0), 0.0));
        assert!(!outer.contains_rect(&RectF::new(795.0, 0.0, 10.0, 10.0), 0.0));
        assert!(outer.contains_rect(&RectF::new(-0.0001, 0.0, 10.0, 10.0), 0.001));
    }

    #[cfg(feature = "raylib")]
    #[test]
    fn test_to_vector2() {
        let v = to_vector2(Vec2::new(3.5, -2.0));
        assert_eq!((v.x, v.y), (3.5, -2.0));
    }
}
