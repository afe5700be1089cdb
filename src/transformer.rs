//! Scoped camera transforms.
//!
//! Renderers keep a stack of world-to-screen transforms. A [`Transformer`]
//! pushes one on construction and pops it when dropped, so the previous frame
//! of reference is restored on every exit path: normal return, early `return`,
//! `?` propagation or unwinding.
//!
//! ```
//! use cursorcamera::resources::cursorcamera2d::CursorCamera2D;
//! use cursorcamera::transformer::CameraTransformStack;
//!
//! let camera = CursorCamera2D::default();
//! let mut stack = CameraTransformStack::default();
//! {
//!     let scope = camera.create_transformer(&mut stack);
//!     assert_eq!(scope.depth(), 1);
//!     // draw world-space content here
//! }
//! assert_eq!(stack.depth(), 0);
//! ```

use glam::Affine2;
use std::ops::{Deref, DerefMut};

/// A stack of transforms a renderer draws through.
pub trait TransformStack {
    /// Make `transform` the active transform, composed with the one below it.
    fn push_transform(&mut self, transform: Affine2);
    /// Restore the transform that was active before the matching push.
    fn pop_transform(&mut self);
}

/// Plain in-memory transform stack.
///
/// Each entry is already composed with its parent, so [`current`](Self::current)
/// is the full world-to-screen transform for the innermost scope.
#[derive(Debug, Clone, Default)]
pub struct CameraTransformStack {
    stack: Vec<Affine2>,
}

impl CameraTransformStack {
    /// Active transform, identity when nothing is pushed.
    pub fn current(&self) -> Affine2 {
        self.stack.last().copied().unwrap_or(Affine2::IDENTITY)
    }

    pub fn depth(&self) -> usize {
        self.stack.len()
    }
}

impl TransformStack for CameraTransformStack {
    fn push_transform(&mut self, transform: Affine2) {
        let composed = self.current() * transform;
        self.stack.push(composed);
    }

    fn pop_transform(&mut self) {
        if self.stack.pop().is_none() {
            log::warn!("pop_transform called on an empty transform stack");
        }
    }
}

/// Guard that keeps a transform pushed for as long as it lives.
///
/// Derefs to the underlying stack so drawing code can keep using it, and
/// nested transformers can be created from it.
pub struct Transformer<'a, S: TransformStack> {
    stack: &'a mut S,
}

impl<'a, S: TransformStack> Transformer<'a, S> {
    pub fn new(stack: &'a mut S, transform: Affine2) -> Self {
        stack.push_transform(transform);
        Self { stack }
    }
}

impl<S: TransformStack> Deref for Transformer<'_, S> {
    type Target = S;

    fn deref(&self) -> &S {
        self.stack
    }
}

impl<S: TransformStack> DerefMut for Transformer<'_, S> {
    fn deref_mut(&mut self) -> &mut S {
        self.stack
    }
}

impl<S: TransformStack> Drop for Transformer<'_, S> {
    fn drop(&mut self) {
        self.stack.pop_transform();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn draw_or_bail(stack: &mut CameraTransformStack, bail: bool) -> Result<usize, String> {
        let scope = Transformer::new(stack, Affine2::from_scale(Vec2::splat(2.0)));
        if bail {
            return Err("bail".to_string());
        }
        Ok(scope.depth())
    }

    #[test]
    fn test_push_pop_restores_identity() {
        let mut stack = CameraTransformStack::default();
        {
            let scope = Transformer::new(&mut stack, Affine2::from_translation(Vec2::new(5.0, 0.0)));
            assert_eq!(scope.depth(), 1);
            assert_eq!(scope.current().transform_point2(Vec2::ZERO), Vec2::new(5.0, 0.0));
        }
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.current(), Affine2::IDENTITY);
    }

    #[test]
    fn test_nested_scopes_compose() {
        let mut stack = CameraTransformStack::default();
        let mut outer = Transformer::new(&mut stack, Affine2::from_translation(Vec2::new(10.0, 0.0)));
        {
            let inner = Transformer::new(&mut *outer, Affine2::from_scale(Vec2::splat(3.0)));
            assert_eq!(inner.depth(), 2);
            // scale first, then the outer translation
            let p = inner.current().transform_point2(Vec2::new(1.0, 1.0));
            assert_eq!(p, Vec2::new(13.0, 3.0));
        }
        assert_eq!(outer.depth(), 1);
        drop(outer);
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_scope_released_on_early_return() {
        let mut stack = CameraTransformStack::default();
        assert_eq!(draw_or_bail(&mut stack, false), Ok(1));
        assert_eq!(stack.depth(), 0);
        assert!(draw_or_bail(&mut stack, true).is_err());
        assert_eq!(stack.depth(), 0);
    }

    #[test]
    fn test_scope_released_on_panic() {
        let mut stack = CameraTransformStack::default();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _scope = Transformer::new(&mut stack, Affine2::IDENTITY);
            panic!("draw failed");
        }));
        assert!(result.is_err());
        assert_eq!(stack.depth(), 0);
    }
}
