use core::f64::consts::TAU;

use nalgebra::{Rotation2, Vector2};

pub type Float = f64;

/// A point or a direction in the plane, depending on context.
///
/// Arithmetic (`+`, `-`, scalar `*`) is provided by `nalgebra`, the rest by [`Vector2dExt`].
pub type Vector2d = Vector2<Float>;

pub trait Vector2dExt {
    /// Returns `self` rotated counterclockwise, around the origin, by `angle` radians.
    #[must_use]
    fn rotated(&self, angle: Float) -> Self;

    /// Euclidean distance between `self` and `other`.
    #[must_use]
    fn dist(&self, other: &Self) -> Float;

    /// The angle between the x axis and `self`, in `[0, 2π)`.
    ///
    /// The zero vector has an angle of `0`.
    #[must_use]
    fn polar_angle(&self) -> Float;
}

impl Vector2dExt for Vector2d {
    #[inline]
    fn rotated(&self, angle: Float) -> Self {
        Rotation2::new(angle) * *self
    }

    #[inline]
    fn dist(&self, other: &Self) -> Float {
        self.metric_distance(other)
    }

    #[inline]
    fn polar_angle(&self) -> Float {
        let a = Rotation2::rotation_between(&Vector2d::x(), self).angle();

        if a >= 0.0 {
            return a;
        }

        // `a` can be so close to zero that wrapping it lands on `TAU` itself
        let wrapped = a + TAU;
        if wrapped < TAU {
            wrapped
        } else {
            0.0
        }
    }
}

/// Returns `true` if both coordinates of `v` are finite.
#[inline]
pub(crate) fn is_finite(v: &Vector2d) -> bool {
    v.iter().all(|c| c.is_finite())
}
