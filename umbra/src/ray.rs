use super::{vector::is_finite, *};

/// A ray, represented as a half-line: the points `origin + t * direction`, for `t >= 0`.
///
/// `direction` is not required to be normalized, `t` is measured in multiples of it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ray {
    /// The starting point of the half-line
    pub origin: Vector2d,
    /// The direction of the half-line, never zero when built through the constructors
    pub direction: Vector2d,
}

impl Ray {
    /// Returns an error if `direction` is zero, or if any coordinate is not finite.
    #[inline]
    pub fn try_new(
        origin: impl Into<Vector2d>,
        direction: impl Into<Vector2d>,
    ) -> Result<Self, GeometryError> {
        let (origin, direction) = (origin.into(), direction.into());

        if !is_finite(&origin) || !is_finite(&direction) {
            return Err(GeometryError::NonFinite);
        }

        if direction == Vector2d::zeros() {
            return Err(GeometryError::ZeroDirection);
        }

        Ok(Self { origin, direction })
    }

    /// # Panics
    ///
    /// if `direction` is zero, or if any coordinate is not finite
    #[inline]
    #[must_use]
    pub fn new(origin: impl Into<Vector2d>, direction: impl Into<Vector2d>) -> Self {
        match Self::try_new(origin, direction) {
            Ok(ray) => ray,
            Err(e) => panic!("invalid ray: {e}"),
        }
    }

    /// The ray starting at `origin` whose direction is `(1, 0)` rotated by `angle` radians.
    #[inline]
    #[must_use]
    pub fn from_angle(origin: impl Into<Vector2d>, angle: Float) -> Self {
        Self {
            origin: origin.into(),
            direction: Vector2d::x().rotated(angle),
        }
    }

    /// Get the point at parameter `t` (can be negative) along the ray
    #[inline]
    #[must_use]
    pub fn at(&self, t: Float) -> Vector2d {
        self.origin + self.direction * t
    }
}
