use core::fmt;

use super::{vector::is_finite, *};

/// A finite, undirected line piece, blocking every ray that crosses it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    a: Vector2d,
    b: Vector2d,
    /// `b - a`, never zero
    direction: Vector2d,
}

impl Segment {
    /// Creates the segment from `a` to `b`.
    ///
    /// Returns an error if `a == b`, or if any coordinate is not finite.
    #[inline]
    pub fn try_new(a: impl Into<Vector2d>, b: impl Into<Vector2d>) -> Result<Self, GeometryError> {
        let (a, b) = (a.into(), b.into());

        if !is_finite(&a) || !is_finite(&b) {
            return Err(GeometryError::NonFinite);
        }

        if a == b {
            return Err(GeometryError::DegenerateSegment);
        }

        Ok(Self {
            a,
            b,
            direction: b - a,
        })
    }

    /// A panicking version of [`Self::try_new`]
    ///
    /// # Panics
    ///
    /// if `a == b` or if any coordinate is not finite
    #[inline]
    #[must_use]
    pub fn new(a: impl Into<Vector2d>, b: impl Into<Vector2d>) -> Self {
        match Self::try_new(a, b) {
            Ok(segment) => segment,
            Err(e) => panic!("invalid segment: {e}"),
        }
    }

    #[inline]
    #[must_use]
    pub const fn a(&self) -> &Vector2d {
        &self.a
    }

    #[inline]
    #[must_use]
    pub const fn b(&self) -> &Vector2d {
        &self.b
    }

    #[inline]
    #[must_use]
    pub const fn endpoints(&self) -> [Vector2d; 2] {
        [self.a, self.b]
    }

    /// `b - a`
    #[inline]
    #[must_use]
    pub const fn direction(&self) -> &Vector2d {
        &self.direction
    }

    #[inline]
    #[must_use]
    pub fn length(&self) -> Float {
        self.direction.norm()
    }

    /// Returns `a + u * (b - a)`. `u` in `[0, 1]` lands on the segment.
    #[inline]
    #[must_use]
    pub fn point_at(&self, u: Float) -> Vector2d {
        self.a + self.direction * u
    }
}

impl<U: Into<Vector2d>> TryFrom<[U; 2]> for Segment {
    type Error = GeometryError;

    #[inline]
    fn try_from([a, b]: [U; 2]) -> Result<Self, Self::Error> {
        Self::try_new(a, b)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}) -> ({}, {})",
            self.a.x, self.a.y, self.b.x, self.b.y
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn direction_is_cached() {
        let s = Segment::new([1.0, 2.0], [4.0, 6.0]);
        assert_eq!(*s.direction(), Vector2d::new(3.0, 4.0));
        assert_eq!(s.length(), 5.0);
        assert_eq!(s.endpoints(), [Vector2d::new(1.0, 2.0), Vector2d::new(4.0, 6.0)]);
    }

    #[test]
    fn zero_length_is_rejected() {
        assert_eq!(
            Segment::try_new([3.0, 3.0], [3.0, 3.0]),
            Err(GeometryError::DegenerateSegment)
        );
    }

    #[test]
    fn non_finite_is_rejected() {
        assert_eq!(
            Segment::try_new([Float::NAN, 0.0], [1.0, 1.0]),
            Err(GeometryError::NonFinite)
        );
        assert_eq!(
            Segment::try_from([[0.0, 0.0], [Float::INFINITY, 1.0]]),
            Err(GeometryError::NonFinite)
        );
    }

    #[test]
    #[should_panic(expected = "invalid segment")]
    fn new_panics_on_degenerate() {
        let _ = Segment::new([0.0, 0.0], [0.0, 0.0]);
    }

    #[test]
    fn point_at_parameter() {
        let s = Segment::new([0.0, 0.0], [10.0, 0.0]);
        assert_eq!(s.point_at(0.0), *s.a());
        assert_eq!(s.point_at(1.0), *s.b());
        assert_eq!(s.point_at(0.25), Vector2d::new(2.5, 0.0));
    }

    #[test]
    fn display() {
        let s = Segment::new([0.0, 1.5], [2.0, 3.0]);
        assert_eq!(s.to_string(), "(0, 1.5) -> (2, 3)");
    }
}
