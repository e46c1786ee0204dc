use super::*;

/// An accepted crossing between a ray and a segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Intersection {
    /// `ray.at(t)`
    pub point: Vector2d,
    /// Parameter along the ray, `t >= 0`
    pub t: Float,
    /// Parameter along the segment, `0 <= u <= 1`, `0` being `a` and `1` being `b`
    pub u: Float,
}

/// Outcome of testing a ray against a single segment.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Crossing {
    Hit(Intersection),
    /// The supporting lines cross, but behind the ray's origin, or outside the segment.
    Miss,
    /// The supporting lines are parallel or coincident (this includes zero length operands).
    Degenerate,
}

impl Crossing {
    #[inline]
    #[must_use]
    pub const fn hit(self) -> Option<Intersection> {
        match self {
            Self::Hit(i) => Some(i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn point(self) -> Option<Vector2d> {
        match self {
            Self::Hit(i) => Some(i.point),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        matches!(self, Self::Degenerate)
    }
}

/// Parameters shared by every intersection test of a query.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CastCtx {
    parallel_eps: Float,
}

impl Default for CastCtx {
    #[inline]
    fn default() -> Self {
        Self::EXACT
    }
}

impl CastCtx {
    /// Only an exactly zero determinant counts as parallel.
    pub const EXACT: Self = Self { parallel_eps: 0.0 };

    /// A ray and a segment are considered parallel when the sine of the angle between
    /// them is, in absolute value, at most `eps`.
    ///
    /// Negative or `NaN` values of `eps` are treated as `0`.
    #[inline]
    #[must_use]
    pub fn with_parallel_eps(eps: Float) -> Self {
        Self {
            parallel_eps: if eps > 0.0 { eps } else { 0.0 },
        }
    }

    #[inline]
    #[must_use]
    pub const fn parallel_eps(&self) -> Float {
        self.parallel_eps
    }

    #[inline]
    fn is_parallel(&self, denom: Float, ray: &Ray, segment: &Segment) -> bool {
        if self.parallel_eps == 0.0 {
            return denom == 0.0;
        }

        // |denom| = |ray.direction| * |segment.direction| * |sin(angle)|
        let bound = self.parallel_eps * ray.direction.norm() * segment.length();
        denom * denom <= bound * bound
    }
}

impl Segment {
    /// Tests `ray` against `self`.
    ///
    /// Both are extended to lines, `(x1, y1) = origin`, `(x2, y2) = origin + direction`
    /// for the ray, `(x3, y3) = a`, `(x4, y4) = b` for the segment, and the line-line
    /// intersection is solved in determinant form for the ray parameter `t` and the
    /// segment parameter `u`.
    ///
    /// The crossing is accepted if `t >= 0` (the ray's own origin is eligible) and
    /// `0 <= u <= 1` (both endpoints are part of the segment).
    #[inline]
    #[must_use]
    pub fn crossing(&self, ray: &Ray, ctx: &CastCtx) -> Crossing {
        self.crossing_within(ray, ctx, 0.0)
    }

    /// Same as [`Self::crossing`], but `u` is accepted in `[-slack, 1 + slack]`.
    ///
    /// Accepted values of `u` are clamped back into `[0, 1]`, `point` is still `ray.at(t)`.
    /// Two segments sharing an endpoint can both reject a ray aimed right at that
    /// endpoint, because of rounding. A small slack closes that gap.
    #[must_use]
    pub fn crossing_within(&self, ray: &Ray, ctx: &CastCtx, slack: Float) -> Crossing {
        let (x1, y1) = (ray.origin.x, ray.origin.y);
        let (x2, y2) = (x1 + ray.direction.x, y1 + ray.direction.y);
        let (x3, y3) = (self.a().x, self.a().y);
        let (x4, y4) = (self.b().x, self.b().y);

        let denom = (x1 - x2) * (y3 - y4) - (y1 - y2) * (x3 - x4);

        if ctx.is_parallel(denom, ray, self) {
            return Crossing::Degenerate;
        }

        let t = ((x1 - x3) * (y3 - y4) - (y1 - y3) * (x3 - x4)) / denom;
        let u = -(((x1 - x2) * (y1 - y3) - (y1 - y2) * (x1 - x3)) / denom);

        if t >= 0.0 && (-slack..=1.0 + slack).contains(&u) {
            Crossing::Hit(Intersection {
                point: ray.at(t),
                t,
                u: u.clamp(0.0, 1.0),
            })
        } else {
            Crossing::Miss
        }
    }
}

/// The point where `ray` crosses `segment`, if any.
///
/// Parallel and coincident lines never intersect.
#[inline]
#[must_use]
pub fn intersect(ray: &Ray, segment: &Segment) -> Option<Vector2d> {
    segment.crossing(ray, &CastCtx::EXACT).point()
}
