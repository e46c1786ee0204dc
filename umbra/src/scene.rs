use alloc::vec::Vec;

use log::{debug, warn};

use super::*;

/// Number of segments forming the border of a [`Scene`]
pub const BORDER_LEN: usize = 4;

/// Slack on the segment parameter of border segments, see [`Segment::crossing_within`].
///
/// Keeps rays aimed exactly at a corner from slipping between the two sides meeting there.
pub const BORDER_SLACK: Float = 1e-9;

/// The obstacles rays are cast against.
///
/// A scene always starts with [`BORDER_LEN`] segments, enclosing the rectangle
/// `[0, width] x [0, height]`, in the order: left, top (`y = 0`), right, bottom (`y = height`).
/// They can't be removed. User segments are appended after them, and
/// iteration always happens in insertion order.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    width: Float,
    height: Float,
    segments: Vec<Segment>,
}

impl Scene {
    /// Creates a scene containing only the border of the `width` x `height` rectangle.
    pub fn new(width: Float, height: Float) -> Result<Self, SceneError> {
        let valid = |d: Float| d.is_finite() && d > 0.0;

        if !valid(width) || !valid(height) {
            return Err(SceneError::InvalidDimensions { width, height });
        }

        let top_left = Vector2d::new(0.0, 0.0);
        let top_right = Vector2d::new(width, 0.0);
        let bottom_right = Vector2d::new(width, height);
        let bottom_left = Vector2d::new(0.0, height);

        let mut segments = Vec::with_capacity(BORDER_LEN);
        segments.push(Segment::try_new(top_left, bottom_left)?);
        segments.push(Segment::try_new(top_left, top_right)?);
        segments.push(Segment::try_new(top_right, bottom_right)?);
        segments.push(Segment::try_new(bottom_left, bottom_right)?);

        debug!("new {width} x {height} scene");

        Ok(Self {
            width,
            height,
            segments,
        })
    }

    #[inline]
    #[must_use]
    pub const fn width(&self) -> Float {
        self.width
    }

    #[inline]
    #[must_use]
    pub const fn height(&self) -> Float {
        self.height
    }

    /// All segments, border first.
    #[inline]
    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    #[inline]
    #[must_use]
    pub fn border(&self) -> &[Segment] {
        &self.segments[..BORDER_LEN]
    }

    /// The segments added after creation, in insertion order.
    #[inline]
    #[must_use]
    pub fn user_segments(&self) -> &[Segment] {
        &self.segments[BORDER_LEN..]
    }

    /// Appends the segment from `a` to `b`.
    ///
    /// Fails, leaving `self` untouched, if `a == b` or if a coordinate is not finite.
    pub fn add_segment(
        &mut self,
        a: impl Into<Vector2d>,
        b: impl Into<Vector2d>,
    ) -> Result<(), SceneError> {
        let segment = Segment::try_new(a, b)?;
        debug!("adding segment {segment}");
        self.segments.push(segment);
        Ok(())
    }

    /// Appends already built segments.
    pub fn extend_segments(&mut self, segments: impl IntoIterator<Item = Segment>) {
        let len = self.segments.len();
        self.segments.extend(segments);
        debug!("added {} segments", self.segments.len() - len);
    }

    /// Removes every user segment, the border is kept.
    pub fn clear_user_segments(&mut self) {
        self.segments.truncate(BORDER_LEN);
    }

    /// Returns `true` if `p` is strictly inside the border.
    ///
    /// Every ray cast from such a point hits something.
    #[inline]
    #[must_use]
    pub fn contains(&self, p: &Vector2d) -> bool {
        0.0 < p.x && p.x < self.width && 0.0 < p.y && p.y < self.height
    }

    /// See [`closest_intersection_with`].
    #[inline]
    #[must_use]
    pub fn closest_intersection(&self, ray: &Ray, params: &CastCtx) -> Option<Intersection> {
        closest_intersection_with(ray, self, params)
    }

    fn check_origin(&self, origin: &Vector2d) {
        if !self.contains(origin) {
            warn!(
                "fan origin ({}, {}) is not inside the {} x {} scene, some rays may hit nothing",
                origin.x, origin.y, self.width, self.height
            );
        }
    }

    /// Casts a fan of `ray_count` rays from `origin` against all the segments of this scene.
    ///
    /// See [`cast_fan_with`].
    pub fn cast_fan(
        &self,
        origin: impl Into<Vector2d>,
        ray_count: usize,
        params: &CastCtx,
    ) -> Result<Vec<RayCastResult>, CastError> {
        let origin = origin.into();
        self.check_origin(&origin);
        debug!("scene has {} segments", self.segments.len());
        cast_fan_with(self, origin, ray_count, params)
    }

    /// Parallel version of [`Self::cast_fan`], see [`par_cast_fan_with`].
    #[cfg(feature = "rayon")]
    pub fn par_cast_fan(
        &self,
        origin: impl Into<Vector2d>,
        ray_count: usize,
        params: &CastCtx,
    ) -> Result<Vec<RayCastResult>, CastError> {
        let origin = origin.into();
        self.check_origin(&origin);
        par_cast_fan_with(self, origin, ray_count, params)
    }
}

impl Obstacle for Scene {
    #[inline]
    fn add_hits(&self, ctx: &mut HitCtx<'_>) {
        for side in self.border() {
            let crossing = side.crossing_within(ctx.ray(), ctx.params(), BORDER_SLACK);
            ctx.add_crossing(crossing);
        }

        self.user_segments().add_hits(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;

    fn scene() -> Scene {
        Scene::new(800.0, 800.0).unwrap()
    }

    #[test]
    fn border_encloses_the_rectangle() {
        let s = Scene::new(800.0, 600.0).unwrap();

        assert_eq!(s.segments().len(), BORDER_LEN);
        assert!(s.user_segments().is_empty());
        assert_eq!(
            s.border(),
            [
                Segment::new([0.0, 0.0], [0.0, 600.0]),
                Segment::new([0.0, 0.0], [800.0, 0.0]),
                Segment::new([800.0, 0.0], [800.0, 600.0]),
                Segment::new([0.0, 600.0], [800.0, 600.0]),
            ]
        );
    }

    #[test]
    fn invalid_dimensions() {
        for (w, h) in [(0.0, 10.0), (10.0, -1.0), (Float::NAN, 10.0), (10.0, Float::INFINITY)] {
            assert!(matches!(
                Scene::new(w, h),
                Err(SceneError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn segments_are_appended_in_order() {
        let mut s = scene();
        s.add_segment([1.0, 1.0], [2.0, 2.0]).unwrap();
        s.extend_segments([Segment::new([3.0, 3.0], [4.0, 4.0])]);

        assert_eq!(s.segments().len(), BORDER_LEN + 2);
        assert_eq!(
            s.user_segments(),
            [
                Segment::new([1.0, 1.0], [2.0, 2.0]),
                Segment::new([3.0, 3.0], [4.0, 4.0]),
            ]
        );

        s.clear_user_segments();
        assert_eq!(s, scene());
    }

    #[test]
    fn degenerate_segment_is_rejected() {
        let mut s = scene();
        assert_eq!(
            s.add_segment([5.0, 5.0], [5.0, 5.0]),
            Err(SceneError::Geometry(GeometryError::DegenerateSegment))
        );
        assert_eq!(s, scene());
    }

    #[test]
    fn contains_is_strict() {
        let s = scene();
        assert!(s.contains(&Vector2d::new(400.0, 1.0)));
        assert!(!s.contains(&Vector2d::new(0.0, 400.0)));
        assert!(!s.contains(&Vector2d::new(400.0, 800.0)));
        assert!(!s.contains(&Vector2d::new(-3.0, 400.0)));
    }

    #[test]
    fn wall_hides_the_border() {
        let mut s = scene();
        s.add_segment([400.0, 0.0], [400.0, 800.0]).unwrap();

        let ray = Ray::new([100.0, 400.0], [1.0, 0.0]);
        let hit = s.closest_intersection(&ray, &CastCtx::EXACT).unwrap();

        assert_eq!(hit.point, Vector2d::new(400.0, 400.0));
        assert_eq!(hit.point.dist(&ray.origin), 300.0);
    }

    #[test]
    fn rays_aimed_at_a_corner_hit_it() {
        let s = Scene::new(800.0, 600.0).unwrap();
        let origin = Vector2d::new(459.93599540223977, 140.92177872646258);

        let corners = [[0.0, 0.0], [800.0, 0.0], [800.0, 600.0], [0.0, 600.0]];

        for corner in corners.map(Vector2d::from) {
            let ray = Ray::new(origin, corner - origin);
            let hit = s.closest_intersection(&ray, &CastCtx::EXACT).unwrap();

            assert_approx_eq!(hit.point.x, corner.x, 1e-4);
            assert_approx_eq!(hit.point.y, corner.y, 1e-4);
            assert!((0.0..=1.0).contains(&hit.u));
        }
    }

    #[test]
    fn user_segments_get_no_slack() {
        let mut s = scene();
        s.add_segment([400.0, 300.0], [400.0, 500.0]).unwrap();

        let ray = Ray::new([100.0, 500.0000000001], [1.0, 0.0]);
        let hit = s.closest_intersection(&ray, &CastCtx::EXACT).unwrap();
        assert_eq!(hit.point.x, 800.0);
    }

    #[test]
    fn four_ray_fan_from_a_corner() {
        let results = scene().cast_fan([10.0, 10.0], 4, &CastCtx::EXACT).unwrap();

        let expected = [[800.0, 10.0], [10.0, 800.0], [0.0, 10.0], [10.0, 0.0]];

        assert_eq!(results.len(), 4);
        for (r, [x, y]) in results.iter().zip(expected) {
            let hit = r.hit.unwrap();
            assert_approx_eq!(hit.x, x);
            assert_approx_eq!(hit.y, y);
        }
    }
}
