use alloc::{boxed::Box, rc::Rc, sync::Arc, vec::Vec};
use core::ops::Deref;

use impl_trait_for_tuples::impl_for_tuples;
use log::trace;

use super::*;

/// State of a nearest-hit query, shared by all the obstacles it runs against.
#[derive(Clone, Debug, PartialEq)]
pub struct HitCtx<'a> {
    ray: &'a Ray,
    params: &'a CastCtx,
    closest: Option<(Float, Intersection)>,
    tested: usize,
    degenerate: usize,
}

impl<'a> HitCtx<'a> {
    #[inline]
    #[must_use]
    pub fn new(ray: &'a Ray, params: &'a CastCtx) -> Self {
        Self {
            ray,
            params,
            closest: None,
            tested: 0,
            degenerate: 0,
        }
    }

    #[inline]
    pub const fn ray(&self) -> &'a Ray {
        self.ray
    }

    #[inline]
    pub const fn params(&self) -> &'a CastCtx {
        self.params
    }

    /// Records the outcome of one intersection test.
    ///
    /// A hit replaces the current candidate only if it is strictly closer to the
    /// ray's origin, so the first of several equidistant hits is the one kept.
    #[inline]
    pub fn add_crossing(&mut self, crossing: Crossing) {
        self.tested += 1;

        match crossing {
            Crossing::Hit(hit) => {
                let d = hit.point.dist(&self.ray.origin);

                if self.closest.as_ref().map_or(true, |(min, _)| d < *min) {
                    self.closest = Some((d, hit));
                }
            }
            Crossing::Degenerate => self.degenerate += 1,
            Crossing::Miss => {}
        }
    }

    /// The nearest hit recorded so far, and its distance to the ray's origin.
    #[inline]
    pub fn closest(&self) -> Option<(Float, &Intersection)> {
        self.closest.as_ref().map(|(d, hit)| (*d, hit))
    }

    /// Number of intersection tests recorded
    #[inline]
    pub const fn tested(&self) -> usize {
        self.tested
    }

    /// Number of tests that found parallel or coincident lines
    #[inline]
    pub const fn degenerate(&self) -> usize {
        self.degenerate
    }

    #[inline]
    fn into_closest(self) -> Option<Intersection> {
        self.closest.map(|(_, hit)| hit)
    }
}

/// Something rays can't go through.
///
/// Implementors test the ray of `ctx` (see [`HitCtx::ray`]) against each of their parts
/// and report every outcome with [`HitCtx::add_crossing`], in a deterministic order.
/// The context keeps the nearest hit.
///
/// Collections of obstacles (slices, `Vec`s, tuples, ...) are obstacles themselves.
pub trait Obstacle {
    fn add_hits(&self, ctx: &mut HitCtx<'_>);
}

impl Obstacle for Segment {
    #[inline]
    fn add_hits(&self, ctx: &mut HitCtx<'_>) {
        let crossing = self.crossing(ctx.ray(), ctx.params());
        ctx.add_crossing(crossing);
    }
}

#[impl_for_tuples(1, 16)]
impl Obstacle for T {
    for_tuples!( where #( T: Obstacle )* );

    #[inline]
    fn add_hits(&self, ctx: &mut HitCtx<'_>) {
        for_tuples!( #( T.add_hits(ctx); )* );
    }
}

impl<T: Obstacle> Obstacle for [T] {
    #[inline]
    fn add_hits(&self, ctx: &mut HitCtx<'_>) {
        self.iter().for_each(|obstacle| obstacle.add_hits(ctx));
    }
}

impl<const N: usize, T: Obstacle> Obstacle for [T; N] {
    #[inline]
    fn add_hits(&self, ctx: &mut HitCtx<'_>) {
        self.as_slice().add_hits(ctx);
    }
}

// It's clear that all these impls use the `Deref` trait, but writing a blanket impl over all types implementing `Deref`
// makes it impossible to implement it for new types downstream.

impl<T: Obstacle> Obstacle for Vec<T> {
    #[inline]
    fn add_hits(&self, ctx: &mut HitCtx<'_>) {
        self.as_slice().add_hits(ctx);
    }
}

impl<T: Obstacle + ?Sized> Obstacle for Box<T> {
    #[inline]
    fn add_hits(&self, ctx: &mut HitCtx<'_>) {
        self.deref().add_hits(ctx);
    }
}

impl<T: Obstacle + ?Sized> Obstacle for Arc<T> {
    #[inline]
    fn add_hits(&self, ctx: &mut HitCtx<'_>) {
        self.deref().add_hits(ctx);
    }
}

impl<T: Obstacle + ?Sized> Obstacle for Rc<T> {
    #[inline]
    fn add_hits(&self, ctx: &mut HitCtx<'_>) {
        self.deref().add_hits(ctx);
    }
}

impl<T: Obstacle + ?Sized> Obstacle for &T {
    #[inline]
    fn add_hits(&self, ctx: &mut HitCtx<'_>) {
        (*self).add_hits(ctx);
    }
}

impl<T: Obstacle + ?Sized> Obstacle for &mut T {
    #[inline]
    fn add_hits(&self, ctx: &mut HitCtx<'_>) {
        self.deref().add_hits(ctx);
    }
}

/// Returns the hit of `ray` on `obstacle` closest to `ray.origin`, if any.
#[must_use]
pub fn closest_intersection_with<O: Obstacle + ?Sized>(
    ray: &Ray,
    obstacle: &O,
    params: &CastCtx,
) -> Option<Intersection> {
    let mut ctx = HitCtx::new(ray, params);
    obstacle.add_hits(&mut ctx);

    trace!(
        "ray from ({}, {}) towards ({}, {}): {} tests, {} degenerate, nearest at {:?}",
        ray.origin.x,
        ray.origin.y,
        ray.direction.x,
        ray.direction.y,
        ctx.tested(),
        ctx.degenerate(),
        ctx.closest().map(|(d, _)| d),
    );

    ctx.into_closest()
}

/// The point of `obstacle` nearest to `ray.origin` along `ray`, if any.
///
/// Parallel lines are detected exactly, see [`CastCtx::EXACT`].
#[inline]
#[must_use]
pub fn closest_intersection<O: Obstacle + ?Sized>(ray: &Ray, obstacle: &O) -> Option<Vector2d> {
    closest_intersection_with(ray, obstacle, &CastCtx::EXACT).map(|hit| hit.point)
}

impl Ray {
    /// Method form of [`closest_intersection_with`].
    #[inline]
    #[must_use]
    pub fn closest_intersection(
        &self,
        obstacle: &(impl Obstacle + ?Sized),
        params: &CastCtx,
    ) -> Option<Intersection> {
        closest_intersection_with(self, obstacle, params)
    }
}
