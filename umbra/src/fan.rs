use alloc::vec::Vec;
use core::{f64::consts::TAU, iter::FusedIterator};

use log::{debug, warn};

use super::{vector::is_finite, *};

/// A ray, and the nearest point it hit, if any.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RayCastResult {
    pub ray: Ray,
    pub hit: Option<Vector2d>,
}

impl RayCastResult {
    /// Where to stop drawing this ray: the hit, or the origin when nothing was hit.
    #[inline]
    #[must_use]
    pub fn endpoint(&self) -> Vector2d {
        self.hit.unwrap_or(self.ray.origin)
    }

    /// Distance between the ray's origin and the hit.
    #[inline]
    #[must_use]
    pub fn distance(&self) -> Option<Float> {
        self.hit.map(|p| p.dist(&self.ray.origin))
    }
}

/// Angle between two consecutive rays of a fan of `ray_count` rays.
///
/// `ray_count` must not be zero.
#[inline]
#[must_use]
pub fn angle_step(ray_count: usize) -> Float {
    TAU / ray_count as Float
}

/// The rays of a fan, in increasing angle order, see [`fan_rays`].
#[derive(Clone, Debug, PartialEq)]
pub struct FanRays {
    origin: Vector2d,
    step: Float,
    next: usize,
    count: usize,
}

impl FanRays {
    #[inline]
    #[must_use]
    pub const fn origin(&self) -> &Vector2d {
        &self.origin
    }

    #[inline]
    #[must_use]
    pub const fn step(&self) -> Float {
        self.step
    }

    #[inline]
    fn ray(&self, i: usize) -> Ray {
        Ray::from_angle(self.origin, self.step * i as Float)
    }
}

impl Iterator for FanRays {
    type Item = Ray;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        (self.next < self.count).then(|| {
            let ray = self.ray(self.next);
            self.next += 1;
            ray
        })
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.count - self.next;
        (n, Some(n))
    }
}

impl ExactSizeIterator for FanRays {}

impl FusedIterator for FanRays {}

/// Returns `ray_count` rays starting at `origin`, the `i`th one directed by `(1, 0)`
/// rotated by `i * 2π / ray_count`.
pub fn fan_rays(origin: impl Into<Vector2d>, ray_count: usize) -> Result<FanRays, CastError> {
    let origin = origin.into();

    if ray_count == 0 {
        return Err(CastError::ZeroRayCount);
    }

    if !is_finite(&origin) {
        return Err(CastError::NonFiniteOrigin);
    }

    Ok(FanRays {
        origin,
        step: angle_step(ray_count),
        next: 0,
        count: ray_count,
    })
}

#[inline]
fn cast_one<O: Obstacle + ?Sized>(obstacle: &O, ray: Ray, params: &CastCtx) -> RayCastResult {
    RayCastResult {
        hit: closest_intersection_with(&ray, obstacle, params).map(|hit| hit.point),
        ray,
    }
}

fn report_misses(results: &[RayCastResult]) {
    let misses = results.iter().filter(|r| r.hit.is_none()).count();

    if misses > 0 {
        warn!(
            "{misses} of {} rays hit nothing, is the fan's origin enclosed?",
            results.len()
        );
    }
}

/// Casts a fan of `ray_count` rays from `origin` (see [`fan_rays`]) against `obstacle`.
///
/// The results are in increasing angle order.
pub fn cast_fan_with<O: Obstacle + ?Sized>(
    obstacle: &O,
    origin: impl Into<Vector2d>,
    ray_count: usize,
    params: &CastCtx,
) -> Result<Vec<RayCastResult>, CastError> {
    let rays = fan_rays(origin, ray_count)?;

    debug!(
        "casting {ray_count} rays from ({}, {})",
        rays.origin.x, rays.origin.y
    );

    let results: Vec<_> = rays.map(|ray| cast_one(obstacle, ray, params)).collect();

    report_misses(&results);

    Ok(results)
}

/// [`cast_fan_with`] using exact parallelism checks.
#[inline]
pub fn cast_fan<O: Obstacle + ?Sized>(
    obstacle: &O,
    origin: impl Into<Vector2d>,
    ray_count: usize,
) -> Result<Vec<RayCastResult>, CastError> {
    cast_fan_with(obstacle, origin, ray_count, &CastCtx::EXACT)
}

/// Same as [`cast_fan_with`], but the rays are cast on rayon's thread pool.
///
/// The output is identical, in the same order.
#[cfg(feature = "rayon")]
pub fn par_cast_fan_with<O: Obstacle + Sync + ?Sized>(
    obstacle: &O,
    origin: impl Into<Vector2d>,
    ray_count: usize,
    params: &CastCtx,
) -> Result<Vec<RayCastResult>, CastError> {
    use rayon::prelude::*;

    let rays = fan_rays(origin, ray_count)?;

    debug!(
        "casting {ray_count} rays from ({}, {}) in parallel",
        rays.origin.x, rays.origin.y
    );

    let results: Vec<_> = (0..ray_count)
        .into_par_iter()
        .map(|i| cast_one(obstacle, rays.ray(i), params))
        .collect();

    report_misses(&results);

    Ok(results)
}
