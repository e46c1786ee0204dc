use core::iter;

use log::debug;
use umbra::*;

pub use rand;

/// Dimensions of the scenes built by [`Random`] implementations
pub const DEFAULT_WIDTH: Float = 800.0;
pub const DEFAULT_HEIGHT: Float = 800.0;

pub trait Random: Sized {
    /// Generate a random value using the provided `rng`
    ///
    /// This method must not fail. If creating a value is faillible, keep trying until success
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self;
}

impl Random for Segment {
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        random_segment(rng, DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl Random for Ray {
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        let origin = random_point(rng, DEFAULT_WIDTH, DEFAULT_HEIGHT);

        loop {
            let direction = Vector2d::new(rng.gen_range(-1.0..1.0), rng.gen_range(-1.0..1.0));

            if let Ok(ray) = Ray::try_new(origin, direction) {
                break ray;
            }
        }
    }
}

impl Random for Scene {
    fn random(rng: &mut (impl rand::Rng + ?Sized)) -> Self {
        const MIN_NUM_SEGMENTS: usize = 0;
        const MAX_NUM_SEGMENTS: usize = 32;
        let n = rng.gen_range(MIN_NUM_SEGMENTS..MAX_NUM_SEGMENTS);

        match random_scene(rng, DEFAULT_WIDTH, DEFAULT_HEIGHT, n) {
            Ok(scene) => scene,
            Err(e) => unreachable!("default scene dimensions are invalid: {e}"),
        }
    }
}

/// A point in `[0, width) x [0, height)`
pub fn random_point(rng: &mut (impl rand::Rng + ?Sized), width: Float, height: Float) -> Vector2d {
    // the rng generates floats in 0.0..1.0, scale the range accordingly
    Vector2d::new(rng.gen::<Float>() * width, rng.gen::<Float>() * height)
}

/// A segment whose endpoints are in `[0, width) x [0, height)`
pub fn random_segment(
    rng: &mut (impl rand::Rng + ?Sized),
    width: Float,
    height: Float,
) -> Segment {
    loop {
        let a = random_point(rng, width, height);
        let b = random_point(rng, width, height);

        if let Ok(segment) = Segment::try_new(a, b) {
            break segment;
        }
    }
}

/// A point strictly inside `scene`'s border.
pub fn random_interior_point(rng: &mut (impl rand::Rng + ?Sized), scene: &Scene) -> Vector2d {
    loop {
        let p = random_point(rng, scene.width(), scene.height());

        if scene.contains(&p) {
            break p;
        }
    }
}

/// A `width` x `height` scene containing `num_segments` random segments.
///
/// Fails if `width` or `height` aren't finite and positive.
pub fn random_scene(
    rng: &mut (impl rand::Rng + ?Sized),
    width: Float,
    height: Float,
    num_segments: usize,
) -> Result<Scene, SceneError> {
    let mut scene = Scene::new(width, height)?;

    scene.extend_segments(
        iter::repeat_with(|| random_segment(rng, width, height)).take(num_segments),
    );

    debug!("generated a scene with {num_segments} random segments");

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn generated_values_are_valid() {
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..256 {
            let s = Segment::random(&mut rng);
            assert_ne!(s.a(), s.b());

            let ray = Ray::random(&mut rng);
            assert_ne!(ray.direction, Vector2d::zeros());
        }
    }

    #[test]
    fn scene_has_the_requested_segments() {
        let mut rng = StdRng::seed_from_u64(11);
        let scene = random_scene(&mut rng, 300.0, 200.0, 20).unwrap();

        assert_eq!(scene.segments().len(), BORDER_LEN + 20);
        for s in scene.user_segments() {
            for p in s.endpoints() {
                assert!((0.0..300.0).contains(&p.x));
                assert!((0.0..200.0).contains(&p.y));
            }
        }
    }

    #[test]
    fn interior_points_are_inside() {
        let mut rng = StdRng::seed_from_u64(3);
        let scene = Scene::random(&mut rng);

        for _ in 0..256 {
            assert!(scene.contains(&random_interior_point(&mut rng, &scene)));
        }
    }

    #[test]
    fn invalid_dimensions_are_an_error() {
        let mut rng = StdRng::seed_from_u64(0);

        assert_eq!(
            random_scene(&mut rng, -1.0, 10.0, 2),
            Err(SceneError::InvalidDimensions {
                width: -1.0,
                height: 10.0
            })
        );
        assert!(random_scene(&mut rng, 10.0, Float::NAN, 0).is_err());
    }
}
