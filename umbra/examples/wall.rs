use umbra::{CastCtx, Scene, Vector2dExt};

fn main() {
    let mut scene = Scene::new(800., 800.).unwrap();

    scene.add_segment([400., 0.], [400., 800.]).unwrap();
    scene.add_segment([150., 150.], [250., 120.]).unwrap();
    scene.add_segment([120., 600.], [300., 700.]).unwrap();

    let results = scene.cast_fan([100., 400.], 16, &CastCtx::EXACT).unwrap();

    for r in results {
        let p = r.endpoint();
        println!(
            "{:>6.2} rad -> ({:>7.2}, {:>7.2}), {:>7.2} away",
            r.ray.direction.polar_angle(),
            p.x,
            p.y,
            r.distance().unwrap_or_default(),
        );
    }
}
