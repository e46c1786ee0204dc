use std::{error::Error, fs::File, io::BufReader};

use clap::Parser;
use log::{info, LevelFilter};
use umbra::*;
use umbra_json::{serde_json, serialize_fan, JsonDes};

mod cli;

use cli::Args;

fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn cast(args: &Args, scene: &Scene, origin: Vector2d) -> Result<Vec<RayCastResult>, CastError> {
    let params = CastCtx::with_parallel_eps(args.parallel_eps);
    let ray_count = args.rays as usize;

    #[cfg(feature = "rayon")]
    if args.parallel {
        return scene.par_cast_fan(origin, ray_count, &params);
    }

    scene.cast_fan(origin, ray_count, &params)
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_logger(args.log_level.into());

    let json: serde_json::Value = serde_json::from_reader(BufReader::new(File::open(&args.scene)?))?;
    let scene = Scene::from_json(&json)?;

    info!(
        "loaded {}: {} x {}, {} segments",
        args.scene,
        scene.width(),
        scene.height(),
        scene.user_segments().len()
    );

    let origin = Vector2d::new(args.x, args.y);
    let results = cast(&args, &scene, origin)?;

    info!(
        "{} of {} rays hit a segment",
        results.iter().filter(|r| r.hit.is_some()).count(),
        results.len()
    );

    let json = serialize_fan(&origin, &results);

    match &args.output {
        Some(path) => {
            serde_json::to_writer_pretty(File::create(path)?, &json)?;
            info!("result written to {path}");
        }
        None => println!("{}", serde_json::to_string_pretty(&json)?),
    }

    Ok(())
}
