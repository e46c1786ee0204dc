mod cli;

use std::{error::Error, fs::File};

use clap::Parser;
use cli::Args;
use log::{info, LevelFilter};
use umbra_json::{serde_json, JsonSer};
use umbra_random::{
    rand::{rngs::StdRng, SeedableRng},
    random_scene,
};

fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    init_logger(args.log_level.into());

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let scene = random_scene(&mut rng, args.width, args.height, args.segments)?;

    serde_json::to_writer_pretty(File::create(&args.output)?, &scene.to_json())?;

    info!(
        "wrote a {} x {} scene with {} segments to {}",
        args.width, args.height, args.segments, args.output
    );

    Ok(())
}
