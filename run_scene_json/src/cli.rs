use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Casts a fan of rays inside a scene read from a JSON file, and prints where each ray stops.
#[derive(Debug, Parser)]
#[command(name = "run_scene_json")]
pub struct Args {
    /// Path to the scene JSON file
    pub scene: String,

    /// X coordinate of the fan's origin
    #[arg(short, long, allow_negative_numbers = true)]
    pub x: f64,

    /// Y coordinate of the fan's origin
    #[arg(short, long, allow_negative_numbers = true)]
    pub y: f64,

    /// Number of rays in the fan
    #[arg(short, long, default_value_t = 180, value_parser = clap::value_parser!(u32).range(1..))]
    pub rays: u32,

    /// Rays making an angle whose sine is at most this value with a segment
    /// are considered parallel to it. 0 only accepts exact parallelism
    #[arg(long, default_value_t = 0.0)]
    pub parallel_eps: f64,

    /// Write the result to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,

    /// Cast the rays on all available cores
    #[cfg(feature = "rayon")]
    #[arg(long)]
    pub parallel: bool,

    /// Logging level, `RUST_LOG` takes precedence
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
