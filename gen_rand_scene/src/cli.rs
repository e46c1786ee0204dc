use clap::{Parser, ValueEnum};
use log::LevelFilter;
use umbra::Float;
use umbra_random::{DEFAULT_HEIGHT, DEFAULT_WIDTH};

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

/// Writes a scene with random segments into a JSON file
#[derive(Debug, Parser)]
#[command(name = "gen_rand_scene")]
pub struct Args {
    /// Path to serialize the scene json data to
    pub output: String,

    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: Float,

    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: Float,

    /// Number of segments, the border excluded
    #[arg(short, long, default_value_t = 12)]
    pub segments: usize,

    /// Seed of the random generator, picked from the OS when missing
    #[arg(long)]
    pub seed: Option<u64>,

    /// Logging level, `RUST_LOG` takes precedence
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
