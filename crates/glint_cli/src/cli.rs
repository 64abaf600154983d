use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use glint_renderer::{Sampling, DEFAULT_BUCKET_SIZE, DEFAULT_MAX_DEPTH};
use log::LevelFilter;

/// Log levels selectable on the command line
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

/// Pixel sampling mode
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SamplingArg {
    /// One ray through each pixel center
    Center,
    /// Four jittered rays per pixel, averaged
    Jittered,
}

impl From<SamplingArg> for Sampling {
    fn from(arg: SamplingArg) -> Self {
        match arg {
            SamplingArg::Center => Sampling::Center,
            SamplingArg::Jittered => Sampling::Jittered,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "glint")]
#[command(about = "A recursive Whitted-style ray tracer")]
pub struct Args {
    /// Scene description (JSON)
    pub scene: PathBuf,

    /// Output image; format follows the extension (.png, .jpg, .ppm, ...)
    #[arg(short, long, default_value = "render.png")]
    pub output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value_t = 512)]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 512)]
    pub height: u32,

    /// Maximum reflection depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    pub depth: u32,

    #[arg(long, value_enum, default_value = "center")]
    pub sampling: SamplingArg,

    /// Seed for jittered sampling
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Bucket edge length for parallel rendering
    #[arg(long, default_value_t = DEFAULT_BUCKET_SIZE)]
    pub bucket_size: u32,

    /// Render on the calling thread only
    #[arg(long)]
    pub serial: bool,

    /// Set the logging level (RUST_LOG overrides)
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}
