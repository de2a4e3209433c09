//! CLI argument definitions and shared statics.

use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use std::sync::OnceLock;

pub static FILE_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

#[derive(Parser, Debug)]
#[command(name = "scale", version, about = "Laboratory balance simulator CLI")]
pub struct Cli {
    /// Path to config TOML (typed)
    #[arg(long, value_name = "FILE", default_value = "etc/scale_config.toml")]
    pub config: PathBuf,

    /// Log as JSON lines instead of pretty
    #[arg(long, action = ArgAction::SetTrue)]
    pub json: bool,

    /// Console log level (error|warn|info|debug|trace)
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,

    /// Seed the power-on drift generator for reproducible runs
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,

    /// Pin the power-on drift to a fixed value in grams
    #[arg(long, value_name = "GRAMS", conflicts_with = "seed")]
    pub drift: Option<f32>,

    /// Command to execute
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Walk through a scripted weighing session and print each reading
    Demo,
    /// Execute a bench script file line by line
    Run {
        /// Script file to execute
        #[arg(long, value_name = "FILE")]
        script: PathBuf,
    },
    /// Quick health check (config loads, bench builds, buttons respond)
    SelfCheck,
}
