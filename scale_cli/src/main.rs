//! Balance simulator CLI: scripted sessions, a demo walkthrough, and a
//! self-check, on top of `scale_core`.

mod bench;
mod cli;
mod script;

use std::path::Path;
use std::time::Duration;

use clap::Parser;
use eyre::{Result, WrapErr, ensure, eyre};
use scale_traits::{FixedNoise, Noise, UniformNoise};
use scale_traits::clock::test_clock::TestClock;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

use crate::cli::{Cli, Commands, FILE_GUARD};

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let cfg = load_config(&cli.config)?;
    init_logging(&cli, &cfg)?;

    match &cli.cmd {
        Commands::Demo => {
            // The demo is meant to print the same transcript every run, so
            // drift defaults to zero unless the user asks otherwise.
            let noise: Box<dyn Noise> = match (cli.drift, cli.seed) {
                (Some(g), _) => Box::new(FixedNoise(g)),
                (None, Some(seed)) => Box::new(UniformNoise::seeded(seed)),
                (None, None) => Box::new(FixedNoise(0.0)),
            };
            script::run_source(script::DEMO_SCRIPT, &cfg, noise)
        }
        Commands::Run { script } => {
            let text = std::fs::read_to_string(script)
                .wrap_err_with(|| format!("failed to read script {}", script.display()))?;
            script::run_source(&text, &cfg, pick_noise(&cli))
        }
        Commands::SelfCheck => self_check(&cfg),
    }
}

fn pick_noise(cli: &Cli) -> Box<dyn Noise> {
    match (cli.drift, cli.seed) {
        (Some(g), _) => Box::new(FixedNoise(g)),
        (None, Some(seed)) => Box::new(UniformNoise::seeded(seed)),
        (None, None) => Box::new(UniformNoise::new()),
    }
}

/// Load and validate the config; a missing file falls back to defaults.
fn load_config(path: &Path) -> Result<scale_config::Config> {
    let cfg = if path.exists() {
        let text = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read config {}", path.display()))?;
        scale_config::load_toml(&text)
            .wrap_err_with(|| format!("failed to parse config {}", path.display()))?
    } else {
        scale_config::Config::default()
    };
    cfg.validate()
        .map_err(|e| eyre!("config {}: {e}", path.display()))?;
    Ok(cfg)
}

/// Console layer filtered by --log-level, plus an optional JSON file layer
/// from [logging] in the config.
fn init_logging(cli: &Cli, cfg: &scale_config::Config) -> Result<()> {
    let level = cfg.logging.level.as_deref().unwrap_or(&cli.log_level);
    let filter =
        EnvFilter::try_new(level).map_err(|e| eyre!("invalid log level {level:?}: {e}"))?;

    let console = if cli.json {
        fmt::layer().json().with_writer(std::io::stderr).boxed()
    } else {
        fmt::layer().compact().with_writer(std::io::stderr).boxed()
    };

    let file = match cfg.logging.file.as_deref() {
        Some(path) => {
            let path = Path::new(path);
            let dir = match path.parent() {
                Some(p) if !p.as_os_str().is_empty() => p,
                _ => Path::new("."),
            };
            let name = path
                .file_name()
                .ok_or_else(|| eyre!("logging.file must name a file"))?;
            let appender = match cfg.logging.rotation.as_deref() {
                Some("daily") => tracing_appender::rolling::daily(dir, name),
                Some("hourly") => tracing_appender::rolling::hourly(dir, name),
                _ => tracing_appender::rolling::never(dir, name),
            };
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().json().with_ansi(false).with_writer(writer))
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(console)
        .with(file)
        .try_init()
        .map_err(|e| eyre!("failed to init logging: {e}"))?;
    Ok(())
}

/// Exercise the whole stack once: build the bench, press the buttons, and
/// verify each reading matches.
fn self_check(cfg: &scale_config::Config) -> Result<()> {
    let clock = TestClock::new();
    let mut bench = bench::Bench::build(cfg, clock.clone(), Box::new(FixedNoise(0.0)))?;
    let b = &mut bench.balance;

    ensure!(b.readout().text().is_empty(), "display not blank while off");
    b.press_power();
    ensure!(
        b.readout().text() == "0.0 g",
        "unexpected power-on reading {:?}",
        b.readout().text()
    );

    b.settings_press_start();
    clock.advance(Duration::from_millis(cfg.behavior.hold_ms));
    b.tick();
    ensure!(b.is_calibrating(), "long-press did not enter calibration");
    b.settings_press_end();

    b.press_power();
    b.press_power();
    ensure!(!b.is_calibrating(), "power cycle did not clear calibration");
    ensure!(b.readout().text() == "0.0 g", "reading dirty after restart");

    println!("self-check: ok");
    Ok(())
}
