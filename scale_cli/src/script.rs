//! Line-oriented bench scripts for driving the balance deterministically.
//!
//! One command per line, `#` starts a comment. Time never advances on its
//! own; `wait` moves the test clock forward so long-press behavior is
//! reproducible.

use std::time::Duration;

use eyre::{Result, WrapErr, bail, eyre};
use scale_core::{Point, PointerInput};
use scale_traits::Noise;
use scale_traits::clock::test_clock::TestClock;

use crate::bench::Bench;

/// Scripted walkthrough used by the `demo` subcommand: weigh a reference
/// weight, zero it away, then show the powder container warning.
pub const DEMO_SCRIPT: &str = "\
# Power up and weigh the 50 g reference weight.
power
read
grab weight-50
drop 360 345
read
# Zero it away, then remove it.
zero
read
grab weight-50
drop 80 500
read
# Powder needs a container under it.
grab powder
drop 360 345
read
grab dish
drop 380 330
read
power
read
";

pub fn run_source(source: &str, cfg: &scale_config::Config, noise: Box<dyn Noise>) -> Result<()> {
    let clock = TestClock::new();
    let mut bench = Bench::build(cfg, clock.clone(), noise)?;
    for (idx, raw) in source.lines().enumerate() {
        let line_no = idx + 1;
        run_line(&mut bench, &clock, raw)
            .wrap_err_with(|| format!("script line {line_no}: {}", raw.trim()))?;
    }
    Ok(())
}

fn run_line(bench: &mut Bench, clock: &TestClock, raw: &str) -> Result<()> {
    let line = raw.split('#').next().unwrap_or("").trim();
    let mut words = line.split_whitespace();
    let Some(cmd) = words.next() else {
        return Ok(());
    };
    match cmd {
        "power" => bench.balance.press_power(),
        "zero" => bench.balance.press_zero(),
        "settings-down" => bench.balance.settings_press_start(),
        "settings-up" => bench.balance.settings_press_end(),
        "wait" => {
            let ms: u64 = next_arg(&mut words, "wait <ms>")?
                .parse()
                .map_err(|_| eyre!("wait expects milliseconds"))?;
            clock.advance(Duration::from_millis(ms));
            bench.balance.tick();
        }
        "grab" => {
            let name = next_arg(&mut words, "grab <object>")?;
            let id = bench.object(name).ok_or_else(|| {
                eyre!(
                    "unknown object {:?} (expected one of: {})",
                    name,
                    bench.object_names().collect::<Vec<_>>().join(", ")
                )
            })?;
            let grab = bench
                .balance
                .object_rect(id)
                .ok_or_else(|| eyre!("object {name:?} has no rect"))?
                .center();
            bench.balance.pointer_down(id, &PointerInput::Mouse(grab));
        }
        "drag" => {
            let p = parse_point(&mut words, "drag <x> <y>")?;
            bench.balance.pointer_move(&PointerInput::Mouse(p));
        }
        "drop" => {
            let p = parse_point(&mut words, "drop <x> <y>")?;
            bench.balance.pointer_up(&PointerInput::Mouse(p));
        }
        "scroll" => {
            let p = parse_point(&mut words, "scroll <x> <y>")?;
            bench.balance.set_scroll(p);
        }
        "read" => {
            println!(
                "[{}] {}",
                bench.balance.readout().text(),
                bench.balance.status()
            );
        }
        other => bail!("unknown command {other:?}"),
    }
    Ok(())
}

fn next_arg<'a>(words: &mut impl Iterator<Item = &'a str>, usage: &str) -> Result<&'a str> {
    words.next().ok_or_else(|| eyre!("missing argument, usage: {usage}"))
}

fn parse_point<'a>(words: &mut impl Iterator<Item = &'a str>, usage: &str) -> Result<Point> {
    let x = parse_f32(next_arg(words, usage)?)?;
    let y = parse_f32(next_arg(words, usage)?)?;
    Ok(Point::new(x, y))
}

fn parse_f32(s: &str) -> Result<f32> {
    s.parse().map_err(|_| eyre!("expected a number, got {s:?}"))
}
