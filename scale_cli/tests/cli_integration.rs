use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn scale() -> Command {
    Command::cargo_bin("scale").expect("binary built")
}

#[test]
fn demo_prints_the_walkthrough_transcript() {
    scale()
        .arg("demo")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[0.0 g] Adjust the zero point and measure the mass.")
                .and(predicate::str::contains("[50.0 g]"))
                .and(predicate::str::contains("[-50.0 g]"))
                .and(predicate::str::contains(
                    "Place powder on a petri dish or weighing paper before measuring.",
                ))
                .and(predicate::str::contains("[] Turn the power on.")),
        );
}

#[test]
fn run_executes_a_script_file() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("weigh.scale");
    fs::write(&path, "power\ngrab weight-100\ndrop 360 345\nread\n").expect("write script");

    scale()
        .args(["--drift", "0", "run", "--script"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[100.0 g] Adjust the zero point and measure the mass.",
        ));
}

#[test]
fn fixed_drift_is_visible_until_zeroed() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("drift.scale");
    fs::write(&path, "power\nread\nzero\nread\n").expect("write script");

    scale()
        .args(["--drift", "0.13", "run", "--script"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("[0.1 g]").and(predicate::str::contains("[0.0 g]")));
}

#[test]
fn seeded_runs_are_reproducible() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("seeded.scale");
    fs::write(&path, "power\nread\n").expect("write script");

    let run = || {
        scale()
            .args(["--seed", "7", "run", "--script"])
            .arg(&path)
            .output()
            .expect("run scale")
    };
    let first = run();
    let second = run();
    assert!(first.status.success());
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn script_errors_carry_line_numbers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("bad.scale");
    fs::write(&path, "power\nbogus\n").expect("write script");

    scale()
        .args(["run", "--script"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("script line 2")
                .and(predicate::str::contains("unknown command")),
        );
}

#[test]
fn unknown_object_lists_the_choices() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("unknown.scale");
    fs::write(&path, "power\ngrab unicorn\n").expect("write script");

    scale()
        .args(["run", "--script"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("unknown object")
                .and(predicate::str::contains("weight-25")),
        );
}

#[test]
fn scripted_long_press_enters_calibration() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("cal.scale");
    fs::write(&path, "power\nsettings-down\nwait 2500\nread\n").expect("write script");

    scale()
        .args(["--drift", "0", "run", "--script"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "[CAL] Calibration mode. Contact your instructor and power-cycle the scale.",
        ));
}

#[test]
fn self_check_passes_with_defaults() {
    scale()
        .arg("self-check")
        .assert()
        .success()
        .stdout(predicate::str::contains("self-check: ok"));
}

#[test]
fn invalid_config_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("scale_config.toml");
    fs::write(&path, "[behavior]\nhold_ms = 0\n").expect("write config");

    scale()
        .arg("--config")
        .arg(&path)
        .arg("self-check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("hold_ms"));
}

#[test]
fn config_overrides_reach_the_readout() {
    let dir = tempfile::tempdir().expect("tempdir");
    let config = dir.path().join("scale_config.toml");
    fs::write(&config, "[masses]\nweight_medium_g = 42.5\n").expect("write config");
    let script = dir.path().join("weigh.scale");
    fs::write(&script, "power\ngrab weight-50\ndrop 360 345\nread\n").expect("write script");

    scale()
        .arg("--config")
        .arg(&config)
        .args(["--drift", "0", "run", "--script"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("[42.5 g]"));
}
