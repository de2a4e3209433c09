use std::time::Duration;

use rstest::rstest;
use scale_core::{Balance, Readout, Rect, StatusMessage};
use scale_traits::FixedNoise;
use scale_traits::clock::test_clock::TestClock;

const HOLD_MS: u64 = 2000;

fn bench() -> (Balance, TestClock) {
    let clock = TestClock::new();
    let balance = Balance::builder()
        .with_pan_rect(Rect::new(100.0, 200.0, 100.0, 50.0))
        .with_hold_ms(HOLD_MS)
        .with_clock(Box::new(clock.clone()))
        .with_noise(Box::new(FixedNoise(0.0)))
        .try_build()
        .expect("build balance");
    (balance, clock)
}

#[test]
fn sustained_press_enters_calibration() {
    let (mut balance, clock) = bench();
    balance.press_power();
    balance.settings_press_start();
    clock.advance(Duration::from_millis(HOLD_MS));
    balance.tick();
    assert!(balance.is_calibrating());
    assert_eq!(balance.readout(), Readout::Cal);
    assert_eq!(balance.readout().text(), "CAL");
    assert_eq!(balance.status(), StatusMessage::Calibrating);
}

#[rstest]
#[case(HOLD_MS - 1, false)]
#[case(HOLD_MS, false)] // a release on the threshold wins over the timer
#[case(HOLD_MS + 1, true)]
fn release_timing_decides_entry(#[case] held_ms: u64, #[case] expect_cal: bool) {
    let (mut balance, clock) = bench();
    balance.press_power();
    balance.settings_press_start();
    clock.advance(Duration::from_millis(held_ms));
    balance.settings_press_end();
    assert_eq!(balance.is_calibrating(), expect_cal);
}

#[test]
fn press_while_off_never_arms() {
    let (mut balance, clock) = bench();
    balance.settings_press_start();
    clock.advance(Duration::from_millis(HOLD_MS * 2));
    balance.tick();
    assert!(!balance.is_calibrating());

    // Not even after powering on with the press notionally still held.
    balance.press_power();
    balance.tick();
    assert!(!balance.is_calibrating());
}

#[test]
fn hold_spanning_power_off_expires_without_effect() {
    let (mut balance, clock) = bench();
    balance.press_power();
    balance.settings_press_start();
    clock.advance(Duration::from_millis(500));
    balance.press_power(); // off mid-hold
    clock.advance(Duration::from_millis(HOLD_MS));
    balance.tick();
    assert!(!balance.is_calibrating());
    balance.press_power();
    assert!(!balance.is_calibrating());
}

#[test]
fn long_press_while_calibrating_is_a_no_op() {
    let (mut balance, clock) = bench();
    balance.press_power();
    balance.settings_press_start();
    clock.advance(Duration::from_millis(HOLD_MS + 1));
    balance.settings_press_end();
    assert!(balance.is_calibrating());

    balance.settings_press_start();
    clock.advance(Duration::from_millis(HOLD_MS + 1));
    balance.tick();
    assert!(balance.is_calibrating());
    assert_eq!(balance.readout(), Readout::Cal);
}

#[test]
fn zero_is_ignored_while_calibrating() {
    let (mut balance, clock) = bench();
    balance.press_power();
    balance.settings_press_start();
    clock.advance(Duration::from_millis(HOLD_MS));
    balance.tick();
    balance.press_zero();
    assert_eq!(balance.readout(), Readout::Cal);
}

#[test]
fn power_cycle_exits_calibration() {
    let (mut balance, clock) = bench();
    balance.press_power();
    balance.settings_press_start();
    clock.advance(Duration::from_millis(HOLD_MS));
    balance.tick();
    assert!(balance.is_calibrating());

    balance.press_power();
    assert!(!balance.is_calibrating());
    assert_eq!(balance.readout(), Readout::Blank);

    balance.press_power();
    assert!(!balance.is_calibrating());
    assert_eq!(balance.readout().text(), "0.0 g");
}
