//! Readout and status rendering.

use core::fmt;

use crate::units::cg_to_dg_rounded;

/// What the mass display shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readout {
    /// Powered off: the display is empty.
    Blank,
    /// Calibration mode sentinel.
    Cal,
    /// Net mass in centigrams (raw + drift - tare); may be negative.
    Mass(i32),
}

impl Readout {
    /// Render the display string: empty, `CAL`, or one decimal with a unit
    /// suffix. A value that rounds to `-0.0` is normalized to `0.0`.
    pub fn text(&self) -> String {
        match *self {
            Self::Blank => String::new(),
            Self::Cal => "CAL".to_string(),
            Self::Mass(cg) => format!("{} g", format_mass_cg(cg)),
        }
    }
}

/// Instructional status line accompanying the readout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    /// Scale is off.
    PowerOff,
    /// Locked diagnostic state; only a power-cycle exits.
    Calibrating,
    /// Powder is on the pan with no dish or paper under it.
    NeedsContainer,
    /// Generic measurement prompt.
    Ready,
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::PowerOff => "Turn the power on.",
            Self::Calibrating => {
                "Calibration mode. Contact your instructor and power-cycle the scale."
            }
            Self::NeedsContainer => {
                "Place powder on a petri dish or weighing paper before measuring."
            }
            Self::Ready => "Adjust the zero point and measure the mass.",
        };
        f.write_str(s)
    }
}

/// Format centigrams with one decimal. Rounding is ties-away-from-zero; a
/// result of zero never carries a sign.
pub fn format_mass_cg(cg: i32) -> String {
    let dg = cg_to_dg_rounded(cg);
    let sign = if dg < 0 { "-" } else { "" };
    let mag = (dg as i64).unsigned_abs();
    format!("{sign}{}.{}", mag / 10, mag % 10)
}
