//! Fixed-point mass helpers.
//!
//! Internals operate in **centigrams** (cg, 1 cg = 0.01 g) using `i32` for
//! deterministic behavior; the readout rounds cg to one decimal (decigrams).

/// Centigrams per gram.
pub const CG_PER_GRAM: i32 = 100;

/// Quantize a floating-point grams value to integer centigrams (cg), rounding
/// to nearest and clamping to the i32 range. Non-finite values (NaN/±Inf)
/// map to 0.
#[inline]
pub fn quantize_to_cg(x_g: f32) -> i32 {
    if !x_g.is_finite() {
        return 0;
    }
    let scaled = (x_g * CG_PER_GRAM as f32).round();
    if scaled >= i32::MAX as f32 {
        i32::MAX
    } else if scaled <= i32::MIN as f32 {
        i32::MIN
    } else {
        scaled as i32
    }
}

/// Round centigrams to decigrams (one displayed decimal), ties away from zero.
#[inline]
pub fn cg_to_dg_rounded(cg: i32) -> i32 {
    let cg = cg as i64;
    let dg = if cg >= 0 { (cg + 5) / 10 } else { (cg - 5) / 10 };
    dg as i32
}
