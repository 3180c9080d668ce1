//! Temperature unit conversion and display rounding.
//!
//! Everything the daemon logs goes through 3-significant-figure rounding:
//! the SHT31 reports far more digits than the ±0.3 °C accuracy of the part,
//! and the journal should not pretend otherwise.

/// Significant figures kept for every displayed/logged value.
pub const DISPLAY_SIG_FIGS: u32 = 3;

/// Round `value` to `figs` significant figures, half away from zero.
///
/// Zero and non-finite inputs are returned unchanged.
pub fn round_sig_figs(value: f32, figs: u32) -> f32 {
    debug_assert!(figs > 0);
    if value == 0.0 || !value.is_finite() {
        return value;
    }
    // f64 intermediate so the scale factor does not eat f32 precision.
    let v = f64::from(value);
    let magnitude = v.abs().log10().floor() as i32;
    let factor = 10f64.powi(figs as i32 - 1 - magnitude);
    ((v * factor).round() / factor) as f32
}

/// Convert °C to °F, rounded for display.
pub fn celsius_to_fahrenheit(c: f32) -> f32 {
    round_sig_figs(c * 9.0 / 5.0 + 32.0, DISPLAY_SIG_FIGS)
}

/// Convert °F to °C, rounded for display.
pub fn fahrenheit_to_celsius(f: f32) -> f32 {
    round_sig_figs((f - 32.0) * 5.0 / 9.0, DISPLAY_SIG_FIGS)
}
