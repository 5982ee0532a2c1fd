/// Returns `true` if the value is finite and has no fractional part.
///
/// # Example
/// ```
/// use stackcalc::util::num::is_integral;
///
/// assert!(is_integral(2.0));
/// assert!(is_integral(-0.0));
/// assert!(!is_integral(2.5));
/// assert!(!is_integral(f64::INFINITY));
/// ```
#[must_use]
pub fn is_integral(value: f64) -> bool {
    value.is_finite() && value.fract() == 0.0
}

/// Formats an evaluation result for output.
///
/// Integral values are printed without a fractional suffix, however large
/// they are, and negative zero prints as `0`. Everything else uses the
/// shortest representation that round-trips, including `inf` and `NaN`.
/// That representation is always positional, never exponent notation, so
/// `1e-7` prints as `0.0000001`.
///
/// # Example
/// ```
/// use stackcalc::util::num::format_number;
///
/// assert_eq!(format_number(2.0), "2");
/// assert_eq!(format_number(-0.0), "0");
/// assert_eq!(format_number(1e20), "100000000000000000000");
/// assert_eq!(format_number(2.5), "2.5");
/// assert_eq!(format_number(0.1 + 0.2), "0.30000000000000004");
/// assert_eq!(format_number(1e-7), "0.0000001");
/// assert_eq!(format_number(f64::INFINITY), "inf");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if is_integral(value) {
        // -0.0 + 0.0 is +0.0
        format!("{:.0}", value + 0.0)
    } else {
        value.to_string()
    }
}
