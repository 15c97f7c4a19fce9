//! Decimal rendering shared by the request encoders and the decoders.

use serde_json::Number;

/// Render a float the way the routing test fixtures spell numbers.
///
/// Integral values carry no fractional part (`13`, not `13.0`) and the output
/// never switches to scientific notation, so `1e-7` renders as `0.0000001`.
/// The shortest representation that round-trips is used, which keeps
/// coordinates exact well below micro-degree resolution. Negative zero
/// renders as `0`.
///
/// # Examples
///
/// ```
/// use harness_core::format_decimal;
///
/// assert_eq!(format_decimal(13.0), "13");
/// assert_eq!(format_decimal(13.0001), "13.0001");
/// assert_eq!(format_decimal(1.0e-7), "0.0000001");
/// ```
#[must_use]
pub fn format_decimal(value: f64) -> String {
    let unsigned_zero = if value == 0.0 { 0.0 } else { value };
    format!("{unsigned_zero}")
}

/// Render a JSON number without introducing a spurious `.0`.
pub(crate) fn format_number(number: &Number) -> String {
    if let Some(value) = number.as_i64() {
        return value.to_string();
    }
    if let Some(value) = number.as_u64() {
        return value.to_string();
    }
    number
        .as_f64()
        .map_or_else(|| number.to_string(), format_decimal)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(13.0, "13")]
    #[case(52.5, "52.5")]
    #[case(-0.1, "-0.1")]
    #[case(13.000_001, "13.000001")]
    #[case(1.0e-7, "0.0000001")]
    #[case(1.5e21, "1500000000000000000000")]
    #[case(-0.0, "0")]
    #[case(0.0, "0")]
    fn renders_without_exponent(#[case] value: f64, #[case] expected: &str) {
        assert_eq!(format_decimal(value), expected);
    }

    #[rstest]
    fn round_trips_micro_degrees() {
        let value = 7.416_839_1;
        let rendered = format_decimal(value);
        let parsed: f64 = rendered.parse().expect("rendered value should parse");
        assert_eq!(parsed.to_bits(), value.to_bits());
    }

    #[rstest]
    fn json_numbers_keep_their_integral_form() {
        let integral: Number = serde_json::from_str("42").expect("integer literal");
        let fractional: Number = serde_json::from_str("4.0").expect("float literal");
        let precise: Number = serde_json::from_str("0.25").expect("float literal");

        assert_eq!(format_number(&integral), "42");
        assert_eq!(format_number(&fractional), "4");
        assert_eq!(format_number(&precise), "0.25");
    }
}
