/*!
 # Duration parsing

 This module parses duration tokens into the device's native unit,
 hundredths of a second. Bare numbers are taken as-is; an `s` suffix means
 seconds and an `ms` suffix means milliseconds. Results are clamped to the
 range the report format can carry.
*/

use tracing::{instrument, trace};

use crate::{Error, Result};

/// Largest duration the report's two bytes can carry
pub const DURATION_MAX: i32 = 0xFFFF;

/// Device sentinel for "no duration"; only ever produced by clamping
pub const DURATION_NONE: i32 = -1;

fn clamp_duration(centis: f64) -> i32 {
    centis.clamp(DURATION_NONE as f64, DURATION_MAX as f64) as i32
}

/// Parses a duration token into hundredths of a second.
///
/// Out-of-range values clamp silently to [-1, 65535]; only tokens that do
/// not parse as a number, or carry an unknown suffix, are errors. A bare
/// negative number clamps to -1, the device's "cancel" sentinel.
#[instrument]
pub fn parse_duration(token: &str) -> Result<i32> {
    let invalid = || Error::InvalidDuration(token.to_owned());

    // 'ms' suffix means millisecond; sub-10ms precision is lost
    if let Some(number) = token.strip_suffix("ms") {
        let value: f64 = number.parse().map_err(|_| invalid())?;
        return Ok(clamp_duration((value / 10.0).round()));
    }

    // 's' suffix means second
    if let Some(number) = token.strip_suffix('s') {
        let value: f64 = number.parse().map_err(|_| invalid())?;
        return Ok(clamp_duration((value * 100.0).round()));
    }

    // no unit, the number is already in hundredths of a second
    let value: f64 = token.parse().map_err(|_| invalid())?;
    let centis = clamp_duration(value.trunc());
    trace!("parsed bare duration {} -> {}", token, centis);
    Ok(centis)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_number() {
        assert_eq!(parse_duration("50").unwrap(), 50);
    }

    #[test]
    fn bare_number_truncates_toward_zero() {
        assert_eq!(parse_duration("1.9").unwrap(), 1);
        assert_eq!(parse_duration("-0.9").unwrap(), 0);
    }

    #[test]
    fn bare_negative_clamps_to_sentinel() {
        assert_eq!(parse_duration("-1").unwrap(), DURATION_NONE);
        assert_eq!(parse_duration("-500").unwrap(), DURATION_NONE);
    }

    #[test]
    fn bare_number_clamps_to_ceiling() {
        assert_eq!(parse_duration("999999").unwrap(), DURATION_MAX);
    }

    #[test]
    fn seconds_suffix() {
        assert_eq!(parse_duration(".5s").unwrap(), 50);
        assert_eq!(parse_duration("2s").unwrap(), 200);
    }

    #[test]
    fn seconds_suffix_rounds() {
        assert_eq!(parse_duration("0.249s").unwrap(), 25);
    }

    #[test]
    fn seconds_suffix_clamps() {
        assert_eq!(parse_duration("700s").unwrap(), DURATION_MAX);
        assert_eq!(parse_duration("-2s").unwrap(), DURATION_NONE);
    }

    #[test]
    fn milliseconds_suffix() {
        assert_eq!(parse_duration("2000ms").unwrap(), 200);
    }

    #[test]
    fn milliseconds_suffix_rounds() {
        assert_eq!(parse_duration("15ms").unwrap(), 2);
        assert_eq!(parse_duration("4ms").unwrap(), 0);
    }

    #[test]
    fn reject_non_numeric() {
        assert!(parse_duration("abc").is_err());
    }

    #[test]
    fn reject_empty() {
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn reject_suffix_without_number() {
        assert!(parse_duration("s").is_err());
        assert!(parse_duration("ms").is_err());
    }

    #[test]
    fn reject_unknown_suffix() {
        assert!(parse_duration("5m").is_err());
        assert!(parse_duration("5 s").is_err());
    }

    #[test]
    fn reject_garbage_between_number_and_suffix() {
        assert!(parse_duration("1x0ms").is_err());
    }
}
