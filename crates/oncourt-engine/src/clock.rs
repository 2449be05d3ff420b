//! Countdown-clock parsing and the elapsed-seconds time axis.
//!
//! The play-by-play feed timestamps every action with the time *remaining*
//! in the current period as a `PT{mm}M{ss.ss}S` string. Everything downstream
//! wants a single monotonically increasing axis instead, so this module
//! converts `(period, clock)` pairs into seconds elapsed since tip-off.
//! Regulation periods are 12 minutes; overtime periods are 5.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Length of a regulation quarter in seconds.
pub const REGULATION_SECONDS: f64 = 720.0;
/// Length of an overtime period in seconds.
pub const OVERTIME_SECONDS: f64 = 300.0;

const REGULATION_PERIODS: u32 = 4;

static PT_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^PT(?:(\d+)M)?(?:(\d+(?:\.\d+)?)S)?$").expect("clock pattern compiles")
});

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("clock {0:?} does not match PT{{mm}}M{{ss.ss}}S")]
pub struct ClockParseError(pub String);

/// Seconds remaining in the period for a PT-format countdown clock.
///
/// Absent minute or second groups default to zero; a string outside the
/// grammar is an error.
pub fn remaining_seconds(clock: &str) -> Result<f64, ClockParseError> {
    let captures = PT_CLOCK
        .captures(clock.trim())
        .ok_or_else(|| ClockParseError(clock.to_string()))?;
    let minutes: f64 = captures
        .get(1)
        .map_or(0.0, |group| group.as_str().parse().unwrap_or(0.0));
    let seconds: f64 = captures
        .get(2)
        .map_or(0.0, |group| group.as_str().parse().unwrap_or(0.0));
    Ok(minutes * 60.0 + seconds)
}

/// Elapsed seconds since tip-off at the start of `period`.
pub fn period_start_elapsed(period: u32) -> f64 {
    if period <= REGULATION_PERIODS {
        f64::from(period.saturating_sub(1)) * REGULATION_SECONDS
    } else {
        f64::from(REGULATION_PERIODS) * REGULATION_SECONDS
            + f64::from(period - REGULATION_PERIODS - 1) * OVERTIME_SECONDS
    }
}

/// Length of `period` in seconds.
pub fn period_length(period: u32) -> f64 {
    if period <= REGULATION_PERIODS {
        REGULATION_SECONDS
    } else {
        OVERTIME_SECONDS
    }
}

/// The full countdown clock shown at the start of `period`.
pub fn period_start_clock(period: u32) -> &'static str {
    if period <= REGULATION_PERIODS {
        "PT12M00.00S"
    } else {
        "PT05M00.00S"
    }
}

/// Converts a `(period, countdown clock)` pair into elapsed seconds since
/// game start.
pub fn elapsed_seconds(period: u32, clock: &str) -> Result<f64, ClockParseError> {
    let remaining = remaining_seconds(clock)?;
    Ok(period_start_elapsed(period) + (period_length(period) - remaining))
}

/// Parses a box-score `"MM:SS"` minutes string into whole seconds.
pub fn parse_minutes(minutes: &str) -> Option<u32> {
    let (minute_part, second_part) = minutes.trim().split_once(':')?;
    let parsed_minutes: u32 = minute_part.parse().ok()?;
    let parsed_seconds: u32 = second_part.parse().ok()?;
    if parsed_seconds >= 60 {
        return None;
    }
    Some(parsed_minutes * 60 + parsed_seconds)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_conversion_table() {
        let cases = [
            (1, "PT12M00.00S", 0.0),
            (1, "PT00M00.00S", 720.0),
            (2, "PT12M00.00S", 720.0),
            (2, "PT00M00.00S", 1440.0),
            (4, "PT00M00.00S", 2880.0),
            (5, "PT05M00.00S", 2880.0),
            (5, "PT00M00.00S", 3180.0),
        ];
        for (period, clock, expected) in cases {
            let elapsed = elapsed_seconds(period, clock).expect("valid clock");
            assert_eq!(elapsed, expected, "period {period} clock {clock}");
        }
    }

    #[test]
    fn fractional_seconds_are_kept() {
        let elapsed = elapsed_seconds(1, "PT00M05.50S").expect("valid clock");
        assert_eq!(elapsed, 714.5);
    }

    #[test]
    fn absent_groups_default_to_zero() {
        assert_eq!(remaining_seconds("PT9M").expect("minutes only"), 540.0);
        assert_eq!(remaining_seconds("PT30S").expect("seconds only"), 30.0);
        assert_eq!(remaining_seconds("PT").expect("empty duration"), 0.0);
    }

    #[test]
    fn rejects_strings_outside_grammar() {
        assert!(remaining_seconds("12:00").is_err());
        assert!(remaining_seconds("PT12M00.00").is_err());
        assert!(remaining_seconds("").is_err());
    }

    #[test]
    fn parses_box_score_minutes() {
        assert_eq!(parse_minutes("35:12"), Some(2112));
        assert_eq!(parse_minutes("0:00"), Some(0));
        assert_eq!(parse_minutes(" 7:05 "), Some(425));
        assert_eq!(parse_minutes("35:70"), None);
        assert_eq!(parse_minutes("DNP"), None);
        assert_eq!(parse_minutes(""), None);
    }
}
