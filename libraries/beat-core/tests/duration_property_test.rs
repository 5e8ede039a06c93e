//! Property tests for duration parsing
//!
//! The player relies on these values for progress-bar math, so any
//! clock string the admin form accepts must map to the right seconds.

use beat_core::{format_clock, parse_duration};
use proptest::prelude::*;

proptest! {
    /// Property: clock notation parses to minutes * 60 + seconds
    #[test]
    fn clock_notation_parses_to_seconds(minutes in 0u32..600, seconds in 0u32..60) {
        let raw = format!("{minutes}:{seconds:02}");
        let parsed = parse_duration(&raw);
        prop_assert_eq!(parsed, Some(f64::from(minutes * 60 + seconds)));
    }

    /// Property: formatting whole seconds gives back the same clock string
    #[test]
    fn format_matches_clock_input(minutes in 0u32..600, seconds in 0u32..60) {
        let total = f64::from(minutes * 60 + seconds);
        prop_assert_eq!(format_clock(total), format!("{minutes}:{seconds:02}"));
    }

    /// Property: parsing never yields a negative or non-finite duration
    #[test]
    fn parsed_duration_is_finite_and_non_negative(raw in "\\PC{0,12}") {
        if let Some(secs) = parse_duration(&raw) {
            prop_assert!(secs.is_finite());
            prop_assert!(secs >= 0.0);
        }
    }
}
