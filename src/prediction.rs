use chrono::{Duration, NaiveDate};

use crate::models::{CycleProfile, CyclePrediction, Phase};

/// Ovulation is estimated at 14 days before the next period.
const LUTEAL_OFFSET_DAYS: i64 = 14;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PredictionError {
    #[error("invalid last period date: {0:?}")]
    InvalidDate(String),
    #[error("cycle length must be positive, got {0}")]
    InvalidCycleLength(i64),
}

/// Project upcoming cycle events from a profile, evaluated as of `today`.
///
/// Pure function: same profile and same `today` always yield the same
/// prediction. Nothing is persisted.
pub fn predict(
    profile: &CycleProfile,
    today: NaiveDate,
) -> Result<CyclePrediction, PredictionError> {
    if profile.cycle_length_days <= 0 {
        return Err(PredictionError::InvalidCycleLength(profile.cycle_length_days));
    }

    let cycle = Duration::days(profile.cycle_length_days);

    // Advance from the last recorded period until we land on or after today.
    let mut next_period = profile.last_period_start + cycle;
    while next_period < today {
        next_period += cycle;
    }

    let ovulation_date = next_period - Duration::days(LUTEAL_OFFSET_DAYS);
    let fertile_window_start = ovulation_date - Duration::days(2);
    let fertile_window_end = ovulation_date + Duration::days(2);

    // Euclidean remainder keeps this in [0, cycle_length) even if the
    // profile's start date is (improperly) in the future.
    let days_since_period = (today - profile.last_period_start)
        .num_days()
        .rem_euclid(profile.cycle_length_days);
    let current_phase = classify_phase(days_since_period, profile.period_length_days);

    Ok(CyclePrediction {
        next_period_date: next_period,
        ovulation_date,
        fertile_window_start,
        fertile_window_end,
        days_until_next_period: (next_period - today).num_days().max(0),
        current_phase,
        day_of_cycle: days_since_period + 1,
        cycle_length_days: profile.cycle_length_days,
        period_length_days: profile.period_length_days,
        phase_description: current_phase.description(),
        mood_tip: current_phase.mood_tip(),
    })
}

/// Phase from days elapsed since the last period started, first match wins.
/// A non-positive `period_length_days` degenerates to an empty menstrual
/// window rather than an error; see the crate docs.
fn classify_phase(days_since_period: i64, period_length_days: i64) -> Phase {
    if days_since_period < period_length_days {
        Phase::Menstrual
    } else if days_since_period < 13 {
        Phase::Follicular
    } else if days_since_period < 17 {
        Phase::Ovulation
    } else {
        Phase::Luteal
    }
}

/// Human-facing short form ("Feb 03") of a date. Presentation convenience;
/// anything crossing a serialization boundary stays ISO-8601.
pub fn short_date(date: NaiveDate) -> String {
    date.format("%b %d").to_string()
}

impl CyclePrediction {
    /// "Feb 10-Feb 14" style label for the fertile window.
    pub fn fertile_window_label(&self) -> String {
        format!(
            "{}-{}",
            short_date(self.fertile_window_start),
            short_date(self.fertile_window_end)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn profile(start: &str) -> CycleProfile {
        CycleProfile::new(date(start), None, None)
    }

    #[test]
    fn next_period_one_cycle_out() {
        let pred = predict(&profile("2026-02-01"), date("2026-02-20")).unwrap();
        assert_eq!(pred.next_period_date, date("2026-03-01"));
        assert_eq!(pred.days_until_next_period, 9);
    }

    #[test]
    fn next_period_skips_missed_cycles() {
        // Last entry is months stale; projection still lands on/after today.
        let pred = predict(&profile("2025-11-01"), date("2026-02-20")).unwrap();
        assert!(pred.next_period_date >= date("2026-02-20"));
        assert_eq!(pred.next_period_date, date("2026-02-21"));
    }

    #[test]
    fn ovulation_is_fourteen_days_before_next_period() {
        let pred = predict(&profile("2026-02-01"), date("2026-02-20")).unwrap();
        assert_eq!(
            pred.ovulation_date,
            pred.next_period_date - Duration::days(14)
        );
        assert_eq!(pred.ovulation_date, date("2026-02-15"));
    }

    #[test]
    fn fertile_window_spans_four_days_around_ovulation() {
        let pred = predict(&profile("2026-02-01"), date("2026-02-20")).unwrap();
        assert_eq!(
            pred.fertile_window_start,
            pred.ovulation_date - Duration::days(2)
        );
        assert_eq!(
            pred.fertile_window_end - pred.fertile_window_start,
            Duration::days(4)
        );
    }

    #[test]
    fn day_of_cycle_stays_in_bounds() {
        let profile = profile("2026-01-01");
        for offset in 0..120 {
            let today = date("2026-01-01") + Duration::days(offset);
            let pred = predict(&profile, today).unwrap();
            assert!(pred.day_of_cycle >= 1, "day {offset}");
            assert!(
                pred.day_of_cycle <= profile.cycle_length_days,
                "day {offset}"
            );
            assert!(pred.next_period_date >= today, "day {offset}");
            assert!(pred.days_until_next_period >= 0, "day {offset}");
        }
    }

    #[test]
    fn phase_boundaries_for_default_profile() {
        let profile = profile("2026-01-01");
        let expect = |day: i64| match day {
            0..=4 => Phase::Menstrual,
            5..=12 => Phase::Follicular,
            13..=16 => Phase::Ovulation,
            _ => Phase::Luteal,
        };
        for day in 0..28 {
            let today = date("2026-01-01") + Duration::days(day);
            let pred = predict(&profile, today).unwrap();
            assert_eq!(pred.current_phase, expect(day), "day {day}");
            assert_eq!(pred.day_of_cycle, day + 1);
        }
    }

    #[test]
    fn phase_carries_static_texts() {
        let pred = predict(&profile("2026-02-01"), date("2026-02-02")).unwrap();
        assert_eq!(pred.current_phase, Phase::Menstrual);
        assert_eq!(pred.phase_description, Phase::Menstrual.description());
        assert_eq!(pred.mood_tip, Phase::Menstrual.mood_tip());
    }

    #[test]
    fn predict_is_idempotent() {
        let profile = CycleProfile::new(date("2026-02-01"), Some(30), Some(6));
        let today = date("2026-02-20");
        assert_eq!(
            predict(&profile, today).unwrap(),
            predict(&profile, today).unwrap()
        );
    }

    #[test]
    fn zero_or_negative_cycle_length_rejected() {
        for bad in [0, -5] {
            let profile = CycleProfile::new(date("2026-02-01"), Some(bad), None);
            assert_eq!(
                predict(&profile, date("2026-02-20")),
                Err(PredictionError::InvalidCycleLength(bad))
            );
        }
    }

    #[test]
    fn prediction_dates_serialize_as_iso_8601() {
        let pred = predict(&profile("2026-02-01"), date("2026-02-20")).unwrap();
        let json = serde_json::to_value(&pred).unwrap();
        assert_eq!(json["next_period_date"], "2026-03-01");
        assert_eq!(json["ovulation_date"], "2026-02-15");
        assert_eq!(json["current_phase"], "Luteal");
    }

    #[test]
    fn short_date_formats_for_display() {
        let pred = predict(&profile("2026-02-01"), date("2026-02-20")).unwrap();
        assert_eq!(short_date(pred.next_period_date), "Mar 01");
        assert_eq!(pred.fertile_window_label(), "Feb 13-Feb 17");
    }
}
