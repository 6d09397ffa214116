use chrono::{Duration, NaiveTime};
use serde::{Deserialize, Serialize};

/// Time slept between going to bed and waking up.
///
/// A wake time earlier than the bed time means the span crossed midnight,
/// so a day is added before differencing (23:00 -> 06:30 is 7h30m, not a
/// negative span).
pub fn sleep_duration(start: NaiveTime, end: NaiveTime) -> Duration {
    let diff = end - start;
    if end < start {
        diff + Duration::hours(24)
    } else {
        diff
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SleepQuality {
    Excellent,
    Good,
    Fair,
    Poor,
}

impl SleepQuality {
    pub fn advice(self) -> &'static str {
        match self {
            SleepQuality::Excellent => "Great job! You're getting enough sleep.",
            SleepQuality::Good => "Good sleep duration. Try to get a bit more.",
            SleepQuality::Fair | SleepQuality::Poor => {
                "You need more sleep. Aim for 8-10 hours per night."
            }
        }
    }
}

impl std::fmt::Display for SleepQuality {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SleepQuality::Excellent => f.write_str("Excellent"),
            SleepQuality::Good => f.write_str("Good"),
            SleepQuality::Fair => f.write_str("Fair"),
            SleepQuality::Poor => f.write_str("Poor"),
        }
    }
}

/// Classify a night's sleep by duration: 8h+ Excellent, 7h+ Good, 6h+ Fair,
/// under 6h Poor. Fractional hours count (7h30m is Good).
pub fn classify_sleep(duration: Duration) -> SleepQuality {
    let hours = duration.num_minutes() as f64 / 60.0;
    if hours >= 8.0 {
        SleepQuality::Excellent
    } else if hours >= 7.0 {
        SleepQuality::Good
    } else if hours >= 6.0 {
        SleepQuality::Fair
    } else {
        SleepQuality::Poor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    #[test]
    fn test_same_day_span() {
        let d = sleep_duration(t(13, 0), t(14, 30));
        assert_eq!(d, Duration::minutes(90));
    }

    #[test]
    fn test_overnight_span_crosses_midnight() {
        // 23:00 to 06:30 next day -> 7h30m
        let d = sleep_duration(t(23, 0), t(6, 30));
        assert_eq!(d, Duration::minutes(7 * 60 + 30));
    }

    #[test]
    fn test_overnight_span_is_good_quality() {
        let d = sleep_duration(t(23, 0), t(6, 30));
        assert_eq!(classify_sleep(d), SleepQuality::Good);
    }

    #[test]
    fn test_quality_thresholds() {
        assert_eq!(classify_sleep(Duration::hours(9)), SleepQuality::Excellent);
        assert_eq!(classify_sleep(Duration::hours(8)), SleepQuality::Excellent);
        assert_eq!(
            classify_sleep(Duration::minutes(7 * 60 + 59)),
            SleepQuality::Good
        );
        assert_eq!(classify_sleep(Duration::hours(7)), SleepQuality::Good);
        assert_eq!(classify_sleep(Duration::hours(6)), SleepQuality::Fair);
        assert_eq!(
            classify_sleep(Duration::minutes(5 * 60 + 59)),
            SleepQuality::Poor
        );
    }

    #[test]
    fn test_identical_times_give_zero_duration() {
        let d = sleep_duration(t(22, 0), t(22, 0));
        assert_eq!(d, Duration::zero());
        assert_eq!(classify_sleep(d), SleepQuality::Poor);
    }
}
