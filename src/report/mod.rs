//! Weekly progress statistics and rule-based reminders.
//!
//! Everything here is pure over an injected `today`, so the presentation
//! layer decides the clock and tests never depend on wall time.

use chrono::{Days, NaiveDate};

use crate::history::{Goal, UserRecord};

/// Counts and totals for the trailing seven days (inclusive of `today`).
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklySummary {
    pub workouts: usize,
    pub exercise_minutes: u32,
    pub sleep_nights: usize,
    pub average_sleep_hours: Option<f64>,
}

fn week_start(today: NaiveDate) -> NaiveDate {
    today - Days::new(7)
}

pub fn weekly_summary(record: &UserRecord, today: NaiveDate) -> WeeklySummary {
    let cutoff = week_start(today);

    let in_week: Vec<_> = record
        .exercises
        .iter()
        .filter(|e| e.date >= cutoff && e.date <= today)
        .collect();
    let exercise_minutes = in_week.iter().map(|e| e.duration_minutes).sum();

    let sleep_in_week: Vec<_> = record
        .sleep_history
        .iter()
        .filter(|s| s.date >= cutoff && s.date <= today)
        .collect();
    let average_sleep_hours = if sleep_in_week.is_empty() {
        None
    } else {
        let total: f64 = sleep_in_week.iter().map(|s| s.total_hours()).sum();
        Some(total / sleep_in_week.len() as f64)
    };

    WeeklySummary {
        workouts: in_week.len(),
        exercise_minutes,
        sleep_nights: sleep_in_week.len(),
        average_sleep_hours,
    }
}

/// Consecutive training days counted back from the most recent workout.
/// A single rest day between sessions (a two-day gap) keeps the streak
/// alive; a longer gap breaks it.
pub fn workout_streak(record: &UserRecord) -> u32 {
    let mut dates: Vec<NaiveDate> = record.exercises.iter().map(|e| e.date).collect();
    dates.sort_unstable();
    dates.dedup();

    let mut streak = 0;
    let mut current: Option<NaiveDate> = None;
    for date in dates.into_iter().rev() {
        match current {
            None => streak = 1,
            Some(later) => {
                if (later - date).num_days() <= 2 {
                    streak += 1;
                } else {
                    break;
                }
            }
        }
        current = Some(date);
    }
    streak
}

/// First-to-last movement of the NAPFA total, with a straight-line
/// projection of the next test when the trend is upward.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NapfaTrend {
    Improved { points: u8, predicted_total: u8 },
    Declined { points: u8 },
    Flat,
}

/// None until at least two tests exist.
pub fn napfa_trend(record: &UserRecord) -> Option<NapfaTrend> {
    let history = &record.napfa_history;
    if history.len() < 2 {
        return None;
    }
    let first = i16::from(history[0].total);
    let last = i16::from(history[history.len() - 1].total);
    let diff = last - first;

    Some(if diff > 0 {
        let per_test = f64::from(diff) / (history.len() - 1) as f64;
        let predicted = (f64::from(last) + per_test).round().min(30.0) as u8;
        NapfaTrend::Improved {
            points: diff as u8,
            predicted_total: predicted,
        }
    } else if diff < 0 {
        NapfaTrend::Declined {
            points: (-diff) as u8,
        }
    } else {
        NapfaTrend::Flat
    })
}

/// Straight-line pacing of one goal's progress percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoalPacing {
    /// Current rate reaches 100% on or before the target date.
    OnTrack { projected_completion: NaiveDate },
    /// Current rate lands short; this is the projected percentage at the
    /// target date.
    Behind { projected_percent: u8 },
    /// Too early to extrapolate (created today, or no progress recorded).
    NoDataYet,
}

pub fn goal_pacing(goal: &Goal, today: NaiveDate) -> GoalPacing {
    let days_passed = (today - goal.created).num_days();
    if days_passed <= 0 || goal.progress == 0 {
        return GoalPacing::NoDataYet;
    }
    let days_remaining = (goal.target_date - today).num_days().max(0);
    let rate = f64::from(goal.progress) / days_passed as f64;
    let projected = f64::from(goal.progress) + rate * days_remaining as f64;

    if projected >= 100.0 {
        let days_to_complete = ((100.0 - f64::from(goal.progress)) / rate).ceil() as u64;
        GoalPacing::OnTrack {
            projected_completion: today + Days::new(days_to_complete),
        }
    } else {
        GoalPacing::Behind {
            projected_percent: projected.round() as u8,
        }
    }
}

const STALE_NAPFA_DAYS: i64 = 30;
const STALE_BMI_DAYS: i64 = 14;
const STALE_EXERCISE_DAYS: i64 = 2;
const GOAL_DEADLINE_WINDOW_DAYS: i64 = 7;

/// Rule-based reminders for `today`, in a fixed order: stale NAPFA, stale
/// BMI, sleep not logged, exercise gap, then approaching goal deadlines.
pub fn reminders(record: &UserRecord, today: NaiveDate) -> Vec<String> {
    let mut out = Vec::new();

    if let Some(last) = record.latest_napfa() {
        let days = (today - last.date).num_days();
        if days > STALE_NAPFA_DAYS {
            out.push(format!(
                "It's been {} days since your last NAPFA test. Consider retesting to track progress.",
                days
            ));
        }
    }

    if let Some(last) = record.latest_bmi() {
        let days = (today - last.date).num_days();
        if days > STALE_BMI_DAYS {
            out.push(format!(
                "Update your BMI - last recorded {} days ago.",
                days
            ));
        }
    }

    match record.latest_sleep() {
        Some(last) if last.date != today => {
            out.push("Don't forget to log your sleep from last night.".to_string());
        }
        None => {
            out.push("Start tracking your sleep for better recovery insights.".to_string());
        }
        _ => {}
    }

    match record.exercises.last() {
        Some(last) => {
            let days = (today - last.date).num_days();
            if days > STALE_EXERCISE_DAYS {
                out.push(format!(
                    "It's been {} days since your last logged workout. Time to get moving!",
                    days
                ));
            }
        }
        None => {
            out.push("Start logging your exercises to track your fitness journey.".to_string());
        }
    }

    for goal in &record.goals {
        let days_until = (goal.target_date - today).num_days();
        if (0..=GOAL_DEADLINE_WINDOW_DAYS).contains(&days_until) {
            out.push(format!(
                "Goal deadline approaching: '{}' in {} days.",
                goal.target, days_until
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::health::SleepQuality;
    use crate::history::{ExerciseEntry, GoalKind, Intensity, NapfaRecord, SleepRecord};
    use crate::napfa::{aggregate, Gender, TestResult};
    use chrono::NaiveTime;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn user() -> UserRecord {
        UserRecord::new("alex".to_string(), 14, Gender::Male)
    }

    fn exercise(on: NaiveDate, minutes: u32) -> ExerciseEntry {
        ExerciseEntry {
            date: on,
            name: "Run".to_string(),
            duration_minutes: minutes,
            intensity: Intensity::Medium,
            notes: String::new(),
        }
    }

    fn sleep(on: NaiveDate, hours: u32, minutes: u32) -> SleepRecord {
        SleepRecord {
            date: on,
            sleep_start: NaiveTime::from_hms_opt(23, 0, 0).unwrap(),
            sleep_end: NaiveTime::from_hms_opt(7, 0, 0).unwrap(),
            hours,
            minutes,
            quality: SleepQuality::Good,
        }
    }

    fn napfa(on: NaiveDate, total_hint: u32) -> NapfaRecord {
        // sit_ups drives the total; the other stations stay constant.
        let scores = TestResult {
            sit_ups: total_hint,
            broad_jump_cm: 200,
            sit_and_reach_cm: 35,
            pull_ups: 8,
            shuttle_run_secs: 10.5,
            run_minutes: 10.5,
        };
        let outcome = aggregate(&scores, 14, Gender::Male).unwrap();
        NapfaRecord {
            date: on,
            age: 14,
            gender: Gender::Male,
            scores,
            grades: outcome.grades,
            total: outcome.total,
            medal: outcome.medal,
        }
    }

    #[test]
    fn test_weekly_summary_window_excludes_old_entries() {
        let today = date(2026, 8, 23);
        let mut record = user();
        record.exercises.push(exercise(date(2026, 8, 10), 60)); // outside
        record.exercises.push(exercise(date(2026, 8, 20), 30));
        record.exercises.push(exercise(date(2026, 8, 22), 45));
        record.sleep_history.push(sleep(date(2026, 8, 1), 8, 0)); // outside
        record.sleep_history.push(sleep(date(2026, 8, 22), 7, 30));

        let summary = weekly_summary(&record, today);
        assert_eq!(summary.workouts, 2);
        assert_eq!(summary.exercise_minutes, 75);
        assert_eq!(summary.sleep_nights, 1);
        assert!((summary.average_sleep_hours.unwrap() - 7.5).abs() < 1e-9);
    }

    #[test]
    fn test_weekly_summary_empty_record() {
        let summary = weekly_summary(&user(), date(2026, 8, 23));
        assert_eq!(summary.workouts, 0);
        assert_eq!(summary.exercise_minutes, 0);
        assert!(summary.average_sleep_hours.is_none());
    }

    #[test]
    fn test_streak_allows_one_rest_day() {
        let mut record = user();
        // 18th, 20th, 22nd: two-day gaps keep the streak alive.
        for d in [18, 20, 22] {
            record.exercises.push(exercise(date(2026, 8, d), 30));
        }
        assert_eq!(workout_streak(&record), 3);
    }

    #[test]
    fn test_streak_broken_by_three_day_gap() {
        let mut record = user();
        record.exercises.push(exercise(date(2026, 8, 10), 30));
        record.exercises.push(exercise(date(2026, 8, 21), 30));
        record.exercises.push(exercise(date(2026, 8, 22), 30));
        assert_eq!(workout_streak(&record), 2);
    }

    #[test]
    fn test_streak_ignores_duplicate_dates() {
        let mut record = user();
        record.exercises.push(exercise(date(2026, 8, 22), 30));
        record.exercises.push(exercise(date(2026, 8, 22), 20));
        assert_eq!(workout_streak(&record), 1);
    }

    #[test]
    fn test_streak_empty_is_zero() {
        assert_eq!(workout_streak(&user()), 0);
    }

    #[test]
    fn test_napfa_trend_needs_two_tests() {
        let mut record = user();
        assert!(napfa_trend(&record).is_none());
        record.napfa_history.push(napfa(date(2026, 6, 1), 24));
        assert!(napfa_trend(&record).is_none());
    }

    #[test]
    fn test_napfa_trend_improvement_projects_next_total() {
        let mut record = user();
        // 14M sit-ups: 24 -> grade 1, 32 -> grade 3. Totals differ by 2.
        record.napfa_history.push(napfa(date(2026, 6, 1), 24));
        record.napfa_history.push(napfa(date(2026, 8, 1), 32));
        let first = record.napfa_history[0].total;
        let last = record.napfa_history[1].total;
        assert_eq!(
            napfa_trend(&record),
            Some(NapfaTrend::Improved {
                points: last - first,
                predicted_total: last + (last - first),
            })
        );
    }

    #[test]
    fn test_napfa_trend_decline_and_flat() {
        let mut record = user();
        record.napfa_history.push(napfa(date(2026, 6, 1), 32));
        record.napfa_history.push(napfa(date(2026, 8, 1), 24));
        assert!(matches!(
            napfa_trend(&record),
            Some(NapfaTrend::Declined { points: 2 })
        ));

        record.napfa_history.clear();
        record.napfa_history.push(napfa(date(2026, 6, 1), 30));
        record.napfa_history.push(napfa(date(2026, 8, 1), 30));
        assert_eq!(napfa_trend(&record), Some(NapfaTrend::Flat));
    }

    fn goal(created: NaiveDate, target_date: NaiveDate, progress: u8) -> Goal {
        Goal {
            kind: GoalKind::Endurance,
            target: "30 min run".to_string(),
            target_date,
            progress,
            created,
        }
    }

    #[test]
    fn test_goal_pacing_on_track() {
        // 50% in 10 days, 20 days remaining: projected well past 100%.
        let today = date(2026, 8, 23);
        let g = goal(date(2026, 8, 13), date(2026, 9, 12), 50);
        match goal_pacing(&g, today) {
            GoalPacing::OnTrack {
                projected_completion,
            } => {
                // 50% remaining at 5%/day = 10 more days.
                assert_eq!(projected_completion, date(2026, 9, 2));
            }
            other => panic!("expected OnTrack, got {:?}", other),
        }
    }

    #[test]
    fn test_goal_pacing_behind() {
        // 10% in 20 days, 5 days remaining: projects to ~13%.
        let today = date(2026, 8, 23);
        let g = goal(date(2026, 8, 3), date(2026, 8, 28), 10);
        assert_eq!(
            goal_pacing(&g, today),
            GoalPacing::Behind {
                projected_percent: 13
            }
        );
    }

    #[test]
    fn test_goal_pacing_without_elapsed_days() {
        let today = date(2026, 8, 23);
        let g = goal(today, date(2026, 9, 23), 0);
        assert_eq!(goal_pacing(&g, today), GoalPacing::NoDataYet);
    }

    #[test]
    fn test_reminders_for_empty_record() {
        let out = reminders(&user(), date(2026, 8, 23));
        assert_eq!(out.len(), 2);
        assert!(out[0].contains("sleep"));
        assert!(out[1].contains("exercises"));
    }

    #[test]
    fn test_reminders_stale_napfa_and_bmi() {
        let today = date(2026, 8, 23);
        let mut record = user();
        record.napfa_history.push(napfa(date(2026, 7, 1), 30)); // 53 days
        record.bmi_history.push(crate::history::BmiRecord {
            date: date(2026, 8, 1), // 22 days
            weight_kg: 55.0,
            height_m: 1.65,
            bmi: 20.2,
            category: crate::health::BmiCategory::Normal,
        });
        record.sleep_history.push(sleep(today, 8, 0));
        record.exercises.push(exercise(today, 30));

        let out = reminders(&record, today);
        assert_eq!(out.len(), 2);
        assert!(out[0].contains("53 days"));
        assert!(out[1].contains("22 days"));
    }

    #[test]
    fn test_reminders_quiet_when_everything_is_fresh() {
        let today = date(2026, 8, 23);
        let mut record = user();
        record.napfa_history.push(napfa(today, 30));
        record.sleep_history.push(sleep(today, 8, 0));
        record.exercises.push(exercise(today, 30));
        assert!(reminders(&record, today).is_empty());
    }

    #[test]
    fn test_reminders_goal_deadline_window() {
        let today = date(2026, 8, 23);
        let mut record = user();
        record.sleep_history.push(sleep(today, 8, 0));
        record.exercises.push(exercise(today, 30));
        record.goals.push(goal(date(2026, 8, 1), date(2026, 8, 28), 50)); // 5 days
        record.goals.push(goal(date(2026, 8, 1), date(2026, 10, 1), 50)); // far out
        record.goals.push(goal(date(2026, 8, 1), date(2026, 8, 20), 50)); // past

        let out = reminders(&record, today);
        assert_eq!(out.len(), 1);
        assert!(out[0].contains("in 5 days"));
    }
}
