use std::io::IsTerminal;

use owo_colors::OwoColorize;
use terminal_size::{terminal_size, Width};

use crate::health::{BmiCategory, BodyType, SleepQuality};
use crate::history::{ExerciseEntry, Goal, ScheduleSlot};
use crate::napfa::{Medal, NapfaOutcome, Station, TestResult};
use crate::report::GoalPacing;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

/// Format minutes into a compact duration ("45m", "1h 30m", "2h")
pub fn format_minutes(minutes: u32) -> String {
    let hours = minutes / 60;
    let rest = minutes % 60;
    if hours == 0 {
        format!("{}m", minutes)
    } else if rest == 0 {
        format!("{}h", hours)
    } else {
        format!("{}h {}m", hours, rest)
    }
}

fn raw_score(scores: &TestResult, station: Station) -> String {
    match station {
        Station::SitUps => format!("{}", scores.sit_ups),
        Station::BroadJump => format!("{} cm", scores.broad_jump_cm),
        Station::SitAndReach => format!("{} cm", scores.sit_and_reach_cm),
        Station::PullUps => format!("{}", scores.pull_ups),
        Station::ShuttleRun => format!("{:.1} s", scores.shuttle_run_secs),
        Station::Run => {
            let total_secs = (scores.run_minutes * 60.0).round() as u32;
            format!("{}:{:02} min", total_secs / 60, total_secs % 60)
        }
    }
}

fn colorize_medal(medal: Medal) -> String {
    match medal {
        Medal::Gold => medal.to_string().yellow().bold().to_string(),
        Medal::Silver => medal.to_string().white().bold().to_string(),
        Medal::Bronze => medal.to_string().red().to_string(),
        Medal::None => medal.to_string().dimmed().to_string(),
    }
}

fn colorize_grade(grade: u8) -> String {
    if grade >= 4 {
        grade.green().to_string()
    } else if grade == 3 {
        grade.yellow().to_string()
    } else {
        grade.red().to_string()
    }
}

/// Format one attempt as a fixed-width table: station, raw score, grade,
/// followed by the total and medal lines.
pub fn format_grade_table(
    outcome: &NapfaOutcome,
    scores: &TestResult,
    use_colors: bool,
) -> String {
    let mut lines = Vec::with_capacity(Station::ALL.len() + 2);
    for station in Station::ALL {
        let grade = outcome.grades.get(station);
        let grade_str = if use_colors {
            colorize_grade(grade)
        } else {
            grade.to_string()
        };
        lines.push(format!(
            "{:<22} {:>10}   Grade {}",
            station.name(),
            raw_score(scores, station),
            grade_str
        ));
    }
    lines.push(format!("{:<22} {:>10}", "Total", outcome.total));
    let medal_str = if use_colors {
        colorize_medal(outcome.medal)
    } else {
        outcome.medal.to_string()
    };
    lines.push(format!("{:<22} {:>10}", "Medal", medal_str));
    lines.join("\n")
}

pub fn format_bmi_summary(
    bmi: f64,
    category: BmiCategory,
    body_type: BodyType,
    use_colors: bool,
) -> String {
    let category_str = if use_colors {
        match category {
            BmiCategory::Normal => category.to_string().green().to_string(),
            BmiCategory::Underweight | BmiCategory::Overweight => {
                category.to_string().yellow().to_string()
            }
            BmiCategory::Obesity => category.to_string().red().to_string(),
        }
    } else {
        category.to_string()
    };
    format!(
        "BMI: {:.1} ({})\nBody type: {} - {}",
        bmi,
        category_str,
        body_type,
        body_type.description()
    )
}

pub fn format_sleep_summary(
    hours: u32,
    minutes: u32,
    quality: SleepQuality,
    use_colors: bool,
) -> String {
    let quality_str = if use_colors {
        match quality {
            SleepQuality::Excellent | SleepQuality::Good => {
                quality.to_string().green().to_string()
            }
            SleepQuality::Fair => quality.to_string().yellow().to_string(),
            SleepQuality::Poor => quality.to_string().red().to_string(),
        }
    } else {
        quality.to_string()
    };
    format!(
        "Slept {}h {:02}m ({})\n{}",
        hours,
        minutes,
        quality_str,
        quality.advice()
    )
}

/// One line per entry: "{date}  {name}  {duration}  {intensity}". Names are
/// truncated to the terminal width when attached to one.
pub fn format_exercise_list(entries: &[ExerciseEntry], use_colors: bool) -> String {
    if entries.is_empty() {
        return "No exercises logged yet.".to_string();
    }

    let term_width = get_terminal_width();
    // date 10 + duration 7 + intensity 6 + separators
    let fixed_width = 10 + 7 + 6 + 6;

    entries
        .iter()
        .map(|e| {
            let name = match term_width {
                Some(width) if width > fixed_width + 10 => truncate(&e.name, width - fixed_width),
                Some(_) => truncate(&e.name, 20),
                None => e.name.clone(),
            };
            let line = format!(
                "{}  {:<7} {:<6} {}",
                e.date,
                format_minutes(e.duration_minutes),
                e.intensity.to_string(),
                name
            );
            if use_colors && e.intensity == crate::history::Intensity::High {
                line.bold().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn pacing_note(pacing: GoalPacing) -> String {
    match pacing {
        GoalPacing::OnTrack {
            projected_completion,
        } => format!("on track, projected done {}", projected_completion),
        GoalPacing::Behind { projected_percent } => {
            format!("behind, projected {}% by target date", projected_percent)
        }
        GoalPacing::NoDataYet => "no progress data yet".to_string(),
    }
}

/// Goals with their pacing verdicts, one per line.
pub fn format_goal_list(goals: &[(&Goal, GoalPacing)], use_colors: bool) -> String {
    if goals.is_empty() {
        return "No goals set yet.".to_string();
    }

    goals
        .iter()
        .map(|(goal, pacing)| {
            let note = pacing_note(*pacing);
            let note = if use_colors {
                match pacing {
                    GoalPacing::OnTrack { .. } => note.green().to_string(),
                    GoalPacing::Behind { .. } => note.yellow().to_string(),
                    GoalPacing::NoDataYet => note.dimmed().to_string(),
                }
            } else {
                note
            };
            format!(
                "{:<18} {:<24} {:>3}%  due {}  ({})",
                goal.kind.to_string(),
                truncate(&goal.target, 24),
                goal.progress,
                goal.target_date,
                note
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Weekly schedule grouped by day, skipping empty days.
pub fn format_schedule(slots: &[&ScheduleSlot]) -> String {
    if slots.is_empty() {
        return "No schedule entries yet.".to_string();
    }

    slots
        .iter()
        .map(|s| {
            format!(
                "{:<10} {}  {:<7} {}",
                s.day.to_string(),
                s.time.format("%H:%M"),
                format_minutes(s.duration_minutes),
                s.activity
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::Intensity;
    use crate::napfa::{aggregate, Gender};
    use chrono::{NaiveDate, NaiveTime};

    fn outcome_and_scores() -> (NapfaOutcome, TestResult) {
        let scores = TestResult {
            sit_ups: 40,
            broad_jump_cm: 218,
            sit_and_reach_cm: 41,
            pull_ups: 10,
            shuttle_run_secs: 10.2,
            run_minutes: 9.0,
        };
        let outcome = aggregate(&scores, 14, Gender::Male).unwrap();
        (outcome, scores)
    }

    #[test]
    fn test_grade_table_without_colors() {
        let (outcome, scores) = outcome_and_scores();
        let table = format_grade_table(&outcome, &scores, false);
        assert!(table.contains("Sit-Ups"));
        assert!(table.contains("Grade 5"));
        assert!(table.contains("Gold"));
        assert_eq!(table.lines().count(), 8);
    }

    #[test]
    fn test_grade_table_run_time_rendering() {
        let (outcome, mut scores) = outcome_and_scores();
        scores.run_minutes = 10.5;
        let table = format_grade_table(&outcome, &scores, false);
        assert!(table.contains("10:30 min"));
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(90), "1h 30m");
        assert_eq!(format_minutes(0), "0m");
    }

    #[test]
    fn test_truncate_short_and_long() {
        assert_eq!(truncate("short", 20), "short");
        assert_eq!(truncate("a very long exercise name", 10), "a very ...");
    }

    #[test]
    fn test_bmi_summary_mentions_body_type() {
        let text = format_bmi_summary(19.5, BmiCategory::Normal, BodyType::Ectomorph, false);
        assert!(text.contains("19.5"));
        assert!(text.contains("Normal"));
        assert!(text.contains("Ectomorph"));
    }

    #[test]
    fn test_sleep_summary_includes_advice() {
        let text = format_sleep_summary(7, 30, SleepQuality::Good, false);
        assert!(text.contains("7h 30m"));
        assert!(text.contains("Good"));
        assert!(text.contains("bit more"));
    }

    #[test]
    fn test_exercise_list_empty_message() {
        assert_eq!(format_exercise_list(&[], false), "No exercises logged yet.");
    }

    #[test]
    fn test_exercise_list_one_line_per_entry() {
        let entries = vec![
            ExerciseEntry {
                date: NaiveDate::from_ymd_opt(2026, 8, 20).unwrap(),
                name: "Run".to_string(),
                duration_minutes: 30,
                intensity: Intensity::Medium,
                notes: String::new(),
            },
            ExerciseEntry {
                date: NaiveDate::from_ymd_opt(2026, 8, 21).unwrap(),
                name: "Swim".to_string(),
                duration_minutes: 90,
                intensity: Intensity::High,
                notes: String::new(),
            },
        ];
        let text = format_exercise_list(&entries, false);
        assert_eq!(text.lines().count(), 2);
        assert!(text.contains("1h 30m"));
    }

    #[test]
    fn test_schedule_rendering() {
        let slot = ScheduleSlot {
            day: crate::history::Day::Monday,
            activity: "Interval run".to_string(),
            time: NaiveTime::from_hms_opt(17, 30, 0).unwrap(),
            duration_minutes: 45,
        };
        let text = format_schedule(&[&slot]);
        assert!(text.contains("Monday"));
        assert!(text.contains("17:30"));
        assert!(text.contains("Interval run"));
    }
}
