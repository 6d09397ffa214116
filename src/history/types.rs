use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::health::{BmiCategory, SleepQuality};
use crate::napfa::{Gender, GradeSet, Medal, TestResult};

/// One completed NAPFA attempt. Immutable once appended: the grades, total
/// and medal are derived at submission time and stored alongside the raw
/// scores so the history never depends on the current table version.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NapfaRecord {
    pub date: NaiveDate,
    pub age: u8,
    pub gender: Gender,
    pub scores: TestResult,
    pub grades: GradeSet,
    pub total: u8,
    pub medal: Medal,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BmiRecord {
    pub date: NaiveDate,
    pub weight_kg: f64,
    pub height_m: f64,
    pub bmi: f64,
    pub category: BmiCategory,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SleepRecord {
    pub date: NaiveDate,
    pub sleep_start: NaiveTime,
    pub sleep_end: NaiveTime,
    pub hours: u32,
    pub minutes: u32,
    pub quality: SleepQuality,
}

impl SleepRecord {
    /// Duration as fractional hours, for averaging.
    pub fn total_hours(&self) -> f64 {
        f64::from(self.hours) + f64::from(self.minutes) / 60.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Intensity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Intensity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intensity::Low => f.write_str("Low"),
            Intensity::Medium => f.write_str("Medium"),
            Intensity::High => f.write_str("High"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseEntry {
    pub date: NaiveDate,
    pub name: String,
    pub duration_minutes: u32,
    pub intensity: Intensity,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum GoalKind {
    WeightLoss,
    MuscleGain,
    NapfaImprovement,
    Endurance,
    Flexibility,
}

impl std::fmt::Display for GoalKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GoalKind::WeightLoss => f.write_str("Weight Loss"),
            GoalKind::MuscleGain => f.write_str("Muscle Gain"),
            GoalKind::NapfaImprovement => f.write_str("NAPFA Improvement"),
            GoalKind::Endurance => f.write_str("Endurance"),
            GoalKind::Flexibility => f.write_str("Flexibility"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub kind: GoalKind,
    /// Free-text target, e.g. "60kg" or "Grade 5 pull-ups".
    pub target: String,
    pub target_date: NaiveDate,
    /// Progress in percent, 0-100.
    pub progress: u8,
    pub created: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ValueEnum)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub fn from_weekday(weekday: chrono::Weekday) -> Day {
        match weekday {
            chrono::Weekday::Mon => Day::Monday,
            chrono::Weekday::Tue => Day::Tuesday,
            chrono::Weekday::Wed => Day::Wednesday,
            chrono::Weekday::Thu => Day::Thursday,
            chrono::Weekday::Fri => Day::Friday,
            chrono::Weekday::Sat => Day::Saturday,
            chrono::Weekday::Sun => Day::Sunday,
        }
    }

    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Day::Monday => f.write_str("Monday"),
            Day::Tuesday => f.write_str("Tuesday"),
            Day::Wednesday => f.write_str("Wednesday"),
            Day::Thursday => f.write_str("Thursday"),
            Day::Friday => f.write_str("Friday"),
            Day::Saturday => f.write_str("Saturday"),
            Day::Sunday => f.write_str("Sunday"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSlot {
    pub day: Day,
    pub activity: String,
    pub time: NaiveTime,
    pub duration_minutes: u32,
}

/// The full per-user document: profile plus every ordered history.
/// This is the unit the store loads and saves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRecord {
    pub version: u32,
    pub name: String,
    pub age: u8,
    pub gender: Gender,
    pub created: DateTime<Utc>,
    #[serde(default)]
    pub bmi_history: Vec<BmiRecord>,
    #[serde(default)]
    pub napfa_history: Vec<NapfaRecord>,
    #[serde(default)]
    pub sleep_history: Vec<SleepRecord>,
    #[serde(default)]
    pub exercises: Vec<ExerciseEntry>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub schedule: Vec<ScheduleSlot>,
}

impl UserRecord {
    /// Create a fresh profile with empty histories, version 1.
    pub fn new(name: String, age: u8, gender: Gender) -> Self {
        Self {
            version: 1,
            name,
            age,
            gender,
            created: Utc::now(),
            bmi_history: Vec::new(),
            napfa_history: Vec::new(),
            sleep_history: Vec::new(),
            exercises: Vec::new(),
            goals: Vec::new(),
            schedule: Vec::new(),
        }
    }

    pub fn latest_napfa(&self) -> Option<&NapfaRecord> {
        self.napfa_history.last()
    }

    pub fn latest_bmi(&self) -> Option<&BmiRecord> {
        self.bmi_history.last()
    }

    pub fn latest_sleep(&self) -> Option<&SleepRecord> {
        self.sleep_history.last()
    }

    /// Mean sleep duration in hours over the whole history.
    pub fn average_sleep_hours(&self) -> Option<f64> {
        if self.sleep_history.is_empty() {
            return None;
        }
        let total: f64 = self.sleep_history.iter().map(SleepRecord::total_hours).sum();
        Some(total / self.sleep_history.len() as f64)
    }

    /// Schedule entries for one day, in insertion order.
    pub fn schedule_for(&self, day: Day) -> Vec<&ScheduleSlot> {
        self.schedule.iter().filter(|s| s.day == day).collect()
    }
}
