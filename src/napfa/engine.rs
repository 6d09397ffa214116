use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::NapfaError;
use super::standards::{standards_for, Gender, Station};

/// Map a raw score to a grade using one station's cutoffs.
///
/// Cutoffs are ordered grade 5 -> grade 1; the scan stops at the first
/// cutoff the score satisfies, so on an exact tie with a boundary value the
/// more demanding grade wins. A score that meets no cutoff is grade 0
/// (below minimum), which is an outcome, not an error: this function is
/// total over all finite inputs.
pub fn grade(score: f64, cutoffs: &[f64; 5], lower_is_better: bool) -> u8 {
    for (i, cutoff) in cutoffs.iter().enumerate() {
        let met = if lower_is_better {
            score <= *cutoff
        } else {
            score >= *cutoff
        };
        if met {
            return (5 - i) as u8;
        }
    }
    0
}

/// Raw measurements from one test attempt. Field renames keep stored JSON
/// keyed by the station codes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestResult {
    #[serde(rename = "SU")]
    pub sit_ups: u32,
    #[serde(rename = "SBJ")]
    pub broad_jump_cm: u32,
    #[serde(rename = "SAR")]
    pub sit_and_reach_cm: u32,
    #[serde(rename = "PU")]
    pub pull_ups: u32,
    #[serde(rename = "SR")]
    pub shuttle_run_secs: f64,
    #[serde(rename = "RUN")]
    pub run_minutes: f64,
}

impl TestResult {
    /// Raw score for a station as the engine's numeric input.
    pub fn score(&self, station: Station) -> f64 {
        match station {
            Station::SitUps => f64::from(self.sit_ups),
            Station::BroadJump => f64::from(self.broad_jump_cm),
            Station::SitAndReach => f64::from(self.sit_and_reach_cm),
            Station::PullUps => f64::from(self.pull_ups),
            Station::ShuttleRun => self.shuttle_run_secs,
            Station::Run => self.run_minutes,
        }
    }
}

/// Grades for all six stations of one attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeSet(BTreeMap<Station, u8>);

impl GradeSet {
    pub fn get(&self, station: Station) -> u8 {
        self.0.get(&station).copied().unwrap_or(0)
    }

    /// Sum of the six grades, 0-30.
    pub fn total(&self) -> u8 {
        self.0.values().sum()
    }

    /// The weakest grade across all six stations.
    pub fn min_grade(&self) -> u8 {
        self.0.values().copied().min().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Station, u8)> + '_ {
        self.0.iter().map(|(s, g)| (*s, *g))
    }

    /// Stations graded below `threshold`, in station order.
    pub fn below(&self, threshold: u8) -> Vec<Station> {
        self.0
            .iter()
            .filter(|(_, g)| **g < threshold)
            .map(|(s, _)| *s)
            .collect()
    }
}

/// Award tier for one attempt.
///
/// The medal is gated on both the total and the minimum grade: one
/// below-par station caps the award no matter how high the total is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
    #[serde(rename = "No Medal")]
    None,
}

impl Medal {
    pub fn for_scores(total: u8, min_grade: u8) -> Medal {
        if total >= 21 && min_grade >= 3 {
            Medal::Gold
        } else if total >= 15 && min_grade >= 2 {
            Medal::Silver
        } else if total >= 9 && min_grade >= 1 {
            Medal::Bronze
        } else {
            Medal::None
        }
    }
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Medal::Gold => f.write_str("Gold"),
            Medal::Silver => f.write_str("Silver"),
            Medal::Bronze => f.write_str("Bronze"),
            Medal::None => f.write_str("No Medal"),
        }
    }
}

/// The derived outcome of one attempt: per-station grades, their sum, and
/// the medal tier.
#[derive(Debug, Clone, PartialEq)]
pub struct NapfaOutcome {
    pub grades: GradeSet,
    pub total: u8,
    pub medal: Medal,
}

/// Grade a full attempt against the standards for the given age/gender.
///
/// # Errors
///
/// Returns `NapfaError::AgeOutOfRange` for ages outside 12-16; every other
/// input produces a deterministic outcome.
pub fn aggregate(scores: &TestResult, age: u8, gender: Gender) -> Result<NapfaOutcome, NapfaError> {
    let table = standards_for(age, gender)?;

    let mut grades = BTreeMap::new();
    for station in Station::ALL {
        let standard = table.standard(station);
        grades.insert(
            station,
            grade(scores.score(station), &standard.cutoffs, standard.lower_is_better),
        );
    }

    let grades = GradeSet(grades);
    let total = grades.total();
    let medal = Medal::for_scores(total, grades.min_grade());
    Ok(NapfaOutcome {
        grades,
        total,
        medal,
    })
}
