use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::error::NapfaError;

/// Youngest age with a standards table.
pub const MIN_AGE: u8 = 12;
/// Oldest age with a standards table.
pub const MAX_AGE: u8 = 16;

/// The six NAPFA test stations.
///
/// Serialized as the short station codes so stored records match the
/// original score sheets ("SU", "SBJ", ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Station {
    #[serde(rename = "SU")]
    SitUps,
    #[serde(rename = "SBJ")]
    BroadJump,
    #[serde(rename = "SAR")]
    SitAndReach,
    #[serde(rename = "PU")]
    PullUps,
    #[serde(rename = "SR")]
    ShuttleRun,
    #[serde(rename = "RUN")]
    Run,
}

impl Station {
    /// All stations in score-sheet order.
    pub const ALL: [Station; 6] = [
        Station::SitUps,
        Station::BroadJump,
        Station::SitAndReach,
        Station::PullUps,
        Station::ShuttleRun,
        Station::Run,
    ];

    /// Short station code as used on score sheets and in stored records.
    pub fn code(self) -> &'static str {
        match self {
            Station::SitUps => "SU",
            Station::BroadJump => "SBJ",
            Station::SitAndReach => "SAR",
            Station::PullUps => "PU",
            Station::ShuttleRun => "SR",
            Station::Run => "RUN",
        }
    }

    /// Full station name for display.
    pub fn name(self) -> &'static str {
        match self {
            Station::SitUps => "Sit-Ups",
            Station::BroadJump => "Standing Broad Jump",
            Station::SitAndReach => "Sit and Reach",
            Station::PullUps => "Pull-Ups",
            Station::ShuttleRun => "Shuttle Run",
            Station::Run => "2.4km Run",
        }
    }
}

impl std::fmt::Display for Station {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum Gender {
    #[serde(rename = "m")]
    #[value(alias = "m")]
    Male,
    #[serde(rename = "f")]
    #[value(alias = "f")]
    Female,
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Gender::Male => f.write_str("Male"),
            Gender::Female => f.write_str("Female"),
        }
    }
}

/// Cutoffs for one station, ordered from the grade-5 threshold down to the
/// grade-1 threshold. `lower_is_better` is set for the timed stations
/// (shuttle run, 2.4km run) where a smaller raw value is the better result.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Standard {
    pub cutoffs: [f64; 5],
    pub lower_is_better: bool,
}

/// Standards for all six stations of one age/gender group, indexed in
/// `Station::ALL` order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StandardsTable {
    stations: [Standard; 6],
}

impl StandardsTable {
    pub fn standard(&self, station: Station) -> &Standard {
        &self.stations[station as usize]
    }
}

const fn count(cutoffs: [f64; 5]) -> Standard {
    Standard {
        cutoffs,
        lower_is_better: false,
    }
}

const fn timed(cutoffs: [f64; 5]) -> Standard {
    Standard {
        cutoffs,
        lower_is_better: true,
    }
}

// Official standards, one table per age group. Station order: SU, SBJ, SAR,
// PU, SR, RUN. Timed stations are in seconds (SR) and minutes (RUN).
static MALE: [StandardsTable; 5] = [
    // 12
    StandardsTable {
        stations: [
            count([36.0, 32.0, 28.0, 24.0, 20.0]),
            count([198.0, 190.0, 182.0, 174.0, 166.0]),
            count([39.0, 37.0, 34.0, 30.0, 25.0]),
            count([6.0, 5.0, 4.0, 3.0, 2.0]),
            timed([10.8, 11.2, 11.6, 12.1, 12.6]),
            timed([9.67, 10.42, 11.17, 12.0, 12.75]),
        ],
    },
    // 13
    StandardsTable {
        stations: [
            count([38.0, 34.0, 30.0, 26.0, 22.0]),
            count([208.0, 200.0, 192.0, 184.0, 176.0]),
            count([40.0, 38.0, 35.0, 31.0, 26.0]),
            count([8.0, 7.0, 6.0, 5.0, 4.0]),
            timed([10.5, 10.9, 11.3, 11.8, 12.3]),
            timed([9.33, 10.08, 10.83, 11.67, 12.42]),
        ],
    },
    // 14
    StandardsTable {
        stations: [
            count([40.0, 36.0, 32.0, 28.0, 24.0]),
            count([218.0, 210.0, 202.0, 194.0, 186.0]),
            count([41.0, 39.0, 36.0, 32.0, 27.0]),
            count([10.0, 9.0, 8.0, 7.0, 6.0]),
            timed([10.2, 10.6, 11.0, 11.5, 12.0]),
            timed([9.0, 9.75, 10.5, 11.33, 12.08]),
        ],
    },
    // 15
    StandardsTable {
        stations: [
            count([42.0, 38.0, 34.0, 30.0, 26.0]),
            count([228.0, 220.0, 212.0, 204.0, 196.0]),
            count([42.0, 40.0, 37.0, 33.0, 28.0]),
            count([12.0, 11.0, 10.0, 9.0, 8.0]),
            timed([9.9, 10.3, 10.7, 11.2, 11.7]),
            timed([8.67, 9.42, 10.17, 11.0, 11.75]),
        ],
    },
    // 16
    StandardsTable {
        stations: [
            count([44.0, 40.0, 36.0, 32.0, 28.0]),
            count([238.0, 230.0, 222.0, 214.0, 206.0]),
            count([43.0, 41.0, 38.0, 34.0, 29.0]),
            count([14.0, 13.0, 12.0, 11.0, 10.0]),
            timed([9.6, 10.0, 10.4, 10.9, 11.4]),
            timed([8.33, 9.08, 9.83, 10.67, 11.42]),
        ],
    },
];

static FEMALE: [StandardsTable; 5] = [
    // 12
    StandardsTable {
        stations: [
            count([29.0, 25.0, 21.0, 17.0, 13.0]),
            count([167.0, 159.0, 150.0, 141.0, 132.0]),
            count([39.0, 37.0, 34.0, 30.0, 25.0]),
            count([15.0, 13.0, 10.0, 7.0, 3.0]),
            timed([11.5, 11.9, 12.4, 12.9, 13.5]),
            timed([11.0, 11.75, 12.67, 13.42, 14.42]),
        ],
    },
    // 13
    StandardsTable {
        stations: [
            count([31.0, 27.0, 23.0, 19.0, 15.0]),
            count([172.0, 164.0, 155.0, 146.0, 137.0]),
            count([40.0, 38.0, 35.0, 31.0, 26.0]),
            count([16.0, 14.0, 11.0, 8.0, 4.0]),
            timed([11.3, 11.7, 12.2, 12.7, 13.3]),
            timed([10.75, 11.5, 12.42, 13.17, 14.17]),
        ],
    },
    // 14
    StandardsTable {
        stations: [
            count([33.0, 29.0, 25.0, 21.0, 17.0]),
            count([176.0, 168.0, 159.0, 150.0, 141.0]),
            count([41.0, 39.0, 36.0, 32.0, 27.0]),
            count([17.0, 15.0, 12.0, 9.0, 5.0]),
            timed([11.1, 11.5, 12.0, 12.5, 13.1]),
            timed([10.5, 11.25, 12.17, 12.92, 13.92]),
        ],
    },
    // 15
    StandardsTable {
        stations: [
            count([35.0, 31.0, 27.0, 23.0, 19.0]),
            count([180.0, 172.0, 163.0, 154.0, 145.0]),
            count([42.0, 40.0, 37.0, 33.0, 28.0]),
            count([18.0, 16.0, 13.0, 10.0, 6.0]),
            timed([10.9, 11.3, 11.8, 12.3, 12.9]),
            timed([10.25, 11.0, 11.92, 12.67, 13.67]),
        ],
    },
    // 16
    StandardsTable {
        stations: [
            count([37.0, 33.0, 29.0, 25.0, 21.0]),
            count([184.0, 176.0, 167.0, 158.0, 149.0]),
            count([43.0, 41.0, 38.0, 34.0, 29.0]),
            count([19.0, 17.0, 14.0, 11.0, 7.0]),
            timed([10.7, 11.1, 11.6, 12.1, 12.7]),
            timed([10.0, 10.75, 11.67, 12.42, 13.42]),
        ],
    },
];

/// Look up the standards table for an age/gender group.
///
/// # Errors
///
/// Returns `NapfaError::AgeOutOfRange` if `age` is outside 12-16. Ages
/// outside the band have no published table, so this is rejected up front
/// rather than falling back to the nearest group.
pub fn standards_for(age: u8, gender: Gender) -> Result<&'static StandardsTable, NapfaError> {
    if !(MIN_AGE..=MAX_AGE).contains(&age) {
        return Err(NapfaError::AgeOutOfRange(age));
    }
    let idx = (age - MIN_AGE) as usize;
    Ok(match gender {
        Gender::Male => &MALE[idx],
        Gender::Female => &FEMALE[idx],
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_ages_in_range_have_tables() {
        for age in MIN_AGE..=MAX_AGE {
            assert!(standards_for(age, Gender::Male).is_ok());
            assert!(standards_for(age, Gender::Female).is_ok());
        }
    }

    #[test]
    fn test_age_below_range_rejected() {
        assert_eq!(
            standards_for(11, Gender::Male),
            Err(NapfaError::AgeOutOfRange(11))
        );
    }

    #[test]
    fn test_age_above_range_rejected() {
        assert_eq!(
            standards_for(17, Gender::Female),
            Err(NapfaError::AgeOutOfRange(17))
        );
    }

    #[test]
    fn test_known_cutoffs_age_14_male() {
        let table = standards_for(14, Gender::Male).unwrap();
        assert_eq!(table.standard(Station::SitUps).cutoffs[0], 40.0);
        assert_eq!(table.standard(Station::PullUps).cutoffs[0], 10.0);
        let sr = table.standard(Station::ShuttleRun);
        assert!(sr.lower_is_better);
        assert_eq!(sr.cutoffs, [10.2, 10.6, 11.0, 11.5, 12.0]);
    }

    #[test]
    fn test_timed_stations_flagged() {
        let table = standards_for(12, Gender::Female).unwrap();
        for station in Station::ALL {
            let timed = matches!(station, Station::ShuttleRun | Station::Run);
            assert_eq!(table.standard(station).lower_is_better, timed);
        }
    }

    #[test]
    fn test_station_codes_round_trip() {
        for station in Station::ALL {
            let json = serde_json::to_string(&station).unwrap();
            assert_eq!(json, format!("\"{}\"", station.code()));
            let back: Station = serde_json::from_str(&json).unwrap();
            assert_eq!(back, station);
        }
    }

    #[test]
    fn test_gender_serializes_to_single_letter() {
        assert_eq!(serde_json::to_string(&Gender::Male).unwrap(), "\"m\"");
        assert_eq!(serde_json::to_string(&Gender::Female).unwrap(), "\"f\"");
    }
}
