use crate::napfa::{GradeSet, Station};

/// Training block targeting one weak station.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationWorkout {
    pub station: Station,
    pub focus: &'static str,
    pub exercises: &'static str,
    pub frequency: &'static str,
    pub tips: &'static str,
}

/// Shown when no station is below the threshold.
pub const MAINTENANCE_PLAN: &str = "All six stations are strong. Mix cardio, \
strength training, and flexibility work 4-5 times per week to stay in top shape.";

fn workout_for(station: Station) -> StationWorkout {
    match station {
        Station::SitUps => StationWorkout {
            station,
            focus: "Core Strength (Sit-ups)",
            exercises: "Planks (3x30s), Bicycle crunches (3x15), Russian twists (3x20)",
            frequency: "4-5 times per week",
            tips: "Focus on slow, controlled movements. Engage your core throughout.",
        },
        Station::BroadJump => StationWorkout {
            station,
            focus: "Explosive Power (Broad Jump)",
            exercises: "Box jumps (3x10), Squat jumps (3x12), Lunge jumps (3x10 each leg)",
            frequency: "3-4 times per week",
            tips: "Land softly and focus on explosive power from your legs.",
        },
        Station::SitAndReach => StationWorkout {
            station,
            focus: "Flexibility (Sit and Reach)",
            exercises: "Hamstring stretches (hold 30s), Toe touches (3x10), \
                        Seated forward bend (hold 45s)",
            frequency: "Daily, especially after workouts",
            tips: "Stretch when muscles are warm. Never bounce, hold steady stretches.",
        },
        Station::PullUps => StationWorkout {
            station,
            focus: "Upper Body Strength (Pull-ups)",
            exercises: "Assisted pull-ups (3x5), Negative pull-ups (3x3), Dead hangs (3x20s)",
            frequency: "3-4 times per week",
            tips: "Build up slowly. Use resistance bands for assistance if needed.",
        },
        Station::ShuttleRun => StationWorkout {
            station,
            focus: "Agility & Speed (Shuttle Run)",
            exercises: "Ladder drills (5 mins), Cone drills (3x5), High knees (3x30s)",
            frequency: "3 times per week",
            tips: "Focus on quick direction changes and a low center of gravity.",
        },
        Station::Run => StationWorkout {
            station,
            focus: "Endurance (2.4km Run)",
            exercises: "Interval training (400m sprints with rest), \
                        Long slow runs (3-5km), Tempo runs",
            frequency: "4-5 times per week",
            tips: "Build endurance gradually. Mix steady runs with interval training.",
        },
    }
}

/// One workout block per station graded below 3, in station order.
/// Empty means every station is at least grade 3; callers show
/// [`MAINTENANCE_PLAN`] instead.
pub fn station_workouts(grades: &GradeSet) -> Vec<StationWorkout> {
    grades.below(3).into_iter().map(workout_for).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::napfa::{aggregate, Gender, TestResult};

    #[test]
    fn test_weak_stations_get_a_block_each() {
        // 14M: strong sit-ups, everything else below grade 3.
        let scores = TestResult {
            sit_ups: 40,
            broad_jump_cm: 100,
            sit_and_reach_cm: 10,
            pull_ups: 0,
            shuttle_run_secs: 13.0,
            run_minutes: 16.0,
        };
        let outcome = aggregate(&scores, 14, Gender::Male).unwrap();
        let plan = station_workouts(&outcome.grades);
        assert_eq!(plan.len(), 5);
        assert!(plan.iter().all(|w| w.station != Station::SitUps));
    }

    #[test]
    fn test_all_strong_means_empty_plan() {
        let scores = TestResult {
            sit_ups: 40,
            broad_jump_cm: 218,
            sit_and_reach_cm: 41,
            pull_ups: 10,
            shuttle_run_secs: 10.2,
            run_minutes: 9.0,
        };
        let outcome = aggregate(&scores, 14, Gender::Male).unwrap();
        assert!(station_workouts(&outcome.grades).is_empty());
    }

    #[test]
    fn test_every_station_has_distinct_focus() {
        let focuses: Vec<&str> = Station::ALL
            .iter()
            .map(|s| workout_for(*s).focus)
            .collect();
        for (i, a) in focuses.iter().enumerate() {
            for b in &focuses[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
