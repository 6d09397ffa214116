use super::standards::{standards_for, Gender, Station, MAX_AGE, MIN_AGE};

/// Sanity-check the compiled standards tables at startup.
/// Returns all problems at once (not just the first).
///
/// The grading scan relies on cutoffs being strictly monotonic in the scan
/// direction: descending for count/distance stations, ascending for timed
/// ones. A table that violates this would make some grades unreachable.
pub fn validate_standards() -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for age in MIN_AGE..=MAX_AGE {
        for gender in [Gender::Male, Gender::Female] {
            // Ages in range always have a table; a miss here is itself an error.
            let table = match standards_for(age, gender) {
                Ok(t) => t,
                Err(e) => {
                    errors.push(format!("standards[{}][{}]: {}", age, gender, e));
                    continue;
                }
            };

            for station in Station::ALL {
                let standard = table.standard(station);
                for pair in standard.cutoffs.windows(2) {
                    let ordered = if standard.lower_is_better {
                        pair[0] < pair[1]
                    } else {
                        pair[0] > pair[1]
                    };
                    if !ordered {
                        errors.push(format!(
                            "standards[{}][{}].{}: cutoffs not strictly {} ({} then {})",
                            age,
                            gender,
                            station.code(),
                            if standard.lower_is_better {
                                "ascending"
                            } else {
                                "descending"
                            },
                            pair[0],
                            pair[1]
                        ));
                    }
                }
                if standard.cutoffs.iter().any(|c| *c <= 0.0) {
                    errors.push(format!(
                        "standards[{}][{}].{}: non-positive cutoff",
                        age,
                        gender,
                        station.code()
                    ));
                }
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compiled_tables_are_valid() {
        assert_eq!(validate_standards(), Ok(()));
    }

    #[test]
    fn test_monotonicity_check_catches_bad_order() {
        // Exercise the check logic directly: an ascending pair in a
        // descending table must be flagged.
        let cutoffs = [40.0, 36.0, 37.0, 28.0, 24.0];
        let violations: Vec<_> = cutoffs.windows(2).filter(|p| p[0] <= p[1]).collect();
        assert_eq!(violations.len(), 1);
    }
}
