pub mod error;
pub mod standards;
pub mod engine;
pub mod run_time;
pub mod validation;

pub use engine::{aggregate, grade, GradeSet, Medal, NapfaOutcome, TestResult};
pub use error::NapfaError;
pub use run_time::parse_run_time;
pub use standards::{standards_for, Gender, Standard, StandardsTable, Station, MAX_AGE, MIN_AGE};
pub use validation::validate_standards;
