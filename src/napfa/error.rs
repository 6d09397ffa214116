use thiserror::Error;

/// Errors the grading engine can signal before any grade is computed.
///
/// Grading itself is total: once age and gender are validated, every numeric
/// score maps to a grade (0 is the defined below-minimum outcome, not an
/// error).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum NapfaError {
    /// Age has no standards table. Rejected before lookup, never a silent
    /// fallback to a neighbouring age group.
    #[error("age {0} is outside the supported range (12-16)")]
    AgeOutOfRange(u8),

    /// 2.4km run time that doesn't parse as "min:sec".
    #[error("invalid run time '{0}': expected min:sec, e.g. 10:30")]
    InvalidRunTime(String),
}
