use super::error::NapfaError;

/// Parse a 2.4km run time entered as "min:sec" into fractional minutes.
///
/// "10:30" becomes 10.5. Whitespace around either part is tolerated;
/// anything else (missing colon, non-numeric parts, seconds >= 60) is an
/// `InvalidRunTime` error so the caller can surface it without writing a
/// bad value into the history.
pub fn parse_run_time(s: &str) -> Result<f64, NapfaError> {
    let trimmed = s.trim();
    let invalid = || NapfaError::InvalidRunTime(s.to_string());

    let (min_part, sec_part) = trimmed.split_once(':').ok_or_else(invalid)?;
    let minutes: u32 = min_part.trim().parse().map_err(|_| invalid())?;
    let seconds: u32 = sec_part.trim().parse().map_err(|_| invalid())?;
    if seconds >= 60 {
        return Err(invalid());
    }

    Ok(f64::from(minutes) + f64::from(seconds) / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_typical_time() {
        assert_eq!(parse_run_time("10:30").unwrap(), 10.5);
    }

    #[test]
    fn test_parse_whole_minutes() {
        assert_eq!(parse_run_time("12:00").unwrap(), 12.0);
    }

    #[test]
    fn test_parse_fractional_seconds() {
        let minutes = parse_run_time("9:45").unwrap();
        assert!((minutes - 9.75).abs() < 1e-9);
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        assert_eq!(parse_run_time(" 10 : 30 ").unwrap(), 10.5);
    }

    #[test]
    fn test_parse_missing_colon() {
        assert!(matches!(
            parse_run_time("1030"),
            Err(NapfaError::InvalidRunTime(_))
        ));
    }

    #[test]
    fn test_parse_non_numeric_parts() {
        assert!(parse_run_time("ten:30").is_err());
        assert!(parse_run_time("10:3x").is_err());
        assert!(parse_run_time("").is_err());
    }

    #[test]
    fn test_parse_rejects_out_of_range_seconds() {
        assert!(parse_run_time("10:60").is_err());
        assert!(parse_run_time("10:99").is_err());
    }

    #[test]
    fn test_parse_rejects_negative_parts() {
        assert!(parse_run_time("-10:30").is_err());
        assert!(parse_run_time("10:-5").is_err());
    }
}
