//! Parsing of user supplied punishment and reminder durations.

use chrono::{DateTime, Duration, Utc};

use crate::server::error::AppError;

/// Inputs meaning "no end".
const INDEFINITE: [&str; 4] = ["perm", "permanent", "forever", "inf"];

/// Longest finite duration accepted, roughly ten years.
const MAX_DAYS: i64 = 3650;

/// Parses a duration such as `30m`, `1h 30m` or `2days`.
///
/// # Returns
/// - `Ok(None)` - Input is one of `perm`, `permanent`, `forever`, `inf` (indefinite)
/// - `Ok(Some(duration))` - A positive duration
/// - `Err(AppError::BadRequest)` - Zero, unparsable, or longer than ten years
pub fn parse_duration(input: &str) -> Result<Option<Duration>, AppError> {
    let input = input.trim().to_lowercase();

    if INDEFINITE.contains(&input.as_str()) {
        return Ok(None);
    }

    let std_duration = humantime::parse_duration(&input)
        .map_err(|e| AppError::BadRequest(format!("Invalid duration '{}': {}", input, e)))?;

    if std_duration.is_zero() {
        return Err(AppError::BadRequest("Duration must be longer than zero".to_string()));
    }

    let too_long = || AppError::BadRequest(format!("Duration '{}' is too long", input));
    let duration = Duration::from_std(std_duration).map_err(|_| too_long())?;
    if duration > Duration::days(MAX_DAYS) {
        return Err(too_long());
    }

    Ok(Some(duration))
}

/// The point in time `duration` after `now`.
///
/// # Returns
/// - `Ok(DateTime)` - The end time
/// - `Err(AppError::BadRequest)` - The end falls outside the representable range
pub fn end_after(now: DateTime<Utc>, duration: Duration) -> Result<DateTime<Utc>, AppError> {
    now.checked_add_signed(duration)
        .ok_or_else(|| AppError::BadRequest("Duration is too long".to_string()))
}

/// Formats an optional duration for display, `None` being permanent.
pub fn format_duration(duration: Option<Duration>) -> String {
    match duration.and_then(|d| d.to_std().ok()) {
        Some(d) => humantime::format_duration(std::time::Duration::from_secs(d.as_secs()))
            .to_string(),
        None => "permanent".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_compound_durations() {
        let duration = parse_duration("1h 30m").unwrap();

        assert_eq!(duration, Some(Duration::minutes(90)));
    }

    #[test]
    fn parses_long_unit_names() {
        assert_eq!(parse_duration("2days").unwrap(), Some(Duration::days(2)));
    }

    #[test]
    fn indefinite_keywords_have_no_end() {
        for keyword in ["perm", "Permanent", "forever", " inf "] {
            assert_eq!(parse_duration(keyword).unwrap(), None);
        }
    }

    #[test]
    fn rejects_zero_duration() {
        assert!(matches!(parse_duration("0s"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_garbage() {
        assert!(matches!(parse_duration("soon"), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn rejects_durations_past_ten_years() {
        assert!(matches!(parse_duration("300000y"), Err(AppError::BadRequest(_))));
        assert!(matches!(parse_duration("11y"), Err(AppError::BadRequest(_))));
        assert_eq!(parse_duration("3650days").unwrap(), Some(Duration::days(3650)));
    }

    #[test]
    fn end_after_rejects_overflow() {
        let now = Utc::now();

        assert_eq!(end_after(now, Duration::hours(1)).unwrap(), now + Duration::hours(1));
        assert!(matches!(
            end_after(DateTime::<Utc>::MAX_UTC, Duration::seconds(1)),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn formats_permanent_and_finite() {
        assert_eq!(format_duration(None), "permanent");
        assert_eq!(format_duration(Some(Duration::minutes(90))), "1h 30m");
    }
}
