use chrono::NaiveDate;
use thiserror::Error;

/// Error produced when a birth date submission cannot be accepted.
///
/// Covers both a wrong shape (anything that is not `YYYY-MM-DD`) and a
/// well-shaped string that is not a real calendar date (month 13,
/// February 30).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("invalid date format, expected YYYY-MM-DD")]
pub struct InvalidFormat;

/// Returns true if `text` has the exact `YYYY-MM-DD` shape.
///
/// Shape only; the digits may still denote an impossible date. Used to
/// decide whether a free-text message is a birth date submission at all.
pub fn is_date_shaped(text: &str) -> bool {
    let bytes = text.as_bytes();
    if bytes.len() != 10 || bytes[4] != b'-' || bytes[7] != b'-' {
        return false;
    }
    bytes
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != 4 && *i != 7)
        .all(|(_, b)| b.is_ascii_digit())
}

/// Parses `raw` strictly as a `YYYY-MM-DD` calendar date.
///
/// No trimming, no alternate separators, no rollover of out-of-range
/// components.
pub fn parse_birth_date(raw: &str) -> Result<NaiveDate, InvalidFormat> {
    if !is_date_shaped(raw) {
        return Err(InvalidFormat);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| InvalidFormat)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_shape_valid() {
        assert!(is_date_shaped("1990-05-15"));
        assert!(is_date_shaped("2023-02-30")); // shaped, even if impossible
        assert!(is_date_shaped("0001-01-01"));
    }

    #[test]
    fn test_date_shape_invalid() {
        assert!(!is_date_shaped(""));
        assert!(!is_date_shaped("1990-5-15"));
        assert!(!is_date_shaped("15-05-1990"));
        assert!(!is_date_shaped("1990/05/15"));
        assert!(!is_date_shaped("1990-05-15 "));
        assert!(!is_date_shaped(" 1990-05-15"));
        assert!(!is_date_shaped("1990-05-15x"));
        assert!(!is_date_shaped("birthday"));
    }

    #[test]
    fn test_parse_valid_dates() {
        assert_eq!(
            parse_birth_date("1990-05-15"),
            Ok(NaiveDate::from_ymd_opt(1990, 5, 15).unwrap())
        );
        assert_eq!(
            parse_birth_date("2000-02-29"), // leap day
            Ok(NaiveDate::from_ymd_opt(2000, 2, 29).unwrap())
        );
    }

    #[test]
    fn test_parse_impossible_dates() {
        assert_eq!(parse_birth_date("2023-02-30"), Err(InvalidFormat));
        assert_eq!(parse_birth_date("2023-13-01"), Err(InvalidFormat));
        assert_eq!(parse_birth_date("2023-00-10"), Err(InvalidFormat));
        assert_eq!(parse_birth_date("1900-02-29"), Err(InvalidFormat)); // not a leap year
    }

    #[test]
    fn test_parse_rejects_wrong_shape() {
        assert_eq!(parse_birth_date("1990-5-15"), Err(InvalidFormat));
        assert_eq!(parse_birth_date("not a date"), Err(InvalidFormat));
        assert_eq!(parse_birth_date("1990-05-15\n"), Err(InvalidFormat));
    }
}
