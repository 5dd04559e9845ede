use std::str::FromStr;
use std::time::Duration;

use crate::error::{Result, ValidationError};

/// Parse a polling interval. A bare integer is a number of seconds,
/// anything else goes through humantime ("500ms", "2s", "1m 30s").
pub fn parse_interval(interval_str: &str) -> Result<Duration> {
    let trimmed = interval_str.trim();
    let duration = match trimmed.parse::<u64>() {
        Ok(secs) => Duration::from_secs(secs),
        Err(_) => humantime::Duration::from_str(trimmed)
            .map(Into::into)
            .map_err(|_| ValidationError::InvalidDuration {
                duration: interval_str.to_string(),
            })?,
    };

    if duration.is_zero() {
        return Err(ValidationError::InvalidDuration {
            duration: interval_str.to_string(),
        }
        .into());
    }

    Ok(duration)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bare_seconds() {
        assert_eq!(parse_interval("5").unwrap(), Duration::from_secs(5));
        assert_eq!(parse_interval(" 10 ").unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn test_humantime_formats() {
        assert_eq!(parse_interval("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_interval("2s").unwrap(), Duration::from_secs(2));
        assert_eq!(parse_interval("1m 30s").unwrap(), Duration::from_secs(90));
    }

    #[test]
    fn test_rejects_zero_and_garbage() {
        assert!(parse_interval("0").is_err());
        assert!(parse_interval("0s").is_err());
        assert!(parse_interval("soon").is_err());
        assert!(parse_interval("-1").is_err());
    }
}
