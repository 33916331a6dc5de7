use crate::domain::model::{DialSettings, MAX_DIAL_SIZE};
use crate::utils::error::{DialError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(DialError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(DialError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_positive_number(field_name: &str, value: i64, min_value: i64) -> Result<()> {
    if value < min_value {
        return Err(DialError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(DialError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be between {} and {}", min, max),
        });
    }
    Ok(())
}

pub fn validate_dial_settings(prefix: &str, settings: &DialSettings) -> Result<()> {
    validate_positive_number(&format!("{}.size", prefix), settings.size, 1)?;
    validate_range(&format!("{}.size", prefix), settings.size, 1, MAX_DIAL_SIZE)?;
    validate_range(
        &format!("{}.start", prefix),
        settings.start,
        0,
        settings.size - 1,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("input.path", "input/input_d1.txt").is_ok());
        assert!(validate_path("input.path", "").is_err());
        assert!(validate_path("input.path", "bad\0path").is_err());
    }

    #[test]
    fn test_validate_positive_number() {
        assert!(validate_positive_number("dial.size", 100, 1).is_ok());
        assert!(validate_positive_number("dial.size", 0, 1).is_err());
        assert!(validate_positive_number("dial.size", -5, 1).is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("dial.start", 50, 0, 99).is_ok());
        assert!(validate_range("dial.start", 0, 0, 99).is_ok());
        assert!(validate_range("dial.start", 100, 0, 99).is_err());
        assert!(validate_range("dial.start", -1, 0, 99).is_err());
    }

    #[test]
    fn test_validate_dial_settings() {
        assert!(validate_dial_settings("dial", &DialSettings::default()).is_ok());
        let zero_size = DialSettings { size: 0, start: 0 };
        assert!(validate_dial_settings("dial", &zero_size).is_err());
        let start_off_face = DialSettings { size: 10, start: 10 };
        assert!(validate_dial_settings("dial", &start_off_face).is_err());
    }

    #[test]
    fn test_validate_dial_settings_caps_size() {
        let largest = DialSettings {
            size: MAX_DIAL_SIZE,
            start: MAX_DIAL_SIZE - 1,
        };
        assert!(validate_dial_settings("dial", &largest).is_ok());

        let huge = DialSettings {
            size: i64::MAX,
            start: i64::MAX - 1,
        };
        assert!(validate_dial_settings("dial", &huge).is_err());
    }
}
