use thiserror::Error;

/// Rejected configuration values. The simulation itself never fails; only
/// loading and validating tunables can.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{field} must be finite, got {value}")]
    NotFinite { field: &'static str, value: f32 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f32 },

    #[error("{field} must be greater than zero, got {value}")]
    NotPositive { field: &'static str, value: f32 },

    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),
}

/// Reject NaN/infinite and negative values in one place.
pub fn check_non_negative(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::NotFinite { field, value });
    }
    if value < 0.0 {
        return Err(ConfigError::Negative { field, value });
    }
    Ok(())
}

pub fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    check_non_negative(field, value)?;
    if value == 0.0 {
        return Err(ConfigError::NotPositive { field, value });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_negative_accepts_zero() {
        assert!(check_non_negative("speed", 0.0).is_ok());
        assert!(check_non_negative("speed", 5.0).is_ok());
    }

    #[test]
    fn rejects_nan_and_negative() {
        assert!(matches!(
            check_non_negative("speed", f32::NAN),
            Err(ConfigError::NotFinite { field: "speed", .. })
        ));
        assert!(matches!(
            check_non_negative("speed", -1.0),
            Err(ConfigError::Negative { .. })
        ));
    }

    #[test]
    fn positive_rejects_zero() {
        let err = check_positive("width", 0.0).unwrap_err();
        assert!(err.to_string().contains("width"));
    }
}
