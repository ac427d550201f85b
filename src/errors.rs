use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WindError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Shape mismatch: {0}")]
    ShapeMismatch(String),
}

pub(crate) fn require_positive(name: &str, value: f64) -> Result<f64, WindError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WindError::InvalidInput(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_positive_accepts_positive() {
        assert_eq!(require_positive("vs", 1e4), Ok(1e4));
    }

    #[test]
    fn test_require_positive_rejects_zero_negative_and_nan() {
        for value in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                require_positive("rs", value),
                Err(WindError::InvalidInput(_))
            ));
        }
    }

    #[test]
    fn test_error_messages() {
        let err = WindError::DomainError("r = 1 m".to_string());
        assert_eq!(err.to_string(), "Domain error: r = 1 m");
    }
}
