//! Physical Range Validation
//!
//! Rejects measurements that cannot be real before they reach the scorer.
//! The scorer itself accepts any value; this check belongs to the caller.

use crate::dimension::Dimension;
use crate::query::UserQuery;
use thiserror::Error;

/// A supplied value outside its sane bounds
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{} value {value} is out of range: please enter between {min} and {max}{}", .dimension.subject(), .dimension.unit())]
    OutOfRange {
        dimension: Dimension,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Inclusive sane bounds for a dimension
pub fn sane_bounds(dimension: Dimension) -> (f64, f64) {
    match dimension {
        Dimension::Nitrogen | Dimension::Phosphorus | Dimension::Potassium => (0.0, 300.0),
        Dimension::Temperature => (0.0, 60.0),
        Dimension::Humidity => (0.0, 100.0),
        Dimension::Ph => (0.0, 14.0),
        Dimension::Rainfall => (0.0, 1000.0),
    }
}

/// Check every supplied dimension; the first violation (in dimension order) wins
pub fn validate_query(query: &UserQuery) -> Result<(), ValidationError> {
    for (dimension, value) in query.present() {
        let (min, max) = sane_bounds(dimension);
        // NaN fails both comparisons
        if !(value >= min && value <= max) {
            return Err(ValidationError::OutOfRange { dimension, value, min, max });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_query() {
        let q = UserQuery::new()
            .with(Dimension::Nitrogen, 300.0)
            .with(Dimension::Temperature, 0.0)
            .with(Dimension::Ph, 6.5);
        assert!(validate_query(&q).is_ok());
        assert!(validate_query(&UserQuery::new()).is_ok());
    }

    #[test]
    fn test_first_violation_reported() {
        let q = UserQuery::new()
            .with(Dimension::Rainfall, 5000.0)
            .with(Dimension::Ph, 15.0);

        let err = validate_query(&q).unwrap_err();
        assert_eq!(
            err,
            ValidationError::OutOfRange { dimension: Dimension::Ph, value: 15.0, min: 0.0, max: 14.0 }
        );
        assert_eq!(err.to_string(), "pH level value 15 is out of range: please enter between 0 and 14");
    }

    #[test]
    fn test_message_includes_unit() {
        let q = UserQuery::new().with(Dimension::Humidity, -1.0);
        let err = validate_query(&q).unwrap_err();
        assert_eq!(err.to_string(), "Humidity value -1 is out of range: please enter between 0 and 100%");
    }

    #[test]
    fn test_nan_rejected() {
        let q = UserQuery::new().with(Dimension::Potassium, f64::NAN);
        assert!(validate_query(&q).is_err());
    }
}
