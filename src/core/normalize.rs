use crate::core::MatchError;

/// Min-max normalize a raw attribute value onto a common scale.
///
/// A missing value yields 0.0, a neutral no-signal default rather than the
/// statistical minimum. The result is deliberately unclamped: values
/// outside `[min, max]` map outside `[0, 1]` and still carry ordering
/// information.
///
/// # Errors
/// `MatchError::InvalidRange` when `min == max`, which would otherwise
/// divide by zero.
#[inline]
pub fn normalize(value: Option<f64>, min: f64, max: f64) -> Result<f64, MatchError> {
    if min == max {
        return Err(MatchError::InvalidRange { min, max });
    }

    match value {
        Some(v) => Ok((v - min) / (max - min)),
        None => Ok(0.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_in_range() {
        assert_eq!(normalize(Some(13.0), 1.0, 25.0).unwrap(), 0.5);
        assert_eq!(normalize(Some(1.0), 1.0, 25.0).unwrap(), 0.0);
        assert_eq!(normalize(Some(25.0), 1.0, 25.0).unwrap(), 1.0);
    }

    #[test]
    fn test_normalize_missing_value_is_neutral() {
        assert_eq!(normalize(None, 18.0, 80.0).unwrap(), 0.0);
    }

    #[test]
    fn test_normalize_unclamped_outside_range() {
        let below = normalize(Some(10.0), 18.0, 80.0).unwrap();
        let above = normalize(Some(100.0), 18.0, 80.0).unwrap();

        assert!(below < 0.0);
        assert!(above > 1.0);
    }

    #[test]
    fn test_normalize_degenerate_range_fails_fast() {
        let err = normalize(Some(5.0), 5.0, 5.0).unwrap_err();
        assert!(matches!(err, MatchError::InvalidRange { .. }));
    }
}
