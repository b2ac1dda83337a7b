//! Angle conversion and sequence helpers.
//!
//! The tracer works in radians only. Degree conversion lives here so the
//! driver can present user-facing values.

use std::f64::consts::PI;

use thiserror::Error;

/// Errors from the sequence helpers.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathError {
    #[error("cannot take the extreme value of an empty sequence")]
    EmptyInput,
}

pub type MathResult<T> = Result<T, MathError>;

/// Convert degrees to radians.
#[inline]
pub fn degrees_to_radians(degrees: f64) -> f64 {
    degrees * PI / 180.0
}

/// Convert radians to degrees.
#[inline]
pub fn radians_to_degrees(radians: f64) -> f64 {
    radians * 180.0 / PI
}

/// Largest value in `values`.
///
/// NaN entries are skipped; a slice of only NaN yields NaN.
pub fn max_value(values: &[f64]) -> MathResult<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::max)
        .ok_or(MathError::EmptyInput)
}

/// Smallest value in `values`.
///
/// NaN entries are skipped; a slice of only NaN yields NaN.
pub fn min_value(values: &[f64]) -> MathResult<f64> {
    values
        .iter()
        .copied()
        .reduce(f64::min)
        .ok_or(MathError::EmptyInput)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_conversions() {
        assert_eq!(degrees_to_radians(180.0), PI);
        assert_eq!(degrees_to_radians(0.0), 0.0);
        assert!((degrees_to_radians(90.0) - PI / 2.0).abs() < 1e-15);
        assert!((radians_to_degrees(PI / 4.0) - 45.0).abs() < 1e-12);
        assert!((radians_to_degrees(-PI) + 180.0).abs() < 1e-12);
    }

    #[test]
    fn test_degree_radian_round_trip() {
        for &deg in &[-720.0, -90.0, -5.0, 0.0, 1e-9, 33.3, 89.999, 1e6] {
            let back = radians_to_degrees(degrees_to_radians(deg));
            let tolerance = 1e-12 * f64::max(1.0, f64::abs(deg));
            assert!(
                (back - deg).abs() <= tolerance,
                "round trip of {} gave {}",
                deg,
                back
            );
        }
    }

    #[test]
    fn test_max_value() {
        assert_eq!(max_value(&[43.7, -2.0, 512.5, 7.0]), Ok(512.5));
        assert_eq!(max_value(&[-3.0, -1.0, -2.0]), Ok(-1.0));
        assert_eq!(max_value(&[4.0]), Ok(4.0));
    }

    #[test]
    fn test_max_value_skips_nan() {
        assert_eq!(max_value(&[f64::NAN, 2.0, 1.0]), Ok(2.0));
        assert!(max_value(&[f64::NAN]).unwrap().is_nan());
    }

    #[test]
    fn test_extremes_of_empty_sequence() {
        assert_eq!(max_value(&[]), Err(MathError::EmptyInput));
        assert_eq!(min_value(&[]), Err(MathError::EmptyInput));
    }

    #[test]
    fn test_min_value() {
        assert_eq!(min_value(&[-500.0, -800.0, 0.0]), Ok(-800.0));
    }
}
