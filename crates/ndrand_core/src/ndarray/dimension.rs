//! Dimension size validation.
//!
//! Sizes arrive as signed integers from the API, as floats from numeric
//! front ends, or as text from the command line. Each path rejects anything
//! that is not a non-negative whole number with an invalid-dimension error
//! naming the offending axis.

use crate::types::{Result, TensorError};

/// Checks every size and converts the list to a shape.
///
/// # Errors
///
/// [`TensorError::InvalidDimension`] for the first negative size.
///
/// # Examples
///
/// ```rust
/// use ndrand_core::ndarray::validate_dimensions;
///
/// assert_eq!(validate_dimensions(&[2, 0, 3]).unwrap(), vec![2, 0, 3]);
/// assert!(validate_dimensions(&[2, -1]).is_err());
/// ```
pub fn validate_dimensions(dimension_sizes: &[i64]) -> Result<Vec<usize>> {
    dimension_sizes
        .iter()
        .enumerate()
        .map(|(axis, &size)| {
            usize::try_from(size).map_err(|_| TensorError::InvalidDimension { axis, size })
        })
        .collect()
}

/// Converts a floating-point size at `axis` into a dimension.
///
/// `3.0` is accepted; `2.5`, `NaN` and infinities are rejected as non-integral
/// and negative whole numbers as invalid. Whole numbers that no `usize` (or,
/// below zero, no `i64`) can hold are rejected as out of range with the value
/// as given.
///
/// # Examples
///
/// ```rust
/// use ndrand_core::ndarray::dimension_from_f64;
/// use ndrand_core::types::TensorError;
///
/// assert_eq!(dimension_from_f64(0, 3.0).unwrap(), 3);
/// assert_eq!(
///     dimension_from_f64(1, 2.5).unwrap_err(),
///     TensorError::NonIntegralDimension { axis: 1, value: 2.5 }
/// );
/// assert_eq!(
///     dimension_from_f64(0, 1e300).unwrap_err(),
///     TensorError::OutOfRangeDimension { axis: 0, value: 1e300 }
/// );
/// ```
pub fn dimension_from_f64(axis: usize, value: f64) -> Result<usize> {
    if !value.is_finite() || value.fract() != 0.0 {
        return Err(TensorError::NonIntegralDimension { axis, value });
    }
    if value < 0.0 {
        // i64::MIN is a power of two, so the bound is exact and the cast below is lossless.
        if value < i64::MIN as f64 {
            return Err(TensorError::OutOfRangeDimension { axis, value });
        }
        return Err(TensorError::InvalidDimension {
            axis,
            size: value as i64,
        });
    }
    // usize::MAX rounds up to 2^BITS, which is itself not representable.
    if value >= usize::MAX as f64 {
        return Err(TensorError::OutOfRangeDimension { axis, value });
    }
    Ok(value as usize)
}

/// Parses textual sizes, e.g. command-line arguments, into a shape.
///
/// Integers are taken as-is; decimal forms such as `"4.0"` are accepted when
/// they denote a whole number.
///
/// # Errors
///
/// - [`TensorError::InvalidDimension`] for a negative size
/// - [`TensorError::NonIntegralDimension`] for a fractional or non-finite size
/// - [`TensorError::UnparsableDimension`] for text that is not a number
/// - [`TensorError::OutOfRangeDimension`] for a whole number too large to hold
pub fn parse_dimensions<S: AsRef<str>>(inputs: &[S]) -> Result<Vec<usize>> {
    inputs
        .iter()
        .enumerate()
        .map(|(axis, input)| parse_dimension(axis, input.as_ref()))
        .collect()
}

fn parse_dimension(axis: usize, input: &str) -> Result<usize> {
    let trimmed = input.trim();

    if let Ok(size) = trimmed.parse::<usize>() {
        return Ok(size);
    }
    if let Ok(size) = trimmed.parse::<i64>() {
        return usize::try_from(size).map_err(|_| TensorError::InvalidDimension { axis, size });
    }

    match trimmed.parse::<f64>() {
        Ok(value) => dimension_from_f64(axis, value),
        Err(_) => Err(TensorError::UnparsableDimension {
            axis,
            input: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_zero_and_positive() {
        assert_eq!(validate_dimensions(&[0]).unwrap(), vec![0]);
        assert_eq!(validate_dimensions(&[5, 1, 0]).unwrap(), vec![5, 1, 0]);
        assert!(validate_dimensions(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_validate_reports_first_negative_axis() {
        assert_eq!(
            validate_dimensions(&[1, -2, -3]).unwrap_err(),
            TensorError::InvalidDimension { axis: 1, size: -2 }
        );
    }

    #[test]
    fn test_from_f64() {
        assert_eq!(dimension_from_f64(0, 0.0).unwrap(), 0);
        assert_eq!(dimension_from_f64(0, 7.0).unwrap(), 7);
        assert_eq!(
            dimension_from_f64(2, -3.0).unwrap_err(),
            TensorError::InvalidDimension { axis: 2, size: -3 }
        );
        assert!(matches!(
            dimension_from_f64(0, -0.5).unwrap_err(),
            TensorError::NonIntegralDimension { axis: 0, .. }
        ));
        assert!(dimension_from_f64(0, f64::NAN).unwrap_err().is_invalid_dimension());
        assert!(dimension_from_f64(0, f64::INFINITY).unwrap_err().is_invalid_dimension());
    }

    #[test]
    fn test_float_edges_outside_range() {
        let two_pow_64 = 18_446_744_073_709_551_616.0_f64;

        assert_eq!(
            dimension_from_f64(0, two_pow_64).unwrap_err(),
            TensorError::OutOfRangeDimension {
                axis: 0,
                value: two_pow_64
            }
        );
        assert_eq!(
            dimension_from_f64(1, 1e300).unwrap_err(),
            TensorError::OutOfRangeDimension {
                axis: 1,
                value: 1e300
            }
        );
        assert_eq!(
            dimension_from_f64(2, -1e300).unwrap_err(),
            TensorError::OutOfRangeDimension {
                axis: 2,
                value: -1e300
            }
        );
        assert_eq!(
            dimension_from_f64(0, -9_223_372_036_854_775_808.0).unwrap_err(),
            TensorError::InvalidDimension {
                axis: 0,
                size: i64::MIN
            }
        );
    }

    #[test]
    fn test_parse_text_outside_range() {
        assert_eq!(
            parse_dimensions(&["1", "18446744073709551616"]).unwrap_err(),
            TensorError::OutOfRangeDimension {
                axis: 1,
                value: 18_446_744_073_709_551_616.0
            }
        );
        assert_eq!(
            parse_dimensions(&["1e300"]).unwrap_err(),
            TensorError::OutOfRangeDimension {
                axis: 0,
                value: 1e300
            }
        );
        assert_eq!(
            parse_dimensions(&["2", "3", "-1e300"]).unwrap_err(),
            TensorError::OutOfRangeDimension {
                axis: 2,
                value: -1e300
            }
        );
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_parse_keeps_large_integers_exact() {
        assert_eq!(
            parse_dimensions(&["18446744073709551615"]).unwrap(),
            vec![usize::MAX]
        );
    }

    #[test]
    fn test_parse_integers_and_whole_decimals() {
        assert_eq!(parse_dimensions(&["2", " 3 ", "4.0"]).unwrap(), vec![2, 3, 4]);
        assert_eq!(parse_dimensions(&[String::from("0")]).unwrap(), vec![0]);
    }

    #[test]
    fn test_parse_rejections() {
        assert_eq!(
            parse_dimensions(&["2", "-1"]).unwrap_err(),
            TensorError::InvalidDimension { axis: 1, size: -1 }
        );
        assert_eq!(
            parse_dimensions(&["2.5"]).unwrap_err(),
            TensorError::NonIntegralDimension {
                axis: 0,
                value: 2.5
            }
        );
        assert_eq!(
            parse_dimensions(&["3", "x"]).unwrap_err(),
            TensorError::UnparsableDimension {
                axis: 1,
                input: "x".to_string()
            }
        );
        assert!(parse_dimensions(&["inf"]).unwrap_err().is_invalid_dimension());
    }
}
