// ============================================================================
// Complex Value Storage
// Plain-aggregate complex numbers with a fixed (re, im) binary layout
// ============================================================================
//
// This type is storage only. No arithmetic operators are defined here: the
// numerical kernels own complex arithmetic, and external libraries that
// interoperate at binary level (integral dumps, walker snapshots) rely on
// the component order being exactly (real, imaginary) at the declared
// precision. `#[repr(C)]` pins that order.
//
// No invariant relates the two components: NaN, infinities and
// denormals pass through unchanged.

use super::errors::NumericError;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A complex number stored as two floating-point components.
///
/// The real component occupies the first position and the imaginary
/// component the second; the layout is part of the crate's compatibility
/// contract with external numerical consumers.
///
/// # Type Parameter
/// - `T`: component precision, `f32` or `f64` in practice. Use the
///   [`ComplexSp`] / [`ComplexDp`] aliases.
///
/// # Example
/// ```
/// use qmc_numeric::numeric::ComplexDp;
///
/// let z = ComplexDp::new(3.5, -2.0);
/// assert_eq!(z.re, 3.5);
/// assert_eq!(z.im, -2.0);
/// ```
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Complex<T> {
    /// Real component (first in memory)
    pub re: T,
    /// Imaginary component (second in memory)
    pub im: T,
}

impl<T> Complex<T> {
    /// Create a complex value from its components.
    #[inline]
    pub const fn new(re: T, im: T) -> Self {
        Self { re, im }
    }

    /// Return the components in serialization order: `[re, im]`.
    #[inline]
    pub fn to_array(self) -> [T; 2] {
        [self.re, self.im]
    }
}

impl<T> From<(T, T)> for Complex<T> {
    #[inline]
    fn from((re, im): (T, T)) -> Self {
        Self { re, im }
    }
}

impl<T> From<[T; 2]> for Complex<T> {
    #[inline]
    fn from(components: [T; 2]) -> Self {
        let [re, im] = components;
        Self { re, im }
    }
}

impl<T> From<Complex<T>> for (T, T) {
    #[inline]
    fn from(z: Complex<T>) -> Self {
        (z.re, z.im)
    }
}

// ============================================================================
// Display and Parsing
// ============================================================================

macro_rules! impl_complex_text {
    ($ty:ty) => {
        impl fmt::Display for Complex<$ty> {
            /// Formats as `a+bi` / `a-bi`, e.g. `3.5-2i`.
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if self.im.is_sign_negative() {
                    write!(f, "{}-{}i", self.re, -self.im)
                } else {
                    write!(f, "{}+{}i", self.re, self.im)
                }
            }
        }

        impl std::str::FromStr for Complex<$ty> {
            type Err = NumericError;

            /// Parse from an `a+bi` style string.
            ///
            /// # Examples
            /// - "3.5" -> (3.5, 0.0)
            /// - "2i" -> (0.0, 2.0)
            /// - "3.5-2i" -> (3.5, -2.0)
            /// - "-1e-3+4e2i" -> (-0.001, 400.0)
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                if s.is_empty() {
                    return Err(NumericError::InvalidInput);
                }

                if let Some(body) = s.strip_suffix('i') {
                    // Find the sign separating real and imaginary parts.
                    // Skip position 0 (leading sign) and signs that belong
                    // to an exponent.
                    let bytes = body.as_bytes();
                    let mut split = None;
                    for pos in (1..bytes.len()).rev() {
                        let c = bytes[pos];
                        if (c == b'+' || c == b'-')
                            && !matches!(bytes[pos - 1], b'e' | b'E')
                        {
                            split = Some(pos);
                            break;
                        }
                    }

                    match split {
                        Some(pos) => {
                            let re: $ty = body[..pos]
                                .parse()
                                .map_err(|_| NumericError::InvalidInput)?;
                            let im_str = &body[pos..];
                            // "+i" / "-i" mean an implicit 1
                            let im: $ty = match im_str {
                                "+" => 1.0,
                                "-" => -1.0,
                                _ => im_str.parse().map_err(|_| NumericError::InvalidInput)?,
                            };
                            Ok(Self::new(re, im))
                        },
                        None => {
                            // Pure imaginary: "2i", "i", "-i"
                            let im: $ty = match body {
                                "" | "+" => 1.0,
                                "-" => -1.0,
                                _ => body.parse().map_err(|_| NumericError::InvalidInput)?,
                            };
                            Ok(Self::new(0.0, im))
                        },
                    }
                } else {
                    let re: $ty = s.parse().map_err(|_| NumericError::InvalidInput)?;
                    Ok(Self::new(re, 0.0))
                }
            }
        }
    };
}

impl_complex_text!(f32);
impl_complex_text!(f64);

// ============================================================================
// Type Aliases for the Two Supported Precisions
// ============================================================================

/// Single-precision complex value (two 32-bit components)
pub type ComplexSp = Complex<f32>;

/// Double-precision complex value (two 64-bit components)
pub type ComplexDp = Complex<f64>;

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::{offset_of, size_of};

    #[test]
    fn test_component_round_trip() {
        let z = ComplexDp::new(3.5, -2.0);
        assert_eq!(z.re, 3.5);
        assert_eq!(z.im, -2.0);

        let w = ComplexSp::new(0.25, 1.5);
        assert_eq!(w.re, 0.25_f32);
        assert_eq!(w.im, 1.5_f32);
    }

    #[test]
    fn test_layout_re_first_im_second() {
        assert_eq!(offset_of!(ComplexSp, re), 0);
        assert_eq!(offset_of!(ComplexSp, im), 4);
        assert_eq!(offset_of!(ComplexDp, re), 0);
        assert_eq!(offset_of!(ComplexDp, im), 8);

        assert_eq!(size_of::<ComplexSp>(), 8);
        assert_eq!(size_of::<ComplexDp>(), 16);
    }

    #[test]
    fn test_to_array_order() {
        let z = ComplexDp::new(1.0, 2.0);
        assert_eq!(z.to_array(), [1.0, 2.0]);
    }

    #[test]
    fn test_conversions() {
        let z: ComplexDp = (3.5, -2.0).into();
        assert_eq!(z, ComplexDp::new(3.5, -2.0));

        let w: ComplexDp = [3.5, -2.0].into();
        assert_eq!(w, z);

        let pair: (f64, f64) = z.into();
        assert_eq!(pair, (3.5, -2.0));
    }

    #[test]
    fn test_components_independently_writable() {
        let mut z = ComplexDp::default();
        z.re = 7.0;
        assert_eq!(z.im, 0.0);
        z.im = -1.0;
        assert_eq!(z.re, 7.0);
    }

    #[test]
    fn test_no_component_validation() {
        // NaN and infinities are stored as-is; this layer does not inspect
        // the values it holds.
        let z = ComplexDp::new(f64::NAN, f64::INFINITY);
        assert!(z.re.is_nan());
        assert_eq!(z.re.to_bits(), f64::NAN.to_bits());
        assert_eq!(z.im, f64::INFINITY);
    }

    #[test]
    fn test_display() {
        assert_eq!(ComplexDp::new(3.5, -2.0).to_string(), "3.5-2i");
        assert_eq!(ComplexDp::new(3.5, 2.0).to_string(), "3.5+2i");
        assert_eq!(ComplexDp::new(0.0, 0.0).to_string(), "0+0i");
        assert_eq!(ComplexSp::new(-1.5, 0.5).to_string(), "-1.5+0.5i");
    }

    #[test]
    fn test_from_str() {
        let z: ComplexDp = "3.5-2i".parse().unwrap();
        assert_eq!(z, ComplexDp::new(3.5, -2.0));

        let z: ComplexDp = "3.5".parse().unwrap();
        assert_eq!(z, ComplexDp::new(3.5, 0.0));

        let z: ComplexDp = "2i".parse().unwrap();
        assert_eq!(z, ComplexDp::new(0.0, 2.0));

        let z: ComplexDp = "-i".parse().unwrap();
        assert_eq!(z, ComplexDp::new(0.0, -1.0));

        let z: ComplexDp = "1+i".parse().unwrap();
        assert_eq!(z, ComplexDp::new(1.0, 1.0));

        let z: ComplexDp = "-1e-3+4e2i".parse().unwrap();
        assert_eq!(z, ComplexDp::new(-0.001, 400.0));

        let z: ComplexSp = "0.25+1.5i".parse().unwrap();
        assert_eq!(z, ComplexSp::new(0.25, 1.5));
    }

    #[test]
    fn test_from_str_invalid() {
        for s in ["", "abc", "1++2i", "1+2j", "i2"] {
            let result: Result<ComplexDp, _> = s.parse();
            assert_eq!(result, Err(NumericError::InvalidInput), "input: {s:?}");
        }
    }

    #[test]
    fn test_display_parse_round_trip() {
        let z = ComplexDp::new(-0.125, 42.0);
        let parsed: ComplexDp = z.to_string().parse().unwrap();
        assert_eq!(parsed, z);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde_field_order() {
        let z = ComplexDp::new(3.5, -2.0);
        let json = serde_json::to_string(&z).unwrap();
        assert_eq!(json, r#"{"re":3.5,"im":-2.0}"#);

        let back: ComplexDp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, z);
    }
}
