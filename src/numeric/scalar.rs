// ============================================================================
// Scalar and Index Types
// Build-time selection of the real scalar width and the index integer width
// ============================================================================
//
// The whole host system refers to `Real`, `Int` and `Uint` instead of
// hard-coding `f64` / `i32` / `u32`, so the widths are decided exactly once,
// here. The signed and unsigned index types are resolved by the same feature
// switch and can never disagree on width within one build.

use super::errors::{NumericError, NumericResult};

/// The real scalar type used for all non-complex numerical values.
///
/// Double precision throughout; single-precision builds are not supported.
pub type Real = f64;

/// Signed index type (64-bit build).
#[cfg(feature = "wide-index")]
pub type Int = i64;

/// Unsigned index type (64-bit build).
#[cfg(feature = "wide-index")]
pub type Uint = u64;

/// Signed index type (32-bit build).
#[cfg(not(feature = "wide-index"))]
pub type Int = i32;

/// Unsigned index type (32-bit build).
#[cfg(not(feature = "wide-index"))]
pub type Uint = u32;

/// Width of the signed index type in bits.
pub const INT_BITS: u32 = Int::BITS;

/// Width of the unsigned index type in bits.
pub const UINT_BITS: u32 = Uint::BITS;

// ============================================================================
// Checked Conversions
// ============================================================================
//
// Rust containers index with `usize`; the configured index types cross that
// seam through these fallible conversions.

/// Convert a `usize` into the signed index type.
///
/// # Errors
/// Returns `IndexOverflow` if the value does not fit the configured width.
#[inline]
pub fn int_from_usize(value: usize) -> NumericResult<Int> {
    Int::try_from(value).map_err(|_| NumericError::IndexOverflow)
}

/// Convert a `usize` into the unsigned index type.
///
/// # Errors
/// Returns `IndexOverflow` if the value does not fit the configured width.
#[inline]
pub fn uint_from_usize(value: usize) -> NumericResult<Uint> {
    Uint::try_from(value).map_err(|_| NumericError::IndexOverflow)
}

/// Convert a signed index into a `usize`.
///
/// # Errors
/// - `NegativeIndex` if the value is negative
/// - `IndexOverflow` if the value does not fit `usize` on this target
#[inline]
pub fn usize_from_int(value: Int) -> NumericResult<usize> {
    if value < 0 {
        return Err(NumericError::NegativeIndex);
    }
    usize::try_from(value).map_err(|_| NumericError::IndexOverflow)
}

/// Convert an unsigned index into a `usize`.
///
/// # Errors
/// Returns `IndexOverflow` if the value does not fit `usize` on this target.
#[inline]
pub fn usize_from_uint(value: Uint) -> NumericResult<usize> {
    usize::try_from(value).map_err(|_| NumericError::IndexOverflow)
}

// ============================================================================
// Tests
// ============================================================================
