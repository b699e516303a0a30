// ============================================================================
// Numeric Module
// Build-time numeric type registry for the host engine
// ============================================================================
//
// This module provides:
// - Real: the real scalar type (double precision)
// - Int / Uint: the index integer types, width fixed per build
// - Complex<T> with ComplexSp / ComplexDp aliases: layout-stable complex storage
// - HElement: the Hamiltonian element type, real or complex per build
// - NumericError: error types for conversions and parsing
//
// Design principles:
// - Widths are resolved exactly once, at build time, by Cargo features
// - Signed and unsigned index types always share one width
// - Complex values are storage only; arithmetic lives in the kernels

mod complex;
mod element;
mod errors;
mod scalar;

pub use complex::{Complex, ComplexDp, ComplexSp};
pub use element::{HElement, ELEMENT_IS_COMPLEX};
pub use errors::{NumericError, NumericResult};
pub use scalar::{
    int_from_usize, uint_from_usize, usize_from_int, usize_from_uint, Int, Real, Uint, INT_BITS,
    UINT_BITS,
};
