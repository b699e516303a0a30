// ============================================================================
// Hamiltonian Element Type
// Build-time selection between real- and complex-valued matrix elements
// ============================================================================
//
// Kernels are written once against `HElement` and compile into either a
// real-valued or a complex-valued engine depending on the
// `complex-elements` feature, with no source changes on the consumer side.

#[cfg(feature = "complex-elements")]
use super::complex::ComplexDp;
#[cfg(not(feature = "complex-elements"))]
use super::scalar::Real;

/// The scalar type of Hamiltonian matrix elements (complex build).
#[cfg(feature = "complex-elements")]
pub type HElement = ComplexDp;

/// The scalar type of Hamiltonian matrix elements (real build).
#[cfg(not(feature = "complex-elements"))]
pub type HElement = Real;

/// Whether this build carries complex-valued Hamiltonian elements.
pub const ELEMENT_IS_COMPLEX: bool = cfg!(feature = "complex-elements");
