// ============================================================================
// QMC Numeric Foundation Library
// Build-time numeric type registry for a stochastic quantum chemistry engine
// ============================================================================

//! # QMC Numeric
//!
//! The numeric-type foundation of a stochastic quantum chemistry engine:
//! every other component imports its scalar, index, complex and
//! Hamiltonian-element types from this crate, so the widths and
//! representations are decided exactly once, at build time.
//!
//! ## Features
//!
//! - **`wide-index`** — 64-bit signed/unsigned index types instead of the
//!   default 32-bit; both always share one width
//! - **`complex-elements`** — Hamiltonian elements become double-precision
//!   complex values instead of real scalars
//! - **`serde`** — serialization derives on the value and config types
//! - **`logging`** — stderr `tracing` subscriber for fatal diagnostics
//!
//! ## Example
//!
//! ```rust
//! use qmc_numeric::prelude::*;
//!
//! // The signed and unsigned index types can never disagree on width
//! assert_eq!(INT_BITS, UINT_BITS);
//!
//! // Complex storage round-trips components exactly, in (re, im) order
//! let z = ComplexDp::new(3.5, -2.0);
//! assert_eq!((z.re, z.im), (3.5, -2.0));
//!
//! // Report which configuration this binary was built as
//! println!("{}", BuildConfig::resolved());
//! ```
//!
//! Unrecoverable failures anywhere in the host system go through
//! [`fatal::stop_all`], which surfaces its two diagnostic strings and ends
//! the process.

pub mod config;
pub mod fatal;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::config::{BuildConfig, ElementKind, IndexWidth};
    pub use crate::fatal::{set_fatal_handler, stop_all, FatalHandler};
    pub use crate::numeric::{
        Complex, ComplexDp, ComplexSp, HElement, Int, NumericError, NumericResult, Real, Uint,
        ELEMENT_IS_COMPLEX, INT_BITS, UINT_BITS,
    };
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::mem::{align_of, size_of};

    #[test]
    fn test_index_types_resolve_together() {
        assert_eq!(INT_BITS, UINT_BITS);
        assert_eq!(size_of::<Int>() * 8, INT_BITS as usize);
        assert_eq!(size_of::<Uint>() * 8, UINT_BITS as usize);
    }

    #[test]
    fn test_element_representation_matches_switch() {
        if ELEMENT_IS_COMPLEX {
            assert_eq!(size_of::<HElement>(), size_of::<ComplexDp>());
            assert_eq!(align_of::<HElement>(), align_of::<ComplexDp>());
        } else {
            assert_eq!(size_of::<HElement>(), size_of::<Real>());
            assert_eq!(align_of::<HElement>(), align_of::<Real>());
        }
    }

    // Build with wide-index and complex-elements: 64-bit indices, complex
    // elements constructed from (3.5, -2.0) read back exactly.
    #[cfg(all(feature = "wide-index", feature = "complex-elements"))]
    #[test]
    fn test_wide_complex_build() {
        assert_eq!(INT_BITS, 64);
        assert!(ELEMENT_IS_COMPLEX);

        let element = HElement::new(3.5, -2.0);
        assert_eq!((element.re, element.im), (3.5, -2.0));

        let config = BuildConfig::resolved();
        assert_eq!(config.index_width, IndexWidth::W64);
        assert_eq!(config.element_kind, ElementKind::Complex);
    }

    // Default build: 32-bit indices, elements are plain real scalars.
    #[cfg(not(any(feature = "wide-index", feature = "complex-elements")))]
    #[test]
    fn test_default_build() {
        assert_eq!(INT_BITS, 32);
        assert!(!ELEMENT_IS_COMPLEX);

        let element: HElement = 1.25;
        let doubled: Real = element + element;
        assert_eq!(doubled, 2.5);

        let config = BuildConfig::resolved();
        assert_eq!(config.index_width, IndexWidth::W32);
        assert_eq!(config.element_kind, ElementKind::Real);
    }

    #[test]
    fn test_build_config_reports_version() {
        let config = BuildConfig::resolved();
        assert_eq!(config.crate_version, env!("CARGO_PKG_VERSION"));
        assert!(config.to_string().contains(config.crate_version));
    }
}
