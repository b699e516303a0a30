// ============================================================================
// Build Configuration
// Runtime-inspectable view of the build-time numeric type selection
// ============================================================================
//
// The type aliases in `numeric` are resolved silently by the compiler. This
// module re-states the resolved choices as values, so a binary can report
// which configuration it was built as (log headers, output-file metadata,
// compatibility checks between communicating processes).

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Width of the index integer types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum IndexWidth {
    /// 32-bit signed/unsigned indices
    W32,
    /// 64-bit signed/unsigned indices
    W64,
}

impl IndexWidth {
    /// Width in bits.
    #[inline]
    pub const fn bits(self) -> u32 {
        match self {
            IndexWidth::W32 => 32,
            IndexWidth::W64 => 64,
        }
    }
}

impl fmt::Display for IndexWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexWidth::W32 => write!(f, "32-bit"),
            IndexWidth::W64 => write!(f, "64-bit"),
        }
    }
}

/// Representation of Hamiltonian matrix elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementKind {
    /// Elements are real scalars
    Real,
    /// Elements are double-precision complex values
    Complex,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Real => write!(f, "real"),
            ElementKind::Complex => write!(f, "complex"),
        }
    }
}

/// The numeric configuration this crate was built with.
///
/// Serializes but does not deserialize: a configuration is a property of
/// the running binary, never something read back in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct BuildConfig {
    /// Resolved index width
    pub index_width: IndexWidth,
    /// Resolved Hamiltonian element representation
    pub element_kind: ElementKind,
    /// Version of this crate
    pub crate_version: &'static str,
}

impl BuildConfig {
    /// The configuration resolved at build time from the Cargo features.
    pub const fn resolved() -> Self {
        Self {
            index_width: if cfg!(feature = "wide-index") {
                IndexWidth::W64
            } else {
                IndexWidth::W32
            },
            element_kind: if cfg!(feature = "complex-elements") {
                ElementKind::Complex
            } else {
                ElementKind::Real
            },
            crate_version: env!("CARGO_PKG_VERSION"),
        }
    }
}

impl fmt::Display for BuildConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "qmc-numeric {} ({} indices, {} elements)",
            self.crate_version, self.index_width, self.element_kind
        )
    }
}
