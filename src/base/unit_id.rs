//! Identifiers for compilation units.

use std::fmt;

/// An identifier for one compilation unit (one generated output file).
///
/// `UnitId` is a lightweight handle (just a u32) assigned by whoever builds
/// the trees. It carries no meaning for import resolution; it only lets
/// batch reports and diagnostics point back at the unit they came from.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnitId(pub u32);

impl UnitId {
    /// Create a new UnitId from a raw index.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index.
    #[inline]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UnitId({})", self.0)
    }
}

impl fmt::Display for UnitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unit#{}", self.0)
    }
}

impl From<u32> for UnitId {
    #[inline]
    fn from(id: u32) -> Self {
        Self(id)
    }
}
