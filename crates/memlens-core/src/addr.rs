//! Typed addresses into the inspected target.

use std::fmt;

/// Address of a record in target memory.
///
/// The null address (0) marks an absent link. Chain walkers test it
/// explicitly before issuing a read; `TargetMemory` implementations treat
/// a null read as unmapped.
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct TargetPtr(u64);

impl TargetPtr {
    /// The null address.
    pub const NULL: Self = Self(0);

    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    pub const fn is_null(self) -> bool {
        self.0 == 0
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for TargetPtr {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}

impl fmt::Debug for TargetPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TargetPtr({:#x})", self.0)
    }
}

impl fmt::Display for TargetPtr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#x}", self.0)
    }
}
