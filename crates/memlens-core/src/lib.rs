//! Target-memory model for memlens.
//!
//! This crate contains:
//! - Typed addresses and record views of the inspected runtime's
//!   structures (segmented strings, macros, character classes, bitsets,
//!   automata)
//! - The `TargetMemory` read trait, the seam to the host integration
//!   layer that actually reaches into the stopped process
//! - `MemoryImage`, a copied-out snapshot carrier with a JSON
//!   interchange form
//! - `TypeDesc`/`TargetValue`, the declared-type shapes formatter
//!   dispatch matches on

pub mod addr;
pub mod image;
pub mod mem;
pub mod record;
pub mod types;

#[cfg(test)]
mod image_tests;

// Re-export commonly used items at crate root
pub use addr::TargetPtr;
pub use image::{MemoryImage, SnapshotError};
pub use mem::{ReadError, TargetMemory};
pub use record::{
    Atom, Automaton, AutomatonNode, BadWordWidth, Bitset, BitsetHeader, Buffer, Cclass, Edge,
    Interval, MAX_CHAR, MacroListNode, MacroNode, MacroPart, NodeHeader, Record, Segment,
    WordWidth,
};
pub use types::{TargetValue, TypeDesc};
