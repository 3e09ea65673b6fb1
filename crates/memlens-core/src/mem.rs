//! Read access to a snapshot of target memory.

use crate::addr::TargetPtr;
use crate::record::{BitsetHeader, Edge, Interval, MacroListNode, MacroNode, NodeHeader, Segment};

/// Failure of a single snapshot read.
///
/// Renderers never surface these to their caller; each failure becomes an
/// inline marker so the inspected value still produces text. Hosts see
/// them when driving [`TargetMemory`] directly.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ReadError {
    /// No record is mapped at the address.
    #[error("unmapped address {0}")]
    Unmapped(TargetPtr),
    /// The record at the address is not of the requested kind.
    #[error("wrong record at {addr}: expected {expected}, found {found}")]
    WrongKind {
        addr: TargetPtr,
        expected: &'static str,
        found: &'static str,
    },
    /// Array element index past the stored count.
    #[error("index {index} out of bounds at {addr} (len {len})")]
    OutOfBounds {
        addr: TargetPtr,
        index: u32,
        len: u32,
    },
    /// Byte range extending past the end of a buffer.
    #[error("range {offset}..+{len} outside buffer {addr} ({size} bytes)")]
    OutOfRange {
        addr: TargetPtr,
        offset: u32,
        len: u32,
        size: u32,
    },
}

/// Read primitives over a target-memory snapshot.
///
/// This is the seam to the host integration layer: a live debugger
/// connection implements it against the stopped process, and
/// [`MemoryImage`](crate::MemoryImage) implements it over records copied
/// out beforehand. All methods are pure reads of an immutable snapshot;
/// implementations never write to the target.
///
/// Null handling is the caller's job: walkers test [`TargetPtr::is_null`]
/// before reading, and implementations may treat a null read as unmapped.
pub trait TargetMemory {
    /// Load the segment record at `at`.
    fn segment(&self, at: TargetPtr) -> Result<Segment, ReadError>;

    /// Reference count of the shared buffer at `at`.
    fn buffer_refs(&self, at: TargetPtr) -> Result<u32, ReadError>;

    /// `len` raw bytes of the buffer at `at`, starting at `offset`.
    fn buffer_bytes(&self, at: TargetPtr, offset: u32, len: u32) -> Result<Vec<u8>, ReadError>;

    /// Bytes of the NUL-terminated atom at `at`, without the terminator.
    fn atom_bytes(&self, at: TargetPtr) -> Result<Vec<u8>, ReadError>;

    /// Load the macro node record at `at`.
    fn macro_node(&self, at: TargetPtr) -> Result<MacroNode, ReadError>;

    /// Load the reference-list entry at `at`.
    fn macro_list_node(&self, at: TargetPtr) -> Result<MacroListNode, ReadError>;

    /// Number of intervals stored by the character class at `at`.
    fn cclass_len(&self, at: TargetPtr) -> Result<u32, ReadError>;

    /// The `index`-th interval of the character class at `at`.
    fn cclass_interval(&self, at: TargetPtr, index: u32) -> Result<Interval, ReadError>;

    /// Bit count and word width of the bitset at `at`.
    fn bitset_header(&self, at: TargetPtr) -> Result<BitsetHeader, ReadError>;

    /// The `index`-th storage word of the bitset at `at`, zero-extended.
    fn bitset_word(&self, at: TargetPtr, index: u32) -> Result<u64, ReadError>;

    /// Number of nodes in the automaton at `at`.
    fn automaton_len(&self, at: TargetPtr) -> Result<u32, ReadError>;

    /// Edge and final counts of node `node` of the automaton at `at`.
    fn automaton_node(&self, at: TargetPtr, node: u32) -> Result<NodeHeader, ReadError>;

    /// The `index`-th edge of node `node` of the automaton at `at`.
    fn automaton_edge(&self, at: TargetPtr, node: u32, index: u32) -> Result<Edge, ReadError>;

    /// The `index`-th final value of node `node` of the automaton at `at`.
    fn automaton_final(&self, at: TargetPtr, node: u32, index: u32)
    -> Result<TargetPtr, ReadError>;

    /// Decoded text of a buffer byte range, replacing invalid sequences.
    fn buffer_text(&self, at: TargetPtr, offset: u32, len: u32) -> Result<String, ReadError> {
        Ok(String::from_utf8_lossy(&self.buffer_bytes(at, offset, len)?).into_owned())
    }

    /// Decoded text of an atom, replacing invalid sequences.
    fn atom_text(&self, at: TargetPtr) -> Result<String, ReadError> {
        Ok(String::from_utf8_lossy(&self.atom_bytes(at)?).into_owned())
    }
}
