//! Snapshot views of the target runtime's records.
//!
//! Field layout mirrors the target's structs one-to-one; every view is
//! plain data copied out of the snapshot, never a live reference into it.
//! Links between records stay as [`TargetPtr`] values so that damaged or
//! cyclic graphs remain representable.

use serde::{Deserialize, Serialize};

use crate::addr::TargetPtr;

/// One-past-the-last valid codepoint; doubles as the "unbounded high"
/// sentinel on an interval.
pub const MAX_CHAR: u32 = 0x110000;

/// One segment of a segmented string.
///
/// `buffer` points at the shared byte store, `next` links the chain. A
/// string value is the head of such a chain; a null head is the empty
/// string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
    pub buffer: TargetPtr,
    pub offset: u32,
    pub len: u32,
    pub next: TargetPtr,
}

/// Ref-counted byte store shared between segments.
///
/// `refs == 0` marks the buffer released; its bytes are garbage and must
/// not be decoded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Buffer {
    pub refs: u32,
    pub data: Vec<u8>,
}

/// Interned NUL-terminated text, stored without the terminator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atom {
    pub bytes: Vec<u8>,
}

/// One node of a macro expansion tree.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroNode {
    pub part: MacroPart,
    pub next: TargetPtr,
}

/// Payload variants of a macro node.
///
/// The target encodes the discriminant as a raw integer; values outside
/// the known range survive as `Unknown` so the renderer can flag them
/// instead of failing the load.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MacroPart {
    /// Interned atom text.
    Atom(TargetPtr),
    /// Literal segment-chain string.
    Literal(TargetPtr),
    /// Head of a list of alternative string values, `$(a,b,...)`.
    Reference(TargetPtr),
    /// Unrecognized discriminant, kept verbatim.
    Unknown(u32),
}

/// Entry in a reference's alternative list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MacroListNode {
    pub value: TargetPtr,
    pub next: TargetPtr,
}

/// Half-open codepoint interval `[lo, hi)`.
///
/// `hi == MAX_CHAR` means the interval is unbounded above.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub lo: u32,
    pub hi: u32,
}

/// Character class: intervals over `[0, MAX_CHAR]` in stored order.
///
/// Well-formed classes keep intervals ascending and disjoint, but a
/// snapshot may violate that; the stored order is preserved so the
/// renderer can flag it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cclass {
    pub intervals: Vec<Interval>,
}

/// Storage word width of a bitset, in bits.
///
/// An enum rather than a bare integer so that layouts with impossible
/// widths are unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum WordWidth {
    W8,
    W16,
    W32,
    W64,
}

impl WordWidth {
    pub fn bits(self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }
}

/// Error for word widths other than 8/16/32/64.
#[derive(Debug, thiserror::Error)]
#[error("unsupported bitset word width: {0} bits")]
pub struct BadWordWidth(pub u32);

impl TryFrom<u32> for WordWidth {
    type Error = BadWordWidth;

    fn try_from(bits: u32) -> Result<Self, BadWordWidth> {
        match bits {
            8 => Ok(Self::W8),
            16 => Ok(Self::W16),
            32 => Ok(Self::W32),
            64 => Ok(Self::W64),
            other => Err(BadWordWidth(other)),
        }
    }
}

impl From<WordWidth> for u32 {
    fn from(width: WordWidth) -> u32 {
        width.bits()
    }
}

/// Bitset: `nbits` valid bits packed into fixed-width words.
///
/// Bit `i` is set iff bit `i % W` of `words[i / W]` is 1. Words narrower
/// than 64 bits are stored zero-extended.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bitset {
    pub nbits: u32,
    pub width: WordWidth,
    pub words: Vec<u64>,
}

/// Bit count and word width of a bitset, read ahead of any word access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BitsetHeader {
    pub nbits: u32,
    pub width: WordWidth,
}

/// Automaton graph: indexed nodes with class-labelled edges.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Automaton {
    pub nodes: Vec<AutomatonNode>,
}

/// One automaton state.
///
/// `finals` holds atom pointers naming the accept values attached to the
/// state; a non-empty list marks the state final.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonNode {
    pub edges: Vec<Edge>,
    pub finals: Vec<TargetPtr>,
}

/// One automaton edge. A null `cclass` is an epsilon edge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub cclass: TargetPtr,
    pub dest: u32,
}

/// Edge and final counts of one automaton node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NodeHeader {
    pub nedges: u32,
    pub nfinals: u32,
}

/// A record stored at one target address.
///
/// This is the unit of the snapshot interchange format: internally tagged
/// by `kind` so an image dump stays readable.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Record {
    Segment(Segment),
    Buffer(Buffer),
    Atom(Atom),
    Macro(MacroNode),
    MacroList(MacroListNode),
    Cclass(Cclass),
    Bitset(Bitset),
    Automaton(Automaton),
}

impl Record {
    /// Stable name of the record kind, as used in `kind` tags and
    /// wrong-kind errors.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Segment(_) => "segment",
            Self::Buffer(_) => "buffer",
            Self::Atom(_) => "atom",
            Self::Macro(_) => "macro",
            Self::MacroList(_) => "macro_list",
            Self::Cclass(_) => "cclass",
            Self::Bitset(_) => "bitset",
            Self::Automaton(_) => "automaton",
        }
    }
}
