//! Copied-out snapshots of target records.
//!
//! `MemoryImage` is the carrier a host fills when it snapshots eagerly, or
//! loads from a JSON export of an earlier session. Records are keyed by
//! their target address and kept in insertion order, so image dumps and
//! walks are deterministic.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::addr::TargetPtr;
use crate::mem::{ReadError, TargetMemory};
use crate::record::{
    BitsetHeader, Edge, Interval, MacroListNode, MacroNode, NodeHeader, Record, Segment,
};

/// Failure to load a snapshot image.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    /// The export maps a record at address 0, which no walker could reach.
    #[error("record at null address")]
    NullAddress,
}

/// In-memory snapshot: records copied out of the target, keyed by address.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryImage {
    records: IndexMap<u64, Record>,
}

impl MemoryImage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `record` at `at`, replacing any record already there.
    ///
    /// Panics on a null address; the null link is reserved for "absent".
    pub fn insert(&mut self, at: TargetPtr, record: Record) {
        assert!(!at.is_null(), "record at null address");
        self.records.insert(at.get(), record);
    }

    pub fn get(&self, at: TargetPtr) -> Option<&Record> {
        self.records.get(&at.get())
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (TargetPtr, &Record)> {
        self.records
            .iter()
            .map(|(&addr, record)| (TargetPtr::new(addr), record))
    }

    /// Parse an image from its JSON interchange form.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        let image: Self = serde_json::from_str(json)?;
        if image.records.contains_key(&0) {
            return Err(SnapshotError::NullAddress);
        }
        Ok(image)
    }

    /// Serialize the image to its JSON interchange form.
    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap()
    }

    fn record(&self, at: TargetPtr) -> Result<&Record, ReadError> {
        self.records.get(&at.get()).ok_or(ReadError::Unmapped(at))
    }

    fn wrong_kind(at: TargetPtr, expected: &'static str, found: &Record) -> ReadError {
        ReadError::WrongKind {
            addr: at,
            expected,
            found: found.kind(),
        }
    }
}

impl TargetMemory for MemoryImage {
    fn segment(&self, at: TargetPtr) -> Result<Segment, ReadError> {
        match self.record(at)? {
            Record::Segment(seg) => Ok(*seg),
            other => Err(Self::wrong_kind(at, "segment", other)),
        }
    }

    fn buffer_refs(&self, at: TargetPtr) -> Result<u32, ReadError> {
        match self.record(at)? {
            Record::Buffer(buf) => Ok(buf.refs),
            other => Err(Self::wrong_kind(at, "buffer", other)),
        }
    }

    fn buffer_bytes(&self, at: TargetPtr, offset: u32, len: u32) -> Result<Vec<u8>, ReadError> {
        let buf = match self.record(at)? {
            Record::Buffer(buf) => buf,
            other => return Err(Self::wrong_kind(at, "buffer", other)),
        };
        let size = buf.data.len() as u64;
        if u64::from(offset) + u64::from(len) > size {
            return Err(ReadError::OutOfRange {
                addr: at,
                offset,
                len,
                size: size as u32,
            });
        }
        let start = offset as usize;
        Ok(buf.data[start..start + len as usize].to_vec())
    }

    fn atom_bytes(&self, at: TargetPtr) -> Result<Vec<u8>, ReadError> {
        match self.record(at)? {
            Record::Atom(atom) => Ok(atom.bytes.clone()),
            other => Err(Self::wrong_kind(at, "atom", other)),
        }
    }

    fn macro_node(&self, at: TargetPtr) -> Result<MacroNode, ReadError> {
        match self.record(at)? {
            Record::Macro(node) => Ok(*node),
            other => Err(Self::wrong_kind(at, "macro", other)),
        }
    }

    fn macro_list_node(&self, at: TargetPtr) -> Result<MacroListNode, ReadError> {
        match self.record(at)? {
            Record::MacroList(entry) => Ok(*entry),
            other => Err(Self::wrong_kind(at, "macro_list", other)),
        }
    }

    fn cclass_len(&self, at: TargetPtr) -> Result<u32, ReadError> {
        match self.record(at)? {
            Record::Cclass(cc) => Ok(cc.intervals.len() as u32),
            other => Err(Self::wrong_kind(at, "cclass", other)),
        }
    }

    fn cclass_interval(&self, at: TargetPtr, index: u32) -> Result<Interval, ReadError> {
        let cc = match self.record(at)? {
            Record::Cclass(cc) => cc,
            other => return Err(Self::wrong_kind(at, "cclass", other)),
        };
        cc.intervals
            .get(index as usize)
            .copied()
            .ok_or(ReadError::OutOfBounds {
                addr: at,
                index,
                len: cc.intervals.len() as u32,
            })
    }

    fn bitset_header(&self, at: TargetPtr) -> Result<BitsetHeader, ReadError> {
        match self.record(at)? {
            Record::Bitset(bs) => Ok(BitsetHeader {
                nbits: bs.nbits,
                width: bs.width,
            }),
            other => Err(Self::wrong_kind(at, "bitset", other)),
        }
    }

    fn bitset_word(&self, at: TargetPtr, index: u32) -> Result<u64, ReadError> {
        let bs = match self.record(at)? {
            Record::Bitset(bs) => bs,
            other => return Err(Self::wrong_kind(at, "bitset", other)),
        };
        bs.words
            .get(index as usize)
            .copied()
            .ok_or(ReadError::OutOfBounds {
                addr: at,
                index,
                len: bs.words.len() as u32,
            })
    }

    fn automaton_len(&self, at: TargetPtr) -> Result<u32, ReadError> {
        match self.record(at)? {
            Record::Automaton(nfa) => Ok(nfa.nodes.len() as u32),
            other => Err(Self::wrong_kind(at, "automaton", other)),
        }
    }

    fn automaton_node(&self, at: TargetPtr, node: u32) -> Result<NodeHeader, ReadError> {
        let nfa = match self.record(at)? {
            Record::Automaton(nfa) => nfa,
            other => return Err(Self::wrong_kind(at, "automaton", other)),
        };
        nfa.nodes
            .get(node as usize)
            .map(|n| NodeHeader {
                nedges: n.edges.len() as u32,
                nfinals: n.finals.len() as u32,
            })
            .ok_or(ReadError::OutOfBounds {
                addr: at,
                index: node,
                len: nfa.nodes.len() as u32,
            })
    }

    fn automaton_edge(&self, at: TargetPtr, node: u32, index: u32) -> Result<Edge, ReadError> {
        let nfa = match self.record(at)? {
            Record::Automaton(nfa) => nfa,
            other => return Err(Self::wrong_kind(at, "automaton", other)),
        };
        let n = nfa.nodes.get(node as usize).ok_or(ReadError::OutOfBounds {
            addr: at,
            index: node,
            len: nfa.nodes.len() as u32,
        })?;
        n.edges
            .get(index as usize)
            .copied()
            .ok_or(ReadError::OutOfBounds {
                addr: at,
                index,
                len: n.edges.len() as u32,
            })
    }

    fn automaton_final(
        &self,
        at: TargetPtr,
        node: u32,
        index: u32,
    ) -> Result<TargetPtr, ReadError> {
        let nfa = match self.record(at)? {
            Record::Automaton(nfa) => nfa,
            other => return Err(Self::wrong_kind(at, "automaton", other)),
        };
        let n = nfa.nodes.get(node as usize).ok_or(ReadError::OutOfBounds {
            addr: at,
            index: node,
            len: nfa.nodes.len() as u32,
        })?;
        n.finals
            .get(index as usize)
            .copied()
            .ok_or(ReadError::OutOfBounds {
                addr: at,
                index,
                len: n.finals.len() as u32,
            })
    }
}
