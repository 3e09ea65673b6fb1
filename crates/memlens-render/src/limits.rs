//! Output-growth policy for renders.

/// Default character cap on string-like rendering.
pub const DEFAULT_TEXT_CAP: usize = 1000;

/// Default bit count above which a bitset renders as a summary.
pub const DEFAULT_BITSET_CAP: u32 = 10_000;

/// Default node count above which an automaton renders as a summary.
pub const DEFAULT_NODE_CAP: u32 = 10_000;

/// Structural bounds on rendered output.
///
/// The inspected structures are unowned and possibly corrupted: a chain
/// may be cyclic, a stored count may be garbage. These caps are the
/// termination guarantee for chain walks and the cost guard for oversized
/// sets. There is no timeout; bounding is purely structural.
#[derive(Clone, Copy, Debug)]
pub struct RenderLimits {
    /// Maximum rendered characters for string/macro chains (default: 1000).
    pub(crate) text_cap: usize,
    /// Largest bit count expanded in full (default: 10,000).
    pub(crate) bitset_cap: u32,
    /// Largest node count expanded in full (default: 10,000).
    pub(crate) node_cap: u32,
}

impl Default for RenderLimits {
    fn default() -> Self {
        Self {
            text_cap: DEFAULT_TEXT_CAP,
            bitset_cap: DEFAULT_BITSET_CAP,
            node_cap: DEFAULT_NODE_CAP,
        }
    }
}

impl RenderLimits {
    /// Create new limits with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the character cap for string-like rendering.
    pub fn text_cap(mut self, cap: usize) -> Self {
        self.text_cap = cap;
        self
    }

    /// Set the bit-count threshold for bitset summarization.
    pub fn bitset_cap(mut self, cap: u32) -> Self {
        self.bitset_cap = cap;
        self
    }

    /// Set the node-count threshold for automaton summarization.
    pub fn node_cap(mut self, cap: u32) -> Self {
        self.node_cap = cap;
        self
    }

    pub fn get_text_cap(&self) -> usize {
        self.text_cap
    }
    pub fn get_bitset_cap(&self) -> u32 {
        self.bitset_cap
    }
    pub fn get_node_cap(&self) -> u32 {
        self.node_cap
    }
}
