//! Human-readable renderers for memlens target values.
//!
//! Each renderer turns one runtime structure into canonical text for an
//! inspection session. Corruption never aborts a render: structural
//! damage becomes an inline marker, ordering anomalies are flagged where
//! they sit, and output growth is bounded by [`RenderLimits`] so even
//! cyclic chains produce a finite answer.

pub mod automaton;
pub mod bitset;
pub mod cclass;
pub mod limits;
pub mod macros;
pub mod registry;
pub mod seg;
mod text;

#[cfg(test)]
mod fixtures;

#[cfg(test)]
mod macros_tests;

// Re-export commonly used items at crate root
pub use automaton::render_automaton;
pub use bitset::render_bitset;
pub use cclass::render_cclass;
pub use limits::{DEFAULT_BITSET_CAP, DEFAULT_NODE_CAP, DEFAULT_TEXT_CAP, RenderLimits};
pub use macros::render_macro;
pub use registry::{DisplayHint, FormatterRegistry, Rendered, ValueFormatter};
pub use seg::render_str;
