//! Tag-keyed dispatch from target values to formatters.
//!
//! The host resolves a value's declared type; the registry matches the
//! pointer-to-tagged-record shape against registered tags and picks the
//! formatter. No runtime type reflection is involved: the tag string is
//! the whole contract.

use indexmap::IndexMap;

use memlens_core::{TargetMemory, TargetPtr, TargetValue};

use crate::automaton::render_automaton;
use crate::bitset::render_bitset;
use crate::cclass::render_cclass;
use crate::limits::RenderLimits;
use crate::macros::render_macro;
use crate::seg::render_str;

/// How the host should present rendered text.
///
/// String-like output may be quoted or re-escaped by the host UI; plain
/// output is shown verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DisplayHint {
    StringLike,
    Plain,
}

/// A rendered target value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    pub hint: DisplayHint,
}

/// One renderer, selectable by record tag.
pub trait ValueFormatter {
    /// The record tag this formatter claims, e.g. `"str"`.
    fn tag(&self) -> &'static str;

    /// Presentation hint for this formatter's output.
    fn hint(&self) -> DisplayHint;

    /// Render the record at `at`. A null `at` must still render; the
    /// per-tag null conventions live here, not in the registry.
    fn render(&self, mem: &dyn TargetMemory, at: TargetPtr, limits: &RenderLimits) -> String;
}

/// Formatter registry: matches a value's declared type to a formatter.
///
/// A value matches when its type, with qualifiers and aliases stripped,
/// is a pointer to a tagged record whose tag is registered.
pub struct FormatterRegistry {
    formatters: IndexMap<&'static str, Box<dyn ValueFormatter>>,
    limits: RenderLimits,
}

impl FormatterRegistry {
    /// Registry with no tags claimed.
    pub fn empty() -> Self {
        Self {
            formatters: IndexMap::new(),
            limits: RenderLimits::default(),
        }
    }

    /// Registry with the built-in formatters and default limits.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(Box::new(StrFormatter));
        registry.register(Box::new(MacroFormatter));
        registry.register(Box::new(CclassFormatter));
        registry.register(Box::new(BitsetFormatter));
        registry.register(Box::new(AutomatonFormatter));
        registry
    }

    /// Set the render limits used by [`FormatterRegistry::render_value`].
    pub fn limits(mut self, limits: RenderLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Add a formatter, replacing any earlier claim on the same tag.
    pub fn register(&mut self, formatter: Box<dyn ValueFormatter>) {
        self.formatters.insert(formatter.tag(), formatter);
    }

    /// Registered tags, in registration order.
    pub fn tags(&self) -> impl Iterator<Item = &'static str> {
        self.formatters.keys().copied()
    }

    /// Select the formatter for a value, if its type matches one.
    pub fn match_formatter(&self, value: &TargetValue) -> Option<&dyn ValueFormatter> {
        let tag = value.ty.pointee_tag()?;
        self.formatters.get(tag).map(|f| f.as_ref())
    }

    /// Render a value if a formatter matches its type.
    pub fn render_value(&self, mem: &dyn TargetMemory, value: &TargetValue) -> Option<Rendered> {
        let formatter = self.match_formatter(value)?;
        Some(Rendered {
            text: formatter.render(mem, value.addr, &self.limits),
            hint: formatter.hint(),
        })
    }
}

struct StrFormatter;

impl ValueFormatter for StrFormatter {
    fn tag(&self) -> &'static str {
        "str"
    }
    fn hint(&self) -> DisplayHint {
        DisplayHint::StringLike
    }
    fn render(&self, mem: &dyn TargetMemory, at: TargetPtr, limits: &RenderLimits) -> String {
        render_str(mem, at, limits).0
    }
}

struct MacroFormatter;

impl ValueFormatter for MacroFormatter {
    fn tag(&self) -> &'static str {
        "macro"
    }
    fn hint(&self) -> DisplayHint {
        DisplayHint::StringLike
    }
    fn render(&self, mem: &dyn TargetMemory, at: TargetPtr, limits: &RenderLimits) -> String {
        render_macro(mem, at, limits)
    }
}

struct CclassFormatter;

impl ValueFormatter for CclassFormatter {
    fn tag(&self) -> &'static str {
        "cclass"
    }
    fn hint(&self) -> DisplayHint {
        DisplayHint::Plain
    }
    fn render(&self, mem: &dyn TargetMemory, at: TargetPtr, _limits: &RenderLimits) -> String {
        render_cclass(mem, at)
    }
}

struct BitsetFormatter;

impl ValueFormatter for BitsetFormatter {
    fn tag(&self) -> &'static str {
        "bitset"
    }
    fn hint(&self) -> DisplayHint {
        DisplayHint::Plain
    }
    fn render(&self, mem: &dyn TargetMemory, at: TargetPtr, limits: &RenderLimits) -> String {
        render_bitset(mem, at, limits)
    }
}

struct AutomatonFormatter;

impl ValueFormatter for AutomatonFormatter {
    fn tag(&self) -> &'static str {
        "nfa"
    }
    fn hint(&self) -> DisplayHint {
        DisplayHint::Plain
    }
    fn render(&self, mem: &dyn TargetMemory, at: TargetPtr, limits: &RenderLimits) -> String {
        render_automaton(mem, at, None, limits)
    }
}
