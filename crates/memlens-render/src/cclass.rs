//! Character-class rendering and codepoint escaping.

use std::fmt::Write as _;

use memlens_core::{MAX_CHAR, TargetMemory, TargetPtr};

use crate::text::BAD_MEM;

/// The empty-set symbol: a null class is ε, distinct from a present class
/// with no intervals, which is `[]`.
pub(crate) const EPSILON: &str = "\u{3b5}";

/// Render the character class at `value` in bracketed range notation.
///
/// Intervals render in stored order, never re-sorted. An interval that
/// starts at or before its predecessor's end is flagged `*OVERLAP*` and
/// rendering continues; a well-formed class never trips this.
pub fn render_cclass(mem: &dyn TargetMemory, value: TargetPtr) -> String {
    if value.is_null() {
        return EPSILON.to_string();
    }
    let Ok(len) = mem.cclass_len(value) else {
        return BAD_MEM.to_string();
    };

    let mut out = String::from("[");
    // -1 admits an interval starting at codepoint 0.
    let mut last_hi: i64 = -1;
    for index in 0..len {
        let Ok(iv) = mem.cclass_interval(value, index) else {
            // Element reads that fail once fail for the rest of the array.
            out.push_str(BAD_MEM);
            break;
        };
        if i64::from(iv.lo) <= last_hi {
            out.push_str("*OVERLAP*");
        }
        push_escaped(&mut out, iv.lo);
        let lo = u64::from(iv.lo);
        let hi = u64::from(iv.hi);
        if hi > lo + 2 {
            out.push('-');
        }
        if iv.hi != MAX_CHAR && hi > lo + 1 {
            // Inclusive upper bound; MAX_CHAR means unbounded above.
            push_escaped(&mut out, iv.hi - 1);
        }
        last_hi = i64::from(iv.hi);
    }
    out.push(']');
    out
}

/// Escape one codepoint for class notation. First match wins.
///
/// Values past the codepoint domain can occur in corrupted snapshots and
/// get explicit `*MAXCHAR*` / `*TOOBIG*` forms instead of a panic.
pub(crate) fn push_escaped(out: &mut String, ch: u32) {
    match ch {
        0 => out.push_str("\\0"),
        c if c == '\\' as u32 || c == '-' as u32 || c == ']' as u32 => {
            out.push('\\');
            out.push(c as u8 as char);
        }
        c if c == '\n' as u32 => out.push_str("\\n"),
        c if c == '\r' as u32 => out.push_str("\\r"),
        c if c == '\t' as u32 => out.push_str("\\t"),
        c if c < 0x20 => write!(out, "\\x{c:02X}").unwrap(),
        c if c < 0x7f => out.push(c as u8 as char),
        c if c <= 0xffff => write!(out, "\\u{c:04X}").unwrap(),
        c if c <= 0x10ffff => write!(out, "\\u+{c:06X}").unwrap(),
        MAX_CHAR => out.push_str("*MAXCHAR*"),
        c => write!(out, "*TOOBIG({c:#X})*").unwrap(),
    }
}
