//! Segment-chain rendering: the `str` structure.

use memlens_core::{TargetMemory, TargetPtr};

use crate::limits::RenderLimits;
use crate::text::{BAD_MEM, CappedText};

/// Render the segment chain headed at `head`.
///
/// Returns the decoded text and whether it was cut at the character cap.
/// A null head is the empty string. Corrupted segments are annotated in
/// place and the walk continues past them; only output growth ends a walk
/// early, which also bounds cyclic chains — every segment contributes at
/// least one character, marker or decoded.
pub fn render_str(mem: &dyn TargetMemory, head: TargetPtr, limits: &RenderLimits) -> (String, bool) {
    let mut text = CappedText::new(limits.get_text_cap());
    render_str_into(mem, head, &mut text);
    let truncated = text.is_truncated();
    (text.into_string(), truncated)
}

/// Render a segment chain into an existing capped buffer.
///
/// Macro rendering shares one buffer across its delegated literal and
/// reference renders, so the cap covers the whole value.
pub(crate) fn render_str_into(mem: &dyn TargetMemory, head: TargetPtr, text: &mut CappedText) {
    let mut at = head;
    while !at.is_null() && !text.is_truncated() {
        let Ok(seg) = mem.segment(at) else {
            // The next link lives inside the unreadable record; the rest
            // of the chain is lost.
            text.push_str(BAD_MEM);
            return;
        };
        if seg.buffer.is_null() {
            text.push_str("[NULL seg!]");
        } else {
            match mem.buffer_refs(seg.buffer) {
                Err(_) => text.push_str(BAD_MEM),
                // Released storage; the bytes are garbage.
                Ok(0) => text.push_str("[FREE seg!]"),
                Ok(_) if seg.len == 0 => text.push_str("[ZERO len!]"),
                Ok(_) => match mem.buffer_text(seg.buffer, seg.offset, seg.len) {
                    Ok(decoded) => text.push_str(&decoded),
                    Err(_) => text.push_str(BAD_MEM),
                },
            }
        }
        at = seg.next;
    }
}
