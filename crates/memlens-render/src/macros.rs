//! Macro expansion-tree rendering.

use memlens_core::{MacroPart, TargetMemory, TargetPtr};

use crate::limits::RenderLimits;
use crate::seg::render_str_into;
use crate::text::{BAD_MEM, CappedText};

/// Render the macro chain headed at `head`.
///
/// Atoms, literals, and reference lists flatten onto one line. The
/// character cap spans the whole chain including the delegated string
/// renders; it is not reset per node. Unlike segments, a macro node can
/// contribute zero characters (an empty atom), so the walk also carries a
/// node budget to stay finite on cyclic chains.
pub fn render_macro(mem: &dyn TargetMemory, head: TargetPtr, limits: &RenderLimits) -> String {
    let mut text = CappedText::new(limits.get_text_cap());
    let mut fuel = limits.get_text_cap();
    let mut at = head;
    while !at.is_null() && !text.is_truncated() {
        if fuel == 0 {
            text.mark_truncated();
            break;
        }
        fuel -= 1;
        let Ok(node) = mem.macro_node(at) else {
            text.push_str(BAD_MEM);
            break;
        };
        match node.part {
            MacroPart::Atom(p) if p.is_null() => text.push_str("[NULL atom]"),
            MacroPart::Atom(p) => match mem.atom_text(p) {
                Ok(atom) => text.push_str(&atom),
                Err(_) => text.push_str(BAD_MEM),
            },
            MacroPart::Literal(p) if p.is_null() => text.push_str("[NULL literal]"),
            MacroPart::Literal(p) => render_str_into(mem, p, &mut text),
            MacroPart::Reference(p) if p.is_null() => text.push_str("[NULL reference]"),
            MacroPart::Reference(p) => render_reference(mem, p, &mut text, &mut fuel),
            MacroPart::Unknown(_) => text.push_str("[BAD type]"),
        }
        at = node.next;
    }
    text.into_string()
}

/// Render a reference's alternative list as `$(a,b,...)`.
fn render_reference(
    mem: &dyn TargetMemory,
    list: TargetPtr,
    text: &mut CappedText,
    fuel: &mut usize,
) {
    text.push_str("$(");
    let mut at = list;
    while !at.is_null() && !text.is_truncated() {
        if *fuel == 0 {
            text.mark_truncated();
            return;
        }
        *fuel -= 1;
        let Ok(entry) = mem.macro_list_node(at) else {
            text.push_str(BAD_MEM);
            break;
        };
        render_str_into(mem, entry.value, text);
        at = entry.next;
        if !at.is_null() {
            text.push(',');
        }
    }
    text.push(')');
}
