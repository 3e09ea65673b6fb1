//! Automaton graph dump: one line per state.

use std::fmt::Write as _;

use memlens_core::{Edge, TargetMemory, TargetPtr};

use crate::cclass::{EPSILON, push_escaped};
use crate::limits::RenderLimits;
use crate::text::BAD_MEM;

/// Pattern metacharacters that take a backslash when an edge class is a
/// single literal character.
const METACHARS: &[char] = &['.', '|', '(', ')', '*', '?', '['];

/// Render the automaton at `value`, one node per line.
///
/// `current` highlights one state with a `*` cursor, the way a stepping
/// session shows the active state; pass `None` for no cursor. Node counts
/// above the cap render the `{ nnodes=0x... }` summary, the same fallback
/// shape as an oversized bitset.
pub fn render_automaton(
    mem: &dyn TargetMemory,
    value: TargetPtr,
    current: Option<u32>,
    limits: &RenderLimits,
) -> String {
    if value.is_null() {
        return "NULL".to_string();
    }
    let Ok(nnodes) = mem.automaton_len(value) else {
        return BAD_MEM.to_string();
    };
    if nnodes > limits.get_node_cap() {
        return format!("{{ nnodes={:#x} }}", nnodes);
    }

    let mut out = String::new();
    for node in 0..nnodes {
        let cursor = if current == Some(node) { '*' } else { ' ' };
        let Ok(header) = mem.automaton_node(value, node) else {
            writeln!(out, "{cursor}{node:4}: {BAD_MEM}").unwrap();
            continue;
        };
        let final_mark = if header.nfinals > 0 { 'F' } else { ' ' };
        write!(out, "{cursor}{node:4}: {final_mark} ").unwrap();
        for index in 0..header.nedges {
            match mem.automaton_edge(value, node, index) {
                Ok(edge) => {
                    push_edge_class(&mut out, mem, &edge);
                    write!(out, "->{} ", edge.dest).unwrap();
                }
                Err(_) => {
                    out.push_str(BAD_MEM);
                    break;
                }
            }
        }
        if header.nfinals > 0 {
            out.push_str("\t\tF={");
            for index in 0..header.nfinals {
                if index > 0 {
                    out.push(' ');
                }
                match mem.automaton_final(value, node, index) {
                    Ok(p) if p.is_null() => out.push_str("[NULL atom]"),
                    Ok(p) => match mem.atom_text(p) {
                        Ok(name) => write!(out, "\"{name}\"").unwrap(),
                        Err(_) => out.push_str(BAD_MEM),
                    },
                    Err(_) => {
                        out.push_str(BAD_MEM);
                        break;
                    }
                }
            }
            out.push('}');
        }
        out.push('\n');
    }
    out
}

/// Render one edge's character class: ε, a bare escaped character, or a
/// bracketed range list.
fn push_edge_class(out: &mut String, mem: &dyn TargetMemory, edge: &Edge) {
    if edge.cclass.is_null() {
        out.push_str(EPSILON);
        return;
    }
    let Ok(len) = mem.cclass_len(edge.cclass) else {
        out.push_str(BAD_MEM);
        return;
    };

    // A single-character class prints bare, with metachars escaped so the
    // dump still reads like the pattern it came from.
    if len == 1 {
        match mem.cclass_interval(edge.cclass, 0) {
            Ok(iv) if u64::from(iv.hi) == u64::from(iv.lo) + 1 => {
                if char::from_u32(iv.lo).is_some_and(|c| METACHARS.contains(&c)) {
                    out.push('\\');
                }
                push_escaped(out, iv.lo);
                return;
            }
            Ok(_) => {}
            Err(_) => {
                out.push_str(BAD_MEM);
                return;
            }
        }
    }

    out.push('[');
    for index in 0..len {
        let Ok(iv) = mem.cclass_interval(edge.cclass, index) else {
            out.push_str(BAD_MEM);
            break;
        };
        push_escaped(out, iv.lo);
        if u64::from(iv.lo) + 1 < u64::from(iv.hi) {
            out.push('-');
            push_escaped(out, iv.hi.wrapping_sub(1));
        }
    }
    out.push(']');
}
