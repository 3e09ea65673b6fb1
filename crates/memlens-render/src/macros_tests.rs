//! Tests for macro expansion-tree rendering.

use memlens_core::{Atom, MacroListNode, MacroNode, MacroPart, MemoryImage, Record, TargetPtr};

use crate::fixtures::{ptr, str_single};
use crate::limits::RenderLimits;
use crate::macros::render_macro;

fn atom(image: &mut MemoryImage, at: u64, text: &str) -> TargetPtr {
    image.insert(
        ptr(at),
        Record::Atom(Atom {
            bytes: text.as_bytes().to_vec(),
        }),
    );
    ptr(at)
}

fn node(image: &mut MemoryImage, at: u64, part: MacroPart, next: u64) -> TargetPtr {
    image.insert(
        ptr(at),
        Record::Macro(MacroNode {
            part,
            next: ptr(next),
        }),
    );
    ptr(at)
}

fn list_entry(image: &mut MemoryImage, at: u64, value: TargetPtr, next: u64) {
    image.insert(
        ptr(at),
        Record::MacroList(MacroListNode {
            value,
            next: ptr(next),
        }),
    );
}

#[test]
fn null_head_is_empty() {
    let image = MemoryImage::new();
    assert_eq!(
        render_macro(&image, TargetPtr::NULL, &RenderLimits::default()),
        ""
    );
}

#[test]
fn atom_then_literal() {
    let mut image = MemoryImage::new();
    let cc = atom(&mut image, 0x10, "CC");
    let gcc = str_single(&mut image, 0x200, 0x300, "gcc");
    let head = node(&mut image, 0x100, MacroPart::Atom(cc), 0x101);
    node(&mut image, 0x101, MacroPart::Literal(gcc), 0);

    assert_eq!(render_macro(&image, head, &RenderLimits::default()), "CCgcc");
}

#[test]
fn null_parts_are_annotated() {
    let mut image = MemoryImage::new();
    let head = node(&mut image, 0x100, MacroPart::Atom(TargetPtr::NULL), 0x101);
    node(&mut image, 0x101, MacroPart::Literal(TargetPtr::NULL), 0x102);
    node(&mut image, 0x102, MacroPart::Reference(TargetPtr::NULL), 0);

    assert_eq!(
        render_macro(&image, head, &RenderLimits::default()),
        "[NULL atom][NULL literal][NULL reference]"
    );
}

#[test]
fn unknown_discriminant() {
    let mut image = MemoryImage::new();
    let head = node(&mut image, 0x100, MacroPart::Unknown(9), 0);
    assert_eq!(
        render_macro(&image, head, &RenderLimits::default()),
        "[BAD type]"
    );
}

#[test]
fn reference_list_joins_alternatives() {
    let mut image = MemoryImage::new();
    let a = str_single(&mut image, 0x200, 0x300, "basename");
    let b = str_single(&mut image, 0x210, 0x310, "foo.c");
    list_entry(&mut image, 0x400, a, 0x401);
    list_entry(&mut image, 0x401, b, 0);
    let head = node(&mut image, 0x100, MacroPart::Reference(ptr(0x400)), 0);

    assert_eq!(
        render_macro(&image, head, &RenderLimits::default()),
        "$(basename,foo.c)"
    );
}

#[test]
fn reference_entry_with_null_value() {
    let mut image = MemoryImage::new();
    list_entry(&mut image, 0x400, TargetPtr::NULL, 0);
    let head = node(&mut image, 0x100, MacroPart::Reference(ptr(0x400)), 0);

    assert_eq!(render_macro(&image, head, &RenderLimits::default()), "$()");
}

#[test]
fn cap_is_shared_across_nodes() {
    let mut image = MemoryImage::new();
    let long = str_single(&mut image, 0x200, 0x300, &"a".repeat(990));
    let tail = atom(&mut image, 0x10, &"b".repeat(20));
    let head = node(&mut image, 0x100, MacroPart::Literal(long), 0x101);
    node(&mut image, 0x101, MacroPart::Atom(tail), 0);

    let text = render_macro(&image, head, &RenderLimits::default());
    assert_eq!(text, format!("{}{}...", "a".repeat(990), "b".repeat(10)));
}

#[test]
fn truncated_literal_stops_the_chain() {
    let mut image = MemoryImage::new();
    let long = str_single(&mut image, 0x200, 0x300, &"x".repeat(1200));
    let tail = atom(&mut image, 0x10, "unreached");
    let head = node(&mut image, 0x100, MacroPart::Literal(long), 0x101);
    node(&mut image, 0x101, MacroPart::Atom(tail), 0);

    let text = render_macro(&image, head, &RenderLimits::default());
    assert_eq!(text, format!("{}...", "x".repeat(1000)));
}

#[test]
fn cyclic_chain_of_empty_atoms_terminates() {
    let mut image = MemoryImage::new();
    let empty = atom(&mut image, 0x10, "");
    node(&mut image, 0x100, MacroPart::Atom(empty), 0x100);

    // Zero characters per lap; the node budget ends the walk.
    assert_eq!(render_macro(&image, ptr(0x100), &RenderLimits::default()), "...");
}

#[test]
fn unreadable_node_is_annotated() {
    let image = MemoryImage::new();
    assert_eq!(
        render_macro(&image, ptr(0xdead), &RenderLimits::default()),
        "[BAD mem!]"
    );
}

#[test]
fn unreadable_list_entry_closes_the_reference() {
    let mut image = MemoryImage::new();
    let a = str_single(&mut image, 0x200, 0x300, "ok");
    list_entry(&mut image, 0x400, a, 0xdead);
    let head = node(&mut image, 0x100, MacroPart::Reference(ptr(0x400)), 0);

    assert_eq!(
        render_macro(&image, head, &RenderLimits::default()),
        "$(ok,[BAD mem!])"
    );
}
