//! Tests for the snapshot image and its read trait.

use crate::image::{MemoryImage, SnapshotError};
use crate::mem::{ReadError, TargetMemory};
use crate::record::{Atom, Bitset, Buffer, Cclass, Interval, Record, Segment, WordWidth};
use crate::TargetPtr;

fn sample_image() -> MemoryImage {
    let mut image = MemoryImage::new();
    image.insert(
        TargetPtr::new(0x1000),
        Record::Buffer(Buffer {
            refs: 2,
            data: b"hello world".to_vec(),
        }),
    );
    image.insert(
        TargetPtr::new(0x2000),
        Record::Segment(Segment {
            buffer: TargetPtr::new(0x1000),
            offset: 0,
            len: 5,
            next: TargetPtr::NULL,
        }),
    );
    image
}

#[test]
fn read_back_inserted_records() {
    let image = sample_image();

    let seg = image.segment(TargetPtr::new(0x2000)).unwrap();
    assert_eq!(seg.buffer, TargetPtr::new(0x1000));
    assert_eq!(seg.len, 5);

    assert_eq!(image.buffer_refs(TargetPtr::new(0x1000)).unwrap(), 2);
    assert_eq!(
        image.buffer_bytes(TargetPtr::new(0x1000), 6, 5).unwrap(),
        b"world"
    );
    assert_eq!(
        image.buffer_text(TargetPtr::new(0x1000), 0, 5).unwrap(),
        "hello"
    );
}

#[test]
fn unmapped_address() {
    let image = sample_image();
    let err = image.segment(TargetPtr::new(0xdead)).unwrap_err();
    assert_eq!(err, ReadError::Unmapped(TargetPtr::new(0xdead)));
    assert!(err.to_string().contains("0xdead"));
}

#[test]
fn wrong_record_kind() {
    let image = sample_image();
    let err = image.buffer_refs(TargetPtr::new(0x2000)).unwrap_err();
    assert_eq!(
        err,
        ReadError::WrongKind {
            addr: TargetPtr::new(0x2000),
            expected: "buffer",
            found: "segment",
        }
    );
    assert!(err.to_string().contains("expected buffer"));
}

#[test]
fn byte_range_bounds() {
    let image = sample_image();

    // Range runs past the end of the 11-byte buffer.
    let err = image
        .buffer_bytes(TargetPtr::new(0x1000), 8, 4)
        .unwrap_err();
    assert!(matches!(err, ReadError::OutOfRange { size: 11, .. }));

    // Offset alone past the end also fails.
    assert!(image.buffer_bytes(TargetPtr::new(0x1000), 12, 0).is_err());
}

#[test]
fn element_reads_check_bounds() {
    let mut image = MemoryImage::new();
    image.insert(
        TargetPtr::new(0x10),
        Record::Cclass(Cclass {
            intervals: vec![Interval { lo: 65, hi: 70 }],
        }),
    );
    image.insert(
        TargetPtr::new(0x20),
        Record::Bitset(Bitset {
            nbits: 16,
            width: WordWidth::W8,
            words: vec![0xff, 0x01],
        }),
    );

    assert_eq!(image.cclass_len(TargetPtr::new(0x10)).unwrap(), 1);
    assert_eq!(
        image.cclass_interval(TargetPtr::new(0x10), 0).unwrap(),
        Interval { lo: 65, hi: 70 }
    );
    assert_eq!(
        image.cclass_interval(TargetPtr::new(0x10), 1).unwrap_err(),
        ReadError::OutOfBounds {
            addr: TargetPtr::new(0x10),
            index: 1,
            len: 1,
        }
    );

    assert_eq!(image.bitset_word(TargetPtr::new(0x20), 1).unwrap(), 0x01);
    assert!(image.bitset_word(TargetPtr::new(0x20), 2).is_err());
}

#[test]
fn lossy_atom_decode() {
    let mut image = MemoryImage::new();
    image.insert(
        TargetPtr::new(0x30),
        Record::Atom(Atom {
            bytes: vec![b'a', 0xff, b'b'],
        }),
    );
    assert_eq!(
        image.atom_text(TargetPtr::new(0x30)).unwrap(),
        "a\u{fffd}b"
    );
}

#[test]
#[should_panic(expected = "record at null address")]
fn insert_at_null_panics() {
    let mut image = MemoryImage::new();
    image.insert(
        TargetPtr::NULL,
        Record::Atom(Atom { bytes: Vec::new() }),
    );
}

#[test]
fn json_round_trip() {
    let image = sample_image();
    let json = image.to_json();
    let back = MemoryImage::from_json(&json).unwrap();
    assert_eq!(back, image);
}

#[test]
fn json_shape() {
    let json = r#"{
        "records": {
            "4096": {"kind": "buffer", "refs": 1, "data": [104, 105]},
            "8192": {"kind": "segment", "buffer": 4096, "offset": 0, "len": 2, "next": 0}
        }
    }"#;
    let image = MemoryImage::from_json(json).unwrap();
    assert_eq!(image.len(), 2);
    assert_eq!(image.buffer_text(TargetPtr::new(4096), 0, 2).unwrap(), "hi");

    let seg = image.segment(TargetPtr::new(8192)).unwrap();
    assert!(seg.next.is_null());
}

#[test]
fn json_rejects_unknown_kind() {
    let json = r#"{"records": {"16": {"kind": "mystery"}}}"#;
    assert!(matches!(
        MemoryImage::from_json(json),
        Err(SnapshotError::Json(_))
    ));
}

#[test]
fn json_rejects_null_address() {
    let json = r#"{"records": {"0": {"kind": "atom", "bytes": []}}}"#;
    assert!(matches!(
        MemoryImage::from_json(json),
        Err(SnapshotError::NullAddress)
    ));
}

#[test]
fn iteration_preserves_insertion_order() {
    let image = sample_image();
    let addrs: Vec<_> = image.iter().map(|(at, _)| at.get()).collect();
    assert_eq!(addrs, vec![0x1000, 0x2000]);
}
