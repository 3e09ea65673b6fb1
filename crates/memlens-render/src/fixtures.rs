//! Shared fixture builders for renderer tests.

use memlens_core::{Buffer, MemoryImage, Record, Segment, TargetPtr};

pub(crate) fn ptr(at: u64) -> TargetPtr {
    TargetPtr::new(at)
}

/// Insert a buffer holding `data` with the given refcount.
pub(crate) fn buffer(image: &mut MemoryImage, at: u64, refs: u32, data: &[u8]) {
    image.insert(
        ptr(at),
        Record::Buffer(Buffer {
            refs,
            data: data.to_vec(),
        }),
    );
}

/// Insert a segment covering `offset..offset+len` of the buffer at `buf`.
pub(crate) fn segment(image: &mut MemoryImage, at: u64, buf: u64, offset: u32, len: u32, next: u64) {
    image.insert(
        ptr(at),
        Record::Segment(Segment {
            buffer: ptr(buf),
            offset,
            len,
            next: ptr(next),
        }),
    );
}

/// One healthy single-segment string: a fresh buffer at `buf_at` holding
/// `text`, spanned by a segment at `seg_at`.
pub(crate) fn str_single(image: &mut MemoryImage, seg_at: u64, buf_at: u64, text: &str) -> TargetPtr {
    buffer(image, buf_at, 1, text.as_bytes());
    segment(image, seg_at, buf_at, 0, text.len() as u32, 0);
    ptr(seg_at)
}
