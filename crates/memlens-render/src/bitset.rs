//! Bitset rendering: ascending member lists.

use memlens_core::{TargetMemory, TargetPtr};

use crate::limits::RenderLimits;
use crate::text::BAD_MEM;

/// Render the bitset at `value` as `{i,j,k}`.
///
/// Members come out ascending because the scan is word-major, bit-minor,
/// both in increasing order. A bit count above the cap renders the
/// `{ nbits=0x... }` summary instead of a full expansion; a corrupted
/// header field would otherwise make the scan arbitrarily expensive.
pub fn render_bitset(mem: &dyn TargetMemory, value: TargetPtr, limits: &RenderLimits) -> String {
    if value.is_null() {
        return "NULL".to_string();
    }
    let Ok(header) = mem.bitset_header(value) else {
        return BAD_MEM.to_string();
    };
    if header.nbits > limits.get_bitset_cap() {
        return format!("{{ nbits={:#x} }}", header.nbits);
    }

    let width = header.width.bits();
    let nwords = header.nbits.div_ceil(width);
    let mut members = Vec::new();
    for index in 0..nwords {
        let word = match mem.bitset_word(value, index) {
            Ok(word) => word,
            Err(_) => {
                members.push(BAD_MEM.to_string());
                break;
            }
        };
        let base = u64::from(index) * u64::from(width);
        for bit in 0..width {
            if word & (1u64 << bit) != 0 {
                members.push((base + u64::from(bit)).to_string());
            }
        }
    }
    format!("{{{}}}", members.join(","))
}
