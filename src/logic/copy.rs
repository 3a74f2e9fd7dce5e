use core::cmp;

use super::CircularBuffer;

/// Where the source and destination blocks sit relative to each other and to
/// the physical end of the array.
struct Layout {
    dst: usize,
    src: usize,
    len: usize,
    dst_after_src: bool,
    src_pre_wrap_len: usize,
    dst_pre_wrap_len: usize,
    src_wraps: bool,
    dst_wraps: bool,
}

impl Layout {
    fn new<B: CircularBuffer>(buffer: &B, dst: usize, src: usize, len: usize) -> Layout {
        let array_len = buffer.array_len();
        let src_pre_wrap_len = array_len - src;
        let dst_pre_wrap_len = array_len - dst;
        Layout {
            dst,
            src,
            len,
            dst_after_src: buffer.wrap_sub(dst, src) < len,
            src_pre_wrap_len,
            dst_pre_wrap_len,
            src_wraps: src_pre_wrap_len < len,
            dst_wraps: dst_pre_wrap_len < len,
        }
    }
}

/// Moves a block of `len` slots from physical `src` to physical `dst`, where
/// either block may run past the end of the array and continue at slot 0.
///
/// The blocks may overlap, but only in one contiguous region:
/// `min(|dst - src|, array_len - |dst - src|) + len <= array_len`.
/// Whenever the blocks overlap, the piece that would be overwritten first is
/// moved first.
pub unsafe fn wrap_copy<B: CircularBuffer>(buffer: &mut B, dst: usize, src: usize, len: usize) {
    fn diff(a: usize, b: usize) -> usize {
        if a <= b { b - a } else { a - b }
    }
    let array_len = buffer.array_len();
    debug_assert!(cmp::min(diff(dst, src), array_len - diff(dst, src)) + len <= array_len,
                  "wrap_copy dst={} src={} len={} array_len={}",
                  dst,
                  src,
                  len,
                  array_len);

    if src == dst || len == 0 {
        return;
    }

    let layout = Layout::new(buffer, dst, src, len);
    match (layout.dst_after_src, layout.src_wraps, layout.dst_wraps) {
        (_, false, false) => contiguous(buffer, layout),
        (false, false, true) => dst_wraps_backward(buffer, layout),
        (true, false, true) => dst_wraps_forward(buffer, layout),
        (false, true, false) => src_wraps_backward(buffer, layout),
        (true, true, false) => src_wraps_forward(buffer, layout),
        (false, true, true) => both_wrap_backward(buffer, layout),
        (true, true, true) => both_wrap_forward(buffer, layout),
    }
}

// Neither block crosses the physical end, one overlapping move does it.
unsafe fn contiguous<B: CircularBuffer>(buffer: &mut B, l: Layout) {
    buffer.copy(l.dst, l.src, l.len);
}

//    S . . .
//   [A A B B _ _ _ _ _]  ->  [B B . . _ _ _ A A]
//    . .           D .
//
// The destination runs off the end: fill its tail part first, then the
// wrapped part at slot 0 from the rest of the source.
unsafe fn dst_wraps_backward<B: CircularBuffer>(buffer: &mut B, l: Layout) {
    buffer.copy(l.dst, l.src, l.dst_pre_wrap_len);
    buffer.copy(0, l.src + l.dst_pre_wrap_len, l.len - l.dst_pre_wrap_len);
}

// Source sits just before a wrapping destination, so the part landing at
// slot 0 is read from the end of the source before the source is clobbered.
unsafe fn dst_wraps_forward<B: CircularBuffer>(buffer: &mut B, l: Layout) {
    buffer.copy(0, l.src + l.dst_pre_wrap_len, l.len - l.dst_pre_wrap_len);
    buffer.copy(l.dst, l.src, l.dst_pre_wrap_len);
}

// The source runs off the end: move its tail part, then the part that
// continues at slot 0.
unsafe fn src_wraps_backward<B: CircularBuffer>(buffer: &mut B, l: Layout) {
    buffer.copy(l.dst, l.src, l.src_pre_wrap_len);
    buffer.copy(l.dst + l.src_pre_wrap_len, 0, l.len - l.src_pre_wrap_len);
}

// Destination ahead of a wrapping source: shift the slot 0 part of the source
// out of the way before overwriting it.
unsafe fn src_wraps_forward<B: CircularBuffer>(buffer: &mut B, l: Layout) {
    buffer.copy(l.dst + l.src_pre_wrap_len, 0, l.len - l.src_pre_wrap_len);
    buffer.copy(l.dst, l.src, l.src_pre_wrap_len);
}

// Both blocks wrap and the destination starts first, so it wraps later than
// the source does: three moves, front to back.
unsafe fn both_wrap_backward<B: CircularBuffer>(buffer: &mut B, l: Layout) {
    debug_assert!(l.dst_pre_wrap_len > l.src_pre_wrap_len);
    let delta = l.dst_pre_wrap_len - l.src_pre_wrap_len;
    buffer.copy(l.dst, l.src, l.src_pre_wrap_len);
    buffer.copy(l.dst + l.src_pre_wrap_len, 0, delta);
    buffer.copy(0, delta, l.len - l.dst_pre_wrap_len);
}

// Both blocks wrap and the destination starts later: three moves, back to
// front, carrying the slots that cross the physical end last-but-one.
unsafe fn both_wrap_forward<B: CircularBuffer>(buffer: &mut B, l: Layout) {
    debug_assert!(l.src_pre_wrap_len > l.dst_pre_wrap_len);
    let array_len = buffer.array_len();
    let delta = l.src_pre_wrap_len - l.dst_pre_wrap_len;
    buffer.copy(delta, 0, l.len - l.src_pre_wrap_len);
    buffer.copy(0, array_len - delta, delta);
    buffer.copy(l.dst, l.src, l.dst_pre_wrap_len);
}
