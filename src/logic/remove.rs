use super::copy::wrap_copy;
use super::insert::Shift;
use super::CircularBuffer;

impl Shift {
    /// Picks the side with fewer survivors to move; ties move the front.
    #[inline]
    pub fn for_remove(index: usize, len: usize) -> Shift {
        let distance_to_front = index;
        let distance_to_back = len - index - 1;
        if distance_to_front <= distance_to_back {
            Shift::Front
        } else {
            Shift::Back
        }
    }
}

/// Closes the slot at logical `index`, whose value the caller has already
/// moved out, and shrinks the window by one.
///
/// The caller guarantees `index < len`.
///
/// ```text
/// front shift, index 1:
///        H R
///   [. . a x b c d e .]
///          H
///   [. . . a b c d e .]
///
/// back shift, index 3 (the survivors wrap):
///                  H     R
///   [d e . . . . . a b c x]
///                  H
///   [e . . . . . . a b c d]
/// ```
pub unsafe fn close_gap<B: CircularBuffer>(buffer: &mut B, index: usize) {
    let len = buffer.len();
    debug_assert!(index < len);

    match Shift::for_remove(index, len) {
        Shift::Front => {
            let head = buffer.head();
            let new_head = buffer.wrap_add(head, 1);
            wrap_copy(buffer, new_head, head, index);
            buffer.set_head(new_head);
        }
        Shift::Back => {
            let dst = buffer.to_physical(index);
            let src = buffer.wrap_add(dst, 1);
            wrap_copy(buffer, dst, src, len - index - 1);
        }
    }

    buffer.set_len(len - 1);
}
