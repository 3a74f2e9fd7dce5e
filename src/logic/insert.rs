use super::copy::wrap_copy;
use super::CircularBuffer;

/// Which side of the window moves to make room.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shift {
    /// Elements `[0, index)` move one slot towards the front and head
    /// steps back.
    Front,
    /// Elements `[index, len)` move one slot towards the back.
    Back,
}

impl Shift {
    /// Picks the side with fewer elements to move; ties move the front.
    #[inline]
    pub fn for_insert(index: usize, len: usize) -> Shift {
        let distance_to_front = index;
        let distance_to_back = len - index;
        if distance_to_front <= distance_to_back {
            Shift::Front
        } else {
            Shift::Back
        }
    }
}

/// Opens an uninitialized slot at logical `index` and grows the window by
/// one. Returns the physical slot the caller must write.
///
/// The caller guarantees `index <= len < array_len`.
///
/// ```text
/// front shift, index 2:
///        H   I
///   [. . a b c d e . .]
///      H   I
///   [. a b _ c d e . .]
///
/// back shift, index 4:
///        H       I
///   [. . a b c d e f . .]
///        H       I
///   [. . a b c d _ e f .]
/// ```
pub unsafe fn open_gap<B: CircularBuffer>(buffer: &mut B, index: usize) -> usize {
    let len = buffer.len();
    debug_assert!(index <= len);
    debug_assert!(len < buffer.array_len());

    match Shift::for_insert(index, len) {
        Shift::Front => {
            // `index == 0` degenerates to a bare head decrement.
            let head = buffer.head();
            let new_head = buffer.wrap_sub(head, 1);
            wrap_copy(buffer, new_head, head, index);
            buffer.set_head(new_head);
        }
        Shift::Back => {
            let src = buffer.to_physical(index);
            let dst = buffer.wrap_add(src, 1);
            wrap_copy(buffer, dst, src, len - index);
        }
    }

    buffer.set_len(len + 1);
    buffer.to_physical(index)
}
