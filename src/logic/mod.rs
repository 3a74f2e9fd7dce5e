//! Element-moving routines shared by the positional operations.
//!
//! They work purely in physical slot numbers through `CircularBuffer`, so
//! every wraparound case is handled in one place.

pub mod copy;
pub mod insert;
pub mod remove;

/// Raw access to a wrapping array of slots with a logical window
/// `[head, head + len)`.
pub trait CircularBuffer {
    /// Number of physical slots.
    fn array_len(&self) -> usize;

    fn head(&self) -> usize;
    fn len(&self) -> usize;

    unsafe fn set_head(&mut self, head: usize);
    unsafe fn set_len(&mut self, len: usize);

    /// Moves `len` slots from `src` to `dst`; neither block may wrap.
    unsafe fn copy(&mut self, dst: usize, src: usize, len: usize);

    fn wrap_add(&self, index: usize, addend: usize) -> usize;
    fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize;

    /// Physical slot of logical `index`.
    #[inline]
    fn to_physical(&self, index: usize) -> usize {
        self.wrap_add(self.head(), index)
    }
}
