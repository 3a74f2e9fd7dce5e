//! A circular buffer with a fixed capacity chosen at construction.
//!
//! The buffer keeps an ordered sequence of up to `capacity` elements in a
//! single heap allocation that never grows. Elements are addressed by a
//! logical index starting at the front; where they sit physically, and
//! whether the sequence wraps around the end of the allocation, never shows
//! through the API.
//!
//! Pushing and popping at either end is `O(1)` per element. Positional
//! `insert` and `remove` move only the shorter side of the sequence, so they
//! cost `O(min(i, len - i))`. Bulk operations (`append`, `prepend`,
//! `pop_first`, `pop_last`, `copy_from`) work on at most two contiguous
//! physical runs.
//!
//! # Feature Flags
//! The **ringbuffer** crate has the following cargo feature flags:
//!
//! - `std`
//!   - Optional, enabled by default
//!   - Use libstd; without it the crate is `no_std` and only needs `alloc`
//!
//! # Usage
//!
//! First, add the following to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! ringbuffer = "0.1"
//! ```
//!
//! # Capacity
//!
//! Capacity is fixed. Every operation that would need more room fails with
//! [`Error::CapacityExceeded`] and leaves the buffer untouched; nothing is
//! ever overwritten or reallocated.
//!
//! # Examples
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buf = RingBuffer::new(4);
//! assert_eq!(buf.capacity(), 4);
//! assert_eq!(buf.len(), 0);
//!
//! buf.append(vec![1, 2, 3]).unwrap();
//! buf.prepend(vec![0]).unwrap();
//! assert_eq!(buf.to_vec(), vec![0, 1, 2, 3]);
//!
//! assert!(buf.append(vec![4]).is_err());
//!
//! assert_eq!(buf.pop_first(2), vec![0, 1]);
//! assert_eq!(buf.pop_last(5), vec![2, 3]);
//! assert!(buf.is_empty());
//! ```
//!
//! # Insert & Remove
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buf = RingBuffer::new(8);
//!
//! buf.append(vec![11, 13]).unwrap();
//! buf.insert(1, 12).unwrap();
//! assert_eq!(buf.remove(0), Ok(11));
//!
//! assert_eq!(buf[0], 12);
//! assert_eq!(buf[1], 13);
//! ```
//!
//! # Copy between buffers
//! ```
//! use ringbuffer::RingBuffer;
//!
//! let mut buf = RingBuffer::new(8);
//! let mut other = RingBuffer::new(3);
//!
//! buf.append(0..5).unwrap();
//! other.append(5..8).unwrap();
//!
//! buf.copy_from(&other).unwrap();
//!
//! assert_eq!(format!("{:?}", buf), "[0, 1, 2, 3, 4, 5, 6, 7]");
//! assert_eq!(format!("{:?}", other), "[5, 6, 7]");
//! ```
//!
//! # Errors
//!
//! Contract violations (an index out of range, or running out of capacity)
//! are returned as [`Error`] before anything is mutated. The indexing
//! operators panic with the same message instead.

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs)]

extern crate alloc;

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::cmp;
use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter;
use core::mem::MaybeUninit;
use core::ops::{Index, IndexMut, Range};
use core::ptr;
use core::slice;

pub use odds::IndexRange as RangeArgument;

pub mod error;
mod logic;
mod utils;

pub use crate::error::Error;

use crate::logic::copy::wrap_copy;
use crate::logic::insert::open_gap;
use crate::logic::remove::close_gap;
use crate::logic::CircularBuffer;
use crate::utils::segments;

/// A fixed capacity ring buffer.
///
/// The backing storage is allocated once by [`RingBuffer::new`] and is never
/// resized. Logical element `i` lives in physical slot
/// `(head + i) % capacity`; slots outside the window are uninitialized.
///
/// `RingBuffer` is a single-owner container: mutation goes through
/// `&mut self` and there is no internal locking, so sharing one buffer
/// between threads for mutation needs external synchronization such as a
/// `Mutex`. It is not `Copy`; [`Clone`] makes a deep copy.
pub struct RingBuffer<T> {
    xs: Box<[MaybeUninit<T>]>,
    head: usize,
    len: usize,
}

/// Front-to-back iterator over a `RingBuffer`.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a, T: 'a> {
    front: slice::Iter<'a, T>,
    back: slice::Iter<'a, T>,
}

/// Front-to-back iterator over a `RingBuffer` yielding mutable references.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IterMut<'a, T: 'a> {
    front: slice::IterMut<'a, T>,
    back: slice::IterMut<'a, T>,
}

/// A by-value `RingBuffer` iterator.
#[must_use = "iterator adaptors are lazy and do nothing unless consumed"]
pub struct IntoIter<T> {
    inner: RingBuffer<T>,
}

impl<T> CircularBuffer for RingBuffer<T> {
    #[inline]
    fn array_len(&self) -> usize {
        self.xs.len()
    }

    #[inline]
    fn head(&self) -> usize {
        self.head
    }

    #[inline]
    fn len(&self) -> usize {
        self.len
    }

    #[inline]
    unsafe fn set_head(&mut self, head: usize) {
        debug_assert!(head < self.xs.len() || head == 0);
        self.head = head;
    }

    #[inline]
    unsafe fn set_len(&mut self, len: usize) {
        debug_assert!(len <= self.xs.len());
        self.len = len;
    }

    #[inline]
    unsafe fn copy(&mut self, dst: usize, src: usize, len: usize) {
        debug_assert!(dst + len <= self.xs.len(),
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.xs.len());
        debug_assert!(src + len <= self.xs.len(),
                      "cpy dst={} src={} len={} cap={}",
                      dst,
                      src,
                      len,
                      self.xs.len());
        let p = self.ptr_mut();
        ptr::copy(p.add(src), p.add(dst), len);
    }

    #[inline]
    fn wrap_add(&self, index: usize, addend: usize) -> usize {
        utils::wrap_add(index, addend, self.xs.len())
    }

    #[inline]
    fn wrap_sub(&self, index: usize, subtrahend: usize) -> usize {
        utils::wrap_sub(index, subtrahend, self.xs.len())
    }
}

impl<T> RingBuffer<T> {
    #[inline]
    fn ptr(&self) -> *const T {
        self.xs.as_ptr() as *const T
    }

    #[inline]
    fn ptr_mut(&mut self) -> *mut T {
        self.xs.as_mut_ptr() as *mut T
    }

    #[inline]
    unsafe fn buffer_read(&mut self, slot: usize) -> T {
        ptr::read(self.ptr().add(slot))
    }

    #[inline]
    unsafe fn buffer_write(&mut self, slot: usize, element: T) {
        ptr::write(self.ptr_mut().add(slot), element);
    }

    /// The initialized slots `slots` as a slice.
    #[inline]
    unsafe fn buffer_slice(&self, slots: Range<usize>) -> &[T] {
        slice::from_raw_parts(self.ptr().add(slots.start), slots.len())
    }

    /// Moves `count` elements starting at physical `start` into a new vector.
    /// The slots are left logically uninitialized.
    unsafe fn move_out(&mut self, start: usize, count: usize) -> Vec<T> {
        let (front, back) = segments(start, count, self.capacity());
        let mut moved = Vec::with_capacity(count);
        let src = self.ptr();
        let dst = moved.as_mut_ptr();
        ptr::copy_nonoverlapping(src.add(front.start), dst, front.len());
        ptr::copy_nonoverlapping(src.add(back.start), dst.add(front.len()), back.len());
        moved.set_len(count);
        moved
    }

    /// Drops `count` elements starting at physical `start` in place.
    unsafe fn drop_range(&mut self, start: usize, count: usize) {
        // Drops the wrapped run even if a destructor in the first one panics.
        struct Dropper<'a, T>(&'a mut [T]);

        impl<'a, T> Drop for Dropper<'a, T> {
            fn drop(&mut self) {
                unsafe {
                    ptr::drop_in_place(self.0);
                }
            }
        }

        let (front, back) = segments(start, count, self.capacity());
        let p = self.ptr_mut();
        let front = slice::from_raw_parts_mut(p.add(front.start), front.len());
        let back = slice::from_raw_parts_mut(p.add(back.start), back.len());

        let _back_dropper = Dropper(back);
        ptr::drop_in_place(front);
    }

    #[inline]
    fn check_room(&self, op: &'static str, additional: usize) -> Result<(), Error> {
        if additional > self.capacity() - self.len {
            Err(Error::capacity_exceeded(op, self.capacity(), self.len, additional))
        } else {
            Ok(())
        }
    }
}

impl<T> RingBuffer<T> {
    /// Creates an empty `RingBuffer` holding at most `capacity` elements.
    ///
    /// A capacity of zero is allowed; such a buffer accepts nothing.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let buf: RingBuffer<usize> = RingBuffer::new(3);
    /// assert_eq!(buf.capacity(), 3);
    /// ```
    pub fn new(capacity: usize) -> RingBuffer<T> {
        RingBuffer {
            xs: iter::repeat_with(MaybeUninit::uninit).take(capacity).collect(),
            head: 0,
            len: 0,
        }
    }

    /// Returns the number of elements in the `RingBuffer`.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the fixed capacity of the `RingBuffer`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.xs.len()
    }

    /// Returns true if the buffer contains no elements.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns true if no further element fits.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    /// Adds `items` after the last element, keeping their order.
    ///
    /// Fails with [`Error::CapacityExceeded`] if `len() + items.len()` would
    /// exceed the capacity; in that case no item is taken from the iterator
    /// and the buffer is unchanged.
    ///
    /// The new elements may wrap around the end of the storage, in which case
    /// they are written as two runs.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.append(vec![1, 2]).unwrap();
    /// buf.append(vec![3]).unwrap();
    /// assert_eq!(buf.to_vec(), vec![1, 2, 3]);
    /// assert!(buf.append(vec![4, 5]).is_err());
    /// ```
    pub fn append<I>(&mut self, items: I) -> Result<(), Error>
        where I: IntoIterator<Item = T>,
              I::IntoIter: ExactSizeIterator
    {
        let items = items.into_iter();
        let additional = items.len();
        self.check_room("append", additional)?;

        let tail = self.to_physical(self.len);
        let (front, back) = segments(tail, additional, self.capacity());
        // An iterator yielding less than it promised only leaves the tail
        // short; the window stays contiguous.
        for (slot, element) in front.chain(back).zip(items) {
            unsafe {
                self.buffer_write(slot, element);
            }
            self.len += 1;
        }
        Ok(())
    }

    /// Adds `items` before the first element so that the buffer starts with
    /// them, in order.
    ///
    /// Same failure and atomicity rules as [`append`](#method.append).
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(8);
    /// buf.prepend(vec![1, 2, 3]).unwrap();
    /// buf.prepend(vec![6, 7]).unwrap();
    /// assert_eq!(buf.to_vec(), vec![6, 7, 1, 2, 3]);
    /// ```
    pub fn prepend<I>(&mut self, items: I) -> Result<(), Error>
        where I: IntoIterator<Item = T>,
              I::IntoIter: ExactSizeIterator
    {
        let items = items.into_iter();
        let additional = items.len();
        self.check_room("prepend", additional)?;

        let new_head = self.wrap_sub(self.head, additional);
        let (front, back) = segments(new_head, additional, self.capacity());
        let mut written = 0;
        for (slot, element) in front.chain(back).zip(items) {
            unsafe {
                self.buffer_write(slot, element);
            }
            written += 1;
        }

        if written < additional {
            // The iterator came up short: slide what it gave up against the
            // old front so the window has no holes.
            let head = self.wrap_sub(self.head, written);
            unsafe {
                wrap_copy(self, head, new_head, written);
            }
            self.head = head;
        } else {
            self.head = new_head;
        }
        self.len += written;
        Ok(())
    }

    /// Removes up to `num` elements from the back and returns them in their
    /// original order.
    ///
    /// Asking for more than `len()` elements empties the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(8);
    /// buf.append(1..6).unwrap();
    /// assert_eq!(buf.pop_last(2), vec![4, 5]);
    /// assert_eq!(buf.pop_last(10), vec![1, 2, 3]);
    /// assert_eq!(buf.pop_last(1), vec![]);
    /// ```
    pub fn pop_last(&mut self, num: usize) -> Vec<T> {
        let count = cmp::min(num, self.len);
        if count == 0 {
            return Vec::new();
        }
        let start = self.to_physical(self.len - count);
        self.len -= count;
        unsafe { self.move_out(start, count) }
    }

    /// Removes up to `num` elements from the front and returns them in their
    /// original order.
    ///
    /// Asking for more than `len()` elements empties the buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(8);
    /// buf.append(1..6).unwrap();
    /// assert_eq!(buf.pop_first(2), vec![1, 2]);
    /// assert_eq!(buf.to_vec(), vec![3, 4, 5]);
    /// ```
    pub fn pop_first(&mut self, num: usize) -> Vec<T> {
        let count = cmp::min(num, self.len);
        if count == 0 {
            return Vec::new();
        }
        let start = self.head;
        self.head = self.wrap_add(self.head, count);
        self.len -= count;
        unsafe { self.move_out(start, count) }
    }

    /// Drops up to `num` elements from the back. Returns how many were
    /// removed.
    pub fn trunc_last(&mut self, num: usize) -> usize {
        let count = cmp::min(num, self.len);
        if count == 0 {
            return 0;
        }
        let start = self.to_physical(self.len - count);
        self.len -= count;
        unsafe {
            self.drop_range(start, count);
        }
        count
    }

    /// Drops up to `num` elements from the front. Returns how many were
    /// removed.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.append(vec![1, 2, 3]).unwrap();
    /// assert_eq!(buf.trunc_first(2), 2);
    /// assert_eq!(buf.trunc_first(2), 1);
    /// assert!(buf.is_empty());
    /// ```
    pub fn trunc_first(&mut self, num: usize) -> usize {
        let count = cmp::min(num, self.len);
        if count == 0 {
            return 0;
        }
        let start = self.head;
        self.head = self.wrap_add(self.head, count);
        self.len -= count;
        unsafe {
            self.drop_range(start, count);
        }
        count
    }

    /// Drops every element.
    #[inline]
    pub fn clear(&mut self) {
        let len = self.len;
        self.trunc_first(len);
    }

    /// Retrieves the element at logical `index`; index 0 is the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::{Error, RingBuffer};
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.append(vec![3, 4, 5]).unwrap();
    /// assert_eq!(buf.get(1), Ok(&4));
    /// assert_eq!(buf.get(3), Err(Error::IndexOutOfBounds { index: 3, len: 3 }));
    /// ```
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T, Error> {
        if index < self.len {
            let slot = self.to_physical(index);
            unsafe { Ok(&*self.ptr().add(slot)) }
        } else {
            Err(Error::index_out_of_bounds("get", index, self.len))
        }
    }

    /// Retrieves the element at logical `index` mutably.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, Error> {
        if index < self.len {
            let slot = self.to_physical(index);
            unsafe { Ok(&mut *self.ptr_mut().add(slot)) }
        } else {
            Err(Error::index_out_of_bounds("get_mut", index, self.len))
        }
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() { None } else { self.get(0).ok() }
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() { None } else { self.get(self.len - 1).ok() }
    }

    /// Overwrites the element at logical `index`, dropping the old value.
    ///
    /// `index == len()` is accepted and appends `element`, which fails with
    /// [`Error::CapacityExceeded`] when the buffer is full. Any larger index
    /// fails with [`Error::IndexOutOfBounds`].
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3);
    /// buf.append(vec![1, 2]).unwrap();
    /// buf.set(0, 10).unwrap();
    /// buf.set(2, 30).unwrap();
    /// assert_eq!(buf.to_vec(), vec![10, 2, 30]);
    /// assert!(buf.set(3, 40).is_err());
    /// ```
    pub fn set(&mut self, index: usize, element: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::index_out_of_bounds("set", index, self.len));
        }
        if index == self.len {
            self.check_room("set", 1)?;
            let slot = self.to_physical(index);
            unsafe {
                self.buffer_write(slot, element);
            }
            self.len += 1;
        } else {
            let slot = self.to_physical(index);
            unsafe {
                *self.ptr_mut().add(slot) = element;
            }
        }
        Ok(())
    }

    /// Inserts `element` so that it ends up at logical `index`, shifting
    /// whichever side of the buffer is shorter.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if `index > len()`, and with
    /// [`Error::CapacityExceeded`] if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.append(vec![10, 12]).unwrap();
    /// buf.insert(1, 11).unwrap();
    /// buf.insert(0, 9).unwrap();
    /// assert_eq!(buf.to_vec(), vec![9, 10, 11, 12]);
    /// assert!(buf.insert(0, 8).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, element: T) -> Result<(), Error> {
        if index > self.len {
            return Err(Error::index_out_of_bounds("insert", index, self.len));
        }
        self.check_room("insert", 1)?;
        unsafe {
            let slot = open_gap(self, index);
            self.buffer_write(slot, element);
        }
        Ok(())
    }

    /// Removes and returns the element at logical `index`, closing the gap
    /// from whichever side is shorter.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.append(vec![1, 2, 3]).unwrap();
    /// assert_eq!(buf.remove(1), Ok(2));
    /// assert_eq!(buf.to_vec(), vec![1, 3]);
    /// assert!(buf.remove(2).is_err());
    /// ```
    pub fn remove(&mut self, index: usize) -> Result<T, Error> {
        if index >= self.len {
            return Err(Error::index_out_of_bounds("remove", index, self.len));
        }
        unsafe {
            let slot = self.to_physical(index);
            let element = self.buffer_read(slot);
            close_gap(self, index);
            Ok(element)
        }
    }

    /// Appends clones of every element of `other`, front to back, leaving
    /// `other` untouched.
    ///
    /// Fails with [`Error::CapacityExceeded`] if the combined length does not
    /// fit in this buffer.
    pub fn copy_from(&mut self, other: &RingBuffer<T>) -> Result<(), Error>
        where T: Clone
    {
        self.check_room("copy_from", other.len())?;
        let (front, back) = other.as_slices();
        self.append(front.iter().cloned())?;
        self.append(back.iter().cloned())
    }

    /// Copies the elements, front to back, into a new vector.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(3);
    /// buf.append(vec![2, 3]).unwrap();
    /// buf.prepend(vec![1]).unwrap();
    /// assert_eq!(buf.to_vec(), vec![1, 2, 3]);
    /// ```
    pub fn to_vec(&self) -> Vec<T>
        where T: Clone
    {
        let (front, back) = self.as_slices();
        let mut out = Vec::with_capacity(self.len);
        out.extend_from_slice(front);
        out.extend_from_slice(back);
        out
    }

    /// Returns a pair of slices which contain, in order, the contents of the
    /// `RingBuffer`. The second slice is empty unless the contents wrap.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(5);
    /// buf.append(vec![0, 1, 2]).unwrap();
    /// assert_eq!(buf.as_slices(), (&[0, 1, 2][..], &[][..]));
    ///
    /// buf.prepend(vec![9, 10]).unwrap();
    /// assert_eq!(buf.as_slices(), (&[9, 10][..], &[0, 1, 2][..]));
    /// ```
    #[inline]
    pub fn as_slices(&self) -> (&[T], &[T]) {
        let (front, back) = segments(self.head, self.len, self.capacity());
        unsafe { (self.buffer_slice(front), self.buffer_slice(back)) }
    }

    /// Returns a pair of mutable slices which contain, in order, the contents
    /// of the `RingBuffer`.
    #[inline]
    pub fn as_mut_slices(&mut self) -> (&mut [T], &mut [T]) {
        let (front, back) = segments(self.head, self.len, self.capacity());
        let p = self.ptr_mut();
        unsafe {
            (slice::from_raw_parts_mut(p.add(front.start), front.len()),
             slice::from_raw_parts_mut(p.add(back.start), back.len()))
        }
    }

    /// Returns the logical `range` of the buffer as a pair of slices, in
    /// order.
    ///
    /// Fails with [`Error::IndexOutOfBounds`] if the range ends past `len()`
    /// or starts after its end.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(5);
    /// buf.append(vec![2, 3, 4]).unwrap();
    /// buf.prepend(vec![0, 1]).unwrap();
    /// assert_eq!(buf.range(1..4).unwrap(), (&[1][..], &[2, 3][..]));
    /// assert_eq!(buf.range(3..).unwrap(), (&[3, 4][..], &[][..]));
    /// assert!(buf.range(..6).is_err());
    /// ```
    pub fn range<R>(&self, range: R) -> Result<(&[T], &[T]), Error>
        where R: RangeArgument<usize>
    {
        let start = range.start().unwrap_or(0);
        let end = range.end().unwrap_or(self.len);
        if end > self.len {
            return Err(Error::index_out_of_bounds("range", end, self.len));
        }
        if start > end {
            return Err(Error::index_out_of_bounds("range", start, self.len));
        }
        let (front, back) = segments(self.to_physical(start), end - start, self.capacity());
        unsafe { Ok((self.buffer_slice(front), self.buffer_slice(back))) }
    }

    /// Returns a front-to-back iterator.
    ///
    /// # Examples
    ///
    /// ```
    /// use ringbuffer::RingBuffer;
    ///
    /// let mut buf = RingBuffer::new(4);
    /// buf.append(vec![5, 3, 4]).unwrap();
    /// let b: &[_] = &[&5, &3, &4];
    /// let c: Vec<&i32> = buf.iter().collect();
    /// assert_eq!(&c[..], b);
    /// ```
    #[inline]
    pub fn iter(&self) -> Iter<T> {
        let (front, back) = self.as_slices();
        Iter {
            front: front.iter(),
            back: back.iter(),
        }
    }

    /// Returns a front-to-back iterator that returns mutable references.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<T> {
        let (front, back) = self.as_mut_slices();
        IterMut {
            front: front.iter_mut(),
            back: back.iter_mut(),
        }
    }
}

impl<T: Clone> Clone for RingBuffer<T> {
    /// Deep copy into a new buffer of the same capacity.
    fn clone(&self) -> RingBuffer<T> {
        let mut cloned = RingBuffer::new(self.capacity());
        for element in self {
            let slot = cloned.len;
            unsafe {
                cloned.buffer_write(slot, element.clone());
            }
            cloned.len += 1;
        }
        cloned
    }
}

impl<T> Drop for RingBuffer<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: PartialEq> PartialEq for RingBuffer<T> {
    fn eq(&self, other: &RingBuffer<T>) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl<T: Eq> Eq for RingBuffer<T> {}

impl<T: Hash> Hash for RingBuffer<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len.hash(state);
        for element in self {
            element.hash(state);
        }
    }
}

impl<T> Index<usize> for RingBuffer<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IndexMut<usize> for RingBuffer<T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(element) => element,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T> IntoIterator for RingBuffer<T> {
    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> IntoIter<T> {
        IntoIter { inner: self }
    }
}

impl<'a, T> IntoIterator for &'a RingBuffer<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut RingBuffer<T> {
    type Item = &'a mut T;
    type IntoIter = IterMut<'a, T>;

    fn into_iter(self) -> IterMut<'a, T> {
        self.iter_mut()
    }
}

impl<T: fmt::Debug> fmt::Debug for RingBuffer<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self).finish()
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<&'a T> {
        match self.front.next() {
            Some(element) => Some(element),
            None => self.back.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for Iter<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a T> {
        match self.back.next_back() {
            Some(element) => Some(element),
            None => self.front.next_back(),
        }
    }
}

impl<'a, T> ExactSizeIterator for Iter<'a, T> {}

impl<'a, T> Iterator for IterMut<'a, T> {
    type Item = &'a mut T;

    #[inline]
    fn next(&mut self) -> Option<&'a mut T> {
        match self.front.next() {
            Some(element) => Some(element),
            None => self.back.next(),
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.front.len() + self.back.len();
        (len, Some(len))
    }
}

impl<'a, T> DoubleEndedIterator for IterMut<'a, T> {
    #[inline]
    fn next_back(&mut self) -> Option<&'a mut T> {
        match self.back.next_back() {
            Some(element) => Some(element),
            None => self.front.next_back(),
        }
    }
}

impl<'a, T> ExactSizeIterator for IterMut<'a, T> {}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    #[inline]
    fn next(&mut self) -> Option<T> {
        if self.inner.is_empty() {
            None
        } else {
            self.inner.remove(0).ok()
        }
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.inner.len();
        (len, Some(len))
    }
}

impl<T> DoubleEndedIterator for IntoIter<T> {
    #[inline]
    fn next_back(&mut self) -> Option<T> {
        match self.inner.len() {
            0 => None,
            len => self.inner.remove(len - 1).ok(),
        }
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}
