use core::ops::Range;

#[inline]
pub fn wrap_add(index: usize, addend: usize, capacity: usize) -> usize {
    debug_assert!(addend <= capacity);
    if capacity == 0 {
        0
    } else {
        (index + addend) % capacity
    }
}

#[inline]
pub fn wrap_sub(index: usize, subtrahend: usize, capacity: usize) -> usize {
    debug_assert!(subtrahend <= capacity);
    if capacity == 0 {
        0
    } else {
        (index + capacity - subtrahend) % capacity
    }
}

/// Splits `len` slots starting at physical index `start` into the run that
/// ends at the physical end of the array and the run continuing from slot 0.
///
/// The second range is empty unless the block wraps.
#[inline]
pub fn segments(start: usize, len: usize, capacity: usize) -> (Range<usize>, Range<usize>) {
    debug_assert!(len <= capacity);
    debug_assert!(start < capacity || capacity == 0);
    let pre_wrap_len = capacity - start;
    if len <= pre_wrap_len {
        (start..start + len, 0..0)
    } else {
        (start..capacity, 0..len - pre_wrap_len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_arithmetic() {
        assert_eq!(wrap_add(7, 5, 10), 2);
        assert_eq!(wrap_add(9, 1, 10), 0);
        assert_eq!(wrap_sub(0, 1, 10), 9);
        assert_eq!(wrap_sub(3, 3, 10), 0);
        assert_eq!(wrap_sub(4, 10, 10), 4);
    }

    #[test]
    fn wrap_arithmetic_zero_capacity() {
        assert_eq!(wrap_add(0, 0, 0), 0);
        assert_eq!(wrap_sub(0, 0, 0), 0);
    }

    #[test]
    fn segments_split_at_physical_end() {
        assert_eq!(segments(2, 3, 10), (2..5, 0..0));
        assert_eq!(segments(7, 3, 10), (7..10, 0..0));
        assert_eq!(segments(7, 6, 10), (7..10, 0..3));
        assert_eq!(segments(0, 10, 10), (0..10, 0..0));
        assert_eq!(segments(0, 0, 0), (0..0, 0..0));
    }
}
