//! Contract violations reported by `RingBuffer`.

#[cfg(feature = "std")]
use std::error;
use core::fmt;

/// Error value describing why a `RingBuffer` operation was rejected.
///
/// Every fallible operation checks its arguments before touching the buffer,
/// so a returned error always means the buffer is unchanged.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Error {
    /// The operation would grow the buffer past its capacity.
    CapacityExceeded {
        /// Fixed capacity of the buffer.
        capacity: usize,
        /// Number of elements held when the operation was attempted.
        len: usize,
        /// Number of elements the operation tried to add.
        additional: usize,
    },
    /// The logical index is outside the range accepted by the operation.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Number of elements held when the operation was attempted.
        len: usize,
    },
}

impl Error {
    #[inline]
    pub(crate) fn capacity_exceeded(op: &'static str, capacity: usize, len: usize, additional: usize) -> Error {
        log::debug!("{}: {} more element(s) do not fit ({}/{})", op, additional, len, capacity);
        Error::CapacityExceeded { capacity, len, additional }
    }

    #[inline]
    pub(crate) fn index_out_of_bounds(op: &'static str, index: usize, len: usize) -> Error {
        log::debug!("{}: index {} out of bounds (len {})", op, index, len);
        Error::IndexOutOfBounds { index, len }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Error::CapacityExceeded { capacity, len, additional } => {
                write!(f,
                       "insufficient capacity: {} + {} elements exceed capacity {}",
                       len,
                       additional,
                       capacity)
            }
            Error::IndexOutOfBounds { index, len } => {
                write!(f, "index out of bounds: the len is {} but the index is {}", len, index)
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::Error;

    #[test]
    fn display() {
        let err = Error::CapacityExceeded { capacity: 4, len: 3, additional: 2 };
        assert_eq!(err.to_string(), "insufficient capacity: 3 + 2 elements exceed capacity 4");

        let err = Error::IndexOutOfBounds { index: 5, len: 2 };
        assert_eq!(err.to_string(), "index out of bounds: the len is 2 but the index is 5");
    }
}
