//! Fixed-length storage for the numbers being collected.

use crate::Error;

/// An owned sequence of `len` integer slots, written front to back.
///
/// The length is fixed when the buffer is created. Each slot is written exactly
/// once, through [`NumberBuffer::push`], and the storage is released when the
/// buffer is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberBuffer {
    values: Vec<i64>,
    len: usize,
}

/// Returned by [`NumberBuffer::push`] once every slot has been written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("all {len} slots are already written")]
pub struct BufferFull {
    pub len: usize,
}

impl NumberBuffer {
    /// Reserves room for exactly `len` numbers.
    ///
    /// Fails with [`Error::Allocation`] rather than aborting when `len` is too
    /// large to reserve.
    pub fn with_len(len: u64) -> Result<Self, Error> {
        let slots = usize::try_from(len).map_err(|_| Error::Allocation { len })?;
        let mut values = Vec::new();
        values
            .try_reserve_exact(slots)
            .map_err(|_| Error::Allocation { len })?;
        Ok(Self { values, len: slots })
    }

    /// Writes `value` into the next free slot and returns that slot's index.
    pub fn push(&mut self, value: i64) -> Result<usize, BufferFull> {
        if self.is_complete() {
            return Err(BufferFull { len: self.len });
        }
        let index = self.values.len();
        self.values.push(value);
        Ok(index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of slots written so far.
    #[inline]
    pub fn filled(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.len - self.values.len()
    }

    #[inline]
    pub fn is_complete(&self) -> bool {
        self.values.len() == self.len
    }

    /// The written slots, in order.
    pub fn as_slice(&self) -> &[i64] {
        &self.values
    }
}

/// Adds up every written slot of `buffer`.
pub fn sum(buffer: &NumberBuffer) -> Result<i64, Error> {
    debug_assert!(buffer.is_complete(), "summing a partially filled buffer");
    // i128 cannot overflow for any buffer that fits in memory, so only the final
    // total has to fit in an i64.
    let total: i128 = buffer.as_slice().iter().map(|&n| i128::from(n)).sum();
    i64::try_from(total).map_err(|_| Error::SumOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_in_order_until_full() {
        let mut buffer = NumberBuffer::with_len(3).unwrap();
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.remaining(), 3);
        assert_eq!(buffer.push(10), Ok(0));
        assert_eq!(buffer.push(20), Ok(1));
        assert!(!buffer.is_complete());
        assert_eq!(buffer.push(30), Ok(2));
        assert!(buffer.is_complete());
        assert_eq!(buffer.push(40), Err(BufferFull { len: 3 }));
        assert_eq!(buffer.as_slice(), &[10, 20, 30]);
    }

    #[test]
    fn sums_every_slot_once() {
        let mut buffer = NumberBuffer::with_len(4).unwrap();
        for n in [1, -2, 3, 100] {
            buffer.push(n).unwrap();
        }
        assert_eq!(sum(&buffer).unwrap(), 102);
    }

    #[test]
    fn empty_buffer_sums_to_zero() {
        let buffer = NumberBuffer::with_len(0).unwrap();
        assert!(buffer.is_empty());
        assert!(buffer.is_complete());
        assert_eq!(sum(&buffer).unwrap(), 0);
    }

    #[test]
    fn overflow_is_an_error() {
        let mut buffer = NumberBuffer::with_len(2).unwrap();
        buffer.push(i64::MAX).unwrap();
        buffer.push(1).unwrap();
        assert!(matches!(sum(&buffer), Err(Error::SumOverflow)));
    }

    #[test]
    fn intermediate_overflow_is_not_an_error() {
        let mut buffer = NumberBuffer::with_len(3).unwrap();
        for n in [i64::MAX, 1, -1] {
            buffer.push(n).unwrap();
        }
        assert_eq!(sum(&buffer).unwrap(), i64::MAX);

        let mut buffer = NumberBuffer::with_len(3).unwrap();
        for n in [i64::MIN, -1, 1] {
            buffer.push(n).unwrap();
        }
        assert_eq!(sum(&buffer).unwrap(), i64::MIN);
    }

    #[test]
    fn impossible_length_is_reported() {
        assert!(matches!(
            NumberBuffer::with_len(u64::MAX),
            Err(Error::Allocation { len: u64::MAX })
        ));
    }
}
