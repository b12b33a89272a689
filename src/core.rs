use std::fmt;

use crate::error::DynArrError;
use crate::iter::{DynArrIter, DynArrRevIter};

const DEFAULT_CAPACITY: usize = 10;
const RESIZE_FACTOR: usize = 2;
const SHRINK_DIVISOR: usize = 4; // shrink when occupancy drops below 1/4

/// A self-resizing array that tracks the amortized cost of its operations
///
/// Storage is one contiguous block whose length is the capacity. The block is
/// replaced wholesale on every resize; a resize never changes the number of
/// live elements.
#[derive(Debug)]
pub struct DynArr<T> {
    storage: Box<[T]>,
    size: usize,
    operation_credits: i64,
}

impl<T: Copy + Default> DynArr<T> {
    /// Creates an empty `DynArr` with the default capacity (10).
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates an empty `DynArr` with the given initial capacity.
    ///
    /// A capacity of 0 is accepted; the first `append` grows the storage
    /// to a single slot before placing the element.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Self::make_block(capacity),
            size: 0,
            operation_credits: 0,
        }
    }

    fn make_block(capacity: usize) -> Box<[T]> {
        vec![T::default(); capacity].into_boxed_slice()
    }

    /// Returns the number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.size
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns the allocated slot count of the storage block.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns the current operation-credit balance.
    ///
    /// Credits are pure instrumentation: they record the amortized-cost
    /// bookkeeping of `append`, `pop`, and the resizes they trigger, and have
    /// no effect on the container's behavior. For any sequence of `append`
    /// calls the balance never goes negative (the banked credits always cover
    /// the copies performed by a growth resize).
    #[must_use]
    pub fn operation_credits(&self) -> i64 {
        self.operation_credits
    }

    /// Gets the element at the given index.
    ///
    /// Returns `None` if the index is out of bounds. Reads perform no credit
    /// accounting.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<T> {
        if index >= self.size {
            return None;
        }
        self.storage.get(index).copied()
    }

    /// Tries to get the element at the given index.
    ///
    /// # Errors
    ///
    /// Returns `DynArrError::OutOfBounds` if `index` is not in `[0, len)`.
    pub fn try_get(&self, index: usize) -> Result<T, DynArrError> {
        self.get(index).ok_or(DynArrError::OutOfBounds {
            index,
            length: self.size,
        })
    }

    /// Appends a value to the end of the array, doubling the capacity of the
    /// storage block first if the array is already full.
    ///
    /// Each `append` charges 3 operation credits up front: 1 is consumed by
    /// the write of the new value, 2 are banked toward a future resize. When
    /// a growth resize fires, the banked credits pay for copying the existing
    /// elements into the new block, so the balance stays non-negative and the
    /// amortized cost per `append` is O(1).
    ///
    /// ```
    /// # use dynarr::DynArr;
    /// let mut arr: DynArr<i32> = DynArr::with_capacity(2);
    /// arr.append(1); // +3, -1 write                  => 2
    /// arr.append(2); // +3, -1 write                  => 4
    /// arr.append(3); // +3, -2 copies, -1 write       => 4, capacity 4
    /// assert_eq!(arr.capacity(), 4);
    /// assert_eq!(arr.operation_credits(), 4);
    /// arr.append(4); // +3, -1 write                  => 6
    /// arr.append(5); // +3, -4 copies, -1 write       => 4, capacity 8
    /// assert_eq!(arr.capacity(), 8);
    /// assert_eq!(arr.operation_credits(), 4);
    /// ```
    pub fn append(&mut self, value: T) {
        self.operation_credits += 3;

        if self.size >= self.capacity() {
            // Doubling a zero-capacity block would yield another block that
            // cannot admit the pending element; grow to one slot instead.
            let target = (self.capacity() * RESIZE_FACTOR).max(1);
            self.resize(target);
        }

        self.storage[self.size] = value;
        self.size += 1;
        self.operation_credits -= 1;
    }

    /// Removes and returns the last element, shrinking the storage block
    /// first if occupancy after the removal would fall below 1/4.
    ///
    /// The shrink target is `len * 2` computed from the pre-removal length,
    /// leaving the capacity one step ahead of the strict minimum.
    ///
    /// Returns `None` if the array is empty; the state is left untouched.
    pub fn pop(&mut self) -> Option<T> {
        if self.size == 0 {
            return None;
        }

        self.operation_credits += 1;

        let size_after = self.size - 1;
        if size_after * SHRINK_DIVISOR < self.capacity() {
            self.resize(self.size * RESIZE_FACTOR);
        }

        let value = self.storage[self.size - 1];
        self.size -= 1;
        self.operation_credits -= 1;
        Some(value)
    }

    /// Tries to remove and return the last element.
    ///
    /// # Errors
    ///
    /// Returns `DynArrError::Underflow` if the array is empty.
    pub fn try_pop(&mut self) -> Result<T, DynArrError> {
        self.pop().ok_or(DynArrError::Underflow)
    }

    /// Returns a view of the live elements.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.size]
    }

    /// Returns an iterator over the elements, front to back.
    #[must_use]
    pub fn iter(&self) -> DynArrIter<'_, T> {
        self.into_iter()
    }

    /// Returns an iterator over the elements in pop order, back to front.
    #[must_use]
    pub fn iter_rev(&self) -> DynArrRevIter<'_, T> {
        DynArrRevIter::new(self)
    }

    // Replaces the storage block with a fresh one of new_capacity slots,
    // re-homing the live elements. Each single-element copy debits 1 credit;
    // this is where the credits banked by append and pop get spent.
    fn resize(&mut self, new_capacity: usize) {
        let mut block = Self::make_block(new_capacity);
        for (slot, value) in block.iter_mut().zip(&self.storage[..self.size]) {
            self.operation_credits -= 1;
            *slot = *value;
        }
        self.storage = block;
    }
}

impl<T: Copy + Default> Default for DynArr<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy + Default + fmt::Display> fmt::Display for DynArr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynArr: size={}, capacity={}, [", self.size, self.capacity())?;
        for (i, value) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{value}")?;
        }
        write!(f, "]")
    }
}
