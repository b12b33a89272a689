use thiserror::Error;

/// Error types for `DynArr` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynArrError {
    /// Index is beyond the current array length
    #[error("Index out of bounds: index {index} is beyond array length {length}")]
    OutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the array
        length: usize,
    },
    /// Pop was attempted on an array with no elements
    #[error("Underflow: pop from an empty array")]
    Underflow,
}
