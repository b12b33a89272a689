//! `DynArr`: a self-resizing array that exposes its amortized cost through
//! operation credits.
//!
//! `DynArr` owns one contiguous storage block and manages its own growth and
//! shrink policy: appending into a full block doubles the capacity, popping
//! below 1/4 occupancy shrinks it. Alongside the container state it keeps an
//! operation-credit counter that makes the accounting method of amortized
//! analysis observable: cheap operations bank credits, resizes spend them,
//! and the balance never goes negative across a sequence of appends.
//!
//! # Performance Characteristics
//!
//! ## Time Complexity
//! - `append()`: O(1) amortized - occasional O(n) growth resize paid for by
//!   banked credits
//! - `pop()`: O(1) amortized - occasional O(n) shrink resize
//! - `get()`: O(1) - bounds-checked direct access
//! - `len()`, `capacity()`, `operation_credits()`: O(1)
//! - Iterator operations: O(n) - linear traversal
//!
//! ## Space Complexity
//! - One contiguous block of `capacity` slots, replaced wholesale on resize
//! - Occupancy stays in `[1/4, 1]` under mixed workloads (modulo the default
//!   initial capacity of 10)
//!
//! # Basic Usage
//!
//! ```
//! use dynarr::DynArr;
//!
//! let mut arr = DynArr::new();
//! for i in 0..10 {
//!     arr.append(i);
//! }
//! assert_eq!(arr.len(), 10);
//! assert_eq!(arr.capacity(), 10);
//! assert_eq!(arr.get(9), Some(9));
//!
//! // The 11th element no longer fits; capacity doubles before it lands.
//! arr.append(10);
//! assert_eq!(arr.capacity(), 20);
//! assert_eq!(arr.get(10), Some(10));
//! ```
//!
//! # The Accounting Method
//!
//! Every `append` charges 3 credits: 1 pays for the write, 2 are banked for
//! the resize that will eventually copy the element into a bigger block.
//! Every `pop` charges 1 credit and spends it on the removal. Each
//! single-element copy performed by a resize debits 1 credit. The running
//! balance is observable through [`DynArr::operation_credits`]:
//!
//! ```
//! use dynarr::DynArr;
//!
//! let mut arr: DynArr<i32> = DynArr::with_capacity(2);
//! arr.append(1); // charge 3, write costs 1               => balance 2
//! arr.append(2); // charge 3, write costs 1               => balance 4
//! arr.append(3); // charge 3, copy 2 elements, write 1    => balance 4
//! assert_eq!(arr.capacity(), 4);
//! assert_eq!(arr.operation_credits(), 4);
//! ```
//!
//! # Popping and Shrinking
//!
//! Elements come back in reverse insertion order. When a pop drops occupancy
//! below 1/4 the block shrinks to twice the pre-pop length, so the capacity
//! tracks the live size downward as well as upward:
//!
//! ```
//! use dynarr::DynArr;
//!
//! let mut arr: DynArr<u32> = DynArr::new();
//! for i in 0..10 {
//!     arr.append(i);
//! }
//! for expected in (0..10).rev() {
//!     assert_eq!(arr.pop(), Some(expected));
//! }
//! assert!(arr.is_empty());
//! assert_eq!(arr.pop(), None);
//! ```
//!
//! # Error Handling
//!
//! The `try_` variants report the failing precondition instead of returning
//! `None`; either way the container state is untouched by a failed call:
//!
//! ```
//! use dynarr::{DynArr, DynArrError};
//!
//! let mut arr: DynArr<i32> = DynArr::new();
//! assert_eq!(arr.try_pop(), Err(DynArrError::Underflow));
//! assert_eq!(
//!     arr.try_get(3),
//!     Err(DynArrError::OutOfBounds { index: 3, length: 0 })
//! );
//!
//! arr.append(7);
//! assert_eq!(arr.try_get(0), Ok(7));
//! assert_eq!(arr.try_pop(), Ok(7));
//! ```
//!
//! # Iterator Support
//!
//! ```
//! use dynarr::DynArr;
//!
//! let mut arr: DynArr<i32> = DynArr::new();
//! arr.append(1);
//! arr.append(2);
//! arr.append(3);
//!
//! let forward: Vec<i32> = arr.iter().collect();
//! assert_eq!(forward, [1, 2, 3]);
//!
//! // Reverse iteration matches pop order.
//! let reversed: Vec<i32> = arr.iter_rev().collect();
//! assert_eq!(reversed, [3, 2, 1]);
//!
//! assert_eq!(arr.as_slice(), &[1, 2, 3]);
//! ```

mod core;
mod error;
mod iter;

// Re-export public types and traits
pub use crate::core::DynArr;
pub use error::DynArrError;
pub use iter::{DynArrIter, DynArrRevIter};
