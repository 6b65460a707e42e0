//! # dynarray
//!
//! A growable, contiguous array of scalar elements with explicitly tracked
//! length and capacity.
//!
//! [`DynamicArray<T>`] owns a single buffer. Pushing into a full buffer doubles
//! its capacity by allocating a new buffer and copying the live elements over;
//! capacity never shrinks. Positional reads and writes are bounds-checked and
//! report failures as [`DynamicArrayError`] values rather than panicking.
//!
//! ## Features
//!
//! - **[`DynamicArray<T>`]** – push/pop, bounds-checked `get`/`set`, shift-based
//!   `insert`/`delete`, linear search and memory introspection
//! - **[`StaticArray<T>`]** – fixed-size array with bounds-checked `get`/`set`
//! - **[`growth`]** – the doubling policy and the minimum capacity
//! - **[`SequenceOps<T>`]** – trait over the array's operation set, implemented
//!   for both [`DynamicArray<T>`] and `Vec<T>`
//! - **[`MemoryInfo`] / [`ArrayStats`]** – byte accounting and state snapshots
//!
//! ## Complexity
//!
//! | operation                       | cost            |
//! |---------------------------------|-----------------|
//! | `get`, `set`, `pop`, `len`      | O(1)            |
//! | `push`                          | amortized O(1)  |
//! | `insert`, `delete`              | O(n)            |
//! | `index_of`, `contains`, `to_vec`| O(n)            |
//!
//! ## Quick Example
//!
//! ```rust
//! use dynarray::{DynamicArray, DynamicArrayError};
//!
//! let mut array: DynamicArray<i32> = DynamicArray::new();
//! array.push(1);
//! array.push(2);
//! array.push(3);
//! assert_eq!(array.capacity(), 4);
//!
//! array.insert(1, 99)?;
//! assert_eq!(array.to_string(), "DynamicArray[1, 99, 2, 3]");
//!
//! let info = array.memory_info();
//! assert_eq!(info.used_bytes, 16);
//! assert_eq!(info.allocated_bytes, 16);
//! # Ok::<(), DynamicArrayError>(())
//! ```
//!
//! ## Logging
//!
//! The crate emits [`tracing`] events (capacity growth at `debug`, clears at
//! `trace`) and never installs a subscriber itself.
//!
//! [`DynamicArray<T>`]: generic::dynamic_array::DynamicArray
//! [`StaticArray<T>`]: generic::static_array::StaticArray
//! [`SequenceOps<T>`]: generic::sequence::SequenceOps
//! [`growth`]: generic::growth

pub mod error;
pub mod generic;
pub mod memory;

pub use error::{DynamicArrayError, ValidRange};
pub use generic::dynamic_array::DynamicArray;
pub use generic::sequence::SequenceOps;
pub use generic::static_array::StaticArray;
pub use memory::{ArrayStats, MemoryInfo};
