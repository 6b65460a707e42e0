//! Fixed-size array implementation with bounds-checked access.
//!
//! This module provides [`StaticArray`], an array whose size is chosen at
//! construction and never changes. Every slot is live from the start.

use crate::error::{DynamicArrayError, ValidRange};
use bytemuck::Pod;
use std::fmt;
use std::slice;

/// A fixed-size array backed by a single owned buffer.
///
/// All `size` slots start zeroed and stay addressable for the array's
/// lifetime. There is no push, insert or delete; only reads and overwrites.
///
/// # Examples
///
/// ```rust
/// use dynarray::generic::static_array::StaticArray;
///
/// let mut array: StaticArray<i32> = StaticArray::new(3);
/// assert_eq!(array.to_string(), "StaticArray[0, 0, 0]");
///
/// array.set(1, 20).unwrap();
/// assert_eq!(array.get(1), Ok(20));
/// assert!(array.get(3).is_err());
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct StaticArray<T> {
    items: Box<[T]>,
}

impl<T: Pod> StaticArray<T> {
    /// Creates an array of `size` zeroed elements.
    pub fn new(size: usize) -> Self {
        Self {
            items: vec![T::zeroed(); size].into_boxed_slice(),
        }
    }

    /// Returns the number of elements, fixed at construction.
    pub fn size(&self) -> usize {
        self.items.len()
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] unless `index < size`.
    pub fn get(&self, index: usize) -> Result<T, DynamicArrayError> {
        DynamicArrayError::check(index, ValidRange::for_element(self.size()))?;
        Ok(self.items[index])
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] unless `index < size`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), DynamicArrayError> {
        DynamicArrayError::check(index, ValidRange::for_element(self.size()))?;
        self.items[index] = value;
        Ok(())
    }

    /// Returns every element as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: Pod + fmt::Debug> fmt::Debug for StaticArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Pod + fmt::Display> fmt::Display for StaticArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StaticArray[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}
