//! Common trait for indexable, growable sequences.
//!
//! This module provides [`SequenceOps`], a trait that abstracts over the
//! operation set of [`DynamicArray`] so that generic code (benchmarks in
//! particular) can drive both [`DynamicArray`] and the standard library's `Vec`
//! with the same calls and the same error reporting.

use crate::error::{DynamicArrayError, ValidRange};
use crate::generic::dynamic_array::DynamicArray;
use bytemuck::Pod;

/// A trait for growable sequences with bounds-checked positional access.
///
/// # Examples
///
/// ```rust
/// use dynarray::generic::{dynamic_array::DynamicArray, sequence::SequenceOps};
///
/// fn work_with_sequence<S: SequenceOps<i32>>(sequence: &mut S) {
///     sequence.push(1);
///     sequence.push(3);
///     sequence.insert(1, 2).unwrap();
///     assert_eq!(sequence.as_slice(), &[1, 2, 3]);
///     assert_eq!(sequence.index_of(&3), Some(2));
///     assert_eq!(sequence.delete(0), Ok(1));
///     assert!(sequence.get(5).is_err());
/// }
///
/// let mut array = DynamicArray::new();
/// work_with_sequence(&mut array);
///
/// let mut vec = Vec::new();
/// work_with_sequence(&mut vec);
/// ```
///
/// [`DynamicArray`]: crate::generic::dynamic_array::DynamicArray
pub trait SequenceOps<T> {
    /// Appends an element to the back.
    fn push(&mut self, item: T);

    /// Removes and returns the last element.
    ///
    /// Returns [`DynamicArrayError::EmptyCollection`] if there is none.
    fn pop(&mut self) -> Result<T, DynamicArrayError>;

    /// Returns the element at `index`.
    fn get(&self, index: usize) -> Result<T, DynamicArrayError>;

    /// Overwrites the element at `index`.
    fn set(&mut self, index: usize, item: T) -> Result<(), DynamicArrayError>;

    /// Inserts an element at `index`, where `index <= len`.
    fn insert(&mut self, index: usize, item: T) -> Result<(), DynamicArrayError>;

    /// Removes and returns the element at `index`.
    fn delete(&mut self, index: usize) -> Result<T, DynamicArrayError>;

    /// Returns the index of the first element equal to `item`.
    fn index_of(&self, item: &T) -> Option<usize>;

    /// Returns a slice view of all live elements.
    fn as_slice(&self) -> &[T];

    /// Returns the number of live elements.
    fn len(&self) -> usize;

    /// Returns the number of elements the sequence can hold without growing.
    fn capacity(&self) -> usize;

    /// Returns `true` if the sequence holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Pod + PartialEq> SequenceOps<T> for DynamicArray<T> {
    fn push(&mut self, item: T) {
        DynamicArray::push(self, item)
    }

    fn pop(&mut self) -> Result<T, DynamicArrayError> {
        DynamicArray::pop(self)
    }

    fn get(&self, index: usize) -> Result<T, DynamicArrayError> {
        DynamicArray::get(self, index)
    }

    fn set(&mut self, index: usize, item: T) -> Result<(), DynamicArrayError> {
        DynamicArray::set(self, index, item)
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), DynamicArrayError> {
        DynamicArray::insert(self, index, item)
    }

    fn delete(&mut self, index: usize) -> Result<T, DynamicArrayError> {
        DynamicArray::delete(self, index)
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        DynamicArray::index_of(self, item)
    }

    fn as_slice(&self) -> &[T] {
        DynamicArray::as_slice(self)
    }

    fn len(&self) -> usize {
        DynamicArray::len(self)
    }

    fn capacity(&self) -> usize {
        DynamicArray::capacity(self)
    }
}

/// Implementation for standard library [`Vec`].
///
/// Bounds are checked up front so that out-of-range indices are reported the
/// same way [`DynamicArray`] reports them instead of panicking. Capacity growth
/// follows `Vec`'s own policy.
///
/// [`Vec`]: std::vec::Vec
impl<T: Copy + PartialEq> SequenceOps<T> for Vec<T> {
    fn push(&mut self, item: T) {
        Vec::push(self, item)
    }

    fn pop(&mut self) -> Result<T, DynamicArrayError> {
        Vec::pop(self).ok_or(DynamicArrayError::EmptyCollection)
    }

    fn get(&self, index: usize) -> Result<T, DynamicArrayError> {
        DynamicArrayError::check(index, ValidRange::for_element(Vec::len(self)))?;
        Ok(self[index])
    }

    fn set(&mut self, index: usize, item: T) -> Result<(), DynamicArrayError> {
        DynamicArrayError::check(index, ValidRange::for_element(Vec::len(self)))?;
        self[index] = item;
        Ok(())
    }

    fn insert(&mut self, index: usize, item: T) -> Result<(), DynamicArrayError> {
        DynamicArrayError::check(index, ValidRange::for_insertion(Vec::len(self)))?;
        Vec::insert(self, index, item);
        Ok(())
    }

    fn delete(&mut self, index: usize) -> Result<T, DynamicArrayError> {
        DynamicArrayError::check(index, ValidRange::for_element(Vec::len(self)))?;
        Ok(Vec::remove(self, index))
    }

    fn index_of(&self, item: &T) -> Option<usize> {
        self.iter().position(|candidate| candidate == item)
    }

    fn as_slice(&self) -> &[T] {
        Vec::as_slice(self)
    }

    fn len(&self) -> usize {
        Vec::len(self)
    }

    fn capacity(&self) -> usize {
        Vec::capacity(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise<S: SequenceOps<i64>>(sequence: &mut S) -> Vec<Result<i64, DynamicArrayError>> {
        let mut results = Vec::new();
        for value in 0..6 {
            sequence.push(value * 10);
        }
        results.push(sequence.insert(0, -1).map(|_| 0));
        results.push(sequence.insert(99, 5).map(|_| 0));
        results.push(sequence.delete(3));
        results.push(sequence.delete(42));
        results.push(sequence.get(2));
        results.push(sequence.get(6));
        results.push(sequence.set(1, 7).map(|_| 0));
        results.push(sequence.pop());
        results.push(sequence.index_of(&20).map(|i| i as i64).ok_or(DynamicArrayError::EmptyCollection));
        results
    }

    #[test]
    fn test_vec_and_dynamic_array_agree() {
        let mut array = DynamicArray::<i64>::new();
        let mut vec = Vec::<i64>::new();

        assert_eq!(exercise(&mut array), exercise(&mut vec));
        assert_eq!(SequenceOps::as_slice(&array), SequenceOps::as_slice(&vec));
        assert_eq!(SequenceOps::len(&array), SequenceOps::len(&vec));
    }

    #[test]
    fn test_vec_pop_empty() {
        let mut vec: Vec<u8> = Vec::new();
        assert_eq!(SequenceOps::pop(&mut vec), Err(DynamicArrayError::EmptyCollection));
        assert!(SequenceOps::is_empty(&vec));
    }

    #[test]
    fn test_vec_bounds_errors() {
        let mut vec = vec![1, 2, 3];
        assert_eq!(
            SequenceOps::get(&vec, 3),
            Err(DynamicArrayError::IndexOutOfRange {
                index: 3,
                valid: ValidRange::UpTo(2)
            })
        );
        assert_eq!(
            SequenceOps::insert(&mut vec, 5, 0),
            Err(DynamicArrayError::IndexOutOfRange {
                index: 5,
                valid: ValidRange::UpTo(3)
            })
        );
        assert_eq!(vec, vec![1, 2, 3]);
    }

    #[test]
    fn test_dynamic_array_capacity_through_trait() {
        let mut array = DynamicArray::<u32>::new();
        for value in 0..5 {
            SequenceOps::push(&mut array, value);
        }
        assert_eq!(SequenceOps::capacity(&array), 8);
        assert!(!SequenceOps::is_empty(&array));
    }
}
