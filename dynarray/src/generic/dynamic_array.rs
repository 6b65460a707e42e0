//! Growable array implementation with explicit length and capacity.
//!
//! This module provides [`DynamicArray`], a contiguous buffer of scalar elements
//! that doubles its capacity when full and supports bounds-checked access,
//! shift-based insertion and deletion, and linear search.

use crate::error::{DynamicArrayError, ValidRange};
use crate::generic::growth;
use crate::memory::{ArrayStats, MemoryInfo};
use bytemuck::Pod;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::mem;
use std::slice;

/// A growable array backed by a single owned buffer.
///
/// `DynamicArray` tracks how many elements are live (`len`) separately from how
/// many slots are allocated (`capacity`). When a push or insert finds the
/// buffer full, a new buffer of twice the capacity is allocated, the live
/// elements are copied over in order and the old buffer is dropped. Capacity
/// never shrinks; [`clear`](Self::clear) only resets the length.
///
/// # Type Parameters
///
/// * `T` - The element type. Must implement [`Pod`] so that unused slots can be
///   zero-filled and the live range can be viewed as bytes.
///
/// # Examples
///
/// ```rust
/// use dynarray::generic::dynamic_array::DynamicArray;
///
/// let mut array: DynamicArray<i32> = DynamicArray::new();
/// assert_eq!(array.capacity(), 2);
///
/// array.push(1);
/// array.push(2);
/// array.push(3); // buffer is full, capacity doubles
/// assert_eq!(array.capacity(), 4);
///
/// array.insert(1, 99).unwrap();
/// assert_eq!(array.as_slice(), &[1, 99, 2, 3]);
///
/// assert_eq!(array.delete(0), Ok(1));
/// assert_eq!(array.index_of(&2), Some(1));
/// assert_eq!(array.pop(), Ok(3));
/// assert_eq!(array.as_slice(), &[99, 2]);
/// ```
///
/// # Memory Layout
///
/// The buffer holds `capacity` slots. Only the first `len` are meaningful; the
/// rest are either zeroed or hold stale values from earlier removals and are
/// never exposed.
#[derive(Clone)]
pub struct DynamicArray<T> {
    storage: Box<[T]>,
    len: usize,
}

impl<T: Pod> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Pod> DynamicArray<T> {
    /// Creates an empty array with the minimum capacity of two.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynarray::generic::dynamic_array::DynamicArray;
    ///
    /// let array: DynamicArray<u64> = DynamicArray::new();
    /// assert!(array.is_empty());
    /// assert_eq!(array.capacity(), 2);
    /// ```
    pub fn new() -> Self {
        Self::with_capacity(growth::MIN_CAPACITY)
    }

    /// Creates an empty array able to hold `capacity` elements before growing.
    ///
    /// Requests below the minimum capacity of two are rounded up.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynarray::generic::dynamic_array::DynamicArray;
    ///
    /// let array: DynamicArray<u8> = DynamicArray::with_capacity(16);
    /// assert_eq!(array.capacity(), 16);
    ///
    /// let array: DynamicArray<u8> = DynamicArray::with_capacity(0);
    /// assert_eq!(array.capacity(), 2);
    /// ```
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            storage: Self::allocate(growth::initial_capacity(capacity)),
            len: 0,
        }
    }

    /// Creates an array holding a copy of `slice`.
    ///
    /// The capacity is the one a default array would have reached by pushing
    /// the elements one at a time.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynarray::generic::dynamic_array::DynamicArray;
    ///
    /// let array = DynamicArray::from_slice(&[1, 2, 3]);
    /// assert_eq!(array.len(), 3);
    /// assert_eq!(array.capacity(), 4);
    /// ```
    pub fn from_slice(slice: &[T]) -> Self {
        let capacity = growth::capacity_for_len(growth::MIN_CAPACITY, slice.len());
        let mut storage = Self::allocate(capacity);
        storage[..slice.len()].copy_from_slice(slice);
        Self {
            storage,
            len: slice.len(),
        }
    }

    fn allocate(capacity: usize) -> Box<[T]> {
        vec![T::zeroed(); capacity].into_boxed_slice()
    }

    /// Returns the number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns the number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns `true` if the array holds no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] unless `index < len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynarray::generic::dynamic_array::DynamicArray;
    /// use dynarray::error::{DynamicArrayError, ValidRange};
    ///
    /// let array = DynamicArray::from_slice(&[10, 20]);
    /// assert_eq!(array.get(1), Ok(20));
    /// assert_eq!(
    ///     array.get(2),
    ///     Err(DynamicArrayError::IndexOutOfRange { index: 2, valid: ValidRange::UpTo(1) })
    /// );
    /// ```
    pub fn get(&self, index: usize) -> Result<T, DynamicArrayError> {
        DynamicArrayError::check(index, ValidRange::for_element(self.len))?;
        Ok(self.storage[index])
    }

    /// Overwrites the element at `index`.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] unless `index < len`.
    pub fn set(&mut self, index: usize, value: T) -> Result<(), DynamicArrayError> {
        DynamicArrayError::check(index, ValidRange::for_element(self.len))?;
        self.storage[index] = value;
        Ok(())
    }

    /// Appends an element, doubling the capacity first if the buffer is full.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynarray::generic::dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::new();
    /// for value in 0..5u32 {
    ///     array.push(value);
    /// }
    /// assert_eq!(array.as_slice(), &[0, 1, 2, 3, 4]);
    /// assert_eq!(array.capacity(), 8);
    /// ```
    pub fn push(&mut self, value: T) {
        if self.len == self.capacity() {
            self.grow();
        }
        self.storage[self.len] = value;
        self.len += 1;
    }

    /// Inserts an element at `index`, shifting every later element one slot
    /// towards the tail.
    ///
    /// Inserting at `index == len` is the same as [`push`](Self::push).
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] unless `index <= len`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynarray::generic::dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from_slice(&[1, 3]);
    /// array.insert(1, 2).unwrap();
    /// array.insert(3, 4).unwrap();
    /// assert_eq!(array.as_slice(), &[1, 2, 3, 4]);
    /// assert!(array.insert(9, 0).is_err());
    /// ```
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), DynamicArrayError> {
        DynamicArrayError::check(index, ValidRange::for_insertion(self.len))?;
        if self.len == self.capacity() {
            self.grow();
        }
        self.storage.copy_within(index..self.len, index + 1);
        self.storage[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Removes and returns the element at `index`, shifting every later element
    /// one slot towards the head.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::IndexOutOfRange`] unless `index < len`.
    pub fn delete(&mut self, index: usize) -> Result<T, DynamicArrayError> {
        DynamicArrayError::check(index, ValidRange::for_element(self.len))?;
        let removed = self.storage[index];
        self.storage.copy_within(index + 1..self.len, index);
        self.len -= 1;
        Ok(removed)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicArrayError::EmptyCollection`] if the array is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynarray::generic::dynamic_array::DynamicArray;
    /// use dynarray::error::DynamicArrayError;
    ///
    /// let mut array = DynamicArray::new();
    /// assert_eq!(array.pop(), Err(DynamicArrayError::EmptyCollection));
    ///
    /// array.push(42u16);
    /// assert_eq!(array.pop(), Ok(42));
    /// ```
    pub fn pop(&mut self) -> Result<T, DynamicArrayError> {
        if self.len == 0 {
            return Err(DynamicArrayError::EmptyCollection);
        }
        self.len -= 1;
        Ok(self.storage[self.len])
    }

    /// Drops every element. The capacity is kept and nothing is deallocated.
    pub fn clear(&mut self) {
        tracing::trace!(len = self.len, capacity = self.capacity(), "clearing dynamic array");
        self.len = 0;
    }

    /// Returns the live elements as a slice.
    pub fn as_slice(&self) -> &[T] {
        &self.storage[..self.len]
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns the live elements reinterpreted as raw bytes.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynarray::generic::dynamic_array::DynamicArray;
    ///
    /// let array = DynamicArray::from_slice(&[1u32, 2, 3]);
    /// assert_eq!(array.as_bytes().len(), 12);
    /// ```
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(self.as_slice())
    }

    /// Returns an independent copy of the live elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynarray::generic::dynamic_array::DynamicArray;
    ///
    /// let mut array = DynamicArray::from_slice(&[1, 2]);
    /// let mut copy = array.to_vec();
    /// copy.push(3);
    /// array.set(0, 10).unwrap();
    ///
    /// assert_eq!(copy, vec![1, 2, 3]);
    /// assert_eq!(array.as_slice(), &[10, 2]);
    /// ```
    pub fn to_vec(&self) -> Vec<T> {
        self.as_slice().to_vec()
    }

    /// Reports bytes in use, bytes allocated and their ratio.
    pub fn memory_info(&self) -> MemoryInfo {
        MemoryInfo::new(mem::size_of::<T>(), self.len, self.capacity())
    }

    /// Reports length, capacity, emptiness and memory use in one snapshot.
    pub fn stats(&self) -> ArrayStats {
        ArrayStats::new(mem::size_of::<T>(), self.len, self.capacity())
    }

    fn grow(&mut self) {
        let old_capacity = self.capacity();
        let new_capacity = growth::grown_capacity(old_capacity);

        let mut storage = Self::allocate(new_capacity);
        storage[..self.len].copy_from_slice(&self.storage[..self.len]);
        self.storage = storage;

        tracing::debug!(old_capacity, new_capacity, len = self.len, "grew dynamic array");
    }
}

impl<T: Pod + PartialEq> DynamicArray<T> {
    /// Returns the index of the first element equal to `value`, scanning from
    /// the head.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dynarray::generic::dynamic_array::DynamicArray;
    ///
    /// let array = DynamicArray::from_slice(&[5, 7, 5]);
    /// assert_eq!(array.index_of(&5), Some(0));
    /// assert_eq!(array.index_of(&9), None);
    /// ```
    pub fn index_of(&self, value: &T) -> Option<usize> {
        self.iter().position(|item| item == value)
    }

    /// Returns `true` if any live element equals `value`.
    pub fn contains(&self, value: &T) -> bool {
        self.index_of(value).is_some()
    }
}

impl<T: Pod + PartialEq> PartialEq for DynamicArray<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Pod + Eq> Eq for DynamicArray<T> {}

impl<T: Pod + fmt::Debug> fmt::Debug for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Pod + fmt::Display> fmt::Display for DynamicArray<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DynamicArray[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{item}")?;
        }
        write!(f, "]")
    }
}

impl<T: Pod> Extend<T> for DynamicArray<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Pod> FromIterator<T> for DynamicArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        array.extend(iter);
        array
    }
}

impl<'a, T: Pod> IntoIterator for &'a DynamicArray<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Pod + Serialize> Serialize for DynamicArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.iter())
    }
}

impl<'de, T: Pod + Deserialize<'de>> Deserialize<'de> for DynamicArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}
