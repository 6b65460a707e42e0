//! Capacity growth policy for [`DynamicArray`].
//!
//! Capacity starts at [`MIN_CAPACITY`] or the requested value, whichever is
//! larger, and is multiplied by [`GROWTH_FACTOR`] each time a push or insert
//! finds the buffer full. Geometric growth keeps the total copy work over `k`
//! appends at `O(c0 + k)`, which is what makes `push` amortized O(1).
//!
//! [`DynamicArray`]: crate::generic::dynamic_array::DynamicArray

/// Smallest capacity an array is ever created with.
pub const MIN_CAPACITY: usize = 2;

/// Factor applied to the capacity when the buffer is full.
pub const GROWTH_FACTOR: usize = 2;

/// Capacity to allocate for a caller's requested capacity.
///
/// Requests below [`MIN_CAPACITY`] are rounded up rather than rejected.
///
/// ```rust
/// use dynarray::generic::growth::initial_capacity;
///
/// assert_eq!(initial_capacity(0), 2);
/// assert_eq!(initial_capacity(1), 2);
/// assert_eq!(initial_capacity(10), 10);
/// ```
pub fn initial_capacity(requested: usize) -> usize {
    requested.max(MIN_CAPACITY)
}

/// Capacity after one growth step from `current`.
///
/// Saturates at `usize::MAX`; the allocation of such a buffer fails long before
/// that matters.
pub fn grown_capacity(current: usize) -> usize {
    current.saturating_mul(GROWTH_FACTOR).max(MIN_CAPACITY)
}

/// Capacity an array created with `initial` reaches after `len` single-element
/// appends.
///
/// ```rust
/// use dynarray::generic::growth::capacity_for_len;
///
/// assert_eq!(capacity_for_len(2, 0), 2);
/// assert_eq!(capacity_for_len(2, 3), 4);
/// assert_eq!(capacity_for_len(2, 17), 32);
/// assert_eq!(capacity_for_len(3, 7), 12);
/// ```
pub fn capacity_for_len(initial: usize, len: usize) -> usize {
    let mut capacity = initial_capacity(initial);
    while capacity < len {
        capacity = grown_capacity(capacity);
    }
    capacity
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grown_capacity_doubles() {
        assert_eq!(grown_capacity(2), 4);
        assert_eq!(grown_capacity(4), 8);
        assert_eq!(grown_capacity(5), 10);
    }

    #[test]
    fn test_grown_capacity_saturates() {
        assert_eq!(grown_capacity(usize::MAX), usize::MAX);
        assert_eq!(grown_capacity(usize::MAX / 2 + 1), usize::MAX);
    }

    #[test]
    fn test_capacity_for_len_is_power_of_two_from_default() {
        for len in 2..=1024usize {
            assert_eq!(capacity_for_len(MIN_CAPACITY, len), len.next_power_of_two());
        }
    }

    #[test]
    fn test_capacity_for_len_small() {
        assert_eq!(capacity_for_len(0, 0), 2);
        assert_eq!(capacity_for_len(0, 1), 2);
        assert_eq!(capacity_for_len(8, 8), 8);
        assert_eq!(capacity_for_len(8, 9), 16);
    }
}
