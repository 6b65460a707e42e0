use std::fmt;
use thiserror::Error;

/// The indices an operation would have accepted when it rejected an index.
///
/// The upper bound is inclusive, so `UpTo(2)` reads as "0-2".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ValidRange {
    /// No index is valid because the array holds no elements.
    Empty,
    /// Every index from zero through the bound (inclusive) is valid.
    UpTo(usize),
}

impl ValidRange {
    /// Range accepted by element access (`get`, `set`, `delete`): `[0, len)`.
    pub fn for_element(len: usize) -> Self {
        match len {
            0 => ValidRange::Empty,
            n => ValidRange::UpTo(n - 1),
        }
    }

    /// Range accepted by `insert`: `[0, len]`, never empty.
    pub fn for_insertion(len: usize) -> Self {
        ValidRange::UpTo(len)
    }

    /// Returns `true` if `index` falls inside the range.
    pub fn contains(&self, index: usize) -> bool {
        match self {
            ValidRange::Empty => false,
            ValidRange::UpTo(max) => index <= *max,
        }
    }
}

impl fmt::Display for ValidRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidRange::Empty => write!(f, "array is empty"),
            ValidRange::UpTo(max) => write!(f, "0-{max}"),
        }
    }
}

/// Errors returned by [`DynamicArray`] operations.
///
/// Every failure is a rejected request: the array is left exactly as it was
/// before the call.
///
/// [`DynamicArray`]: crate::generic::dynamic_array::DynamicArray
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DynamicArrayError {
    #[error("index {index} is out of range ({valid})")]
    IndexOutOfRange { index: usize, valid: ValidRange },

    #[error("array is empty")]
    EmptyCollection,
}

impl DynamicArrayError {
    /// Checks `index` against `valid`, producing the matching error on failure.
    pub(crate) fn check(index: usize, valid: ValidRange) -> Result<(), Self> {
        if valid.contains(index) {
            Ok(())
        } else {
            Err(DynamicArrayError::IndexOutOfRange { index, valid })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_range() {
        assert_eq!(ValidRange::for_element(0), ValidRange::Empty);
        assert_eq!(ValidRange::for_element(3), ValidRange::UpTo(2));
        assert!(ValidRange::for_element(3).contains(2));
        assert!(!ValidRange::for_element(3).contains(3));
        assert!(!ValidRange::Empty.contains(0));
    }

    #[test]
    fn test_insertion_range_includes_len() {
        assert_eq!(ValidRange::for_insertion(0), ValidRange::UpTo(0));
        assert!(ValidRange::for_insertion(4).contains(4));
        assert!(!ValidRange::for_insertion(4).contains(5));
    }

    #[test]
    fn test_messages() {
        let err = DynamicArrayError::IndexOutOfRange {
            index: 7,
            valid: ValidRange::UpTo(2),
        };
        assert_eq!(err.to_string(), "index 7 is out of range (0-2)");

        let err = DynamicArrayError::IndexOutOfRange {
            index: 0,
            valid: ValidRange::Empty,
        };
        assert_eq!(err.to_string(), "index 0 is out of range (array is empty)");

        assert_eq!(DynamicArrayError::EmptyCollection.to_string(), "array is empty");
    }

    #[test]
    fn test_check() {
        assert!(DynamicArrayError::check(1, ValidRange::UpTo(1)).is_ok());
        assert_eq!(
            DynamicArrayError::check(2, ValidRange::UpTo(1)),
            Err(DynamicArrayError::IndexOutOfRange {
                index: 2,
                valid: ValidRange::UpTo(1)
            })
        );
    }
}
