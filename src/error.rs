//! Error types for list operations.

use thiserror::Error;

/// Convenience alias used by fallible list operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by fallible list operations.
///
/// "Not found" outcomes (absent values, stale handles, popping an empty
/// list) are not errors; those operations return `Option` or `bool` and
/// callers branch on the result. The variants here are argument errors:
/// the caller asked for something the current list state cannot satisfy,
/// and each variant carries the offending argument and the constraint it
/// violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum Error {
    /// The requested position lies outside `[0, len)`.
    #[error("index {index} out of range for list of length {len}")]
    IndexOutOfRange {
        /// Requested position.
        index: usize,
        /// Number of elements in the list.
        len: usize,
    },

    /// A copy destination's start offset lies past the end of the slice.
    #[error("start offset {start} exceeds destination length {dest_len}")]
    StartOutOfRange {
        /// Requested start offset.
        start: usize,
        /// Length of the destination slice.
        dest_len: usize,
    },

    /// A copy destination is too small to hold the list's elements.
    #[error("destination needs room for {required} elements, has {available}")]
    InsufficientCapacity {
        /// Elements the copy would write.
        required: usize,
        /// Slots available at and after the start offset.
        available: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_constraint() {
        let err = Error::IndexOutOfRange { index: 3, len: 3 };
        assert_eq!(
            err.to_string(),
            "index 3 out of range for list of length 3"
        );

        let err = Error::StartOutOfRange {
            start: 9,
            dest_len: 4,
        };
        assert_eq!(err.to_string(), "start offset 9 exceeds destination length 4");

        let err = Error::InsufficientCapacity {
            required: 5,
            available: 2,
        };
        assert_eq!(
            err.to_string(),
            "destination needs room for 5 elements, has 2"
        );
    }

    #[test]
    fn implements_std_error() {
        fn assert_error<E: std::error::Error>() {}
        assert_error::<Error>();
    }
}
