use thiserror::Error;

/// An index or element count exceeded the capacity of an array.
///
/// Only produced by checked accessors and constructors in builds with `debug_assertions`
/// enabled. Release builds skip the validation entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("index {index} is out of range for length {len}")]
pub struct OutOfRangeError {
    /// The offending index (or, for constructors, the last index that would have been written).
    pub index: usize,
    /// The number of valid indices.
    pub len: usize,
}

/// Validates `index < len` when debug assertions are enabled.
#[inline]
pub(crate) fn check_range(index: usize, len: usize) -> Result<(), OutOfRangeError> {
    if cfg!(debug_assertions) && index >= len {
        log::debug!("range check failed: index {index} >= length {len}");
        return Err(OutOfRangeError { index, len });
    }
    Ok(())
}
