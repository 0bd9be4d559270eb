#[cfg(test)]
mod tests;

/// Errors reported by container operations.
///
/// Every variant is recoverable and returned to the immediate caller.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
  /// The operation needs at least one element but the container is empty.
  #[error("container is empty")]
  Empty,
  /// The requested key is not stored in the container.
  #[error("key not found")]
  NotFound,
  /// A positional access fell outside the valid range.
  #[error("index {index} out of range for length {len}")]
  IndexOutOfRange {
    /// Position that was requested.
    index: usize,
    /// Length of the container at the time of the request.
    len:   usize,
  },
}

impl CollectionError {
  /// Builds an [`CollectionError::IndexOutOfRange`] for the given position and length.
  #[must_use]
  pub const fn out_of_range(index: usize, len: usize) -> Self {
    Self::IndexOutOfRange { index, len }
  }
}
