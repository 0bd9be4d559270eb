use alloc::sync::Arc;
use core::{fmt, ops::Deref};

#[cfg(test)]
mod tests;

/// Shared ownership wrapper backed by [`alloc::sync::Arc`].
///
/// Every synchronized facade keeps its lock behind an `ArcShared`, so cloning a facade hands out
/// another handle to the same container. The allocation address doubles as the container identity
/// used to order lock acquisition across two containers.
#[repr(transparent)]
pub struct ArcShared<T: ?Sized>(Arc<T>);

impl<T> ArcShared<T> {
  /// Creates a new `ArcShared` by wrapping the provided value.
  #[must_use]
  pub fn new(value: T) -> Self {
    Self(Arc::new(value))
  }
}

impl<T: ?Sized> ArcShared<T> {
  /// Wraps an existing `Arc`, which allows unsized values such as trait objects.
  #[must_use]
  pub const fn from_arc(inner: Arc<T>) -> Self {
    Self(inner)
  }

  /// Returns `true` when both handles point at the same allocation.
  #[must_use]
  pub fn ptr_eq(&self, other: &Self) -> bool {
    Arc::ptr_eq(&self.0, &other.0)
  }

  /// Address of the shared allocation, stable for as long as any handle is alive.
  #[must_use]
  pub fn addr(&self) -> usize {
    Arc::as_ptr(&self.0).cast::<()>() as usize
  }

  /// Number of handles currently sharing the allocation.
  #[must_use]
  pub fn strong_count(&self) -> usize {
    Arc::strong_count(&self.0)
  }
}

impl<T: ?Sized> Deref for ArcShared<T> {
  type Target = T;

  fn deref(&self) -> &Self::Target {
    &self.0
  }
}

impl<T: ?Sized> fmt::Debug for ArcShared<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("ArcShared").field("addr", &self.addr()).finish()
  }
}

impl<T: ?Sized> Clone for ArcShared<T> {
  fn clone(&self) -> Self {
    Self(self.0.clone())
  }
}
