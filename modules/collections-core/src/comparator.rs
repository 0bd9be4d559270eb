use alloc::sync::Arc;
use core::{cmp::Ordering, fmt};

use crate::sync::ArcShared;


type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// Three-way ordering function injected into ordered containers.
///
/// The function is immutable and reference counted; every container built from the same comparator
/// shares it, and cloning only bumps the count.
pub struct Comparator<T> {
  compare: ArcShared<CompareFn<T>>,
}

impl<T> Comparator<T> {
  /// Wraps an arbitrary ordering function.
  ///
  /// The function must define a total order; containers rely on it for their structural
  /// invariants.
  pub fn from_fn<F>(compare: F) -> Self
  where
    F: Fn(&T, &T) -> Ordering + Send + Sync + 'static, {
    let compare: Arc<CompareFn<T>> = Arc::new(compare);
    Self { compare: ArcShared::from_arc(compare) }
  }

  /// Compares two values.
  #[must_use]
  pub fn compare(&self, left: &T, right: &T) -> Ordering {
    (self.compare)(left, right)
  }

  /// Returns `true` when both values compare equal.
  #[must_use]
  pub fn equals(&self, left: &T, right: &T) -> bool {
    self.compare(left, right) == Ordering::Equal
  }
}

impl<T: 'static> Comparator<T> {
  /// Returns a comparator with the opposite ordering.
  #[must_use]
  pub fn reverse(&self) -> Self {
    let inner = self.clone();
    Self::from_fn(move |left, right| inner.compare(right, left))
  }
}

impl<T: Ord + 'static> Comparator<T> {
  /// Comparator following the natural [`Ord`] implementation.
  #[must_use]
  pub fn natural() -> Self {
    Self::from_fn(T::cmp)
  }
}

impl Comparator<f32> {
  /// Comparator for `f32` where incomparable values (NaN) compare equal.
  #[must_use]
  pub fn float32() -> Self {
    Self::from_fn(|left: &f32, right: &f32| f32_order(*left, *right))
  }
}

impl Comparator<f64> {
  /// Comparator for `f64` where incomparable values (NaN) compare equal.
  #[must_use]
  pub fn float64() -> Self {
    Self::from_fn(|left: &f64, right: &f64| f64_order(*left, *right))
  }
}

impl<T> Clone for Comparator<T> {
  fn clone(&self) -> Self {
    Self { compare: self.compare.clone() }
  }
}

impl<T> fmt::Debug for Comparator<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("Comparator").field("shared", &self.compare.strong_count()).finish()
  }
}

/// Total order over `f32` treating NaN as equal to everything.
#[must_use]
pub fn f32_order(left: f32, right: f32) -> Ordering {
  left.partial_cmp(&right).unwrap_or(Ordering::Equal)
}

/// Total order over `f64` treating NaN as equal to everything.
#[must_use]
pub fn f64_order(left: f64, right: f64) -> Ordering {
  left.partial_cmp(&right).unwrap_or(Ordering::Equal)
}
