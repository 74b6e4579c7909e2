use std::cmp::Ordering;
use std::fmt;

/// Defines the priority order of a heap.
///
/// `compare(a, b) == Ordering::Less` means `a` has strictly higher priority
/// than `b` and belongs closer to the root. Implementations must be a
/// consistent total preorder for as long as the heap lives.
pub trait Compare<T: ?Sized> {
    fn compare(&self, a: &T, b: &T) -> Ordering;
}

impl<T: ?Sized, F> Compare<T> for F
where
    F: Fn(&T, &T) -> Ordering,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self(a, b)
    }
}

/// Smallest element first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinOrder;

impl<T: Ord + ?Sized> Compare<T> for MinOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        a.cmp(b)
    }
}

/// Largest element first
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxOrder;

impl<T: Ord + ?Sized> Compare<T> for MaxOrder {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        b.cmp(a)
    }
}

/// Orders elements by a projected key, smallest key first
#[derive(Clone, Copy)]
pub struct KeyOrder<F> {
    key: F,
}

impl<F> KeyOrder<F> {
    /// Creates a comparator that ranks elements by `key(element)`
    pub fn new(key: F) -> Self {
        KeyOrder { key }
    }
}

impl<F> fmt::Debug for KeyOrder<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyOrder").finish_non_exhaustive()
    }
}

impl<T, K, F> Compare<T> for KeyOrder<F>
where
    F: Fn(&T) -> K,
    K: Ord,
{
    fn compare(&self, a: &T, b: &T) -> Ordering {
        (self.key)(a).cmp(&(self.key)(b))
    }
}

/// Flips the priority of the wrapped comparator
#[derive(Debug, Clone, Copy, Default)]
pub struct Reversed<C>(pub C);

impl<C> Reversed<C> {
    /// Returns the wrapped comparator
    pub fn inner(&self) -> &C {
        &self.0
    }
}

impl<T: ?Sized, C: Compare<T>> Compare<T> for Reversed<C> {
    fn compare(&self, a: &T, b: &T) -> Ordering {
        self.0.compare(b, a)
    }
}
