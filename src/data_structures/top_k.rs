use std::cmp::Ordering;

use crate::data_structures::compare::{Compare, Reversed};
use crate::data_structures::priority_heap::PriorityHeap;
use crate::{Error, Result};

/// Bounded collector that keeps the `capacity` best elements of a stream
///
/// "Best" is defined by the comparator: `compare(a, b) == Less` means `a`
/// is better. Internally the heap is ordered worst-first so the element to
/// evict is always at the root, and a rejected candidate costs a single
/// comparison.
#[derive(Debug, Clone)]
pub struct TopK<T, C> {
    /// Retained elements, worst at the root
    heap: PriorityHeap<T, Reversed<C>>,

    /// Maximum number of retained elements (always at least 1)
    capacity: usize,
}

impl<T, C> TopK<T, C>
where
    C: Compare<T>,
{
    /// Creates an empty collector retaining at most `capacity` elements
    pub fn new(capacity: usize, cmp: C) -> Result<Self> {
        if capacity == 0 {
            return Err(Error::ZeroCapacity);
        }
        Ok(TopK {
            heap: PriorityHeap::with_capacity(Reversed(cmp), capacity),
            capacity,
        })
    }

    /// Returns the number of retained elements
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns true if nothing has been retained yet
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Returns the maximum number of retained elements
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns true once `capacity` elements are retained
    pub fn is_full(&self) -> bool {
        self.heap.len() >= self.capacity
    }

    /// Returns the worst retained element
    ///
    /// Once the collector is full, a candidate must strictly beat this
    /// element to be retained.
    pub fn threshold(&self) -> Option<&T> {
        self.heap.peek()
    }

    /// Offers a candidate and returns the element that was dropped, if any
    ///
    /// While below capacity every candidate is kept. Once full, a candidate
    /// that strictly beats the threshold replaces it and the old threshold
    /// is returned; any other candidate is returned unchanged.
    pub fn offer(&mut self, value: T) -> Option<T> {
        if !self.is_full() {
            self.heap.push(value);
            return None;
        }

        let beats_threshold = match self.heap.peek() {
            Some(worst) => {
                self.heap.comparator().inner().compare(&value, worst) == Ordering::Less
            }
            None => true,
        };
        if beats_threshold {
            let evicted = self.heap.replace_top(value);
            log::trace!("top-k evicted previous threshold ({} retained)", self.heap.len());
            evicted
        } else {
            Some(value)
        }
    }

    /// Drops every retained element
    pub fn clear(&mut self) {
        self.heap.clear();
    }

    /// Iterates over the retained elements in no particular order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.heap.iter()
    }

    /// Consumes the collector, returning the retained elements best first
    pub fn into_sorted_vec(self) -> Vec<T> {
        let mut sorted = self.heap.into_sorted_vec();
        sorted.reverse();
        log::debug!("top-k yielded {} of capacity {}", sorted.len(), self.capacity);
        sorted
    }
}

impl<T, C> Extend<T> for TopK<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter {
            self.offer(value);
        }
    }
}
