use std::cmp::Ordering;
use std::fmt::{self, Debug};
use std::slice;

use crate::data_structures::compare::{Compare, MaxOrder, MinOrder};

/// Array-backed binary heap ordered by a caller-supplied comparator
///
/// The element at index `i` has children at `2i + 1` and `2i + 2` and its
/// parent at `(i - 1) / 2`. No child ever outranks its parent, so the root
/// is always the highest-priority element.
///
/// Supported operations:
/// - Push / Pop in O(log n)
/// - ReplaceTop: swap the root for a new value in O(log n) without resizing
/// - PushPop: offer a value and evict whatever ranks lowest between it and the
///   root, in O(1) when the value is rejected and O(log n) otherwise
#[derive(Clone)]
pub struct PriorityHeap<T, C> {
    /// Elements in heap-array order
    data: Vec<T>,

    /// Priority order, fixed for the lifetime of the heap
    cmp: C,
}

impl<T: Ord> PriorityHeap<T, MinOrder> {
    /// Creates an empty heap that yields the smallest element first
    pub fn min() -> Self {
        PriorityHeap::new(MinOrder)
    }
}

impl<T: Ord> PriorityHeap<T, MaxOrder> {
    /// Creates an empty heap that yields the largest element first
    pub fn max() -> Self {
        PriorityHeap::new(MaxOrder)
    }
}

impl<T, C> PriorityHeap<T, C>
where
    C: Compare<T>,
{
    /// Creates a new empty heap ordered by `cmp`
    pub fn new(cmp: C) -> Self {
        PriorityHeap {
            data: Vec::new(),
            cmp,
        }
    }

    /// Creates a new empty heap with room for `capacity` elements
    pub fn with_capacity(cmp: C, capacity: usize) -> Self {
        PriorityHeap {
            data: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Builds a heap from `items` in O(n)
    ///
    /// The vector is taken over as-is and reordered in place.
    pub fn from_vec(cmp: C, items: Vec<T>) -> Self {
        let mut heap = PriorityHeap { data: items, cmp };
        heap.heapify();
        heap
    }

    /// Builds a heap from any finite sequence of elements in O(n)
    pub fn with_items<I>(cmp: C, items: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_vec(cmp, items.into_iter().collect())
    }

    /// Returns the number of elements in the heap
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap holds no elements
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the highest-priority element without removing it
    pub fn peek(&self) -> Option<&T> {
        self.data.first()
    }

    /// Removes all elements, keeping the comparator
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Returns the comparator ordering this heap
    pub fn comparator(&self) -> &C {
        &self.cmp
    }

    /// Pushes an element into the heap
    pub fn push(&mut self, value: T) {
        self.data.push(value);
        let last = self.data.len() - 1;
        let settled = self.sift_up(last);
        debug_assert!(self.is_ordered_at(settled));
    }

    /// Removes and returns the highest-priority element
    pub fn pop(&mut self) -> Option<T> {
        let mut top = self.data.pop()?;
        if !self.data.is_empty() {
            // `top` currently holds the last element; move it to the root
            std::mem::swap(&mut top, &mut self.data[0]);
            let settled = self.sift_down(0);
            debug_assert!(self.is_ordered_at(settled));
        }
        Some(top)
    }

    /// Replaces the highest-priority element with `value` and returns it
    ///
    /// On an empty heap `value` becomes the only element and `None` is
    /// returned. The heap never changes size otherwise.
    pub fn replace_top(&mut self, value: T) -> Option<T> {
        if self.data.is_empty() {
            self.data.push(value);
            return None;
        }
        let top = std::mem::replace(&mut self.data[0], value);
        let settled = self.sift_down(0);
        debug_assert!(self.is_ordered_at(settled));
        Some(top)
    }

    /// Offers `value` to the heap and returns whichever element falls out
    ///
    /// If `value` strictly outranks the root, it takes the root's place and
    /// the former root is returned. Otherwise the heap is left untouched and
    /// `value` comes straight back. On an empty heap `value` is stored and a
    /// copy of it is returned.
    pub fn push_pop(&mut self, value: T) -> T
    where
        T: Clone,
    {
        let outranks_root = match self.data.first() {
            None => {
                self.data.push(value.clone());
                return value;
            }
            Some(root) => self.cmp.compare(&value, root) == Ordering::Less,
        };
        if !outranks_root {
            return value;
        }
        let top = std::mem::replace(&mut self.data[0], value);
        let settled = self.sift_down(0);
        debug_assert!(self.is_ordered_at(settled));
        top
    }

    /// Returns a copy of the elements in heap-array order
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.data.clone()
    }

    /// Returns the elements in heap-array order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over the elements in heap-array order
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Consumes the heap, returning the elements in heap-array order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap, returning the elements highest priority first
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Some(value) = self.pop() {
            sorted.push(value);
        }
        sorted
    }

    /// Checks that no element outranks its parent
    pub fn is_valid(&self) -> bool {
        (1..self.data.len()).all(|i| {
            let parent = (i - 1) / 2;
            self.cmp.compare(&self.data[i], &self.data[parent]) != Ordering::Less
        })
    }

    /// Checks the element at `i` against its parent and children
    fn is_ordered_at(&self, i: usize) -> bool {
        let n = self.data.len();
        let below_parent = i == 0
            || self.cmp.compare(&self.data[i], &self.data[(i - 1) / 2]) != Ordering::Less;
        let above_children = (2 * i + 1..(2 * i + 3).min(n))
            .all(|child| self.cmp.compare(&self.data[child], &self.data[i]) != Ordering::Less);
        below_parent && above_children
    }

    /// Restores the heap order over the whole array, last parent first
    fn heapify(&mut self) {
        let n = self.data.len();
        for i in (0..n / 2).rev() {
            self.sift_down(i);
        }
        log::trace!("heapified {} elements", n);
    }

    /// Moves the element at `i` towards the root while it outranks its parent,
    /// returning where it settled
    fn sift_up(&mut self, mut i: usize) -> usize {
        while i > 0 {
            let parent = (i - 1) / 2;
            if self.cmp.compare(&self.data[i], &self.data[parent]) != Ordering::Less {
                break;
            }
            self.data.swap(i, parent);
            i = parent;
        }
        i
    }

    /// Moves the element at `i` towards the leaves while a child outranks it,
    /// returning where it settled
    fn sift_down(&mut self, mut i: usize) -> usize {
        let n = self.data.len();
        loop {
            let left = 2 * i + 1;
            if left >= n {
                break;
            }
            let right = left + 1;

            // Left child wins ties
            let mut best = left;
            if right < n
                && self.cmp.compare(&self.data[right], &self.data[left]) == Ordering::Less
            {
                best = right;
            }

            if self.cmp.compare(&self.data[best], &self.data[i]) != Ordering::Less {
                break;
            }
            self.data.swap(i, best);
            i = best;
        }
        i
    }
}

impl<T: Debug, C> Debug for PriorityHeap<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PriorityHeap")
            .field("data", &self.data)
            .finish_non_exhaustive()
    }
}

impl<T, C> Default for PriorityHeap<T, C>
where
    C: Compare<T> + Default,
{
    fn default() -> Self {
        PriorityHeap::new(C::default())
    }
}

impl<T, C> FromIterator<T> for PriorityHeap<T, C>
where
    C: Compare<T> + Default,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        PriorityHeap::with_items(C::default(), iter)
    }
}

impl<T, C> Extend<T> for PriorityHeap<T, C>
where
    C: Compare<T>,
{
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for value in iter {
            self.push(value);
        }
    }
}

impl<'a, T, C> IntoIterator for &'a PriorityHeap<T, C> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}
