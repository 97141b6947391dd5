//! Implementation of priority queues, backed by a binary heap
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use core::cmp::Ordering;

use crate::util::{left, parent, right};

//-----------------------------------------------------------------------------------------------//

/// A priority queue of keys, implemented using a binary heap.
///
/// The smallest key is at the top of the heap.
#[derive(Clone)]
pub struct Heap<K>
where
    K: Ord,
{
    key_slice: Vec<K>,
}

impl<K> Heap<K>
where
    K: Ord,
{
    /// Constructor
    pub fn new() -> Heap<K> {
        Heap {
            key_slice: Vec::new(),
        }
    }

    /// Constructor
    pub fn with_capacity(capacity: usize) -> Heap<K> {
        Heap {
            key_slice: Vec::with_capacity(capacity),
        }
    }

    /// Get the number of keys in the `Heap`
    #[inline]
    pub fn count(&self) -> usize {
        self.key_slice.len()
    }

    /// Check if there are any keys in the `Heap`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.key_slice.is_empty()
    }

    /// Remove all keys from the `Heap`
    pub fn clear(&mut self) {
        self.key_slice.truncate(0);
    }

    /// Reserves capacity for at least `additional` more keys
    pub fn reserve(&mut self, additional: usize) {
        self.key_slice.reserve(additional);
    }

    /// Get the smallest key without removing it
    pub fn peek(&self) -> Option<&K> {
        self.key_slice.first()
    }

    /// Add a key
    pub fn push(&mut self, key: K) {
        push(&mut self.key_slice, key, K::cmp);
    }

    /// Remove and return the smallest key
    pub fn pop(&mut self) -> Option<K> {
        pop(&mut self.key_slice, K::cmp)
    }

    /// Consume the heap, returning the keys in ascending order
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        let mut v = Vec::with_capacity(self.count());
        while let Some(key) = self.pop() {
            v.push(key);
        }
        v
    }
}

impl<K> Default for Heap<K>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<K> FromIterator<K> for Heap<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut heap = Self::with_capacity(iter.size_hint().0);
        for key in iter {
            heap.push(key);
        }
        heap
    }
}

//-----------------------------------------------------------------------------------------------//

/// A priority queue of keys, implemented using a binary heap.
///
/// This version allows a custom sorting function to be used. The key that sorts first is at the
/// top of the heap.
#[derive(Clone)]
pub struct HeapBy<K, F>
where
    F: Fn(&K, &K) -> Ordering,
{
    key_slice: Vec<K>,
    compare: F,
}

impl<K, F> HeapBy<K, F>
where
    F: Fn(&K, &K) -> Ordering,
{
    /// Constructor
    pub fn new(compare: F) -> HeapBy<K, F> {
        HeapBy {
            key_slice: Vec::new(),
            compare,
        }
    }

    /// Constructor
    pub fn with_capacity(capacity: usize, compare: F) -> HeapBy<K, F> {
        HeapBy {
            key_slice: Vec::with_capacity(capacity),
            compare,
        }
    }

    /// Get the number of keys in the `HeapBy`
    #[inline]
    pub fn count(&self) -> usize {
        self.key_slice.len()
    }

    /// Check if there are any keys in the `HeapBy`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.key_slice.is_empty()
    }

    /// Remove all keys from the `HeapBy`
    pub fn clear(&mut self) {
        self.key_slice.truncate(0);
    }

    /// Reserves capacity for at least `additional` more keys
    pub fn reserve(&mut self, additional: usize) {
        self.key_slice.reserve(additional);
    }

    /// Get the first key without removing it
    pub fn peek(&self) -> Option<&K> {
        self.key_slice.first()
    }

    /// Add a key
    pub fn push(&mut self, key: K) {
        push(&mut self.key_slice, key, &self.compare);
    }

    /// Remove and return the first key
    pub fn pop(&mut self) -> Option<K> {
        pop(&mut self.key_slice, &self.compare)
    }

    /// Consume the heap, returning the keys in sorted order
    pub fn into_sorted_vec(mut self) -> Vec<K> {
        let mut v = Vec::with_capacity(self.count());
        while let Some(key) = self.pop() {
            v.push(key);
        }
        v
    }
}

//-----------------------------------------------------------------------------------------------//

fn push<K, F>(key_slice: &mut Vec<K>, key: K, compare: F)
where
    F: Fn(&K, &K) -> Ordering,
{
    key_slice.push(key);
    let x = key_slice.len() - 1;
    sift_up(key_slice, x, compare);
}

fn pop<K, F>(key_slice: &mut Vec<K>, compare: F) -> Option<K>
where
    F: Fn(&K, &K) -> Ordering,
{
    if key_slice.is_empty() {
        return None;
    }

    // The last key takes the place of the top and sinks to where it belongs
    let key = key_slice.swap_remove(0);
    sift_down(key_slice, 0, compare);
    Some(key)
}

// Move the key at `x` towards the top until its parent sorts before it
fn sift_up<K, F>(key_slice: &mut [K], mut x: usize, compare: F)
where
    F: Fn(&K, &K) -> Ordering,
{
    while let Some(y) = parent(x) {
        if compare(&key_slice[x], &key_slice[y]) != Ordering::Less {
            return;
        }
        key_slice.swap(x, y);
        x = y;
    }
}

// Move the key at `x` towards the bottom until both children sort after it
fn sift_down<K, F>(key_slice: &mut [K], mut x: usize, compare: F)
where
    F: Fn(&K, &K) -> Ordering,
{
    loop {
        let mut y = x;
        for z in [left(x), right(x)] {
            if z < key_slice.len() && compare(&key_slice[z], &key_slice[y]) == Ordering::Less {
                y = z;
            }
        }

        if y == x {
            return;
        }

        key_slice.swap(x, y);
        x = y;
    }
}

//-----------------------------------------------------------------------------------------------//

#[test]
// A very simple test of a heap
fn test_heap_0() {
    use alloc::vec;

    let mut heap = Heap::new();
    assert_eq!(heap.peek(), None);
    assert_eq!(heap.pop(), None);

    for key in [5, 3, 8, 1, 4, 7, 9] {
        heap.push(key);
    }

    assert_eq!(heap.count(), 7);
    assert_eq!(heap.peek(), Some(&1));
    assert_eq!(heap.pop(), Some(1));
    assert_eq!(heap.peek(), Some(&3));
    assert_eq!(heap.into_sorted_vec(), vec![3, 4, 5, 7, 8, 9]);
}

#[test]
// A custom sorting function puts the largest key on top
fn test_heap_1() {
    use alloc::vec;

    let mut heap = HeapBy::new(|a: &i32, b: &i32| b.cmp(a));
    for key in [5, 3, 8, 1, 4, 8, 9] {
        heap.push(key);
    }

    assert_eq!(heap.peek(), Some(&9));
    assert_eq!(heap.into_sorted_vec(), vec![9, 8, 8, 5, 4, 3, 1]);
}

#[test]
// A stress test with pushing and popping
fn test_heap_2() {
    use alloc::vec::Vec;
    use rand::prelude::*;

    const COUNT: usize = 100000;

    let mut rng = SmallRng::seed_from_u64(9876543210);

    let mut heap = Heap::new();
    let mut model = Vec::with_capacity(COUNT);
    for _ in 0..COUNT {
        let key = rng.random_range(0..usize::MAX);
        heap.push(key);
        model.push(key);
    }

    model.sort();

    assert_eq!(heap.count(), COUNT);
    assert_eq!(heap.into_sorted_vec(), model);
}
