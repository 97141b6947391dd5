//! Implementation of sets, backed by a positional binary search tree
#![warn(missing_docs)]

extern crate alloc;

use alloc::vec::Vec;
use compact_str::CompactString;
use core::{cmp::Ordering, iter::FusedIterator};
use num::BigUint;

use crate::util::{Iter, Tree};

//-----------------------------------------------------------------------------------------------//

/// A simple set of keys, implemented using a positional binary search tree.
#[derive(Clone)]
pub struct Set<K>
where
    K: Ord,
{
    tree: Tree<K>,
}

impl<K> Set<K>
where
    K: Ord,
{
    /// Constructor
    pub fn new() -> Set<K> {
        Set { tree: Tree::new() }
    }

    /// Get the number of keys in the `Set`
    #[inline]
    pub fn count(&self) -> usize {
        self.tree.count()
    }

    /// Check if there are any keys in the `Set`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Get the number of slots backing the `Set`, including holes
    #[inline]
    pub fn allocated_count(&self) -> &BigUint {
        self.tree.allocated_count()
    }

    /// Remove all keys from the `Set`
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Insert a key.
    ///
    /// If an equal key is already in the set then the new key is dropped and the set is unchanged.
    pub fn insert(&mut self, key: K) {
        self.tree.insert_by(key, K::cmp);
    }

    /// Search for a key.
    ///
    /// If the key is not in the tree then `None` is returned.
    pub fn search(&self, key: &K) -> Option<&K> {
        let leaf = self.tree.find_by(key, K::cmp)?;
        self.tree.get(&leaf)
    }

    /// Check if the set holds a key
    pub fn contains(&self, key: &K) -> bool {
        self.tree.find_by(key, K::cmp).is_some()
    }

    /// Remove a key.
    ///
    /// If the key does not exist, then this function has no effect and returns `None`.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        self.tree.remove_by(key, K::cmp)
    }

    /// Get the first key in the set
    pub fn first(&self) -> Option<&K> {
        self.tree.get(&self.tree.first()?)
    }

    /// Get the last key in the set
    pub fn last(&self) -> Option<&K> {
        self.tree.get(&self.tree.last()?)
    }

    /// Pop the first key from the set
    pub fn pop_first(&mut self) -> Option<K> {
        let leaf = self.tree.first()?;
        self.tree.remove_at(&leaf)
    }

    /// Pop the last key from the set
    pub fn pop_last(&mut self) -> Option<K> {
        let leaf = self.tree.last()?;
        self.tree.remove_at(&leaf)
    }

    /// Collect the keys in ascending order
    pub fn in_order(&self) -> Vec<&K> {
        self.tree.in_order()
    }

    /// Collect the keys, each node before its children
    pub fn pre_order(&self) -> Vec<&K> {
        self.tree.pre_order()
    }

    /// Collect the keys, each node after its children
    pub fn post_order(&self) -> Vec<&K> {
        self.tree.post_order()
    }

    /// Collect the keys breadth first
    pub fn level_order(&self) -> Vec<&K> {
        self.tree.level_order()
    }

    /// Iterate over the keys in the `Set` in ascending order
    pub fn iter(&self) -> Iter<'_, K> {
        self.tree.iter()
    }

    // Debug tests
    #[cfg(any(test, debug_assertions))]
    #[allow(dead_code)]
    fn check(&self) {
        self.tree.check_by(K::cmp);
    }
}

impl<K> Default for Set<K>
where
    K: Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, K> IntoIterator for &'a Set<K>
where
    K: Ord,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K> FromIterator<K> for Set<K>
where
    K: Ord,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

//-----------------------------------------------------------------------------------------------//

/// A simple set of strings, implemented using a positional binary search tree.
///
/// This is a specialised version of `Set` that stores keys as a string.
#[derive(Clone)]
pub struct StringSet {
    tree: Tree<CompactString>,
}

impl StringSet {
    /// Constructor
    pub fn new() -> StringSet {
        StringSet { tree: Tree::new() }
    }

    /// Get the number of keys in the `StringSet`
    #[inline]
    pub fn count(&self) -> usize {
        self.tree.count()
    }

    /// Check if there are any keys in the `StringSet`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Get the number of slots backing the `StringSet`, including holes
    #[inline]
    pub fn allocated_count(&self) -> &BigUint {
        self.tree.allocated_count()
    }

    /// Remove all keys from the `StringSet`
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Insert a key.
    ///
    /// If the key is already in the set then the set is unchanged.
    pub fn insert(&mut self, key: &str) {
        self.tree.insert_by(CompactString::from(key), CompactString::cmp);
    }

    /// Search for a key.
    ///
    /// If the key is not in the tree then `None` is returned.
    pub fn search(&self, key: &str) -> Option<&str> {
        let leaf = self.tree.find_by(key, compare_str)?;
        self.tree.get(&leaf).map(CompactString::as_str)
    }

    /// Check if the set holds a key
    pub fn contains(&self, key: &str) -> bool {
        self.tree.find_by(key, compare_str).is_some()
    }

    /// Remove a key.
    ///
    /// If the key does not exist, then this function has no effect and returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<CompactString> {
        self.tree.remove_by(key, compare_str)
    }

    /// Get the first key in the set
    pub fn first(&self) -> Option<&str> {
        self.tree.get(&self.tree.first()?).map(CompactString::as_str)
    }

    /// Get the last key in the set
    pub fn last(&self) -> Option<&str> {
        self.tree.get(&self.tree.last()?).map(CompactString::as_str)
    }

    /// Pop the first key from the set
    pub fn pop_first(&mut self) -> Option<CompactString> {
        let leaf = self.tree.first()?;
        self.tree.remove_at(&leaf)
    }

    /// Pop the last key from the set
    pub fn pop_last(&mut self) -> Option<CompactString> {
        let leaf = self.tree.last()?;
        self.tree.remove_at(&leaf)
    }

    /// Collect the keys in ascending order
    pub fn in_order(&self) -> Vec<&str> {
        strs(self.tree.in_order())
    }

    /// Collect the keys, each node before its children
    pub fn pre_order(&self) -> Vec<&str> {
        strs(self.tree.pre_order())
    }

    /// Collect the keys, each node after its children
    pub fn post_order(&self) -> Vec<&str> {
        strs(self.tree.post_order())
    }

    /// Collect the keys breadth first
    pub fn level_order(&self) -> Vec<&str> {
        strs(self.tree.level_order())
    }

    /// Iterate over the keys in the `StringSet` in ascending order
    pub fn iter(&self) -> StringSetIterator<'_> {
        StringSetIterator {
            iter: self.tree.iter(),
        }
    }
}

impl Default for StringSet {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a StringSet {
    type Item = &'a str;
    type IntoIter = StringSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a> FromIterator<&'a str> for StringSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for key in iter {
            set.insert(key);
        }
        set
    }
}

//-----------------------------------------------------------------------------------------------//

/// Iterator over a `StringSet` or a `StringSetBy`
pub struct StringSetIterator<'a> {
    iter: Iter<'a, CompactString>,
}

impl<'a> Iterator for StringSetIterator<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        self.iter.next().map(CompactString::as_str)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.iter.size_hint()
    }
}

impl ExactSizeIterator for StringSetIterator<'_> {}

impl FusedIterator for StringSetIterator<'_> {}

//-----------------------------------------------------------------------------------------------//

/// A simple set of keys, implemented using a positional binary search tree.
///
/// This version allows a custom sorting function to be used. The function must be a consistent
/// total order; keys it reports as `Equal` are treated as duplicates.
#[derive(Clone)]
pub struct SetBy<K, F>
where
    F: Fn(&K, &K) -> Ordering,
{
    tree: Tree<K>,
    compare: F,
}

impl<K, F> SetBy<K, F>
where
    F: Fn(&K, &K) -> Ordering,
{
    /// Constructor
    pub fn new(compare: F) -> SetBy<K, F> {
        SetBy {
            tree: Tree::new(),
            compare,
        }
    }

    /// Get the number of keys in the `SetBy`
    #[inline]
    pub fn count(&self) -> usize {
        self.tree.count()
    }

    /// Check if there are any keys in the `SetBy`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Get the number of slots backing the `SetBy`, including holes
    #[inline]
    pub fn allocated_count(&self) -> &BigUint {
        self.tree.allocated_count()
    }

    /// Remove all keys from the `SetBy`
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Insert a key.
    ///
    /// If an equal key is already in the set then the new key is dropped and the set is unchanged.
    pub fn insert(&mut self, key: K) {
        self.tree.insert_by(key, &self.compare);
    }

    /// Search for a key.
    ///
    /// If the key is not in the tree then `None` is returned.
    pub fn search(&self, key: &K) -> Option<&K> {
        let leaf = self.tree.find_by(key, &self.compare)?;
        self.tree.get(&leaf)
    }

    /// Check if the set holds a key
    pub fn contains(&self, key: &K) -> bool {
        self.tree.find_by(key, &self.compare).is_some()
    }

    /// Remove a key.
    ///
    /// If the key does not exist, then this function has no effect and returns `None`.
    pub fn remove(&mut self, key: &K) -> Option<K> {
        self.tree.remove_by(key, &self.compare)
    }

    /// Get the first key in the set
    pub fn first(&self) -> Option<&K> {
        self.tree.get(&self.tree.first()?)
    }

    /// Get the last key in the set
    pub fn last(&self) -> Option<&K> {
        self.tree.get(&self.tree.last()?)
    }

    /// Pop the first key from the set
    pub fn pop_first(&mut self) -> Option<K> {
        let leaf = self.tree.first()?;
        self.tree.remove_at(&leaf)
    }

    /// Pop the last key from the set
    pub fn pop_last(&mut self) -> Option<K> {
        let leaf = self.tree.last()?;
        self.tree.remove_at(&leaf)
    }

    /// Collect the keys in the order given by the sorting function
    pub fn in_order(&self) -> Vec<&K> {
        self.tree.in_order()
    }

    /// Collect the keys, each node before its children
    pub fn pre_order(&self) -> Vec<&K> {
        self.tree.pre_order()
    }

    /// Collect the keys, each node after its children
    pub fn post_order(&self) -> Vec<&K> {
        self.tree.post_order()
    }

    /// Collect the keys breadth first
    pub fn level_order(&self) -> Vec<&K> {
        self.tree.level_order()
    }

    /// Iterate over the keys in the `SetBy` in sorted order
    pub fn iter(&self) -> Iter<'_, K> {
        self.tree.iter()
    }

    // Debug tests
    #[cfg(any(test, debug_assertions))]
    #[allow(dead_code)]
    fn check(&self) {
        self.tree.check_by(&self.compare);
    }
}

impl<'a, K, F> IntoIterator for &'a SetBy<K, F>
where
    F: Fn(&K, &K) -> Ordering,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//-----------------------------------------------------------------------------------------------//

/// A simple set of strings, implemented using a positional binary search tree.
///
/// This is a specialised version of `Set` that stores keys as a string and allows a custom sorting
/// function to be used.
#[derive(Clone)]
pub struct StringSetBy<F>
where
    F: Fn(&str, &str) -> Ordering,
{
    tree: Tree<CompactString>,
    compare: F,
}

impl<F> StringSetBy<F>
where
    F: Fn(&str, &str) -> Ordering,
{
    /// Constructor
    pub fn new(compare: F) -> StringSetBy<F> {
        StringSetBy {
            tree: Tree::new(),
            compare,
        }
    }

    /// Get the number of keys in the `StringSetBy`
    #[inline]
    pub fn count(&self) -> usize {
        self.tree.count()
    }

    /// Check if there are any keys in the `StringSetBy`
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Get the number of slots backing the `StringSetBy`, including holes
    #[inline]
    pub fn allocated_count(&self) -> &BigUint {
        self.tree.allocated_count()
    }

    /// Remove all keys from the `StringSetBy`
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Insert a key.
    ///
    /// If an equal key is already in the set then the set is unchanged.
    pub fn insert(&mut self, key: &str) {
        let compare = &self.compare;
        self.tree.insert_by(CompactString::from(key), |a, b| {
            compare(a.as_str(), b.as_str())
        });
    }

    /// Search for a key.
    ///
    /// If the key is not in the tree then `None` is returned.
    pub fn search(&self, key: &str) -> Option<&str> {
        let leaf = self.tree.find_by(key, self.compare_key())?;
        self.tree.get(&leaf).map(CompactString::as_str)
    }

    /// Check if the set holds a key
    pub fn contains(&self, key: &str) -> bool {
        self.tree.find_by(key, self.compare_key()).is_some()
    }

    /// Remove a key.
    ///
    /// If the key does not exist, then this function has no effect and returns `None`.
    pub fn remove(&mut self, key: &str) -> Option<CompactString> {
        let compare = &self.compare;
        self.tree
            .remove_by(key, |a: &str, b: &CompactString| compare(a, b.as_str()))
    }

    /// Get the first key in the set
    pub fn first(&self) -> Option<&str> {
        self.tree.get(&self.tree.first()?).map(CompactString::as_str)
    }

    /// Get the last key in the set
    pub fn last(&self) -> Option<&str> {
        self.tree.get(&self.tree.last()?).map(CompactString::as_str)
    }

    /// Pop the first key from the set
    pub fn pop_first(&mut self) -> Option<CompactString> {
        let leaf = self.tree.first()?;
        self.tree.remove_at(&leaf)
    }

    /// Pop the last key from the set
    pub fn pop_last(&mut self) -> Option<CompactString> {
        let leaf = self.tree.last()?;
        self.tree.remove_at(&leaf)
    }

    /// Collect the keys in the order given by the sorting function
    pub fn in_order(&self) -> Vec<&str> {
        strs(self.tree.in_order())
    }

    /// Collect the keys, each node before its children
    pub fn pre_order(&self) -> Vec<&str> {
        strs(self.tree.pre_order())
    }

    /// Collect the keys, each node after its children
    pub fn post_order(&self) -> Vec<&str> {
        strs(self.tree.post_order())
    }

    /// Collect the keys breadth first
    pub fn level_order(&self) -> Vec<&str> {
        strs(self.tree.level_order())
    }

    /// Iterate over the keys in the `StringSetBy` in sorted order
    pub fn iter(&self) -> StringSetIterator<'_> {
        StringSetIterator {
            iter: self.tree.iter(),
        }
    }

    // Compare a looked-up string against a stored key
    fn compare_key(&self) -> impl Fn(&str, &CompactString) -> Ordering + '_ {
        move |a: &str, b: &CompactString| (self.compare)(a, b.as_str())
    }
}

impl<'a, F> IntoIterator for &'a StringSetBy<F>
where
    F: Fn(&str, &str) -> Ordering,
{
    type Item = &'a str;
    type IntoIter = StringSetIterator<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//-----------------------------------------------------------------------------------------------//

#[inline]
fn compare_str(a: &str, b: &CompactString) -> Ordering {
    a.cmp(b.as_str())
}

fn strs(keys: Vec<&CompactString>) -> Vec<&str> {
    keys.into_iter().map(CompactString::as_str).collect()
}

//-----------------------------------------------------------------------------------------------//

#[test]
// A very simple test of a set
fn test_set_0() {
    use alloc::vec;

    let mut set = Set::new();

    for key in [5, 3, 8, 1, 4, 7, 9] {
        set.insert(key);
    }

    assert_eq!(set.in_order(), vec![&1, &3, &4, &5, &7, &8, &9]);
    assert_eq!(set.search(&4), Some(&4));
    assert_eq!(set.search(&6), None);

    assert_eq!(set.remove(&5), Some(5));
    assert_eq!(set.in_order(), vec![&1, &3, &4, &7, &8, &9]);
    assert_eq!(set.level_order(), vec![&7, &3, &8, &1, &4, &9]);
    assert_eq!(set.search(&5), None);
    assert_eq!(set.allocated_count(), &BigUint::from(7u32));

    set.check();
}

#[test]
// An empty set has nothing to find, remove, or visit
fn test_set_1() {
    use num::Zero;

    let mut set = Set::<i32>::new();

    assert_eq!(set.search(&1), None);
    assert_eq!(set.remove(&1), None);
    assert!(set.in_order().is_empty());
    assert!(set.pre_order().is_empty());
    assert!(set.post_order().is_empty());
    assert!(set.level_order().is_empty());
    assert_eq!(set.first(), None);
    assert_eq!(set.pop_last(), None);
    assert_eq!(set.iter().next(), None);
    assert!(set.allocated_count().is_zero());
}

#[test]
// The four traversal orders
fn test_set_2() {
    use alloc::vec;

    let set: Set<i32> = [5, 3, 8, 1, 4, 7, 9].into_iter().collect();

    assert_eq!(set.pre_order(), vec![&5, &3, &1, &4, &8, &7, &9]);
    assert_eq!(set.post_order(), vec![&1, &4, &3, &7, &9, &8, &5]);
    assert_eq!(set.level_order(), vec![&5, &3, &8, &1, &4, &7, &9]);
    assert_eq!(set.first(), Some(&1));
    assert_eq!(set.last(), Some(&9));
}

#[test]
// Duplicates are ignored
fn test_set_3() {
    use alloc::vec::Vec;

    let mut set = Set::new();
    for key in [5, 3, 8] {
        set.insert(key);
    }

    let before: Vec<i32> = set.iter().cloned().collect();
    set.insert(3);
    let after: Vec<i32> = set.iter().cloned().collect();

    assert_eq!(before, after);
    assert_eq!(set.count(), 3);
    assert_eq!(set.allocated_count(), &BigUint::from(3u32));
}

#[test]
// Sorted insertion builds a long chain down the right-hand side
fn test_set_4() {
    use crate::util::full_len;
    use alloc::vec::Vec;

    const COUNT: u64 = 100;

    let mut set = Set::new();
    for key in 0..COUNT {
        set.insert(key);
    }

    assert_eq!(set.count(), COUNT as usize);
    assert_eq!(set.allocated_count(), &full_len(COUNT as u32));
    assert_eq!(set.pre_order(), set.in_order());
    assert_eq!(set.search(&(COUNT - 1)), Some(&(COUNT - 1)));
    set.check();

    // Remove the odd keys from deep in the chain, then pop the rest from the root
    for key in (1..COUNT).step_by(2) {
        assert_eq!(set.remove(&key), Some(key));
    }
    set.check();

    for key in (0..COUNT).step_by(2) {
        assert_eq!(set.pop_first(), Some(key));
    }

    assert!(set.is_empty());
    assert_eq!(set.allocated_count(), &full_len(COUNT as u32));

    let v: Vec<u64> = set.iter().cloned().collect();
    assert!(v.is_empty());
    set.check();
}

#[test]
// A set of strings
fn test_set_5() {
    use alloc::vec;
    use alloc::vec::Vec;

    let mut set = StringSet::new();

    set.insert("Five");
    set.insert("One");
    set.insert("Nine");
    set.insert("One");

    assert_eq!(set.count(), 3);
    assert_eq!(set.search("Five"), Some("Five"));
    assert_eq!(set.search("Seven"), None);
    assert_eq!(set.in_order(), vec!["Five", "Nine", "One"]);
    assert_eq!(set.level_order(), vec!["Five", "One", "Nine"]);

    let iter = set.iter();
    assert_eq!(iter.len(), 3);
    let v: Vec<&str> = iter.collect();
    assert_eq!(v, set.in_order());

    assert_eq!(set.remove("Five").as_deref(), Some("Five"));
    assert_eq!(set.remove("Five"), None);
    assert_eq!(set.first(), Some("Nine"));
    assert_eq!(set.last(), Some("One"));
}

#[test]
// Popping and iterating over sets of strings
fn test_set_6() {
    use alloc::vec::Vec;

    let mut set: StringSet = ["pear", "apple", "fig", "quince"].into_iter().collect();

    let v: Vec<&str> = (&set).into_iter().collect();
    assert_eq!(v, ["apple", "fig", "pear", "quince"]);
    assert_eq!(set.pop_first().as_deref(), Some("apple"));
    assert_eq!(set.pop_last().as_deref(), Some("quince"));
    assert_eq!(set.in_order(), ["fig", "pear"]);

    let mut set = StringSetBy::new(|a: &str, b: &str| b.cmp(a));
    for key in ["pear", "apple", "fig", "quince"] {
        set.insert(key);
    }

    let mut v = Vec::new();
    for key in &set {
        v.push(key);
    }
    assert_eq!(v, ["quince", "pear", "fig", "apple"]);
    assert_eq!(set.pop_first().as_deref(), Some("quince"));
    assert_eq!(set.pop_last().as_deref(), Some("apple"));
    assert_eq!(set.iter().len(), 2);
}

#[test]
// A custom sorting function
fn test_set_7() {
    use alloc::vec;

    let mut set = SetBy::new(|a: &i32, b: &i32| b.cmp(a));
    for key in [5, 3, 8, 1, 4, 7, 9] {
        set.insert(key);
    }

    assert_eq!(set.in_order(), vec![&9, &8, &7, &5, &4, &3, &1]);
    assert_eq!(set.first(), Some(&9));
    assert_eq!(set.remove(&8), Some(8));
    assert_eq!(set.pop_last(), Some(1));
    assert_eq!(set.in_order(), vec![&9, &7, &5, &4, &3]);

    set.check();
}

#[test]
// A custom sorting function that treats keys as equal
fn test_set_8() {
    use alloc::vec;

    let mut set = StringSetBy::new(|a: &str, b: &str| {
        a.to_ascii_lowercase().cmp(&b.to_ascii_lowercase())
    });

    set.insert("beta");
    set.insert("Alpha");
    set.insert("ALPHA");
    set.insert("Gamma");

    assert_eq!(set.count(), 3);
    assert_eq!(set.search("alpha"), Some("Alpha"));
    assert_eq!(set.in_order(), vec!["Alpha", "beta", "Gamma"]);
    assert_eq!(set.remove("BETA").as_deref(), Some("beta"));
    assert!(!set.contains("beta"));
}

#[test]
// A stress test with inserting and searching
fn test_set_9() {
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;
    use rand::prelude::*;

    const COUNT: usize = 1000;

    let mut rng = SmallRng::seed_from_u64(1234567890);

    let mut set = Set::new();
    let mut model = BTreeSet::new();
    for _ in 0..COUNT {
        let key = rng.random_range(0..10000u32);
        set.insert(key);
        model.insert(key);
    }

    assert_eq!(set.count(), model.len());

    for key in &model {
        assert_eq!(set.search(key), Some(key));
    }

    let v: Vec<&u32> = set.iter().collect();
    let w: Vec<&u32> = model.iter().collect();
    assert_eq!(v, w);

    set.check();
}

#[test]
// A stress test with inserting and removing
fn test_set_10() {
    use alloc::collections::BTreeSet;
    use alloc::vec::Vec;
    use rand::prelude::*;

    const COUNT: usize = 1000;

    let mut rng = SmallRng::seed_from_u64(5678901234);

    let mut set = Set::new();
    let mut model = BTreeSet::new();
    for _ in 0..COUNT {
        let key = rng.random_range(0..10000u32);
        set.insert(key);
        model.insert(key);
    }

    let allocated_count = set.allocated_count().clone();

    for _ in 0..COUNT {
        let key = rng.random_range(0..10000u32);
        assert_eq!(set.remove(&key), model.take(&key));
        assert_eq!(set.allocated_count(), &allocated_count);
    }

    set.check();

    let v: Vec<&u32> = set.in_order();
    let w: Vec<&u32> = model.iter().collect();
    assert_eq!(v, w);
    assert_eq!(set.count(), model.len());
}
