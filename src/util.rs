//! Utility types to support binary trees laid out by position in a single array

#![warn(missing_docs)]

extern crate alloc;
use alloc::{
    collections::{BTreeMap, VecDeque},
    vec::Vec,
};

use core::{cmp::Ordering, fmt::Display, iter::FusedIterator};
use num::{BigUint, Zero};

//-----------------------------------------------------------------------------------------------//

/// Get the position of the left child of the node at position `x`
#[inline]
pub fn left(x: usize) -> usize {
    2 * x + 1
}

/// Get the position of the right child of the node at position `x`
#[inline]
pub fn right(x: usize) -> usize {
    2 * x + 2
}

/// Get the position of the parent of the node at position `x`, or `None` for the root
#[inline]
pub fn parent(x: usize) -> Option<usize> {
    if x == 0 {
        None
    } else {
        Some((x - 1) / 2)
    }
}

//-----------------------------------------------------------------------------------------------//

/// A position in a `Tree`
///
/// This follows the same arithmetic as `left`, `right` and `parent`, but is not limited to a
/// `usize`. A node at depth `d` sits at a position of at least `2^d - 1`, so a tree that has
/// degenerated into a chain of a hundred keys already needs positions beyond `u64`.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(BigUint);

impl Position {
    /// The position of the root
    pub fn root() -> Position {
        Position(BigUint::zero())
    }

    /// Check if this is the position of the root
    pub fn is_root(&self) -> bool {
        self.0.is_zero()
    }

    /// Get the position of the left child
    pub fn left(&self) -> Position {
        Position(self.0.clone() * 2u32 + 1u32)
    }

    /// Get the position of the right child
    pub fn right(&self) -> Position {
        Position(self.0.clone() * 2u32 + 2u32)
    }

    /// Get the position of the parent, or `None` for the root
    pub fn parent(&self) -> Option<Position> {
        if self.is_root() {
            None
        } else {
            Some(Position((self.0.clone() - 1u32) / 2u32))
        }
    }

    /// Get the position as an integer
    pub fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}

impl From<usize> for Position {
    fn from(x: usize) -> Self {
        Position(BigUint::from(x))
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

//-----------------------------------------------------------------------------------------------//

/// A binary search tree of values addressed by position
///
/// The root lives at position `0` and the children of position `i` live at `2i + 1` and `2i + 2`.
/// Logically the tree is an array of slots, each either occupied or a hole, and positions past
/// the end of the array are treated exactly like holes. Only the occupied slots are stored, so
/// the memory used follows the number of values rather than the length of the array. The tree
/// never stores a comparator; the methods that need one take it as an argument, which lets the
/// calling collection decide how keys are ordered.
///
/// No rebalancing is performed, so the shape of the tree depends on the order of insertion, and
/// keys inserted in sorted order produce a chain as deep as the number of keys.
#[derive(Clone)]
pub struct Tree<K> {
    slot: BTreeMap<Position, K>,
    len: BigUint,
}

impl<K> Tree<K> {
    /// Construct an empty tree
    pub fn new() -> Tree<K> {
        Tree {
            slot: BTreeMap::new(),
            len: BigUint::zero(),
        }
    }

    /// Get the number of values in the tree
    #[inline]
    pub fn count(&self) -> usize {
        self.slot.len()
    }

    /// Check if there are any values in the tree
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slot.is_empty()
    }

    /// Get the length of the array of slots, occupied or not. This is one more than the highest
    /// position ever filled. It only grows as values are inserted and removed, and is reset by
    /// `clear`.
    #[inline]
    pub fn allocated_count(&self) -> &BigUint {
        &self.len
    }

    /// Remove all values from the tree
    pub fn clear(&mut self) {
        self.slot.clear();
        self.len = BigUint::zero();
    }

    /// Get the value at a position
    ///
    /// Returns `None` if the position is a hole or lies past the end of the array.
    #[inline]
    pub fn get(&self, x: &Position) -> Option<&K> {
        self.slot.get(x)
    }

    /// Find the position of a value equal to `key`
    ///
    /// The comparator receives the key being looked up first and the stored value second. If the
    /// tree is not ordered consistently with `compare`, then the results are undefined.
    pub fn find_by<Q, F>(&self, key: &Q, compare: F) -> Option<Position>
    where
        Q: ?Sized,
        F: Fn(&Q, &K) -> Ordering,
    {
        match locate(&self.slot, key, compare) {
            Location::Found(x) => Some(x),
            Location::Vacant(_) => None,
        }
    }

    /// Insert a value
    ///
    /// Descends from the root until the next position is a hole and places `key` there, growing
    /// the array as needed. If an equal value is already in the tree, `key` is dropped, the tree
    /// is unchanged, and `None` is returned. Otherwise the position of the new value is returned.
    pub fn insert_by<F>(&mut self, key: K, compare: F) -> Option<Position>
    where
        F: Fn(&K, &K) -> Ordering,
    {
        match locate(&self.slot, &key, compare) {
            Location::Found(_) => None,
            Location::Vacant(x) => {
                if x.0 >= self.len {
                    self.len = x.0.clone() + 1u32;
                }
                self.slot.insert(x.clone(), key);
                Some(x)
            }
        }
    }

    /// Remove the value at a position
    ///
    /// The hole left behind is filled from below by the in-order successor, or the in-order
    /// predecessor if there is no right subtree, and this repeats down the tree until a leaf is
    /// vacated. The array is never shortened. Returns `None` if the position was already a hole.
    pub fn remove_at(&mut self, x: &Position) -> Option<K> {
        let key = self.slot.remove(x)?;
        prune(&mut self.slot, x.clone());
        Some(key)
    }

    /// Remove a value equal to `key`
    ///
    /// If there is no such value, then this function has no effect and returns `None`.
    pub fn remove_by<Q, F>(&mut self, key: &Q, compare: F) -> Option<K>
    where
        Q: ?Sized,
        F: Fn(&Q, &K) -> Ordering,
    {
        let x = self.find_by(key, compare)?;
        self.remove_at(&x)
    }

    /// Get the position of the smallest value in the tree
    #[inline]
    pub fn first(&self) -> Option<Position> {
        let x = Position::root();
        occupied(&self.slot, &x).then(|| first(&self.slot, x))
    }

    /// Get the position of the largest value in the tree
    #[inline]
    pub fn last(&self) -> Option<Position> {
        let x = Position::root();
        occupied(&self.slot, &x).then(|| last(&self.slot, x))
    }

    /// Collect the values in ascending order
    pub fn in_order(&self) -> Vec<&K> {
        self.iter().collect()
    }

    /// Collect the values, visiting each node before its children
    pub fn pre_order(&self) -> Vec<&K> {
        let mut out = Vec::with_capacity(self.count());
        let mut stack = Vec::from([Position::root()]);

        while let Some(x) = stack.pop() {
            let Some(key) = self.slot.get(&x) else {
                continue;
            };
            out.push(key);
            stack.push(x.right());
            stack.push(x.left());
        }

        out
    }

    /// Collect the values, visiting each node after its children
    pub fn post_order(&self) -> Vec<&K> {
        // Node, right, left, then reversed
        let mut out = Vec::with_capacity(self.count());
        let mut stack = Vec::from([Position::root()]);

        while let Some(x) = stack.pop() {
            let Some(key) = self.slot.get(&x) else {
                continue;
            };
            out.push(key);
            stack.push(x.left());
            stack.push(x.right());
        }

        out.reverse();
        out
    }

    /// Collect the values breadth first, one level of the tree at a time
    pub fn level_order(&self) -> Vec<&K> {
        level_order(&self.slot)
            .into_iter()
            .filter_map(|x| self.slot.get(&x))
            .collect()
    }

    /// Iterate over the values in ascending order
    pub fn iter(&self) -> Iter<'_, K> {
        let mut iter = Iter {
            slot: &self.slot,
            stack: Vec::new(),
            count: self.count(),
        };
        iter.descend(Position::root());
        iter
    }

    // Debug tests
    #[cfg(any(test, debug_assertions))]
    #[allow(dead_code)]
    pub(crate) fn check_by<F>(&self, compare: F)
    where
        F: Fn(&K, &K) -> Ordering,
    {
        check_tree(&self.slot, &self.len);
        debug_assert_eq!(check_count(&self.slot), self.count());
        check_order(self, compare);
    }
}

impl<K> Default for Tree<K> {
    fn default() -> Self {
        Tree::new()
    }
}

impl<K: Display> Display for Tree<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[ ")?;
        for x in level_order(&self.slot) {
            if let Some(key) = self.get(&x) {
                write!(f, "{x}:{key} ")?;
            }
        }
        write!(f, "]")?;
        Ok(())
    }
}

impl<'a, K> IntoIterator for &'a Tree<K> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

//-----------------------------------------------------------------------------------------------//

/// Iterator over a `Tree` in ascending order
///
/// Holds the positions on the path to the next value, so no recursion is needed.
pub struct Iter<'a, K> {
    slot: &'a BTreeMap<Position, K>,
    stack: Vec<Position>,
    count: usize,
}

impl<K> Iter<'_, K> {
    // Push `x` and its chain of left children
    fn descend(&mut self, mut x: Position) {
        while occupied(self.slot, &x) {
            let y = x.left();
            self.stack.push(x);
            x = y;
        }
    }
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let x = self.stack.pop()?;
        self.descend(x.right());
        self.count -= 1;

        let slot = self.slot;
        slot.get(&x)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.count, Some(self.count))
    }
}

impl<K> ExactSizeIterator for Iter<'_, K> {}

impl<K> FusedIterator for Iter<'_, K> {}

//-----------------------------------------------------------------------------------------------//

// IMPLEMENTATION NOTE
//
// The functions below work directly on the occupied slots. A hole is simply a position with no
// entry, which covers positions past the end of the array as well, so callers never need to check
// the length first.

enum Location {
    Found(Position),
    Vacant(Position),
}

#[inline]
fn occupied<K>(slot: &BTreeMap<Position, K>, x: &Position) -> bool {
    slot.contains_key(x)
}

// Locate a value in a tree, or if not found identify the hole where it belongs
fn locate<K, Q, F>(slot: &BTreeMap<Position, K>, key: &Q, compare: F) -> Location
where
    Q: ?Sized,
    F: Fn(&Q, &K) -> Ordering,
{
    let mut x = Position::root();

    loop {
        let Some(k) = slot.get(&x) else {
            return Location::Vacant(x);
        };

        match compare(key, k) {
            Ordering::Equal => return Location::Found(x),
            Ordering::Less => x = x.left(),
            Ordering::Greater => x = x.right(),
        }
    }
}

// Refill the hole at `x` from its subtree
//
// The successor (leftmost value of the right subtree) is preferred. If there is no right subtree
// then the predecessor (rightmost value of the left subtree) is used instead. Either way the value
// moved into `x` is adjacent in order to the value that was removed, so the search order still
// holds, and the hole moves to the position it was taken from. That position is always deeper
// than `x`, so the loop ends when it reaches a node without children.
fn prune<K>(slot: &mut BTreeMap<Position, K>, mut x: Position) {
    debug_assert!(!occupied(slot, &x));

    loop {
        let r = x.right();
        let l = x.left();
        let y = if occupied(slot, &r) {
            first(slot, r)
        } else if occupied(slot, &l) {
            last(slot, l)
        } else {
            return;
        };

        if let Some(key) = slot.remove(&y) {
            slot.insert(x, key);
        }
        x = y;
    }
}

// Get the first position (the left-most) of the subtree at `x`
fn first<K>(slot: &BTreeMap<Position, K>, mut x: Position) -> Position {
    debug_assert!(occupied(slot, &x));

    loop {
        let y = x.left();
        if !occupied(slot, &y) {
            return x;
        }
        x = y;
    }
}

// Get the last position (the right-most) of the subtree at `x`
fn last<K>(slot: &BTreeMap<Position, K>, mut x: Position) -> Position {
    debug_assert!(occupied(slot, &x));

    loop {
        let y = x.right();
        if !occupied(slot, &y) {
            return x;
        }
        x = y;
    }
}

// Get the occupied positions breadth first
fn level_order<K>(slot: &BTreeMap<Position, K>) -> Vec<Position> {
    let mut out = Vec::with_capacity(slot.len());
    let mut queue = VecDeque::new();

    let root = Position::root();
    if occupied(slot, &root) {
        queue.push_back(root);
    }

    while let Some(x) = queue.pop_front() {
        for y in [x.left(), x.right()] {
            if occupied(slot, &y) {
                queue.push_back(y);
            }
        }
        out.push(x);
    }

    out
}

//-----------------------------------------------------------------------------------------------//

// DEBUG : Check that every occupied slot hangs off an occupied parent inside the array
#[cfg(any(test, debug_assertions))]
fn check_tree<K>(slot: &BTreeMap<Position, K>, len: &BigUint) {
    for x in slot.keys() {
        debug_assert!(&x.0 < len, "slot {x} past the end");
        if let Some(y) = x.parent() {
            debug_assert!(occupied(slot, &y), "orphaned slot {x}");
        }
    }
}

// DEBUG : Count the reachable slots
#[cfg(any(test, debug_assertions))]
fn check_count<K>(slot: &BTreeMap<Position, K>) -> usize {
    let count = level_order(slot).len();
    debug_assert_eq!(count, slot.len());
    count
}

// DEBUG : Check the key order
#[cfg(any(test, debug_assertions))]
fn check_order<K, F>(tree: &Tree<K>, compare: F)
where
    F: Fn(&K, &K) -> Ordering,
{
    let keys = tree.in_order();

    for pair in keys.windows(2) {
        debug_assert_eq!(compare(pair[0], pair[1]), Ordering::Less);
    }
}

// Get the length of an array ending in a chain of `depth` levels, `2^depth - 1`
#[cfg(test)]
pub(crate) fn full_len(depth: u32) -> BigUint {
    use num::One;

    (BigUint::one() << depth) - 1u32
}

// Get a position from an index
#[cfg(test)]
fn at(x: usize) -> Position {
    Position::from(x)
}

//-----------------------------------------------------------------------------------------------//

#[test]
// Check the position arithmetic
fn test_tree_0() {
    assert_eq!(left(0), 1);
    assert_eq!(right(0), 2);
    assert_eq!(left(2), 5);
    assert_eq!(right(2), 6);
    assert_eq!(parent(0), None);
    assert_eq!(parent(5), Some(2));
    assert_eq!(parent(6), Some(2));

    let x = at(2);
    assert_eq!(x.left(), at(5));
    assert_eq!(x.right(), at(6));
    assert_eq!(x.right().parent(), Some(x));
    assert_eq!(Position::root().parent(), None);
    assert!(at(0).is_root());
}

#[test]
// Positions follow the path from the root
fn test_tree_1() {
    let mut tree = Tree::new();

    assert_eq!(tree.insert_by(5, i32::cmp), Some(at(0)));
    assert_eq!(tree.insert_by(3, i32::cmp), Some(at(1)));
    assert_eq!(tree.insert_by(8, i32::cmp), Some(at(2)));
    assert_eq!(tree.insert_by(7, i32::cmp), Some(at(5)));
    assert_eq!(tree.insert_by(4, i32::cmp), Some(at(4)));
    assert_eq!(tree.insert_by(7, i32::cmp), None);

    assert_eq!(tree.count(), 5);
    assert_eq!(tree.allocated_count(), &BigUint::from(6u32));
    assert_eq!(tree.get(&at(3)), None);
    assert_eq!(tree.get(&at(5)), Some(&7));
    assert_eq!(tree.get(&at(100)), None);
    assert_eq!(tree.find_by(&4, i32::cmp), Some(at(4)));
    assert_eq!(tree.find_by(&6, i32::cmp), None);
    assert_eq!(tree.first(), Some(at(1)));
    assert_eq!(tree.last(), Some(at(2)));

    tree.check_by(i32::cmp);
}

#[test]
// Removal with only a left subtree pulls up the predecessor, not the left child
fn test_tree_2() {
    use alloc::vec;

    let mut tree = Tree::new();
    for key in [5, 2, 4] {
        tree.insert_by(key, i32::cmp);
    }

    assert_eq!(tree.remove_by(&5, i32::cmp), Some(5));
    assert_eq!(tree.get(&at(0)), Some(&4));
    assert_eq!(tree.get(&at(1)), Some(&2));
    assert_eq!(tree.get(&at(4)), None);
    assert_eq!(tree.in_order(), vec![&2, &4]);
    assert_eq!(tree.allocated_count(), &BigUint::from(5u32));

    tree.check_by(i32::cmp);
}

#[test]
// A hole below the end of the array is refilled on the next insert
fn test_tree_3() {
    let mut tree = Tree::new();
    for key in [5, 3, 8, 1] {
        tree.insert_by(key, i32::cmp);
    }

    assert_eq!(tree.remove_at(&at(1)), Some(3));
    assert_eq!(tree.get(&at(1)), Some(&1));
    assert_eq!(tree.remove_at(&at(3)), None);
    assert_eq!(tree.insert_by(2, i32::cmp), Some(at(4)));
    assert_eq!(tree.allocated_count(), &BigUint::from(5u32));

    tree.clear();
    assert!(tree.allocated_count().is_zero());
    assert_eq!(tree.insert_by(9, i32::cmp), Some(at(0)));

    tree.check_by(i32::cmp);
}

#[test]
// Display lists positions breadth first
fn test_tree_4() {
    use alloc::string::ToString;

    let mut tree = Tree::new();
    for key in [5, 3, 8, 4] {
        tree.insert_by(key, i32::cmp);
    }

    assert_eq!(tree.to_string(), "[ 0:5 1:3 2:8 4:4 ]");
    assert_eq!(Tree::<i32>::new().to_string(), "[ ]");
}

#[test]
// The iterator and the depth-first traversals visit keys in their own orders
fn test_tree_5() {
    use alloc::vec;
    use alloc::vec::Vec;

    let mut tree = Tree::new();
    for key in [50, 30, 80, 10, 40, 70, 90, 20, 60] {
        tree.insert_by(key, i32::cmp);
    }

    let iter = tree.iter();
    assert_eq!(iter.len(), 9);
    let v: Vec<&i32> = iter.collect();
    assert_eq!(v, vec![&10, &20, &30, &40, &50, &60, &70, &80, &90]);
    assert_eq!(
        tree.pre_order(),
        vec![&50, &30, &10, &20, &40, &80, &70, &60, &90]
    );
    assert_eq!(
        tree.post_order(),
        vec![&20, &10, &40, &30, &60, &70, &90, &80, &50]
    );
}

#[test]
// A long chain is stored by its occupied slots only
fn test_tree_6() {
    const COUNT: u32 = 100;

    let mut tree = Tree::new();
    for key in 0..COUNT {
        tree.insert_by(key, u32::cmp);
    }

    assert_eq!(tree.count(), COUNT as usize);
    assert_eq!(tree.allocated_count(), &full_len(COUNT));
    assert_eq!(tree.last().map(|x| x.as_biguint().clone()), Some(full_len(COUNT) - 1u32));
    assert_eq!(tree.find_by(&(COUNT - 1), u32::cmp), tree.last());

    tree.check_by(u32::cmp);
}
