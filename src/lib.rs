//! ## Introduction
//!
//! This crate implements a variety of collections based on binary trees that are laid out by
//! position in a single array rather than linked by pointers. The root of a tree lives at
//! position `0` and the children of position `i` live at positions `2i + 1` and `2i + 2`, so a
//! node's place in the array is fixed by its path from the root.
//!
//! ## Benefits
//!
//! The crate complements the standard `std::collection` routines, but provide the following
//! benefits:
//!
//! - Keys stored in the collections do not need to be hashable.
//! - Keys are sorted into an 'ascending' order within the collection by comparing keys pairwise.
//!   Keys that support `Ord` can use `Set` or `Heap`, but if not a custom function can be supplied
//!   to compare keys using `SetBy` or `HeapBy`, etc.
//! - The sets offer in-order, pre-order, post-order and level-order traversals of the tree.
//! - The crate is small and `#![no_std]`.
//!
//! ## Caveats
//!
//! The search trees are not rebalanced. Keys inserted in sorted order produce a chain as deep as
//! the number of keys, so lookups degrade to a linear walk. Each level of the tree doubles the
//! positions available, so positions are arbitrary precision integers and only the occupied slots
//! are stored. Removing keys leaves holes in the array rather than shrinking it. These sets suit
//! keys that arrive in a roughly random order.
//!
//! ## Contents
//!
//! <center>
//!
//! | Type          | Stores       | Sorts By  | Structure          |
//! |:--------------|:-------------|:----------|--------------------|
//! | `Set`         | Key          | Ord       | Search tree        |
//! | `StringSet`   | String       | Ord       | Search tree        |
//! | `SetBy`       | Key          | Function  | Search tree        |
//! | `StringSetBy` | String       | Function  | Search tree        |
//! | `Heap`        | Key          | Ord       | Binary heap        |
//! | `HeapBy`      | Key          | Function  | Binary heap        |
//!
//! </center>
//!
//! The crate exposes an additional type `util::Tree` that provides the foundation of the sets,
//! together with the position arithmetic shared by all the types. It is provided to support
//! development of additional collection types.

#![no_std]
#![warn(missing_docs)]

mod heap;
mod set;
pub mod util;

pub use heap::*;
pub use set::*;
