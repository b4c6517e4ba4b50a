//! An ordered symbol table backed by a size-augmented binary search tree.
//!
//! This crate provides [`OrderedMap`], a sorted map keyed by any [`Ord`]
//! type, with O(log n)-on-average order-statistic operations:
//!
//! - [`rank`](OrderedMap::rank) - Count the keys strictly less than a probe key
//! - [`get_by_rank`](OrderedMap::get_by_rank) - Get the entry at a given sorted position
//! - [`floor`](OrderedMap::floor) / [`ceiling`](OrderedMap::ceiling) - Find the
//!   closest stored key at or below / above a probe key
//!
//! # Example
//!
//! ```
//! use rank_tree::OrderedMap;
//!
//! let mut scores = OrderedMap::new();
//! scores.insert("Alice", 100);
//! scores.insert("Bob", 85);
//! scores.insert("Carol", 92);
//!
//! // Standard sorted-map operations
//! assert_eq!(scores.get(&"Bob"), Some(&85));
//! assert_eq!(scores.len(), 3);
//! assert_eq!(scores.first_key_value(), Some((&"Alice", &100)));
//!
//! // Order-statistic operations (O(height))
//! assert_eq!(scores.rank(&"Carol"), 2); // Carol is third alphabetically
//! let (name, score) = scores.get_by_rank(1).unwrap();
//! assert_eq!((*name, *score), ("Bob", 85));
//!
//! // Closest-key queries, present or not
//! assert_eq!(scores.floor(&"Betty"), Some(&"Alice"));
//! assert_eq!(scores.ceiling(&"Betty"), Some(&"Bob"));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **O(1) size** - The root node caches the entry count
//! - **O(height) rank operations** - Order-statistic queries via subtree size augmentation
//! - **No rebalancing** - Deliberately unbalanced; see below
//!
//! # Implementation
//!
//! The map is a classic binary search tree of exclusively-owned nodes, where
//! each node additionally caches the size of its subtree. Every mutating
//! operation is a recursive transformation that re-links the affected
//! subtree and recomputes the cached sizes on its way back up, so the size
//! invariant never needs a separate maintenance pass. Deletion of a node
//! with two children promotes its in-order successor (the minimum of the
//! right subtree).
//!
//! There is **no rotation logic**: under adversarial (e.g. sorted) insertion
//! orders the tree degenerates to a linked list and operations become O(n)
//! in both time and stack depth. This is an accepted design trade, not a
//! defect; callers needing guaranteed logarithmic bounds should use a
//! balanced structure.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod raw;

pub mod ordered_map;

pub use ordered_map::OrderedMap;
