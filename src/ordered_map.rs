use core::borrow::Borrow;
use core::fmt;
use core::iter::FusedIterator;

use smallvec::SmallVec;

use crate::raw::{Node, RawTree};

mod order_statistic;

/// An ordered map based on an unbalanced, size-augmented [binary search tree].
///
/// Given a key type with a [total order], an ordered map stores its entries
/// in key order; insertion order is irrelevant. Keys must implement [`Ord`].
/// Each tree node caches the size of its own subtree, which makes
/// [`len`](OrderedMap::len) O(1) and the order-statistic queries
/// ([`rank`](OrderedMap::rank), [`get_by_rank`](OrderedMap::get_by_rank),
/// [`floor`](OrderedMap::floor), [`ceiling`](OrderedMap::ceiling))
/// O(height) without a separate index.
///
/// The tree performs **no rebalancing**. Operations are O(log n) on random
/// insertion orders but degrade to O(n) when keys arrive sorted, in which
/// case the tree degenerates to a linked list. That trade is accepted by
/// design: the structure stays simple, deletions never rotate, and callers
/// that control their insertion order get the logarithmic behavior. Callers
/// that cannot should reach for a balanced structure instead.
///
/// Mutating operations recurse along the search path, so they also use stack
/// space proportional to the tree height.
///
/// It is a logic error for a key to be modified in such a way that the key's
/// ordering relative to any other key, as determined by the [`Ord`] trait,
/// changes while it is in the map. This is normally only possible through
/// [`Cell`], [`RefCell`], global state, I/O, or unsafe code.
///
/// # Examples
///
/// ```
/// use rank_tree::OrderedMap;
///
/// let mut movie_reviews = OrderedMap::new();
///
/// // review some movies.
/// movie_reviews.insert("Office Space",       "Deals with real issues in the workplace.");
/// movie_reviews.insert("Pulp Fiction",       "Masterpiece.");
/// movie_reviews.insert("The Godfather",      "Very enjoyable.");
/// movie_reviews.insert("The Blues Brothers", "Eye lyked it a lot.");
///
/// // check for a specific one.
/// if !movie_reviews.contains_key("Les Miserables") {
///     println!("We've got {} reviews, but Les Miserables ain't one.",
///              movie_reviews.len());
/// }
///
/// // oops, this review has a lot of spelling mistakes, let's delete it.
/// movie_reviews.remove("The Blues Brothers");
///
/// // how many reviewed titles sort before "Pulp Fiction"?
/// assert_eq!(movie_reviews.rank("Pulp Fiction"), 1);
///
/// // iterate over everything in key order.
/// for (movie, review) in &movie_reviews {
///     println!("{movie}: \"{review}\"");
/// }
/// ```
///
/// [binary search tree]: https://en.wikipedia.org/wiki/Binary_search_tree
/// [total order]: https://en.wikipedia.org/wiki/Total_order
/// [`Cell`]: core::cell::Cell
/// [`RefCell`]: core::cell::RefCell
#[derive(Clone)]
pub struct OrderedMap<K, V> {
    raw: RawTree<K, V>,
}

impl<K, V> OrderedMap<K, V> {
    /// Makes a new, empty `OrderedMap`.
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Complexity
    ///
    /// O(1)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    ///
    /// // entries can now be inserted into the empty map
    /// map.insert(1, "a");
    /// ```
    #[must_use]
    pub const fn new() -> OrderedMap<K, V> {
        OrderedMap { raw: RawTree::new() }
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1) via the root's cached subtree count.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert_eq!(a.len(), 0);
    /// a.insert(1, "a");
    /// assert_eq!(a.len(), 1);
    /// ```
    #[must_use]
    pub fn len(&self) -> usize {
        self.raw.len()
    }

    /// Returns `true` if the map contains no entries.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// assert!(a.is_empty());
    /// a.insert(1, "a");
    /// assert!(!a.is_empty());
    /// ```
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.raw.is_empty()
    }

    /// Clears the map, removing all entries.
    ///
    /// The root is released as a unit; no per-node traversal happens here
    /// beyond what dropping the owned subtree entails.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut a = OrderedMap::new();
    /// a.insert(1, "a");
    /// a.clear();
    /// assert!(a.is_empty());
    /// ```
    pub fn clear(&mut self) {
        self.raw.clear();
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The key may be any borrowed form of the map's key type, but the
    /// ordering on the borrowed form *must* match the ordering on the key
    /// type.
    ///
    /// # Complexity
    ///
    /// O(height) — an iterative descent with no mutation.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.get(&1), Some(&"a"));
    /// assert_eq!(map.get(&2), None);
    /// ```
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get(key)
    }

    /// Returns a mutable reference to the value corresponding to the key.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// if let Some(x) = map.get_mut(&1) {
    ///     *x = "b";
    /// }
    /// assert_eq!(map.get(&1), Some(&"b"));
    /// ```
    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.get_mut(key)
    }

    /// Returns `true` if the map contains a value for the specified key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.contains_key(&1), true);
    /// assert_eq!(map.contains_key(&2), false);
    /// ```
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.get(key).is_some()
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map did not have this key present, a new node is created at
    /// the absent slot the search reached and `None` is returned.
    ///
    /// If the map did have this key present, the value is updated in place,
    /// the structure is left untouched, and the old value is returned. The
    /// key is not updated; this matters for types that can be `==` without
    /// being identical.
    ///
    /// Every node on the traversed path has its cached subtree count
    /// recomputed before this returns.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.insert(37, "a"), None);
    /// assert_eq!(map.is_empty(), false);
    ///
    /// map.insert(37, "b");
    /// assert_eq!(map.insert(37, "c"), Some("b"));
    /// assert_eq!(map.get(&37), Some(&"c"));
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        self.raw.insert(key, value)
    }

    /// Removes a key from the map, returning the value at the key if the key
    /// was previously in the map. Removing an absent key is a no-op.
    ///
    /// A node with two children is replaced by its in-order successor: the
    /// minimum of the right subtree is detached and spliced into the vacated
    /// position, taking over both children. No rebalancing is performed.
    ///
    /// # Complexity
    ///
    /// O(height)
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove(&1), Some("a"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key).map(|(_, value)| value)
    }

    /// Removes a key from the map, returning the stored key and value if the
    /// key was previously in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(1, "a");
    /// assert_eq!(map.remove_entry(&1), Some((1, "a")));
    /// assert_eq!(map.remove_entry(&1), None);
    /// ```
    pub fn remove_entry<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        self.raw.remove(key)
    }

    /// Removes and returns the entry with the minimum key, or `None` if the
    /// map is empty.
    ///
    /// # Examples
    ///
    /// Draining entries in ascending key order:
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    /// assert_eq!(map.pop_first(), Some((1, "a")));
    /// assert_eq!(map.pop_first(), Some((2, "b")));
    /// assert_eq!(map.pop_first(), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height)
    pub fn pop_first(&mut self) -> Option<(K, V)> {
        self.raw.pop_first()
    }

    /// Returns the first key-value pair in the map.
    /// The key in this pair is the minimum key in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.first_key_value(), None);
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.first_key_value(), Some((&1, &"b")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) — walks the left spine.
    #[must_use]
    pub fn first_key_value(&self) -> Option<(&K, &V)> {
        self.raw.first_key_value()
    }

    /// Returns the last key-value pair in the map.
    /// The key in this pair is the maximum key in the map.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// assert_eq!(map.last_key_value(), None);
    /// map.insert(1, "b");
    /// map.insert(2, "a");
    /// assert_eq!(map.last_key_value(), Some((&2, &"a")));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) — walks the right spine.
    #[must_use]
    pub fn last_key_value(&self) -> Option<(&K, &V)> {
        self.raw.last_key_value()
    }

    /// Gets an iterator over the entries of the map, sorted by key.
    ///
    /// # Examples
    ///
    /// ```
    /// use rank_tree::OrderedMap;
    ///
    /// let mut map = OrderedMap::new();
    /// map.insert(3, "c");
    /// map.insert(2, "b");
    /// map.insert(1, "a");
    ///
    /// let (first_key, first_value) = map.iter().next().unwrap();
    /// assert_eq!((*first_key, *first_value), (1, "a"));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(height) to create; the full traversal is O(n) overall.
    pub fn iter(&self) -> Iter<'_, K, V> {
        let mut iter = Iter {
            stack: SmallVec::new(),
            remaining: self.len(),
        };
        iter.push_left_spine(self.raw.root.as_deref());
        iter
    }
}

impl<K, V> Default for OrderedMap<K, V> {
    /// Creates an empty `OrderedMap`.
    fn default() -> Self {
        Self::new()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for OrderedMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

impl<K: PartialEq, V: PartialEq> PartialEq for OrderedMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for OrderedMap<K, V> {}

impl<'a, K, V> IntoIterator for &'a OrderedMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Iter<'a, K, V> {
        self.iter()
    }
}

/// An iterator over the entries of an `OrderedMap`, sorted by key.
///
/// This `struct` is created by the [`iter`] method on [`OrderedMap`]. See its
/// documentation for more.
///
/// The traversal keeps the unvisited left spine on an explicit stack, so the
/// iterator uses memory proportional to the tree height.
///
/// [`iter`]: OrderedMap::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct Iter<'a, K, V> {
    stack: SmallVec<[&'a Node<K, V>; 16]>,
    remaining: usize,
}

impl<'a, K, V> Iter<'a, K, V> {
    fn push_left_spine(&mut self, mut subtree: Option<&'a Node<K, V>>) {
        while let Some(node) = subtree {
            self.stack.push(node);
            subtree = node.left.as_deref();
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<(&'a K, &'a V)> {
        let node = self.stack.pop()?;
        self.push_left_spine(node.right.as_deref());
        self.remaining -= 1;
        Some((&node.key, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, V> FusedIterator for Iter<'_, K, V> {}
