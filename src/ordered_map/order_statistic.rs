use core::borrow::Borrow;

use super::OrderedMap;

impl<K: Ord, V> OrderedMap<K, V> {
    /// Returns the number of keys strictly less than `key`.
    ///
    /// The probe key does not have to be present: a key below the minimum
    /// has rank 0 and a key above the maximum has rank [`len`]. The result
    /// is always in `[0, len]`. For a present key, `rank` is its zero-based
    /// position in sorted order.
    ///
    /// The descent adds `1 + size(left subtree)` every time it turns right,
    /// reading the cached subtree counts instead of walking the entries.
    ///
    /// [`len`]: OrderedMap::len
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
    /// map.insert(10, "a");
    /// map.insert(20, "b");
    ///
    /// assert_eq!(map.rank(&10), 0);
    /// assert_eq!(map.rank(&15), 1); // absent keys still have a rank
    /// assert_eq!(map.rank(&99), 2);
    /// ```
    #[must_use]
    pub fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.rank(key)
    }

    /// Returns the key-value pair at position `rank` in sorted order, or
    /// `None` if `rank` is out of bounds.
    ///
    /// This is the selection inverse of [`rank`](OrderedMap::rank): for any
    /// present key `k`, `get_by_rank(rank(&k))` yields `k` again.
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
    /// map.insert("a", 10);
    /// map.insert("c", 30);
    /// map.insert("b", 20);
    ///
    /// let (key, value) = map.get_by_rank(1).unwrap();
    /// assert_eq!((key, value), (&"b", &20));
    /// assert!(map.get_by_rank(3).is_none());
    /// ```
    #[must_use]
    pub fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        self.raw.get_by_rank(rank)
    }

    /// Returns the largest stored key less than or equal to `key`, or `None`
    /// if `key` is smaller than every stored key.
    ///
    /// For a present key, `floor` returns that key itself.
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
    /// map.insert(10, "a");
    /// map.insert(20, "b");
    ///
    /// assert_eq!(map.floor(&15), Some(&10));
    /// assert_eq!(map.floor(&20), Some(&20));
    /// assert_eq!(map.floor(&5), None);
    /// ```
    #[must_use]
    pub fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.floor(key)
    }

    /// Returns the smallest stored key greater than or equal to `key`, or
    /// `None` if `key` is greater than every stored key.
    ///
    /// For a present key, `ceiling` returns that key itself.
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
    /// map.insert(10, "a");
    /// map.insert(20, "b");
    ///
    /// assert_eq!(map.ceiling(&15), Some(&20));
    /// assert_eq!(map.ceiling(&10), Some(&10));
    /// assert_eq!(map.ceiling(&25), None);
    /// ```
    #[must_use]
    pub fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        self.raw.ceiling(key)
    }
}
