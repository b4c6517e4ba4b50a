use core::borrow::Borrow;
use core::cmp::Ordering;

use alloc::boxed::Box;

use super::node::{Link, Node, len};

/// The core unbalanced BST backing `OrderedMap`.
///
/// The map handle is a thin wrapper over the optional root. Every mutating
/// operation works on a `&mut Link` and re-links the (possibly new) subtree
/// root in place, so the size invariant is maintained frame by frame on the
/// way back up rather than in a second pass.
#[derive(Clone)]
pub(crate) struct RawTree<K, V> {
    pub(crate) root: Link<K, V>,
}

impl<K, V> RawTree<K, V> {
    /// Creates a new, empty tree.
    pub(crate) const fn new() -> Self {
        Self { root: None }
    }

    /// Returns the number of entries, read from the root's cached count.
    pub(crate) fn len(&self) -> usize {
        len(&self.root)
    }

    /// Returns true if the tree contains no entries.
    pub(crate) fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Releases the root, dropping the whole tree as a unit.
    pub(crate) fn clear(&mut self) {
        self.root = None;
    }

    /// Looks up a key by iterative descent.
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root.as_deref();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return Some(&node.value),
            };
        }
        None
    }

    /// Looks up a key by iterative descent, returning the value mutably.
    pub(crate) fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        let mut current = self.root.as_deref_mut();
        while let Some(node) = current {
            current = match key.cmp(node.key.borrow()) {
                Ordering::Less => node.left.as_deref_mut(),
                Ordering::Greater => node.right.as_deref_mut(),
                Ordering::Equal => return Some(&mut node.value),
            };
        }
        None
    }

    /// Inserts or overwrites, returning the replaced value if the key was
    /// already present.
    pub(crate) fn insert(&mut self, key: K, value: V) -> Option<V>
    where
        K: Ord,
    {
        insert_rec(&mut self.root, key, value)
    }

    /// Removes the entry for `key`, if any.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<(K, V)>
    where
        K: Borrow<Q> + Ord,
        Q: ?Sized + Ord,
    {
        remove_rec(&mut self.root, key)
    }

    /// Removes and returns the entry with the minimum key.
    pub(crate) fn pop_first(&mut self) -> Option<(K, V)> {
        let root = self.root.take()?;
        let (min, rest) = detach_min(root);
        self.root = rest;
        let node = *min;
        Some((node.key, node.value))
    }

    /// Returns the entry with the minimum key (leftmost node).
    pub(crate) fn first_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(left) = node.left.as_deref() {
            node = left;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the entry with the maximum key (rightmost node).
    pub(crate) fn last_key_value(&self) -> Option<(&K, &V)> {
        let mut node = self.root.as_deref()?;
        while let Some(right) = node.right.as_deref() {
            node = right;
        }
        Some((&node.key, &node.value))
    }

    /// Returns the number of keys strictly less than `key`.
    ///
    /// Total over the whole key domain: a probe below the minimum yields 0,
    /// one above the maximum yields `len()`.
    pub(crate) fn rank<Q>(&self, key: &Q) -> usize
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        rank_rec(&self.root, key)
    }

    /// Returns the largest stored key `<= key`, if any.
    pub(crate) fn floor<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        floor_rec(&self.root, key).map(|node| &node.key)
    }

    /// Returns the smallest stored key `>= key`, if any.
    pub(crate) fn ceiling<Q>(&self, key: &Q) -> Option<&K>
    where
        K: Borrow<Q>,
        Q: ?Sized + Ord,
    {
        ceiling_rec(&self.root, key).map(|node| &node.key)
    }

    /// Returns the entry at position `rank` in key order, descending by the
    /// cached left-subtree sizes. `None` if `rank >= len()`.
    pub(crate) fn get_by_rank(&self, rank: usize) -> Option<(&K, &V)> {
        if rank >= self.len() {
            return None;
        }
        let mut node = self.root.as_deref()?;
        let mut rank = rank;
        loop {
            let left = len(&node.left);
            match rank.cmp(&left) {
                Ordering::Less => node = node.left.as_deref()?,
                Ordering::Equal => return Some((&node.key, &node.value)),
                Ordering::Greater => {
                    rank -= left + 1;
                    node = node.right.as_deref()?;
                }
            }
        }
    }
}

fn insert_rec<K, V>(link: &mut Link<K, V>, key: K, value: V) -> Option<V>
where
    K: Ord,
{
    let Some(node) = link.as_deref_mut() else {
        *link = Some(Box::new(Node::new(key, value)));
        return None;
    };
    let replaced = match key.cmp(&node.key) {
        Ordering::Less => insert_rec(&mut node.left, key, value),
        Ordering::Greater => insert_rec(&mut node.right, key, value),
        // Equal keys never change structure; only the value slot is swapped.
        Ordering::Equal => Some(core::mem::replace(&mut node.value, value)),
    };
    node.update_count();
    replaced
}

fn remove_rec<K, V, Q>(link: &mut Link<K, V>, key: &Q) -> Option<(K, V)>
where
    K: Borrow<Q> + Ord,
    Q: ?Sized + Ord,
{
    let node = link.as_deref_mut()?;
    match key.cmp(node.key.borrow()) {
        Ordering::Less => {
            let removed = remove_rec(&mut node.left, key)?;
            node.update_count();
            Some(removed)
        }
        Ordering::Greater => {
            let removed = remove_rec(&mut node.right, key)?;
            node.update_count();
            Some(removed)
        }
        Ordering::Equal => {
            let boxed = link.take()?;
            let node = *boxed;
            *link = join(node.left, node.right);
            Some((node.key, node.value))
        }
    }
}

/// Joins the two orphaned subtrees of a removed node.
///
/// With both children present, the minimum node of the right subtree is
/// detached and promoted into the vacated position. That node's key is
/// greater than every key on the left and smaller than the rest of the
/// right subtree, so BST order is preserved without any rotations.
fn join<K, V>(left: Link<K, V>, right: Link<K, V>) -> Link<K, V> {
    match (left, right) {
        (None, subtree) | (subtree, None) => subtree,
        (left, Some(right)) => {
            let (mut successor, rest) = detach_min(right);
            successor.left = left;
            successor.right = rest;
            successor.update_count();
            Some(successor)
        }
    }
}

/// Detaches the leftmost node of the subtree rooted at `node`, returning it
/// together with the remaining subtree.
fn detach_min<K, V>(mut node: Box<Node<K, V>>) -> (Box<Node<K, V>>, Link<K, V>) {
    match node.left.take() {
        None => {
            let rest = node.right.take();
            node.update_count();
            (node, rest)
        }
        Some(left) => {
            let (min, remaining) = detach_min(left);
            node.left = remaining;
            node.update_count();
            (min, Some(node))
        }
    }
}

fn rank_rec<K, V, Q>(link: &Link<K, V>, key: &Q) -> usize
where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
{
    let Some(node) = link.as_deref() else {
        return 0;
    };
    match key.cmp(node.key.borrow()) {
        Ordering::Less => rank_rec(&node.left, key),
        Ordering::Greater => 1 + len(&node.left) + rank_rec(&node.right, key),
        Ordering::Equal => len(&node.left),
    }
}

fn floor_rec<'a, K, V, Q>(link: &'a Link<K, V>, key: &Q) -> Option<&'a Node<K, V>>
where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
{
    let node = link.as_deref()?;
    match key.cmp(node.key.borrow()) {
        Ordering::Equal => Some(node),
        // Nothing in this node or its right subtree can qualify.
        Ordering::Less => floor_rec(&node.left, key),
        Ordering::Greater => floor_rec(&node.right, key).or(Some(node)),
    }
}

fn ceiling_rec<'a, K, V, Q>(link: &'a Link<K, V>, key: &Q) -> Option<&'a Node<K, V>>
where
    K: Borrow<Q>,
    Q: ?Sized + Ord,
{
    let node = link.as_deref()?;
    match key.cmp(node.key.borrow()) {
        Ordering::Equal => Some(node),
        Ordering::Greater => ceiling_rec(&node.right, key),
        Ordering::Less => ceiling_rec(&node.left, key).or(Some(node)),
    }
}
