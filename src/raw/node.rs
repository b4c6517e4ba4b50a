use alloc::boxed::Box;

/// An owned (possibly absent) subtree.
///
/// Children are exclusively owned, so the tree is acyclic by construction
/// and `Send`/`Sync` fall out of the representation for free.
pub(crate) type Link<K, V> = Option<Box<Node<K, V>>>;

/// A single tree node.
///
/// The key is immutable once the node exists; the value slot is replaced in
/// place when its key is re-inserted. `count` caches the size of the subtree
/// rooted at this node (including itself) and must be recomputed bottom-up
/// after any structural change on the path back to the root.
#[derive(Clone)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Link<K, V>,
    pub(crate) right: Link<K, V>,
    count: usize,
}

/// Returns the cached size of a subtree, with an absent subtree contributing 0.
#[inline]
pub(crate) fn len<K, V>(link: &Link<K, V>) -> usize {
    link.as_deref().map_or(0, Node::count)
}

impl<K, V> Node<K, V> {
    /// Creates a new leaf holding `key` and `value`.
    pub(crate) fn new(key: K, value: V) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            count: 1,
        }
    }

    /// Returns the size of the subtree rooted at this node.
    #[inline]
    pub(crate) fn count(&self) -> usize {
        self.count
    }

    /// Recomputes the cached subtree size from the children.
    ///
    /// Every mutating traversal calls this on the way back up, keeping the
    /// size invariant local to each frame instead of requiring a second pass.
    #[inline]
    pub(crate) fn update_count(&mut self) {
        self.count = 1 + len(&self.left) + len(&self.right);
    }
}
