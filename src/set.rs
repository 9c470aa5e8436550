use crate::error::Error;
use crate::iter::{IntoIter, Traversal, TraversalOrder};
use crate::tree::Position;
use std::fmt;

/// An ordered set implemented using an AVL tree.
///
/// An AVL tree is a self-balancing binary search tree that maintains the invariant that
/// the heights of the two child subtrees of any node differ by at most one. Lookup,
/// insertion, and deletion all take O(log n) time in both the average and worst cases.
///
/// Entries only need to implement [`PartialOrd`]. A comparison between two entries that
/// yields no ordering surfaces as [`Error::Incomparable`]; for totally ordered entry
/// types this cannot happen.
///
/// # Examples
/// ```
/// use avl_tree::{AvlTree, Error};
///
/// let mut tree = AvlTree::new();
/// tree.insert(10)?;
/// tree.insert(20)?;
/// tree.insert(30)?;
///
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.min(), Ok(&10));
/// assert_eq!(tree.succ(&10), Ok(&20));
///
/// assert_eq!(tree.delete(&20), Ok(20));
/// assert_eq!(tree.delete(&20), Err(Error::NotFound));
/// # Ok::<(), avl_tree::Error>(())
/// ```
#[derive(Clone)]
pub struct AvlTree<T> {
    root: Position<T>,
}

impl<T> AvlTree<T> {
    /// Constructs a new, empty `AvlTree<T>`.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// ```
    pub fn new() -> Self {
        AvlTree {
            root: Position::Empty,
        }
    }

    /// Constructs an `AvlTree<T>` from the entries of an iterable, inserting them one at
    /// a time in iteration order. Construction is abandoned with the first error; since
    /// the partially built tree is never returned, a failed construction has no
    /// observable partial effect.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let tree = AvlTree::try_from_iter(vec![5, 3, 8])?;
    /// assert_eq!(tree.len(), 3);
    ///
    /// let tree = AvlTree::try_from_iter(vec![1.0, f64::NAN]);
    /// assert_eq!(tree.unwrap_err(), Error::Incomparable);
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn try_from_iter<I>(iterable: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: PartialOrd,
    {
        let mut tree = AvlTree::new();
        for entry in iterable {
            tree.insert(entry)?;
        }
        Ok(tree)
    }

    /// Constructs an `AvlTree<T>` by re-inserting the entries of another tree in
    /// breadth-first order.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::try_from_iter(vec![2, 1, 3])?;
    /// let other = AvlTree::try_from_tree(&tree)?;
    /// assert!(tree == other);
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn try_from_tree(other: &AvlTree<T>) -> Result<Self, Error>
    where
        T: Clone + PartialOrd,
    {
        let mut tree = AvlTree::new();
        for entry in other.traverse(TraversalOrder::BreadthFirst) {
            tree.insert(entry.clone())?;
        }
        Ok(tree)
    }

    /// Inserts an entry into the tree. Inserting an entry equal to one already present is
    /// a no-op; the stored entry is not replaced.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1)?;
    /// tree.insert(1)?;
    /// assert_eq!(tree.len(), 1);
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn insert(&mut self, entry: T) -> Result<(), Error>
    where
        T: PartialOrd,
    {
        self.root.insert(entry)
    }

    /// Deletes an entry from the tree and returns it. Returns [`Error::NotFound`] if the
    /// entry does not exist in the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1)?;
    /// assert_eq!(tree.delete(&1), Ok(1));
    /// assert_eq!(tree.delete(&1), Err(Error::NotFound));
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn delete(&mut self, entry: &T) -> Result<T, Error>
    where
        T: PartialOrd,
    {
        self.root.remove(entry)
    }

    /// Returns a reference to the stored entry that compares equal to the queried entry.
    /// This is useful when entries carry a payload beyond the ordering key. Returns
    /// [`Error::NotFound`] if no such entry exists.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let tree = AvlTree::try_from_iter(vec![1, 2, 3])?;
    /// assert_eq!(tree.search(&2), Ok(&2));
    /// assert_eq!(tree.search(&99), Err(Error::NotFound));
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn search(&self, entry: &T) -> Result<&T, Error>
    where
        T: PartialOrd,
    {
        self.root.get(entry)
    }

    /// Checks if an entry exists in the tree. This is the sole operation that downgrades
    /// a failed lookup to a boolean; it never fails.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::try_from_iter(vec![1, 2, 3])?;
    /// assert!(tree.contains(&2));
    /// assert!(!tree.contains(&99));
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn contains(&self, entry: &T) -> bool
    where
        T: PartialOrd,
    {
        self.search(entry).is_ok()
    }

    /// Returns the minimum entry of the tree. Returns [`Error::NotFound`] if the tree is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::try_from_iter(vec![3, 1, 5])?;
    /// assert_eq!(tree.min(), Ok(&1));
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn min(&self) -> Result<&T, Error> {
        self.root.min().ok_or(Error::NotFound)
    }

    /// Returns the maximum entry of the tree. Returns [`Error::NotFound`] if the tree is
    /// empty.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::try_from_iter(vec![3, 1, 5])?;
    /// assert_eq!(tree.max(), Ok(&5));
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn max(&self) -> Result<&T, Error> {
        self.root.max().ok_or(Error::NotFound)
    }

    /// Returns the greatest entry of the tree strictly less than the queried entry.
    /// Returns [`Error::NotFound`] if the queried entry is absent from the tree or has no
    /// predecessor; a predecessor query for an absent entry fails rather than degrading
    /// to the nearest entry in sorted order.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let tree = AvlTree::try_from_iter(vec![5, 3, 8, 1, 4, 7, 9])?;
    /// assert_eq!(tree.pred(&7), Ok(&5));
    /// assert_eq!(tree.pred(&1), Err(Error::NotFound));
    /// assert_eq!(tree.pred(&6), Err(Error::NotFound));
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn pred(&self, entry: &T) -> Result<&T, Error>
    where
        T: PartialOrd,
    {
        self.root.pred(None, entry)
    }

    /// Returns the least entry of the tree strictly greater than the queried entry.
    /// Returns [`Error::NotFound`] if the queried entry is absent from the tree or has no
    /// successor.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, Error};
    ///
    /// let tree = AvlTree::try_from_iter(vec![5, 3, 8, 1, 4, 7, 9])?;
    /// assert_eq!(tree.succ(&7), Ok(&8));
    /// assert_eq!(tree.succ(&9), Err(Error::NotFound));
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn succ(&self, entry: &T) -> Result<&T, Error>
    where
        T: PartialOrd,
    {
        self.root.succ(None, entry)
    }

    /// Returns the height of the tree. An empty tree has height 0.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::try_from_iter(vec![10, 20, 30])?;
    /// assert_eq!(tree.height(), 2);
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn height(&self) -> usize {
        self.root.height()
    }

    /// Returns the number of entries in the tree.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::new();
    /// tree.insert(1)?;
    /// assert_eq!(tree.len(), 1);
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn len(&self) -> usize {
        self.root.len()
    }

    /// Returns `true` if the tree is empty.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree: AvlTree<u32> = AvlTree::new();
    /// assert!(tree.is_empty());
    /// ```
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    /// Clears the tree, removing all entries.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let mut tree = AvlTree::try_from_iter(vec![1, 2])?;
    /// tree.clear();
    /// assert!(tree.is_empty());
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn clear(&mut self) {
        self.root = Position::Empty;
    }

    /// Returns a lazy iterator over the tree in the given traversal order. The iterator
    /// borrows the tree, so the tree cannot be mutated while a traversal is live.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::{AvlTree, TraversalOrder};
    ///
    /// let tree = AvlTree::try_from_iter(vec![10, 20, 30])?;
    ///
    /// let pre_order = tree.traverse(TraversalOrder::PreOrder).collect::<Vec<_>>();
    /// assert_eq!(pre_order, vec![&20, &10, &30]);
    ///
    /// let post_order = tree.traverse(TraversalOrder::PostOrder).collect::<Vec<_>>();
    /// assert_eq!(post_order, vec![&10, &30, &20]);
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn traverse(&self, order: TraversalOrder) -> Traversal<T> {
        Traversal::new(&self.root, order)
    }

    /// Returns an iterator over the tree that yields entries using in-order traversal,
    /// the default order.
    ///
    /// # Examples
    /// ```
    /// use avl_tree::AvlTree;
    ///
    /// let tree = AvlTree::try_from_iter(vec![3, 1, 2])?;
    ///
    /// let mut iterator = tree.iter();
    /// assert_eq!(iterator.next(), Some(&1));
    /// assert_eq!(iterator.next(), Some(&2));
    /// assert_eq!(iterator.next(), Some(&3));
    /// assert_eq!(iterator.next(), None);
    /// # Ok::<(), avl_tree::Error>(())
    /// ```
    pub fn iter(&self) -> Traversal<T> {
        self.traverse(TraversalOrder::default())
    }
}

impl<T> IntoIterator for AvlTree<T> {
    type IntoIter = IntoIter<T>;
    type Item = T;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.root)
    }
}

impl<'a, T> IntoIterator for &'a AvlTree<T>
where
    T: 'a,
{
    type IntoIter = Traversal<'a, T>;
    type Item = &'a T;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T> Default for AvlTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PartialEq for AvlTree<T>
where
    T: PartialEq,
{
    /// Two trees are equal iff they have the same height, the same length, and
    /// structurally equal roots. The height and length comparisons are a fast reject
    /// before the recursive comparison.
    fn eq(&self, other: &AvlTree<T>) -> bool {
        self.height() == other.height() && self.len() == other.len() && self.root == other.root
    }
}

impl<T> fmt::Debug for AvlTree<T>
where
    T: fmt::Debug,
{
    /// Renders the tree's breadth-first entry sequence.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "AvlTree(")?;
        f.debug_list()
            .entries(self.traverse(TraversalOrder::BreadthFirst))
            .finish()?;
        write!(f, ")")
    }
}
