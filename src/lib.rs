//! An ordered set implemented using a self-balancing binary search tree (AVL tree).
//!
//! An AVL tree maintains the invariant that the heights of the two child subtrees of any
//! node differ by at most one, guaranteeing O(log n) insertion, search, and deletion.
//! The tree exposes ordered-set semantics: insertion, deletion, membership tests,
//! minimum/maximum, predecessor/successor queries, and four lazy traversal orders.
//!
//! # Examples
//! ```
//! use avl_tree::{AvlTree, Error, TraversalOrder};
//!
//! let mut tree = AvlTree::try_from_iter(vec![5, 3, 8, 1, 4, 7, 9])?;
//!
//! assert_eq!(tree.min(), Ok(&1));
//! assert_eq!(tree.pred(&7), Ok(&5));
//! assert_eq!(tree.succ(&7), Ok(&8));
//!
//! assert_eq!(tree.delete(&5), Ok(5));
//! assert_eq!(tree.delete(&5), Err(Error::NotFound));
//!
//! let in_order = tree.traverse(TraversalOrder::InOrder).collect::<Vec<_>>();
//! assert_eq!(in_order, vec![&1, &3, &4, &7, &8, &9]);
//! # Ok::<(), avl_tree::Error>(())
//! ```

mod error;
mod iter;
mod node;
mod set;
mod tree;

pub use crate::error::Error;
pub use crate::iter::{IntoIter, Traversal, TraversalOrder};
pub use crate::set::AvlTree;
