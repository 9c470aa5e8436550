use crate::error::Error;
use crate::node::Node;
use std::cmp::Ordering;
use std::mem;

/// A slot in the recursive structure: either the empty sentinel or a filled node.
///
/// `Empty` is a first-class terminal with height 0, so every recursive operation is
/// defined uniformly over both variants and the empty subtree needs no special casing
/// at call sites.
#[derive(Clone)]
pub enum Position<T> {
    Empty,
    Filled(Box<Node<T>>),
}

fn compare<T>(lhs: &T, rhs: &T) -> Result<Ordering, Error>
where
    T: PartialOrd,
{
    lhs.partial_cmp(rhs).ok_or(Error::Incomparable)
}

fn rotate_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.right.take() {
        Position::Filled(child) => child,
        Position::Empty => unreachable!(),
    };
    node.right = child.left.take();
    node.update();
    child.left = Position::Filled(node);
    child.update();
    child
}

fn rotate_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let mut child = match node.left.take() {
        Position::Filled(child) => child,
        Position::Empty => unreachable!(),
    };
    node.left = child.right.take();
    node.update();
    child.right = Position::Filled(node);
    child.update();
    child
}

fn rotate_left_right<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let child = match node.left.take() {
        Position::Filled(child) => child,
        Position::Empty => unreachable!(),
    };
    node.left = Position::Filled(rotate_left(child));
    rotate_right(node)
}

fn rotate_right_left<T>(mut node: Box<Node<T>>) -> Box<Node<T>> {
    let child = match node.right.take() {
        Position::Filled(child) => child,
        Position::Empty => unreachable!(),
    };
    node.right = Position::Filled(rotate_right(child));
    rotate_left(node)
}

impl<T> Position<T> {
    pub fn height(&self) -> usize {
        match self {
            Position::Empty => 0,
            Position::Filled(node) => node.height,
        }
    }

    pub fn balance_factor(&self) -> i32 {
        match self {
            Position::Empty => 0,
            Position::Filled(node) => node.balance_factor(),
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Position::Empty => true,
            Position::Filled(_) => false,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Position::Empty => 0,
            Position::Filled(node) => 1 + node.left.len() + node.right.len(),
        }
    }

    pub fn take(&mut self) -> Position<T> {
        mem::replace(self, Position::Empty)
    }

    /// Recomputes the height of the subtree root and performs the appropriate rotation if
    /// the subtree is unbalanced.
    ///
    /// The double-rotation conditions must be tested before the single-rotation fallbacks.
    fn rebalance(&mut self) {
        let mut node = match self.take() {
            Position::Empty => return,
            Position::Filled(node) => node,
        };

        node.update();

        let balance_factor = node.balance_factor();
        if balance_factor == 2 && node.left.balance_factor() == -1 {
            node = rotate_left_right(node);
        } else if balance_factor == -2 && node.right.balance_factor() == 1 {
            node = rotate_right_left(node);
        } else if balance_factor == -2 {
            node = rotate_left(node);
        } else if balance_factor == 2 {
            node = rotate_right(node);
        }

        *self = Position::Filled(node);
    }

    /// Inserts an entry into the subtree. Inserting an entry equal to one already present
    /// leaves the subtree untouched.
    pub fn insert(&mut self, entry: T) -> Result<(), Error>
    where
        T: PartialOrd,
    {
        let node = match self {
            Position::Empty => {
                *self = Position::Filled(Box::new(Node::new(entry)));
                return Ok(());
            },
            Position::Filled(node) => node,
        };

        match compare(&entry, &node.entry)? {
            Ordering::Greater => node.right.insert(entry)?,
            Ordering::Less => node.left.insert(entry)?,
            Ordering::Equal => return Ok(()),
        }

        self.rebalance();
        Ok(())
    }

    /// Removes an entry from the subtree and returns it. A failed deeper call propagates
    /// after the local node has been restored, so ancestors never observe a partially
    /// rotated subtree.
    pub fn remove(&mut self, entry: &T) -> Result<T, Error>
    where
        T: PartialOrd,
    {
        let mut node = match self.take() {
            Position::Empty => return Err(Error::NotFound),
            Position::Filled(node) => node,
        };

        let removed = match compare(entry, &node.entry) {
            Ok(Ordering::Greater) => {
                let removed = node.right.remove(entry);
                *self = Position::Filled(node);
                removed?
            },
            Ok(Ordering::Less) => {
                let removed = node.left.remove(entry);
                *self = Position::Filled(node);
                removed?
            },
            Ok(Ordering::Equal) => {
                if node.is_leaf() {
                    let Node { entry, .. } = *node;
                    return Ok(entry);
                }
                if node.left.is_empty() {
                    let Node { entry, right, .. } = *node;
                    *self = right;
                    return Ok(entry);
                }
                let new_entry = node.left.remove_max();
                let removed = mem::replace(&mut node.entry, new_entry);
                *self = Position::Filled(node);
                removed
            },
            Err(err) => {
                *self = Position::Filled(node);
                return Err(err);
            },
        };

        self.rebalance();
        Ok(removed)
    }

    // precondition: the position is filled
    fn remove_max(&mut self) -> T {
        let mut node = match self.take() {
            Position::Filled(node) => node,
            Position::Empty => unreachable!(),
        };

        if node.right.is_empty() {
            let Node { entry, left, .. } = *node;
            *self = left;
            return entry;
        }

        let entry = node.right.remove_max();
        *self = Position::Filled(node);
        self.rebalance();
        entry
    }

    /// Returns the stored entry that compares equal to the queried entry.
    pub fn get(&self, entry: &T) -> Result<&T, Error>
    where
        T: PartialOrd,
    {
        let mut curr = self;
        loop {
            match curr {
                Position::Empty => return Err(Error::NotFound),
                Position::Filled(node) => match compare(entry, &node.entry)? {
                    Ordering::Greater => curr = &node.right,
                    Ordering::Less => curr = &node.left,
                    Ordering::Equal => return Ok(&node.entry),
                },
            }
        }
    }

    pub fn min(&self) -> Option<&T> {
        match self {
            Position::Empty => None,
            Position::Filled(node) => {
                let mut curr = node;
                while let Position::Filled(left_node) = &curr.left {
                    curr = left_node;
                }
                Some(&curr.entry)
            },
        }
    }

    pub fn max(&self) -> Option<&T> {
        match self {
            Position::Empty => None,
            Position::Filled(node) => {
                let mut curr = node;
                while let Position::Filled(right_node) = &curr.right {
                    curr = right_node;
                }
                Some(&curr.entry)
            },
        }
    }

    /// Returns the greatest entry strictly less than the queried entry, threading the
    /// nearest ancestor that turned right as the candidate predecessor.
    pub fn pred<'a>(&'a self, candidate: Option<&'a T>, entry: &T) -> Result<&'a T, Error>
    where
        T: PartialOrd,
    {
        match self {
            Position::Empty => Err(Error::NotFound),
            Position::Filled(node) => match compare(entry, &node.entry)? {
                Ordering::Greater => node.right.pred(Some(&node.entry), entry),
                Ordering::Less => node.left.pred(candidate, entry),
                Ordering::Equal => match node.left.max() {
                    Some(max) => Ok(max),
                    None => candidate.ok_or(Error::NotFound),
                },
            },
        }
    }

    /// Returns the least entry strictly greater than the queried entry, threading the
    /// nearest ancestor that turned left as the candidate successor.
    pub fn succ<'a>(&'a self, candidate: Option<&'a T>, entry: &T) -> Result<&'a T, Error>
    where
        T: PartialOrd,
    {
        match self {
            Position::Empty => Err(Error::NotFound),
            Position::Filled(node) => match compare(entry, &node.entry)? {
                Ordering::Greater => node.right.succ(candidate, entry),
                Ordering::Less => node.left.succ(Some(&node.entry), entry),
                Ordering::Equal => match node.right.min() {
                    Some(min) => Ok(min),
                    None => candidate.ok_or(Error::NotFound),
                },
            },
        }
    }
}

impl<T> PartialEq for Position<T>
where
    T: PartialEq,
{
    fn eq(&self, other: &Position<T>) -> bool {
        match (self, other) {
            (Position::Empty, Position::Empty) => true,
            (Position::Filled(lhs), Position::Filled(rhs)) => {
                lhs.entry == rhs.entry && lhs.left == rhs.left && lhs.right == rhs.right
            },
            _ => false,
        }
    }
}

impl<T> Default for Position<T> {
    fn default() -> Self {
        Position::Empty
    }
}

#[cfg(test)]
mod tests {
    use super::Position;
    use crate::node::Node;

    fn check_invariants<T>(position: &Position<T>) -> usize
    where
        T: PartialOrd,
    {
        match position {
            Position::Empty => 0,
            Position::Filled(node) => {
                let Node {
                    ref entry,
                    height,
                    ref left,
                    ref right,
                } = **node;
                if let Position::Filled(left_node) = left {
                    assert!(left_node.entry < *entry);
                }
                if let Position::Filled(right_node) = right {
                    assert!(right_node.entry > *entry);
                }
                let left_height = check_invariants(left);
                let right_height = check_invariants(right);
                assert_eq!(height, 1 + std::cmp::max(left_height, right_height));
                let balance_factor = (left_height as i32) - (right_height as i32);
                assert!(balance_factor >= -1 && balance_factor <= 1);
                height
            },
        }
    }

    #[test]
    fn test_invariants_after_ascending_inserts() {
        let mut position = Position::Empty;
        for entry in 0..100 {
            position.insert(entry).unwrap();
            check_invariants(&position);
        }
        assert_eq!(position.len(), 100);
    }

    #[test]
    fn test_invariants_after_descending_inserts() {
        let mut position = Position::Empty;
        for entry in (0..100).rev() {
            position.insert(entry).unwrap();
            check_invariants(&position);
        }
        assert_eq!(position.len(), 100);
    }

    #[test]
    fn test_invariants_after_removes() {
        let mut position = Position::Empty;
        for entry in 0..100 {
            position.insert(entry).unwrap();
        }
        for entry in 25..75 {
            assert_eq!(position.remove(&entry), Ok(entry));
            check_invariants(&position);
        }
        assert_eq!(position.len(), 50);
    }

    #[test]
    fn test_single_left_rotation() {
        let mut position = Position::Empty;
        position.insert(10).unwrap();
        position.insert(20).unwrap();
        position.insert(30).unwrap();

        match &position {
            Position::Filled(node) => {
                assert_eq!(node.entry, 20);
                assert_eq!(node.height, 2);
                assert_eq!(node.left.min(), Some(&10));
                assert_eq!(node.right.max(), Some(&30));
            },
            Position::Empty => panic!("expected filled root"),
        }
    }

    #[test]
    fn test_double_rotations() {
        // left-right
        let mut position = Position::Empty;
        position.insert(30).unwrap();
        position.insert(10).unwrap();
        position.insert(20).unwrap();
        check_invariants(&position);
        assert_eq!(position.height(), 2);

        // right-left
        let mut position = Position::Empty;
        position.insert(10).unwrap();
        position.insert(30).unwrap();
        position.insert(20).unwrap();
        check_invariants(&position);
        assert_eq!(position.height(), 2);
    }

    #[test]
    fn test_remove_not_found_leaves_tree_untouched() {
        let mut position = Position::Empty;
        for entry in &[5, 3, 8] {
            position.insert(*entry).unwrap();
        }
        assert!(position.remove(&4).is_err());
        check_invariants(&position);
        assert_eq!(position.len(), 3);
    }
}
