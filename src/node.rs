use crate::tree::Position;
use std::cmp;

/// A struct representing an internal node of an AVL tree.
#[derive(Clone)]
pub struct Node<T> {
    pub entry: T,
    pub height: usize,
    pub left: Position<T>,
    pub right: Position<T>,
}

impl<T> Node<T> {
    pub fn new(entry: T) -> Self {
        Node {
            entry,
            height: 1,
            left: Position::Empty,
            right: Position::Empty,
        }
    }

    pub fn update(&mut self) {
        self.height = cmp::max(self.left.height(), self.right.height()) + 1;
    }

    pub fn balance_factor(&self) -> i32 {
        (self.left.height() as i32) - (self.right.height() as i32)
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_empty() && self.right.is_empty()
    }
}
