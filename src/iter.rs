use crate::node::Node;
use crate::tree::Position;
use std::collections::VecDeque;

/// The order in which a traversal visits the entries of a tree.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TraversalOrder {
    /// Visits the subtree root, then the left subtree, then the right subtree.
    PreOrder,
    /// Visits the left subtree, then the subtree root, then the right subtree.
    InOrder,
    /// Visits the left subtree, then the right subtree, then the subtree root.
    PostOrder,
    /// Visits the entries level by level, from the root down.
    BreadthFirst,
}

impl Default for TraversalOrder {
    fn default() -> Self {
        TraversalOrder::InOrder
    }
}

/// A lazy iterator over the entries of a tree in a chosen traversal order.
///
/// This iterator borrows the tree, so the tree cannot be mutated while a traversal is
/// live.
pub struct Traversal<'a, T> {
    state: State<'a, T>,
}

enum State<'a, T> {
    PreOrder {
        stack: Vec<&'a Node<T>>,
    },
    InOrder {
        current: &'a Position<T>,
        stack: Vec<&'a Node<T>>,
    },
    PostOrder {
        stack: Vec<(&'a Node<T>, bool)>,
    },
    BreadthFirst {
        queue: VecDeque<&'a Node<T>>,
    },
}

impl<'a, T> Traversal<'a, T> {
    pub(crate) fn new(root: &'a Position<T>, order: TraversalOrder) -> Self {
        let state = match order {
            TraversalOrder::PreOrder => {
                let mut stack = Vec::new();
                if let Position::Filled(node) = root {
                    stack.push(&**node);
                }
                State::PreOrder { stack }
            },
            TraversalOrder::InOrder => State::InOrder {
                current: root,
                stack: Vec::new(),
            },
            TraversalOrder::PostOrder => {
                let mut stack = Vec::new();
                if let Position::Filled(node) = root {
                    stack.push((&**node, false));
                }
                State::PostOrder { stack }
            },
            TraversalOrder::BreadthFirst => {
                let mut queue = VecDeque::new();
                if let Position::Filled(node) = root {
                    queue.push_back(&**node);
                }
                State::BreadthFirst { queue }
            },
        };
        Traversal { state }
    }
}

impl<'a, T> Iterator for Traversal<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        match &mut self.state {
            State::PreOrder { stack } => stack.pop().map(|node| {
                if let Position::Filled(right_node) = &node.right {
                    stack.push(right_node);
                }
                if let Position::Filled(left_node) = &node.left {
                    stack.push(left_node);
                }
                &node.entry
            }),
            State::InOrder { current, stack } => {
                while let Position::Filled(node) = *current {
                    *current = &node.left;
                    stack.push(node);
                }
                stack.pop().map(|node| {
                    *current = &node.right;
                    &node.entry
                })
            },
            State::PostOrder { stack } => {
                while let Some((node, expanded)) = stack.pop() {
                    if expanded {
                        return Some(&node.entry);
                    }
                    stack.push((node, true));
                    if let Position::Filled(right_node) = &node.right {
                        stack.push((&**right_node, false));
                    }
                    if let Position::Filled(left_node) = &node.left {
                        stack.push((&**left_node, false));
                    }
                }
                None
            },
            State::BreadthFirst { queue } => queue.pop_front().map(|node| {
                if let Position::Filled(left_node) = &node.left {
                    queue.push_back(left_node);
                }
                if let Position::Filled(right_node) = &node.right {
                    queue.push_back(right_node);
                }
                &node.entry
            }),
        }
    }
}

/// An owning iterator over the entries of a tree.
///
/// This iterator traverses the entries in-order and yields owned entries.
pub struct IntoIter<T> {
    current: Position<T>,
    stack: Vec<Node<T>>,
}

impl<T> IntoIter<T> {
    pub(crate) fn new(root: Position<T>) -> Self {
        IntoIter {
            current: root,
            stack: Vec::new(),
        }
    }
}

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        while let Position::Filled(mut node) = self.current.take() {
            self.current = node.left.take();
            self.stack.push(*node);
        }
        self.stack.pop().map(|node| {
            let Node { entry, right, .. } = node;
            self.current = right;
            entry
        })
    }
}
