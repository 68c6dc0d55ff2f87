//! Priority container used to build the code tree.
//!
//! The container keeps its nodes fully sorted under the ordering chosen at construction,
//! not merely heap-valid, so the next extremum is always at the front and iteration shows
//! the exact order in which nodes will be popped.

use std::cmp::Ordering;
use std::collections::VecDeque;

use crate::error::{Result, TrailError};

/// Anything the container can order: a weight, and a content-derived tie-break key.
pub trait Prioritized {
    fn weight(&self) -> f64;
    fn tie_break_key(&self) -> u64;
}

/// Which end of the weight range is popped first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum HeapOrder {
    /// Smallest weight first. This is what the tree builder uses.
    #[default]
    MinFirst,
    /// Largest weight first.
    MaxFirst,
}

impl HeapOrder {
    /// Order two nodes. `Less` means `a` is popped before `b`.
    ///
    /// Equal weights fall back to the smaller tie-break key in both modes.
    pub fn compare<T: Prioritized>(self, a: &T, b: &T) -> Ordering {
        let by_weight = match self {
            HeapOrder::MinFirst => a.weight().total_cmp(&b.weight()),
            HeapOrder::MaxFirst => b.weight().total_cmp(&a.weight()),
        };
        by_weight.then_with(|| a.tie_break_key().cmp(&b.tie_break_key()))
    }
}

/// A sorted, owning priority container.
#[derive(Debug, Clone)]
pub struct HeapTree<T> {
    elements: VecDeque<T>,
    order: HeapOrder,
}

impl<T: Prioritized> HeapTree<T> {
    /// Take ownership of `nodes` and sort them. The sort is stable, so nodes that compare
    /// equal keep the order they were handed in.
    pub fn build(nodes: Vec<T>, order: HeapOrder) -> Self {
        let mut heap = HeapTree {
            elements: VecDeque::from(nodes),
            order,
        };
        heap.sort_tree();
        heap
    }

    /// An empty container with the given ordering.
    pub fn new(order: HeapOrder) -> Self {
        HeapTree {
            elements: VecDeque::new(),
            order,
        }
    }

    /// Insert a node, keeping the container sorted. A node that ties with existing
    /// nodes goes behind them.
    pub fn push(&mut self, node: T) {
        let order = self.order;
        let idx = self
            .elements
            .partition_point(|existing| order.compare(existing, &node) != Ordering::Greater);
        self.elements.insert(idx, node);
        debug_assert!(self.valid_order());
    }

    /// The next node to be popped.
    pub fn peek(&self) -> Result<&T> {
        self.elements.front().ok_or(TrailError::EmptyContainer)
    }

    /// Remove and return the next node.
    pub fn pop(&mut self) -> Result<T> {
        self.elements.pop_front().ok_or(TrailError::EmptyContainer)
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn order(&self) -> HeapOrder {
        self.order
    }

    /// Re-sort every node under the container's ordering.
    pub fn sort_tree(&mut self) {
        let order = self.order;
        self.elements
            .make_contiguous()
            .sort_by(|a, b| order.compare(a, b));
    }

    /// True when no node is out of order with its successor.
    pub fn valid_order(&self) -> bool {
        self.elements
            .iter()
            .zip(self.elements.iter().skip(1))
            .all(|(a, b)| self.order.compare(a, b) != Ordering::Greater)
    }

    /// Nodes in pop order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }

    /// The nodes laid out as a binary heap, one Vec per level: 1 node, then 2, then 4...
    pub fn levels(&self) -> Vec<Vec<&T>> {
        let mut levels = Vec::new();
        let mut level_size = 1;
        let mut iter = self.elements.iter().peekable();
        while iter.peek().is_some() {
            levels.push(iter.by_ref().take(level_size).collect());
            level_size *= 2;
        }
        levels
    }

    /// Give back the nodes in pop order.
    pub fn into_vec(self) -> Vec<T> {
        self.elements.into()
    }
}
