//! Tree nodes for the bit trail engine.
//!
//! A node is either a leaf holding one symbol, or a branch holding two boxed kids.
//! Every node carries its combined weight and a tie-break key (the sum of the codes
//! of all the symbols below it), so the priority container never has to walk a subtree.

use std::fmt::{self, Debug, Display, Formatter};
use std::hash::Hash;

use super::heap_tree::Prioritized;

/// Something that can be coded: a byte, a wide code unit, or a character.
///
/// The code is the numeric value used to build tie-break keys.
pub trait Symbol: Copy + Eq + Hash + Debug {
    fn code(self) -> u64;
}

impl Symbol for u8 {
    fn code(self) -> u64 {
        self as u64
    }
}

impl Symbol for u16 {
    fn code(self) -> u64 {
        self as u64
    }
}

impl Symbol for char {
    fn code(self) -> u64 {
        self as u64
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum NodeData<S> {
    Kids(Box<SymbolNode<S>>, Box<SymbolNode<S>>),
    Leaf(S),
}

#[derive(PartialEq, Debug, Clone)]
pub struct SymbolNode<S> {
    pub weight: f64,
    /// Levels below this node. A leaf has depth 0.
    pub depth: usize,
    /// Sum of the symbol codes in this subtree.
    pub syms: u64,
    pub node_data: NodeData<S>,
}

impl<S: Symbol> SymbolNode<S> {
    /// Create a leaf for a single symbol.
    pub fn leaf(symbol: S, weight: f64) -> Self {
        Self {
            weight,
            depth: 0,
            syms: symbol.code(),
            node_data: NodeData::Leaf(symbol),
        }
    }

    /// Merge two nodes into a branch. `left` gets the 0 trail, `right` the 1 trail.
    pub fn merge(left: Self, right: Self) -> Self {
        Self {
            weight: left.weight + right.weight,
            depth: left.depth.max(right.depth) + 1,
            syms: left.syms + right.syms,
            node_data: NodeData::Kids(Box::new(left), Box::new(right)),
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.node_data, NodeData::Leaf(_))
    }

    /// The symbol held by a leaf, or None for a branch.
    pub fn symbol(&self) -> Option<S> {
        match self.node_data {
            NodeData::Leaf(symbol) => Some(symbol),
            NodeData::Kids(..) => None,
        }
    }

    /// Left kid for a 0 bit, right kid for a 1 bit. None on a leaf.
    pub fn kid(&self, bit: bool) -> Option<&SymbolNode<S>> {
        match &self.node_data {
            NodeData::Kids(left, right) => Some(if bit { right } else { left }),
            NodeData::Leaf(_) => None,
        }
    }

    /// The symbols of this subtree, left to right. A branch lists its left kid's
    /// symbols followed by its right kid's.
    pub fn symbols(&self) -> Vec<S> {
        let mut out = Vec::new();
        self.collect_symbols(&mut out);
        out
    }

    fn collect_symbols(&self, out: &mut Vec<S>) {
        match &self.node_data {
            NodeData::Leaf(symbol) => out.push(*symbol),
            NodeData::Kids(left, right) => {
                left.collect_symbols(out);
                right.collect_symbols(out);
            }
        }
    }

    /// Number of leaves below (and including) this node.
    pub fn leaf_count(&self) -> usize {
        match &self.node_data {
            NodeData::Leaf(_) => 1,
            NodeData::Kids(left, right) => left.leaf_count() + right.leaf_count(),
        }
    }

    /// Indented dump of the subtree, right side first so it reads like a sideways tree.
    fn render(&self, f: &mut Formatter<'_>, level: usize) -> fmt::Result {
        match &self.node_data {
            NodeData::Kids(left, right) => {
                right.render(f, level + 1)?;
                writeln!(f, "{:indent$}+ [{}]", "", self.weight, indent = level * 4)?;
                left.render(f, level + 1)
            }
            NodeData::Leaf(symbol) => {
                writeln!(f, "{:indent$}{:?} [{}]", "", symbol, self.weight, indent = level * 4)
            }
        }
    }
}

impl<S: Symbol> Prioritized for SymbolNode<S> {
    fn weight(&self) -> f64 {
        self.weight
    }

    fn tie_break_key(&self) -> u64 {
        self.syms
    }
}

impl<S: Symbol> Display for SymbolNode<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.render(f, 0)
    }
}
