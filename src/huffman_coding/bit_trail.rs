//! Bit trails: the left/right path from the root to each leaf.

use std::fmt::{Display, Formatter};

use log::{debug, trace};
use rustc_hash::FxHashMap;

use super::node::{NodeData, Symbol, SymbolNode};
use crate::error::{Result, TrailError};

/// A path from the root. `false` is a left descent ("0"), `true` a right descent ("1").
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct BitTrail {
    bits: Vec<bool>,
}

impl BitTrail {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    pub fn from_bits(bits: &[bool]) -> Self {
        Self {
            bits: bits.to_vec(),
        }
    }

    pub fn push(&mut self, bit: bool) {
        self.bits.push(bit);
    }

    pub fn pop(&mut self) -> Option<bool> {
        self.bits.pop()
    }

    pub fn bits(&self) -> &[bool] {
        &self.bits
    }

    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// True if `self` is a prefix of `other`. Every trail is a prefix of itself.
    pub fn is_prefix_of(&self, other: &BitTrail) -> bool {
        other.bits.starts_with(&self.bits)
    }
}

impl Display for BitTrail {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text: String = self
            .bits
            .iter()
            .map(|&bit| if bit { '1' } else { '0' })
            .collect();
        f.write_str(&text)
    }
}

/// Symbol to trail lookup for one tree.
pub type TrailTable<S> = FxHashMap<S, BitTrail>;

/// Walk the tree and record the trail of every leaf.
///
/// A root that is itself a leaf (single-symbol alphabet) gets the trail "0".
/// Two leaves with the same symbol make the tree unusable and fail with `CorruptTree`.
pub fn derive_trails<S: Symbol>(root: &SymbolNode<S>) -> Result<TrailTable<S>> {
    let mut table = TrailTable::default();

    if let NodeData::Leaf(symbol) = root.node_data {
        trace!("{:?} -> 0 (single leaf)", symbol);
        table.insert(symbol, BitTrail::from_bits(&[false]));
        return Ok(table);
    }

    let mut path = BitTrail::new();
    walk(root, &mut path, &mut table)?;

    debug!(
        "Derived {} bit trails, longest is {} bits",
        table.len(),
        table.values().map(BitTrail::len).max().unwrap_or(0)
    );
    Ok(table)
}

fn walk<S: Symbol>(node: &SymbolNode<S>, path: &mut BitTrail, table: &mut TrailTable<S>) -> Result<()> {
    match &node.node_data {
        NodeData::Leaf(symbol) => {
            trace!("{:?} -> {}", symbol, path);
            if table.insert(*symbol, path.clone()).is_some() {
                return Err(TrailError::CorruptTree {
                    symbol: format!("{:?}", symbol),
                });
            }
        }
        NodeData::Kids(left, right) => {
            path.push(false);
            walk(left, path, table)?;
            path.pop();

            path.push(true);
            walk(right, path, table)?;
            path.pop();
        }
    }
    Ok(())
}
