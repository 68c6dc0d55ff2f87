//! Builds the code tree from a frequency table.
//!
//! One leaf per symbol with a positive weight goes into a smallest-first container. The
//! two lightest nodes are popped (the first becomes the left kid, the second the right kid),
//! merged into a branch and pushed back, until one node is left: the root.

use log::{debug, info, trace, warn};
use rustc_hash::FxHashMap;

use super::heap_tree::{HeapOrder, HeapTree};
use super::node::{Symbol, SymbolNode};
use crate::error::{Result, TrailError};
use crate::tools::options::{CoderOptions, SingleSymbolPolicy};

/// Build a tree with the default options.
pub fn build_tree<S, I>(frequencies: I) -> Result<SymbolNode<S>>
where
    S: Symbol,
    I: IntoIterator<Item = (S, f64)>,
{
    build_tree_with(frequencies, &CoderOptions::default())
}

/// Build a tree from `(symbol, weight)` pairs.
///
/// Pairs for the same symbol are summed and zero weights are skipped. The shape only
/// depends on the multiset of pairs, never on the order they arrive in.
pub fn build_tree_with<S, I>(frequencies: I, opts: &CoderOptions) -> Result<SymbolNode<S>>
where
    S: Symbol,
    I: IntoIterator<Item = (S, f64)>,
{
    let leaves = seed_leaves(frequencies)?;

    if leaves.is_empty() {
        warn!("No symbol has a positive weight; nothing to build.");
        return Err(TrailError::EmptyAlphabet);
    }
    if leaves.len() == 1 {
        let lone = &leaves[0];
        if opts.single_symbol == SingleSymbolPolicy::Reject {
            warn!("Rejecting single-symbol alphabet.");
            return Err(TrailError::DegenerateAlphabet {
                symbol: lone
                    .symbol()
                    .map(|symbol| format!("{:?}", symbol))
                    .unwrap_or_default(),
            });
        }
        debug!("Single-symbol alphabet; the root is a leaf.");
    }

    let mut heap = HeapTree::build(leaves, HeapOrder::MinFirst);
    debug!("Seeded container with {} leaves", heap.len());

    while heap.len() > 1 {
        let left = heap.pop()?;
        let right = heap.pop()?;
        trace!(
            "Merging {:?} [{}] with {:?} [{}]",
            left.symbols(),
            left.weight,
            right.symbols(),
            right.weight
        );
        let branch = SymbolNode::merge(left, right);
        if !branch.weight.is_finite() {
            warn!("Total weight overflowed while merging.");
            return Err(TrailError::InvalidWeight {
                symbol: format!("{:?}", branch.symbols()),
                weight: branch.weight,
            });
        }
        heap.push(branch);
    }
    let root = heap.pop()?;

    info!(
        "Built code tree: {} symbols, height {}, total weight {}",
        root.leaf_count(),
        root.depth,
        root.weight
    );
    if opts.trace_tree {
        trace!("Code tree:\n{}", root);
    }
    Ok(root)
}

/// Validate and merge the weights, then make the leaves in symbol-code order.
fn seed_leaves<S, I>(frequencies: I) -> Result<Vec<SymbolNode<S>>>
where
    S: Symbol,
    I: IntoIterator<Item = (S, f64)>,
{
    let mut weights: FxHashMap<S, f64> = FxHashMap::default();
    for (symbol, weight) in frequencies {
        if !weight.is_finite() || weight < 0.0 {
            return Err(TrailError::InvalidWeight {
                symbol: format!("{:?}", symbol),
                weight,
            });
        }
        let total = weights.entry(symbol).or_insert(0.0);
        *total += weight;
        if !total.is_finite() {
            return Err(TrailError::InvalidWeight {
                symbol: format!("{:?}", symbol),
                weight: *total,
            });
        }
    }

    let mut leaves: Vec<SymbolNode<S>> = weights
        .into_iter()
        .filter(|&(_, weight)| weight > 0.0)
        .map(|(symbol, weight)| SymbolNode::leaf(symbol, weight))
        .collect();
    leaves.sort_by_key(|leaf| leaf.syms);
    Ok(leaves)
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::bit_trail::derive_trails;

    fn textbook() -> Vec<(char, f64)> {
        vec![
            ('A', 5.0),
            ('B', 9.0),
            ('C', 12.0),
            ('D', 13.0),
            ('E', 16.0),
            ('F', 45.0),
        ]
    }

    #[test]
    fn textbook_shape_test() {
        let root = build_tree(textbook()).unwrap();
        assert_eq!(root.weight, 100.0);
        assert_eq!(root.leaf_count(), 6);
        assert_eq!(root.depth, 4);
        assert_eq!(root.symbols(), vec!['F', 'C', 'D', 'A', 'B', 'E']);

        let trails = derive_trails(&root).unwrap();
        let text = |c: char| trails[&c].to_string();
        assert_eq!(text('F'), "0");
        assert_eq!(text('C'), "100");
        assert_eq!(text('D'), "101");
        assert_eq!(text('A'), "1100");
        assert_eq!(text('B'), "1101");
        assert_eq!(text('E'), "111");
    }

    #[test]
    fn insertion_order_test() {
        let forward = build_tree(textbook()).unwrap();
        let mut reversed = textbook();
        reversed.reverse();
        assert_eq!(build_tree(reversed).unwrap(), forward);
    }

    #[test]
    fn equal_weight_tie_break_test() {
        let root = build_tree(vec![('B', 2.0), ('A', 2.0)]).unwrap();
        // 'A' has the smaller key, so it is popped first and becomes the left kid
        assert_eq!(root.symbols(), vec!['A', 'B']);
    }

    #[test]
    fn zero_weights_skipped_test() {
        let root = build_tree(vec![(b'x', 0.0), (b'y', 1.0), (b'z', 3.0)]).unwrap();
        assert_eq!(root.symbols(), vec![b'y', b'z']);
    }

    #[test]
    fn duplicates_summed_test() {
        let root = build_tree(vec![('a', 1.0), ('b', 1.5), ('a', 1.0)]).unwrap();
        assert_eq!(root.weight, 3.5);
        // 'a' now weighs 2.0, more than 'b'
        assert_eq!(root.symbols(), vec!['b', 'a']);
    }

    #[test]
    fn empty_alphabet_test() {
        let empty: Vec<(char, f64)> = vec![];
        assert!(matches!(build_tree(empty), Err(TrailError::EmptyAlphabet)));
        assert!(matches!(
            build_tree(vec![('a', 0.0)]),
            Err(TrailError::EmptyAlphabet)
        ));
    }

    #[test]
    fn invalid_weight_test() {
        assert!(matches!(
            build_tree(vec![('a', 1.0), ('b', -2.0)]),
            Err(TrailError::InvalidWeight { .. })
        ));
        assert!(matches!(
            build_tree(vec![('a', f64::NAN)]),
            Err(TrailError::InvalidWeight { .. })
        ));
    }

    #[test]
    fn overflowing_weights_test() {
        // each weight is finite, the sum of the duplicates is not
        assert!(matches!(
            build_tree(vec![('a', f64::MAX), ('a', f64::MAX), ('b', 1.0)]),
            Err(TrailError::InvalidWeight { weight, .. }) if weight.is_infinite()
        ));
        // distinct symbols that only overflow once merged
        assert!(matches!(
            build_tree(vec![('a', f64::MAX), ('b', f64::MAX)]),
            Err(TrailError::InvalidWeight { weight, .. }) if weight.is_infinite()
        ));
    }

    #[test]
    fn single_symbol_test() {
        let root = build_tree(vec![('Z', 7.0)]).unwrap();
        assert!(root.is_leaf());
        assert_eq!(root.symbol(), Some('Z'));

        let opts = CoderOptions::new().single_symbol(SingleSymbolPolicy::Reject);
        assert!(matches!(
            build_tree_with(vec![('Z', 7.0)], &opts),
            Err(TrailError::DegenerateAlphabet { .. })
        ));
    }

    #[test]
    fn trace_tree_option_test() {
        let opts = CoderOptions::new().trace_tree(true);
        let root = build_tree_with(textbook(), &opts).unwrap();
        assert_eq!(root, build_tree(textbook()).unwrap());
    }
}
