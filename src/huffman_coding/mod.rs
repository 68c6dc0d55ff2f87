//! The huffman module builds code trees, derives the bit trail of every symbol, and uses
//! them to encode symbol sequences into bits and decode them back.
//!
//! The pieces, leaf-first:
//! - node: leaves and branches, each with a weight and a tie-break key.
//! - heap_tree: the sorted priority container the tree is built from.
//! - tree_builder: pops the two lightest nodes and merges them until one root is left.
//! - bit_trail: walks the finished tree, "0" for left and "1" for right.
//! - codec: encodes with the trail table, decodes by walking the tree.
//!
//! Identical frequency tables always give identical trees. Equal weights are ordered by the
//! sum of the symbol codes in each node, so the shape never depends on input order.
//!
//! A finished tree is never edited. New frequencies mean a new tree and a new trail table.
//!

pub mod bit_trail;
pub mod codec;
pub mod heap_tree;
pub mod node;
pub mod tree_builder;
