//! Options that control how a code tree is built.

use std::fmt::{Display, Formatter};

/// What to do with an alphabet of exactly one distinct symbol.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum SingleSymbolPolicy {
    /// The lone symbol becomes the root leaf and gets the trail "0".
    #[default]
    OneBitTrail,
    /// Fail with `DegenerateAlphabet`.
    Reject,
}

impl Display for SingleSymbolPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Options for building a code tree.
#[derive(Clone, Copy, Debug)]
pub struct CoderOptions {
    /// Policy for single-symbol alphabets
    pub single_symbol: SingleSymbolPolicy,
    /// Log the finished tree structure at trace level
    pub trace_tree: bool,
}

impl CoderOptions {
    pub fn new() -> Self {
        Self {
            single_symbol: SingleSymbolPolicy::OneBitTrail,
            trace_tree: false,
        }
    }

    pub fn single_symbol(mut self, policy: SingleSymbolPolicy) -> Self {
        self.single_symbol = policy;
        self
    }

    pub fn trace_tree(mut self, on: bool) -> Self {
        self.trace_tree = on;
        self
    }
}

impl Default for CoderOptions {
    fn default() -> Self {
        Self::new()
    }
}
