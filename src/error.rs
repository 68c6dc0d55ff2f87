//! Error types for the bit trail engine.
//!
//! Every failure in the engine is local and synchronous. Nothing is retried; each
//! error is handed back to the caller as an explicit `Err`.

use thiserror::Error;

/// All the ways building, deriving, encoding or decoding can fail.
#[derive(Debug, Error)]
pub enum TrailError {
    /// No symbol in the frequency table has a positive weight.
    #[error("empty alphabet: no symbol has a positive weight")]
    EmptyAlphabet,

    /// Exactly one distinct symbol, and the options ask for such alphabets to be rejected.
    #[error("degenerate alphabet: only the symbol {symbol} has a positive weight")]
    DegenerateAlphabet { symbol: String },

    /// A weight was negative, NaN or infinite.
    #[error("invalid weight {weight} for symbol {symbol}")]
    InvalidWeight { symbol: String, weight: f64 },

    /// Peek or pop on an empty priority container. Indicates a builder defect.
    #[error("priority container is empty")]
    EmptyContainer,

    /// Encode was asked for a symbol that has no trail in the table.
    #[error("symbol {symbol} has no bit trail in this tree")]
    UnknownSymbol { symbol: String },

    /// A bit value outside of {0, 1} was found in the stream.
    #[error("invalid bit {value:#04x} at position {position}")]
    InvalidBit { position: usize, value: u32 },

    /// Descent was attempted past a leaf.
    #[error("traversal error at bit {position}: no child to descend into")]
    TraversalError { position: usize },

    /// The tree handed to the deriver is not a valid code tree.
    #[error("corrupt tree: symbol {symbol} appears on more than one leaf")]
    CorruptTree { symbol: String },

    /// I/O failure in a bit source or in the driver.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TrailError>;
