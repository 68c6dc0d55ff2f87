//! Huffman bit trails.
//!
//! Builds a Huffman code tree from symbol frequencies, derives the bit trail ("0" for each
//! left descent, "1" for each right descent) of every symbol, and uses the tree to encode a
//! sequence of symbols into bits and decode it back exactly.
//!
//! Tree shapes are deterministic: equal weights are ordered by the sum of the symbol codes
//! in each node, so the same frequency table gives the same trails on every run.
//!
//! Basic usage:
//!
//! ```
//! use bittrail::huffman_coding::codec::Coder;
//! use bittrail::tools::options::CoderOptions;
//!
//! let freqs = vec![('A', 5.0), ('B', 9.0), ('C', 12.0), ('D', 13.0), ('E', 16.0), ('F', 45.0)];
//! let coder = Coder::from_frequencies(freqs, &CoderOptions::default())?;
//! let stream = coder.encode_text("FAB")?;
//! assert_eq!(stream.to_string(), "011001101");
//! assert_eq!(coder.decode_text(&stream)?, "FAB");
//! # Ok::<(), bittrail::error::TrailError>(())
//! ```
//!
pub mod bitstream;
pub mod error;
pub mod huffman_coding;
pub mod tools;

pub use error::{Result, TrailError};
pub use huffman_coding::codec::Coder;
