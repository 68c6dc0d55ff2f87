//! Encoding symbols into bit trails, and walking the tree to decode them.

use log::{debug, info, warn};

use super::bit_trail::{derive_trails, BitTrail, TrailTable};
use super::node::{NodeData, Symbol, SymbolNode};
use super::tree_builder::build_tree_with;
use crate::bitstream::encoded::{BitSink, BitSource, EncodedStream};
use crate::error::{Result, TrailError};
use crate::tools::options::CoderOptions;

/// Encode `symbols` into a new stream.
pub fn encode<S: Symbol>(symbols: &[S], trails: &TrailTable<S>) -> Result<EncodedStream> {
    let mut stream = EncodedStream::new();
    encode_into(symbols, trails, &mut stream)?;
    Ok(stream)
}

/// Append the trail of each symbol to `sink`, in order. Returns the number of bits written.
///
/// A symbol without a trail fails with `UnknownSymbol`. Trails of the symbols before it
/// have already been written to the sink by then.
pub fn encode_into<S: Symbol, W: BitSink>(
    symbols: &[S],
    trails: &TrailTable<S>,
    sink: &mut W,
) -> Result<usize> {
    let mut written = 0;
    for symbol in symbols {
        let trail = trails.get(symbol).ok_or_else(|| TrailError::UnknownSymbol {
            symbol: format!("{:?}", symbol),
        })?;
        trail.bits().iter().for_each(|&bit| sink.put_bit(bit));
        written += trail.len();
    }
    debug!("Encoded {} symbols into {} bits", symbols.len(), written);
    Ok(written)
}

/// Decode a whole stream against the tree that produced it.
pub fn decode<S: Symbol>(stream: &EncodedStream, root: &SymbolNode<S>) -> Result<Vec<S>> {
    decode_from(&mut stream.reader(), root)
}

/// Walk the tree from the root, one bit at a time: 0 goes left, 1 goes right. Each leaf
/// reached emits its symbol and sends the walk back to the root.
///
/// Bits left over at the end that do not reach a leaf are dropped. For a root that is a
/// leaf, every 0 bit emits the symbol and a 1 bit fails with `TraversalError`.
///
/// The source decides where the stream ends. For packed bytes, use a
/// [`BitReader::with_limit`](crate::bitstream::bitreader::BitReader::with_limit) so the
/// padding is never decoded.
pub fn decode_from<S: Symbol, R: BitSource>(source: &mut R, root: &SymbolNode<S>) -> Result<Vec<S>> {
    let mut out = Vec::new();
    let mut node = root;
    let mut position = 0;
    // Bits consumed since the walk last left the root
    let mut pending = 0;

    while let Some(value) = source.next_bit()? {
        let bit = match value {
            0 => false,
            1 => true,
            _ => return Err(TrailError::InvalidBit { position, value }),
        };
        node = match node.kid(bit) {
            Some(kid) => kid,
            None if !bit && root.is_leaf() => root,
            None => return Err(TrailError::TraversalError { position }),
        };
        position += 1;
        pending += 1;

        if let NodeData::Leaf(symbol) = node.node_data {
            out.push(symbol);
            node = root;
            pending = 0;
        }
    }

    if pending > 0 {
        warn!("Dropped {} trailing bits that did not reach a leaf", pending);
    }
    debug!("Decoded {} bits into {} symbols", position, out.len());
    Ok(out)
}

/// A tree and the trail table derived from it, kept together so the table is never
/// used with a different tree.
#[derive(Debug, Clone)]
pub struct Coder<S: Symbol> {
    root: SymbolNode<S>,
    trails: TrailTable<S>,
}

impl<S: Symbol> Coder<S> {
    /// Take ownership of a finished tree and derive its trails.
    pub fn new(root: SymbolNode<S>) -> Result<Self> {
        let trails = derive_trails(&root)?;
        Ok(Self { root, trails })
    }

    /// Build the tree and its trails from a frequency table.
    pub fn from_frequencies<I>(frequencies: I, opts: &CoderOptions) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
    {
        let root = build_tree_with(frequencies, opts)?;
        let coder = Self::new(root)?;
        info!("Coder ready with {} bit trails", coder.trails.len());
        Ok(coder)
    }

    pub fn encode(&self, symbols: &[S]) -> Result<EncodedStream> {
        encode(symbols, &self.trails)
    }

    pub fn encode_into<W: BitSink>(&self, symbols: &[S], sink: &mut W) -> Result<usize> {
        encode_into(symbols, &self.trails, sink)
    }

    pub fn decode(&self, stream: &EncodedStream) -> Result<Vec<S>> {
        decode(stream, &self.root)
    }

    pub fn decode_from<R: BitSource>(&self, source: &mut R) -> Result<Vec<S>> {
        decode_from(source, &self.root)
    }

    /// Number of bits `symbols` would encode to.
    pub fn encoded_len(&self, symbols: &[S]) -> Result<usize> {
        symbols.iter().try_fold(0, |total, symbol| {
            self.trail(*symbol)
                .map(|trail| total + trail.len())
                .ok_or_else(|| TrailError::UnknownSymbol {
                    symbol: format!("{:?}", symbol),
                })
        })
    }

    pub fn trail(&self, symbol: S) -> Option<&BitTrail> {
        self.trails.get(&symbol)
    }

    pub fn trails(&self) -> &TrailTable<S> {
        &self.trails
    }

    pub fn root(&self) -> &SymbolNode<S> {
        &self.root
    }

    pub fn into_root(self) -> SymbolNode<S> {
        self.root
    }
}

impl Coder<char> {
    pub fn encode_text(&self, text: &str) -> Result<EncodedStream> {
        self.encode(&text.chars().collect::<Vec<char>>())
    }

    pub fn decode_text(&self, stream: &EncodedStream) -> Result<String> {
        Ok(self.decode(stream)?.into_iter().collect())
    }
}
