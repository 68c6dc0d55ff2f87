use rustc_hash::FxHashMap;

use crate::huffman_coding::node::Symbol;

/// Returns a count of each byte value in the input data.
pub fn freqs(data: &[u8]) -> Vec<u32> {
    let mut freqs = vec![0_u32; 256];
    data.iter().for_each(|&el| freqs[el as usize] += 1);
    freqs
}

/// Turn a 256-entry byte count into `(byte, weight)` pairs, skipping bytes never seen.
pub fn byte_weights(freqs: &[u32]) -> Vec<(u8, f64)> {
    freqs
        .iter()
        .enumerate()
        .take(256)
        .filter(|&(_, &count)| count > 0)
        .map(|(byte, &count)| (byte as u8, count as f64))
        .collect()
}

/// Count each symbol in a corpus.
pub fn count_symbols<S, I>(symbols: I) -> FxHashMap<S, f64>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let mut counts = FxHashMap::default();
    for symbol in symbols {
        *counts.entry(symbol).or_insert(0.0) += 1.0;
    }
    counts
}
