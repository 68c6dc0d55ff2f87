//! End-to-end checks of the bit trail engine through the public API: frequency table in,
//! tree and trails built, symbols encoded and decoded back.

use bittrail::bitstream::bitreader::BitReader;
use bittrail::bitstream::bitwriter::BitWriter;
use bittrail::bitstream::encoded::EncodedStream;
use bittrail::huffman_coding::bit_trail::{derive_trails, TrailTable};
use bittrail::huffman_coding::codec::{decode, encode};
use bittrail::huffman_coding::tree_builder::build_tree;
use bittrail::tools::freq_count::{byte_weights, count_symbols, freqs};
use bittrail::tools::options::{CoderOptions, SingleSymbolPolicy};
use bittrail::{Coder, TrailError};

const TEXTBOOK: [(char, f64); 6] = [
    ('A', 5.0),
    ('B', 9.0),
    ('C', 12.0),
    ('D', 13.0),
    ('E', 16.0),
    ('F', 45.0),
];

const PROSE: &str = "The quick brown fox jumps over the lazy dog. \
    A baba da babble da dabble babble doo bee babble dabble dooble dee boo dooble daddle boo.";

/// Small xorshift generator so the sequences below are the same on every run.
fn pseudo_random(seed: u64, len: usize, modulo: u64) -> Vec<u64> {
    let mut state = seed;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            state % modulo
        })
        .collect()
}

fn assert_prefix_free<S: std::hash::Hash + Eq>(trails: &TrailTable<S>) {
    for (i, a) in trails.values().enumerate() {
        for (j, b) in trails.values().enumerate() {
            if i != j {
                assert!(!a.is_prefix_of(b), "{} is a prefix of {}", a, b);
            }
        }
    }
}

#[test]
fn textbook_scenario() {
    let root = build_tree(TEXTBOOK).unwrap();
    let trails = derive_trails(&root).unwrap();

    assert_eq!(trails[&'F'].len(), 1);
    let longest = trails.values().map(|t| t.len()).max().unwrap();
    assert_eq!(trails[&'A'].len(), longest);
    assert_eq!(trails[&'B'].len(), longest);

    let fab: Vec<char> = "FAB".chars().collect();
    let stream = encode(&fab, &trails).unwrap();
    assert_eq!(decode(&stream, &root).unwrap(), fab);
}

#[test]
fn round_trip_prose() {
    let coder = Coder::from_frequencies(count_symbols(PROSE.chars()), &CoderOptions::default())
        .unwrap();
    let stream = coder.encode_text(PROSE).unwrap();
    assert!(stream.len() < PROSE.len() * 8);
    assert_eq!(coder.decode_text(&stream).unwrap(), PROSE);
}

#[test]
fn round_trip_random_bytes() {
    for (seed, alphabet) in [(0xdeadcafe_u64, 2_u64), (0x1234_5678, 7), (0x0bad_f00d, 200)] {
        let data: Vec<u8> = pseudo_random(seed, 2000, alphabet)
            .into_iter()
            .map(|v| v as u8)
            .collect();
        let coder =
            Coder::from_frequencies(byte_weights(&freqs(&data)), &CoderOptions::default())
                .unwrap();
        let stream = coder.encode(&data).unwrap();
        assert_eq!(coder.decode(&stream).unwrap(), data, "seed {:#x}", seed);
    }
}

#[test]
fn round_trip_skewed_weights() {
    // Fibonacci weights give the deepest possible tree
    let mut weights = vec![1.0, 1.0];
    while weights.len() < 30 {
        let n = weights.len();
        weights.push(weights[n - 1] + weights[n - 2]);
    }
    let freqs: Vec<(u16, f64)> = weights
        .iter()
        .enumerate()
        .map(|(i, &w)| (1000 + i as u16, w))
        .collect();
    let coder = Coder::from_frequencies(freqs, &CoderOptions::default()).unwrap();
    assert_eq!(coder.root().depth, 29);
    assert_prefix_free(coder.trails());

    let data: Vec<u16> = pseudo_random(77, 500, 30)
        .into_iter()
        .map(|v| 1000 + v as u16)
        .collect();
    let stream = coder.encode(&data).unwrap();
    assert_eq!(coder.decode(&stream).unwrap(), data);
}

#[test]
fn trails_are_prefix_free() {
    let counts = count_symbols(PROSE.chars());
    let root = build_tree(counts).unwrap();
    assert_prefix_free(&derive_trails(&root).unwrap());
    assert_prefix_free(&derive_trails(&build_tree(TEXTBOOK).unwrap()).unwrap());
}

#[test]
fn build_is_deterministic() {
    let forward: Vec<(char, f64)> = count_symbols(PROSE.chars()).into_iter().collect();
    let mut sorted = forward.clone();
    sorted.sort_by(|a, b| a.0.cmp(&b.0));
    let mut reversed = sorted.clone();
    reversed.reverse();

    let expected = derive_trails(&build_tree(sorted).unwrap()).unwrap();
    for _ in 0..3 {
        assert_eq!(derive_trails(&build_tree(forward.clone()).unwrap()).unwrap(), expected);
        assert_eq!(derive_trails(&build_tree(reversed.clone()).unwrap()).unwrap(), expected);
    }
}

#[test]
fn weight_monotonicity() {
    let counts: Vec<(char, f64)> = count_symbols(PROSE.chars()).into_iter().collect();
    let trails = derive_trails(&build_tree(counts.clone()).unwrap()).unwrap();
    for &(a, wa) in &counts {
        for &(b, wb) in &counts {
            if wa < wb {
                assert!(
                    trails[&a].len() >= trails[&b].len(),
                    "{:?} ({}) has a shorter trail than {:?} ({})",
                    a,
                    wa,
                    b,
                    wb
                );
            }
        }
    }
}

#[test]
fn equal_weight_tie_break() {
    for _ in 0..5 {
        let trails = derive_trails(&build_tree([('B', 2.0), ('A', 2.0)]).unwrap()).unwrap();
        assert_eq!(trails[&'A'].to_string(), "0");
        assert_eq!(trails[&'B'].to_string(), "1");
    }
}

#[test]
fn single_symbol_policies() {
    let coder = Coder::from_frequencies([('Z', 7.0)], &CoderOptions::default()).unwrap();
    assert_eq!(coder.trail('Z').unwrap().to_string(), "0");
    let stream = coder.encode_text("ZZ").unwrap();
    assert_eq!(coder.decode_text(&stream).unwrap(), "ZZ");

    let reject = CoderOptions::new().single_symbol(SingleSymbolPolicy::Reject);
    assert!(matches!(
        Coder::from_frequencies([('Z', 7.0)], &reject),
        Err(TrailError::DegenerateAlphabet { .. })
    ));
}

#[test]
fn unknown_symbol_is_an_error() {
    let coder = Coder::from_frequencies(TEXTBOOK, &CoderOptions::default()).unwrap();
    assert!(matches!(
        coder.encode_text("Q"),
        Err(TrailError::UnknownSymbol { .. })
    ));
    assert!(matches!(
        coder.encode_text("FAQ"),
        Err(TrailError::UnknownSymbol { .. })
    ));
}

#[test]
fn empty_alphabet_is_an_error() {
    assert!(matches!(
        Coder::<char>::from_frequencies([], &CoderOptions::default()),
        Err(TrailError::EmptyAlphabet)
    ));
}

#[test]
fn malformed_streams() {
    let coder = Coder::from_frequencies(TEXTBOOK, &CoderOptions::default()).unwrap();
    assert!(matches!(
        EncodedStream::from_trail_text("01 1"),
        Err(TrailError::InvalidBit { position: 2, .. })
    ));
    assert!(matches!(
        coder.decode(&EncodedStream::from_raw(vec![1, 2])),
        Err(TrailError::InvalidBit { position: 1, value: 2 })
    ));
    // "F" followed by the first three bits of "A"
    let truncated = EncodedStream::from_trail_text("0110").unwrap();
    assert_eq!(coder.decode_text(&truncated).unwrap(), "F");
}

#[test]
fn packed_bytes_round_trip() {
    let coder = Coder::from_frequencies(count_symbols(PROSE.chars()), &CoderOptions::default())
        .unwrap();
    let stream = coder.encode_text(PROSE).unwrap();

    let (bytes, bit_count) = stream.pack().unwrap();
    assert_eq!(bit_count, stream.len());
    assert_eq!(bytes.len(), (bit_count + 7) / 8);
    let restored = EncodedStream::unpack(&bytes, bit_count).unwrap();
    assert_eq!(coder.decode_text(&restored).unwrap(), PROSE);

    let symbols: Vec<char> = PROSE.chars().collect();
    let mut bw = BitWriter::new();
    coder.encode_into(&symbols, &mut bw).unwrap();
    let (direct, direct_bits) = bw.finish();
    assert_eq!(direct, bytes);

    let mut br = BitReader::with_limit(direct.as_slice(), direct_bits);
    assert_eq!(coder.decode_from(&mut br).unwrap(), symbols);
}
