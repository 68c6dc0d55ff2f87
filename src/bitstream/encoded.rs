//! The encoded stream, and the one-bit-at-a-time interfaces the codec talks to.
//!
//! The codec only ever needs to append one bit, or read the next bit (or learn that the
//! stream is over). `BitSink` and `BitSource` are those two operations. `EncodedStream` is
//! the in-memory implementation of both, and it can be packed into bytes through
//! `BitWriter` and unpacked through `BitReader`.

use std::fmt::{Display, Formatter};
use std::io;

use log::debug;

use crate::bitstream::bitreader::BitReader;
use crate::bitstream::bitwriter::BitWriter;
use crate::error::{Result, TrailError};

/// Destination for encoded bits.
pub trait BitSink {
    fn put_bit(&mut self, bit: bool);
}

/// Source of encoded bits.
///
/// Values are returned raw; the decoder rejects anything other than 0 or 1.
/// `Ok(None)` marks the end of the stream.
pub trait BitSource {
    fn next_bit(&mut self) -> Result<Option<u32>>;
}

/// An ordered sequence of bits, one per tree step.
///
/// Only meaningful to a decoder walking the same tree that produced it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncodedStream {
    bits: Vec<u8>,
}

impl EncodedStream {
    pub fn new() -> Self {
        Self { bits: Vec::new() }
    }

    /// Wrap raw bit values without checking them. The decoder reports any value
    /// other than 0 or 1 as `InvalidBit`.
    pub fn from_raw(bits: Vec<u8>) -> Self {
        Self { bits }
    }

    /// Parse the textual form: one `'0'` or `'1'` per bit.
    pub fn from_trail_text(text: &str) -> Result<Self> {
        let bits = text
            .chars()
            .enumerate()
            .map(|(position, ch)| match ch {
                '0' => Ok(0),
                '1' => Ok(1),
                other => Err(TrailError::InvalidBit {
                    position,
                    value: other as u32,
                }),
            })
            .collect::<Result<Vec<u8>>>()?;
        Ok(Self { bits })
    }

    /// Number of bits in the stream.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn as_raw(&self) -> &[u8] {
        &self.bits
    }

    /// A bit source reading this stream from the start.
    pub fn reader(&self) -> StreamReader<'_> {
        StreamReader {
            bits: &self.bits,
            cursor: 0,
        }
    }

    /// Pack the bits MSB-first into bytes. The last byte is padded with zeros, so the
    /// exact bit count is returned alongside the bytes.
    pub fn pack(&self) -> Result<(Vec<u8>, usize)> {
        let mut bw = BitWriter::with_capacity(self.bits.len() / 8 + 1);
        for (position, &value) in self.bits.iter().enumerate() {
            match value {
                0 => bw.put_bit(false),
                1 => bw.put_bit(true),
                _ => {
                    return Err(TrailError::InvalidBit {
                        position,
                        value: value as u32,
                    })
                }
            }
        }
        let (bytes, bit_count) = bw.finish();
        debug!("Packed {} bits into {} bytes", bit_count, bytes.len());
        Ok((bytes, bit_count))
    }

    /// Unpack `bit_count` bits from bytes written by [`pack`](EncodedStream::pack).
    /// Padding bits past `bit_count` are dropped.
    pub fn unpack(bytes: &[u8], bit_count: usize) -> Result<Self> {
        let available = bytes.len().saturating_mul(8);
        if bit_count > available {
            return Err(short_input(bit_count, available));
        }
        let mut br = BitReader::with_limit(bytes, bit_count);
        let mut bits = Vec::with_capacity(bit_count);
        while let Some(bit) = br.bit()? {
            bits.push(bit as u8);
        }
        if bits.len() < bit_count {
            return Err(short_input(bit_count, bits.len()));
        }
        Ok(Self { bits })
    }
}

fn short_input(expected: usize, found: usize) -> TrailError {
    io::Error::new(
        io::ErrorKind::UnexpectedEof,
        format!("expected {} bits, found {}", expected, found),
    )
    .into()
}

impl BitSink for EncodedStream {
    fn put_bit(&mut self, bit: bool) {
        self.bits.push(bit as u8);
    }
}

/// Textual form, one `'0'` or `'1'` per bit. Raw values above 1 show as `'?'`.
impl Display for EncodedStream {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text: String = self
            .bits
            .iter()
            .map(|&bit| match bit {
                0 => '0',
                1 => '1',
                _ => '?',
            })
            .collect();
        f.write_str(&text)
    }
}

/// Reads an `EncodedStream` one bit at a time.
#[derive(Debug)]
pub struct StreamReader<'a> {
    bits: &'a [u8],
    cursor: usize,
}

impl BitSource for StreamReader<'_> {
    fn next_bit(&mut self) -> Result<Option<u32>> {
        let bit = self.bits.get(self.cursor).map(|&b| b as u32);
        if bit.is_some() {
            self.cursor += 1;
        }
        Ok(bit)
    }
}
