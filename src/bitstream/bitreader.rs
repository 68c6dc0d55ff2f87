//! BitReader: reads a packed bitstream MSB-first.
//!
//! NOTE: This module can read from any I/O source that supports the read() call.
//!

use std::io;

use crate::bitstream::encoded::BitSource;
use crate::error::Result;

const BUFFER_SIZE: usize = 64 * 1024;
const BIT_MASK: u8 = 0xff;

/// Reads bits from a packed source.
#[derive(Debug)]
pub struct BitReader<R> {
    buffer: Vec<u8>,
    cursor: usize,
    bit_index: usize,
    source: R,
    /// Bits handed out so far
    read: usize,
    /// Stop after this many bits, so padding at the end is never returned
    limit: Option<usize>,
}

impl<R: io::Read> BitReader<R> {
    /// Creates a new BitReader that reads until the source runs dry.
    ///
    /// The zero padding at the end of a packed stream is handed out like any other bit,
    /// so a decoder reading through this reader turns it into extra symbols. Read packed
    /// streams with [`with_limit`](BitReader::with_limit) and the bit count from packing.
    pub fn new(source: R) -> Self {
        Self {
            buffer: vec![0; BUFFER_SIZE],
            cursor: BUFFER_SIZE,
            bit_index: 0,
            source,
            read: 0,
            limit: None,
        }
    }

    /// Creates a BitReader that stops after `limit` bits.
    pub fn with_limit(source: R, limit: usize) -> Self {
        let mut br = Self::new(source);
        br.limit = Some(limit);
        br
    }

    /// Check (and refill) buffer. Returns true if we have data, false if there is no more
    fn have_data(&mut self) -> io::Result<bool> {
        // Only try to read more data when the buffer length is equal to the buffer cursor location
        if self.cursor == self.buffer.len() {
            self.buffer.resize(BUFFER_SIZE, 0);
            let size = loop {
                match self.source.read(&mut self.buffer) {
                    Ok(size) => break size,
                    Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                    Err(e) => return Err(e),
                }
            };
            // If nothing came back from our read attempt, then we have no more data.
            if size == 0 {
                return Ok(false);
            }
            // Adjust the buffer if we read less than the buffer size
            self.buffer.truncate(size);
            // Reset the cursor and bit index
            self.cursor = 0;
            self.bit_index = 0;
        }
        Ok(true)
    }

    /// Return the next bit (1 or 0), or None if there is no more data to read
    pub fn bit(&mut self) -> io::Result<Option<usize>> {
        if self.limit.map_or(false, |limit| self.read >= limit) {
            return Ok(None);
        }
        // If bit_index is == 0, check if we have a byte to read. Return None if we have no data
        if self.bit_index == 0 && !self.have_data()? {
            return Ok(None);
        }
        let bit =
            (self.buffer[self.cursor] & BIT_MASK >> self.bit_index) >> (7 - self.bit_index);
        self.bit_index += 1;
        self.bit_index %= 8;
        if self.bit_index == 0 {
            self.cursor += 1;
        }
        self.read += 1;
        Ok(Some(bit as usize))
    }

    /// Number of bits returned so far.
    pub fn bits_read(&self) -> usize {
        self.read
    }

    /// Debugging function. Report current position in the buffer.
    pub fn loc(&self) -> String {
        format!("[{}.{}]", self.cursor, self.bit_index)
    }
}

impl<R: io::Read> BitSource for BitReader<R> {
    fn next_bit(&mut self) -> Result<Option<u32>> {
        Ok(self.bit()?.map(|bit| bit as u32))
    }
}
