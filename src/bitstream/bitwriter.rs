use crate::bitstream::encoded::BitSink;

/// Packs bits MSB-first into an in-memory byte buffer.
#[derive(Debug)]
pub struct BitWriter {
    /// Output buffer holding the packed bytes.
    output: Vec<u8>,
    /// Private queue to hold bits that are waiting to be put as bytes into the output buffer.
    queue: u64,
    /// Count of valid bits in the queue.
    q_bits: u8,
    /// Total bits written, padding excluded.
    bit_count: usize,
}

impl BitWriter {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Create a BitWriter with room for `bytes` packed bytes.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            queue: 0,
            q_bits: 0,
            bit_count: 0,
        }
    }

    /// If the queue is close to full, move all full bytes to the output buffer.
    fn push_queue(&mut self) {
        if self.q_bits > 56 {
            while self.q_bits > 7 {
                let byte = (self.queue >> (self.q_bits - 8)) as u8;
                self.output.push(byte); //push the packed byte out
                self.q_bits -= 8; //adjust the count of bits left in the queue
            }
        }
    }

    /// Put a single bit on the stream.
    pub fn out1(&mut self, bit: bool) {
        // Make sure the queue is empty enough to hold the data
        self.push_queue();
        self.queue <<= 1;
        self.queue |= bit as u64;
        self.q_bits += 1;
        self.bit_count += 1;
    }

    /// Number of bits written so far, not counting padding.
    pub fn bit_count(&self) -> usize {
        self.bit_count
    }

    /// Flushes the remaining bits (1-7) from the queue, padding with 0s in the least
    /// signficant bits.
    fn flush(&mut self) {
        // First push out all the full bytes
        while self.q_bits > 7 {
            let byte = (self.queue >> (self.q_bits - 8)) as u8;
            self.output.push(byte);
            self.q_bits -= 8;
        }
        // Then push out the remaining bits
        if self.q_bits > 0 {
            let mut byte = (self.queue & (0xff_u64 >> (8 - self.q_bits))) as u8;
            byte <<= 8 - self.q_bits;
            self.output.push(byte);
            self.q_bits = 0;
        }
    }

    /// Flush and hand back the packed bytes with the exact number of bits written.
    pub fn finish(mut self) -> (Vec<u8>, usize) {
        self.flush();
        (self.output, self.bit_count)
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl BitSink for BitWriter {
    fn put_bit(&mut self, bit: bool) {
        self.out1(bit);
    }
}
