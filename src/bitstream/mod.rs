//! The bitstream module is the I/O edge of the engine.
//!
//! The codec itself only appends one bit at a time or asks for the next bit. This module
//! supplies those two interfaces, the in-memory `EncodedStream`, and the MSB-first
//! packing of bits into bytes (and back) for callers that want to store a stream.
//!
//! Packing pads the last byte with zeros. The exact bit count travels with the bytes and
//! the reader stops there, so padding is never decoded.
//!
pub mod bitreader;
pub mod bitwriter;
pub mod encoded;
