//! The tools module provides helpers around the engine.
//!
//! The tools are:
//! - cli: Command line interface for the driver binary.
//! - freq_count: Frequency counts from an in-memory corpus.
//! - options: Options controlling how code trees are built.
//!
pub mod cli;
pub mod freq_count;
pub mod options;
