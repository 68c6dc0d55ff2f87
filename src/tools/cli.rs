use clap::Parser;
use log::{info, LevelFilter};

use crate::tools::options::{CoderOptions, SingleSymbolPolicy};

/// Command line arguments for the driver - uses the external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    version,
    about = "Build Huffman bit trails for a text, encode it and decode it back",
    long_about = "
    Counts the characters of the input text, builds a code tree from those counts,
    prints the bit trail of every character, then encodes the text and decodes it
    again to check the round trip."
)]
pub struct Args {
    /// Text to encode. Ignored when --file is given
    #[clap()]
    pub text: Option<String>,

    /// Read the text to encode from this file
    #[clap(short = 'f', long = "file")]
    pub file: Option<String>,

    /// Fail on a text made of one distinct character instead of giving it the trail "0"
    #[clap(long = "reject-single")]
    pub reject_single: bool,

    /// Print the encoded bits
    #[clap(short = 'b', long = "bits")]
    pub show_bits: bool,

    /// Dump the code tree at trace level
    #[clap(long = "trace-tree")]
    pub trace_tree: bool,

    /// Sets verbosity. -v0 is silent, -v5 is chatty
    #[clap(short = 'v', default_value_t = 2)]
    pub v: u8,
}

impl Args {
    /// Options for the coder, taken from the flags.
    pub fn coder_options(&self) -> CoderOptions {
        let policy = if self.reject_single {
            SingleSymbolPolicy::Reject
        } else {
            SingleSymbolPolicy::OneBitTrail
        };
        CoderOptions::new()
            .single_symbol(policy)
            .trace_tree(self.trace_tree)
    }

    /// Log filter for the -v setting.
    pub fn level_filter(&self) -> LevelFilter {
        match self.v {
            0 => LevelFilter::Off,
            1 => LevelFilter::Error,
            2 => LevelFilter::Warn,
            3 => LevelFilter::Info,
            4 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    }

    /// Report the settings in use.
    pub fn report(&self) {
        info!("---- bittrail settings ----");
        info!("Verbosity set to {}", log::max_level());
        match &self.file {
            Some(s) => info!("Getting input from the file {}", s),
            None => info!("Getting input from the command line"),
        }
        info!("Single-symbol policy: {}", self.coder_options().single_symbol);
    }
}
