//Enable more cargo lint tests
#![warn(rust_2018_idioms)]

use std::fs;

use bittrail::bitstream::encoded::EncodedStream;
use bittrail::tools::cli::Args;
use bittrail::tools::freq_count::count_symbols;
use bittrail::{Coder, TrailError};

use clap::Parser;
use log::{error, info};
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

fn main() -> Result<(), TrailError> {
    let args = Args::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace
    if TermLogger::init(
        args.level_filter(),
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
    .is_err()
    {
        eprintln!("Logger already initialized; continuing without it.");
    }
    args.report();

    let text = match (&args.file, &args.text) {
        (Some(path), _) => fs::read_to_string(path)?,
        (None, Some(text)) => text.clone(),
        // An empty text fails below with EmptyAlphabet
        (None, None) => String::new(),
    };

    let coder = Coder::from_frequencies(count_symbols(text.chars()), &args.coder_options())?;

    let mut table: Vec<_> = coder.trails().iter().collect();
    table.sort_by(|a, b| a.1.len().cmp(&b.1.len()).then(a.0.cmp(b.0)));
    for (symbol, trail) in table {
        println!("{:?}\t{}", symbol, trail);
    }

    let stream = coder.encode_text(&text)?;
    let (packed, bit_count) = stream.pack()?;
    println!(
        "{} characters -> {} bits ({} bytes packed)",
        text.chars().count(),
        bit_count,
        packed.len()
    );
    if args.show_bits {
        println!("{}", stream);
    }

    let decoded = coder.decode_text(&EncodedStream::unpack(&packed, bit_count)?)?;
    if decoded != text {
        error!("Round trip failed: decoded text differs from the input.");
        std::process::exit(1);
    }
    info!("Done.\n");
    Ok(())
}
