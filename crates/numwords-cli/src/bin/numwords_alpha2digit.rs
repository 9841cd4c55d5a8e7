// numwords-alpha2digit: Rewrite number words as digits.
//
// Reads text from the arguments, or line by line from stdin, and prints it
// with every number phrase replaced by digits.
//
// Usage:
//   numwords-alpha2digit [OPTIONS] [TEXT]...
//
// Examples:
//   numwords-alpha2digit двадцать пять коров
//   echo "twelve point ninety nine" | numwords-alpha2digit -l en

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use numwords_cli::{CommonArgs, ScanArgs};

#[derive(Parser)]
#[command(name = "numwords-alpha2digit")]
#[command(version)]
#[command(about = "Rewrite number words as digits", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    #[command(flatten)]
    scan: ScanArgs,

    /// Text to rewrite; stdin is read when omitted
    text: Vec<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = cli.common.init()?;
    cli.scan.apply(&mut config.alpha2digit);
    let handle = config.handle()?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for line in numwords_cli::input_lines(&cli.text)? {
        writeln!(out, "{}", handle.alpha2digit(&line))?;
    }
    out.flush()?;
    Ok(())
}
