// numwords-text2num: Parse number phrases.
//
// Reads one number phrase per line (or the arguments as a single phrase)
// and prints its value. Lines that do not parse are reported on stderr and
// make the tool exit with status 1.
//
// Usage:
//   numwords-text2num [OPTIONS] [TEXT]...
//
// Output:
//   1973                        (parsed)
//   error: <line>: <reason>     (on stderr)

use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use numwords_cli::CommonArgs;

#[derive(Parser)]
#[command(name = "numwords-text2num")]
#[command(version)]
#[command(about = "Parse number phrases into integers", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Phrase to parse; stdin is read line by line when omitted
    text: Vec<String>,
}

/// Returns whether every phrase parsed.
fn run(cli: &Cli) -> Result<bool> {
    let handle = cli.common.init()?.handle()?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    let mut all_ok = true;
    for line in numwords_cli::input_lines(&cli.text)? {
        let phrase = line.trim();
        if phrase.is_empty() {
            continue;
        }
        match handle.text2num(phrase) {
            Ok(value) => writeln!(out, "{value}")?,
            Err(e) => {
                tracing::debug!(phrase, error = %e, "phrase rejected");
                eprintln!("error: {phrase}: {e}");
                all_ok = false;
            }
        }
    }
    out.flush()?;
    Ok(all_ok)
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
