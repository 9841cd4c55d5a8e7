// numwords-tokenize: Show how text is split and classified.
//
// Reads text from the arguments or stdin and prints one line per lexeme:
//
//   WORD        [   0..  16] двадцать         Ten 20
//   WHITESPACE  [  16..  17] " "
//   WORD        [  17..  27] коров
//
// Byte ranges refer to the input text. Multi-word lexemes (`decimal point`)
// print as one line.

use std::io::{self, Write};

use anyhow::Result;
use clap::Parser;
use numwords_cli::CommonArgs;
use numwords_core::AtomType;
use numwords_engine::lexeme::Lexeme;

#[derive(Parser)]
#[command(name = "numwords-tokenize")]
#[command(version)]
#[command(about = "Print the classified lexemes of a text", long_about = None)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Text to tokenize; stdin is read when omitted
    text: Vec<String>,
}

fn classification(lexeme: &Lexeme) -> String {
    let Some(token) = &lexeme.token else {
        return String::new();
    };
    let mut s = format!("{:?} {}", token.kind, token.value);
    if let Some(suffix) = &token.suffix {
        s.push_str(&format!(" suffix={suffix}"));
    }
    if lexeme.ambiguous_alone {
        s.push_str(" (ambiguous alone)");
    }
    s
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let handle = cli.common.init()?.handle()?;
    let input = numwords_cli::input_text(&cli.text)?;

    let stdout = io::stdout();
    let mut out = io::BufWriter::new(stdout.lock());
    for lexeme in handle.lexemes(&input) {
        let type_str = match lexeme.atom_type {
            AtomType::Word => "WORD",
            AtomType::Punctuation => "PUNCTUATION",
            AtomType::Whitespace => "WHITESPACE",
            AtomType::Unknown => "UNKNOWN",
        };
        let text = lexeme.text(&input);
        let display_text = if lexeme.atom_type == AtomType::Whitespace {
            format!("{text:?}")
        } else {
            text.to_string()
        };
        writeln!(
            out,
            "{type_str:11} [{:>4}..{:>4}] {display_text:16} {}",
            lexeme.start,
            lexeme.end,
            classification(&lexeme)
        )?;
    }
    out.flush()?;
    Ok(())
}
