//! texprose CLI - strip LaTeX down to prose

#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::fs;
#[cfg(feature = "cli")]
use std::io::{self, Read, Write};
#[cfg(feature = "cli")]
use texprose::{count_words, strip_latex_with_options, OutputMode, StripOptions, StripWarning};

#[cfg(feature = "cli")]
#[derive(Parser)]
#[command(name = "texprose")]
#[command(version)]
#[command(about = "Strip LaTeX markup for proofreading, word counting or text-to-speech", long_about = None)]
struct Cli {
    /// Input file path (reads from stdin if not provided)
    input_file: Option<String>,

    /// Output file path (writes to stdout if not provided)
    #[arg(short, long)]
    output: Option<String>,

    /// Treat the input as document body (no \begin{document} needed)
    #[arg(long)]
    document: bool,

    /// Print the word count instead of the text; simple math counts as one word
    #[arg(long)]
    count: bool,

    /// Produce text for reading aloud: references and footnotes are spoken
    #[arg(long)]
    tts: bool,

    /// Strict mode: unterminated constructs are errors
    #[arg(long)]
    strict: bool,

    /// Quiet mode: suppress warning output to stderr
    #[arg(short, long)]
    quiet: bool,

    /// Use colored output for diagnostics
    #[arg(long)]
    color: bool,
}

#[cfg(feature = "cli")]
impl Cli {
    fn options(&self) -> StripOptions {
        // --count wins over --tts
        let output_mode = if self.count {
            OutputMode::WordCount
        } else if self.tts {
            OutputMode::TextToSpeech
        } else {
            OutputMode::Plain
        };
        StripOptions::new()
            .with_output_mode(output_mode)
            .with_document(self.document)
            .with_strict(self.strict)
    }
}

#[cfg(feature = "cli")]
fn main() -> io::Result<()> {
    let cli = Cli::parse();

    let input = match cli.input_file {
        Some(ref path) => fs::read_to_string(path)?,
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let options = cli.options();
    let stripped = match strip_latex_with_options(&input, &options) {
        Ok(stripped) => stripped,
        Err(err) => {
            eprintln!(
                "{}error:{} {}",
                if cli.color { "\x1b[31m" } else { "" },
                if cli.color { "\x1b[0m" } else { "" },
                err
            );
            std::process::exit(1);
        }
    };

    if !cli.quiet && stripped.has_warnings() {
        print_diagnostics_to_stderr(&stripped.warnings, cli.color);
    }

    let result = match options.output_mode {
        OutputMode::WordCount => count_words(&stripped.content).to_string(),
        OutputMode::Plain | OutputMode::TextToSpeech => stripped.content,
    };

    match cli.output {
        Some(path) => {
            let mut file = fs::File::create(&path)?;
            writeln!(file, "{}", result)?;
            if !cli.quiet {
                eprintln!("✓ Output written to: {}", path);
            }
        }
        None => {
            println!("{}", result);
        }
    }

    Ok(())
}

/// Print warnings to stderr, optionally colored
#[cfg(feature = "cli")]
fn print_diagnostics_to_stderr(warnings: &[StripWarning], use_color: bool) {
    let color = if use_color { "\x1b[33m" } else { "" };
    let reset = if use_color { "\x1b[0m" } else { "" };

    eprintln!("{}Warnings ({}):{}", color, warnings.len(), reset);
    for warning in warnings {
        let location = match (warning.line, warning.column) {
            (Some(line), Some(column)) => format!("{}:{}: ", line, column),
            (Some(line), None) => format!("{}: ", line),
            _ => String::new(),
        };
        eprintln!("  {}[warning]{} {}{}", color, reset, location, warning.message);
        if let Some(ref suggestion) = warning.suggestion {
            eprintln!("    help: {}", suggestion);
        }
    }
}


#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("CLI feature not enabled. Build with --features cli");
    eprintln!();
    eprintln!("Usage:");
    eprintln!("  cargo install texprose --features cli");
    eprintln!("  texprose [OPTIONS] [INPUT_FILE]");
}
