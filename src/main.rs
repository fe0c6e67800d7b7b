//! rcc CLI
//!
//! Scans a C source file and prints one line per token as
//! `FILE:LINE:COL: TEXT`.

use std::fs;
use std::io::{self, BufWriter, Read, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, ValueEnum};
use thiserror::Error;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use rcc::{Diagnostic, LexError, Lexer, Token};

/// Dump the tokens of a C source file
#[derive(Parser, Debug)]
#[command(name = "rcc", version, about, long_about = None)]
struct Args {
    /// Source file to scan (`-` reads standard input)
    file: PathBuf,

    /// Print each token's kind before its text
    #[arg(short, long)]
    kinds: bool,

    /// When to color diagnostics
    #[arg(long, value_enum, default_value_t = ColorChoice::Auto)]
    color: ColorChoice,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG overrides
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum ColorChoice {
    Auto,
    Always,
    Never,
}

impl ColorChoice {
    fn apply(self) {
        match self {
            Self::Auto => {}
            Self::Always => colored::control::set_override(true),
            Self::Never => colored::control::set_override(false),
        }
    }
}

#[derive(Debug, Error)]
enum DriverError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("failed to write tokens: {0}")]
    Output(#[source] io::Error),
}

fn main() -> ExitCode {
    let args = Args::parse();
    args.color.apply();
    init_logging(args.verbose);

    let name = display_name(&args.file);

    let source = match read_source(&args.file) {
        Ok(source) => source,
        Err(e) => {
            let err = LexError::from(e);
            eprint!("{}", Diagnostic::new(&err).with_filename(&name));
            return ExitCode::FAILURE;
        }
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    match dump_tokens(&source, &name, args.kinds, &mut out) {
        Ok(count) => {
            info!(file = %name, tokens = count, "scan complete");
            ExitCode::SUCCESS
        }
        Err(DriverError::Lex(err)) => {
            // Tokens before the error are still shown
            flush_tokens(&mut out);
            // Malformed UTF-8 is quoted the way the lexer decoded it, as U+FFFD
            let text = String::from_utf8_lossy(&source);
            eprint!("{}", Diagnostic::with_source(&err, &text).with_filename(&name));
            ExitCode::FAILURE
        }
        Err(err @ DriverError::Output(_)) => {
            eprintln!("error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn display_name(path: &Path) -> String {
    if path.as_os_str() == "-" {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}

/// Read the whole source as raw bytes so diagnostics can quote it. Decoding
/// is left to the lexer.
fn read_source(path: &Path) -> io::Result<Vec<u8>> {
    if path.as_os_str() == "-" {
        let mut source = Vec::new();
        io::stdin().read_to_end(&mut source)?;
        Ok(source)
    } else {
        debug!(path = %path.display(), "reading source");
        fs::read(path)
    }
}

/// Pull tokens until end of input, writing each one. Returns the number of
/// tokens written.
fn dump_tokens<W: Write>(
    source: &[u8],
    name: &str,
    kinds: bool,
    out: &mut W,
) -> Result<usize, DriverError> {
    let mut lexer = Lexer::new(source);
    let mut count = 0;

    loop {
        let token = lexer.next_token()?;
        if token.is_eof() {
            break;
        }
        write_token(out, name, &token, kinds).map_err(DriverError::Output)?;
        count += 1;
    }

    out.flush().map_err(DriverError::Output)?;
    Ok(count)
}

/// Flush tokens written before a diagnostic. A failure is logged rather than
/// replacing the lexer error.
fn flush_tokens<W: Write>(out: &mut W) -> bool {
    match out.flush() {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "failed to flush tokens before the diagnostic");
            false
        }
    }
}

fn write_token<W: Write>(out: &mut W, name: &str, token: &Token, kinds: bool) -> io::Result<()> {
    if kinds {
        writeln!(out, "{}:{}: {} {}", name, token.position, token.kind, token.text)
    } else {
        writeln!(out, "{}:{}: {}", name, token.position, token.text)
    }
}
