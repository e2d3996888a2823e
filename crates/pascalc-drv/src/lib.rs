//! The `pascalc` command-line driver: reads a source file, runs it
//! through the lexer and parser, and reports whatever diagnostics come
//! out. There is no further pipeline here — no semantic analysis, no
//! code generation — this crate only wires the two front-end crates to
//! a file on disk and to stdout/stderr.
//!
//! Argument handling distinguishes two kinds of failure. A *host*
//! failure (the file doesn't exist, isn't readable, or the arguments
//! don't parse) never reaches the lexer at all and is reported as a
//! single `pascalc: ...` line. A *source* failure is one or more
//! [`pascalc_util::Diagnostic`]s emitted while lexing or parsing; those
//! are printed in the driver's own `file:line:column: Category: message`
//! format and the process still exits non-zero, but no extra banner is
//! added on top of them.

use std::fmt;
use std::path::PathBuf;
use std::rc::Rc;

use pascalc_util::{Handler, Token};

/// Parsed command-line arguments for a single compilation.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_path: PathBuf,
    pub emit_tokens: bool,
    pub emit_ast: bool,
    pub verbose: bool,
}

/// What `parse_args` decided to do with argv.
#[derive(Debug, Clone)]
pub enum Cli {
    Help,
    Version,
    Run(Config),
}

/// Failures that never involve a source file's contents.
#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("cannot read '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("unrecognized argument '{0}'")]
    InvalidArgument(String),
    #[error("missing required <source.pas> argument")]
    MissingSource,
}

/// Whether a completed run had any source diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitOutcome {
    Clean,
    DirtySource,
}

pub fn parse_args<S: AsRef<str>>(args: &[S]) -> Result<Cli, HostError> {
    let mut source_path = None;
    let mut emit_tokens = false;
    let mut emit_ast = false;
    let mut verbose = false;

    for arg in args {
        match arg.as_ref() {
            "--help" | "-h" => return Ok(Cli::Help),
            "--version" | "-V" => return Ok(Cli::Version),
            "--emit-tokens" => emit_tokens = true,
            "--emit-ast" => emit_ast = true,
            "--verbose" => verbose = true,
            other if other.starts_with('-') => {
                return Err(HostError::InvalidArgument(other.to_string()));
            }
            other => {
                if source_path.is_some() {
                    return Err(HostError::InvalidArgument(other.to_string()));
                }
                source_path = Some(PathBuf::from(other));
            }
        }
    }

    let source_path = source_path.ok_or(HostError::MissingSource)?;
    Ok(Cli::Run(Config {
        source_path,
        emit_tokens,
        emit_ast,
        verbose,
    }))
}

pub fn print_help() {
    println!("pascalc {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Usage: pascalc <source.pas> [options]");
    println!();
    println!("Options:");
    println!("  --emit-tokens   print the token stream and stop");
    println!("  --emit-ast      print the parsed program");
    println!("  --verbose       print phase progress to stderr");
    println!("  --version, -V   print the version and exit");
    println!("  --help, -h      print this help and exit");
}

/// Reads `config.source_path`, lexes and (unless `--emit-tokens` was
/// given) parses it, and prints diagnostics and any requested
/// intermediate output. A host error (the file can't be read) returns
/// `Err` before any lexer or parser state is built; a dirty source
/// returns `Ok(ExitOutcome::DirtySource)` after the diagnostics have
/// already been printed.
pub fn run(config: &Config) -> anyhow::Result<ExitOutcome> {
    let source = std::fs::read_to_string(&config.source_path).map_err(|source| HostError::Unreadable {
        path: config.source_path.clone(),
        source,
    })?;

    let file_name: Rc<str> = config.source_path.display().to_string().into();
    let mut handler = Handler::new();

    if config.emit_tokens {
        if config.verbose {
            eprintln!("pascalc: lexing {}", config.source_path.display());
        }
        for token in lex_all(&source, file_name, &mut handler) {
            println!("{}", DisplayToken(&token));
        }
    } else {
        if config.verbose {
            eprintln!("pascalc: parsing {}", config.source_path.display());
        }
        let outcome = pascalc_par::parse_source(&source, file_name, &mut handler);
        if config.emit_ast {
            if let Some(program) = &outcome.program {
                println!("{:#?}", program);
            }
        }
    }

    for diagnostic in handler.diagnostics() {
        eprintln!("{}", diagnostic);
    }

    if handler.has_errors() {
        Ok(ExitOutcome::DirtySource)
    } else {
        Ok(ExitOutcome::Clean)
    }
}

fn lex_all(source: &str, file_name: Rc<str>, handler: &mut Handler) -> Vec<Token> {
    let mut lexer = pascalc_lex::Lexer::new(source, file_name, handler);
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let is_eof = token.is_eof();
        tokens.push(token);
        if is_eof {
            break;
        }
    }
    tokens
}

/// A one-line rendering of a token for `--emit-tokens`, kept separate
/// from `Token`'s own `Debug` output so the column ordering matches
/// what a reader scanning a token dump actually wants first.
struct DisplayToken<'a>(&'a Token);

impl fmt::Display for DisplayToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?} {:?}", self.0.location, self.0.kind, self.0.lexeme)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_flag_is_recognized_before_a_missing_source() {
        let cli = parse_args(&["--help"]).unwrap();
        assert!(matches!(cli, Cli::Help));
    }

    #[test]
    fn missing_source_is_a_host_error() {
        let err = parse_args::<&str>(&[]).unwrap_err();
        assert!(matches!(err, HostError::MissingSource));
    }

    #[test]
    fn unknown_flag_is_a_host_error() {
        let err = parse_args(&["--bogus", "a.pas"]).unwrap_err();
        assert!(matches!(err, HostError::InvalidArgument(_)));
    }

    #[test]
    fn run_reports_a_missing_file_as_a_host_error() {
        let config = Config {
            source_path: PathBuf::from("/no/such/file.pas"),
            emit_tokens: false,
            emit_ast: false,
            verbose: false,
        };
        let err = run(&config).unwrap_err();
        assert!(err.to_string().contains("cannot read"));
    }
}
