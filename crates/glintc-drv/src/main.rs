//! `glintc`, the driver binary for the semantic analyzer.
//!
//! Reads a JSON fixture pairing a source buffer with the [`Ast`] a real
//! lexer/parser would have produced for it (those phases are out of
//! scope, spec.md §1), runs [`glintc_sem::check_program`], and reports
//! diagnostics to stderr. Exit codes follow spec.md §6: `0` on a clean
//! compile, `1` if any non-fatal error was recorded, or the diagnostic's
//! own numeric code if a `Fatal` diagnostic terminated the run early.

mod error;
mod fixture;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use glintc_util::diagnostic::ColorConfig;
use glintc_util::span::SourceMap;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use error::DriverError;
use fixture::Fixture;

/// Semantic analyzer for the Glint language.
#[derive(Parser, Debug)]
#[command(name = "glintc")]
#[command(author = "Glint Team")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Runs semantic analysis over a parsed Glint AST fixture", long_about = None)]
struct Cli {
    /// Path to a JSON fixture: `{"source": "...", "ast": {...}}`.
    input: PathBuf,

    /// Print the populated symbol table after a successful check.
    #[arg(long)]
    emit_symbols: bool,

    /// Disable ANSI color in diagnostic output.
    #[arg(long, env = "NO_COLOR")]
    no_color: bool,

    /// Enable verbose tracing.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(DriverError::CompilationFailed(_, _)) => ExitCode::FAILURE,
        Err(other) => {
            tracing::error!("{other}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .try_init();
}

fn run(cli: &Cli) -> error::Result<()> {
    let fixture = Fixture::load(&cli.input)?;

    let mut source_map = SourceMap::new();
    let file = source_map.add_file(cli.input.to_string_lossy(), fixture.source.clone());

    let color = if cli.no_color { ColorConfig::Never } else { ColorConfig::Auto };
    let mut reporter = glintc_sem::Reporter::new(color, atty_stderr());

    tracing::debug!(file = %cli.input.display(), "running semantic analysis");

    let table = glintc_sem::check_program(
        &fixture.ast,
        &fixture.source,
        file,
        &mut reporter,
        Some(&source_map),
    );

    match table {
        Some(table) => {
            if cli.emit_symbols {
                print_symbols(&table);
            }
            Ok(())
        }
        None => Err(DriverError::CompilationFailed(
            reporter.error_count(),
            reporter.warning_count(),
        )),
    }
}

/// Serializes the module scope's symbols back out as JSON, a minimal
/// stand-in for "outputs to the code generator".
fn print_symbols(table: &glintc_sem::SymbolTable) {
    let symbols: Vec<_> = table.symbols(table.global()).collect();
    match serde_json::to_string_pretty(&symbols) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::error!("failed to serialize symbol table: {err}"),
    }
}

fn atty_stderr() -> bool {
    use std::io::IsTerminal;
    std::io::stderr().is_terminal()
}
