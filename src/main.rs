use std::{
    io::{self, BufWriter},
    path::PathBuf,
};

use clap::Parser;
use tracing::error;
use tracing_subscriber::{fmt::format::FmtSpan, EnvFilter};

use xmlwalk::{
    error::{Error, ErrorKind, IOError},
    parser::{DEFAULT_MAX_DEPTH, DEFAULT_MAX_SIZE, DEFAULT_NODES_LIMIT},
    run, FormatConfig, ParserConfig, RunOptions,
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// XML file to read; prompts when missing or not an existing file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Reject documents that contain a DOCTYPE
    #[arg(long)]
    no_dtd: bool,

    /// Maximum number of nodes the parser may create
    #[arg(long, default_value_t = DEFAULT_NODES_LIMIT)]
    nodes_limit: u32,

    /// Maximum input file size in bytes
    #[arg(long, default_value_t = DEFAULT_MAX_SIZE)]
    max_size: u64,

    /// Maximum element nesting depth
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: usize,
}

impl Args {
    fn parser_config(&self) -> ParserConfig {
        ParserConfig {
            allow_dtd: !self.no_dtd,
            nodes_limit: self.nodes_limit,
            max_size: self.max_size,
            max_depth: self.max_depth,
        }
    }

    fn into_options(self) -> RunOptions {
        RunOptions {
            parser: self.parser_config(),
            file: self.file,
            format: FormatConfig::default(),
        }
    }
}

fn main() {
    // Logs go to stderr, stdout carries the tree
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_span_events(FmtSpan::CLOSE)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let options = Args::parse().into_options();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = BufWriter::new(io::stdout().lock());

    if let Err(e) = run(&options, &mut input, &mut output) {
        report(&e);
    }
}

// Failures are reported but do not change the exit status.
#[allow(clippy::print_stderr)]
fn report(err: &Error) {
    match err.kind() {
        ErrorKind::Config(_) => {
            eprintln!("Parser configuration error: {}", err);
            error!(error = ?err, "Parser configuration error");
        }
        ErrorKind::Input(_) => eprintln!("No XML file was selected: {}", err),
        ErrorKind::IO(IOError::WriteError(_)) => eprintln!("Could not print the tree: {}", err),
        ErrorKind::IO(_) | ErrorKind::Syntax(_) | ErrorKind::Security(_) => {
            eprintln!("Error parsing the XML file ({}): {}", err.category(), err);
        }
    }
}
