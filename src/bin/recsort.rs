//! recsort binary
//!
//! Decodes a record file, sorts it by key and prints the result.

use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use recsort::{Config, Engine, Record, RecsortError};
use tracing_subscriber::{fmt, EnvFilter};

/// Sort length-prefixed binary records by their 10-byte key
#[derive(Parser, Debug)]
#[command(name = "recsort")]
#[command(about = "Decode length-prefixed binary records and print them sorted by key")]
#[command(version)]
struct Args {
    /// Input record file
    input: PathBuf,

    /// Output file (only written with --write-output)
    output: PathBuf,

    /// Fail on a record cut short by end of file instead of dropping it
    #[arg(long)]
    strict: bool,

    /// Re-encode the sorted records into OUTPUT
    #[arg(long)]
    write_output: bool,

    /// Do not print the sorted records
    #[arg(short, long)]
    quiet: bool,

    /// Largest accepted record value in bytes (unbounded when omitted)
    #[arg(long)]
    max_value_size: Option<u32>,
}

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    if let Err(e) = run(&args) {
        tracing::error!("{}", e);
        std::process::exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), RecsortError> {
    let mut builder = Config::builder().strict(args.strict);
    if let Some(max) = args.max_value_size {
        builder = builder.max_value_size(max);
    }
    let config = builder.build()?;
    let engine = Engine::new(config);

    tracing::info!(
        "Sorting {} to {}",
        args.input.display(),
        args.output.display()
    );

    let records = engine.sort_file(&args.input)?;

    if !args.quiet {
        print_records(&records)?;
    }

    if args.write_output {
        engine.write_sorted(&records, &args.output)?;
    }

    Ok(())
}

fn print_records(records: &[Record]) -> Result<(), RecsortError> {
    let mut out = BufWriter::new(io::stdout().lock());
    for record in records {
        writeln!(out, "{}", record)?;
    }
    out.flush()?;
    Ok(())
}
