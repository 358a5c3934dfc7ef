//! Command-line interface for csv-to-features
//! Converts the feature comparison CSV export into the file the features page includes.
//!
//! Usage:
//!   csv-to-features `<input.csv>` [`<output>`] [--format `<format>`] [--config `<file>`]
//!   csv-to-features --list-formats                       - List all available output formats

use clap::{error::ErrorKind, Parser};
use csv_to_features::{Converter, Error, FormatRegistry, Loader};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: csv-to-features <path_to_csv_file> [output_path]";

#[derive(Debug, Parser)]
#[command(
    name = "csv-to-features",
    version,
    about = "Converts a feature comparison CSV into annotated feature tables"
)]
struct Cli {
    /// Path to the CSV export
    #[arg(required_unless_present = "list_formats")]
    input: Option<PathBuf>,

    /// Where to write the result (printed to stdout when omitted)
    output: Option<PathBuf>,

    /// Output format (default: php, from configuration)
    #[arg(short, long)]
    format: Option<String>,

    /// TOML file layered over the built-in configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// List available output formats
    #[arg(long)]
    list_formats: bool,
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            eprintln!("{USAGE}");
            return ExitCode::from(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    if cli.list_formats {
        handle_list_formats_command();
        return ExitCode::SUCCESS;
    }

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

fn run(cli: &Cli) -> Result<(), Error> {
    let mut loader = Loader::new();
    if let Some(path) = &cli.config {
        loader = loader.with_file(path);
    }
    if let Some(format) = &cli.format {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    let converter = Converter::new(loader.build()?);

    let input = cli
        .input
        .as_deref()
        .expect("input is required unless listing formats");
    let text = converter.convert_file(input, cli.output.as_deref())?;

    if cli.output.is_none() {
        print!("{}", text);
    }
    Ok(())
}

/// Handle the list-formats command
fn handle_list_formats_command() {
    let registry = FormatRegistry::with_defaults();
    println!("Available output formats:\n");

    for name in registry.list_formats() {
        if let Ok(format) = registry.get(&name) {
            println!("  {}", name);
            println!("    {}", format.description());
            println!();
        }
    }
}
