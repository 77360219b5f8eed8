use anyhow::{bail, Context, Result};
use clap::Parser;
use koinport_core::{convert_file, Options};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(
    name = "koinport",
    version,
    about = "Convert a NovaDAX transaction export into a Koinly import CSV"
)]
struct Cli {
    /// NovaDAX CSV export
    input: PathBuf,

    /// Output path (default: <input stem>-koinly.csv next to the input)
    output: Option<PathBuf>,

    /// Local fiat currency code deciding buy/sell direction
    #[arg(long, default_value = "BRL")]
    fiat: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !cli.input.exists() {
        bail!("CSV not found: {}", cli.input.display());
    }

    let output = cli.output.unwrap_or_else(|| default_output(&cli.input));
    let opts = Options { fiat: cli.fiat };

    let summary = convert_file(&cli.input, &output, &opts)
        .with_context(|| format!("converting {}", cli.input.display()))?;

    println!(
        "Converted {} rows into {} (invalid rows: {}, invalid dates: {})",
        summary.rows,
        output.display(),
        summary.invalid_rows,
        summary.invalid_dates
    );

    Ok(())
}

fn default_output(input: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("statement");
    input.with_file_name(format!("{stem}-koinly.csv"))
}
