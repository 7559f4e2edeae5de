//! mlg2txt - converts binary .mlg mission logs into the game's text format.

use std::{
    fs::File,
    io::BufReader,
    path::{Path, PathBuf},
    process::ExitCode,
};

use anyhow::{Context, Result, bail};
use clap::Parser;
use mlglog::{avec::decode_reader, event::Event};
use tracing::{error, info};

mod output;

use output::Output;

#[derive(Parser)]
#[command(name = "mlg2txt")]
#[command(about = "Converts binary .mlg flight logs into textual format")]
#[command(version)]
struct Cli {
    /// Split output into multiple files (as the game does), otherwise a single
    /// file is generated per input
    #[arg(short, long)]
    split: bool,

    /// Directory to write the output files to
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// The .mlg files to process
    #[arg(value_name = "FILE", required = true)]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // A failed file never stops the rest of the batch.
    let mut failed = 0;
    for path in &cli.files {
        if let Err(err) = convert(&cli, path) {
            error!("Failed to convert {}: {err:#}", path.display());
            failed += 1;
        }
    }

    if failed == 0 {
        ExitCode::SUCCESS
    } else {
        error!("{failed} of {} files failed", cli.files.len());
        ExitCode::FAILURE
    }
}

fn convert(cli: &Cli, path: &Path) -> Result<()> {
    if path.extension().is_none_or(|ext| ext != "mlg") {
        bail!("input file name does not end in .mlg");
    }

    info!("Parsing file {}", path.display());

    let stem = path
        .file_stem()
        .context("input file has no name")?
        .to_string_lossy();

    let file = File::open(path).context("failed to open input")?;
    let mut output = Output::new(&cli.output, &stem, cli.split);

    let mut written = 0usize;
    for record in decode_reader(BufReader::new(file)) {
        let record = record?;

        match record.event {
            Event::LogVersion(_) => output.begin_substream()?,
            Event::Unknown(_) => continue,
            _ => {}
        }

        output.write(&record)?;
        written += 1;
    }

    output.finish()?;
    info!("Wrote {written} records from {}", path.display());

    Ok(())
}
