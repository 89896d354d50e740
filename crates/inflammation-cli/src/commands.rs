use anyhow::{Context, Result};
use inflammation_cli::summary::{daily_summary_table, normalised_table, to_json};
use inflammation_ingest::load_csv;
use inflammation_stats::{daily_summary, patient_normalise};
use tracing::info_span;

use crate::cli::{InputArgs, OutputFormatArg};

pub fn run_stats(args: &InputArgs) -> Result<()> {
    let span = info_span!("stats", file = %args.file.display());
    let _guard = span.enter();

    let table = load_csv(&args.file)
        .with_context(|| format!("load {}", args.file.display()))?;
    let summary = daily_summary(&table).context("compute daily statistics")?;

    match args.output {
        OutputFormatArg::Table => println!("{}", daily_summary_table(&summary, args.precision)),
        OutputFormatArg::Json => println!("{}", to_json(&summary)?),
    }
    Ok(())
}

pub fn run_normalise(args: &InputArgs) -> Result<()> {
    let span = info_span!("normalise", file = %args.file.display());
    let _guard = span.enter();

    let table = load_csv(&args.file)
        .with_context(|| format!("load {}", args.file.display()))?;
    let normalised = patient_normalise(&table).context("normalise patients")?;

    match args.output {
        OutputFormatArg::Table => println!("{}", normalised_table(&normalised, args.precision)),
        OutputFormatArg::Json => println!("{}", to_json(&normalised)?),
    }
    Ok(())
}
