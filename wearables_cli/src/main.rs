use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use wearables_core::*;

#[derive(Parser)]
#[command(name = "wearables-gen")]
#[command(about = "Generate large wearable CSV datasets", long_about = None)]
struct Cli {
    /// Number of rows to generate (default: 10,000,000)
    #[arg(long, allow_negative_numbers = true)]
    rows: Option<i64>,

    /// Output CSV path (default: data/wearables_dataset.csv)
    #[arg(long)]
    out: Option<PathBuf>,

    /// Starting date in YYYY-MM-DD (default: 2025-11-01)
    #[arg(long)]
    start_date: Option<String>,

    /// Random seed for reproducibility (default: 42)
    #[arg(long, conflicts_with = "no_seed")]
    seed: Option<u64>,

    /// Draw from OS entropy instead of a fixed seed
    #[arg(long)]
    no_seed: bool,

    /// Days before dates loop back to the start date; 0 disables (default: 365)
    #[arg(long, allow_negative_numbers = true)]
    cycle_days: Option<i64>,

    /// Rows between progress lines (default: 1,000,000)
    #[arg(long)]
    progress_every: Option<u64>,

    /// Suppress progress and summary output
    #[arg(long)]
    quiet: bool,

    /// Read defaults from this config file instead of the standard location
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> ExitCode {
    // Warnings only; progress goes to stdout through the progress sink
    wearables_core::logging::init_with_level("warn");

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::debug!("Generation failed: {:?}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let settings = merge_settings(config.generate, &cli);

    let params = settings.params()?;
    let generator = RowGenerator::new(params);

    let mut console = ConsoleProgress;
    let mut silent = NullProgress;
    let progress: &mut dyn ProgressSink = if cli.quiet {
        &mut silent
    } else {
        &mut console
    };

    write_dataset(&settings.out, generator, settings.progress_every, progress)?;
    Ok(())
}

/// Apply command-line overrides on top of config file values
fn merge_settings(mut settings: GenerateConfig, cli: &Cli) -> GenerateConfig {
    if let Some(rows) = cli.rows {
        settings.rows = rows;
    }
    if let Some(ref out) = cli.out {
        settings.out = out.clone();
    }
    if let Some(ref start_date) = cli.start_date {
        settings.start_date = start_date.clone();
    }
    if let Some(seed) = cli.seed {
        settings.seed = seed;
        settings.random_seed = false;
    }
    if cli.no_seed {
        settings.random_seed = true;
    }
    if let Some(cycle_days) = cli.cycle_days {
        settings.cycle_days = cycle_days;
    }
    if let Some(progress_every) = cli.progress_every {
        settings.progress_every = progress_every;
    }
    settings
}

/// Prints progress lines to stdout
struct ConsoleProgress;

impl ProgressSink for ConsoleProgress {
    fn rows_written(&mut self, count: u64) {
        println!("Wrote {} rows…", format_thousands(count));
    }

    fn finished(&mut self, total: u64, path: &Path) {
        println!("Done. Wrote {} rows to {}", format_thousands(total), path.display());
    }
}
