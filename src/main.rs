use anyhow::Result;
use clap::Parser;
use mediasort::mediasort_core::{Cli, ExifToolStore, SortConfig, Sorter};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize loggers
    let term_level = if cli.log { LevelFilter::Info } else { LevelFilter::Warn };
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        term_level,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if let Some(log_file) = &cli.log_file {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create(log_file)?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let config = SortConfig::from_cli(&cli)?;
    let dry_run = config.dry_run;

    let mut sorter = Sorter::new(config, ExifToolStore::new());
    let stats = sorter.run();

    if dry_run {
        println!("\n[DRY RUN] {} files would be sorted", stats.planned);
    } else {
        println!("\nSort complete!");
        println!("  {} files copied", stats.copied);
        println!("  {} files moved", stats.moved);
        if stats.backfilled > 0 {
            println!("  {} metadata dates updated", stats.backfilled);
        }
    }
    if stats.errors() > 0 {
        println!("  {} files skipped due to errors (see log)", stats.errors());
    }

    Ok(())
}
