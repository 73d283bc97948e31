use crate::mediasort_core::cli::Cli;
use crate::mediasort_core::error::{MediasortError, Result};
use crate::mediasort_core::placement::{check_folder_format, parse_folder_format};
use crate::mediasort_core::transfer::TransferMode;
use std::path::PathBuf;
use time::format_description::OwnedFormatItem;

/// Everything a sort run needs, validated before any file is touched.
#[derive(Debug, Clone)]
pub struct SortConfig {
    pub src: PathBuf,
    pub dest: PathBuf,
    pub mode: TransferMode,
    pub folder_format: OwnedFormatItem,
    /// Backfill filename dates into files without metadata dates.
    pub update_metadata: bool,
    /// Log one line per transferred file.
    pub log_actions: bool,
    pub dry_run: bool,
    pub overwrite: bool,
}

impl SortConfig {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let (Some(src), Some(dest)) = (&cli.src, &cli.dest) else {
            return Err(MediasortError::StartupConfig(
                "Please provide source and destination directories (--src and --dest)".to_string(),
            ));
        };

        if !src.is_dir() {
            return Err(MediasortError::StartupConfig(format!(
                "Source directory '{}' does not exist or is not a directory.",
                src.display()
            )));
        }

        let folder_format =
            parse_folder_format(&cli.datefmt).map_err(|e| MediasortError::StartupConfig(e.to_string()))?;

        // Templates can parse yet still fail on a naive date (e.g. offsets).
        check_folder_format(&folder_format)
            .map_err(|e| MediasortError::StartupConfig(format!("{:?}: {}", cli.datefmt, e)))?;

        Ok(SortConfig {
            src: src.clone(),
            dest: dest.clone(),
            mode: if cli.copy {
                TransferMode::Copy
            } else {
                TransferMode::Move
            },
            folder_format,
            update_metadata: cli.update_exif,
            log_actions: cli.log,
            dry_run: cli.dry_run,
            overwrite: cli.overwrite,
        })
    }
}
