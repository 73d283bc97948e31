use crate::mediasort_core::backfill::{backfill, needs_backfill};
use crate::mediasort_core::config::SortConfig;
use crate::mediasort_core::error::{MediasortError, Result};
use crate::mediasort_core::media::MediaFile;
use crate::mediasort_core::metadata::MetadataStore;
use crate::mediasort_core::placement::plan_destination;
use crate::mediasort_core::resolve::{ResolvedDate, resolve_date};
use crate::mediasort_core::transfer::{TransferMode, transfer};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Result of writing a filename date back into a sorted file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackfillStatus {
    NotNeeded,
    Written,
    Failed,
}

/// What happened to one sorted file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortOutcome {
    pub destination: PathBuf,
    pub resolved: ResolvedDate,
    /// False in dry-run mode.
    pub transferred: bool,
    pub backfill: BackfillStatus,
}

/// Counters for one sort run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SortStats {
    pub copied: usize,
    pub moved: usize,
    pub planned: usize,
    pub no_date: usize,
    pub failed: usize,
    pub traversal_errors: usize,
    pub backfilled: usize,
    pub backfill_failed: usize,
}

impl SortStats {
    pub fn errors(&self) -> usize {
        self.no_date + self.failed + self.traversal_errors + self.backfill_failed
    }
}

impl std::fmt::Display for SortStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} copied, {} moved, {} planned, {} without date, {} failed ({} metadata updates)",
            self.copied, self.moved, self.planned, self.no_date, self.failed, self.backfilled
        )
    }
}

/// Walks the source tree and sorts every media file into the destination tree.
pub struct Sorter<M: MetadataStore> {
    config: SortConfig,
    store: M,
}

impl<M: MetadataStore> Sorter<M> {
    pub fn new(config: SortConfig, store: M) -> Self {
        Sorter { config, store }
    }

    #[cfg(test)]
    pub(crate) fn into_store(self) -> M {
        self.store
    }

    /// Sort every `.jpg` and `.mp4` under the source directory, depth first.
    ///
    /// Errors on one file or directory are logged and counted; the walk
    /// always continues with the next entry.
    pub fn run(&mut self) -> SortStats {
        log::info!(
            "Sorting {} into {} (mode: {:?}, dry run: {})",
            self.config.src.display(),
            self.config.dest.display(),
            self.config.mode,
            self.config.dry_run
        );

        let mut stats = SortStats::default();
        let dest = std::path::absolute(&self.config.dest).ok();

        let walker = WalkDir::new(&self.config.src)
            .into_iter()
            .filter_entry(|entry| !(entry.file_type().is_dir() && is_dest_root(entry.path(), dest.as_deref())));

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    log::error!("Skipping unreadable path: {}", MediasortError::Traversal(e));
                    stats.traversal_errors += 1;
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }
            let Some(media) = MediaFile::from_path(entry.into_path()) else {
                continue;
            };

            match self.sort_file(&media) {
                Ok(outcome) => self.record(&mut stats, &outcome),
                Err(MediasortError::DateResolution(path)) => {
                    log::error!("Error while extracting date from {}: no date in metadata or filename", path.display());
                    stats.no_date += 1;
                }
                Err(e) => {
                    log::error!("Error while processing {}: {}", media.path.display(), e);
                    stats.failed += 1;
                }
            }
        }

        log::info!("Sort finished: {}", stats);
        stats
    }

    /// Resolve, place, transfer and optionally backfill a single file.
    pub fn sort_file(&mut self, media: &MediaFile) -> Result<SortOutcome> {
        let resolved = resolve_date(&mut self.store, media)?;
        let destination = plan_destination(
            resolved.date,
            &self.config.dest,
            &self.config.folder_format,
            media.file_name(),
        )?;
        let mode = self.config.mode;

        if self.config.dry_run {
            println!(
                "[DRY RUN] {} {:?} -> {:?}",
                mode.dry_run_action(),
                media.path,
                destination
            );
            return Ok(SortOutcome {
                destination,
                resolved,
                transferred: false,
                backfill: BackfillStatus::NotNeeded,
            });
        }

        transfer(&media.path, &destination, mode, self.config.overwrite)?;

        if self.config.log_actions {
            log::info!("{} {:?} -> {:?}", mode.action(), media.path, destination);
        }

        let backfill_status = if needs_backfill(&resolved, self.config.update_metadata) {
            log::info!("Updating metadata of {}", destination.display());
            match backfill(&mut self.store, &destination, media.media_type, &resolved) {
                Ok(()) => BackfillStatus::Written,
                Err(e) => {
                    log::error!("Error while updating metadata of {}: {}", destination.display(), e);
                    BackfillStatus::Failed
                }
            }
        } else {
            BackfillStatus::NotNeeded
        };

        Ok(SortOutcome {
            destination,
            resolved,
            transferred: true,
            backfill: backfill_status,
        })
    }

    fn record(&self, stats: &mut SortStats, outcome: &SortOutcome) {
        if !outcome.transferred {
            stats.planned += 1;
        } else {
            match self.config.mode {
                TransferMode::Copy => stats.copied += 1,
                TransferMode::Move => stats.moved += 1,
            }
        }
        match outcome.backfill {
            BackfillStatus::NotNeeded => {}
            BackfillStatus::Written => stats.backfilled += 1,
            BackfillStatus::Failed => stats.backfill_failed += 1,
        }
    }
}

/// True for the destination root when it sits inside the source tree, so
/// sorted files are not walked again.
fn is_dest_root(path: &Path, dest: Option<&Path>) -> bool {
    match (dest, std::path::absolute(path)) {
        (Some(dest), Ok(path)) => path == dest,
        _ => false,
    }
}
