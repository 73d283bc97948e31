pub mod backfill;
pub mod cli;
pub mod config;
pub mod error;
pub mod filename;
pub mod media;
pub mod metadata;
pub mod placement;
pub mod resolve;
pub mod sorter;
pub mod transfer;

#[cfg(test)]
mod fake;

pub use cli::Cli;
pub use config::SortConfig;
pub use error::MediasortError;
pub use media::{MediaFile, MediaType};
pub use metadata::{ExifToolStore, MetadataStore};
pub use resolve::{ResolvedDate, resolve_date};
pub use sorter::{SortStats, Sorter};
pub use transfer::TransferMode;
