use crate::mediasort_core::error::{MediasortError, Result};
use crate::mediasort_core::media::MediaType;
use crate::mediasort_core::metadata::MetadataStore;
use crate::mediasort_core::resolve::ResolvedDate;
use std::path::Path;

/// Whether a file sorted with `resolved` should get its date written back.
pub fn needs_backfill(resolved: &ResolvedDate, enabled: bool) -> bool {
    enabled && !resolved.from_metadata
}

/// Write a filename-derived date into the metadata of an already relocated file.
pub fn backfill<M>(store: &mut M, path: &Path, media_type: MediaType, resolved: &ResolvedDate) -> Result<()>
where
    M: MetadataStore + ?Sized,
{
    if resolved.from_metadata {
        return Err(MediasortError::Backfill {
            path: path.to_path_buf(),
            reason: "date already comes from metadata".to_string(),
        });
    }

    log::debug!("Writing {} date into {}", media_type, path.display());
    store.write(path, media_type, resolved.date).map_err(|e| match e {
        MediasortError::Backfill { .. } => e,
        other => MediasortError::Backfill {
            path: path.to_path_buf(),
            reason: other.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mediasort_core::fake::FakeStore;
    use time::macros::datetime;

    fn from_filename() -> ResolvedDate {
        ResolvedDate {
            date: datetime!(2023-06-15 14:30:00),
            from_metadata: false,
        }
    }

    #[test]
    fn test_needs_backfill() {
        let from_metadata = ResolvedDate {
            from_metadata: true,
            ..from_filename()
        };
        assert!(needs_backfill(&from_filename(), true));
        assert!(!needs_backfill(&from_filename(), false));
        assert!(!needs_backfill(&from_metadata, true));
    }

    #[test]
    fn test_backfill_writes_date() {
        let mut store = FakeStore::default();
        backfill(&mut store, Path::new("/out/a.jpg"), MediaType::Image, &from_filename()).unwrap();
        assert_eq!(
            store.written,
            vec![(Path::new("/out/a.jpg").to_path_buf(), MediaType::Image, datetime!(2023-06-15 14:30:00))]
        );
    }

    #[test]
    fn test_backfill_refuses_metadata_dates() {
        let mut store = FakeStore::default();
        let resolved = ResolvedDate {
            from_metadata: true,
            ..from_filename()
        };
        assert!(backfill(&mut store, Path::new("/out/a.jpg"), MediaType::Image, &resolved).is_err());
        assert!(store.written.is_empty());
    }

    #[test]
    fn test_write_failure_is_a_backfill_error() {
        let mut store = FakeStore {
            fail_write: true,
            ..Default::default()
        };
        let err = backfill(&mut store, Path::new("/out/a.mp4"), MediaType::Video, &from_filename()).unwrap_err();
        assert!(matches!(err, MediasortError::Backfill { .. }));
    }
}
