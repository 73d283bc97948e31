use crate::mediasort_core::error::{MediasortError, Result};
use crate::mediasort_core::filename::parse_filename_date;
use crate::mediasort_core::media::MediaFile;
use crate::mediasort_core::metadata::MetadataStore;
use time::PrimitiveDateTime;

/// Capture date of a file and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedDate {
    pub date: PrimitiveDateTime,
    /// True only when `date` was read from the file's own metadata.
    pub from_metadata: bool,
}

/// Resolve the capture date of `media`: embedded metadata first, then the
/// file name.
pub fn resolve_date<M>(store: &mut M, media: &MediaFile) -> Result<ResolvedDate>
where
    M: MetadataStore + ?Sized,
{
    match store.extract(&media.path, media.media_type) {
        Ok(Some(date)) => {
            return Ok(ResolvedDate {
                date,
                from_metadata: true,
            });
        }
        Ok(None) => {
            log::debug!("No {} date in metadata of {}", media.media_type, media.path.display());
        }
        Err(e) => {
            log::warn!("{}. Falling back to filename.", e);
        }
    }

    match parse_filename_date(&media.path) {
        Ok(date) => Ok(ResolvedDate {
            date,
            from_metadata: false,
        }),
        Err(e) => {
            log::debug!("{}", e);
            Err(MediasortError::DateResolution(media.path.clone()))
        }
    }
}
