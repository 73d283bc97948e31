use crate::mediasort_core::error::{MediasortError, Result};
use crate::mediasort_core::media::MediaType;
use crate::mediasort_core::metadata::MetadataStore;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use time::PrimitiveDateTime;

/// In-memory `MetadataStore` keyed by file name.
#[derive(Default)]
pub struct FakeStore {
    pub dates: HashMap<String, PrimitiveDateTime>,
    pub fail_extract: bool,
    pub fail_write: bool,
    pub extracted: Vec<PathBuf>,
    pub written: Vec<(PathBuf, MediaType, PrimitiveDateTime)>,
}

impl FakeStore {
    pub fn with_date(mut self, name: &str, date: PrimitiveDateTime) -> Self {
        self.dates.insert(name.to_string(), date);
        self
    }
}

fn key(path: &Path) -> String {
    path.file_name().unwrap().to_string_lossy().into_owned()
}

impl MetadataStore for FakeStore {
    fn extract(&mut self, path: &Path, _: MediaType) -> Result<Option<PrimitiveDateTime>> {
        self.extracted.push(path.to_path_buf());
        if self.fail_extract {
            return Err(MediasortError::MetadataExtraction {
                path: path.to_path_buf(),
                reason: "not a media file".to_string(),
            });
        }
        Ok(self.dates.get(&key(path)).copied())
    }

    fn write(&mut self, path: &Path, media_type: MediaType, date: PrimitiveDateTime) -> Result<()> {
        if self.fail_write {
            return Err(MediasortError::Backfill {
                path: path.to_path_buf(),
                reason: "read-only".to_string(),
            });
        }
        self.written.push((path.to_path_buf(), media_type, date));
        Ok(())
    }
}

