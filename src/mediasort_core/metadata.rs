use crate::mediasort_core::error::{MediasortError, Result};
use crate::mediasort_core::media::MediaType;
use exiftool::ExifTool;
use serde_json::Value;
use std::collections::HashMap;
use std::path::Path;
use time::PrimitiveDateTime;
use time::format_description::BorrowedFormatItem;

/// Date format used in EXIF and QuickTime date tags.
pub const EXIF_DATE_FORMAT: &[BorrowedFormatItem<'static>] =
    time::macros::format_description!("[year]:[month]:[day] [hour]:[minute]:[second]");

/// Length of a date in `EXIF_DATE_FORMAT`, without sub-seconds or offset.
const EXIF_DATE_LEN: usize = 19;

/// Read and write access to the capture date embedded in a media file.
pub trait MetadataStore {
    /// Read the capture date of `path`. `Ok(None)` means the file has no usable date.
    fn extract(&mut self, path: &Path, media_type: MediaType) -> Result<Option<PrimitiveDateTime>>;

    /// Write `date` into every backfill tag of `path`.
    fn write(&mut self, path: &Path, media_type: MediaType, date: PrimitiveDateTime) -> Result<()>;
}

/// `MetadataStore` backed by a single long-running exiftool process.
pub struct ExifToolStore {
    exiftool: Option<ExifTool>,
}

impl ExifToolStore {
    /// Start exiftool. If it cannot be started the store is still usable, but
    /// every call fails and dates come from filenames only.
    pub fn new() -> Self {
        let exiftool = match ExifTool::new() {
            Ok(exiftool) => Some(exiftool),
            Err(e) => {
                log::warn!("ExifTool not available, falling back to filename dates: {}", e);
                None
            }
        };
        ExifToolStore { exiftool }
    }

    fn exiftool(&mut self) -> Result<&mut ExifTool> {
        self.exiftool
            .as_mut()
            .ok_or_else(|| MediasortError::Exiftool("exiftool is not running".to_string()))
    }
}

impl Default for ExifToolStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MetadataStore for ExifToolStore {
    fn extract(&mut self, path: &Path, media_type: MediaType) -> Result<Option<PrimitiveDateTime>> {
        let tag = media_type.capture_tag();
        let tag_arg = format!("-{}", tag);

        let tags: HashMap<String, Value> = self
            .exiftool()?
            .read_metadata(path, &[tag_arg.as_str()])
            .map_err(|e| MediasortError::MetadataExtraction {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let Some(raw) = tags.get(tag).and_then(Value::as_str) else {
            log::debug!("No {} tag in {}", tag, path.display());
            return Ok(None);
        };

        match parse_exif_date(raw) {
            Ok(date) => Ok(date),
            Err(e) => {
                log::debug!("Ignoring {} of {}: {}", tag, path.display(), e);
                Ok(None)
            }
        }
    }

    fn write(&mut self, path: &Path, media_type: MediaType, date: PrimitiveDateTime) -> Result<()> {
        let value = date
            .format(EXIF_DATE_FORMAT)
            .map_err(|e| MediasortError::InvalidDateFormat(e.to_string()))?;

        let mut args = vec!["-overwrite_original".to_string()];
        args.extend(
            media_type
                .backfill_tags()
                .iter()
                .map(|tag| format!("-{}={}", tag, value)),
        );
        args.push(path.to_string_lossy().into_owned());
        let args: Vec<&str> = args.iter().map(String::as_str).collect();

        let lines = self
            .exiftool()?
            .execute_lines(args.as_slice())
            .map_err(|e| MediasortError::Backfill {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        if !write_succeeded(&lines) {
            return Err(MediasortError::Backfill {
                path: path.to_path_buf(),
                reason: lines.join("; "),
            });
        }
        Ok(())
    }
}

/// Parse an EXIF date string. Sub-seconds and offsets after the seconds are
/// ignored. Returns `Ok(None)` for the all-zero placeholder date.
pub fn parse_exif_date(raw: &str) -> Result<Option<PrimitiveDateTime>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(MediasortError::InvalidDateFormat("empty date".to_string()));
    }
    if is_zero_date(raw) {
        return Ok(None);
    }

    let head = raw
        .get(..EXIF_DATE_LEN)
        .ok_or_else(|| MediasortError::InvalidDateFormat(format!("date too short: {:?}", raw)))?;

    PrimitiveDateTime::parse(head, EXIF_DATE_FORMAT)
        .map(Some)
        .map_err(|e| MediasortError::InvalidDateFormat(e.to_string()))
}

fn is_zero_date(raw: &str) -> bool {
    raw.chars().filter(char::is_ascii_digit).all(|c| c == '0')
}

/// exiftool reports "1 image files updated" on success. Errors leave
/// "0 image files updated" and a "weren't updated" line.
fn write_succeeded(lines: &[String]) -> bool {
    lines.iter().any(|line| {
        let line = line.trim();
        line.ends_with("image files updated") && !line.starts_with('0')
    })
}
