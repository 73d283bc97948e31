use crate::mediasort_core::error::{MediasortError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{Date, PrimitiveDateTime};

/// An 8-digit date, optionally followed by `-` or `_` and a 6-digit time.
static DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[0-9]{8}(?:[-_][0-9]{6})?").unwrap());

const DASHED_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]-[hour][minute][second]");
const UNDERSCORED_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]_[hour][minute][second]");
const DATE_ONLY_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year][month][day]");

/// Extract a date from the file name of `path`, e.g. `IMG_20230615-143000.jpg`.
///
/// Only the first match of the pattern is considered. Date-only names resolve
/// to midnight.
pub fn parse_filename_date(path: &Path) -> Result<PrimitiveDateTime> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();

    let no_date = || MediasortError::NoDateFound(format!("{:?}", name));

    let found = DATE_RE.find(&name).ok_or_else(no_date)?.as_str();

    PrimitiveDateTime::parse(found, DASHED_FORMAT)
        .or_else(|_| PrimitiveDateTime::parse(found, UNDERSCORED_FORMAT))
        .or_else(|_| Date::parse(found, DATE_ONLY_FORMAT).map(Date::midnight))
        .map_err(|e| {
            MediasortError::NoDateFound(format!("{:?} in {:?} is not a date ({})", found, name, e))
        })
}
