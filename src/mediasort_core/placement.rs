use crate::mediasort_core::error::{MediasortError, Result};
use std::borrow::Cow;
use std::ffi::OsStr;
use std::path::{Component, Path, PathBuf};
use time::PrimitiveDateTime;
use time::format_description::OwnedFormatItem;
use time::macros::datetime;

/// Default destination template (YYYY/MM/DD).
pub const DEFAULT_FOLDER_FORMAT: &str = "[year]/[month]/[day]";

/// Reference-date layout tokens (`2006/01/02`) and their format components.
/// Checked in order at every position of the layout.
const REFERENCE_TOKENS: &[(&str, &str)] = &[
    ("2006", "[year]"),
    ("Jan", "[month repr:short]"),
    ("01", "[month]"),
    ("02", "[day]"),
    ("06", "[year repr:last_two]"),
    ("15", "[hour]"),
    ("04", "[minute]"),
    ("05", "[second]"),
];

/// Parse a destination template. Templates containing `[` are `time` format
/// descriptions such as `[year]/[month]-[day]`; anything else is read as a
/// reference-date layout such as `2006/01/02`.
pub fn parse_folder_format(template: &str) -> Result<OwnedFormatItem> {
    let description = if template.contains('[') {
        Cow::Borrowed(template)
    } else {
        Cow::Owned(translate_reference_layout(template))
    };

    time::format_description::parse_owned::<1>(&description)
        .map_err(|e| MediasortError::InvalidTemplate(format!("{:?}: {}", template, e)))
}

fn translate_reference_layout(layout: &str) -> String {
    let mut description = String::with_capacity(layout.len() * 4);
    let mut rest = layout;

    'scan: while !rest.is_empty() {
        for &(token, component) in REFERENCE_TOKENS {
            if let Some(tail) = rest.strip_prefix(token) {
                description.push_str(component);
                rest = tail;
                continue 'scan;
            }
        }
        let mut chars = rest.chars();
        if let Some(c) = chars.next() {
            description.push(c);
        }
        rest = chars.as_str();
    }

    description
}

/// Reject templates that would put every file in the same folder or render
/// a path outside the destination root.
pub fn check_folder_format(folder_format: &OwnedFormatItem) -> Result<()> {
    let early = render_folder(datetime!(2000-01-01 00:00:00), folder_format)?;
    let late = render_folder(datetime!(2011-12-31 23:59:58), folder_format)?;

    if early == late {
        return Err(MediasortError::InvalidTemplate(format!(
            "{:?} contains no date components",
            early
        )));
    }
    Ok(())
}

fn render_folder(date: PrimitiveDateTime, folder_format: &OwnedFormatItem) -> Result<String> {
    let folder = date
        .format(folder_format)
        .map_err(|e| MediasortError::InvalidTemplate(e.to_string()))?;
    let folder = folder.trim_start_matches(['/', '\\']);

    if Path::new(folder)
        .components()
        .any(|c| matches!(c, Component::ParentDir))
    {
        return Err(MediasortError::InvalidTemplate(format!(
            "{:?} leaves the destination root",
            folder
        )));
    }
    Ok(folder.to_string())
}

/// Compute where a file dated `date` goes: `dest_root/<formatted date>/file_name`.
///
/// Leading separators in the formatted date are dropped and `..` parts are
/// rejected, so the result stays under `dest_root`.
pub fn plan_destination(
    date: PrimitiveDateTime,
    dest_root: &Path,
    folder_format: &OwnedFormatItem,
    file_name: &OsStr,
) -> Result<PathBuf> {
    let folder = render_folder(date, folder_format)?;
    Ok(dest_root.join(folder).join(file_name))
}
