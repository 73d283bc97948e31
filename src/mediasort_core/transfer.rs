use crate::mediasort_core::error::{MediasortError, Result};
use std::fs;
use std::io;
use std::path::Path;

/// How a file reaches its destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMode {
    Copy,
    Move,
}

impl TransferMode {
    /// Past-tense verb used in action log lines.
    pub fn action(&self) -> &'static str {
        match self {
            TransferMode::Copy => "Copied",
            TransferMode::Move => "Moved",
        }
    }

    pub fn dry_run_action(&self) -> &'static str {
        match self {
            TransferMode::Copy => "Would copy",
            TransferMode::Move => "Would move",
        }
    }
}

/// Create every missing directory above `path`.
pub fn ensure_parent_dir(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

/// Copy or move `src` to `dst`, creating intermediate directories.
///
/// An existing `dst` is only replaced when `overwrite` is set. A copy that
/// fails midway may leave a partial `dst` behind. A move is a plain rename
/// and fails across filesystems.
pub fn transfer(src: &Path, dst: &Path, mode: TransferMode, overwrite: bool) -> Result<()> {
    let wrap = |error: io::Error| MediasortError::Transfer {
        from: src.to_path_buf(),
        to: dst.to_path_buf(),
        error,
    };

    if dst.exists() {
        if same_file(src, dst) {
            return Err(MediasortError::SameFile(dst.to_path_buf()));
        }
        if !overwrite {
            return Err(MediasortError::DestinationExists(dst.to_path_buf()));
        }
    }

    ensure_parent_dir(dst).map_err(wrap)?;

    match mode {
        TransferMode::Copy => copy_file(src, dst).map_err(wrap),
        TransferMode::Move => fs::rename(src, dst).map_err(wrap),
    }
}

fn copy_file(src: &Path, dst: &Path) -> io::Result<()> {
    let mut reader = fs::File::open(src)?;
    let mut writer = fs::File::create(dst)?;
    io::copy(&mut reader, &mut writer)?;
    writer.sync_all()
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
