use crate::mediasort_core::placement::DEFAULT_FOLDER_FORMAT;
use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Sort photos and videos into dated folders by capture date")]
pub struct Cli {
    /// Directory to scan for .jpg and .mp4 files
    #[arg(long)]
    pub src: Option<PathBuf>,

    /// Root of the sorted tree
    #[arg(long)]
    pub dest: Option<PathBuf>,

    /// Copy files instead of moving them
    #[arg(long)]
    pub copy: bool,

    /// Destination folder layout, e.g. "[year]/[month]-[day]" or "2006/01/02"
    #[arg(long, default_value = DEFAULT_FOLDER_FORMAT)]
    pub datefmt: String,

    /// Write the filename date into the file's metadata when it has none
    #[arg(long)]
    pub update_exif: bool,

    /// Log every copied or moved file
    #[arg(long = "log")]
    pub log: bool,

    /// Show where files would go without touching them
    #[arg(long)]
    pub dry_run: bool,

    /// Replace files that already exist at the destination
    #[arg(long)]
    pub overwrite: bool,

    /// Also write the log to this file
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Log level for the log file (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}
