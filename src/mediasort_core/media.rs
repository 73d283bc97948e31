use std::path::{Path, PathBuf};

/// Kind of media file, which decides the metadata tags used for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Video,
}

impl MediaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            MediaType::Image => "image",
            MediaType::Video => "video",
        }
    }

    /// Tag holding the capture date.
    pub fn capture_tag(&self) -> &'static str {
        match self {
            MediaType::Image => "DateTimeOriginal",
            MediaType::Video => "CreationDate",
        }
    }

    /// Tags written when a date is backfilled into the file.
    pub fn backfill_tags(&self) -> &'static [&'static str] {
        match self {
            MediaType::Image => &["DateTimeOriginal", "CreateDate"],
            MediaType::Video => &["CreationDate", "CreateDate"],
        }
    }
}

impl std::fmt::Display for MediaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Suffixes (lowercase) of the files that get sorted.
const IMAGE_SUFFIX: &str = ".jpg";
const VIDEO_SUFFIX: &str = ".mp4";

/// Classify a path by its lowercased file name. Anything other than
/// `.jpg` or `.mp4` is not sorted.
pub fn detect_media_type(path: &Path) -> Option<MediaType> {
    let name = path.file_name()?.to_string_lossy().to_lowercase();

    if name.ends_with(IMAGE_SUFFIX) {
        Some(MediaType::Image)
    } else if name.ends_with(VIDEO_SUFFIX) {
        Some(MediaType::Video)
    } else {
        None
    }
}

/// A media file found in the source tree.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub path: PathBuf,
    pub media_type: MediaType,
}

impl MediaFile {
    /// Build a `MediaFile` if the path names a sortable file.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let media_type = detect_media_type(&path)?;
        Some(MediaFile { path, media_type })
    }

    pub fn file_name(&self) -> &std::ffi::OsStr {
        self.path.file_name().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_sortable_files() {
        assert_eq!(detect_media_type(Path::new("photo.jpg")), Some(MediaType::Image));
        assert_eq!(detect_media_type(Path::new("PHOTO.JPG")), Some(MediaType::Image));
        assert_eq!(detect_media_type(Path::new("clip.mp4")), Some(MediaType::Video));
        assert_eq!(detect_media_type(Path::new("dir/Clip.Mp4")), Some(MediaType::Video));
    }

    #[test]
    fn test_other_extensions_are_ignored() {
        assert_eq!(detect_media_type(Path::new("photo.png")), None);
        assert_eq!(detect_media_type(Path::new("photo.jpeg")), None);
        assert_eq!(detect_media_type(Path::new("clip.mov")), None);
        assert_eq!(detect_media_type(Path::new("jpg")), None);
        assert!(MediaFile::from_path("notes.txt").is_none());
    }

    #[test]
    fn test_tag_mapping() {
        assert_eq!(MediaType::Image.capture_tag(), "DateTimeOriginal");
        assert_eq!(MediaType::Video.capture_tag(), "CreationDate");
        assert_eq!(MediaType::Image.backfill_tags(), &["DateTimeOriginal", "CreateDate"]);
        assert_eq!(MediaType::Video.backfill_tags(), &["CreationDate", "CreateDate"]);
    }
}
