use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;

pub fn mediasort() -> Command {
    Command::cargo_bin("mediasort").unwrap()
}

/// Source tree with one dated photo, one dated video, one undated photo and
/// a png that must never be sorted.
pub fn setup_source_tree(temp_dir: &TempDir) -> ChildPath {
    let src = temp_dir.child("src");
    src.child("IMG_20230615-143000.jpg").write_str("photo").unwrap();
    src.child("trip/VID_20190509_154733.mp4").write_str("video").unwrap();
    src.child("trip/holiday.jpg").write_str("undated").unwrap();
    src.child("trip/Screenshot_20200101-101010.png").write_str("png").unwrap();
    src
}
