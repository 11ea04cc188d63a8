//! Test helpers for locating and writing catalog files.

use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

/// Bar catalog shared with the data crate's tests.
pub(super) fn bar_catalog() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../mixology-data/tests/fixtures/cocktails.json")
}

/// Temporary directory with a UTF-8 path.
pub(super) fn utf8_tempdir() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path, contents).expect("write test file");
}
