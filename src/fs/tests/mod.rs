#![cfg(test)]

mod create;
mod cwd;

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Creates a regular file at `path` containing `contents`.
pub(crate) fn write_file(path: &Path, contents: &[u8]) {
    File::create(path)
        .and_then(|mut file| file.write_all(contents))
        .expect("test file should be writable");
}

/// Creates every directory in `paths`, relative to `root`.
pub(crate) fn make_dirs(root: &Path, paths: &[&str]) {
    for path in paths {
        fs::create_dir_all(root.join(path)).expect("test directory should be creatable");
    }
}

/// Runs `test` with the working directory set to `dir`, restoring the previous one afterwards.
pub(crate) fn in_dir<P: AsRef<Path>>(dir: P, test: impl FnOnce()) {
    let previous = env::current_dir().expect("cwd should be readable");
    env::set_current_dir(dir).expect("cwd should be changeable");
    test();
    env::set_current_dir(previous).expect("cwd should be restorable");
}

pub(crate) fn scratch() -> tempfile::TempDir {
    tempfile::tempdir().expect("temporary directory should be creatable")
}
