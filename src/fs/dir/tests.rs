#![cfg(test)]

use std::ffi::CString;
use std::fs::File;

use super::*;
use crate::fs::{FileType, MissingComponentError, NonDirComponentError};

fn scratch_with(entries: &[&str]) -> tempfile::TempDir {
    let tmp = tempfile::tempdir().expect("temporary directory should be creatable");
    for entry in entries {
        File::create(tmp.path().join(entry)).expect("test file should be creatable");
    }
    tmp
}

fn sorted(mut names: Vec<CString>) -> Vec<CString> {
    names.sort();
    names
}

#[test]
fn test_next_name() {
    let tmp = scratch_with(&["x", "y", ".hidden"]);
    let mut dir = Directory::open(tmp.path()).expect("directory should open");

    let mut names = Vec::new();
    while let Some(name) = dir.next_name() {
        names.push(name);
    }

    assert_eq!(
        sorted(names),
        [c".hidden", c"x", c"y"].map(CString::from),
        "Every entry except '.' and '..' should be listed, dotfiles included."
    );
    assert_eq!(dir.next_name(), None, "The end of the directory should stay the end.");
}

#[test]
fn test_names() {
    let tmp = scratch_with(&["x", "y", ".hidden"]);
    let mut dir = Directory::open(tmp.path()).expect("directory should open");

    let mut names = dir.names();
    let collected = sorted(names.by_ref().collect());
    assert_eq!(collected, [c".hidden", c"x", c"y"].map(CString::from));
    assert_eq!(names.next(), None, "Names should be fused once exhausted.");
}

#[test]
fn test_empty() {
    let tmp = scratch_with(&[]);
    let mut dir = Directory::open(tmp.path()).expect("directory should open");

    assert_eq!(dir.next_name(), None, "An empty directory has only '.' and '..'.");
    assert_eq!(dir.close(), Ok(()));
}

#[test]
fn test_read_entry() {
    let tmp = scratch_with(&["file"]);
    let mut dir = Directory::open(tmp.path()).expect("directory should open");

    let mut dots = 0;
    let mut others = Vec::new();
    while let Some(entry) = dir.read_entry().expect("directory should be readable") {
        if entry.is_dot() {
            dots += 1;
            continue;
        }
        assert!(
            matches!(entry.file_type(), None | Some(FileType::Regular)),
            "The reported type should be regular, if the file system reports one."
        );
        assert_ne!(entry.inode(), 0);
        others.push(CString::from(entry.name()));
    }

    assert_eq!(dots, 2, "Raw entries should include both '.' and '..'.");
    assert_eq!(others, [CString::from(c"file")]);
    assert_eq!(dir.read_entry().map(|entry| entry.is_none()), Ok(true));
}

#[test]
fn test_entry_name_accessor() {
    let tmp = scratch_with(&["only"]);
    let mut dir = Directory::open(tmp.path()).expect("directory should open");

    let mut found = false;
    while let Some(entry) = dir.read_entry().expect("directory should be readable") {
        found |= Some(&entry).map(DirEntry::name) == Some(c"only");
    }
    assert!(found, "The borrowed name should match the file on disk.");

    let absent: Option<&DirEntry<'_>> = None;
    assert_eq!(absent.map(DirEntry::name), None);
}

#[test]
fn test_open_errors() {
    let tmp = scratch_with(&["file"]);

    assert_eq!(
        Directory::open(tmp.path().join("missing")).map(|_| ()),
        Err(OpenDirError::MissingComponent(MissingComponentError)),
    );
    assert_eq!(
        Directory::open(tmp.path().join("file")).map(|_| ()),
        Err(OpenDirError::NonDirComponent(NonDirComponentError)),
        "Opening a regular file as a directory should fail."
    );
}
