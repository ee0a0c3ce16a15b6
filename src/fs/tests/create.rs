use std::os::unix::fs::symlink;

use super::{make_dirs, scratch, write_file};
use crate::fs::{
    self, AlreadyExistsError, MakeDirAllError, MakeDirError, MissingComponentError, parent_of,
    trim_trailing_separators,
};

#[test]
fn test_make_dir() {
    let tmp = scratch();
    let dir = tmp.path().join("dir");

    assert_eq!(fs::make_dir(&dir), Ok(()));
    assert!(fs::is_dir(&dir), "The directory should exist after creation.");
    assert_eq!(
        fs::make_dir(&dir),
        Err(MakeDirError::AlreadyExists(AlreadyExistsError)),
        "Creating a single directory twice should fail."
    );
    assert_eq!(
        fs::make_dir(tmp.path().join("a/b")),
        Err(MakeDirError::MissingComponent(MissingComponentError)),
        "make_dir shouldn't create parents."
    );
}

#[test]
fn test_make_dir_all() {
    let tmp = scratch();
    let root = tmp.path();

    assert_eq!(fs::make_dir_all(root.join("a/b/c/")), Ok(()));
    assert!(fs::is_dir(root.join("a")));
    assert!(fs::is_dir(root.join("a/b")));
    assert!(fs::is_dir(root.join("a/b/c")), "Every level, including the last, should exist.");

    assert_eq!(
        fs::make_dir_all(root.join("a/b/c/")),
        Ok(()),
        "Creating an existing tree again should succeed."
    );
    assert_eq!(fs::make_dir_all(root.join("a/b/c")), Ok(()));
}

#[test]
fn test_make_dir_all_odd_components() {
    let tmp = scratch();
    let root = tmp.path();

    assert_eq!(fs::make_dir_all(root.join("x//y///")), Ok(()));
    assert!(fs::is_dir(root.join("x/y")), "Repeated separators should be tolerated.");

    assert_eq!(fs::make_dir_all(root.join("p/./q/../r")), Ok(()));
    assert!(fs::is_dir(root.join("p/q")));
    assert!(fs::is_dir(root.join("p/r")), "'.' and '..' should resolve as the OS sees them.");

    assert_eq!(fs::make_dir_all("/"), Ok(()), "The root always exists.");
}

#[test]
fn test_make_dir_all_through_file() {
    let tmp = scratch();
    let file = tmp.path().join("file");
    write_file(&file, b"not a directory");

    assert_eq!(
        fs::make_dir_all(&file),
        Err(MakeDirAllError::NotADirectory { path: file.clone() }),
        "An existing non-directory target should fail distinctly."
    );
    assert_eq!(
        fs::make_dir_all(file.join("a/b")),
        Err(MakeDirAllError::NotADirectory { path: file.clone() }),
        "The offending ancestor should be reported."
    );
    assert!(!fs::exists(file.join("a")));
}

#[test]
fn test_make_dir_all_through_symlink() {
    let tmp = scratch();
    make_dirs(tmp.path(), &["real"]);
    let link = tmp.path().join("link");
    symlink(tmp.path().join("real"), &link).expect("symlink should be creatable");

    assert_eq!(
        fs::make_dir_all(link.join("nested")),
        Ok(()),
        "A symlink to a directory should count as a directory."
    );
    assert!(fs::is_dir(tmp.path().join("real/nested")));
}

#[test]
fn test_trim_trailing_separators() {
    assert_eq!(trim_trailing_separators(b"a/b/"), b"a/b");
    assert_eq!(trim_trailing_separators(b"a//"), b"a", "All trailing separators should go.");
    assert_eq!(trim_trailing_separators(b"/"), b"/", "The root should be left alone.");
    assert_eq!(trim_trailing_separators(b"//"), b"/");
    assert_eq!(trim_trailing_separators(b""), b"");
}

#[test]
fn test_parent_of() {
    assert_eq!(parent_of(b"a/b/c"), Some(&b"a/b"[..]));
    assert_eq!(parent_of(b"a//b"), Some(&b"a"[..]), "Repeated separators should be skipped.");
    assert_eq!(parent_of(b"./a"), Some(&b"."[..]));
    assert_eq!(parent_of(b"a/.."), Some(&b"a"[..]));
    assert_eq!(parent_of(b"a"), None, "A single component has no parent to create.");
    assert_eq!(parent_of(b"/a"), None, "The root is never created.");
    assert_eq!(parent_of(b"//a"), None, "Leading separators all name the root.");
    assert_eq!(parent_of(b"///a//"), None);
}
