use std::env;
use std::os::unix::ffi::OsStrExt;

use serial_test::serial;

use super::{in_dir, scratch};
use crate::fs::{self, CwdError, GrowthPolicy, LimitExceededError};

#[test]
#[serial(cwd)]
fn test_current_dir() {
    let expected = env::current_dir().expect("cwd should be readable");
    assert_eq!(
        fs::current_dir().expect("cwd should fit").as_bytes(),
        expected.as_os_str().as_bytes(),
    );
}

#[test]
#[serial(cwd)]
fn test_current_dir_growth() {
    let tmp = scratch();
    // Several components of 200 bytes, enough to need at least two doublings of the default.
    let deep = (0..12).fold(tmp.path().canonicalize().expect("should canonicalize"), |path, i| {
        path.join(format!("{i:0>200}"))
    });
    fs::make_dir_all(&deep).expect("deep tree should be creatable");
    assert!(deep.as_os_str().len() > 2048);

    in_dir(&deep, || {
        assert_eq!(
            fs::current_dir().expect("cwd should fit").as_bytes(),
            deep.as_os_str().as_bytes(),
            "A path longer than the initial buffer should be returned whole."
        );
        assert_eq!(
            fs::current_dir_with(GrowthPolicy::new(1, 16384))
                .expect("cwd should fit")
                .as_bytes(),
            deep.as_os_str().as_bytes(),
            "Growing from a tiny buffer should give the same result."
        );
    });
}

#[test]
#[serial(cwd)]
fn test_current_dir_limit() {
    let tmp = scratch();
    let dir = tmp.path().canonicalize().expect("should canonicalize");
    let len = dir.as_os_str().len();

    in_dir(&dir, || {
        assert_eq!(
            fs::current_dir_with(GrowthPolicy::new(len, len)),
            Err(CwdError::LimitExceeded(LimitExceededError { max: len })),
            "A buffer without room for the terminator should fail, never truncate."
        );
        assert_eq!(
            fs::current_dir_with(GrowthPolicy::new(len + 1, len + 1))
                .expect("cwd should exactly fit")
                .as_bytes(),
            dir.as_os_str().as_bytes(),
            "A buffer with exactly enough room should succeed."
        );
    });
}
