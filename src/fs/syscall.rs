use std::ffi::CString;
use std::io;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

use libc::c_int;

use crate::fs::error::InteriorNulError;

pub(crate) fn err_no() -> c_int {
    // SAFETY: raw_os_error guarantees Some if constructed from last_os_error.
    unsafe { io::Error::last_os_error().raw_os_error().unwrap_unchecked() }
}

/// Resets errno, for calls like `readdir` which only signal failure through it.
pub(crate) fn clear_err_no() {
    // SAFETY: __errno_location always returns a valid pointer to the calling thread's errno.
    unsafe { *libc::__errno_location() = 0 };
}

pub(crate) fn to_cstring<P: AsRef<Path>>(path: P) -> Result<CString, InteriorNulError> {
    bytes_to_cstring(path.as_ref().as_os_str().as_bytes())
}

pub(crate) fn bytes_to_cstring(bytes: &[u8]) -> Result<CString, InteriorNulError> {
    CString::new(bytes).map_err(|_| InteriorNulError)
}
