use std::ffi::CString;

use derive_more::{Display, Error, From};
use libc::{EACCES, EFAULT, ENOENT, ENOMEM, ERANGE, c_int};

use crate::fs::buffer::{self, Fill, GrowthPolicy};
use crate::fs::error::{AccessError, LimitExceededError, OOMError, OsError, RemovedDirectoryError};
use crate::fs::panic::{BadStackAddrPanic, Panic};
use crate::fs::syscall;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum CwdError {
    Access(AccessError),
    RemovedDirectory(RemovedDirectoryError),
    OOM(OOMError),
    LimitExceeded(LimitExceededError),
    Os(OsError),
}

impl CwdError {
    pub(crate) fn interpret_raw_error(error: c_int) -> CwdError {
        match error {
            EACCES => AccessError.into(),
            ENOENT => RemovedDirectoryError.into(),
            ENOMEM => OOMError.into(),
            e =>      OsError(e).into(),
        }
    }
}

/// Returns the absolute path of the current working directory, using
/// [`GrowthPolicy::DEFAULT`].
pub fn current_dir() -> Result<CString, CwdError> {
    current_dir_with(GrowthPolicy::DEFAULT)
}

/// Returns the absolute path of the current working directory. The path is never truncated: if it
/// doesn't fit in `policy.max` bytes (including the terminator), this fails with
/// [`CwdError::LimitExceeded`].
pub fn current_dir_with(policy: GrowthPolicy) -> Result<CString, CwdError> {
    buffer::fill_growing(policy, |buf| {
        // SAFETY: buf is valid for writes of buf.len() bytes, which getcwd won't exceed.
        if unsafe { libc::getcwd(buf.as_mut_ptr().cast(), buf.len()) }.is_null() {
            match syscall::err_no() {
                ERANGE => Ok(Fill::TooSmall),
                EFAULT => BadStackAddrPanic.panic(),
                e =>      Err(CwdError::interpret_raw_error(e)),
            }
        } else {
            Ok(Fill::Filled(buffer::c_len(buf)))
        }
    })
}
