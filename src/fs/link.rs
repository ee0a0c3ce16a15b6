use std::ffi::CString;
use std::path::Path;

use derive_more::{Display, Error, From};
use libc::{EACCES, EFAULT, EINVAL, EIO, ELOOP, ENAMETOOLONG, ENOENT, ENOMEM, ENOTDIR, c_int};

use crate::fs::buffer::{self, Fill, GrowthPolicy};
use crate::fs::error::{
    AccessError, ExcessiveLinksError, IOError, InteriorNulError, LimitExceededError,
    MissingComponentError, NonDirComponentError, NotALinkError, OOMError, OsError,
    PathLengthError,
};
use crate::fs::panic::{BadStackAddrPanic, Panic};
use crate::fs::syscall;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum ReadLinkError {
    Access(AccessError),
    IO(IOError),
    ExcessiveLinks(ExcessiveLinksError),
    PathLength(PathLengthError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    NotALink(NotALinkError),
    OOM(OOMError),
    LimitExceeded(LimitExceededError),
    InteriorNul(InteriorNulError),
    Os(OsError),
}

impl ReadLinkError {
    pub(crate) fn interpret_raw_error(error: c_int) -> ReadLinkError {
        match error {
            EACCES =>       AccessError.into(),
            EFAULT =>       BadStackAddrPanic.panic(),
            EINVAL =>       NotALinkError.into(),
            EIO =>          IOError.into(),
            ELOOP =>        ExcessiveLinksError.into(),
            ENAMETOOLONG => PathLengthError.into(),
            ENOENT =>       MissingComponentError.into(),
            ENOMEM =>       OOMError.into(),
            ENOTDIR =>      NonDirComponentError.into(),
            e =>            OsError(e).into(),
        }
    }
}

/// Reads the target of the symlink at `link_path`, using [`GrowthPolicy::DEFAULT`].
pub fn read_link<P: AsRef<Path>>(link_path: P) -> Result<CString, ReadLinkError> {
    read_link_with(link_path, GrowthPolicy::DEFAULT)
}

/// Reads the target of the symlink at `link_path`.
///
/// `readlink` silently truncates when the buffer is too small, so a result is only accepted if it
/// leaves at least two bytes of the buffer unused. Otherwise the buffer grows according to
/// `policy`.
pub fn read_link_with<P: AsRef<Path>>(
    link_path: P,
    policy: GrowthPolicy,
) -> Result<CString, ReadLinkError> {
    let pathname = syscall::to_cstring(link_path)?;

    buffer::fill_growing(policy, |buf| {
        // SAFETY: pathname is NUL-terminated and buf is valid for writes of buf.len() bytes.
        match unsafe { libc::readlink(pathname.as_ptr(), buf.as_mut_ptr().cast(), buf.len()) } {
            -1 => Err(ReadLinkError::interpret_raw_error(syscall::err_no())),
            count if (count as usize) < buf.len() - 1 => Ok(Fill::Filled(count as usize)),
            _ => Ok(Fill::TooSmall),
        }
    })
}
