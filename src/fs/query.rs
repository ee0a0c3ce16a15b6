use std::ffi::CStr;
use std::mem::MaybeUninit;
use std::path::Path;

use derive_more::{Display, Error, From};
use libc::{EACCES, EFAULT, ELOOP, ENAMETOOLONG, ENOENT, ENOMEM, ENOTDIR, EOVERFLOW, c_int};

use crate::fs::error::{
    AccessError, ExcessiveLinksError, InteriorNulError, MetadataOverflowError,
    MissingComponentError, NonDirComponentError, OOMError, OsError, PathLengthError,
    SizeOverflowError,
};
use crate::fs::panic::{BadStackAddrPanic, Panic};
use crate::fs::{Metadata, syscall};

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum StatError {
    Access(AccessError),
    ExcessiveLinks(ExcessiveLinksError),
    PathLength(PathLengthError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    OOM(OOMError),
    MetadataOverflow(MetadataOverflowError),
    InteriorNul(InteriorNulError),
    Os(OsError),
}

impl StatError {
    pub(crate) fn interpret_raw_error(error: c_int) -> StatError {
        match error {
            EACCES =>       AccessError.into(),
            EFAULT =>       BadStackAddrPanic.panic(),
            ELOOP =>        ExcessiveLinksError.into(),
            ENAMETOOLONG => PathLengthError.into(),
            ENOENT =>       MissingComponentError.into(),
            ENOMEM =>       OOMError.into(),
            ENOTDIR =>      NonDirComponentError.into(),
            EOVERFLOW =>    MetadataOverflowError.into(),
            e =>            OsError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum FileSizeError {
    Stat(StatError),
    SizeOverflow(SizeOverflowError),
}

pub(crate) fn stat_raw(pathname: &CStr, follow_links: bool) -> Result<Metadata, StatError> {
    let mut raw_meta: MaybeUninit<libc::stat> = MaybeUninit::uninit();
    // SAFETY: pathname is NUL-terminated and raw_meta is valid for writes of a whole stat.
    let status = unsafe {
        if follow_links {
            libc::stat(pathname.as_ptr(), raw_meta.as_mut_ptr())
        } else {
            libc::lstat(pathname.as_ptr(), raw_meta.as_mut_ptr())
        }
    };
    if status == -1 {
        Err(StatError::interpret_raw_error(syscall::err_no()))?
    }
    // SAFETY: stat and lstat either initialize raw_meta or return an error, handled above.
    let raw = unsafe { raw_meta.assume_init() };

    Ok(Metadata::from_stat(raw))
}

/// Queries the metadata of the file at `path`, following symlinks.
pub fn metadata<P: AsRef<Path>>(path: P) -> Result<Metadata, StatError> {
    stat_raw(&syscall::to_cstring(path)?, true)
}

/// Queries the metadata of the file at `path` itself. A symlink is described as a symlink rather
/// than as its target.
pub fn symlink_metadata<P: AsRef<Path>>(path: P) -> Result<Metadata, StatError> {
    stat_raw(&syscall::to_cstring(path)?, false)
}

/// Returns `true` if `path` exists and is a directory, after following symlinks. Any failure to
/// stat the path, including it not existing, produces `false`.
pub fn is_dir<P: AsRef<Path>>(path: P) -> bool {
    metadata(path).is_ok_and(|meta| meta.file_type.is_directory())
}

/// Returns `true` if `path` is itself a symlink. The link is never followed, so dangling links
/// still count.
pub fn is_symlink<P: AsRef<Path>>(path: P) -> bool {
    symlink_metadata(path).is_ok_and(|meta| meta.file_type.is_symlink())
}

/// Returns `true` if `path` can be stat-ed. A dangling symlink doesn't exist by this definition.
pub fn exists<P: AsRef<Path>>(path: P) -> bool {
    metadata(path).is_ok()
}

/// Returns the size of the file at `path` in bytes, following symlinks.
///
/// Failing to stat the file and the size not fitting in a `usize` are reported as separate
/// variants of [`FileSizeError`].
pub fn file_size<P: AsRef<Path>>(path: P) -> Result<usize, FileSizeError> {
    let meta = metadata(path)?;
    usize::try_from(meta.size).map_err(|_| SizeOverflowError.into())
}
