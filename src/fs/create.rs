use std::ffi::{CStr, OsStr};
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use derive_more::{Display, Error, From};
use libc::{
    EACCES, EDQUOT, EEXIST, EFAULT, ELOOP, ENAMETOOLONG, ENOENT, ENOMEM, ENOSPC, ENOTDIR, EPERM,
    EROFS, S_IRWXG, S_IRWXO, S_IRWXU, c_int,
};

use crate::fs::error::{
    AccessError, AlreadyExistsError, ExcessiveLinksError, InteriorNulError,
    MissingComponentError, NonDirComponentError, OOMError, OsError, PathLengthError,
    PermissionError, ReadOnlyFSError, StorageExhaustedError,
};
use crate::fs::panic::{BadStackAddrPanic, Panic};
use crate::fs::{query, syscall};
use crate::util::logging::trace;

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum MakeDirError {
    AlreadyExists(AlreadyExistsError),
    Access(AccessError),
    ExcessiveLinks(ExcessiveLinksError),
    PathLength(PathLengthError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    OOM(OOMError),
    StorageExhausted(StorageExhaustedError),
    ReadOnlyFS(ReadOnlyFSError),
    Permission(PermissionError),
    InteriorNul(InteriorNulError),
    Os(OsError),
}

impl MakeDirError {
    pub(crate) fn interpret_raw_error(error: c_int) -> MakeDirError {
        match error {
            EACCES =>          AccessError.into(),
            EEXIST =>          AlreadyExistsError.into(),
            EFAULT =>          BadStackAddrPanic.panic(),
            ELOOP =>           ExcessiveLinksError.into(),
            ENAMETOOLONG =>    PathLengthError.into(),
            ENOENT =>          MissingComponentError.into(),
            ENOMEM =>          OOMError.into(),
            ENOSPC | EDQUOT => StorageExhaustedError.into(),
            ENOTDIR =>         NonDirComponentError.into(),
            EPERM =>           PermissionError.into(),
            EROFS =>           ReadOnlyFSError.into(),
            e =>               OsError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
pub enum MakeDirAllError {
    #[display("{} exists but is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    #[display("failed to create directory {}: {error}", path.display())]
    MakeDir {
        path: PathBuf,
        #[error(source)]
        error: MakeDirError,
    },
    InteriorNul(InteriorNulError),
}

/// Creates a single directory, requesting all permissions. The process umask still applies.
pub fn make_dir<P: AsRef<Path>>(dir_path: P) -> Result<(), MakeDirError> {
    make_dir_raw(&syscall::to_cstring(dir_path)?)
}

fn make_dir_raw(pathname: &CStr) -> Result<(), MakeDirError> {
    // SAFETY: pathname is a valid NUL-terminated string for the duration of the call.
    if unsafe { libc::mkdir(pathname.as_ptr(), S_IRWXU | S_IRWXG | S_IRWXO) } == -1 {
        Err(MakeDirError::interpret_raw_error(syscall::err_no()))?
    }
    Ok(())
}

/// Creates a directory along with any missing parents, like `mkdir -p`.
///
/// Trailing separators are ignored. If the directory already exists this succeeds without doing
/// anything, so calling it repeatedly is fine. If the path, or one of its ancestors, exists as
/// something other than a directory, this fails with [`MakeDirAllError::NotADirectory`] naming it.
///
/// Ancestors are found by cutting the path at its last separator, so `.`, `..` and repeated
/// separators are passed to the OS as-is and resolved there. Nothing is rolled back on failure:
/// any ancestors created before the error remain.
pub fn make_dir_all<P: AsRef<Path>>(dir_path: P) -> Result<(), MakeDirAllError> {
    let target = trim_trailing_separators(dir_path.as_ref().as_os_str().as_bytes());
    if target.contains(&0) {
        Err(MakeDirAllError::InteriorNul(InteriorNulError))?
    }

    // Walk backwards until an existing ancestor is found, remembering everything that's missing.
    let mut missing: Vec<&[u8]> = Vec::new();
    let mut current = Some(target);

    while let Some(path) = current {
        let pathname = syscall::bytes_to_cstring(path).map_err(MakeDirAllError::InteriorNul)?;
        match query::stat_raw(&pathname, true) {
            Ok(meta) if meta.file_type.is_directory() => break,
            Ok(_) => Err(MakeDirAllError::NotADirectory {
                path: to_path_buf(path),
            })?,
            Err(_) => {
                missing.push(path);
                current = parent_of(path);
            },
        }
    }

    // Then create them from the outermost inwards.
    while let Some(path) = missing.pop() {
        let pathname = syscall::bytes_to_cstring(path).map_err(MakeDirAllError::InteriorNul)?;
        match make_dir_raw(&pathname) {
            Ok(()) => {
                trace!("created directory {}", Path::new(OsStr::from_bytes(path)).display());
            },
            // Someone else may have created it in the meantime, or the path may resolve to an
            // existing directory through a '..' component.
            Err(MakeDirError::AlreadyExists(_)) => {
                let is_dir = query::stat_raw(&pathname, true)
                    .is_ok_and(|meta| meta.file_type.is_directory());
                if !is_dir {
                    Err(MakeDirAllError::NotADirectory {
                        path: to_path_buf(path),
                    })?
                }
            },
            Err(error) => Err(MakeDirAllError::MakeDir {
                path: to_path_buf(path),
                error,
            })?,
        }
    }

    Ok(())
}

/// Strips all trailing '/' characters, but never reduces a non-empty path to nothing.
pub(crate) fn trim_trailing_separators(mut path: &[u8]) -> &[u8] {
    while let [rest @ .., b'/'] = path {
        if rest.is_empty() {
            break;
        }
        path = rest;
    }
    path
}

/// Returns everything before the last separator of `path`, or [`None`] if there is no separator
/// or everything before it is separators too, i.e. the parent would be the root. The result is
/// always strictly shorter than `path`.
pub(super) fn parent_of(path: &[u8]) -> Option<&[u8]> {
    let index = path.iter().rposition(|&b| b == b'/')?;
    let parent = trim_trailing_separators(&path[..index]);
    if parent.iter().all(|&b| b == b'/') {
        return None;
    }
    Some(parent)
}

fn to_path_buf(path: &[u8]) -> PathBuf {
    PathBuf::from(OsStr::from_bytes(path))
}
