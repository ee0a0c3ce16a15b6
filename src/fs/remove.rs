use std::ffi::OsStr;
use std::os::unix::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use derive_more::{Display, Error};

use crate::fs::dir::{Directory, OpenDirError, ReadDirError};
use crate::fs::error::OsError;
use crate::fs::query::{self, StatError};
use crate::fs::{create, syscall};
use crate::util::logging::{debug, trace};

/// The ways a recursive removal can fail. Each variant carries the path of the entry that failed,
/// which may be anywhere below the path originally passed in.
#[derive(Debug, Display, Clone, PartialEq, Eq, Error)]
pub enum RemoveError {
    #[display("failed to stat {}: {error}", path.display())]
    Stat {
        path: PathBuf,
        #[error(source)]
        error: StatError,
    },
    #[display("failed to open directory {}: {error}", path.display())]
    OpenDir {
        path: PathBuf,
        #[error(source)]
        error: OpenDirError,
    },
    #[display("failed to read directory {}: {error}", path.display())]
    ReadDir {
        path: PathBuf,
        #[error(source)]
        error: ReadDirError,
    },
    #[display("failed to unlink {}: {error}", path.display())]
    Unlink {
        path: PathBuf,
        #[error(source)]
        error: OsError,
    },
    #[display("failed to remove directory {}: {error}", path.display())]
    RemoveDir {
        path: PathBuf,
        #[error(source)]
        error: OsError,
    },
}

/// Options for a recursive removal, like `rm -rf`. [`remove_tree`] uses the defaults.
///
/// Removal is depth-first and stops at the first error, leaving the rest of the tree, including
/// any remaining siblings of the failed entry, in place. Symlinks are removed rather than followed,
/// including a symlink passed as the root with trailing separators.
///
/// Every entry is addressed by its full path below the root, so a tree whose paths grow beyond
/// `PATH_MAX` fails with [`RemoveError::Stat`] once the walk reaches them. One directory stream is
/// held open per level of nesting while a tree is being removed.
#[derive(Debug, Clone, Copy, Default)]
pub struct RemoveOptions {
    best_effort: bool,
}

impl RemoveOptions {
    pub const fn new() -> RemoveOptions {
        RemoveOptions {
            best_effort: false,
        }
    }

    /// Controls what happens when a directory can't be opened for listing. By default the removal
    /// stops with [`RemoveError::OpenDir`]. In best-effort mode, `rmdir` is attempted anyway,
    /// which succeeds if the directory happens to be empty; the `OpenDir` error is only reported
    /// if that fails too.
    pub const fn best_effort(&mut self, value: bool) -> &mut Self {
        self.best_effort = value;
        self
    }

    pub fn remove<P: AsRef<Path>>(&self, path: P) -> Result<(), RemoveError> {
        // A trailing '/' makes lstat resolve a symlink, so the link would be walked instead.
        let root = create::trim_trailing_separators(path.as_ref().as_os_str().as_bytes());
        self.remove_entry(Path::new(OsStr::from_bytes(root)))
    }

    fn remove_entry(&self, path: &Path) -> Result<(), RemoveError> {
        let meta = query::symlink_metadata(path).map_err(|error| RemoveError::Stat {
            path: path.to_owned(),
            error,
        })?;

        if !meta.file_type.is_directory() {
            return unlink(path);
        }

        let mut dir = match Directory::open(path) {
            Ok(dir) => dir,
            Err(error) => return self.remove_unlistable(path, error),
        };

        loop {
            let child = match dir.read_entry() {
                Ok(Some(entry)) if entry.is_dot() => continue,
                Ok(Some(entry)) => path.join(OsStr::from_bytes(entry.name().to_bytes())),
                Ok(None) => break,
                Err(error) => Err(RemoveError::ReadDir {
                    path: path.to_owned(),
                    error,
                })?,
            };
            self.remove_entry(&child)?;
        }
        drop(dir);

        remove_dir(path)
    }

    /// Handles a directory which couldn't be opened for listing, according to the policy.
    pub(crate) fn remove_unlistable(
        &self,
        path: &Path,
        error: OpenDirError,
    ) -> Result<(), RemoveError> {
        if self.best_effort && remove_dir(path).is_ok() {
            debug!("removed unlistable directory {}: {error}", path.display());
            return Ok(());
        }
        Err(RemoveError::OpenDir {
            path: path.to_owned(),
            error,
        })
    }
}

/// Removes `path` and, if it is a directory, everything below it, using the default
/// [`RemoveOptions`].
pub fn remove_tree<P: AsRef<Path>>(path: P) -> Result<(), RemoveError> {
    RemoveOptions::new().remove(path)
}

fn unlink(path: &Path) -> Result<(), RemoveError> {
    let pathname = syscall::to_cstring(path).map_err(|error| RemoveError::Stat {
        path: path.to_owned(),
        error: error.into(),
    })?;
    // SAFETY: pathname is a valid NUL-terminated string for the duration of the call.
    if unsafe { libc::unlink(pathname.as_ptr()) } == -1 {
        Err(RemoveError::Unlink {
            path: path.to_owned(),
            error: OsError(syscall::err_no()),
        })?
    }
    trace!("unlinked {}", path.display());
    Ok(())
}

fn remove_dir(path: &Path) -> Result<(), RemoveError> {
    let pathname = syscall::to_cstring(path).map_err(|error| RemoveError::Stat {
        path: path.to_owned(),
        error: error.into(),
    })?;
    // SAFETY: pathname is a valid NUL-terminated string for the duration of the call.
    if unsafe { libc::rmdir(pathname.as_ptr()) } == -1 {
        Err(RemoveError::RemoveDir {
            path: path.to_owned(),
            error: OsError(syscall::err_no()),
        })?
    }
    trace!("removed directory {}", path.display());
    Ok(())
}
