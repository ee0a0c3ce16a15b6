use std::ffi::CString;
use std::fmt::{self, Debug, Formatter};
use std::iter::FusedIterator;
use std::mem::ManuallyDrop;
use std::path::Path;
use std::ptr::NonNull;
use std::thread;

use crate::fs::dir::{CloseError, DirEntry, OpenDirError, ReadDirError};
use crate::fs::{string, syscall};

/// An open directory stream. The stream is closed when this is dropped, or explicitly with
/// [`Directory::close`] to observe any error.
pub struct Directory {
    pub(crate) dirp: NonNull<libc::DIR>,
}

impl Directory {
    pub fn open<P: AsRef<Path>>(dir_path: P) -> Result<Directory, OpenDirError> {
        let pathname = syscall::to_cstring(dir_path)?;

        // SAFETY: pathname is a valid NUL-terminated string for the duration of the call.
        match NonNull::new(unsafe { libc::opendir(pathname.as_ptr()) }) {
            Some(dirp) => Ok(Directory {
                dirp,
            }),
            None => Err(OpenDirError::interpret_raw_error(syscall::err_no())),
        }
    }

    /// Reads the next raw entry of the directory, including `.` and `..`. Returns `Ok(None)` once
    /// the end of the directory is reached.
    pub fn read_entry(&mut self) -> Result<Option<DirEntry<'_>>, ReadDirError> {
        // readdir returns NULL both at the end and on error, only errno tells them apart.
        syscall::clear_err_no();
        // SAFETY: dirp is an open stream owned by self and &mut self rules out concurrent reads.
        let raw = unsafe { libc::readdir(self.dirp.as_ptr()) };

        match NonNull::new(raw) {
            Some(raw) => Ok(Some(DirEntry::new(raw))),
            None => match syscall::err_no() {
                0 => Ok(None),
                e => Err(ReadDirError::interpret_raw_error(e)),
            },
        }
    }

    /// Returns a newly allocated copy of the next entry's name, skipping `.` and `..`.
    ///
    /// Reaching the end of the directory, a read error and an allocation failure all produce
    /// [`None`]. Use [`Directory::read_entry`] if they need to be told apart.
    pub fn next_name(&mut self) -> Option<CString> {
        loop {
            let entry = self.read_entry().ok()??;
            if !entry.is_dot() {
                return string::copy(entry.name());
            }
        }
    }

    pub fn names(&mut self) -> Names<'_> {
        Names {
            dir: self,
            done: false,
        }
    }

    pub fn close(self) -> Result<(), CloseError> {
        let dir = ManuallyDrop::new(self);
        // SAFETY: closedir invalidates the stream regardless of the outcome, so this method takes
        // ownership of self and skips Drop.
        if unsafe { libc::closedir(dir.dirp.as_ptr()) } == -1 {
            Err(CloseError::interpret_raw_error(syscall::err_no()))?
        }
        Ok(())
    }
}

impl Drop for Directory {
    fn drop(&mut self) {
        // SAFETY: After this, the stream is invalidated but we are dropping self so it doesn't
        // matter.
        if unsafe { libc::closedir(self.dirp.as_ptr()) } == -1
            // Panic only if we aren't already, to prevent aborting an existing unwind.
            && !thread::panicking()
        {
            panic!(
                "error while dropping directory stream: {}",
                CloseError::interpret_raw_error(syscall::err_no())
            );
        }
    }
}

impl Debug for Directory {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Directory({:?})", self.dirp)
    }
}

/// An iterator over the owned names of a directory's entries, excluding `.` and `..`. Created by
/// [`Directory::names`].
#[derive(Debug)]
pub struct Names<'a> {
    dir: &'a mut Directory,
    done: bool,
}

impl Iterator for Names<'_> {
    type Item = CString;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let name = self.dir.next_name();
        self.done = name.is_none();
        name
    }
}

impl FusedIterator for Names<'_> {}
