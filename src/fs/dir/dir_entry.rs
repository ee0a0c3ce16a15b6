use std::ffi::CStr;
use std::fmt::{self, Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::fs::FileType;
use crate::fs::dir::Directory;

/// A single entry of a [`Directory`], as returned by `readdir`.
///
/// The entry points into storage owned by the directory stream which is overwritten by the next
/// read, so it mutably borrows the `Directory` it came from.
pub struct DirEntry<'a> {
    raw: NonNull<libc::dirent>,
    _dir: PhantomData<&'a mut Directory>,
}

impl<'a> DirEntry<'a> {
    pub(crate) const fn new(raw: NonNull<libc::dirent>) -> DirEntry<'a> {
        DirEntry {
            raw,
            _dir: PhantomData,
        }
    }

    /// The entry's name, borrowed from the directory stream.
    pub fn name(&self) -> &CStr {
        // SAFETY: d_name is NUL-terminated and the record remains valid while self borrows the
        // stream. Only the field's address is taken, since records may be shorter than dirent.
        unsafe { CStr::from_ptr((&raw const (*self.raw.as_ptr()).d_name).cast()) }
    }

    /// The type reported by the file system, if it reports one at all.
    pub fn file_type(&self) -> Option<FileType> {
        // SAFETY: d_type lies within the fixed-size header of every record.
        FileType::from_dirent_type(unsafe { (*self.raw.as_ptr()).d_type })
    }

    #[allow(clippy::unnecessary_cast)]
    pub fn inode(&self) -> u64 {
        // SAFETY: d_ino lies within the fixed-size header of every record.
        unsafe { (*self.raw.as_ptr()).d_ino as u64 }
    }

    /// Returns `true` for the `.` and `..` entries.
    pub fn is_dot(&self) -> bool {
        matches!(self.name().to_bytes(), b"." | b"..")
    }
}

impl Debug for DirEntry<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("DirEntry")
            .field("name", &self.name())
            .field("file_type", &self.file_type())
            .finish()
    }
}
