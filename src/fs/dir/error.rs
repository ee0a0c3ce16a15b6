use derive_more::{Display, Error, From};
use libc::{EACCES, EBADF, EINTR, EIO, ELOOP, EMFILE, ENAMETOOLONG, ENFILE, ENOENT, ENOMEM, ENOTDIR, c_int};

use crate::fs::error::{
    AccessError, ExcessiveLinksError, FileCountError, IOError, InteriorNulError, InterruptError,
    MissingComponentError, NonDirComponentError, OOMError, OsError, PathLengthError,
    RemovedDirectoryError,
};
use crate::fs::panic::{BadFdPanic, Panic};

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum OpenDirError {
    Access(AccessError),
    ExcessiveLinks(ExcessiveLinksError),
    FileCount(FileCountError),
    PathLength(PathLengthError),
    MissingComponent(MissingComponentError),
    NonDirComponent(NonDirComponentError),
    OOM(OOMError),
    InteriorNul(InteriorNulError),
    Os(OsError),
}

impl OpenDirError {
    pub(crate) fn interpret_raw_error(error: c_int) -> OpenDirError {
        match error {
            EACCES =>          AccessError.into(),
            ELOOP =>           ExcessiveLinksError.into(),
            EMFILE | ENFILE => FileCountError.into(),
            ENAMETOOLONG =>    PathLengthError.into(),
            ENOENT =>          MissingComponentError.into(),
            ENOMEM =>          OOMError.into(),
            ENOTDIR =>         NonDirComponentError.into(),
            e =>               OsError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum ReadDirError {
    RemovedDirectory(RemovedDirectoryError),
    IO(IOError),
    Os(OsError),
}

impl ReadDirError {
    pub(crate) fn interpret_raw_error(error: c_int) -> ReadDirError {
        match error {
            EBADF =>  BadFdPanic.panic(),
            ENOENT => RemovedDirectoryError.into(),
            EIO =>    IOError.into(),
            e =>      OsError(e).into(),
        }
    }
}

#[derive(Debug, Display, Clone, PartialEq, Eq, From, Error)]
pub enum CloseError {
    Interrupt(InterruptError),
    IO(IOError),
    Os(OsError),
}

impl CloseError {
    pub(crate) fn interpret_raw_error(error: c_int) -> CloseError {
        match error {
            EBADF => BadFdPanic.panic(),
            EINTR => InterruptError.into(),
            EIO =>   IOError.into(),
            e =>     OsError(e).into(),
        }
    }
}
