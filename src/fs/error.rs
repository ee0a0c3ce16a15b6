use libc::c_int;

use derive_more::{Display, Error};

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("interrupted by signal")]
pub struct InterruptError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("error during I/O")]
pub struct IOError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("available storage space exhausted")]
pub struct StorageExhaustedError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("file metadata would overflow capacity")]
pub struct MetadataOverflowError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("file size does not fit in usize")]
pub struct SizeOverflowError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("out of memory")]
pub struct OOMError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("exceeded open file limit")]
pub struct FileCountError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("directory no longer exists")]
pub struct RemovedDirectoryError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("permission denied for the provided path or one of its directories")]
pub struct AccessError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("operation not permitted")]
pub struct PermissionError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path contains too many symlinks")]
pub struct ExcessiveLinksError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path is too long")]
pub struct PathLengthError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("a component of the provided path does not exist")]
pub struct MissingComponentError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("a component of the provided path is not a directory")]
pub struct NonDirComponentError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("path contains an interior nul byte")]
pub struct InteriorNulError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("file already exists")]
pub struct AlreadyExistsError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("file system is read-only")]
pub struct ReadOnlyFSError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("file is not a symlink")]
pub struct NotALinkError;

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("result would exceed the buffer limit of {max} bytes")]
pub struct LimitExceededError {
    pub max: usize,
}

/// An errno value with no more specific interpretation, passed through verbatim.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Error)]
#[display("OS error with code: {_0}")]
pub struct OsError(#[error(not(source))] pub c_int);
