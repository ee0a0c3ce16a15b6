//! Thin, strongly typed wrappers around the POSIX filesystem calls this crate is concerned with.
//!
//! Each function wraps one or two syscalls. Where the underlying call needs a caller-supplied
//! buffer of unknown size (`getcwd`, `readlink`), the buffer is grown according to a
//! [`GrowthPolicy`] instead, and where the call reports errors through `errno` the value is
//! interpreted into a per-operation error enum.
//!
//! # Paths
//! All functions take anything that is [`AsRef<Path>`](std::path::Path) and pass it to the OS
//! unchanged, so relative paths resolve against the current working directory at the time of
//! the call. Paths containing an interior nul byte can't be represented and are rejected with
//! [`InteriorNulError`].
//!
//! # Strings
//! Strings produced by this module (directory entry names, the working directory, link targets)
//! are [`CString`](std::ffi::CString)s owned by the caller. See [`string`] for releasing and
//! copying them.
//!
//! # Concurrency
//! Everything here is synchronous and blocking. [`make_dir_all`] and [`remove_tree`] touch many
//! paths one after another and are not atomic: another thread or process modifying the same tree
//! at the same time races with them exactly as it would with the raw syscalls, and a failure
//! partway leaves the tree partially created or removed.
#![cfg(target_os = "linux")]

pub mod dir;
pub mod string;

mod buffer;
mod create;
mod cwd;
mod error;
mod file_type;
mod link;
mod metadata;
mod panic;
mod query;
mod remove;
mod syscall;

pub use buffer::*;
pub use create::*;
pub use cwd::*;
pub use dir::Directory;
pub use error::*;
pub use file_type::*;
pub use link::*;
pub use metadata::*;
pub use query::*;
pub use remove::*;

mod tests;
