//! Types for listing the entries of a directory, primarily [`Directory`] and [`DirEntry`].
//!
//! A `Directory` owns an open directory stream for as long as it lives. Entries can be read raw,
//! borrowing the stream's internal record via [`Directory::read_entry`], or as owned names via
//! [`Directory::next_name`] and [`Directory::names`], which skip `.` and `..`.
//!
//! # Consistency
//! Entries added or removed while a listing is in progress may or may not be reported, exactly as
//! with `readdir`. Nothing here synchronizes with other threads or processes touching the same
//! directory.

mod dir;
mod dir_entry;
mod error;

pub use dir::*;
pub use dir_entry::*;
pub use error::*;

mod tests;
