//! Small filesystem utilities over `libc`: directory listing, file type and size queries,
//! `mkdir -p`, `rm -rf`, and reading the working directory and symlink targets without a
//! fixed-size buffer.
//!
//! # Purpose
//! This crate is a binding layer, meant to be called by a host that supplies paths and takes
//! ownership of the strings returned to it. Every operation in [`fs`] is an independent wrapper
//! around one or two syscalls. There is no caching, no batching and no shared state between calls.
//!
//! # Error Handling
//! Predicates like [`fs::is_dir`] collapse every failure to `false`, since that is the answer the
//! caller is asking for. Everything else returns a [`Result`] with an error enum specific to the
//! operation. Each enum is composed of small structs (mostly ZSTs) which implement
//! [`Error`](std::error::Error), one per distinguishable cause, so callers can match on exactly
//! the causes they care about. An `errno` that doesn't map to a known cause is passed through in
//! [`fs::OsError`]. Errors from the recursive operations also carry the path that failed.
//!
//! `errno` values which can only result from memory corruption or bugs in this crate, such as
//! `EFAULT` or `EBADF`, panic instead.
//!
//! # Dependencies
//! The [`fs`] module relies on `libc` for its thin syscall wrappers. Error types use derive macros
//! from `derive_more`, because they remove the need for some very repetitive programming. With the
//! default `log` feature, the recursive operations emit `trace` records through the `log` facade.
#![warn(clippy::missing_safety_doc)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod fs;

pub(crate) mod util;
