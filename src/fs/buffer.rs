use std::ffi::CString;
use std::iter::FusedIterator;

use crate::fs::error::{LimitExceededError, OOMError};
use crate::util::logging::trace;

/// Controls how buffers are sized for syscalls that write a string of unknown length, like
/// `getcwd` and `readlink`.
///
/// The first attempt uses `initial` bytes. Each time the syscall reports that the buffer was too
/// small, the size is doubled, until it would exceed `max`, at which point the operation fails
/// with a [`LimitExceededError`] rather than returning a truncated result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GrowthPolicy {
    pub initial: usize,
    pub max: usize,
}

impl GrowthPolicy {
    pub const DEFAULT: GrowthPolicy = GrowthPolicy::new(1024, 16384);

    pub const fn new(initial: usize, max: usize) -> GrowthPolicy {
        GrowthPolicy {
            initial,
            max,
        }
    }

    /// Returns an iterator over the buffer sizes that will be attempted, in order.
    pub const fn sizes(&self) -> Sizes {
        Sizes {
            next: Some(self.initial),
            max: self.max,
        }
    }
}

impl Default for GrowthPolicy {
    fn default() -> Self {
        GrowthPolicy::DEFAULT
    }
}

#[derive(Debug, Clone)]
pub struct Sizes {
    next: Option<usize>,
    max: usize,
}

impl Iterator for Sizes {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next {
            Some(size) if size > 0 && size <= self.max => {
                self.next = size.checked_mul(2);
                Some(size)
            },
            _ => {
                self.next = None;
                None
            },
        }
    }
}

impl FusedIterator for Sizes {}

/// The outcome of a single attempt to fill a buffer.
pub(crate) enum Fill {
    /// The first `n` bytes of the buffer hold the result.
    Filled(usize),
    /// The result didn't fit, retry with a larger buffer.
    TooSmall,
}

/// Repeatedly invokes `call` with a zeroed buffer of each size in `policy`, until it reports
/// [`Fill::Filled`]. The result is cut at its first NUL byte, if any.
pub(crate) fn fill_growing<E, F>(policy: GrowthPolicy, mut call: F) -> Result<CString, E>
where
    E: From<OOMError> + From<LimitExceededError>,
    F: FnMut(&mut [u8]) -> Result<Fill, E>,
{
    let mut buf: Vec<u8> = Vec::new();

    for size in policy.sizes() {
        buf.clear();
        buf.try_reserve_exact(size).map_err(|_| OOMError)?;
        buf.resize(size, 0);

        match call(&mut buf)? {
            Fill::Filled(count) => {
                buf.truncate(c_len(&buf[..count.min(size)]));
                // SAFETY: The buffer was truncated before its first NUL byte.
                return Ok(unsafe { CString::from_vec_unchecked(buf) });
            },
            Fill::TooSmall => {
                trace!("buffer of {size} bytes too small, growing");
            },
        }
    }

    Err(LimitExceededError { max: policy.max })?
}

/// The length of a possibly NUL-terminated byte string.
pub(crate) fn c_len(buf: &[u8]) -> usize {
    buf.iter().position(|&b| b == 0).unwrap_or(buf.len())
}
