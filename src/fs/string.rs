//! Helpers for the owned strings returned throughout [`fs`](crate::fs).
//!
//! Every string this crate produces is a [`CString`] owned by the caller. A released string is
//! represented by [`None`], so a released slot can't be read by accident.

use std::ffi::{CStr, CString};

/// Drops the string held in `slot`, leaving [`None`] behind. Releasing an empty slot does nothing.
pub fn release(slot: &mut Option<CString>) {
    drop(slot.take());
}

/// Copies `value` into a newly allocated string, returning [`None`] if the allocation fails.
pub fn copy(value: &CStr) -> Option<CString> {
    let bytes = value.to_bytes_with_nul();
    let mut buf = Vec::new();
    buf.try_reserve_exact(bytes.len()).ok()?;
    buf.extend_from_slice(bytes);
    CString::from_vec_with_nul(buf).ok()
}
