// src/core/commands/helpers.rs

//! Provides helper functions for rendering command arguments.

use bytes::Bytes;

/// Renders a signed integer argument (counts, limits) into its wire form.
pub fn format_int(value: i64) -> Bytes {
    let mut buf = itoa::Buffer::new();
    Bytes::copy_from_slice(buf.format(value).as_bytes())
}
