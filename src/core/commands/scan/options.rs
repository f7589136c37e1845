// src/core/commands/scan/options.rs

use crate::core::commands::helpers::format_int;
use bytes::Bytes;

/// Options for SCAN-family commands: an optional MATCH glob pattern and an
/// optional COUNT batch-size hint. Immutable once built; the default applies
/// no filter and leaves the batch size to the server.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScanOptions {
    pattern: Option<Bytes>,
    count: Option<usize>,
}

impl ScanOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a Redis-style glob pattern; matching happens on the server.
    pub fn match_pattern(mut self, pattern: impl Into<Bytes>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    /// Sets the batch-size hint. The server treats it as advisory and a batch
    /// may still be larger or smaller; zero is clamped to one.
    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count.max(1));
        self
    }

    pub fn pattern(&self) -> Option<&Bytes> {
        self.pattern.as_ref()
    }

    pub fn count_hint(&self) -> Option<usize> {
        self.count
    }

    /// Formats the optional MATCH and COUNT arguments into the command tail.
    pub fn to_args(&self) -> Vec<Bytes> {
        let mut args = Vec::new();
        if let Some(p) = &self.pattern {
            args.push("MATCH".into());
            args.push(p.clone());
        }
        if let Some(c) = self.count {
            args.push("COUNT".into());
            args.push(format_int(c as i64));
        }
        args
    }
}
