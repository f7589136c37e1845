// src/core/commands/scan/cursor.rs

//! The client half of the SSCAN protocol: a single-consumer cursor that walks
//! a set one server-driven page at a time.

use super::options::ScanOptions;
use super::sscan::SScan;
use crate::core::executor::{self, CommandExecutor};
use crate::core::RedSetError;
use bytes::Bytes;
use tracing::trace;

/// The terminal (and initial) cursor sentinel.
const CURSOR_SENTINEL: &[u8] = b"0";

#[derive(Debug, Clone, PartialEq)]
enum CursorState {
    /// No page requested yet; the next request uses the initial sentinel.
    Created,
    /// Mid-iteration; holds the token from the last page, verbatim.
    InProgress(Bytes),
    /// The server returned the terminal sentinel. No further requests.
    Exhausted,
}

/// A stateful iterator over one set's members via repeated SSCAN pages.
///
/// The token sequence is strictly server-driven: the cursor stores each
/// replied token untouched and never fabricates or skips one. Exhaustion is
/// monotonic — once the terminal sentinel comes back, `next_batch` returns
/// empty pages without touching the network. Not restartable; scan again with
/// a fresh cursor. Single-consumer: sharing one instance across concurrent
/// callers is not supported.
#[derive(Debug)]
pub struct ScanCursor {
    key: Bytes,
    options: ScanOptions,
    state: CursorState,
}

impl ScanCursor {
    pub fn new(key: Bytes, options: ScanOptions) -> Self {
        Self {
            key,
            options,
            state: CursorState::Created,
        }
    }

    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// Requests the next page of members.
    ///
    /// Issues exactly one SSCAN per call while the cursor is live, and none
    /// once exhausted. An empty page does not imply exhaustion — the server
    /// may return empty intermediate pages; check `is_exhausted`.
    pub async fn next_batch(
        &mut self,
        executor: &dyn CommandExecutor,
    ) -> Result<Vec<Bytes>, RedSetError> {
        let token = match &self.state {
            CursorState::Exhausted => return Ok(vec![]),
            CursorState::Created => Bytes::from_static(CURSOR_SENTINEL),
            CursorState::InProgress(token) => token.clone(),
        };

        let cmd = SScan {
            key: self.key.clone(),
            cursor: token,
            options: self.options.clone(),
        };
        let (next_token, members) = executor::submit(executor, &cmd).await?.into_scan_page()?;

        trace!(
            members = members.len(),
            exhausted = next_token.as_ref() == CURSOR_SENTINEL,
            "scan page received"
        );

        self.state = if next_token.as_ref() == CURSOR_SENTINEL {
            CursorState::Exhausted
        } else {
            CursorState::InProgress(next_token)
        };

        Ok(members)
    }
}
