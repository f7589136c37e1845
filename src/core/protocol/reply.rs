// src/core/protocol/reply.rs

//! Defines the decoded reply type produced by a `CommandExecutor`.

use crate::core::RedSetError;
use bytes::Bytes;

/// `Reply` is the decoded response to a single command.
///
/// The executor owns the wire protocol; this layer only sees the decoded shape.
/// Each command knows which variants it may legally receive, and the typed
/// extraction helpers below turn a mismatched shape into an `UnexpectedReply`
/// error rather than a panic.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    SimpleString(String),
    BulkString(Bytes),
    Integer(i64),
    Array(Vec<Reply>),
    Null,
    NullArray,
    Error(String),
}

impl Reply {
    /// Short variant name used in `UnexpectedReply` messages.
    fn kind(&self) -> String {
        match self {
            Reply::SimpleString(s) => format!("simple string '{s}'"),
            Reply::BulkString(_) => "bulk string".to_string(),
            Reply::Integer(i) => format!("integer {i}"),
            Reply::Array(items) => format!("array of {}", items.len()),
            Reply::Null => "null".to_string(),
            Reply::NullArray => "null array".to_string(),
            Reply::Error(e) => format!("error '{e}'"),
        }
    }

    fn unexpected(self, expected: &'static str) -> RedSetError {
        match self {
            // A server-reported error always wins over a shape mismatch.
            Reply::Error(msg) => RedSetError::Server(msg),
            other => RedSetError::UnexpectedReply {
                expected,
                actual: other.kind(),
            },
        }
    }

    /// Extracts an integer reply.
    pub fn into_integer(self) -> Result<i64, RedSetError> {
        match self {
            Reply::Integer(i) => Ok(i),
            other => Err(other.unexpected("integer")),
        }
    }

    /// Extracts an integer reply interpreted as a boolean (0 or 1).
    pub fn into_bool(self) -> Result<bool, RedSetError> {
        Ok(self.into_integer()? != 0)
    }

    /// Extracts a bulk string reply, treating nil as an absent value.
    pub fn into_optional_bulk(self) -> Result<Option<Bytes>, RedSetError> {
        match self {
            Reply::BulkString(b) => Ok(Some(b)),
            Reply::Null | Reply::NullArray => Ok(None),
            other => Err(other.unexpected("bulk string or nil")),
        }
    }

    /// Extracts an array of bulk strings. A nil array decodes to an empty vector.
    pub fn into_bulk_array(self) -> Result<Vec<Bytes>, RedSetError> {
        match self {
            Reply::Array(items) => items
                .into_iter()
                .map(|item| match item {
                    Reply::BulkString(b) => Ok(b),
                    other => Err(other.unexpected("bulk string element")),
                })
                .collect(),
            Reply::NullArray | Reply::Null => Ok(vec![]),
            other => Err(other.unexpected("array of bulk strings")),
        }
    }

    /// Extracts an array of 0/1 integers as booleans (SMISMEMBER-style replies).
    pub fn into_bool_array(self) -> Result<Vec<bool>, RedSetError> {
        match self {
            Reply::Array(items) => items.into_iter().map(Reply::into_bool).collect(),
            other => Err(other.unexpected("array of integers")),
        }
    }

    /// Extracts a scan page: a two-element array of `[next-cursor, members]`.
    ///
    /// The cursor token is returned verbatim; this layer never parses it into
    /// a number. The server alone drives the token sequence.
    pub fn into_scan_page(self) -> Result<(Bytes, Vec<Bytes>), RedSetError> {
        match self {
            Reply::Array(mut items) if items.len() == 2 => {
                // Pop order is members first; the length guard makes both unwraps safe.
                let members = items.pop().unwrap().into_bulk_array()?;
                let cursor = match items.pop().unwrap() {
                    Reply::BulkString(b) => b,
                    other => return Err(other.unexpected("scan cursor token")),
                };
                Ok((cursor, members))
            }
            other => Err(other.unexpected("two-element scan page")),
        }
    }
}
