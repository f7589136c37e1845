// src/core/errors.rs

//! Defines the primary error type for the entire crate.

use std::sync::Arc;
use thiserror::Error;

/// The main error enum, representing all possible failures within the adapter.
/// Using `thiserror` allows for clean error definitions and automatic `From` trait implementations.
#[derive(Error, Debug)]
pub enum RedSetError {
    #[error("IO Error: {0}")]
    Io(Arc<std::io::Error>),

    /// A transport-level failure reported by the command executor. Surfaced
    /// unchanged to the caller; this layer never retries.
    #[error("Transport failure: {0}")]
    Transport(String),

    /// The server replied with a shape that does not match the command's contract.
    #[error("Unexpected reply: expected {expected}, got {actual}")]
    UnexpectedReply {
        expected: &'static str,
        actual: String,
    },

    /// An error reply from the server (e.g. WRONGTYPE), passed through verbatim.
    #[error("Server error: {0}")]
    Server(String),

    /// A codec could not convert between the domain type and its byte form.
    #[error("Codec error: {0}")]
    Codec(String),

    /// A script resource could not be read. Raised synchronously, before any
    /// network interaction.
    #[error("Failed to load script resource '{path}': {source}")]
    ResourceLoad {
        path: String,
        source: Arc<std::io::Error>,
    },

    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

// Manual implementation of Clone because `std::io::Error` is not cloneable.
// We wrap it in an Arc to allow for cheap, shared cloning.
impl Clone for RedSetError {
    fn clone(&self) -> Self {
        match self {
            RedSetError::Io(e) => RedSetError::Io(Arc::clone(e)),
            RedSetError::Transport(s) => RedSetError::Transport(s.clone()),
            RedSetError::UnexpectedReply { expected, actual } => RedSetError::UnexpectedReply {
                expected,
                actual: actual.clone(),
            },
            RedSetError::Server(s) => RedSetError::Server(s.clone()),
            RedSetError::Codec(s) => RedSetError::Codec(s.clone()),
            RedSetError::ResourceLoad { path, source } => RedSetError::ResourceLoad {
                path: path.clone(),
                source: Arc::clone(source),
            },
            RedSetError::InvalidRequest(s) => RedSetError::InvalidRequest(s.clone()),
        }
    }
}

impl PartialEq for RedSetError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RedSetError::Io(e1), RedSetError::Io(e2)) => e1.to_string() == e2.to_string(),
            (RedSetError::Transport(s1), RedSetError::Transport(s2)) => s1 == s2,
            (
                RedSetError::UnexpectedReply {
                    expected: e1,
                    actual: a1,
                },
                RedSetError::UnexpectedReply {
                    expected: e2,
                    actual: a2,
                },
            ) => e1 == e2 && a1 == a2,
            (RedSetError::Server(s1), RedSetError::Server(s2)) => s1 == s2,
            (RedSetError::Codec(s1), RedSetError::Codec(s2)) => s1 == s2,
            (
                RedSetError::ResourceLoad {
                    path: p1,
                    source: e1,
                },
                RedSetError::ResourceLoad {
                    path: p2,
                    source: e2,
                },
            ) => p1 == p2 && e1.to_string() == e2.to_string(),
            (RedSetError::InvalidRequest(s1), RedSetError::InvalidRequest(s2)) => s1 == s2,
            _ => false,
        }
    }
}

// --- From trait implementations for easy error conversion ---

impl From<std::io::Error> for RedSetError {
    fn from(e: std::io::Error) -> Self {
        RedSetError::Io(Arc::new(e))
    }
}

impl From<std::str::Utf8Error> for RedSetError {
    fn from(e: std::str::Utf8Error) -> Self {
        RedSetError::Codec(e.to_string())
    }
}

impl From<std::string::FromUtf8Error> for RedSetError {
    fn from(e: std::string::FromUtf8Error) -> Self {
        RedSetError::Codec(e.to_string())
    }
}
