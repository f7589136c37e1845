// src/core/scripting/script.rs

//! Typed, immutable script handles.
//!
//! A `Script<T>` binds source text to the reply type its evaluation is
//! expected to produce. The binding happens once, at construction, and the
//! handle is immutable afterward; evaluation itself lives behind the
//! executor, outside this crate.

use crate::core::protocol::Reply;
use crate::core::RedSetError;
use bytes::Bytes;
use sha1::{Digest, Sha1};
use std::fmt;
use std::marker::PhantomData;
use std::path::Path;
use std::sync::Arc;

/// Decodes an evaluation reply into the handle's bound output type.
pub trait ScriptOutput: Sized {
    fn from_reply(reply: Reply) -> Result<Self, RedSetError>;
}

impl ScriptOutput for i64 {
    fn from_reply(reply: Reply) -> Result<Self, RedSetError> {
        reply.into_integer()
    }
}

impl ScriptOutput for bool {
    fn from_reply(reply: Reply) -> Result<Self, RedSetError> {
        reply.into_bool()
    }
}

impl ScriptOutput for Bytes {
    fn from_reply(reply: Reply) -> Result<Self, RedSetError> {
        match reply.into_optional_bulk()? {
            Some(b) => Ok(b),
            None => Err(RedSetError::UnexpectedReply {
                expected: "bulk string",
                actual: "null".to_string(),
            }),
        }
    }
}

impl ScriptOutput for String {
    fn from_reply(reply: Reply) -> Result<Self, RedSetError> {
        match reply {
            Reply::SimpleString(s) => Ok(s),
            other => {
                let raw = Bytes::from_reply(other)?;
                Ok(String::from_utf8(raw.to_vec())?)
            }
        }
    }
}

impl ScriptOutput for Vec<Bytes> {
    fn from_reply(reply: Reply) -> Result<Self, RedSetError> {
        reply.into_bulk_array()
    }
}

/// Status-only scripts: any non-error reply counts as success.
impl ScriptOutput for () {
    fn from_reply(reply: Reply) -> Result<Self, RedSetError> {
        match reply {
            Reply::Error(msg) => Err(RedSetError::Server(msg)),
            _ => Ok(()),
        }
    }
}

/// An immutable handle binding script source to an expected reply type.
///
/// The SHA-1 hex digest is computed eagerly at construction; it is the
/// identifier an EVALSHA-style evaluation layer would use. The body is kept
/// verbatim — never transformed.
pub struct Script<T> {
    body: Bytes,
    sha1: String,
    _out: PhantomData<fn() -> T>,
}

impl<T> Clone for Script<T> {
    fn clone(&self) -> Self {
        Self {
            body: self.body.clone(),
            sha1: self.sha1.clone(),
            _out: PhantomData,
        }
    }
}

impl<T> fmt::Debug for Script<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Script").field("sha1", &self.sha1).finish()
    }
}

impl<T: ScriptOutput> Script<T> {
    /// Builds a handle from inline source text.
    pub fn new(body: impl Into<Bytes>) -> Self {
        let body = body.into();
        let mut hasher = Sha1::new();
        hasher.update(&body);
        let sha1 = hex::encode(hasher.finalize());
        Self {
            body,
            sha1,
            _out: PhantomData,
        }
    }

    /// Loads the source from a file resource.
    ///
    /// An unreadable resource fails here, synchronously, before any network
    /// interaction could take place.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, RedSetError> {
        let path = path.as_ref();
        let body = std::fs::read(path).map_err(|e| RedSetError::ResourceLoad {
            path: path.display().to_string(),
            source: Arc::new(e),
        })?;
        Ok(Self::new(body))
    }

    /// The script source, verbatim.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The SHA-1 hex digest of the body.
    pub fn sha1(&self) -> &str {
        &self.sha1
    }

    /// Decodes an evaluation reply into the bound output type.
    pub fn parse_reply(reply: Reply) -> Result<T, RedSetError> {
        T::from_reply(reply)
    }
}
