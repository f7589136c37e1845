// src/lib.rs

pub mod config;
pub mod core;

// Re-export
pub use crate::core::codec::{BytesCodec, Codec, StringCodec};
pub use crate::core::errors::RedSetError;
pub use crate::core::executor::CommandExecutor;
pub use crate::core::ops::{MemberStream, SetOperations};
pub use crate::core::protocol::Reply;
pub use crate::core::scripting::Script;
