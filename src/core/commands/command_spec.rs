// src/core/commands/command_spec.rs

//! Defines the `CommandSpec` trait, which describes how a command is encoded.

use bytes::Bytes;

/// A trait for describing a command's wire form: its name and the ordered
/// argument vector that follows it, per the Redis command table.
pub trait CommandSpec {
    /// The name of the command in lowercase.
    fn name(&self) -> &'static str;

    /// Converts the command's arguments into a vector of `Bytes` in wire order,
    /// key(s) first.
    fn to_args(&self) -> Vec<Bytes>;
}
