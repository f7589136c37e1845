// src/core/commands/set/srandmember.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::helpers::format_int;
use bytes::Bytes;

/// `SRANDMEMBER key [count]`.
///
/// A positive count asks for distinct members (length capped at the set's
/// cardinality); a negative count asks for sampling with replacement, so the
/// reply may contain duplicates. Whether duplicates actually appear is the
/// server's contract, not this layer's.
#[derive(Debug, Clone, Default)]
pub struct SrandMember {
    pub key: Bytes,
    pub count: Option<i64>,
}

impl CommandSpec for SrandMember {
    fn name(&self) -> &'static str {
        "srandmember"
    }
    fn to_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone()];
        if let Some(c) = self.count {
            args.push(format_int(c));
        }
        args
    }
}
