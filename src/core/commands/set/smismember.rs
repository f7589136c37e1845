// src/core/commands/set/smismember.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// `SMISMEMBER key member [member ...]` — one containment flag per queried
/// member, replied in query order.
#[derive(Debug, Clone, Default)]
pub struct SMIsMember {
    pub key: Bytes,
    pub members: Vec<Bytes>,
}

impl CommandSpec for SMIsMember {
    fn name(&self) -> &'static str {
        "smismember"
    }
    fn to_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone()];
        args.extend(self.members.clone());
        args
    }
}
