// src/core/commands/set/sismember.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct Sismember {
    pub key: Bytes,
    pub member: Bytes,
}

impl CommandSpec for Sismember {
    fn name(&self) -> &'static str {
        "sismember"
    }
    fn to_args(&self) -> Vec<Bytes> {
        vec![self.key.clone(), self.member.clone()]
    }
}
