// src/core/commands/set/smembers.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct Smembers {
    pub key: Bytes,
}

impl CommandSpec for Smembers {
    fn name(&self) -> &'static str {
        "smembers"
    }
    fn to_args(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
}
