// src/core/commands/set/srem.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct Srem {
    pub key: Bytes,
    pub members: Vec<Bytes>,
}

impl CommandSpec for Srem {
    fn name(&self) -> &'static str {
        "srem"
    }
    fn to_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone()];
        args.extend(self.members.clone());
        args
    }
}
