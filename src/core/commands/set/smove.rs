// src/core/commands/set/smove.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct Smove {
    pub source: Bytes,
    pub destination: Bytes,
    pub member: Bytes,
}

impl CommandSpec for Smove {
    fn name(&self) -> &'static str {
        "smove"
    }
    fn to_args(&self) -> Vec<Bytes> {
        vec![
            self.source.clone(),
            self.destination.clone(),
            self.member.clone(),
        ]
    }
}
