// src/core/commands/set/sunion.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct SUnion {
    pub keys: Vec<Bytes>,
}

impl CommandSpec for SUnion {
    fn name(&self) -> &'static str {
        "sunion"
    }
    fn to_args(&self) -> Vec<Bytes> {
        self.keys.clone()
    }
}
