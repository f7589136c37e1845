// src/core/commands/set/sinter.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct SInter {
    pub keys: Vec<Bytes>,
}

impl CommandSpec for SInter {
    fn name(&self) -> &'static str {
        "sinter"
    }
    fn to_args(&self) -> Vec<Bytes> {
        self.keys.clone()
    }
}
