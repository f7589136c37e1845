// src/core/commands/generic/del.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct Del {
    pub keys: Vec<Bytes>,
}

impl CommandSpec for Del {
    fn name(&self) -> &'static str {
        "del"
    }
    fn to_args(&self) -> Vec<Bytes> {
        self.keys.clone()
    }
}
