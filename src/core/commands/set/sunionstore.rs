// src/core/commands/set/sunionstore.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct SUnionStore {
    pub destination: Bytes,
    pub keys: Vec<Bytes>,
}

impl CommandSpec for SUnionStore {
    fn name(&self) -> &'static str {
        "sunionstore"
    }
    fn to_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.destination.clone()];
        args.extend(self.keys.clone());
        args
    }
}
