// src/core/commands/set/sdiffstore.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct SdiffStore {
    pub destination: Bytes,
    pub keys: Vec<Bytes>,
}

impl CommandSpec for SdiffStore {
    fn name(&self) -> &'static str {
        "sdiffstore"
    }
    fn to_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.destination.clone()];
        args.extend(self.keys.clone());
        args
    }
}
