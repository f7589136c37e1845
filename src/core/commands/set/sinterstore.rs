// src/core/commands/set/sinterstore.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// `SINTERSTORE destination key [key ...]` — the destination key is written
/// first on the wire, before the source keys.
#[derive(Debug, Clone, Default)]
pub struct SInterStore {
    pub destination: Bytes,
    pub keys: Vec<Bytes>,
}

impl CommandSpec for SInterStore {
    fn name(&self) -> &'static str {
        "sinterstore"
    }
    fn to_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.destination.clone()];
        args.extend(self.keys.clone());
        args
    }
}
