// src/core/commands/set/sdiff.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// `SDIFF key [key ...]` — order matters: the first key is the base set and
/// every following key is subtracted from it.
#[derive(Debug, Clone, Default)]
pub struct Sdiff {
    pub keys: Vec<Bytes>,
}

impl CommandSpec for Sdiff {
    fn name(&self) -> &'static str {
        "sdiff"
    }
    fn to_args(&self) -> Vec<Bytes> {
        self.keys.clone()
    }
}
