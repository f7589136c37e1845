// src/core/commands/set/scard.rs

use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

#[derive(Debug, Clone, Default)]
pub struct Scard {
    pub key: Bytes,
}

impl CommandSpec for Scard {
    fn name(&self) -> &'static str {
        "scard"
    }
    fn to_args(&self) -> Vec<Bytes> {
        vec![self.key.clone()]
    }
}
