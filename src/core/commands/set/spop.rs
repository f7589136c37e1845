// src/core/commands/set/spop.rs

use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::helpers::format_int;
use bytes::Bytes;

/// `SPOP key [count]`. Without a count the reply is a bulk string or nil;
/// with a count it is an array, possibly shorter than requested.
#[derive(Debug, Clone, Default)]
pub struct SPop {
    pub key: Bytes,
    pub count: Option<usize>,
}

impl CommandSpec for SPop {
    fn name(&self) -> &'static str {
        "spop"
    }
    fn to_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone()];
        if let Some(c) = self.count {
            args.push(format_int(c as i64));
        }
        args
    }
}
