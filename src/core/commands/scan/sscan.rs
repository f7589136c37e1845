// src/core/commands/scan/sscan.rs

use super::options::ScanOptions;
use crate::core::commands::command_spec::CommandSpec;
use bytes::Bytes;

/// `SSCAN key cursor [MATCH pattern] [COUNT count]`.
///
/// The cursor argument is the token from the previous scan page, verbatim;
/// `"0"` starts a new iteration.
#[derive(Debug, Clone, Default)]
pub struct SScan {
    pub key: Bytes,
    pub cursor: Bytes,
    pub options: ScanOptions,
}

impl CommandSpec for SScan {
    fn name(&self) -> &'static str {
        "sscan"
    }
    fn to_args(&self) -> Vec<Bytes> {
        let mut args = vec![self.key.clone(), self.cursor.clone()];
        args.extend(self.options.to_args());
        args
    }
}
