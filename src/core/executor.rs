// src/core/executor.rs

//! Defines the capability seam between this crate and the transport layer.

use crate::core::commands::command_spec::CommandSpec;
use crate::core::protocol::Reply;
use crate::core::RedSetError;
use async_trait::async_trait;
use bytes::Bytes;
use tracing::debug;

/// Sends one encoded command to a Redis-compatible server and returns the
/// decoded reply.
///
/// Connection acquisition, pooling, TLS, timeouts and the wire protocol itself
/// all live behind this trait. The adapter issues exactly one `execute` call
/// per network round-trip and never retries; transport failures surface to the
/// caller unchanged.
///
/// Tests substitute fakes for this trait, so adapter behavior can be verified
/// without a server.
#[async_trait]
pub trait CommandExecutor: Send + Sync {
    async fn execute(&self, name: &'static str, args: Vec<Bytes>) -> Result<Reply, RedSetError>;
}

/// Encodes `cmd` and submits it through `executor`.
pub(crate) async fn submit<C: CommandSpec>(
    executor: &dyn CommandExecutor,
    cmd: &C,
) -> Result<Reply, RedSetError> {
    let args = cmd.to_args();
    debug!(command = cmd.name(), args = args.len(), "dispatching command");
    executor.execute(cmd.name(), args).await
}
