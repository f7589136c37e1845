// src/core/ops/set_ops.rs

//! The public operations surface: typed, asynchronous methods over the Redis
//! SET command family.

use crate::config::AdapterConfig;
use crate::core::codec::{Codec, StringCodec};
use crate::core::commands::command_spec::CommandSpec;
use crate::core::commands::generic::Del;
use crate::core::commands::scan::{ScanCursor, ScanOptions};
use crate::core::commands::set::{
    SInter, SInterStore, SMIsMember, SPop, SUnion, SUnionStore, Sadd, Scard, Sdiff, SdiffStore,
    Sismember, Smembers, Smove, SrandMember, Srem,
};
use crate::core::executor::{self, CommandExecutor};
use crate::core::RedSetError;
use async_stream::try_stream;
use bytes::Bytes;
use futures::stream::BoxStream;
use std::sync::Arc;

/// A lazy, asynchronous sequence of decoded members. Dropping the stream
/// cancels iteration: no further command is issued for it.
pub type MemberStream<'a, V> = BoxStream<'a, Result<V, RedSetError>>;

/// Typed operations over server-side sets.
///
/// Every method encodes its arguments through the codecs, submits exactly one
/// command per network round-trip through the executor, and decodes the reply.
/// The adapter holds no mutable state and is cheap to clone; concurrency and
/// timeout policy belong to the executor behind it.
pub struct SetOperations<K, V> {
    executor: Arc<dyn CommandExecutor>,
    key_codec: Arc<dyn Codec<K>>,
    value_codec: Arc<dyn Codec<V>>,
    config: AdapterConfig,
}

impl<K, V> Clone for SetOperations<K, V> {
    fn clone(&self) -> Self {
        Self {
            executor: Arc::clone(&self.executor),
            key_codec: Arc::clone(&self.key_codec),
            value_codec: Arc::clone(&self.value_codec),
            config: self.config.clone(),
        }
    }
}

impl SetOperations<String, String> {
    /// Convenience constructor for UTF-8 string keys and members.
    pub fn strings(executor: Arc<dyn CommandExecutor>) -> Self {
        Self::new(executor, Arc::new(StringCodec), Arc::new(StringCodec))
    }
}

impl<K, V: Send> SetOperations<K, V> {
    pub fn new(
        executor: Arc<dyn CommandExecutor>,
        key_codec: Arc<dyn Codec<K>>,
        value_codec: Arc<dyn Codec<V>>,
    ) -> Self {
        Self::with_config(executor, key_codec, value_codec, AdapterConfig::default())
    }

    pub fn with_config(
        executor: Arc<dyn CommandExecutor>,
        key_codec: Arc<dyn Codec<K>>,
        value_codec: Arc<dyn Codec<V>>,
        config: AdapterConfig,
    ) -> Self {
        Self {
            executor,
            key_codec,
            value_codec,
            config,
        }
    }

    // --- Mutation ---

    /// `SADD` — returns the number of members actually added. Adding members
    /// that are all already present returns 0, which is a valid result, not a
    /// failure. An empty member slice is a no-op and issues no command.
    pub async fn add(&self, key: &K, members: &[V]) -> Result<i64, RedSetError> {
        if members.is_empty() {
            return Ok(0);
        }
        let cmd = Sadd {
            key: self.key_codec.encode(key)?,
            members: self.encode_members(members)?,
        };
        executor::submit(&*self.executor, &cmd).await?.into_integer()
    }

    /// `SREM` — returns the number of members actually removed.
    pub async fn remove(&self, key: &K, members: &[V]) -> Result<i64, RedSetError> {
        if members.is_empty() {
            return Ok(0);
        }
        let cmd = Srem {
            key: self.key_codec.encode(key)?,
            members: self.encode_members(members)?,
        };
        executor::submit(&*self.executor, &cmd).await?.into_integer()
    }

    // --- Extraction ---

    /// `SPOP` — removes and returns one random member; `None` when the set is
    /// empty or missing.
    pub async fn pop(&self, key: &K) -> Result<Option<V>, RedSetError> {
        let cmd = SPop {
            key: self.key_codec.encode(key)?,
            count: None,
        };
        self.decode_optional(executor::submit(&*self.executor, &cmd).await?.into_optional_bulk()?)
    }

    /// `SPOP key count` — removes and returns up to `count` members; shorter
    /// than `count` when the set holds fewer.
    pub async fn pop_count(&self, key: &K, count: usize) -> Result<Vec<V>, RedSetError> {
        let cmd = SPop {
            key: self.key_codec.encode(key)?,
            count: Some(count),
        };
        self.decode_members(executor::submit(&*self.executor, &cmd).await?.into_bulk_array()?)
    }

    /// `SRANDMEMBER` — one random member without removing it.
    pub async fn random_member(&self, key: &K) -> Result<Option<V>, RedSetError> {
        let cmd = SrandMember {
            key: self.key_codec.encode(key)?,
            count: None,
        };
        self.decode_optional(executor::submit(&*self.executor, &cmd).await?.into_optional_bulk()?)
    }

    /// `SRANDMEMBER key count` with a positive count: distinct members, at
    /// most the set's cardinality.
    pub async fn distinct_random_members(
        &self,
        key: &K,
        count: usize,
    ) -> Result<Vec<V>, RedSetError> {
        let cmd = SrandMember {
            key: self.key_codec.encode(key)?,
            count: Some(count as i64),
        };
        self.decode_members(executor::submit(&*self.executor, &cmd).await?.into_bulk_array()?)
    }

    /// `SRANDMEMBER key -count`: sampling with replacement, so the reply may
    /// contain duplicates and may be longer than the set itself. Whether
    /// duplicates appear is the server's choice.
    pub async fn random_members(&self, key: &K, count: usize) -> Result<Vec<V>, RedSetError> {
        let cmd = SrandMember {
            key: self.key_codec.encode(key)?,
            count: Some(-(count as i64)),
        };
        self.decode_members(executor::submit(&*self.executor, &cmd).await?.into_bulk_array()?)
    }

    // --- Predicates ---

    /// `SCARD` — the set's cardinality; 0 for a missing key.
    pub async fn size(&self, key: &K) -> Result<i64, RedSetError> {
        let cmd = Scard {
            key: self.key_codec.encode(key)?,
        };
        executor::submit(&*self.executor, &cmd).await?.into_integer()
    }

    /// `SISMEMBER`.
    pub async fn is_member(&self, key: &K, member: &V) -> Result<bool, RedSetError> {
        let cmd = Sismember {
            key: self.key_codec.encode(key)?,
            member: self.value_codec.encode(member)?,
        };
        executor::submit(&*self.executor, &cmd).await?.into_bool()
    }

    /// `SMISMEMBER` — one containment flag per queried member, in query order.
    pub async fn is_members(&self, key: &K, members: &[V]) -> Result<Vec<bool>, RedSetError> {
        if members.is_empty() {
            return Ok(vec![]);
        }
        let cmd = SMIsMember {
            key: self.key_codec.encode(key)?,
            members: self.encode_members(members)?,
        };
        executor::submit(&*self.executor, &cmd).await?.into_bool_array()
    }

    // --- Transfer ---

    /// `SMOVE` — false when the member was not in the source set.
    pub async fn move_member(
        &self,
        source: &K,
        destination: &K,
        member: &V,
    ) -> Result<bool, RedSetError> {
        let cmd = Smove {
            source: self.key_codec.encode(source)?,
            destination: self.key_codec.encode(destination)?,
            member: self.value_codec.encode(member)?,
        };
        executor::submit(&*self.executor, &cmd).await?.into_bool()
    }

    // --- Multi-key combination ---

    /// `SINTER` — lazy stream of the intersection of the given sets. The
    /// result is itself a set: unordered, no duplicates.
    pub fn intersect(&self, keys: &[K]) -> MemberStream<'_, V> {
        let cmd = self.encode_keys(keys).map(|keys| SInter { keys });
        self.stream_members(cmd)
    }

    /// `SUNION` — lazy stream of the union of the given sets.
    pub fn union(&self, keys: &[K]) -> MemberStream<'_, V> {
        let cmd = self.encode_keys(keys).map(|keys| SUnion { keys });
        self.stream_members(cmd)
    }

    /// `SDIFF` — lazy stream of the members of the first set that appear in
    /// none of the following sets. Key order matters here, unlike
    /// intersection and union.
    pub fn difference(&self, keys: &[K]) -> MemberStream<'_, V> {
        let cmd = self.encode_keys(keys).map(|keys| Sdiff { keys });
        self.stream_members(cmd)
    }

    /// `SINTERSTORE` — stores the intersection under `destination`
    /// (overwriting it) and returns the stored cardinality.
    pub async fn intersect_store(&self, keys: &[K], destination: &K) -> Result<i64, RedSetError> {
        let cmd = SInterStore {
            destination: self.key_codec.encode(destination)?,
            keys: self.encode_keys(keys)?,
        };
        executor::submit(&*self.executor, &cmd).await?.into_integer()
    }

    /// `SUNIONSTORE`.
    pub async fn union_store(&self, keys: &[K], destination: &K) -> Result<i64, RedSetError> {
        let cmd = SUnionStore {
            destination: self.key_codec.encode(destination)?,
            keys: self.encode_keys(keys)?,
        };
        executor::submit(&*self.executor, &cmd).await?.into_integer()
    }

    /// `SDIFFSTORE`.
    pub async fn difference_store(&self, keys: &[K], destination: &K) -> Result<i64, RedSetError> {
        let cmd = SdiffStore {
            destination: self.key_codec.encode(destination)?,
            keys: self.encode_keys(keys)?,
        };
        executor::submit(&*self.executor, &cmd).await?.into_integer()
    }

    // --- Enumeration ---

    /// `SMEMBERS` — lazy stream of all members, read in one atomic command.
    pub fn members(&self, key: &K) -> MemberStream<'_, V> {
        let cmd = self.key_codec.encode(key).map(|key| Smembers { key });
        self.stream_members(cmd)
    }

    /// `SSCAN`-driven incremental enumeration.
    ///
    /// Pages are requested one at a time, each only after the previous page's
    /// members have been consumed; dropping the stream stops the iteration.
    /// Under concurrent mutation of the set the scan may miss or repeat
    /// members — that is the scan contract, and this layer deliberately does
    /// not deduplicate on the client.
    pub fn scan(&self, key: &K, options: ScanOptions) -> MemberStream<'_, V> {
        let encoded = self.key_codec.encode(key);
        let options = match (options.count_hint(), self.config.scan_count) {
            (None, Some(hint)) => options.count(hint),
            _ => options,
        };
        Box::pin(try_stream! {
            let mut cursor = ScanCursor::new(encoded?, options);
            while !cursor.is_exhausted() {
                let batch = cursor.next_batch(&*self.executor).await?;
                for raw in batch {
                    yield self.value_codec.decode(raw)?;
                }
            }
        })
    }

    // --- Destruction ---

    /// `DEL` on the set's key — true when the key existed and was removed.
    pub async fn delete(&self, key: &K) -> Result<bool, RedSetError> {
        let cmd = Del {
            keys: vec![self.key_codec.encode(key)?],
        };
        Ok(executor::submit(&*self.executor, &cmd).await?.into_integer()? > 0)
    }

    // --- Internal helpers ---

    fn encode_members(&self, members: &[V]) -> Result<Vec<Bytes>, RedSetError> {
        members
            .iter()
            .map(|m| self.value_codec.encode(m))
            .collect()
    }

    /// Encodes a multi-key argument list, enforcing the non-empty invariant
    /// and the configured key-count circuit breaker before any network call.
    fn encode_keys(&self, keys: &[K]) -> Result<Vec<Bytes>, RedSetError> {
        if keys.is_empty() {
            return Err(RedSetError::InvalidRequest(
                "set operation requires at least one key".to_string(),
            ));
        }
        let max = self.config.max_set_operation_keys;
        if max != 0 && keys.len() > max {
            return Err(RedSetError::InvalidRequest(format!(
                "set operation spans {} keys, above the configured limit of {max}",
                keys.len()
            )));
        }
        keys.iter().map(|k| self.key_codec.encode(k)).collect()
    }

    fn decode_optional(&self, raw: Option<Bytes>) -> Result<Option<V>, RedSetError> {
        raw.map(|b| self.value_codec.decode(b)).transpose()
    }

    fn decode_members(&self, raw: Vec<Bytes>) -> Result<Vec<V>, RedSetError> {
        raw.into_iter()
            .map(|b| self.value_codec.decode(b))
            .collect()
    }

    /// Issues a single array-reply command lazily: nothing is sent until the
    /// stream is first polled, and each member is decoded as it is yielded.
    fn stream_members<C>(&self, cmd: Result<C, RedSetError>) -> MemberStream<'_, V>
    where
        C: CommandSpec + Send + Sync + 'static,
    {
        Box::pin(try_stream! {
            let cmd = cmd?;
            let members = executor::submit(&*self.executor, &cmd).await?.into_bulk_array()?;
            for raw in members {
                yield self.value_codec.decode(raw)?;
            }
        })
    }
}
