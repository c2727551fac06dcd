//! Passcode counter storage.
//!
//! The counter is the only shared mutable state in the service. Every
//! backend must make `increment_and_get` a single atomic step: two
//! concurrent passes may never observe the same value.

mod file_store;
mod redis_store;

pub use file_store::FileCounterStore;
pub use redis_store::RedisCounterStore;

use anyhow::{Result, bail};
use async_trait::async_trait;
use proctor_common::constants::passcode::MAX_COUNTER;

/// Durable, monotonically increasing passcode counter
#[async_trait]
pub trait CounterStore: Send + Sync {
    /// Current value; 0 when nothing has been stored yet or the stored
    /// value cannot be parsed
    async fn read(&self) -> Result<u64>;

    /// Add one, persist durably, and return the new value
    async fn increment_and_get(&self) -> Result<u64>;

    /// Whether the backing store is reachable
    async fn health_check(&self) -> bool;

    /// Short backend name for logs and stats
    fn backend(&self) -> &'static str;
}

/// Parse a stored counter. Shared rules for every backend:
///
/// - surrounding ASCII whitespace is ignored
/// - anything other than plain digits is corrupt (`Ok(None)`)
/// - digits above [`MAX_COUNTER`] are an error, never a reset, so the
///   counter cannot move backwards
///
/// The Redis increment script applies the same rules server-side.
pub(crate) fn parse_counter(raw: &str) -> Result<Option<u64>> {
    let digits = raw.trim_matches(|c: char| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0B' | '\x0C'));

    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Ok(None);
    }

    match digits.parse::<u64>() {
        Ok(value) if value <= MAX_COUNTER => Ok(Some(value)),
        _ => bail!("passcode counter exhausted: stored value {digits} exceeds {MAX_COUNTER}"),
    }
}

/// Successor of `current`, refusing to go past [`MAX_COUNTER`]
pub(crate) fn next_value(current: u64) -> Result<u64> {
    match current.checked_add(1) {
        Some(next) if next <= MAX_COUNTER => Ok(next),
        _ => bail!("passcode counter exhausted at {current}"),
    }
}
