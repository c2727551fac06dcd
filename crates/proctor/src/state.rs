//! Application state and shared resources.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use std::sync::Arc;

use crate::config::{AppConfig, CounterBackend};
use crate::passcode::{CounterStore, FileCounterStore, RedisCounterStore};
use crate::quiz::QuestionBank;
use proctor_common::constants::QUESTIONS_PER_QUIZ;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application configuration
    pub config: AppConfig,

    /// Static question bank
    pub bank: Arc<QuestionBank>,

    /// Passcode counter, the only shared mutable resource
    pub counter: Arc<dyn CounterStore>,

    /// Process start time
    pub started_at: DateTime<Utc>,
}

impl AppState {
    /// Create application state: validate the bank and open the counter store
    pub async fn new(config: AppConfig) -> Result<Self> {
        let bank = QuestionBank::builtin().context("Built-in question bank is invalid")?;

        let counter: Arc<dyn CounterStore> = match config.counter.backend {
            CounterBackend::File => Arc::new(FileCounterStore::new(&config.counter.path)),
            CounterBackend::Redis => Arc::new(
                RedisCounterStore::connect(&config.counter.redis_url, &config.counter.redis_key)
                    .await?,
            ),
        };

        Self::with_parts(config, bank, counter)
    }

    /// Assemble state from already-built parts
    pub fn with_parts(
        config: AppConfig,
        bank: QuestionBank,
        counter: Arc<dyn CounterStore>,
    ) -> Result<Self> {
        // A bank too small for one quiz is a deployment defect; refuse to start
        bank.ensure_can_sample(QUESTIONS_PER_QUIZ)
            .context("Question bank cannot supply a full quiz")?;

        Ok(Self {
            config,
            bank: Arc::new(bank),
            counter,
            started_at: Utc::now(),
        })
    }

    /// Seconds since the process started
    pub fn uptime_secs(&self) -> u64 {
        (Utc::now() - self.started_at).num_seconds().max(0) as u64
    }
}
