//! Counter persisted as a decimal string in a single text file.
//!
//! Suitable for one serving process: the read-increment-write sequence is
//! serialized by an in-process mutex. Deployments with several instances
//! sharing a counter should use the Redis backend instead.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

use super::{CounterStore, next_value, parse_counter};

/// File-backed passcode counter
pub struct FileCounterStore {
    /// Counter file location
    path: PathBuf,
    /// Guards read-increment-write
    lock: Mutex<()>,
}

impl FileCounterStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the stored value, treating a missing or corrupt file as 0.
    /// A value past the counter limit is an error.
    async fn load(&self) -> Result<u64> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(0),
            Err(e) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Passcode counter unreadable, treating as 0"
                );
                return Ok(0);
            }
        };

        let parsed = parse_counter(&raw)
            .with_context(|| format!("Refusing to use {}", self.path.display()))?;

        Ok(parsed.unwrap_or_else(|| {
            tracing::warn!(
                path = %self.path.display(),
                contents = %raw.trim(),
                "Passcode counter is corrupt, treating as 0"
            );
            0
        }))
    }

    /// Write via a temp file and rename so a crash never leaves a torn value
    async fn store(&self, value: u64) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = tokio::fs::File::create(&tmp)
            .await
            .with_context(|| format!("Failed to create {}", tmp.display()))?;
        file.write_all(value.to_string().as_bytes())
            .await
            .context("Failed to write passcode counter")?;
        file.sync_all()
            .await
            .context("Failed to sync passcode counter")?;
        drop(file);

        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("Failed to replace {}", self.path.display()))?;

        Ok(())
    }
}

#[async_trait]
impl CounterStore for FileCounterStore {
    async fn read(&self) -> Result<u64> {
        let _guard = self.lock.lock().await;
        self.load().await
    }

    async fn increment_and_get(&self) -> Result<u64> {
        let _guard = self.lock.lock().await;

        let next = next_value(self.load().await?)?;
        self.store(next).await?;

        tracing::debug!(path = %self.path.display(), value = next, "Passcode counter incremented");
        Ok(next)
    }

    async fn health_check(&self) -> bool {
        match self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            // Missing directory is fine, it is created on first write
            Some(parent) => match tokio::fs::metadata(parent).await {
                Ok(meta) => meta.is_dir(),
                Err(e) => e.kind() == ErrorKind::NotFound,
            },
            None => true,
        }
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}
