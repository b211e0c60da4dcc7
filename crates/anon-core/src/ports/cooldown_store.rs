//! Durable storage for the last submission time.

/// Store holding a single `lastPostTime` value (epoch milliseconds).
pub trait CooldownStore: Send + Sync {
    /// Read the stored time. `Ok(None)` when nothing has been recorded yet.
    fn load(&self) -> Result<Option<i64>, StoreError>;

    /// Overwrite the stored time.
    fn save(&self, last_post_ms: i64) -> Result<(), StoreError>;
}

/// Cool-down store errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Corrupt state: {0}")]
    Corrupt(String),
}
