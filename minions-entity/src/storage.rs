//! Storage abstraction for minions

use async_trait::async_trait;

use crate::error::Result;
use crate::types::{Minion, MinionStatus};

/// Criteria for `StorageAdapter::list`. Unset criteria match everything.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StorageFilter {
    pub minion_type_id: Option<String>,
    pub status: Option<MinionStatus>,
    pub limit: Option<usize>,
    /// Include soft-deleted minions
    pub include_deleted: bool,
}

impl StorageFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Only minions of the given type id
    pub fn with_type(mut self, minion_type_id: impl Into<String>) -> Self {
        self.minion_type_id = Some(minion_type_id.into());
        self
    }

    /// Only minions with the given status
    pub fn with_status(mut self, status: MinionStatus) -> Self {
        self.status = Some(status);
        self
    }

    /// Return at most `limit` minions
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Include tombstoned minions
    pub fn including_deleted(mut self) -> Self {
        self.include_deleted = true;
        self
    }

    /// Whether a minion satisfies every criterion except `limit`
    pub fn matches(&self, minion: &Minion) -> bool {
        if !self.include_deleted && minion.is_deleted() {
            return false;
        }
        if let Some(type_id) = &self.minion_type_id {
            if &minion.minion_type_id != type_id {
                return false;
            }
        }
        if let Some(status) = self.status {
            if minion.status != Some(status) {
                return false;
            }
        }
        true
    }
}

/// Persistence for minions
#[async_trait]
pub trait StorageAdapter: Send + Sync {
    /// Get a minion by id. Soft-deleted minions are returned too.
    async fn get(&self, id: &str) -> Result<Option<Minion>>;

    /// Insert or replace a minion
    async fn set(&self, minion: &Minion) -> Result<()>;

    /// Permanently remove a minion. Removing a missing id is not an error.
    async fn delete(&self, id: &str) -> Result<()>;

    /// List minions matching the filter, newest first
    async fn list(&self, filter: &StorageFilter) -> Result<Vec<Minion>>;

    /// Free-text search over live minions
    async fn search(&self, query: &str) -> Result<Vec<Minion>>;
}
