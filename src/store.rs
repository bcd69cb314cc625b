use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use thiserror::Error;

use crate::key::Key;

/// Page size used when the caller does not override the limit.
pub const DEFAULT_LIST_LIMIT: usize = 100;

/// A stored record: key, JSON value, and the backend-assigned versionstamp
/// from the write that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct Record {
    #[schema(value_type = String)]
    pub key: Key,
    pub value: JsonValue,
    pub versionstamp: String,
}

/// One bounded batch of enumeration results.
///
/// `cursor` is the authoritative end-of-enumeration signal: a page with no
/// records but a present cursor means "keep going", not "done".
#[derive(Debug, Clone, Default)]
pub struct Page {
    pub records: Vec<Record>,
    pub cursor: Option<String>,
}

/// Errors surfaced by a store backend.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend I/O failure. Propagated untransformed; retries are the
    /// caller's business, never this layer's.
    #[error("backend unavailable: {0}")]
    Unavailable(anyhow::Error),
    /// A cursor this backend did not produce for this enumeration.
    #[error("invalid cursor: {0}")]
    InvalidCursor(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;

/// Contract over an externally supplied ordered key-value backend.
///
/// Operations are individually atomic at the single-key level; there are no
/// cross-key transactions. Enumeration order is stable and key-ordered so
/// that cursors from one page resume the next without duplicates or gaps.
#[async_trait]
pub trait Store: Send + Sync {
    /// Current record for `key`, or `None`. A missing key is not an error.
    async fn get(&self, key: &Key) -> Result<Option<Record>>;

    /// Upsert. Returns the backend-assigned versionstamp, passed through to
    /// the caller opaque and uninterpreted.
    async fn set(&self, key: &Key, value: JsonValue) -> Result<String>;

    /// Remove `key` if present; deleting an absent key is a no-op.
    async fn delete(&self, key: &Key) -> Result<()>;

    /// Up to `limit` records whose key has `prefix` as a prefix, ordered by
    /// key, resuming strictly after `cursor` when one is given. The empty
    /// (root) prefix selects the whole store.
    async fn list(&self, prefix: &Key, limit: usize, cursor: Option<&str>) -> Result<Page>;
}

/// Shared handle to the backend, cloned freely across tasks.
pub type SharedStore = Arc<dyn Store>;
