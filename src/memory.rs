//! In-memory ordered store backend.
//!
//! Uses a `BTreeMap` keyed by segment sequences, so records under a common
//! prefix occupy a contiguous range and prefix listing is a bounded range
//! scan. Per-key atomicity comes from the `RwLock`; there is no cross-key
//! isolation, matching the adapter contract.

use async_trait::async_trait;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine as _;
use parking_lot::RwLock;
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::key::Key;
use crate::store::{Page, Record, Result, Store, StoreError};

#[derive(Clone)]
struct Stored {
    value: JsonValue,
    versionstamp: String,
}

/// In-memory implementation of [`Store`].
#[derive(Clone)]
pub struct MemoryStore {
    data: Arc<RwLock<BTreeMap<Vec<String>, Stored>>>,
    stamp: Arc<AtomicU64>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self {
            data: Arc::new(RwLock::new(BTreeMap::new())),
            stamp: Arc::new(AtomicU64::new(0)),
        }
    }

    pub fn len(&self) -> usize {
        self.data.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.read().is_empty()
    }

    fn next_versionstamp(&self) -> String {
        format!("{:016x}", self.stamp.fetch_add(1, Ordering::Relaxed) + 1)
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Cursors are the base64 of the last returned key's path. Opaque to
/// callers; only this backend produces and consumes them.
fn encode_cursor(segments: &[String]) -> String {
    URL_SAFE_NO_PAD.encode(segments.join("/"))
}

fn decode_cursor(cursor: &str) -> Result<Vec<String>> {
    let bytes = URL_SAFE_NO_PAD
        .decode(cursor)
        .map_err(|_| StoreError::InvalidCursor(cursor.to_string()))?;
    let path =
        String::from_utf8(bytes).map_err(|_| StoreError::InvalidCursor(cursor.to_string()))?;
    Ok(path.split('/').map(str::to_string).collect())
}

#[async_trait]
impl Store for MemoryStore {
    async fn get(&self, key: &Key) -> Result<Option<Record>> {
        Ok(self.data.read().get(key.segments()).map(|stored| Record {
            key: key.clone(),
            value: stored.value.clone(),
            versionstamp: stored.versionstamp.clone(),
        }))
    }

    async fn set(&self, key: &Key, value: JsonValue) -> Result<String> {
        let versionstamp = self.next_versionstamp();
        self.data.write().insert(
            key.segments().to_vec(),
            Stored {
                value,
                versionstamp: versionstamp.clone(),
            },
        );
        Ok(versionstamp)
    }

    async fn delete(&self, key: &Key) -> Result<()> {
        self.data.write().remove(key.segments());
        Ok(())
    }

    async fn list(&self, prefix: &Key, limit: usize, cursor: Option<&str>) -> Result<Page> {
        let limit = limit.max(1);
        let start: Bound<Vec<String>> = match cursor {
            Some(c) => Bound::Excluded(decode_cursor(c)?),
            None => Bound::Included(prefix.segments().to_vec()),
        };

        let data = self.data.read();
        let mut records = Vec::new();
        let mut more = false;
        for (segments, stored) in data.range((start, Bound::Unbounded)) {
            // Keys under the prefix are contiguous, so the first miss ends
            // the range.
            if !segments.starts_with(prefix.segments()) {
                break;
            }
            if records.len() == limit {
                more = true;
                break;
            }
            records.push(Record {
                key: Key::from(segments.clone()),
                value: stored.value.clone(),
                versionstamp: stored.versionstamp.clone(),
            });
        }

        let cursor = if more {
            records.last().map(|r| encode_cursor(r.key.segments()))
        } else {
            None
        };
        Ok(Page { records, cursor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn key(path: &str) -> Key {
        Key::parse(path).unwrap()
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let store = MemoryStore::new();
        let versionstamp = store
            .set(&key("books/Hamlet"), json!({"author": "Shakespeare"}))
            .await
            .unwrap();

        let record = store.get(&key("books/Hamlet")).await.unwrap().unwrap();
        assert_eq!(record.value, json!({"author": "Shakespeare"}));
        assert_eq!(record.versionstamp, versionstamp);
    }

    #[tokio::test]
    async fn test_get_missing_key() {
        let store = MemoryStore::new();
        assert!(store.get(&key("nope")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_set_overwrites_and_bumps_versionstamp() {
        let store = MemoryStore::new();
        let first = store.set(&key("k"), json!(1)).await.unwrap();
        let second = store.set(&key("k"), json!(2)).await.unwrap();
        assert_ne!(first, second);

        let record = store.get(&key("k")).await.unwrap().unwrap();
        assert_eq!(record.value, json!(2));
        assert_eq!(record.versionstamp, second);
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let store = MemoryStore::new();
        store.set(&key("k"), json!(true)).await.unwrap();
        store.delete(&key("k")).await.unwrap();
        assert!(store.get(&key("k")).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_absent_key_is_noop() {
        let store = MemoryStore::new();
        store.delete(&key("never/set")).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_filters_by_segment_prefix() {
        let store = MemoryStore::new();
        store.set(&key("books/Hamlet"), json!(1)).await.unwrap();
        store.set(&key("books/Othello"), json!(2)).await.unwrap();
        store.set(&key("bookstore/till"), json!(3)).await.unwrap();
        store.set(&key("authors/Will"), json!(4)).await.unwrap();

        let page = store.list(&key("books"), 100, None).await.unwrap();
        let paths: Vec<String> = page.records.iter().map(|r| r.key.path()).collect();
        assert_eq!(paths, ["books/Hamlet", "books/Othello"]);
        assert!(page.cursor.is_none());
    }

    #[tokio::test]
    async fn test_list_includes_exact_prefix_key() {
        let store = MemoryStore::new();
        store.set(&key("books"), json!("shelf")).await.unwrap();
        store.set(&key("books/Hamlet"), json!(1)).await.unwrap();

        let page = store.list(&key("books"), 100, None).await.unwrap();
        let paths: Vec<String> = page.records.iter().map(|r| r.key.path()).collect();
        assert_eq!(paths, ["books", "books/Hamlet"]);
    }

    #[tokio::test]
    async fn test_list_root_prefix_returns_everything() {
        let store = MemoryStore::new();
        store.set(&key("a"), json!(1)).await.unwrap();
        store.set(&key("b/c"), json!(2)).await.unwrap();

        let page = store.list(&Key::root(), 100, None).await.unwrap();
        assert_eq!(page.records.len(), 2);
        assert!(page.cursor.is_none());
    }

    #[tokio::test]
    async fn test_pagination_covers_all_records_without_duplicates() {
        let store = MemoryStore::new();
        for i in 0..25 {
            store
                .set(&key(&format!("items/{i:03}")), json!(i))
                .await
                .unwrap();
        }

        let mut seen = Vec::new();
        let mut cursor: Option<String> = None;
        let mut pages = 0;
        loop {
            let page = store
                .list(&key("items"), 10, cursor.as_deref())
                .await
                .unwrap();
            seen.extend(page.records.iter().map(|r| r.key.path()));
            pages += 1;
            match page.cursor {
                Some(next) => cursor = Some(next),
                None => break,
            }
        }

        assert_eq!(pages, 3);
        assert_eq!(seen.len(), 25);
        let mut deduped = seen.clone();
        deduped.dedup();
        assert_eq!(deduped, seen);
        assert_eq!(seen[0], "items/000");
        assert_eq!(seen[24], "items/024");
    }

    #[tokio::test]
    async fn test_exhausted_page_has_no_cursor() {
        let store = MemoryStore::new();
        for i in 0..10 {
            store.set(&key(&format!("n/{i}")), json!(i)).await.unwrap();
        }
        // Limit equal to the record count: full page, nothing behind it.
        let page = store.list(&key("n"), 10, None).await.unwrap();
        assert_eq!(page.records.len(), 10);
        assert!(page.cursor.is_none());
    }

    #[tokio::test]
    async fn test_cursor_resumes_after_deleted_key() {
        let store = MemoryStore::new();
        for name in ["a", "b", "c", "d"] {
            store.set(&key(&format!("x/{name}")), json!(0)).await.unwrap();
        }

        let page = store.list(&key("x"), 2, None).await.unwrap();
        let cursor = page.cursor.unwrap();

        // Deleting the key the cursor points at must not derail the resume
        // position: it marks a place in the order, not a live record.
        store.delete(&key("x/b")).await.unwrap();

        let page = store.list(&key("x"), 2, Some(&cursor)).await.unwrap();
        let paths: Vec<String> = page.records.iter().map(|r| r.key.path()).collect();
        assert_eq!(paths, ["x/c", "x/d"]);
    }

    #[tokio::test]
    async fn test_garbage_cursor_is_rejected() {
        let store = MemoryStore::new();
        let err = store
            .list(&Key::root(), 10, Some("!!not-base64!!"))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::InvalidCursor(_)));
    }
}
