//! Bulk operation engine: enumerate a prefix, delete each record.
//!
//! One primitive backs both the prefix-delete endpoint and the full reset
//! (which is just a delete of the root prefix). The operation is not atomic:
//! a crash mid-enumeration leaves a partially-deleted prefix, and callers
//! recover by re-invoking with the same prefix. Each delete is awaited before
//! the enumeration proceeds, so completion means every discovered record had
//! its delete acknowledged.

use crate::key::Key;
use crate::store::{self, Store, DEFAULT_LIST_LIMIT};

/// Delete every record under `prefix` and return the deleted keys.
///
/// Enumeration is unbounded: internally it pages through the store until the
/// backend stops returning a continuation cursor. There is no cancellation;
/// once started it runs to the end of the enumeration.
pub async fn delete_prefix(store: &dyn Store, prefix: &Key) -> store::Result<Vec<Key>> {
    let mut deleted = Vec::new();
    let mut cursor: Option<String> = None;
    loop {
        let page = store
            .list(prefix, DEFAULT_LIST_LIMIT, cursor.as_deref())
            .await?;
        for record in page.records {
            store.delete(&record.key).await?;
            deleted.push(record.key);
        }
        // An empty page with a cursor is an intermediate page, not the end;
        // only a missing cursor terminates the sweep.
        match page.cursor {
            Some(next) => cursor = Some(next),
            None => break,
        }
    }
    tracing::debug!("Bulk delete under '{}' removed {} records", prefix, deleted.len());
    Ok(deleted)
}

/// Delete everything in the store.
pub async fn full_reset(store: &dyn Store) -> store::Result<Vec<Key>> {
    delete_prefix(store, &Key::root()).await
}
