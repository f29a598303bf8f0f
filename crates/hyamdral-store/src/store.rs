// hyamdral-store
// Copyright (C) 2025 Hyamdral.mn

// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.

// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.

// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.

use serde_json::{Map, Value};
use std::sync::Arc;
use tokio::sync::{Mutex, RwLock, watch};
use tracing::debug;
use uuid::Uuid;

use crate::error::{Result, StoreError};
use crate::{paths, tree};

/// Handle to the live content store. Cheap to clone; all clones share one
/// document tree. Writes are last-write-wins: there is no conflict
/// detection, and concurrent writers silently overwrite each other.
#[derive(Clone)]
pub struct ContentStore {
    inner: Arc<Inner>,
}

struct Inner {
    root: RwLock<Value>,
    watchers: Mutex<Vec<Watcher>>,
}

struct Watcher {
    path: String,
    tx: watch::Sender<Option<Value>>,
}

/// Live view of one content path. Holds the latest snapshot and wakes on
/// every intersecting write. Dropping the subscription tears it down.
pub struct Subscription {
    path: String,
    rx: watch::Receiver<Option<Value>>,
}

impl Subscription {
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Latest snapshot delivered so far, without waiting.
    pub fn snapshot(&self) -> Option<Value> {
        self.rx.borrow().clone()
    }

    /// Waits for the next delivery and returns its snapshot. Yields `None`
    /// once the owning store has been dropped.
    pub async fn updated(&mut self) -> Option<Option<Value>> {
        self.rx.changed().await.ok()?;
        Some(self.rx.borrow_and_update().clone())
    }
}

impl ContentStore {
    pub fn new() -> Self {
        Self::from_value(Value::Object(Map::new()))
    }

    /// Opens a store over an existing document tree, e.g. seed data loaded
    /// from disk.
    pub fn from_value(root: Value) -> Self {
        Self {
            inner: Arc::new(Inner {
                root: RwLock::new(root),
                watchers: Mutex::new(Vec::new()),
            }),
        }
    }

    /// Point-in-time read of the node at `path`. Absent nodes are `None`,
    /// never an error.
    pub async fn snapshot(&self, path: &str) -> Result<Option<Value>> {
        let segments = paths::split(path)?;
        let root = self.inner.root.read().await;
        Ok(tree::get(&root, &segments).cloned())
    }

    /// Whole-document overwrite at `path`. Writing `null` removes the node.
    pub async fn set(&self, path: &str, value: Value) -> Result<()> {
        let segments = paths::split(path)?;
        {
            let mut root = self.inner.root.write().await;
            tree::set(&mut root, &segments, value);
        }
        debug!(path, "content write");
        self.notify(path).await;
        Ok(())
    }

    /// Shallow field merge into the record at `path`. Only the named fields
    /// change; siblings are left untouched. The node must be a record (or
    /// absent, in which case it is created).
    pub async fn update(&self, path: &str, fields: Map<String, Value>) -> Result<()> {
        let segments = paths::split(path)?;
        {
            let mut root = self.inner.root.write().await;
            let mut record = match tree::get(&root, &segments) {
                Some(Value::Object(existing)) => existing.clone(),
                Some(_) => return Err(StoreError::NotAnObject(path.to_owned())),
                None => Map::new(),
            };
            for (key, value) in fields {
                record.insert(key, value);
            }
            tree::set(&mut root, &segments, Value::Object(record));
        }
        debug!(path, "content field merge");
        self.notify(path).await;
        Ok(())
    }

    /// Inserts `value` under a generated key and returns the key. Insertion
    /// order within the collection is preserved on read.
    pub async fn push(&self, path: &str, value: Value) -> Result<String> {
        let key = Uuid::new_v4().to_string();
        let child = paths::child(path, &key);
        self.set(&child, value).await?;
        Ok(key)
    }

    /// Deletes the subtree at `path`. Removing an absent node is not an
    /// error.
    pub async fn remove(&self, path: &str) -> Result<()> {
        let segments = paths::split(path)?;
        {
            let mut root = self.inner.root.write().await;
            tree::remove(&mut root, &segments);
        }
        debug!(path, "content remove");
        self.notify(path).await;
        Ok(())
    }

    /// Opens a live subscription on `path`. The current snapshot is
    /// available immediately; afterwards a new snapshot is delivered for
    /// every write at, above or below the path, in write order for that
    /// path. No ordering holds across distinct paths.
    pub async fn subscribe(&self, path: &str) -> Result<Subscription> {
        paths::split(path)?;
        let initial = self.snapshot(path).await?;
        let (tx, rx) = watch::channel(initial);
        self.inner.watchers.lock().await.push(Watcher {
            path: path.to_owned(),
            tx,
        });
        Ok(Subscription {
            path: path.to_owned(),
            rx,
        })
    }

    async fn notify(&self, changed: &str) {
        let mut watchers = self.inner.watchers.lock().await;
        watchers.retain(|w| !w.tx.is_closed());
        let root = self.inner.root.read().await;
        for watcher in watchers.iter() {
            if paths::intersects(&watcher.path, changed) {
                let segments = paths::split(&watcher.path).expect("registered path is valid");
                watcher.tx.send_replace(tree::get(&root, &segments).cloned());
            }
        }
    }
}

impl Default for ContentStore {
    fn default() -> Self {
        Self::new()
    }
}
