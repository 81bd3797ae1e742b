//! Internal node representation for the in-memory filesystem.

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::types::{DirEntry, Metadata};

/// Canonical filesystem node - either a file or directory
#[derive(Debug)]
pub(super) enum Node {
    File(FileNode),
    Dir(DirNode),
}

impl Node {
    /// The directory-entry view of this node.
    pub fn entry(&self) -> DirEntry {
        match self {
            Node::File(f) => DirEntry::new(f.meta.clone()),
            Node::Dir(d) => DirEntry::new(d.meta().clone()),
        }
    }
}

/// A file: metadata plus the canonical buffered content, owned by value by
/// the parent directory's child map.
#[derive(Debug, Clone)]
pub(super) struct FileNode {
    pub meta: Metadata,
    pub content: Vec<u8>,
}

impl FileNode {
    /// Build a file node around a private copy of `data`.
    pub fn new(name: &str, data: &[u8]) -> Self {
        Self {
            meta: Metadata::file(name, data.len() as u64),
            content: data.to_vec(),
        }
    }
}

/// A directory: fixed metadata plus a name-keyed child map.
///
/// Cloning is shallow, so directory handles share the canonical node.
/// Metadata never changes after creation and sits outside the lock; the
/// lock guards only the child map.
#[derive(Debug, Clone)]
pub(super) struct DirNode {
    inner: Arc<DirInner>,
}

#[derive(Debug)]
struct DirInner {
    meta: Metadata,
    children: RwLock<HashMap<String, Node>>,
}

impl DirNode {
    /// Create a new empty directory.
    pub fn new(name: &str) -> Self {
        Self {
            inner: Arc::new(DirInner {
                meta: Metadata::dir(name),
                children: RwLock::new(HashMap::new()),
            }),
        }
    }

    pub fn meta(&self) -> &Metadata {
        &self.inner.meta
    }

    pub fn children(&self) -> RwLockReadGuard<'_, HashMap<String, Node>> {
        self.inner.children.read().unwrap()
    }

    pub fn children_mut(&self) -> RwLockWriteGuard<'_, HashMap<String, Node>> {
        self.inner.children.write().unwrap()
    }

    /// Snapshot of the current child names, in map order.
    pub fn child_names(&self) -> Vec<String> {
        self.children().keys().cloned().collect()
    }
}
