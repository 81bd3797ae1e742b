//! Core MemFs implementation.

use crate::backend::{Handle, Vfs};
use crate::error::{VfsError, VfsResult};
use crate::path::{is_valid_path, split_parent};

use super::handle::{MemDir, MemFile};
use super::node::{DirNode, FileNode, Node};

/// In-memory hierarchical filesystem.
///
/// One root directory, named `"."`, owns the whole tree; every operation
/// walks child maps segment by segment from there. Cloning is shallow and
/// shares the tree.
#[derive(Debug, Clone)]
pub struct MemFs {
    root: DirNode,
}

impl MemFs {
    /// Create a new filesystem holding only an empty root directory.
    pub fn new() -> Self {
        Self {
            root: DirNode::new("."),
        }
    }

    /// Open the file or directory at `path` for reading.
    ///
    /// A file handle wraps a private copy of the file's current content; a
    /// directory handle shares the canonical node. A file met before the
    /// last segment is a lookup miss, the same as a missing name.
    pub fn open(&self, path: &str) -> VfsResult<Handle> {
        if !is_valid_path(path) {
            return Err(VfsError::invalid("open", path));
        }
        if path == "." {
            return Ok(Handle::Dir(Box::new(MemDir::new(self.root.clone()))));
        }

        let parts: Vec<&str> = path.split('/').collect();
        let mut cur = self.root.clone();
        for (i, part) in parts.iter().enumerate() {
            let next = {
                let children = cur.children();
                match children.get(*part) {
                    None => return Err(VfsError::not_exist("open", path)),
                    Some(Node::File(f)) => {
                        if i == parts.len() - 1 {
                            return Ok(Handle::File(Box::new(MemFile::new(f))));
                        }
                        return Err(VfsError::not_exist("open", path));
                    }
                    Some(Node::Dir(d)) => d.clone(),
                }
            };
            cur = next;
        }
        Ok(Handle::Dir(Box::new(MemDir::new(cur))))
    }

    /// Create the directory at `path` together with any missing parents.
    ///
    /// Existing directories along the way are descended into; an existing
    /// file fails the call with `NotADirectory` naming that segment.
    /// Directories created before the failing segment remain created.
    pub fn mkdir_all(&self, path: &str) -> VfsResult<()> {
        if !is_valid_path(path) {
            return Err(VfsError::invalid("mkdir", path));
        }
        if path == "." {
            return Ok(());
        }

        let mut cur = self.root.clone();
        for part in path.split('/') {
            let next = {
                let mut children = cur.children_mut();
                match children.get(part) {
                    Some(Node::Dir(d)) => d.clone(),
                    Some(Node::File(_)) => {
                        return Err(VfsError::NotADirectory(part.to_string()));
                    }
                    None => {
                        let dir = DirNode::new(part);
                        children.insert(part.to_string(), Node::Dir(dir.clone()));
                        dir
                    }
                }
            };
            cur = next;
        }
        Ok(())
    }

    /// Write `data` to the file at `path`, replacing any existing entry of
    /// that name - including a directory.
    ///
    /// Parent directories are never auto-created; a missing or non-directory
    /// parent segment fails with `NotExist`. The data is copied into a
    /// fresh buffer, never aliased.
    pub fn write_file(&self, path: &str, data: &[u8]) -> VfsResult<()> {
        if path == "." || !is_valid_path(path) {
            return Err(VfsError::invalid("write", path));
        }

        let (parent, base) = split_parent(path);
        let dir = if parent == "." {
            self.root.clone()
        } else {
            self.resolve_dir(parent, path)?
        };

        let node = FileNode::new(base, data);
        dir.children_mut().insert(base.to_string(), Node::File(node));
        Ok(())
    }

    /// Descend to an existing directory. Every segment must resolve to a
    /// directory; a missing name or a file is a lookup miss.
    fn resolve_dir(&self, dir_path: &str, full_path: &str) -> VfsResult<DirNode> {
        let mut cur = self.root.clone();
        for part in dir_path.split('/') {
            let next = {
                let children = cur.children();
                match children.get(part) {
                    Some(Node::Dir(d)) => d.clone(),
                    _ => return Err(VfsError::not_exist("write", full_path)),
                }
            };
            cur = next;
        }
        Ok(cur)
    }
}

impl Default for MemFs {
    fn default() -> Self {
        Self::new()
    }
}

impl Vfs for MemFs {
    fn open(&self, path: &str) -> VfsResult<Handle> {
        MemFs::open(self, path)
    }
}
