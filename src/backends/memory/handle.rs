//! Open-handle state for the in-memory backend.

use crate::backend::{VfsDir, VfsFile};
use crate::error::{VfsError, VfsResult};
use crate::types::{DirEntry, Metadata};

use super::node::{DirNode, FileNode};

/// Read handle over a private copy of a file's content.
///
/// The copy is taken at open time, so writes to the canonical node are
/// never visible through an already-open handle.
#[derive(Debug)]
pub(super) struct MemFile {
    meta: Metadata,
    content: Vec<u8>,
    pos: usize,
    closed: bool,
}

impl MemFile {
    pub fn new(node: &FileNode) -> Self {
        Self {
            meta: node.meta.clone(),
            content: node.content.clone(),
            pos: 0,
            closed: false,
        }
    }
}

impl VfsFile for MemFile {
    fn read(&mut self, buf: &mut [u8]) -> VfsResult<usize> {
        if self.closed {
            return Err(VfsError::Closed);
        }
        let n = buf.len().min(self.content.len() - self.pos);
        buf[..n].copy_from_slice(&self.content[self.pos..self.pos + n]);
        self.pos += n;
        Ok(n)
    }

    fn stat(&self) -> VfsResult<Metadata> {
        if self.closed {
            return Err(VfsError::Closed);
        }
        let mut meta = self.meta.clone();
        meta.size = self.content.len() as u64;
        Ok(meta)
    }

    fn close(&mut self) -> VfsResult<()> {
        if self.closed {
            return Err(VfsError::Closed);
        }
        self.closed = true;
        Ok(())
    }
}

/// Enumeration handle sharing the canonical directory node.
///
/// The child-name list is snapshotted on the first `read_dir` call and
/// consumed batch by batch; each batch re-resolves names against the live
/// child map, skipping names that have vanished since the snapshot.
#[derive(Debug)]
pub(super) struct MemDir {
    node: DirNode,
    names: Option<Vec<String>>,
    closed: bool,
}

impl MemDir {
    pub fn new(node: DirNode) -> Self {
        Self {
            node,
            names: None,
            closed: false,
        }
    }
}

impl VfsFile for MemDir {
    fn read(&mut self, _buf: &mut [u8]) -> VfsResult<usize> {
        // directories are not byte-readable, closed or not
        Err(VfsError::IsADirectory(self.node.meta().name.clone()))
    }

    fn stat(&self) -> VfsResult<Metadata> {
        if self.closed {
            return Err(VfsError::Closed);
        }
        Ok(self.node.meta().clone())
    }

    fn close(&mut self) -> VfsResult<()> {
        if self.closed {
            return Err(VfsError::Closed);
        }
        self.closed = true;
        Ok(())
    }
}

impl VfsDir for MemDir {
    fn read_dir(&mut self, n: isize) -> VfsResult<Vec<DirEntry>> {
        if self.closed {
            return Err(VfsError::Closed);
        }

        let names = self.names.get_or_insert_with(|| self.node.child_names());
        let take = if n <= 0 {
            names.len()
        } else {
            (n as usize).min(names.len())
        };

        let children = self.node.children();
        let entries = names
            .drain(..take)
            .filter_map(|name| children.get(&name).map(|child| child.entry()))
            .collect();
        Ok(entries)
    }
}
