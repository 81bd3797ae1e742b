//! Core types for the VFS: file modes, metadata records, and directory entries.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Enum for distinguishing file types at runtime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FileType {
    File,
    Dir,
}

/// Mode bits for a node: a directory discriminant in the high bit plus
/// permission-like low bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileMode(pub u32);

impl FileMode {
    pub const DIR: u32 = 1 << 31;

    pub fn new_file(perm: u32) -> Self {
        Self(perm)
    }
    pub fn new_dir(perm: u32) -> Self {
        Self(Self::DIR | perm)
    }
    pub fn is_dir(self) -> bool {
        self.0 & Self::DIR != 0
    }
    pub fn file_type(self) -> FileType {
        if self.is_dir() {
            FileType::Dir
        } else {
            FileType::File
        }
    }
    pub fn perm(self) -> u32 {
        self.0 & 0o777
    }
}

/// Metadata record for one node.
///
/// `size` is always 0 for directories. `modified` is assigned when the node
/// is created and never updated in place; overwriting a file replaces the
/// whole node, metadata included.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub name: String,
    pub size: u64,
    pub mode: FileMode,
    pub modified: SystemTime,
}

impl Metadata {
    pub fn file(name: impl Into<String>, size: u64) -> Self {
        Self {
            name: name.into(),
            size,
            mode: FileMode::new_file(0o644),
            modified: SystemTime::now(),
        }
    }

    pub fn dir(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            size: 0,
            mode: FileMode::new_dir(0o644),
            modified: SystemTime::now(),
        }
    }

    pub fn is_dir(&self) -> bool {
        self.mode.is_dir()
    }
    pub fn file_type(&self) -> FileType {
        self.mode.file_type()
    }
}

/// A single entry in a directory listing: the node's kind plus access to
/// its metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirEntry {
    meta: Metadata,
}

impl DirEntry {
    pub fn new(meta: Metadata) -> Self {
        Self { meta }
    }

    pub fn name(&self) -> &str {
        &self.meta.name
    }

    pub fn is_dir(&self) -> bool {
        self.meta.is_dir()
    }

    pub fn file_type(&self) -> FileType {
        self.meta.file_type()
    }

    /// The underlying metadata record.
    pub fn info(&self) -> Metadata {
        self.meta.clone()
    }
}
