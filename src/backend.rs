use crate::error::VfsResult;
use crate::types::{DirEntry, FileType, Metadata};

/// An open handle on a file.
///
/// File handles own a private copy of the content with a read cursor; the
/// canonical node is never aliased. Every operation after `close` fails
/// with `VfsError::Closed`, except that byte-reads on directory handles
/// report `IsADirectory` unconditionally.
pub trait VfsFile {
    /// Copy sequential bytes into `buf`, advancing the cursor. Returns
    /// `Ok(0)` once the content is exhausted.
    fn read(&mut self, buf: &mut [u8]) -> VfsResult<usize>;

    /// Current metadata. File sizes reflect the handle's own buffer, so
    /// writes to the canonical node after open are never observed here.
    fn stat(&self) -> VfsResult<Metadata>;

    /// Mark the handle closed. Closing twice is an error.
    fn close(&mut self) -> VfsResult<()>;
}

/// An open handle on a directory: a `VfsFile` that can also enumerate its
/// children in batches.
pub trait VfsDir: VfsFile {
    /// Return up to `n` entries (`n <= 0` means all remaining). The child
    /// name list is snapshotted on the first call; once it is consumed,
    /// every later call returns an empty batch with no error.
    fn read_dir(&mut self, n: isize) -> VfsResult<Vec<DirEntry>>;
}

/// Result of `Vfs::open`: a file or a directory handle. The two-variant
/// split is closed; callers match exhaustively and reach `read_dir`
/// through the `Dir` variant.
pub enum Handle {
    File(Box<dyn VfsFile>),
    Dir(Box<dyn VfsDir>),
}

impl std::fmt::Debug for Handle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Handle::File(_) => f.write_str("Handle::File"),
            Handle::Dir(_) => f.write_str("Handle::Dir"),
        }
    }
}

impl Handle {
    pub fn file_type(&self) -> FileType {
        match self {
            Handle::File(_) => FileType::File,
            Handle::Dir(_) => FileType::Dir,
        }
    }

    pub fn read(&mut self, buf: &mut [u8]) -> VfsResult<usize> {
        match self {
            Handle::File(f) => f.read(buf),
            Handle::Dir(d) => d.read(buf),
        }
    }

    pub fn stat(&self) -> VfsResult<Metadata> {
        match self {
            Handle::File(f) => f.stat(),
            Handle::Dir(d) => d.stat(),
        }
    }

    pub fn close(&mut self) -> VfsResult<()> {
        match self {
            Handle::File(f) => f.close(),
            Handle::Dir(d) => d.close(),
        }
    }
}

/// The uniform read-oriented filesystem contract.
///
/// Opening is the only capability generic consumers need: enumeration and
/// byte reads hang off the returned handle. Mutating operations stay on
/// the concrete filesystem type.
pub trait Vfs {
    fn open(&self, path: &str) -> VfsResult<Handle>;
}
