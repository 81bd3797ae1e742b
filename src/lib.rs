//! coffer: a minimal in-memory hierarchical filesystem behind a uniform,
//! read-oriented VFS contract.
//!
//! The tree lives entirely in process memory: directories own name-keyed
//! child maps, files own buffered byte payloads. `MemFs` exposes `open`,
//! `mkdir_all` and `write_file`; the `Vfs` trait plus the `walk_dir` /
//! `read_file` helpers give callers whole-tree traversal and whole-file
//! reads without touching a real disk.

pub mod backend;
pub mod backends;
pub mod error;
pub mod path;
pub mod types;
pub mod walk;

// Re-export
pub use backend::*;
pub use backends::memory::MemFs;
pub use error::{VfsError, VfsResult};
pub use path::is_valid_path;
pub use types::*;
pub use walk::{read_file, walk_dir};
