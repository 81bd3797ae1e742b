//! Generic helpers layered on the `Vfs` contract: recursive traversal and
//! whole-file reads. Everything here goes through `open` and the handle
//! operations only, so any conforming backend works unmodified.

use crate::backend::{Handle, Vfs, VfsDir, VfsFile};
use crate::error::{VfsError, VfsResult};
use crate::types::DirEntry;

/// Walk the tree rooted at `root`, invoking `visit` with the path and entry
/// of the root and of every descendant, each exactly once.
///
/// A directory is visited before its contents; within a directory, children
/// are visited in name order. An error from `visit` aborts the walk.
pub fn walk_dir<F, V>(fs: &F, root: &str, visit: &mut V) -> VfsResult<()>
where
    F: Vfs + ?Sized,
    V: FnMut(&str, &DirEntry) -> VfsResult<()>,
{
    let mut handle = fs.open(root)?;
    let meta = handle.stat()?;
    handle.close()?;

    let entry = DirEntry::new(meta);
    visit(root, &entry)?;
    if entry.is_dir() {
        walk_children(fs, root, visit)?;
    }
    Ok(())
}

fn walk_children<F, V>(fs: &F, dir: &str, visit: &mut V) -> VfsResult<()>
where
    F: Vfs + ?Sized,
    V: FnMut(&str, &DirEntry) -> VfsResult<()>,
{
    let mut entries = match fs.open(dir)? {
        Handle::Dir(mut d) => {
            let entries = d.read_dir(-1)?;
            d.close()?;
            entries
        }
        Handle::File(_) => return Err(VfsError::NotADirectory(dir.to_string())),
    };
    entries.sort_by(|a, b| a.name().cmp(b.name()));

    for entry in &entries {
        let path = join(dir, entry.name());
        visit(&path, entry)?;
        if entry.is_dir() {
            walk_children(fs, &path, visit)?;
        }
    }
    Ok(())
}

/// Read the whole content of the file at `path`.
pub fn read_file<F>(fs: &F, path: &str) -> VfsResult<Vec<u8>>
where
    F: Vfs + ?Sized,
{
    let mut file = match fs.open(path)? {
        Handle::File(f) => f,
        Handle::Dir(_) => return Err(VfsError::IsADirectory(path.to_string())),
    };

    let size = file.stat()?.size as usize;
    let mut content = Vec::with_capacity(size);
    let mut buf = [0u8; 4096];
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        content.extend_from_slice(&buf[..n]);
    }

    file.close()?;
    Ok(content)
}

fn join(dir: &str, name: &str) -> String {
    if dir == "." {
        name.to_string()
    } else {
        format!("{}/{}", dir, name)
    }
}
