use coffer::{FileType, Handle, MemFs, Metadata, VfsError, VfsResult, read_file, walk_dir};

fn collect_paths(fs: &MemFs) -> VfsResult<Vec<(String, FileType)>> {
    let mut paths = Vec::new();
    walk_dir(fs, ".", &mut |path, entry| {
        paths.push((path.to_string(), entry.file_type()));
        Ok(())
    })?;
    Ok(paths)
}

#[test]
fn test_walk_and_read_scenario() -> VfsResult<()> {
    let fs = MemFs::new();
    fs.mkdir_all("dir1/dir2")?;
    fs.write_file("dir1/dir2/f1.txt", b"incinerating-unsubstantial")?;

    let paths = collect_paths(&fs)?;
    assert_eq!(
        paths,
        vec![
            (".".to_string(), FileType::Dir),
            ("dir1".to_string(), FileType::Dir),
            ("dir1/dir2".to_string(), FileType::Dir),
            ("dir1/dir2/f1.txt".to_string(), FileType::File),
        ]
    );

    let content = read_file(&fs, "dir1/dir2/f1.txt")?;
    assert_eq!(content, b"incinerating-unsubstantial");
    Ok(())
}

#[test]
fn test_mkdir_walk_then_write() -> VfsResult<()> {
    let fs = MemFs::new();
    fs.mkdir_all("foo/bar")?;

    let paths = collect_paths(&fs)?;
    assert_eq!(
        paths,
        vec![
            (".".to_string(), FileType::Dir),
            ("foo".to_string(), FileType::Dir),
            ("foo/bar".to_string(), FileType::Dir),
        ]
    );

    // writing below a directory that was never created is rejected
    let err = fs.write_file("foo/baz/buz.txt", b"buz").unwrap_err();
    assert!(matches!(err, VfsError::NotExist { .. }));
    let err = read_file(&fs, "foo/baz/buz.txt").unwrap_err();
    assert!(matches!(err, VfsError::NotExist { .. }));

    fs.write_file("foo/bar/baz.txt", b"baz")?;
    assert_eq!(read_file(&fs, "foo/bar/baz.txt")?, b"baz");
    Ok(())
}

#[test]
fn test_traversal_completeness() -> VfsResult<()> {
    let fs = MemFs::new();
    fs.mkdir_all("a/b")?;
    fs.mkdir_all("a/c")?;
    fs.mkdir_all("d")?;
    fs.write_file("a/b/f1", b"1")?;
    fs.write_file("a/f2", b"2")?;
    fs.write_file("d/f3", b"3")?;
    fs.write_file("top.txt", b"4")?;

    let paths = collect_paths(&fs)?;
    let names: Vec<&str> = paths.iter().map(|(p, _)| p.as_str()).collect();

    // every created node exactly once
    let mut sorted = names.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), names.len());
    for expected in [".", "a", "a/b", "a/b/f1", "a/c", "a/f2", "d", "d/f3", "top.txt"] {
        assert!(names.contains(&expected), "missing {expected}");
    }

    // a directory is visited before anything inside it
    for (i, (path, _)) in paths.iter().enumerate() {
        if let Some((parent, _)) = path.rsplit_once('/') {
            let at = names.iter().position(|p| *p == parent).unwrap();
            assert!(at < i, "{parent} visited after {path}");
        } else if path != "." {
            assert_eq!(names[0], ".");
        }
    }
    Ok(())
}

#[test]
fn test_walk_visitor_error_aborts() {
    let fs = MemFs::new();
    fs.mkdir_all("a/b").unwrap();

    let mut visited = Vec::new();
    let err = walk_dir(&fs, ".", &mut |path, _| {
        visited.push(path.to_string());
        if path == "a" {
            return Err(VfsError::Closed);
        }
        Ok(())
    })
    .unwrap_err();

    assert_eq!(err, VfsError::Closed);
    assert_eq!(visited, [".", "a"]);
}

#[test]
fn test_walk_single_file_root() -> VfsResult<()> {
    let fs = MemFs::new();
    fs.write_file("only.txt", b"x")?;

    let mut paths = Vec::new();
    walk_dir(&fs, "only.txt", &mut |path, entry| {
        paths.push((path.to_string(), entry.file_type()));
        Ok(())
    })?;
    assert_eq!(paths, vec![("only.txt".to_string(), FileType::File)]);
    Ok(())
}

#[test]
fn test_read_file_on_directory() {
    let fs = MemFs::new();
    fs.mkdir_all("d").unwrap();
    let err = read_file(&fs, "d").unwrap_err();
    assert_eq!(err, VfsError::IsADirectory("d".to_string()));
}

#[test]
fn test_metadata_json_round_trip() -> VfsResult<()> {
    let fs = MemFs::new();
    fs.write_file("f.txt", b"payload")?;

    let handle = fs.open("f.txt")?;
    let meta = handle.stat()?;

    let json = serde_json::to_string(&meta).unwrap();
    let back: Metadata = serde_json::from_str(&json).unwrap();

    assert_eq!(back.name, meta.name);
    assert_eq!(back.size, meta.size);
    assert_eq!(back.mode, meta.mode);
    assert_eq!(back.modified, meta.modified);
    Ok(())
}

#[test]
fn test_error_display() {
    let fs = MemFs::new();
    let err = fs.open("missing").unwrap_err();
    assert_eq!(err.to_string(), "open missing: file does not exist");

    let err = fs.write_file("/abs", b"x").unwrap_err();
    assert_eq!(err.to_string(), "write /abs: invalid argument");

    assert_eq!(VfsError::Closed.to_string(), "file already closed");
}

#[test]
fn test_handle_variants() {
    let fs = MemFs::new();
    fs.mkdir_all("d").unwrap();
    fs.write_file("d/f", b"x").unwrap();

    assert!(matches!(fs.open("d").unwrap(), Handle::Dir(_)));
    assert!(matches!(fs.open("d/f").unwrap(), Handle::File(_)));
}
