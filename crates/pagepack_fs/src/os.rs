use std::io;
use std::path::{Path, PathBuf};

use crate::file_system::FileSystem;

/// [`FileSystem`] backed by the host operating system.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl FileSystem for OsFileSystem {
  fn canonicalize(&self, path: &Path) -> io::Result<PathBuf> {
    dunce::canonicalize(path)
  }

  fn is_dir(&self, path: &Path) -> bool {
    path.is_dir()
  }

  fn read_to_string(&self, path: &Path) -> io::Result<String> {
    std::fs::read_to_string(path)
  }

  fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in walkdir::WalkDir::new(root) {
      let entry = entry.map_err(io::Error::from)?;
      if entry.file_type().is_file() {
        files.push(entry.into_path());
      }
    }
    Ok(files)
  }
}

#[test]
fn test_walk_files_recurses() {
  let dir = tempfile::tempdir().unwrap();
  std::fs::create_dir_all(dir.path().join("a/b")).unwrap();
  std::fs::write(dir.path().join("a/b/c.html"), "<html></html>").unwrap();
  std::fs::write(dir.path().join("top.html"), "<html></html>").unwrap();

  let files = OsFileSystem.walk_files(dir.path()).unwrap();
  assert_eq!(files.len(), 2);
  assert!(files.iter().all(|file| file.is_file()));
}

#[test]
fn test_walk_files_missing_root_errors() {
  let dir = tempfile::tempdir().unwrap();
  assert!(OsFileSystem.walk_files(&dir.path().join("absent")).is_err());
}
