use std::io;
use std::path::{Path, PathBuf};

/// The file-system surface configuration resolution needs. Everything is
/// synchronous and read-only; resolution is a one-shot startup computation
/// that never writes.
pub trait FileSystem {
  /// Canonical absolute form of `path`.
  fn canonicalize(&self, path: &Path) -> io::Result<PathBuf>;

  /// Whether `path` exists and is a directory.
  fn is_dir(&self, path: &Path) -> bool;

  /// Entire file content as UTF-8.
  fn read_to_string(&self, path: &Path) -> io::Result<String>;

  /// Recursively enumerates every regular file under `root`. No ordering is
  /// guaranteed; callers must not depend on traversal order.
  fn walk_files(&self, root: &Path) -> io::Result<Vec<PathBuf>>;
}
